use sea_orm::prelude::Json;
use serde::{Serialize, de::DeserializeOwned};

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A free-form structured column value.
///
/// Seat assignments, designer approvals, promo codes and check data are
/// stored as JSON (or JSON-compatible text) whose shape is owned by the
/// callers. Nothing about the shape is assumed until a caller asks for a
/// concrete type with [`Payload::decode`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Payload {
    #[default]
    Absent,
    Json(Json),
}

impl Payload {
    /// Wraps a native JSON column. SQL `NULL` and JSON `null` are both absent.
    pub fn from_json(value: Option<Json>) -> Self {
        match value {
            None | Some(Json::Null) => Payload::Absent,
            Some(value) => Payload::Json(value),
        }
    }

    /// Parses a text column holding serialized JSON.
    pub fn parse(text: Option<&str>) -> Result<Self, PayloadError> {
        match text.map(str::trim) {
            None | Some("") => Ok(Payload::Absent),
            Some(text) => Ok(Self::from_json(Some(serde_json::from_str(text)?))),
        }
    }

    pub fn encode<T: Serialize>(value: &T) -> Result<Self, PayloadError> {
        Ok(Self::from_json(Some(serde_json::to_value(value)?)))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Payload::Absent)
    }

    pub fn get(&self, key: &str) -> Option<&Json> {
        match self {
            Payload::Absent => None,
            Payload::Json(value) => value.get(key),
        }
    }

    pub fn decode<T: DeserializeOwned>(&self) -> Result<Option<T>, PayloadError> {
        match self {
            Payload::Absent => Ok(None),
            Payload::Json(value) => Ok(Some(T::deserialize(value)?)),
        }
    }

    /// Value for a native JSON column.
    pub fn to_column(&self) -> Option<Json> {
        match self {
            Payload::Absent => None,
            Payload::Json(value) => Some(value.clone()),
        }
    }

    /// Value for a text column.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Payload::Absent => None,
            Payload::Json(value) => Some(value.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn test_absent_values() {
        assert!(Payload::parse(None).unwrap().is_absent());
        assert!(Payload::parse(Some("  ")).unwrap().is_absent());
        assert!(Payload::parse(Some("null")).unwrap().is_absent());
        assert!(Payload::from_json(Some(Json::Null)).is_absent());
        assert_eq!(Payload::Absent.to_text(), None);
    }

    #[test]
    fn test_text_column_round_trip() {
        let seat = r#"{"block":3,"row":"B","seat":12}"#;
        let payload = Payload::parse(Some(seat)).unwrap();

        assert_eq!(payload.get("row"), Some(&json!("B")));
        let reparsed = Payload::parse(payload.to_text().as_deref()).unwrap();
        assert_eq!(reparsed, payload);
    }

    #[test]
    fn test_malformed_text_is_an_error() {
        let result = Payload::parse(Some("{not json"));
        assert!(matches!(result, Err(PayloadError::Malformed(_))));
    }

    #[test]
    fn test_decode_into_caller_shape() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct PromoCode {
            code: String,
            discount: u32,
        }

        let payload = Payload::from_json(Some(json!([
            {"code": "PRESS24", "discount": 100},
            {"code": "VIP", "discount": 50}
        ])));
        let codes: Vec<PromoCode> = payload.decode().unwrap().unwrap();
        assert_eq!(codes.len(), 2);
        assert_eq!(codes[1].code, "VIP");

        // A shape the caller did not expect is reported, not assumed
        let wrong: Result<Option<PromoCode>, _> = payload.decode();
        assert!(wrong.is_err());
    }
}
