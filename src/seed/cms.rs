use sea_orm::{
    ActiveValue::Set, ConnectionTrait, DatabaseBackend, DatabaseConnection, EntityTrait, Statement,
    prelude::Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};

use super::SeedError;
use crate::entities::cms;

/// Copy for the `header` page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderCopy {
    pub image: String,
    pub list1: String,
    pub list1_url: String,
    pub list2: String,
    pub list2_url: String,
}

const BOOKING_MESSAGE: &str = "We sincerely appreciate your registration for Dubai Fashion Week, SS24, taking place from October 8th to 15th, 2023. This prestigious event is founded by Dubai Design District (d3) and the Arab Fashion Council.  \n\n Your application has been received by our protocol team and will undergo review within the next five working days. \n\n Kindly anticipate emails from 'ohvu.io.' We recommend regular email monitoring, including your spam/junk folder, and staying vigilant on WhatsApp for updates. \n\n Thank you for choosing to attend Dubai Fashion Week SS24. We look forward to welcoming you.";

const DESIGNER_BOOKING_MESSAGE: &str = "We sincerely appreciate your registration for Dubai Fashion Week, SS24, taking place from October 8th to 15th, 2023. This prestigious event is founded by Dubai Design District (d3) and the Arab Fashion Council.  \n\n Your application has been received by our protocol team and will undergo review within the next five working days. \n\n Kindly anticipate emails from 'ohvu.io.' We recommend regular email monitoring, including your spam/junk folder, and staying vigilant on WhatsApp for updates. \n\n To register with additional designers, utilize 'dfw.ohvu.io.' \n\n Thank you for choosing to attend Dubai Fashion Week SS24. We look forward to welcoming you.";

const WELCOME: &str = "Welcome to the registration portal for Dubai Fashion Week, SS24 08-15 October 2023, founded by Dubai Design District and Arab Fashion Council";

const PHONE_PROMPT: &str =
    "To start the process please type your mobile number and make sure you choose the correct country.";

/// Page slug and copy for every CMS page, in insertion order.
pub fn pages() -> Vec<(&'static str, Json)> {
    vec![
        (
            "step-1",
            json!({
                "heading_one": WELCOME,
                "step_title": "STEP 1/6",
                "heading_two": PHONE_PROMPT,
            }),
        ),
        (
            "step-1-simplified",
            json!({
                "heading_one": WELCOME,
                "step_title": "STEP 1/6",
                "heading_two": PHONE_PROMPT,
            }),
        ),
        (
            "step-2",
            json!({
                "heading_one": "Is your WhatsApp number the same as your mobile number?",
                "step_title": "STEP 2/6",
                "heading_two": "If the answer is No, please insert below your WhatsApp number",
            }),
        ),
        (
            "step-3",
            json!({
                "heading_one": "Please type your email address",
                "step_title": "STEP 3/6",
            }),
        ),
        (
            "step-4",
            json!({
                "heading_one": "Please select your profile category*",
                "step_title": "STEP 4/6",
            }),
        ),
        (
            "step-5",
            json!({
                "step_title": "STEP 5/6",
                "field_1": "First Name",
                "field_2": "Last Name",
                "field_3": "Email",
                "field_4": "Phone",
                "field_5": "Company, you represent",
                "field_6": "Link to one article you have written",
                "field_7": "Work e-mail address",
                "field_8": "Please insert at least your LinkedIn or Instagram link",
                "field_9": "linkedin",
                "field_10": " Instagram",
                "field_11": "Invitation Code (Leave it blank if you haven’t received an invitation code)",
                "field_12": "Store, you represent (If more than one store please insert comma (,) between each store",
                "field_13": "Work e-mail address, if different from the above",
                "field_14": "Which category you are interested in?",
                "field_15": "Link to your portfolio or website",
                "field_16": "What type of photography you practice?",
            }),
        ),
        (
            "step-6",
            json!({
                "heading_one": "Now select the shows or events you’d like to attend.",
                "step_title": "STEP 6/6",
            }),
        ),
        (
            "header",
            json!({
                "image": "uploads/cms/DFW-LOGO-WEB.png",
                "list1": "HOME",
                "list1_url": "https://dubaifashionweek.org/",
                "list2": "CALENDAR",
                "list2_url": "https://dubaifashionweek.org/calendar/",
            }),
        ),
        ("footer", footer()),
        (
            "messages",
            json!({
                "booking_message": BOOKING_MESSAGE,
                "designer_booking_message": DESIGNER_BOOKING_MESSAGE,
            }),
        ),
        ("email-templates", email_templates()),
    ]
}

fn footer() -> Json {
    let links = [
        ("About", "https://dubaifashionweek.org/about"),
        ("Contact", "https://dubaifashionweek.org/contact-us"),
        ("Buyers&Press", "https://dubaifashionweek.org/registration/"),
        ("Partners", "https://dubaifashionweek.org/sponsors/"),
        ("Sponsors Applications", "https://dubaifashionweek.org/sponsors-apply-now/"),
        ("Designers Applications", "https://dubaifashionweek.org/designers-application/"),
        ("Privacy Policy", "https://dubaifashionweek.org/privacy-policy/"),
        ("Terms & Conditions", "https://dubaifashionweek.org/terms-of-use/"),
        ("© Dubai Fashion Week 2023", "https://dubaifashionweek.org/"),
    ];

    let mut footer = json!({
        "heading_one": "Keep IN TOUCH",
        "instagram_url": "https://www.instagram.com/dubaifashionweek/",
        "facebook_url": "https://www.facebook.com/ArabFashionWeek/",
        "twitter_url": "https://twitter.com/dubaifashionweek",
        "youtube_url": "https://www.youtube.com/c/ArabfashionweekOrg",
        "linkedin_url": "https://www.linkedin.com/company/arab-fashion-week/",
        "bg_color": "#0406f0",
        "footer_banner": [
            {"image": "uploads/cms/DFW-LOGO-WEB.png", "url": "https://arabfashioncouncil.com/"}
        ],
    });

    if let Some(object) = footer.as_object_mut() {
        for (n, (label, url)) in links.iter().enumerate() {
            object.insert(format!("list_{}", n + 1), json!(label));
            object.insert(format!("list_{}_url", n + 1), json!(url));
        }
    }
    footer
}

fn email_templates() -> Json {
    json!({
        "temp1": {
            "bg_image": "uploads/templates/temp1bg.jpg",
            "footer_image": "uploads/templates/temp1footer.jpg",
            "text1": "VIP",
            "text2": "NAME:",
            "text3": "BOOKED SHOWS",
        },
        "temp2": {
            "bg_image": "uploads/templates/mrskeepaticketbg.png",
            "text1": "CONFIRMATION TICKET",
            "text2": "celeberating the official launch of<br> mrs.keep studio",
            "text3": "monday february 5th <br>1:00PM <br>sothebys gallery, difc",
            "text4": "please present this ticket <br> at check-in desk",
            "text5": "Dubai fashion week",
        },
        "temp3": {
            "image_one": "uploads/templates/venuecard3.png",
            "image_two": "uploads/templates/logodubf.png",
            "text1": "CONFIRMATION TICKET",
            "text2": "META & THE ARAB FASHION COUNCIL",
            "text3": "ARE LOOKING FORWARD TO WELCOMING YOU AT THE",
            "text4": "DURING",
            "text5": "13th october 2023 | 10.00 am - 12.00 am",
            "text6": "main dfw venue blog 11, <br> dubai design ditrict (d3)",
        },
        "temp4": {
            "bg_image": "uploads/templates/zeenaZaki.png",
        },
    })
}

/// Replaces the CMS table with the default page copy.
///
/// The id counter is reset along with the rows, so a reseed numbers the
/// pages the same way a fresh database does.
pub async fn seed(db: &DatabaseConnection) -> Result<(), SeedError> {
    truncate(db).await?;

    let pages = pages();
    let count = pages.len();
    for (page, data) in pages {
        let page_model = cms::ActiveModel {
            page: Set(page.to_string()),
            data: Set(Some(data)),
            ..Default::default()
        };
        cms::Entity::insert(page_model)
            .exec(db)
            .await
            .map_err(SeedError::on_insert("cms"))?;
    }
    info!("Created {} CMS pages", count);

    Ok(())
}

async fn truncate(db: &DatabaseConnection) -> Result<(), SeedError> {
    let backend = db.get_database_backend();
    let statements: &[&str] = match backend {
        DatabaseBackend::Postgres => &["TRUNCATE TABLE cms RESTART IDENTITY"],
        DatabaseBackend::MySql => &["TRUNCATE TABLE cms"],
        DatabaseBackend::Sqlite => &[
            "DELETE FROM cms",
            "DELETE FROM sqlite_sequence WHERE name = 'cms'",
        ],
    };
    for sql in statements {
        db.execute(Statement::from_string(backend, *sql)).await?;
    }
    debug!("Cleared CMS pages");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::Payload;

    fn page(slug: &str) -> Json {
        pages()
            .into_iter()
            .find(|(page, _)| *page == slug)
            .map(|(_, data)| data)
            .unwrap()
    }

    #[test]
    fn test_every_page_is_present_once() {
        let slugs: Vec<&str> = pages().iter().map(|(page, _)| *page).collect();
        assert_eq!(
            slugs,
            vec![
                "step-1",
                "step-1-simplified",
                "step-2",
                "step-3",
                "step-4",
                "step-5",
                "step-6",
                "header",
                "footer",
                "messages",
                "email-templates",
            ]
        );
    }

    #[test]
    fn test_header_decodes() {
        let header: HeaderCopy = Payload::from_json(Some(page("header")))
            .decode()
            .unwrap()
            .unwrap();
        assert_eq!(header.list2, "CALENDAR");
        assert_eq!(serde_json::to_value(&header).unwrap(), page("header"));
    }

    #[test]
    fn test_footer_links() {
        let footer = page("footer");
        assert_eq!(footer["list_1"], "About");
        assert_eq!(footer["list_9"], "© Dubai Fashion Week 2023");
        assert_eq!(footer["list_9_url"], "https://dubaifashionweek.org/");
        assert_eq!(footer["footer_banner"][0]["url"], "https://arabfashioncouncil.com/");
        assert!(footer.get("list_10").is_none());
    }
}
