use std::env;

use anyhow::Context;

use crate::seed::{BootstrapAdmin, bootstrap::DEFAULT_ADMIN_EMAIL};

#[derive(Clone, Debug, Default)]
pub struct MailgunConfig {
    pub domain: Option<String>,
    pub secret: Option<String>,
    pub endpoint: String,
}

#[derive(Clone, Debug, Default)]
pub struct SesConfig {
    pub key: Option<String>,
    pub secret: Option<String>,
    pub region: String,
}

#[derive(Clone, Debug, Default)]
pub struct TwilioConfig {
    pub sid: Option<String>,
    pub auth_token: Option<String>,
    pub whatsapp_from: Option<String>,
    pub content_sid: Option<String>,
    pub content_api_url: Option<String>,
    pub service_id: Option<String>,
}

/// Credentials for the delivery services the admin backend talks to.
/// They are carried as opaque values and never validated here.
#[derive(Clone, Debug, Default)]
pub struct ServicesConfig {
    pub mailgun: MailgunConfig,
    pub postmark_token: Option<String>,
    pub ses: SesConfig,
    pub twilio: TwilioConfig,
}

impl ServicesConfig {
    /// Names of the services that have credentials set.
    pub fn configured(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.mailgun.secret.is_some() {
            names.push("mailgun");
        }
        if self.postmark_token.is_some() {
            names.push("postmark");
        }
        if self.ses.key.is_some() && self.ses.secret.is_some() {
            names.push("ses");
        }
        if self.twilio.sid.is_some() && self.twilio.auth_token.is_some() {
            names.push("twilio");
        }
        names
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
    pub seed_admin_email: String,
    pub seed_admin_password: Option<String>,
    pub services: ServicesConfig,
}

impl Config {
    /// Reads the process environment, after loading `.env` if one exists.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL is not set")?;
        let rust_log = lookup("RUST_LOG").unwrap_or_else(|| "info".into());
        let seed_admin_email =
            lookup("SEED_ADMIN_EMAIL").unwrap_or_else(|| DEFAULT_ADMIN_EMAIL.into());
        let seed_admin_password = lookup("SEED_ADMIN_PASSWORD");

        let services = ServicesConfig {
            mailgun: MailgunConfig {
                domain: lookup("MAILGUN_DOMAIN"),
                secret: lookup("MAILGUN_SECRET"),
                endpoint: lookup("MAILGUN_ENDPOINT").unwrap_or_else(|| "api.mailgun.net".into()),
            },
            postmark_token: lookup("POSTMARK_TOKEN"),
            ses: SesConfig {
                key: lookup("AWS_ACCESS_KEY_ID"),
                secret: lookup("AWS_SECRET_ACCESS_KEY"),
                region: lookup("AWS_DEFAULT_REGION").unwrap_or_else(|| "us-east-1".into()),
            },
            twilio: TwilioConfig {
                sid: lookup("TWILIO_SID"),
                auth_token: lookup("TWILIO_AUTH_TOKEN"),
                whatsapp_from: lookup("TWILIO_WHATSAPP_FROM"),
                content_sid: lookup("TWILIO_CONTENT_SID"),
                content_api_url: lookup("TWILIO_CONTENT_API_URL"),
                // Deployed environments already use this spelling
                service_id: lookup("TWILIO_SEVICE_ID"),
            },
        };

        Ok(Self {
            database_url,
            rust_log,
            seed_admin_email,
            seed_admin_password,
            services,
        })
    }

    /// The administrator account to create when seeding everything.
    pub fn bootstrap_admin(&self) -> anyhow::Result<BootstrapAdmin> {
        let password = self
            .seed_admin_password
            .clone()
            .context("SEED_ADMIN_PASSWORD must be set to seed the admin user")?;
        Ok(BootstrapAdmin {
            email: self.seed_admin_email.clone(),
            password,
        })
    }
}
