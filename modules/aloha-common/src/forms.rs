//! Submitted dashboard forms and the checks they must pass before a request
//! is sent to the backend.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
use content_api_client::{
    Audience, CreateClientData, GenerateScriptData, NewKeyword, NewLocation, Platform,
    PlatformConnectData, ScheduleRequest, ScriptAudience, Tier,
};
use serde::Deserialize;
use thiserror::Error;

pub const INDUSTRIES: &[&str] = &[
    "restaurant",
    "spa_wellness",
    "retail",
    "hospitality",
    "fitness",
    "beauty_salon",
    "automotive",
    "real_estate",
    "healthcare",
    "professional_services",
    "tourism",
    "food_truck",
    "cafe",
    "bar_nightclub",
    "other",
];

pub const ISLANDS: &[&str] = &["Oahu", "Maui", "Big Island", "Kauai", "Molokai", "Lanai"];

pub const CONTENT_TYPES: &[(&str, &str)] = &[
    ("promotional", "Promotional"),
    ("educational", "Educational"),
    ("behind_the_scenes", "Behind the Scenes"),
    ("testimonial", "Testimonial"),
    ("tutorial", "Tutorial"),
    ("announcement", "Announcement"),
];

/// Render statuses offered by the content filter.
pub const RENDER_STATUSES: &[(&str, &str)] = &[
    ("pending", "Pending"),
    ("processing", "Processing"),
    ("completed", "Completed"),
    ("approved", "Approved"),
    ("failed", "Failed"),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Business name is required")]
    BusinessNameRequired,

    #[error("Industry is required")]
    IndustryRequired,

    #[error("Client and keyword are required")]
    ClientAndKeywordRequired,

    #[error("Select at least one platform")]
    NoPlatforms,

    #[error("Date is required")]
    DateRequired,

    #[error("Invalid {field}: {value}")]
    Invalid { field: &'static str, value: String },

    #[error("Keyword is required")]
    KeywordRequired,

    #[error("Platform, account name and access token are required")]
    PlatformFieldsRequired,
}

fn invalid(field: &'static str, value: &str) -> ValidationError {
    ValidationError::Invalid {
        field,
        value: value.to_string(),
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

// --- New client ---

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NewClientForm {
    pub business_name: String,
    pub industry: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub website: Option<String>,
    pub island: String,
    pub neighborhood: String,
    pub primary_audience: String,
    pub tier: String,
    pub monthly_fee: String,
}

impl Default for NewClientForm {
    fn default() -> Self {
        Self {
            business_name: String::new(),
            industry: "restaurant".to_string(),
            contact_name: String::new(),
            contact_email: String::new(),
            contact_phone: None,
            website: None,
            island: "Oahu".to_string(),
            neighborhood: String::new(),
            primary_audience: Audience::Local.as_str().to_string(),
            tier: Tier::Starter.as_str().to_string(),
            monthly_fee: "500".to_string(),
        }
    }
}

impl NewClientForm {
    pub fn validate(&self) -> Result<CreateClientData, ValidationError> {
        let business_name = self.business_name.trim();
        if business_name.is_empty() {
            return Err(ValidationError::BusinessNameRequired);
        }
        let industry = self.industry.trim();
        if industry.is_empty() {
            return Err(ValidationError::IndustryRequired);
        }

        let primary_audience = if self.primary_audience.trim().is_empty() {
            Audience::Local
        } else {
            self.primary_audience
                .parse()
                .map_err(|_| invalid("audience", &self.primary_audience))?
        };
        let tier = if self.tier.trim().is_empty() {
            Tier::Starter
        } else {
            self.tier.parse().map_err(|_| invalid("tier", &self.tier))?
        };

        Ok(CreateClientData {
            business_name: business_name.to_string(),
            industry: industry.to_string(),
            contact_name: self.contact_name.trim().to_string(),
            contact_email: self.contact_email.trim().to_string(),
            contact_phone: non_empty(&self.contact_phone),
            website: non_empty(&self.website),
            primary_audience: Some(primary_audience),
            tier: Some(tier),
            // Unparseable fees are sent as 0 rather than rejected.
            monthly_fee: self.monthly_fee.trim().parse().unwrap_or(0),
            locations: vec![NewLocation {
                name: "Main".to_string(),
                island: self.island.trim().to_string(),
                neighborhood: self.neighborhood.trim().to_string(),
                address: None,
            }],
            ..Default::default()
        })
    }
}

// --- Generate script ---

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GenerateForm {
    pub client_id: String,
    pub keyword: String,
    pub content_type: String,
    pub audience_type: String,
    pub angle: Option<String>,
    /// Checkbox: present when ticked. Only a fresh form starts ticked.
    #[serde(default)]
    pub queue_voiceover: Option<String>,
}

impl Default for GenerateForm {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            keyword: String::new(),
            content_type: "promotional".to_string(),
            audience_type: ScriptAudience::Local.as_str().to_string(),
            angle: None,
            queue_voiceover: Some("on".to_string()),
        }
    }
}

impl GenerateForm {
    /// Blank form preselecting `client_id`.
    pub fn for_client(client_id: Option<&str>) -> Self {
        Self {
            client_id: client_id.unwrap_or_default().to_string(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<GenerateScriptData, ValidationError> {
        let client_id = self.client_id.trim();
        let keyword = self.keyword.trim();
        if client_id.is_empty() || keyword.is_empty() {
            return Err(ValidationError::ClientAndKeywordRequired);
        }

        let audience = if self.audience_type.trim().is_empty() {
            ScriptAudience::Local
        } else {
            self.audience_type
                .parse()
                .map_err(|_| invalid("audience", &self.audience_type))?
        };
        let content_type = match self.content_type.trim() {
            "" => "promotional".to_string(),
            other => other.to_string(),
        };

        Ok(GenerateScriptData {
            client_id: client_id.to_string(),
            keyword: keyword.to_string(),
            content_type: Some(content_type),
            audience_type: Some(audience),
            angle: non_empty(&self.angle),
            queue_voiceover: Some(self.queue_voiceover.is_some()),
        })
    }
}

// --- Schedule ---

/// One checkbox per platform since repeated form keys don't collect into a list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScheduleForm {
    pub tiktok: Option<String>,
    pub instagram: Option<String>,
    pub youtube: Option<String>,
    pub facebook: Option<String>,
    pub date: String,
    pub time: String,
}

impl ScheduleForm {
    /// TikTok and Instagram, tomorrow at noon.
    pub fn defaults(today: NaiveDate) -> Self {
        let tomorrow = today + Duration::days(1);
        Self {
            tiktok: Some("on".to_string()),
            instagram: Some("on".to_string()),
            youtube: None,
            facebook: None,
            date: tomorrow.format("%Y-%m-%d").to_string(),
            time: "12:00".to_string(),
        }
    }

    pub fn is_checked(&self, platform: Platform) -> bool {
        match platform {
            Platform::Tiktok => self.tiktok.is_some(),
            Platform::Instagram => self.instagram.is_some(),
            Platform::Youtube => self.youtube.is_some(),
            Platform::Facebook => self.facebook.is_some(),
        }
    }

    pub fn platforms(&self) -> Vec<Platform> {
        Platform::ALL
            .iter()
            .copied()
            .filter(|p| self.is_checked(*p))
            .collect()
    }

    /// Date and time are wall-clock values in `tz`; the request carries the UTC instant.
    pub fn validate(&self, tz: FixedOffset) -> Result<ScheduleRequest, ValidationError> {
        let platforms = self.platforms();
        if platforms.is_empty() {
            return Err(ValidationError::NoPlatforms);
        }
        let date = self.date.trim();
        if date.is_empty() {
            return Err(ValidationError::DateRequired);
        }

        let scheduled_for = local_instant(date, self.time.trim(), tz)?;
        Ok(ScheduleRequest {
            platforms,
            scheduled_for: Some(scheduled_for),
        })
    }
}

fn local_instant(date: &str, time: &str, tz: FixedOffset) -> Result<DateTime<Utc>, ValidationError> {
    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| invalid("date", date))?;
    let time = if time.is_empty() { "12:00" } else { time };
    let clock = NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .map_err(|_| invalid("time", time))?;
    tz.from_local_datetime(&day.and_time(clock))
        .single()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| invalid("date", date))
}

// --- Client detail forms ---

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct KeywordForm {
    pub keyword: String,
    pub category: Option<String>,
    pub priority: Option<String>,
}

impl KeywordForm {
    pub fn validate(&self) -> Result<NewKeyword, ValidationError> {
        let keyword = self.keyword.trim();
        if keyword.is_empty() {
            return Err(ValidationError::KeywordRequired);
        }
        let priority = match non_empty(&self.priority) {
            Some(p) => Some(p.parse::<i64>().map_err(|_| invalid("priority", &p))?),
            None => None,
        };
        Ok(NewKeyword {
            keyword: keyword.to_string(),
            category: non_empty(&self.category),
            priority,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlatformForm {
    pub platform: String,
    pub account_name: String,
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub account_id: Option<String>,
}

impl PlatformForm {
    pub fn validate(&self) -> Result<PlatformConnectData, ValidationError> {
        if self.platform.trim().is_empty()
            || self.account_name.trim().is_empty()
            || self.access_token.trim().is_empty()
        {
            return Err(ValidationError::PlatformFieldsRequired);
        }
        let platform: Platform = self
            .platform
            .parse()
            .map_err(|_| invalid("platform", &self.platform))?;
        Ok(PlatformConnectData {
            platform,
            access_token: self.access_token.trim().to_string(),
            refresh_token: non_empty(&self.refresh_token),
            account_id: non_empty(&self.account_id),
            account_name: self.account_name.trim().to_string(),
            token_expires_at: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::hst;

    #[test]
    fn blank_client_form_needs_business_name() {
        let form = NewClientForm::default();
        assert_eq!(form.validate(), Err(ValidationError::BusinessNameRequired));

        let form = NewClientForm {
            business_name: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "Business name is required"
        );
    }

    #[test]
    fn client_form_builds_main_location_and_defaults() {
        let form = NewClientForm {
            business_name: " Aloha Spa ".to_string(),
            industry: "spa_wellness".to_string(),
            neighborhood: "Kailua".to_string(),
            primary_audience: String::new(),
            tier: String::new(),
            ..Default::default()
        };
        let data = form.validate().unwrap();
        assert_eq!(data.business_name, "Aloha Spa");
        assert_eq!(data.primary_audience, Some(Audience::Local));
        assert_eq!(data.tier, Some(Tier::Starter));
        assert_eq!(data.monthly_fee, 500);
        assert_eq!(data.locations.len(), 1);
        assert_eq!(data.locations[0].name, "Main");
        assert_eq!(data.locations[0].island, "Oahu");
        assert_eq!(data.locations[0].neighborhood, "Kailua");
        assert!(data.website.is_none());
    }

    #[test]
    fn unparseable_fee_becomes_zero() {
        let form = NewClientForm {
            business_name: "Poke Shack".to_string(),
            monthly_fee: "lots".to_string(),
            ..Default::default()
        };
        assert_eq!(form.validate().unwrap().monthly_fee, 0);
    }

    #[test]
    fn unknown_tier_is_rejected() {
        let form = NewClientForm {
            business_name: "Poke Shack".to_string(),
            tier: "platinum".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            form.validate(),
            Err(ValidationError::Invalid { field: "tier", .. })
        ));
    }

    #[test]
    fn generate_requires_client_and_keyword() {
        let form = GenerateForm::for_client(Some("c1"));
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "Client and keyword are required"
        );

        let form = GenerateForm {
            keyword: "poke".to_string(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(ValidationError::ClientAndKeywordRequired));
    }

    #[test]
    fn generate_defaults() {
        let form = GenerateForm {
            client_id: "c1".to_string(),
            keyword: "lomi lomi massage".to_string(),
            ..Default::default()
        };
        let data = form.validate().unwrap();
        assert_eq!(data.content_type.as_deref(), Some("promotional"));
        assert_eq!(data.audience_type, Some(ScriptAudience::Local));
        assert_eq!(data.queue_voiceover, Some(true));
        assert_eq!(data.angle, None);
    }

    #[test]
    fn unticked_voiceover_is_false() {
        let form = GenerateForm {
            client_id: "c1".to_string(),
            keyword: "happy hour".to_string(),
            queue_voiceover: None,
            ..Default::default()
        };
        assert_eq!(form.validate().unwrap().queue_voiceover, Some(false));
    }

    #[test]
    fn schedule_defaults_are_tomorrow_noon_on_tiktok_and_instagram() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let form = ScheduleForm::defaults(today);
        assert_eq!(form.date, "2026-10-17");
        assert_eq!(form.time, "12:00");
        assert_eq!(form.platforms(), vec![Platform::Tiktok, Platform::Instagram]);
    }

    #[test]
    fn schedule_time_is_read_in_display_zone() {
        let form = ScheduleForm {
            youtube: Some("on".to_string()),
            date: "2026-10-17".to_string(),
            time: "12:00".to_string(),
            ..Default::default()
        };
        let request = form.validate(hst()).unwrap();
        assert_eq!(request.platforms, vec![Platform::Youtube]);
        assert_eq!(
            request.scheduled_for.unwrap().to_rfc3339(),
            "2026-10-17T22:00:00+00:00"
        );
    }

    #[test]
    fn schedule_needs_platform_and_date() {
        let form = ScheduleForm {
            date: "2026-10-17".to_string(),
            ..Default::default()
        };
        assert_eq!(form.validate(hst()), Err(ValidationError::NoPlatforms));

        let form = ScheduleForm {
            tiktok: Some("on".to_string()),
            ..Default::default()
        };
        assert_eq!(form.validate(hst()), Err(ValidationError::DateRequired));
    }

    #[test]
    fn schedule_rejects_garbage_date() {
        let form = ScheduleForm {
            tiktok: Some("on".to_string()),
            date: "next tuesday".to_string(),
            ..Default::default()
        };
        assert!(form.validate(hst()).is_err());
    }

    #[test]
    fn keyword_form() {
        assert_eq!(
            KeywordForm::default().validate(),
            Err(ValidationError::KeywordRequired)
        );
        let kw = KeywordForm {
            keyword: "shave ice".to_string(),
            category: Some(String::new()),
            priority: Some("3".to_string()),
        }
        .validate()
        .unwrap();
        assert_eq!(kw.priority, Some(3));
        assert_eq!(kw.category, None);
    }

    #[test]
    fn platform_form_requires_credentials() {
        let form = PlatformForm {
            platform: "tiktok".to_string(),
            account_name: "@pokeshack".to_string(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(ValidationError::PlatformFieldsRequired));

        let data = PlatformForm {
            access_token: "tok".to_string(),
            ..form
        }
        .validate()
        .unwrap();
        assert_eq!(data.platform, Platform::Tiktok);
    }
}
