//! Display projections of the wire types. Every adapter is a pure function of
//! its inputs.

use chrono::{DateTime, Utc};
use content_api_client::{
    CalendarEntry, ClientFull, RenderFull, ReviewRender, ScheduledContent, ScriptFull,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Client {
    pub id: String,
    pub business_name: String,
    pub industry: String,
    pub tier: String,
    pub target_audience: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Script {
    pub id: String,
    pub client_id: String,
    pub keyword: String,
    pub hook: String,
    pub body: String,
    pub cta: String,
    pub voice_style: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Render {
    pub id: String,
    pub script_id: String,
    pub client_id: String,
    pub status: String,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub duration: Option<f64>,
    pub quality_score: Option<f64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewItem {
    pub id: String,
    pub script_id: String,
    pub client_id: String,
    pub client_name: String,
    pub keyword: String,
    pub thumbnail_url: Option<String>,
    pub status: String,
    pub quality_score: Option<f64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarItem {
    pub id: String,
    pub client_id: String,
    pub client_name: String,
    pub keyword: String,
    pub scheduled_time: DateTime<Utc>,
    pub platforms: Vec<String>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledItem {
    pub id: String,
    pub client_id: String,
    pub keyword: String,
    pub scheduled_time: DateTime<Utc>,
    pub platforms: Vec<String>,
}

pub fn to_simple_client(full: &ClientFull) -> Client {
    Client {
        id: full.id.clone(),
        business_name: full.business_name.clone(),
        industry: full.industry.clone(),
        tier: full.tier.clone(),
        target_audience: full.primary_audience.clone(),
        status: full.status.clone(),
        created_at: full.created_at,
    }
}

pub fn to_simple_script(full: &ScriptFull) -> Script {
    Script {
        id: full.id.clone(),
        client_id: full.client_id.clone(),
        keyword: full.keyword.clone(),
        hook: full.hook_text.clone(),
        body: full.body_text.clone(),
        cta: full.cta_text.clone(),
        voice_style: full
            .voice_style
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "default".to_string()),
        status: full.status.clone(),
        created_at: full.created_at,
    }
}

pub fn to_simple_render(full: &RenderFull) -> Render {
    Render {
        id: full.id.clone(),
        script_id: full.script_id.clone(),
        client_id: full.client_id.clone(),
        status: full.status.clone(),
        video_url: full.video_url.clone(),
        thumbnail_url: full.thumbnail_url.clone(),
        duration: full.duration_seconds,
        quality_score: full.quality_score,
        created_at: full.created_at,
    }
}

pub fn to_review_item(render: &ReviewRender) -> ReviewItem {
    ReviewItem {
        id: render.id.clone(),
        script_id: render.script_id.clone(),
        client_id: render.client_id.clone(),
        client_name: render.client.business_name.clone(),
        keyword: render.script.keyword.clone(),
        thumbnail_url: render.thumbnail_url.clone(),
        status: render.status.clone(),
        quality_score: render.quality_score,
        created_at: render.created_at,
    }
}

/// Calendar entries don't name their client; the page passes the one it asked about.
pub fn to_calendar_item(entry: &CalendarEntry, client: &ClientFull) -> CalendarItem {
    CalendarItem {
        id: entry.id.clone(),
        client_id: client.id.clone(),
        client_name: client.business_name.clone(),
        keyword: entry.keyword.clone(),
        scheduled_time: entry.scheduled_for,
        platforms: entry.platforms.clone(),
        status: entry.status.clone(),
    }
}

/// Scheduled posts carry no keyword, so they are labelled by render.
pub fn to_scheduled_item(item: &ScheduledContent, client_id: &str) -> ScheduledItem {
    ScheduledItem {
        id: item.id.clone(),
        client_id: client_id.to_string(),
        keyword: format!("Render {}", short_id(&item.render_id)),
        scheduled_time: item.scheduled_for,
        platforms: item.platforms.clone(),
    }
}

/// First 8 characters of an identifier.
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{TimeZone, Utc};
    use content_api_client::*;

    pub fn client(id: &str, name: &str, industry: &str) -> ClientFull {
        ClientFull {
            id: id.to_string(),
            business_name: name.to_string(),
            industry: industry.to_string(),
            description: None,
            website: None,
            contact_name: "Kai".to_string(),
            contact_email: "kai@example.com".to_string(),
            contact_phone: None,
            primary_audience: "tourist".to_string(),
            tier: "growth".to_string(),
            monthly_fee: 1000.0,
            monthly_budget: None,
            brand_voice: None,
            logo_url: None,
            status: "active".to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap(),
            locations: vec![],
            keywords: None,
            platform_accounts: None,
            counts: None,
        }
    }
}
