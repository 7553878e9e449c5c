use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// --- Response envelope ---

/// Uniform result of every API call. A failed call has `success == false` and a
/// human-readable `error`; it is never surfaced as an `Err`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub count: Option<u64>,
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

impl<T> ApiResponse<T> {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            count: None,
            pagination: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success && self.error.is_none()
    }

    /// Collapse the envelope into the data or an error message. `fallback` is used
    /// when the backend reported failure without saying why.
    pub fn into_result(self, fallback: &str) -> std::result::Result<T, String> {
        if !self.is_success() {
            return Err(self.error.unwrap_or_else(|| fallback.to_string()));
        }
        self.data.ok_or_else(|| fallback.to_string())
    }

    /// Like [`into_result`](Self::into_result) for action calls whose payload is
    /// not needed; a success without `data` still counts.
    pub fn into_status(self, fallback: &str) -> std::result::Result<(), String> {
        if self.is_success() {
            Ok(())
        } else {
            Err(self.error.unwrap_or_else(|| fallback.to_string()))
        }
    }

    /// The data of a successful call, or `None`. Used where a failed fetch
    /// degrades to an empty view.
    pub fn ok(self) -> Option<T> {
        if self.is_success() {
            self.data
        } else {
            None
        }
    }
}

/// Wire form of the envelope. Older endpoints answer `{data, error}` without `success`.
#[derive(Debug, Deserialize)]
pub(crate) struct RawEnvelope<T> {
    pub success: Option<bool>,
    pub data: Option<T>,
    pub error: Option<String>,
    pub count: Option<u64>,
    pub pagination: Option<Pagination>,
}

impl<T> From<RawEnvelope<T>> for ApiResponse<T> {
    fn from(raw: RawEnvelope<T>) -> Self {
        let success = raw.success.unwrap_or(raw.error.is_none());
        ApiResponse {
            success,
            data: raw.data,
            error: raw.error,
            count: raw.count,
            pagination: raw.pagination,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

// --- Fixed vocabularies ---

macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal, $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($wire => Ok($name::$variant),)+
                    other => Err(format!("unknown {}: {other}", stringify!($name))),
                }
            }
        }
    };
}

wire_enum!(
    /// Who a client's content is aimed at.
    Audience {
        Local => "local", "Local",
        Tourist => "tourist", "Tourist",
        Both => "both", "Both",
    }
);

wire_enum!(
    /// Service/pricing plan level.
    Tier {
        Starter => "starter", "Starter ($500/mo)",
        Growth => "growth", "Growth ($1,000/mo)",
        Scale => "scale", "Scale ($2,000/mo)",
        Enterprise => "enterprise", "Enterprise",
    }
);

wire_enum!(
    /// Audience of a single generated script.
    ScriptAudience {
        Local => "local", "Local",
        Tourist => "tourist", "Tourist",
        Mixed => "mixed", "Mixed",
    }
);

wire_enum!(
    Platform {
        Tiktok => "tiktok", "TikTok",
        Instagram => "instagram", "Instagram",
        Youtube => "youtube", "YouTube",
        Facebook => "facebook", "Facebook",
    }
);

// --- Dashboard ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub clients: ClientTotals,
    pub content: ContentTotals,
    pub this_month: MonthTotals,
    #[serde(default)]
    pub recent_activity: Vec<RecentActivity>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClientTotals {
    pub total: u64,
    pub active: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTotals {
    pub scripts: u64,
    pub renders: u64,
    pub published: u64,
    pub pending_review: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthTotals {
    pub scripts: u64,
    pub renders: u64,
    pub published: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub id: String,
    pub keyword: String,
    pub client: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDashboard {
    pub client: ClientSummary,
    pub stats: ClientStats,
    pub performance: ClientPerformance,
    pub pipeline: Option<PipelineStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSummary {
    pub id: String,
    pub business_name: String,
    pub industry: String,
    pub tier: String,
    pub status: String,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub platforms: Vec<PlatformSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSummary {
    pub platform: String,
    pub account_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientStats {
    pub total_scripts: u64,
    pub total_renders: u64,
    pub active_keywords: u64,
    pub scripts_this_month: u64,
    pub renders_completed: u64,
    pub renders_approved: u64,
    pub avg_quality_score: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPerformance {
    pub total_views: u64,
    pub total_likes: u64,
    pub total_comments: u64,
    pub total_shares: u64,
    pub avg_engagement_score: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pipeline {
    pub id: String,
    pub status: String,
    pub client_id: String,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub scripts_generated: u64,
    pub voiceovers_created: u64,
    pub videos_rendered: u64,
    pub videos_published: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineStatus {
    pub status: String,
    pub started_at: DateTime<Utc>,
    pub scripts_generated: u64,
    pub voiceovers_created: u64,
    pub videos_rendered: u64,
    pub videos_published: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostData {
    pub total_cost: String,
    #[serde(default)]
    pub by_service: Vec<ServiceCost>,
    #[serde(default)]
    pub daily: Vec<DailyCost>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCost {
    pub service: String,
    pub cost: String,
    pub operations: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyCost {
    pub date: String,
    pub cost: String,
}

// --- Clients ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientFull {
    pub id: String,
    pub business_name: String,
    pub industry: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub primary_audience: String,
    pub tier: String,
    pub monthly_fee: f64,
    pub monthly_budget: Option<f64>,
    pub brand_voice: Option<serde_json::Value>,
    pub logo_url: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub locations: Vec<Location>,
    pub keywords: Option<Vec<ClientKeyword>>,
    pub platform_accounts: Option<Vec<PlatformAccount>>,
    #[serde(rename = "_count")]
    pub counts: Option<ClientCounts>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientCounts {
    pub scripts: u64,
    pub renders: u64,
    pub platform_accounts: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub client_id: String,
    pub name: String,
    pub island: String,
    pub neighborhood: String,
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientKeyword {
    pub id: String,
    pub client_id: String,
    pub keyword: String,
    pub category: Option<String>,
    pub priority: i64,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformAccount {
    pub id: String,
    pub platform: String,
    pub account_name: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientData {
    pub business_name: String,
    pub industry: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub contact_name: String,
    pub contact_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_audience: Option<Audience>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<Tier>,
    pub monthly_fee: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_budget: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_voice: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub locations: Vec<NewLocation>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub keywords: Vec<NewKeyword>,
}

/// Partial update; only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_audience: Option<Audience>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<Tier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_fee: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLocation {
    pub name: String,
    pub island: String,
    pub neighborhood: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewKeyword {
    pub keyword: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformConnectData {
    pub platform: Platform,
    pub access_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    pub account_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_expires_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedPlatform {
    pub id: String,
    pub platform: String,
    pub account_name: String,
}

// --- Content ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptFull {
    pub id: String,
    pub client_id: String,
    pub keyword: String,
    pub content_type: Option<String>,
    pub target_audience: Option<String>,
    pub hook_text: String,
    pub body_text: String,
    pub cta_text: String,
    pub full_script: String,
    pub voice_style: Option<String>,
    pub hook_style: Option<String>,
    pub angle: Option<String>,
    pub word_count: u64,
    pub estimated_duration: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub client: Option<ClientRef>,
    pub voiceover: Option<VoiceoverInfo>,
    pub renders: Option<Vec<RenderFull>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRef {
    #[serde(default)]
    pub id: String,
    pub business_name: String,
    pub industry: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceoverInfo {
    pub id: String,
    pub status: String,
    pub duration_seconds: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderFull {
    pub id: String,
    pub script_id: String,
    pub client_id: String,
    pub voiceover_id: Option<String>,
    pub template_id: Option<String>,
    pub status: String,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub duration_seconds: Option<f64>,
    pub resolution: Option<String>,
    pub file_size: Option<u64>,
    pub quality_score: Option<f64>,
    pub auto_approved: Option<bool>,
    pub render_metadata: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub script: Option<ScriptRef>,
    pub client: Option<ClientRef>,
    pub publications: Option<Vec<PublicationInfo>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptRef {
    #[serde(default)]
    pub id: String,
    pub keyword: String,
    pub hook_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicationInfo {
    pub id: String,
    pub platform: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityScore {
    pub score: f64,
    #[serde(default)]
    pub details: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRender {
    pub id: String,
    pub script_id: String,
    pub client_id: String,
    pub status: String,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub quality_score: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub script: ScriptRef,
    pub client: ClientRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledContent {
    pub id: String,
    pub render_id: String,
    pub scheduled_for: DateTime<Utc>,
    #[serde(default)]
    pub platforms: Vec<String>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEntry {
    pub id: String,
    pub render_id: String,
    pub keyword: String,
    pub scheduled_for: DateTime<Utc>,
    #[serde(default)]
    pub platforms: Vec<String>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateScriptData {
    pub client_id: String,
    pub keyword: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience_type: Option<ScriptAudience>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_voiceover: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    pub platforms: Vec<Platform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConfirmation {
    pub scheduled_for: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublishRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<Platform>>,
}

// --- Analytics ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceData {
    pub totals: PerformanceTotals,
    #[serde(default)]
    pub by_platform: Vec<PlatformStats>,
    #[serde(default)]
    pub top_content: Vec<TopContent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceTotals {
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub content_pieces: u64,
    pub avg_score: String,
}

impl Default for PerformanceTotals {
    fn default() -> Self {
        Self {
            views: 0,
            likes: 0,
            comments: 0,
            shares: 0,
            content_pieces: 0,
            avg_score: "0".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    pub platform: String,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub count: u64,
    pub avg_score: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopContent {
    pub render_id: String,
    pub platform: String,
    pub keyword: String,
    pub views: u64,
    pub engagement: u64,
    pub score: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeData {
    pub content_type: String,
    pub total_views: u64,
    pub total_engagement: u64,
    pub count: u64,
    pub avg_score: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordData {
    pub keyword: String,
    pub total_views: u64,
    pub total_engagement: u64,
    pub count: u64,
    pub avg_score: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryInsight {
    pub id: String,
    pub industry: String,
    #[serde(default)]
    pub best_hook_styles: Vec<String>,
    #[serde(default)]
    pub optimal_length: serde_json::Value,
    #[serde(default)]
    pub best_posting_times: serde_json::Value,
    #[serde(default)]
    pub winning_hashtags: Vec<String>,
    #[serde(default, rename = "effectiveCTAs")]
    pub effective_ctas: Vec<String>,
    #[serde(default)]
    pub local_vs_tourist: serde_json::Value,
    pub videos_analyzed: u64,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_without_success_is_successful_when_no_error() {
        let raw: RawEnvelope<Vec<u32>> = serde_json::from_str(r#"{"data":[1,2]}"#).unwrap();
        let resp: ApiResponse<Vec<u32>> = raw.into();
        assert!(resp.is_success());
        assert_eq!(resp.into_result("fallback"), Ok(vec![1, 2]));
    }

    #[test]
    fn envelope_without_success_fails_when_error_present() {
        let raw: RawEnvelope<Vec<u32>> =
            serde_json::from_str(r#"{"data":null,"error":"boom"}"#).unwrap();
        let resp: ApiResponse<Vec<u32>> = raw.into();
        assert!(!resp.is_success());
        assert_eq!(resp.into_result("fallback"), Err("boom".to_string()));
    }

    #[test]
    fn into_result_uses_fallback_for_silent_failure() {
        let raw: RawEnvelope<u32> = serde_json::from_str(r#"{"success":false}"#).unwrap();
        let resp: ApiResponse<u32> = raw.into();
        assert_eq!(
            resp.into_result("Failed to load dashboard"),
            Err("Failed to load dashboard".to_string())
        );
    }

    fn decode<T: serde::de::DeserializeOwned>(body: &str) -> ApiResponse<T> {
        serde_json::from_str::<RawEnvelope<T>>(body).unwrap().into()
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Confirmation {
        id: String,
    }

    #[test]
    fn envelope_decodes_payloads_without_default() {
        let resp: ApiResponse<Confirmation> = decode(r#"{"success":true,"data":{"id":"r1"}}"#);
        assert_eq!(resp.into_result("fallback"), Ok(Confirmation { id: "r1".to_string() }));

        let resp: ApiResponse<Confirmation> = decode(r#"{"success":true}"#);
        assert!(resp.is_success());
        assert_eq!(resp.data, None);
        assert_eq!(resp.count, None);
    }

    #[test]
    fn into_status_accepts_success_without_data() {
        let raw: RawEnvelope<u32> = serde_json::from_str(r#"{"success":true,"data":null}"#).unwrap();
        let resp: ApiResponse<u32> = raw.into();
        assert_eq!(resp.into_status("Failed to approve"), Ok(()));

        let resp: ApiResponse<u32> = ApiResponse::failure("Render not ready");
        assert_eq!(resp.into_status("Failed to approve"), Err("Render not ready".to_string()));
    }

    #[test]
    fn envelope_keeps_count_and_pagination() {
        let raw: RawEnvelope<Vec<u32>> = serde_json::from_str(
            r#"{"success":true,"data":[],"count":0,"pagination":{"total":40,"limit":20,"offset":20}}"#,
        )
        .unwrap();
        let resp: ApiResponse<Vec<u32>> = raw.into();
        assert_eq!(resp.count, Some(0));
        assert_eq!(
            resp.pagination,
            Some(Pagination { total: 40, limit: 20, offset: 20 })
        );
    }

    #[test]
    fn platform_parses_case_insensitively() {
        assert_eq!("TikTok".parse::<Platform>(), Ok(Platform::Tiktok));
        assert_eq!(" youtube ".parse::<Platform>(), Ok(Platform::Youtube));
        assert!("myspace".parse::<Platform>().is_err());
    }

    #[test]
    fn create_client_omits_unset_optionals() {
        let data = CreateClientData {
            business_name: "Aloha Spa".to_string(),
            industry: "spa_wellness".to_string(),
            monthly_fee: 500,
            tier: Some(Tier::Growth),
            ..Default::default()
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["businessName"], "Aloha Spa");
        assert_eq!(json["tier"], "growth");
        assert_eq!(json["monthlyFee"], 500);
        assert!(json.get("website").is_none());
        assert!(json.get("locations").is_none());
    }

    #[test]
    fn client_full_reads_count_block() {
        let json = r#"{
            "id":"c1","businessName":"Poke Shack","industry":"restaurant",
            "contactName":"Kai","contactEmail":"kai@example.com","primaryAudience":"local",
            "tier":"starter","monthlyFee":500,"status":"active",
            "createdAt":"2026-01-02T03:04:05Z","updatedAt":"2026-01-02T03:04:05Z",
            "locations":[],"_count":{"scripts":4,"renders":2}
        }"#;
        let client: ClientFull = serde_json::from_str(json).unwrap();
        let counts = client.counts.unwrap();
        assert_eq!(counts.scripts, 4);
        assert_eq!(counts.renders, 2);
        assert_eq!(counts.platform_accounts, None);
    }
}
