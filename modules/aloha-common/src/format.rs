use chrono::{DateTime, FixedOffset, Utc};

use crate::views::short_id;

/// `spa_wellness` → `Spa Wellness`.
pub fn industry_label(industry: &str) -> String {
    industry
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Quality score in `[0, 1]` as a whole percentage, `-` when absent or zero.
pub fn percent(score: Option<f64>) -> String {
    match score {
        Some(s) if s != 0.0 => format!("{:.0}%", s * 100.0),
        _ => "-".to_string(),
    }
}

/// `12345` → `12,345`.
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Seconds as `45s`, `-` when absent or zero.
pub fn seconds(duration: Option<f64>) -> String {
    match duration {
        Some(d) if d != 0.0 => format!("{d}s"),
        _ => "-".to_string(),
    }
}

/// `Oct 5, 2026` in the display zone.
pub fn date(at: DateTime<Utc>, tz: FixedOffset) -> String {
    at.with_timezone(&tz).format("%b %-d, %Y").to_string()
}

/// `2:30 PM` in the display zone.
pub fn time(at: DateTime<Utc>, tz: FixedOffset) -> String {
    at.with_timezone(&tz).format("%-I:%M %p").to_string()
}

/// `Monday, October 5`.
pub fn long_day(day: chrono::NaiveDate) -> String {
    day.format("%A, %B %-d").to_string()
}

/// Distance from `now` in words: `5 minutes ago`, `about 3 hours ago`, `in 2 days`.
pub fn relative_time(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(at);
    let future = delta.num_seconds() < 0;
    let secs = delta.num_seconds().unsigned_abs();
    let minutes = (secs as f64 / 60.0).round() as u64;

    let words = if secs < 30 {
        "less than a minute".to_string()
    } else if minutes <= 1 {
        "1 minute".to_string()
    } else if minutes < 45 {
        format!("{minutes} minutes")
    } else if minutes < 90 {
        "about 1 hour".to_string()
    } else if minutes < 24 * 60 {
        format!("about {} hours", (minutes as f64 / 60.0).round() as u64)
    } else if minutes < 42 * 60 {
        "1 day".to_string()
    } else if minutes < 30 * 24 * 60 {
        format!("{} days", (minutes as f64 / 1440.0).round() as u64)
    } else if minutes < 60 * 24 * 60 {
        "about 1 month".to_string()
    } else if minutes < 365 * 24 * 60 {
        format!("{} months", (minutes as f64 / 43_200.0).round() as u64)
    } else {
        let years = (minutes as f64 / 525_600.0).floor() as u64;
        if years <= 1 {
            "about 1 year".to_string()
        } else {
            format!("about {years} years")
        }
    };

    if future {
        format!("in {words}")
    } else {
        format!("{words} ago")
    }
}

/// Title for a render with no script keyword.
pub fn video_label(keyword: Option<&str>, render_id: &str) -> String {
    match keyword {
        Some(k) if !k.is_empty() => k.to_string(),
        _ => format!("Video {}", short_id(render_id)),
    }
}

/// Tailwind colour classes for a lifecycle status badge.
pub fn status_badge(status: &str) -> &'static str {
    match status.to_lowercase().as_str() {
        "completed" | "approved" | "active" | "published" => "bg-green-100 text-green-700",
        "pending" | "paused" => "bg-amber-100 text-amber-700",
        "processing" | "rendering" | "scheduled" | "running" => "bg-blue-100 text-blue-700",
        "failed" | "churned" => "bg-red-100 text-red-700",
        _ => "bg-gray-100 text-gray-700",
    }
}

pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::hst;
    use chrono::{Duration, TimeZone};

    #[test]
    fn industry_labels() {
        assert_eq!(industry_label("spa_wellness"), "Spa Wellness");
        assert_eq!(industry_label("restaurant"), "Restaurant");
        assert_eq!(industry_label(""), "");
    }

    #[test]
    fn percent_rounds_whole() {
        assert_eq!(percent(Some(0.873)), "87%");
        assert_eq!(percent(Some(1.0)), "100%");
        assert_eq!(percent(None), "-");
    }

    #[test]
    fn thousands_separators() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(12345), "12,345");
        assert_eq!(thousands(1234567), "1,234,567");
    }

    #[test]
    fn dates_and_times_use_display_zone() {
        // 02:30 UTC on the 6th is 4:30 PM on the 5th in Honolulu.
        let at = Utc.with_ymd_and_hms(2026, 10, 6, 2, 30, 0).unwrap();
        assert_eq!(date(at, hst()), "Oct 5, 2026");
        assert_eq!(time(at, hst()), "4:30 PM");
    }

    #[test]
    fn relative_time_buckets() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        assert_eq!(relative_time(now - Duration::seconds(10), now), "less than a minute ago");
        assert_eq!(relative_time(now - Duration::minutes(5), now), "5 minutes ago");
        assert_eq!(relative_time(now - Duration::hours(3), now), "about 3 hours ago");
        assert_eq!(relative_time(now - Duration::days(3), now), "3 days ago");
        assert_eq!(relative_time(now + Duration::days(2), now), "in 2 days");
    }

    #[test]
    fn video_label_falls_back_to_id() {
        assert_eq!(video_label(Some("poke bowls"), "r1"), "poke bowls");
        assert_eq!(video_label(None, "0123456789ab"), "Video 01234567");
        assert_eq!(video_label(Some(""), "abc"), "Video abc");
    }

    #[test]
    fn badge_colours() {
        assert_eq!(status_badge("Completed"), "bg-green-100 text-green-700");
        assert_eq!(status_badge("failed"), "bg-red-100 text-red-700");
        assert_eq!(status_badge("whatever"), "bg-gray-100 text-gray-700");
    }
}
