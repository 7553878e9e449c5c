use chrono::{
    DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc,
};

use crate::views::CalendarItem;

/// Calendar cells show this many items before collapsing into `+N more`.
pub const MAX_ITEMS_PER_CELL: usize = 2;

/// A calendar month, identified by year and 1-based month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    pub fn containing(day: NaiveDate) -> Self {
        Self {
            year: day.year(),
            month: day.month(),
        }
    }

    /// Parse `YYYY-MM`. Months whose last day cannot be represented are rejected.
    pub fn parse(s: &str) -> Option<Self> {
        let (year, month) = s.trim().split_once('-')?;
        let year: i32 = year.parse().ok()?;
        let month: u32 = month.parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, 1)?;
        let parsed = Self { year, month };
        let next = parsed.next();
        NaiveDate::from_ymd_opt(next.year, next.month, 1)?;
        Some(parsed)
    }

    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// `October 2026`.
    pub fn title(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day().pred_opt().unwrap_or(NaiveDate::MAX)
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    /// First and last instant of the month as seen in `tz`, sent as UTC RFC 3339 strings.
    pub fn api_range(&self, tz: FixedOffset) -> (String, String) {
        let to_utc = |local: Option<NaiveDateTime>| {
            local
                .and_then(|t| tz.from_local_datetime(&t).single())
                .map(|d| d.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::Millis, true))
                .unwrap_or_default()
        };
        (
            to_utc(self.first_day().and_hms_opt(0, 0, 0)),
            to_utc(self.last_day().and_hms_milli_opt(23, 59, 59, 999)),
        )
    }

    /// Weeks of the month grid: Sunday-start, padded out to whole weeks.
    pub fn grid(&self, today: NaiveDate, selected: Option<NaiveDate>) -> Vec<Vec<DayCell>> {
        let first = self.first_day();
        let last = self.last_day();
        let start = first
            .checked_sub_signed(Duration::days(i64::from(first.weekday().num_days_from_sunday())))
            .unwrap_or(first);
        let end = last
            .checked_add_signed(Duration::days(i64::from(6 - last.weekday().num_days_from_sunday())))
            .unwrap_or(last);

        let mut weeks = Vec::new();
        let mut week = Vec::with_capacity(7);
        let mut cursor = Some(start);
        while let Some(day) = cursor.filter(|d| *d <= end) {
            week.push(DayCell {
                date: day,
                in_month: day.month() == self.month && day.year() == self.year,
                is_today: day == today,
                is_selected: selected == Some(day),
            });
            if week.len() == 7 {
                weeks.push(std::mem::take(&mut week));
            }
            cursor = day.succ_opt();
        }
        // Only the edges of the representable range leave a short week.
        if !week.is_empty() {
            weeks.push(week);
        }
        weeks
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub in_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
}

/// The calendar date of `at` as seen in `tz`.
pub fn local_date(at: DateTime<Utc>, tz: FixedOffset) -> NaiveDate {
    at.with_timezone(&tz).date_naive()
}

/// Items scheduled on `day` in the display zone, in their original order.
pub fn items_for_day<'a>(
    items: &'a [CalendarItem],
    day: NaiveDate,
    tz: FixedOffset,
) -> Vec<&'a CalendarItem> {
    items
        .iter()
        .filter(|item| local_date(item.scheduled_time, tz) == day)
        .collect()
}

/// Items to draw in a cell plus how many were left out.
pub fn cell_items<'a>(
    items: &'a [CalendarItem],
    day: NaiveDate,
    tz: FixedOffset,
) -> (Vec<&'a CalendarItem>, usize) {
    let mut all = items_for_day(items, day, tz);
    let overflow = all.len().saturating_sub(MAX_ITEMS_PER_CELL);
    all.truncate(MAX_ITEMS_PER_CELL);
    (all, overflow)
}

/// Parse `YYYY-MM-DD`.
pub fn parse_day(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}
