//! Named date-range presets for the attendance filter.
//!
//! Presets are always computed from a local calendar date and compared by
//! value, so the active preset is derived from the current range on demand
//! instead of being stored next to it.

use chrono::{Datelike, Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

const DATE_STRING_FORMAT: &str = "%Y-%m-%d";

/// Today's date on the caller's wall clock.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// `YYYY-MM-DD`, the form the backend expects in query strings.
pub fn to_date_string(date: NaiveDate) -> String {
    date.format(DATE_STRING_FORMAT).to_string()
}

pub fn parse_date_string(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s.trim(), DATE_STRING_FORMAT)
}

/// `Mar 1, 2024`. Built from the date's own components, so it never drifts
/// by a day the way a UTC-midnight timestamp would.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Inclusive range; `None` leaves that side unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub const ALL: DateRange = DateRange { from: None, to: None };

    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self::new(Some(from), Some(to))
    }

    pub fn day(date: NaiveDate) -> Self {
        Self::between(date, date)
    }

    pub fn is_all(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| from <= date) && self.to.is_none_or(|to| date <= to)
    }
}

/// Preset keys in declaration order. Matching walks this order, so when two
/// presets compute the same bounds the earlier one wins.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum PresetKey {
    All,
    Today,
    ThisWeek,
    ThisMonth,
    LastMonth,
    ThisYear,
    LastYear,
    Custom,
}

impl PresetKey {
    pub fn label(&self) -> &'static str {
        match self {
            PresetKey::All => "All Time",
            PresetKey::Today => "Today",
            PresetKey::ThisWeek => "This Week",
            PresetKey::ThisMonth => "This Month",
            PresetKey::LastMonth => "Last Month",
            PresetKey::ThisYear => "This Year",
            PresetKey::LastYear => "Last Year",
            PresetKey::Custom => "Custom Range",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub key: PresetKey,
    pub label: &'static str,
    pub range: DateRange,
}

/// The full preset table for one evaluation instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presets {
    today: NaiveDate,
    entries: Vec<Preset>,
}

impl Presets {
    /// Presets relative to the local wall clock right now.
    pub fn current() -> Self {
        compute_presets(local_today())
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.entries.iter()
    }

    pub fn get(&self, key: PresetKey) -> Option<&Preset> {
        self.entries.iter().find(|p| p.key == key)
    }

    pub fn range(&self, key: PresetKey) -> DateRange {
        self.get(key).map(|p| p.range).unwrap_or_default()
    }

    /// Range to apply when the user picks `key`. `Custom` has no bounds of
    /// its own, the caller collects them from the user instead.
    pub fn select(&self, key: PresetKey) -> Option<DateRange> {
        match key {
            PresetKey::Custom => None,
            other => Some(self.range(other)),
        }
    }
}

fn start_of_week(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn first_of_year(year: i32, fallback: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(fallback)
}

fn last_of_year(year: i32, fallback: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(fallback)
}

/// Builds the preset table relative to `today`.
///
/// All arithmetic works on calendar components, never on elapsed time, so a
/// daylight-saving transition cannot move a bound to a neighbouring day.
pub fn compute_presets(today: NaiveDate) -> Presets {
    let month_start = first_of_month(today);
    let last_month_end = month_start.pred_opt().unwrap_or(month_start);
    let last_month_start = first_of_month(last_month_end);
    let year = today.year();

    let entries = PresetKey::iter()
        .map(|key| {
            let range = match key {
                PresetKey::All | PresetKey::Custom => DateRange::ALL,
                PresetKey::Today => DateRange::day(today),
                PresetKey::ThisWeek => DateRange::between(start_of_week(today), today),
                PresetKey::ThisMonth => DateRange::between(month_start, today),
                PresetKey::LastMonth => DateRange::between(last_month_start, last_month_end),
                PresetKey::ThisYear => DateRange::between(first_of_year(year, today), today),
                PresetKey::LastYear => DateRange::between(
                    first_of_year(year - 1, today),
                    last_of_year(year - 1, today),
                ),
            };
            Preset {
                key,
                label: key.label(),
                range,
            }
        })
        .collect();

    Presets { today, entries }
}

/// Maps a range back to the first preset with identical bounds, falling
/// back to `Custom` for any other bounded range and `All` for an unbounded one.
pub fn resolve_preset(range: &DateRange, presets: &Presets) -> PresetKey {
    let matched = presets
        .iter()
        .filter(|p| p.key != PresetKey::Custom)
        .find(|p| p.range == *range);

    match matched {
        Some(preset) => preset.key,
        None if range.is_all() => PresetKey::All,
        None => PresetKey::Custom,
    }
}

/// Text shown on the collapsed filter button.
pub fn format_display(range: &DateRange) -> String {
    match (range.from, range.to) {
        (None, None) => PresetKey::All.label().to_string(),
        (Some(from), Some(to)) if from == to => format_display_date(from),
        (Some(from), Some(to)) => {
            format!("{} - {}", format_display_date(from), format_display_date(to))
        }
        (Some(from), None) => format!("From {}", format_display_date(from)),
        (None, Some(to)) => format!("Until {}", format_display_date(to)),
    }
}
