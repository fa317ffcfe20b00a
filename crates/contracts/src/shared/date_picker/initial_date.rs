use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// Date pre-selected in the picker when it first opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitialDate {
    /// Field was empty, so the binding instant is used.
    Today(DateTime<Utc>),
    /// Field held a canonical `YYYY-MM-DD` date.
    Parsed(DateTime<Utc>),
    /// Any other non-empty value. The raw text is forwarded untouched and the
    /// browser's `Date` constructor decides what it means, possibly an
    /// invalid `Date`.
    Unparseable(String),
}

impl InitialDate {
    /// Derive the initial date from the field's current value.
    ///
    /// Only an empty string falls back to `now`. Only the exact `YYYY-MM-DD`
    /// form Django renders is parsed here; padded, unpadded, date-time or
    /// garbage values are kept as [`InitialDate::Unparseable`].
    pub fn resolve(value: &str, now: DateTime<Utc>) -> Self {
        if value.is_empty() {
            return Self::Today(now);
        }
        match parse_field_value(value) {
            Some(instant) => Self::Parsed(instant),
            None => Self::Unparseable(value.to_string()),
        }
    }

    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Today(instant) | Self::Parsed(instant) => Some(*instant),
            Self::Unparseable(_) => None,
        }
    }

    /// String handed to the JS `Date` constructor.
    pub fn to_js_date_input(&self) -> String {
        match self {
            Self::Today(instant) | Self::Parsed(instant) => format_instant(instant),
            Self::Unparseable(raw) => raw.clone(),
        }
    }
}

impl Serialize for InitialDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_js_date_input())
    }
}

/// RFC 3339 in UTC with millisecond precision and a `Z` suffix, the
/// date-time string format every JS engine parses the same way.
pub fn format_instant(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Date-only values are UTC midnight, same as `new Date("2023-05-10")`.
fn parse_field_value(value: &str) -> Option<DateTime<Utc>> {
    if !is_canonical_date(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Exactly `DDDD-DD-DD`. chrono on its own tolerates unpadded fields and
/// leading whitespace, which the browser reads differently.
fn is_canonical_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
