//! Breakdown of microsecond epoch timestamps.

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

/// Calendar-style breakdown of a microsecond count
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecomposedDuration {
    /// Sub-millisecond remainder, 0..=999 (rounded)
    pub microseconds: u64,
    /// 0..=999
    pub milliseconds: u64,
    /// 0..=59
    pub seconds: u64,
    /// 0..=59
    pub minutes: u64,
    /// 0..=23
    pub hours: u64,
    /// Whole days
    pub days: u64,
}

/// Break `total_micros` into days, hours, minutes, seconds, milliseconds and
/// microseconds.
///
/// Every unit is derived from the same real-valued quotient chain and floored,
/// except `microseconds`, which is the rounded fractional millisecond. The
/// rounding recovers sub-millisecond precision lost to floating point.
pub fn decompose(total_micros: u64) -> DecomposedDuration {
    let ms = total_micros as f64 / 1000.0;
    let ss = ms / 1000.0;
    let mm = ss / 60.0;
    let hh = mm / 60.0;
    let dd = hh / 24.0;

    DecomposedDuration {
        microseconds: ((ms % 1.0) * 1000.0).round() as u64,
        milliseconds: (ms % 1000.0).floor() as u64,
        seconds: (ss % 60.0).floor() as u64,
        minutes: (mm % 60.0).floor() as u64,
        hours: (hh % 24.0).floor() as u64,
        days: dd.floor() as u64,
    }
}

impl DecomposedDuration {
    /// Total whole milliseconds represented, ignoring `microseconds`
    pub fn whole_millis(&self) -> u64 {
        ((((self.days * 24 + self.hours) * 60 + self.minutes) * 60) + self.seconds) * 1000
            + self.milliseconds
    }
}

impl From<u64> for DecomposedDuration {
    fn from(total_micros: u64) -> Self {
        decompose(total_micros)
    }
}

impl fmt::Display for DecomposedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {:02}:{:02}:{:02}.{:03}{:03}",
            self.days, self.hours, self.minutes, self.seconds, self.milliseconds, self.microseconds
        )
    }
}

/// Microseconds since the Unix epoch, as sent in `create_date` fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EpochMicros(pub u64);

impl EpochMicros {
    /// Raw microsecond count
    pub fn as_micros(&self) -> u64 {
        self.0
    }

    /// Breakdown of the count
    pub fn decompose(&self) -> DecomposedDuration {
        decompose(self.0)
    }

    /// Convert to a UTC datetime
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        i64::try_from(self.0)
            .ok()
            .and_then(DateTime::from_timestamp_micros)
    }
}

impl From<u64> for EpochMicros {
    fn from(micros: u64) -> Self {
        Self(micros)
    }
}

impl<'de> Deserialize<'de> for EpochMicros {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(u64),
            Float(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Int(v) => Ok(Self(v)),
            Raw::Float(v) if v.is_finite() && v >= 0.0 => Ok(Self(v.trunc() as u64)),
            Raw::Float(v) => Err(de::Error::custom(format!(
                "epoch microseconds must be non-negative, got {v}"
            ))),
            Raw::Text(s) => s
                .trim()
                .parse::<u64>()
                .map(Self)
                .map_err(|_| de::Error::custom(format!("invalid epoch microseconds '{s}'"))),
        }
    }
}
