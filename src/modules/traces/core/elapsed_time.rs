// Elapsed time recorded against a trace.
//
// Stored and transmitted as `HH:MM:SS`; inside the domain it is a plain
// seconds-precision duration. A trace never holds a day or more.

use chrono::{NaiveTime, TimeDelta, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use thiserror::Error;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ElapsedTimeError {
    #[error("time has wrong format, use hh:mm:ss")]
    InvalidFormat,

    #[error("elapsed time must stay below 24:00:00")]
    OutOfRange,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElapsedTime(TimeDelta);

impl ElapsedTime {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn from_seconds(seconds: i64) -> Result<Self, ElapsedTimeError> {
        if !(0..SECONDS_PER_DAY).contains(&seconds) {
            return Err(ElapsedTimeError::OutOfRange);
        }
        Ok(Self(TimeDelta::seconds(seconds)))
    }

    /// Parses a strictly zero-padded `HH:MM:SS` value.
    pub fn parse(input: &str) -> Result<Self, ElapsedTimeError> {
        let shape_ok = input.len() == 8
            && input.bytes().enumerate().all(|(index, byte)| match index {
                2 | 5 => byte == b':',
                _ => byte.is_ascii_digit(),
            });
        if !shape_ok {
            return Err(ElapsedTimeError::InvalidFormat);
        }

        let time = NaiveTime::parse_from_str(input, "%H:%M:%S")
            .map_err(|_| ElapsedTimeError::InvalidFormat)?;
        // chrono accepts :60 as a leap second
        if time.nanosecond() != 0 {
            return Err(ElapsedTimeError::InvalidFormat);
        }
        Self::from_seconds(i64::from(time.num_seconds_from_midnight()))
    }

    pub fn num_seconds(&self) -> i64 {
        self.0.num_seconds()
    }

    /// Sum of both durations, or `None` when it would reach a full day.
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0
            .checked_add(&other.0)
            .and_then(|sum| Self::from_seconds(sum.num_seconds()).ok())
    }
}

impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.num_seconds();
        write!(
            f,
            "{:02}:{:02}:{:02}",
            total / SECONDS_PER_HOUR,
            total % SECONDS_PER_HOUR / SECONDS_PER_MINUTE,
            total % SECONDS_PER_MINUTE
        )
    }
}

impl Serialize for ElapsedTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ElapsedTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(de::Error::custom)
    }
}
