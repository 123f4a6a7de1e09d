use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Timelike};
use derive_more::{AsRef, Debug, Display};
use url::Url;

/// Host component of a referer URL.
#[derive(Debug, Display, AsRef, Clone, PartialEq, Eq, Hash)]
pub struct Hostname(String);

impl Hostname {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for Hostname {
    type Err = url::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let url = Url::parse(s)?;
        let host = url.host_str().ok_or(url::ParseError::EmptyHost)?;
        Ok(Self(host.to_string()))
    }
}

/// Hour of day, always 0 through 23.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HourOfDay(u8);

impl HourOfDay {
    pub fn get(self) -> u8 {
        self.0
    }
}

impl From<DateTime<FixedOffset>> for HourOfDay {
    fn from(value: DateTime<FixedOffset>) -> Self {
        // hour() is taken in the timestamp's own offset, not UTC
        Self(value.hour() as u8)
    }
}
