use chrono::{DateTime, FixedOffset};

use crate::invariants::{Hostname, HourOfDay};

/// One successfully parsed access log line.
///
/// Method, path, protocol and status are guaranteed by the line grammar.
/// Timestamp, bytes, referer and user agent degrade independently to `None`
/// when their field was a dash, missing, or unparseable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub client: String,
    pub timestamp: Option<DateTime<FixedOffset>>,
    pub method: String,
    pub path: String,
    pub protocol: String,
    pub status: u16,
    pub bytes: Option<u64>,
    pub referer: Option<String>,
    pub user_agent: Option<String>,
}

impl LogEntry {
    /// Bytes sent for accounting purposes. A `-` in the log reads as zero.
    pub fn bytes_sent(&self) -> u64 {
        self.bytes.unwrap_or(0)
    }

    /// Hostname of the referer, if one was given and it is a URL with a host.
    pub fn referer_host(&self) -> Option<Hostname> {
        self.referer.as_deref().and_then(|r| r.parse().ok())
    }

    /// Hour of day in the timestamp's own UTC offset.
    pub fn hour(&self) -> Option<HourOfDay> {
        self.timestamp.map(HourOfDay::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> LogEntry {
        LogEntry {
            client: "203.0.113.5".into(),
            timestamp: None,
            method: "GET".into(),
            path: "/index.html".into(),
            protocol: "HTTP/1.1".into(),
            status: 200,
            bytes: None,
            referer: None,
            user_agent: None,
        }
    }

    #[test]
    fn absent_bytes_read_as_zero() {
        assert_eq!(entry().bytes_sent(), 0);
        let explicit = LogEntry {
            bytes: Some(0),
            ..entry()
        };
        assert_eq!(explicit.bytes_sent(), 0);
        assert_ne!(explicit.bytes, entry().bytes);
    }

    #[test]
    fn referer_host_ignores_malformed_urls() {
        let bad = LogEntry {
            referer: Some("::not-a-url::".into()),
            ..entry()
        };
        assert!(bad.referer_host().is_none());
        assert!(entry().referer_host().is_none());
    }

    #[test]
    fn hour_is_absent_without_timestamp() {
        assert!(entry().hour().is_none());
    }
}
