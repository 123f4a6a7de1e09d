use std::sync::LazyLock;

use chrono::DateTime;
use regex::Regex;
use tracing::debug;

use crate::models::LogEntry;

// Combined Log Format, e.g.
// 203.0.113.5 - - [10/Oct/2023:13:55:36 +0000] "GET /index.html HTTP/1.1" 200 1024 "http://example.com/" "Mozilla/5.0"
// The bytes group is optional but the spaces around it are not: a missing
// bytes field shows up as two consecutive spaces.
static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(?P<client>\S+) - - \[(?P<timestamp>[^\]]+)\] "(?P<method>[A-Z]+) (?P<path>\S+) (?P<protocol>HTTP/\d\.\d)" (?P<status>\d+) (?P<bytes>\d+|-)? "(?P<referer>[^"]*)" "(?P<agent>[^"]*)"$"#,
    )
    .expect("valid log line pattern")
});

// Timestamp as it appears between the brackets: 10/Oct/2023:13:55:36 +0000
const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

/// Parse one raw line into a [`LogEntry`].
///
/// The grammar is all-or-nothing: a line that does not match the whole
/// pattern is rejected and `None` is returned. Within a matched line the
/// timestamp, status, bytes, referer and user agent fields each fall back
/// to a default on their own instead of sinking the line.
pub fn parse_line(line: &str) -> Option<LogEntry> {
    let Some(caps) = LINE_PATTERN.captures(line) else {
        debug!(line, "line does not match the access log grammar");
        return None;
    };

    let raw_timestamp = &caps["timestamp"];
    let timestamp = match DateTime::parse_from_str(raw_timestamp, TIMESTAMP_FORMAT) {
        Ok(ts) => Some(ts),
        Err(err) => {
            debug!(timestamp = raw_timestamp, %err, "unparseable timestamp, keeping line");
            None
        }
    };

    let status = caps["status"].parse().unwrap_or_else(|_| {
        debug!(status = &caps["status"], "status out of range, using 0");
        0
    });

    let bytes = caps.name("bytes").and_then(|m| match m.as_str() {
        "-" => None,
        digits => digits.parse().ok(),
    });

    Some(LogEntry {
        client: caps["client"].to_string(),
        timestamp,
        method: caps["method"].to_string(),
        path: caps["path"].to_string(),
        protocol: caps["protocol"].to_string(),
        status,
        bytes,
        referer: dash_is_absent(&caps["referer"]),
        user_agent: dash_is_absent(&caps["agent"]),
    })
}

// "-" means the field was not supplied; anything else, even "", is kept.
fn dash_is_absent(field: &str) -> Option<String> {
    (field != "-").then(|| field.to_string())
}
