use std::io::{self, Write};

use num_format::{Locale, ToFormattedString};

use crate::analytics::Analytics;

/// Rows shown in each ranking.
const TOP_LIMIT: usize = 5;

/// Render the finalized statistics as the console report.
pub fn render(out: &mut impl Write, analytics: &Analytics) -> io::Result<()> {
    writeln!(out, "--- Overall ---")?;
    writeln!(
        out,
        "Total requests: {}",
        analytics.total_requests().to_formatted_string(&Locale::en)
    )?;
    writeln!(
        out,
        "Distinct client addresses: {}",
        analytics.distinct_clients().to_formatted_string(&Locale::en)
    )?;
    writeln!(
        out,
        "Bytes transferred: {}",
        analytics.total_bytes().to_formatted_string(&Locale::en)
    )?;
    if analytics.failed_parses() > 0 {
        writeln!(
            out,
            "Lines that failed to parse: {}",
            analytics.failed_parses().to_formatted_string(&Locale::en)
        )?;
    }

    writeln!(out, "\n--- Status codes ---")?;
    for (status, count) in analytics.top_statuses(TOP_LIMIT) {
        writeln!(out, "{status}: {} requests", count.to_formatted_string(&Locale::en))?;
    }

    writeln!(out, "\n--- Methods ---")?;
    for (method, count) in analytics.top_methods(TOP_LIMIT) {
        writeln!(out, "{method}: {} requests", count.to_formatted_string(&Locale::en))?;
    }

    writeln!(out, "\n--- Popular paths ---")?;
    for (path, count) in analytics.top_paths(TOP_LIMIT) {
        writeln!(out, "'{path}': {} requests", count.to_formatted_string(&Locale::en))?;
    }

    writeln!(out, "\n--- Popular referers ---")?;
    for (referer, count) in analytics.top_referers(TOP_LIMIT) {
        writeln!(out, "'{referer}': {} requests", count.to_formatted_string(&Locale::en))?;
    }

    writeln!(out, "\n--- Requests by hour ---")?;
    for (hour, count) in analytics.requests_by_hour() {
        writeln!(
            out,
            "{:02}:00: {} requests",
            hour.get(),
            count.to_formatted_string(&Locale::en)
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parser::parse_line, source};
    use std::io::Cursor;

    fn rendered(log: &str) -> String {
        let mut analytics = Analytics::default();
        source::drain(Cursor::new(log), &mut analytics).unwrap();
        let mut out = Vec::new();
        render(&mut out, &analytics).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn report_covers_every_section() {
        let log = r#"203.0.113.5 - - [10/Oct/2023:13:55:36 +0000] "GET /index.html HTTP/1.1" 200 1500 "http://example.com/" "Mozilla/5.0"
198.51.100.7 - - [10/Oct/2023:14:03:40 +0000] "POST /login HTTP/1.1" 302 24 "-" "curl/8.5.0"
garbage
"#;
        let report = rendered(log);
        assert!(report.contains("Total requests: 2"));
        assert!(report.contains("Distinct client addresses: 2"));
        assert!(report.contains("Bytes transferred: 1,524"));
        assert!(report.contains("Lines that failed to parse: 1"));
        assert!(report.contains("200: 1 requests"));
        assert!(report.contains("GET: 1 requests"));
        assert!(report.contains("'/login': 1 requests"));
        assert!(report.contains("'http://example.com/': 1 requests"));
        assert!(report.contains("13:00: 1 requests"));
        assert!(report.contains("14:00: 1 requests"));
    }

    #[test]
    fn failure_line_is_omitted_when_clean() {
        let log = r#"203.0.113.5 - - [10/Oct/2023:13:55:36 +0000] "GET / HTTP/1.1" 200 10 "-" "-""#;
        let report = rendered(log);
        assert!(!report.contains("failed to parse"));
    }

    #[test]
    fn hours_come_out_ascending() {
        let mut analytics = Analytics::default();
        for hour in ["21", "05", "13"] {
            let line = format!(
                r#"10.0.0.1 - - [10/Oct/2023:{hour}:00:00 +0000] "GET / HTTP/1.1" 200 0 "-" "-""#
            );
            analytics.record(&parse_line(&line).unwrap());
        }
        let mut out = Vec::new();
        render(&mut out, &analytics).unwrap();
        let report = String::from_utf8(out).unwrap();

        let positions: Vec<_> = ["05:00", "13:00", "21:00"]
            .iter()
            .map(|h| report.find(h).unwrap())
            .collect();
        assert!(positions.is_sorted());
    }
}
