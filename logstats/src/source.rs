use std::io::{self, BufRead};

use crate::{analytics::Analytics, parser};

/// Drain a line source into the running statistics, in source order.
///
/// Lines the grammar rejects only bump the failure counter. The first I/O
/// error aborts the whole run; whatever was aggregated so far is discarded
/// by the caller, never reported.
pub fn drain(source: impl BufRead, analytics: &mut Analytics) -> io::Result<()> {
    for line in source.lines() {
        match parser::parse_line(&line?) {
            Some(entry) => analytics.record(&entry),
            None => analytics.record_failure(),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    const LOG: &str = r#"203.0.113.5 - - [10/Oct/2023:13:55:36 +0000] "GET /index.html HTTP/1.1" 200 1024 "http://example.com/" "Mozilla/5.0"
198.51.100.7 - - [10/Oct/2023:14:03:40 +0000] "POST /login HTTP/1.1" 302 - "-" "curl/8.5.0"
this line is noise
"#;

    #[test]
    fn successes_and_failures_add_up_to_lines_read() {
        let mut analytics = Analytics::default();
        drain(Cursor::new(LOG), &mut analytics).unwrap();

        assert_eq!(analytics.total_requests(), 2);
        assert_eq!(analytics.failed_parses(), 1);
        assert_eq!(analytics.total_requests() + analytics.failed_parses(), 3);
        assert_eq!(analytics.total_bytes(), 1024);
        assert_eq!(analytics.distinct_clients(), 2);
    }

    struct FailsAfter<R> {
        inner: R,
        remaining: usize,
    }

    impl<R: Read> Read for FailsAfter<R> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.remaining == 0 {
                return Err(io::Error::other("disk gone"));
            }
            let len = buf.len().min(self.remaining);
            let n = self.inner.read(&mut buf[..len])?;
            self.remaining -= n;
            Ok(n)
        }
    }

    #[test]
    fn io_error_aborts_the_run() {
        let source = io::BufReader::new(FailsAfter {
            inner: Cursor::new(LOG),
            remaining: 40,
        });
        let mut analytics = Analytics::default();
        let result = drain(source, &mut analytics);
        assert!(result.is_err());
    }
}
