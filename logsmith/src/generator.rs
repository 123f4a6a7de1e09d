use chrono::Local;
use rand::{Rng, seq::IndexedRandom};

const METHODS: [(&str, u8); 4] = [("GET", 6), ("POST", 2), ("PUT", 1), ("DELETE", 1)];
const PATHS: [(&str, u8); 6] = [
    ("/", 10),
    ("/login", 10),
    ("/api", 50),
    ("/admin", 5),
    ("/splash", 20),
    ("/gallery", 10),
];
const STATUS: [(u16, u8); 6] = [
    (200, 50),
    (201, 10),
    (400, 10),
    (401, 20),
    (404, 50),
    (500, 5),
];
const REFERERS: [(&str, u8); 4] = [
    ("-", 40),
    ("http://example.com/", 20),
    ("https://www.google.com/search", 10),
    ("https://news.ycombinator.com/", 5),
];
const AGENTS: [(&str, u8); 4] = [
    ("Mozilla/5.0 (X11; Linux x86_64) Firefox/128.0", 30),
    ("Mozilla/5.0 (Windows NT 10.0; Win64; x64) Chrome/126.0", 30),
    ("curl/8.5.0", 5),
    ("-", 5),
];

pub fn generate_access_line<R: Rng + ?Sized>(rng: &mut R) -> String {
    let ip = format!(
        "192.168.{}.{}",
        rng.random_range(0..256),
        rng.random_range(0..256)
    );
    let timestamp = Local::now().format("%d/%b/%Y:%H:%M:%S %z");
    let method = METHODS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let path = PATHS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let status = STATUS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let bytes = if rng.random_range(0..10) == 0 {
        "-".to_string()
    } else {
        rng.random_range(100..2000).to_string()
    };
    let referer = REFERERS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let agent = AGENTS.choose_weighted(rng, |(_, w)| *w).unwrap().0;

    format!(
        "{ip} - - [{timestamp}] \"{method} {path} HTTP/1.1\" {status} {bytes} \"{referer}\" \"{agent}\""
    )
}

/// Corrupt a well formed line so the analyzer has something to reject.
pub fn mangle<R: Rng + ?Sized>(line: &str, rng: &mut R) -> String {
    match rng.random_range(0..3) {
        // drop the closing quote of the user agent
        0 => line[..line.len() - 1].to_string(),
        // lowercase everything, the method included
        1 => line.to_lowercase(),
        // cut off mid-line
        _ => line[..line.len() / 2].to_string(),
    }
}
