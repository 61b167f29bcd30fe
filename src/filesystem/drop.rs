// src/filesystem/drop.rs
//
// Terminals turn a drag-and-drop into pasted text. Depending on the emulator
// the paths arrive single-quoted, double-quoted, with backslash-escaped
// spaces, or as newline separated file:// URIs. A backslash only escapes
// whitespace, quotes or another backslash; anywhere else it is a Windows
// path separator and stays.
use regex::Regex;
use std::path::PathBuf;
use std::sync::OnceLock;

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#"'([^']*)'|"([^"]*)"|((?:\\.|[^\s'"\\])+)"#).expect("drop token pattern"))
}

fn escape_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#"\\([\s'"\\])"#).expect("escape pattern"))
}

pub fn parse_dropped(payload: &str) -> Vec<PathBuf> {
    token_pattern()
        .captures_iter(payload)
        .filter_map(|caps| {
            let token = if let Some(quoted) = caps.get(1).or_else(|| caps.get(2)) {
                quoted.as_str().to_string()
            } else {
                let bare = caps.get(3)?.as_str();
                escape_pattern().replace_all(bare, "$1").into_owned()
            };
            let token = match token.strip_prefix("file://") {
                Some(uri) => percent_decode(uri),
                None => token,
            };
            (!token.is_empty()).then(|| PathBuf::from(token))
        })
        .collect()
}

fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push(hi << 4 | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(byte: u8) -> Option<u8> {
    (byte as char).to_digit(16).map(|d| d as u8)
}
