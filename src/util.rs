use std::{borrow::Cow, fmt::Debug, ops::Range};

use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Clone, PartialEq, Eq)]
pub struct SourceLocation(pub Range<usize>);
impl SourceLocation {
    pub fn start(&self) -> usize {
        self.0.start
    }

    pub(crate) fn combine(
        start: impl Into<Option<SourceLocation>>,
        end: impl Into<Option<SourceLocation>>,
    ) -> Option<SourceLocation> {
        let start = start.into();
        let end = end.into();
        start
            .zip(end)
            .map(|(start, end)| SourceLocation(start.0.start..end.0.end))
    }
}
impl From<Range<usize>> for SourceLocation {
    fn from(range: Range<usize>) -> Self {
        Self(range)
    }
}
// Custom implementation of debug so that it is a bit less verbose when
// printed
impl Debug for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("SourceLocation({:?})", self.0))
    }
}

// `from_str_radix` accepts a leading sign, so the digits are checked first
fn is_hex(src: &str, len: usize) -> bool {
    src.len() == len && src.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Parse RGB text without a leading #
pub(crate) fn parse_rgb(src: &str) -> Option<[u8; 3]> {
    if !is_hex(src, 6) {
        return None;
    }
    let pcolor = u32::from_str_radix(src, 16).ok()?;
    let red = (pcolor & 0xFF0000) >> 16;
    let green = (pcolor & 0xFF00) >> 8;
    let blue = pcolor & 0xFF;
    Some([red as u8, green as u8, blue as u8])
}

/// Parse RGB text of 3 chars without a leading #
pub(crate) fn parse_rgb_3(src: &str) -> Option<[u8; 3]> {
    if !is_hex(src, 3) {
        return None;
    }
    let pcolor = u16::from_str_radix(src, 16).ok()?;
    let red = (pcolor & 0xF00) >> 8;
    let green = (pcolor & 0xF0) >> 4;
    let blue = pcolor & 0x0F;
    // Expand each nibble, so `#abc` is `#aabbcc`
    Some([(red * 17) as u8, (green * 17) as u8, (blue * 17) as u8])
}

static ESCAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    const REGEX_TEXT: &str = r#"[&<>"']"#;

    Regex::new(REGEX_TEXT).expect("escape regex is valid")
});

// escape adapted from KaTeX which adapted it from Facebook's React under Apache 2 license

/// Escapes text to prevent scripting attacks
pub(crate) fn escape(text: &str) -> Cow<'_, str> {
    ESCAPE_REGEX.replace_all(text, |caps: &regex::Captures| -> &'static str {
        match &caps[0] {
            "&" => "&amp;",
            ">" => "&gt;",
            "<" => "&lt;",
            "\"" => "&quot;",
            "'" => "&#x27;",
            _ => "",
        }
    })
}

/// Find the value associated with a key in a slice of tuples. A poor hashmap.
pub(crate) fn find_assoc_data<K: PartialEq, V>(data: &[(K, V)], key: K) -> Option<&V> {
    data.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
}
