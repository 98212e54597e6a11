//! Filesystem-safe path segments.
//!
//! [`sanitize`] follows the rules of the `filenamify` family of libraries:
//! reserved and control characters are replaced, relative-path dots are
//! removed, the result is capped in length and Windows device names are made
//! harmless. The function is total and idempotent.

/// Character substituted for anything that cannot appear in a path segment.
pub const REPLACEMENT: char = '_';

/// Maximum length of a sanitized segment, in characters.
pub const MAX_LENGTH: usize = 100;

const RESERVED: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

fn is_disallowed(c: char) -> bool {
    RESERVED.contains(&c) || matches!(c, '\u{0}'..='\u{1f}' | '\u{7f}'..='\u{9f}')
}

fn is_windows_reserved(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    match lower.as_str() {
        "con" | "prn" | "aux" | "nul" => true,
        _ => {
            let bytes = lower.as_bytes();
            bytes.len() == 4
                && (lower.starts_with("com") || lower.starts_with("lpt"))
                && bytes[3].is_ascii_digit()
        }
    }
}

/// Maps an arbitrary string to a string usable as a single path segment.
///
/// ```rust
/// use soundboard_dl::utils::sanitize;
///
/// assert_eq!(sanitize("x:y"), "x_y");
/// assert_eq!(sanitize("../secret"), "secret");
/// assert_eq!(sanitize("nul"), "nul_");
/// ```
pub fn sanitize(segment: &str) -> String {
    let mut replaced = String::with_capacity(segment.len());
    for c in segment.chars() {
        let c = if is_disallowed(c) { REPLACEMENT } else { c };
        // Collapse runs of the replacement character.
        if c == REPLACEMENT && replaced.ends_with(REPLACEMENT) {
            continue;
        }
        replaced.push(c);
    }

    let trimmed = replaced
        .trim_start_matches(['.', REPLACEMENT])
        .trim_end_matches(REPLACEMENT);
    if trimmed.is_empty() {
        return if segment.is_empty() {
            String::new()
        } else {
            REPLACEMENT.to_string()
        };
    }

    let truncated: String = trimmed.chars().take(MAX_LENGTH).collect();
    let mut result = truncated.trim_end_matches(REPLACEMENT).to_string();

    if is_windows_reserved(&result) {
        result.push(REPLACEMENT);
    }
    result
}
