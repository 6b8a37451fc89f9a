//! Input sanitization for user-supplied text and URLs
//!
//! Mirrors the host platform's rules so echoed values look exactly like the
//! values it would have stored.

use regex::Regex;
use std::sync::LazyLock;

static SCRIPT_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(?:script|style)[^>]*?>.*?</(?:script|style)>").expect("valid regex")
});
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n\t ]+").expect("valid regex"));
static SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" +").expect("valid regex"));
static PERCENT_OCTET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%[a-fA-F0-9]{2}").expect("valid regex"));
static PHP_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z0-9-]+?\.php").expect("valid regex"));

/// Schemes accepted by [`url`]; anything else sanitizes to an empty string.
pub const ALLOWED_PROTOCOLS: &[&str] = &[
    "http", "https", "ftp", "ftps", "mailto", "news", "irc", "irc6", "ircs", "gopher", "nntp",
    "feed", "telnet", "mms", "rtsp", "sms", "svn", "tel", "fax", "xmpp", "webcal", "urn",
];

/// Sanitize a single-line text field.
pub fn text_field(input: &str) -> String {
    sanitize_text(input, false)
}

/// Sanitize a multi-line text field; line breaks survive.
pub fn textarea_field(input: &str) -> String {
    sanitize_text(input, true)
}

fn sanitize_text(input: &str, keep_newlines: bool) -> String {
    let mut filtered = input.to_string();

    if filtered.contains('<') {
        filtered = encode_lone_less_than(&filtered);
        filtered = strip_all_tags(&filtered);
    }

    if !keep_newlines {
        filtered = WHITESPACE_RUN.replace_all(&filtered, " ").into_owned();
    }
    filtered = filtered.trim().to_string();

    let mut found = false;
    while let Some(octet) = PERCENT_OCTET.find(&filtered) {
        let octet = octet.as_str().to_string();
        filtered = filtered.replace(&octet, "");
        found = true;
    }
    if found {
        filtered = SPACE_RUN.replace_all(&filtered, " ").trim().to_string();
    }

    filtered
}

/// Encode every `<` that does not open a tag (no `>` before the next `<`).
fn encode_lone_less_than(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for (i, c) in input.char_indices() {
        if c != '<' {
            out.push(c);
            continue;
        }
        let closes = input[i + 1..]
            .chars()
            .find(|&n| n == '<' || n == '>')
            .is_some_and(|n| n == '>');
        if closes {
            out.push('<');
        } else {
            out.push_str("&lt;");
        }
    }
    out
}

fn strip_all_tags(input: &str) -> String {
    let without_scripts = SCRIPT_STYLE.replace_all(input, "");
    TAG.replace_all(&without_scripts, "").trim().to_string()
}

/// Sanitize a URL for storage.
///
/// Returns an empty string when the URL uses a scheme outside
/// [`ALLOWED_PROTOCOLS`].
pub fn url(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let mut cleaned: String = trimmed
        .replace(' ', "%20")
        .chars()
        .filter(|&c| is_url_char(c))
        .collect();

    for newline in ["%0d", "%0a", "%0D", "%0A"] {
        while cleaned.contains(newline) {
            cleaned = cleaned.replace(newline, "");
        }
    }

    if cleaned.is_empty() {
        return String::new();
    }

    if !cleaned.contains(':')
        && !cleaned.starts_with(['/', '#', '?'])
        && !PHP_FILE.is_match(&cleaned)
    {
        cleaned = format!("http://{}", cleaned);
    }

    if let Some((scheme, _)) = cleaned.split_once(':') {
        let relative = scheme.contains(['/', '?', '#']);
        if !relative && !ALLOWED_PROTOCOLS.contains(&scheme.to_lowercase().as_str()) {
            return String::new();
        }
    }

    cleaned
}

fn is_url_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || !c.is_ascii() || "-~+_.?#=!&;,/:%@$|*'()[]".contains(c)
}
