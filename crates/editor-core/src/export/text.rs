//! Plain text from editor markup
//!
//! Roughly what a browser reports as `innerText`: block elements and `<br>`
//! start a new line, every other tag disappears, and character references
//! are decoded. Text that already contains newlines keeps them.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// HTML comments, or a start/end tag with its name captured
    static ref TAG_PATTERN: Regex =
        Regex::new(r"<!--[\s\S]*?-->|<(/?)([a-zA-Z][a-zA-Z0-9]*)[^>]*>").unwrap();

    static ref ENTITY_PATTERN: Regex =
        Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]+);").unwrap();
}

const BLOCK_TAGS: &[&str] = &[
    "address", "article", "blockquote", "div", "h1", "h2", "h3", "h4", "h5", "h6", "li", "ol",
    "p", "pre", "section", "table", "tr", "ul",
];

pub fn plain_text(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut last = 0;

    for caps in TAG_PATTERN.captures_iter(markup) {
        let whole = caps.get(0).map(|m| (m.start(), m.end())).unwrap_or((last, last));
        out.push_str(&decode_entities(&markup[last..whole.0]));
        last = whole.1;

        let Some(name) = caps.get(2) else {
            continue; // comment
        };
        let name = name.as_str().to_ascii_lowercase();

        if name == "br" {
            out.push('\n');
        } else if BLOCK_TAGS.contains(&name.as_str()) && !out.is_empty() && !out.ends_with('\n')
        {
            out.push('\n');
        }
    }
    out.push_str(&decode_entities(&markup[last..]));

    out.trim_end_matches('\n').to_string()
}

fn decode_entities(text: &str) -> String {
    ENTITY_PATTERN
        .replace_all(text, |caps: &Captures| {
            let entity = &caps[1];
            let decoded = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some(' '),
                _ => numeric_reference(entity),
            };
            match decoded {
                Some(c) => c.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn numeric_reference(entity: &str) -> Option<char> {
    let digits = entity.strip_prefix('#')?;
    let hex = digits
        .strip_prefix('x')
        .or_else(|| digits.strip_prefix('X'));
    let code = match hex {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse().ok()?,
    };
    char::from_u32(code)
}
