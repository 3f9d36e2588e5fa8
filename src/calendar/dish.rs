//! Menu-item parser: splits `"현미밥(5.6)"` into a dish name and its
//! trailing allergy-code annotation.

/// Names longer than this many characters get the compact display style.
pub const LONG_NAME_CHARS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDish {
    pub name: String,
    /// Dot-separated allergy codes, e.g. `"5.6.13"`.
    pub allergy_codes: Option<String>,
}

impl ParsedDish {
    #[must_use]
    pub fn is_long_name(&self) -> bool {
        self.name.chars().count() > LONG_NAME_CHARS
    }
}

/// Parse one raw dish string. Never fails: input without a well-formed
/// `(<digits and dots>)` suffix at its very end is treated as a bare name.
///
/// Only ASCII `0-9` count as digits; full-width or other Unicode digits
/// (`"밥(５)"`) leave the whole string as the name.
#[must_use]
pub fn parse_dish(raw: &str) -> ParsedDish {
    match split_allergy_suffix(raw) {
        Some((name, codes)) => ParsedDish { name: name.trim().to_owned(), allergy_codes: Some(codes.trim().to_owned()) },
        None => ParsedDish { name: raw.trim().to_owned(), allergy_codes: None },
    }
}

/// Returns `(name, codes)` when `raw` ends in `(<codes>)` with `codes` made of
/// ASCII digits and periods only.
fn split_allergy_suffix(raw: &str) -> Option<(&str, &str)> {
    let body = raw.strip_suffix(')')?;
    // The code group cannot contain '(' so the opening paren is the last one.
    let open = body.rfind('(')?;
    let codes = &body[open + 1..];
    if codes.is_empty() || !codes.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    Some((&body[..open], codes))
}

#[cfg(test)]
#[path = "dish_test.rs"]
mod tests;
