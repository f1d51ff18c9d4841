//! Data parsing helpers.
//!
//! The date parser matches a pattern and a value *positionally*, after
//! cutting both into pieces on runs of separator characters.  The cutting
//! keeps the empty leading and trailing pieces a separator at either end
//! produces, so that positions line up the same way for pattern and value.

/// Split `s` on every maximal run of characters matching `is_sep`.
///
/// A separator run at the start or end yields an empty first or last piece;
/// an empty input yields a single empty piece.
///
/// ```
/// use nl_core::utilities::data_parsers::split_runs;
///
/// let pieces = split_runs("2013-05-01 三", |c| !c.is_ascii_digit());
/// assert_eq!(pieces, ["2013", "05", "01", ""]);
/// ```
pub fn split_runs(s: &str, is_sep: impl Fn(char) -> bool) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut in_sep = false;
    for (i, c) in s.char_indices() {
        if is_sep(c) {
            if !in_sep {
                pieces.push(&s[start..i]);
                in_sep = true;
            }
        } else if in_sep {
            start = i;
            in_sep = false;
        }
    }
    pieces.push(if in_sep { "" } else { &s[start..] });
    pieces
}

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// Returns `(year, month, day)` on success; the triple is not checked
/// against the calendar.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    let mut parts = s.split('-');
    let year: u16 = parts.next()?.parse().ok()?;
    let month: u8 = parts.next()?.parse().ok()?;
    let day: u8 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((year, month, day))
}
