use regex::Regex;
use std::sync::LazyLock;

static DATE_INPUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})/(\d{1,2})/(\d{1,2})$").expect("date input pattern"));
static DATE_ISO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("iso date pattern"));
static MONTH_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-(\d{2})$").expect("month key pattern"));

/// Maps the characters people commonly type into a numeric field to their
/// half-width ASCII equivalents: full-width digits, the full-width and
/// ideographic decimal points and commas, the full-width minus, and any
/// embedded whitespace (including ideographic space).
pub fn normalize_number_text(raw: &str) -> String {
    raw.chars()
        .filter_map(|ch| match ch {
            '０'..='９' => Some((b'0' + (ch as u32 - '０' as u32) as u8) as char),
            '．' | '。' | '，' | '、' => Some('.'),
            '－' => Some('-'),
            c if c.is_whitespace() => None,
            c => Some(c),
        })
        .collect()
}

/// Parses an hours value after normalization. `None` means the text is empty
/// or not a finite number; zero and negative values parse successfully and are
/// rejected by the caller.
pub fn parse_hours(raw: &str) -> Option<f64> {
    let text = normalize_number_text(raw);
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Normalizes free-form date text (`YYYY/MM/DD`, `YYYY-MM-DD`, or `YYYY.MM.DD`
/// with 1-2 digit month/day) to canonical `YYYY-MM-DD`. Month must be 1-12 and
/// day 1-31, but the day is not checked against the month's actual length, so
/// "2026/02/31" is accepted.
pub fn normalize_date(input: &str) -> Option<String> {
    let unified = input.trim().replace(['.', '-'], "/");
    let caps = DATE_INPUT.captures(&unified)?;
    let year: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some(format!("{year:04}-{month:02}-{day:02}"))
}

/// Inverse of [`normalize_date`] for display: canonical `YYYY-MM-DD` back to
/// the slash form shown in the entry list.
pub fn to_slash_date(iso: &str) -> Option<String> {
    let caps = DATE_ISO.captures(iso)?;
    Some(format!("{}/{}/{}", &caps[1], &caps[2], &caps[3]))
}

/// Whether text is a canonical `YYYY-MM-DD` date. Persisted entries are
/// dropped on load when their date fails this, so the rest of the code can
/// assume the shape.
pub fn is_canonical_date(text: &str) -> bool {
    DATE_ISO.is_match(text)
}

/// `YYYY-MM` partition key from a canonical date.
pub fn month_of(iso_date: &str) -> &str {
    iso_date.get(..7).unwrap_or(iso_date)
}

/// Whether text is a well-formed `YYYY-MM` partition key.
pub fn is_month_key(text: &str) -> bool {
    MONTH_KEY
        .captures(text)
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .is_some_and(|month| (1..=12).contains(&month))
}
