use regex::Regex;
use std::sync::LazyLock;

// Case-sensitive: "5 Years Experience" does not count.
static EXPERIENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*(?:years?|yrs?)\s*(?:of)?\s*(?:experience|exp)")
        .expect("valid experience pattern")
});

static DECIMAL_DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{Nd}$").expect("valid digit pattern"));

/// Largest "N years of experience" figure stated in the text.
///
/// Returns `None` when nothing matches, so an explicit "0 years experience"
/// stays distinguishable from absence.
pub fn estimate_experience(text: &str) -> Option<u64> {
    EXPERIENCE_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let digits = caps.get(1)?.as_str();
            let years = parse_decimal(digits);
            if years.is_none() {
                tracing::warn!(digits, "skipping experience figure that overflows u64");
            }
            years
        })
        .max()
}

/// Parse a run of Unicode decimal digits (`\d` also matches "５" or "٣").
fn parse_decimal(digits: &str) -> Option<u64> {
    digits.chars().try_fold(0u64, |acc, c| {
        acc.checked_mul(10)?.checked_add(digit_value(c)?)
    })
}

/// Every Unicode decimal digit set is a contiguous 0..=9 block, and adjacent
/// sets (the mathematical digits) are whole blocks, so the position within
/// the surrounding run of `Nd` code points gives the value.
fn digit_value(c: char) -> Option<u64> {
    if let Some(d) = c.to_digit(10) {
        return Some(u64::from(d));
    }
    if !is_decimal_digit(c) {
        return None;
    }
    let mut offset = 0u32;
    let mut cp = c as u32;
    while let Some(prev) = cp.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        offset += 1;
        cp -= 1;
    }
    Some(u64::from(offset % 10))
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT_RE.is_match(c.encode_utf8(&mut buf))
}
