//! Extraction of structured fields from the model's free-text replies.

use std::sync::LazyLock;

use mapfind_core::{CandidatePlace, MAP_CODE_NOT_FOUND};
use regex::Regex;

use crate::error::GeminiError;

// A value may sit on the line after its label.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"PhoneNumber:\s*(.*)").expect("valid phone regex"));
static ADDRESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Address:\s*(.*)").expect("valid address regex"));

const PLACE_INFO_LABELS: [&str; 2] = ["PhoneNumber:", "Address:"];

static CANDIDATE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Name:\s*(.*?)\s*\|").expect("valid name regex"));
static CANDIDATE_ADDRESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Address:\s*(.*?)\s*\|").expect("valid address regex"));
static CANDIDATE_LAT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Latitude:\s*(-?(?:\d+(?:\.\d*)?|\.\d+))").expect("valid latitude regex")
});
static CANDIDATE_LON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Longitude:\s*(-?(?:\d+(?:\.\d*)?|\.\d+))").expect("valid longitude regex")
});

/// Phone number and address of a single place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceInfo {
    pub phone_number: String,
    pub address: String,
}

/// Extracts the `PhoneNumber:` and `Address:` values from a reply.
///
/// The first occurrence of each label wins. Values are trimmed and may be on
/// the line after their label.
///
/// # Errors
///
/// Returns [`GeminiError::IncompletePlaceInfo`] if either label is missing or
/// its value is blank. A blank label followed by the other label counts as
/// blank.
pub fn parse_place_info(text: &str) -> Result<PlaceInfo, GeminiError> {
    let labelled = |re: &Regex| {
        first_capture(re, text)
            .filter(|value| !PLACE_INFO_LABELS.iter().any(|l| value.starts_with(l)))
    };
    let phone_number = labelled(&PHONE_RE);
    let address = labelled(&ADDRESS_RE);

    match (phone_number, address) {
        (Some(phone_number), Some(address)) => Ok(PlaceInfo {
            phone_number,
            address,
        }),
        _ => Err(GeminiError::IncompletePlaceInfo),
    }
}

/// Interprets a Mapcode reply.
///
/// A trimmed reply containing at least one digit, whitespace, or `*` is
/// accepted verbatim; anything else becomes [`MAP_CODE_NOT_FOUND`].
#[must_use]
pub fn parse_map_code(text: &str) -> String {
    let code = text.trim();
    let looks_like_code = code
        .chars()
        .any(|c| c.is_ascii_digit() || c.is_whitespace() || c == '*');
    if looks_like_code {
        code.to_owned()
    } else {
        MAP_CODE_NOT_FOUND.to_owned()
    }
}

/// Parses one candidate per line, in reply order.
///
/// Lines without a `|` are skipped. A line is kept only when name and
/// address are non-empty and both coordinates parse as finite numbers;
/// anything else is dropped without error.
#[must_use]
pub fn parse_candidates(text: &str) -> Vec<CandidatePlace> {
    text.trim()
        .lines()
        .filter(|line| line.contains('|'))
        .filter_map(parse_candidate_line)
        .collect()
}

fn parse_candidate_line(line: &str) -> Option<CandidatePlace> {
    let name = first_capture(&CANDIDATE_NAME_RE, line)?;
    let address = first_capture(&CANDIDATE_ADDRESS_RE, line)?;
    let latitude = parse_finite(&CANDIDATE_LAT_RE, line)?;
    let longitude = parse_finite(&CANDIDATE_LON_RE, line)?;
    Some(CandidatePlace {
        name,
        address,
        latitude,
        longitude,
    })
}

/// Trimmed first capture group, `None` if absent or blank.
fn first_capture(re: &Regex, text: &str) -> Option<String> {
    let value = re.captures(text)?.get(1)?.as_str().trim();
    (!value.is_empty()).then(|| value.to_owned())
}

fn parse_finite(re: &Regex, text: &str) -> Option<f64> {
    let raw = re.captures(text)?.get(1)?.as_str();
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
