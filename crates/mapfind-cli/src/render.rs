//! Plain-text rendering of lookup state for the terminal.
//!
//! Every function returns a `String` so output can be asserted in tests; the
//! callers decide whether it goes to stdout or stderr.

use std::io::IsTerminal;

use mapfind_core::{
    address_search_url, embedded_map_url, CandidatePlace, GeoCoordinate, ResolvedPlace, ResultList,
};

const TITLE: &str = "mapfind: phone numbers, addresses and Mapcodes for places near you";

const NO_RESULTS: &str = "No results yet. Search for a place to add it here.";

pub(crate) fn header() -> String {
    format!("{TITLE}\n{}", "=".repeat(TITLE.chars().count()))
}

pub(crate) fn error_banner(message: &str) -> String {
    format!("Error: {message}")
}

/// Whether addresses should be emitted as terminal hyperlinks.
pub(crate) fn hyperlinks_enabled() -> bool {
    std::io::stdout().is_terminal()
}

/// One line per candidate, as shown in the chooser.
pub(crate) fn candidate_label(candidate: &CandidatePlace) -> String {
    format!("{} ({})", candidate.name, candidate.address)
}

/// The "did you mean" block, with a map of the area when the location is known.
pub(crate) fn candidates(candidates: &[CandidatePlace], center: Option<GeoCoordinate>) -> String {
    let mut lines = vec!["Your search was too broad. Did you mean one of these?".to_string()];
    lines.extend(
        candidates
            .iter()
            .enumerate()
            .map(|(i, c)| format!("  {}. {}", i + 1, candidate_label(c))),
    );
    if let Some(center) = center {
        lines.push(format!("Map of nearby locations: {}", embedded_map_url(center)));
    }
    lines.join("\n")
}

/// The result table, newest first, with a 1-based row number for `copy --row`.
///
/// With `hyperlinks` the address cell is an OSC 8 link to a map search;
/// without, the link is printed on its own line under the row.
pub(crate) fn results_table(results: &ResultList, hyperlinks: bool) -> String {
    if results.is_empty() {
        return NO_RESULTS.to_string();
    }

    let width = |header: &str, cell: fn(&ResolvedPlace) -> &str| {
        results
            .iter()
            .map(|p| cell(p).chars().count())
            .chain(std::iter::once(header.chars().count()))
            .max()
            .unwrap_or(0)
    };
    let row_w = results.len().to_string().len().max(1);
    let name_w = width("PLACE NAME", |p| p.place_name.as_str());
    let phone_w = width("TELEPHONE", |p| p.phone_number.as_str());
    let code_w = width("MAP CODE", |p| p.map_code.as_str());

    let mut lines = vec![
        "Results".to_string(),
        "Use `copy` to paste all rows into a spreadsheet.".to_string(),
        format!(
            "{:<row_w$}  {:<name_w$}  {:<phone_w$}  {:<code_w$}  ADDRESS",
            "#", "PLACE NAME", "TELEPHONE", "MAP CODE"
        ),
    ];
    for (i, place) in results.iter().enumerate() {
        let url = address_search_url(&place.address);
        let address = if hyperlinks {
            osc8_link(&url, &place.address)
        } else {
            place.address.clone()
        };
        lines.push(format!(
            "{:<row_w$}  {:<name_w$}  {:<phone_w$}  {:<code_w$}  {address}",
            i + 1,
            place.place_name,
            place.phone_number,
            place.map_code,
        ));
        if !hyperlinks {
            lines.push(format!("{:row_w$}  map: {url}", ""));
        }
    }
    lines.join("\n")
}

fn osc8_link(url: &str, text: &str) -> String {
    format!("\x1b]8;;{url}\x1b\\{text}\x1b]8;;\x1b\\")
}
