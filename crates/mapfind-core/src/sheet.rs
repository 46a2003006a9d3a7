//! Spreadsheet and map-link formatting for resolved places.
//!
//! Rows are tab-separated in the order place name, map code, phone number,
//! address, so they paste straight into Google Sheets or Excel.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::place::{GeoCoordinate, ResolvedPlace, ResultList};

const MAP_SEARCH_BASE: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Formats one place as a single TSV line (no trailing newline).
#[must_use]
pub fn row_to_tsv(place: &ResolvedPlace) -> String {
    [
        place.place_name.as_str(),
        place.map_code.as_str(),
        place.phone_number.as_str(),
        place.address.as_str(),
    ]
    .into_iter()
    .map(cell)
    .collect::<Vec<_>>()
    .join("\t")
}

/// Formats every place, one per line, in list order.
#[must_use]
pub fn results_to_tsv(results: &ResultList) -> String {
    results.iter().map(row_to_tsv).collect::<Vec<_>>().join("\n")
}

/// Link to a map search for `address`.
#[must_use]
pub fn address_search_url(address: &str) -> String {
    format!(
        "{MAP_SEARCH_BASE}{}",
        utf8_percent_encode(address, NON_ALPHANUMERIC)
    )
}

/// Embeddable map view centred on `center`.
#[must_use]
pub fn embedded_map_url(center: GeoCoordinate) -> String {
    format!(
        "https://maps.google.com/maps?q={},{}&z=12&output=embed",
        center.latitude, center.longitude
    )
}

// Tabs and line breaks inside a field would shift spreadsheet columns.
fn cell(field: &str) -> String {
    field.replace(['\t', '\r', '\n'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(name: &str, code: &str) -> ResolvedPlace {
        ResolvedPlace {
            id: "2025-01-01T00:00:00.000Z".to_string(),
            place_name: name.to_string(),
            phone_number: "03-1234-5678".to_string(),
            map_code: code.to_string(),
            address: "4 Chome-2-8 Shibakoen".to_string(),
        }
    }

    #[test]
    fn row_uses_name_code_phone_address_order() {
        assert_eq!(
            row_to_tsv(&place("Tokyo Tower", "123 456 789*00")),
            "Tokyo Tower\t123 456 789*00\t03-1234-5678\t4 Chome-2-8 Shibakoen"
        );
    }

    #[test]
    fn all_rows_joined_by_newline_in_list_order() {
        let list = ResultList::from(vec![place("A", "1"), place("B", "2")]);
        let tsv = results_to_tsv(&list);
        let lines: Vec<_> = tsv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("A\t1\t"));
        assert!(lines[1].starts_with("B\t2\t"));
        assert!(!tsv.ends_with('\n'));
    }

    #[test]
    fn empty_list_yields_empty_string() {
        assert_eq!(results_to_tsv(&ResultList::new()), "");
    }

    #[test]
    fn embedded_tabs_and_newlines_are_flattened() {
        let mut p = place("Tokyo\tTower", "1");
        p.address = "line one\nline two".to_string();
        let row = row_to_tsv(&p);
        assert_eq!(row.matches('\t').count(), 3);
        assert!(row.ends_with("line one line two"));
    }

    #[test]
    fn address_url_is_percent_encoded() {
        let url = address_search_url("1 Chome & Co, Tokyo");
        assert_eq!(
            url,
            "https://www.google.com/maps/search/?api=1&query=1%20Chome%20%26%20Co%2C%20Tokyo"
        );
    }

    #[test]
    fn embedded_map_url_centres_on_coordinates() {
        let center = GeoCoordinate::new(35.5, 139.25).unwrap();
        assert_eq!(
            embedded_map_url(center),
            "https://maps.google.com/maps?q=35.5,139.25&z=12&output=embed"
        );
    }
}
