use super::*;

// ---------------------------------------------------------------------------
// place info
// ---------------------------------------------------------------------------

#[test]
fn place_info_extracts_both_fields() {
    let info = parse_place_info(
        "PhoneNumber: 03-1234-5678\nAddress: 4 Chome-2-8 Shibakoen, Minato City, Tokyo 105-0011",
    )
    .unwrap();
    assert_eq!(info.phone_number, "03-1234-5678");
    assert_eq!(
        info.address,
        "4 Chome-2-8 Shibakoen, Minato City, Tokyo 105-0011"
    );
}

#[test]
fn place_info_trims_surrounding_whitespace() {
    let info = parse_place_info("PhoneNumber:    +81 3-3433-5111   \r\nAddress:\t Shibakoen  \r\n")
        .unwrap();
    assert_eq!(info.phone_number, "+81 3-3433-5111");
    assert_eq!(info.address, "Shibakoen");
}

#[test]
fn place_info_tolerates_preamble_and_reordering() {
    let text = "Sure! Here is what I found.\n\nAddress: 1-1-2 Oshiage, Sumida City\nPhoneNumber: 0570-55-0634\n";
    let info = parse_place_info(text).unwrap();
    assert_eq!(info.phone_number, "0570-55-0634");
    assert_eq!(info.address, "1-1-2 Oshiage, Sumida City");
}

#[test]
fn place_info_first_occurrence_wins() {
    let text = "PhoneNumber: 111\nAddress: first\nPhoneNumber: 222\nAddress: second";
    let info = parse_place_info(text).unwrap();
    assert_eq!(info.phone_number, "111");
    assert_eq!(info.address, "first");
}

#[test]
fn place_info_missing_phone_is_incomplete() {
    let err = parse_place_info("Address: somewhere").unwrap_err();
    assert!(matches!(err, GeminiError::IncompletePlaceInfo));
}

#[test]
fn place_info_missing_address_is_incomplete() {
    let err = parse_place_info("PhoneNumber: 03-0000-0000").unwrap_err();
    assert!(matches!(err, GeminiError::IncompletePlaceInfo));
}

#[test]
fn place_info_blank_value_is_incomplete() {
    let err = parse_place_info("PhoneNumber:\nAddress: 1 Main St").unwrap_err();
    assert!(matches!(err, GeminiError::IncompletePlaceInfo));
}

#[test]
fn place_info_values_on_next_line() {
    let info = parse_place_info("PhoneNumber:\n03-1234-5678\nAddress:\n1 Main St").unwrap();
    assert_eq!(info.phone_number, "03-1234-5678");
    assert_eq!(info.address, "1 Main St");
}

#[test]
fn place_info_blank_address_before_phone_is_incomplete() {
    let err = parse_place_info("Address:\nPhoneNumber: 03-0000-0000").unwrap_err();
    assert!(matches!(err, GeminiError::IncompletePlaceInfo));
}

#[test]
fn place_info_free_text_reply_is_incomplete() {
    let err = parse_place_info("There are several places called Station near you.").unwrap_err();
    assert!(matches!(err, GeminiError::IncompletePlaceInfo));
}

#[test]
fn place_info_empty_reply_is_incomplete() {
    assert!(matches!(
        parse_place_info(""),
        Err(GeminiError::IncompletePlaceInfo)
    ));
}

// ---------------------------------------------------------------------------
// map code
// ---------------------------------------------------------------------------

#[test]
fn map_code_accepts_typical_code() {
    assert_eq!(parse_map_code("  123 456 789*10 \n"), "123 456 789*10");
}

#[test]
fn map_code_accepts_any_text_with_a_digit() {
    assert_eq!(parse_map_code("Mapcode: 5"), "Mapcode: 5");
}

#[test]
fn map_code_without_digits_spaces_or_asterisks_is_not_found() {
    assert_eq!(parse_map_code("Unknown"), MAP_CODE_NOT_FOUND);
    assert_eq!(parse_map_code("N/A."), MAP_CODE_NOT_FOUND);
}

#[test]
fn map_code_empty_reply_is_not_found() {
    assert_eq!(parse_map_code(""), MAP_CODE_NOT_FOUND);
    assert_eq!(parse_map_code("   \n "), MAP_CODE_NOT_FOUND);
}

#[test]
fn map_code_internal_space_counts() {
    assert_eq!(parse_map_code("not available"), "not available");
}

// ---------------------------------------------------------------------------
// candidates
// ---------------------------------------------------------------------------

#[test]
fn candidates_parsed_in_reply_order() {
    let text = "\
Name: Tokyo Station | Address: 1 Chome Marunouchi, Chiyoda City | Latitude: 35.6812 | Longitude: 139.7671
Name: Shinjuku Station | Address: 3 Chome-38-1 Shinjuku | Latitude: 35.6896 | Longitude: 139.7006
Name: Ueno Station | Address: 7 Chome-1-1 Ueno, Taito City | Latitude: 35.7138 | Longitude: 139.7773";
    let candidates = parse_candidates(text);
    let names: Vec<_> = candidates.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Tokyo Station", "Shinjuku Station", "Ueno Station"]);
    assert_eq!(candidates[0].address, "1 Chome Marunouchi, Chiyoda City");
    assert!((candidates[1].latitude - 35.6896).abs() < f64::EPSILON);
    assert!((candidates[2].longitude - 139.7773).abs() < f64::EPSILON);
}

#[test]
fn candidates_skip_lines_without_pipe() {
    let text = "Here are some options:\n\
Name: A | Address: Addr A | Latitude: 1.0 | Longitude: 2.0\n\
Name: B, Address: Addr B, Latitude: 3.0, Longitude: 4.0\n\
Let me know which one.";
    let candidates = parse_candidates(text);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].name, "A");
}

#[test]
fn candidates_n_good_and_m_malformed_lines_yield_n() {
    let text = "\
Name: A | Address: Addr A | Latitude: 1.0 | Longitude: 2.0
Name:  | Address: Addr X | Latitude: 1.0 | Longitude: 2.0
Name: B | Address: Addr B | Latitude: -33.86 | Longitude: 151.2
Name: C | Address: Addr C | Latitude: unknown | Longitude: 2.0
Name: D | Address:  | Latitude: 1.0 | Longitude: 2.0
Name: E | Address: Addr E | Latitude: 1.0
Name: F | Address: Addr F | Latitude: . | Longitude: 2.0
Name: G | Address: Addr G | Latitude: 5 | Longitude: -7";
    let candidates = parse_candidates(text);
    let names: Vec<_> = candidates.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "G"]);
    assert!((candidates[1].latitude + 33.86).abs() < f64::EPSILON);
    assert!((candidates[2].longitude + 7.0).abs() < f64::EPSILON);
}

#[test]
fn candidates_name_and_address_stop_at_next_pipe() {
    let text = "Name:   Tokyo Tower   |Address: 4 Chome-2-8   | Latitude: 35.65 | Longitude: 139.74";
    let candidates = parse_candidates(text);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].name, "Tokyo Tower");
    assert_eq!(candidates[0].address, "4 Chome-2-8");
}

#[test]
fn candidates_keep_line_ending_in_a_period() {
    let candidates = parse_candidates(
        "Name: Tokyo Station | Address: Marunouchi | Latitude: 35.6812 | Longitude: 139.7671.",
    );
    assert_eq!(candidates.len(), 1);
    assert!((candidates[0].latitude - 35.6812).abs() < f64::EPSILON);
    assert!((candidates[0].longitude - 139.7671).abs() < f64::EPSILON);
}

#[test]
fn candidates_accept_bare_fraction_and_trailing_point() {
    let candidates =
        parse_candidates("Name: A | Address: Addr A | Latitude: -.5 | Longitude: 12.");
    assert_eq!(candidates.len(), 1);
    assert!((candidates[0].latitude + 0.5).abs() < f64::EPSILON);
    assert!((candidates[0].longitude - 12.0).abs() < f64::EPSILON);
}

#[test]
fn candidates_empty_reply_yields_none() {
    assert!(parse_candidates("").is_empty());
    assert!(parse_candidates("I could not find any matching places.").is_empty());
}
