//! Prompt texts for the three lookups.
//!
//! The wording fixes the reply grammar the parsers in [`crate::parse`]
//! expect; change both together.

/// Asks for `PhoneNumber:` and `Address:` lines.
#[must_use]
pub fn place_info_prompt(place_name: &str) -> String {
    format!(
        "Find the official phone number and full address for \"{place_name}\". \
         Respond in the format:\n\
         PhoneNumber: [The phone number]\n\
         Address: [The full address]"
    )
}

/// Asks for a bare Japan Mapcode.
#[must_use]
pub fn map_code_prompt(address: &str) -> String {
    format!(
        "What is the Japan Mapcode for the address: \"{address}\"? \
         Respond with only the numerical map code, for example: \"123 456 789*10\"."
    )
}

/// Asks for up to five pipe-delimited candidate lines.
#[must_use]
pub fn candidates_prompt(place_name: &str) -> String {
    format!(
        "Find up to 5 possible places that match \"{place_name}\". \
         For each place, respond with each on a new line in the format:\n\
         Name: [name] | Address: [address] | Latitude: [latitude] | Longitude: [longitude]"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_info_prompt_names_both_labels() {
        let prompt = place_info_prompt("Tokyo Tower");
        assert!(prompt.contains("\"Tokyo Tower\""));
        assert!(prompt.contains("\nPhoneNumber: [The phone number]\n"));
        assert!(prompt.ends_with("Address: [The full address]"));
    }

    #[test]
    fn map_code_prompt_quotes_address_and_example() {
        let prompt = map_code_prompt("4 Chome-2-8 Shibakoen");
        assert!(prompt.starts_with("What is the Japan Mapcode for the address: \"4 Chome-2-8 Shibakoen\"?"));
        assert!(prompt.contains("\"123 456 789*10\""));
    }

    #[test]
    fn candidates_prompt_describes_line_shape() {
        let prompt = candidates_prompt("Station");
        assert!(prompt.contains("up to 5 possible places that match \"Station\""));
        assert!(prompt.ends_with(
            "Name: [name] | Address: [address] | Latitude: [latitude] | Longitude: [longitude]"
        ));
    }
}
