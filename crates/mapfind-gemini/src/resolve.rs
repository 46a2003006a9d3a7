//! The three lookups: place info, Mapcode, and candidate places.

use mapfind_core::{CandidatePlace, GeoCoordinate};

use crate::client::{GeminiClient, Grounding};
use crate::error::GeminiError;
use crate::parse::{parse_candidates, parse_map_code, parse_place_info, PlaceInfo};
use crate::prompts::{candidates_prompt, map_code_prompt, place_info_prompt};

impl GeminiClient {
    /// Looks up the phone number and address of `place_name`, grounded at
    /// `location`.
    ///
    /// # Errors
    ///
    /// - [`GeminiError::IncompletePlaceInfo`] if the reply lacks either field.
    /// - Any transport or API error from [`GeminiClient::generate`].
    pub async fn fetch_place_info(
        &self,
        place_name: &str,
        location: GeoCoordinate,
    ) -> Result<PlaceInfo, GeminiError> {
        let text = self
            .generate(
                "place_info",
                &place_info_prompt(place_name),
                Grounding::Maps(location),
            )
            .await?;
        let info = parse_place_info(&text);
        if info.is_err() {
            tracing::info!(place_name, "reply lacked phone number or address");
        }
        info
    }

    /// Looks up the Japan Mapcode for `address`.
    ///
    /// A reply that does not look like a code yields
    /// [`mapfind_core::MAP_CODE_NOT_FOUND`]; that is not an error.
    ///
    /// # Errors
    ///
    /// Any transport or API error from [`GeminiClient::generate`].
    pub async fn fetch_map_code(&self, address: &str) -> Result<String, GeminiError> {
        let text = self
            .generate("map_code", &map_code_prompt(address), Grounding::None)
            .await?;
        Ok(parse_map_code(&text))
    }

    /// Asks for up to five places matching an ambiguous `place_name`.
    ///
    /// An empty list is a successful answer.
    ///
    /// # Errors
    ///
    /// Any transport or API error from [`GeminiClient::generate`].
    pub async fn find_possible_places(
        &self,
        place_name: &str,
        location: GeoCoordinate,
    ) -> Result<Vec<CandidatePlace>, GeminiError> {
        let text = self
            .generate(
                "candidates",
                &candidates_prompt(place_name),
                Grounding::Maps(location),
            )
            .await?;
        let candidates = parse_candidates(&text);
        tracing::debug!(
            place_name,
            count = candidates.len(),
            "parsed candidate places"
        );
        Ok(candidates)
    }
}
