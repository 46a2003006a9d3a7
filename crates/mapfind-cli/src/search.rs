use std::io::IsTerminal;

use crate::lookup::{Lookup, LookupOutcome, PlaceResolver};
use crate::{prompt, render};

/// Look up `place_name` once and print the result table.
///
/// When the name is ambiguous and `interactive` is set (and stdin is a
/// terminal), the user picks a candidate and the lookup runs again for it.
/// Otherwise the candidates are printed and the command ends.
///
/// # Errors
///
/// Returns the lookup failure, or an error if the candidate prompt fails.
pub(crate) async fn run_search<R: PlaceResolver>(
    lookup: &Lookup<R>,
    place_name: &str,
    interactive: bool,
) -> anyhow::Result<()> {
    eprintln!("Searching for \"{place_name}\"...");
    let mut outcome = lookup.search(place_name).await;

    loop {
        match outcome {
            LookupOutcome::Resolved(place) => {
                eprintln!("Found {} ({})", place.place_name, place.map_code);
                println!(
                    "{}",
                    render::results_table(&lookup.view().results, render::hyperlinks_enabled())
                );
                return Ok(());
            }
            LookupOutcome::Failed(error) => return Err(error.into()),
            LookupOutcome::Ambiguous(candidates) => {
                println!("{}", render::candidates(&candidates, lookup.location()));
                if !interactive || !std::io::stdin().is_terminal() {
                    return Ok(());
                }
                let Some(index) = prompt::choose_candidate(&candidates).await? else {
                    return Ok(());
                };
                if let Some(candidate) = candidates.get(index) {
                    eprintln!("Searching for \"{}\"...", candidate.name);
                }
                match lookup.select_candidate(index).await {
                    Some(next) => outcome = next,
                    None => return Ok(()),
                }
            }
        }
    }
}
