//! Interactive prompts. All of them need a terminal on stdin.
//!
//! dialoguer blocks on stdin, so each prompt runs on tokio's blocking pool
//! and leaves the runtime's workers free.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use mapfind_core::CandidatePlace;

use crate::render::candidate_label;

const NONE_OF_THESE: &str = "None of these (search again)";

async fn off_runtime<T, F>(prompt: F) -> anyhow::Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> anyhow::Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(prompt).await?
}

/// Asks which candidate was meant. `None` means the user declined all of them.
pub(crate) async fn choose_candidate(
    candidates: &[CandidatePlace],
) -> anyhow::Result<Option<usize>> {
    let count = candidates.len();
    let mut items: Vec<String> = candidates.iter().map(candidate_label).collect();
    items.push(NONE_OF_THESE.to_string());

    let choice = off_runtime(move || {
        Ok(Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Did you mean")
            .items(&items)
            .default(0)
            .interact()?)
    })
    .await?;

    Ok((choice < count).then_some(choice))
}

/// Second step of clear-all. Defaults to "no".
pub(crate) async fn confirm_clear(count: usize) -> anyhow::Result<bool> {
    off_runtime(move || {
        Ok(Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "Clear all {count} results? This cannot be undone."
            ))
            .default(false)
            .interact()?)
    })
    .await
}

pub(crate) async fn read_line() -> anyhow::Result<String> {
    off_runtime(|| {
        let line: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Place name (:copy [N], :clear, :list, :quit)")
            .allow_empty(true)
            .interact_text()?;
        Ok(line)
    })
    .await
}
