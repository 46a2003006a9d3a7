//! Handlers for the commands that work on saved results without a lookup.

use std::io::IsTerminal;
use std::time::Instant;

use mapfind_core::{results_to_tsv, row_to_tsv, ResultList};
use mapfind_store::JsonFileStore;

use crate::clipboard::{copy_to_clipboard, CopyNotice};
use crate::{prompt, render};

/// Print the saved results table.
pub(crate) fn run_list(store: &JsonFileStore) {
    let results = store.load();
    println!(
        "{}",
        render::results_table(&results, render::hyperlinks_enabled())
    );
}

/// The TSV to copy: one 1-based `row`, or every row when `row` is `None`.
///
/// Returns `Ok(None)` when there is nothing to copy.
///
/// # Errors
///
/// Returns an error if `row` is out of range.
pub(crate) fn copy_selection(
    results: &ResultList,
    row: Option<usize>,
) -> anyhow::Result<Option<String>> {
    match row {
        None if results.is_empty() => Ok(None),
        None => Ok(Some(results_to_tsv(results))),
        Some(n) => {
            let place = n
                .checked_sub(1)
                .and_then(|index| results.get(index))
                .ok_or_else(|| {
                    anyhow::anyhow!("row {n} does not exist; there are {} results", results.len())
                })?;
            Ok(Some(row_to_tsv(place)))
        }
    }
}

/// Copy saved results to the clipboard, or print them with `to_stdout`.
///
/// A clipboard failure is not an error: the rows are printed instead.
///
/// # Errors
///
/// Returns an error if `row` is out of range.
pub(crate) async fn run_copy(
    store: &JsonFileStore,
    row: Option<usize>,
    to_stdout: bool,
) -> anyhow::Result<()> {
    let results = store.load();
    let Some(text) = copy_selection(&results, row)? else {
        eprintln!("nothing to copy; run `search` first");
        return Ok(());
    };

    if to_stdout {
        println!("{text}");
        return Ok(());
    }

    let outcome = copy_to_clipboard(&text).await;
    eprintln!("{}", CopyNotice::new(&outcome, Instant::now()).message());
    if outcome.is_err() {
        println!("{text}");
    }
    Ok(())
}

/// Remove every saved result after confirmation.
///
/// # Errors
///
/// Returns an error if confirmation is needed but there is no terminal to ask
/// on, or if the empty list cannot be saved.
pub(crate) async fn run_clear(store: &JsonFileStore, yes: bool) -> anyhow::Result<()> {
    let count = store.load().len();
    if count == 0 {
        println!("no results to clear");
        return Ok(());
    }

    if !yes {
        if !std::io::stdin().is_terminal() {
            anyhow::bail!("refusing to clear {count} results without confirmation; pass --yes");
        }
        if !prompt::confirm_clear(count).await? {
            println!("cancelled");
            return Ok(());
        }
    }

    store.save(&ResultList::new())?;
    tracing::info!(count, "cleared all results");
    println!("cleared {count} results");
    Ok(())
}

#[cfg(test)]
mod tests {
    use mapfind_core::ResolvedPlace;

    use super::*;

    fn results() -> ResultList {
        let mut list = ResultList::new();
        list.push_front(ResolvedPlace::new("Tokyo Tower", "03-1", "Shibakoen", "1 234"));
        list.push_front(ResolvedPlace::new("Skytree", "03-2", "Oshiage", "Not Found"));
        list
    }

    #[test]
    fn copy_all_joins_rows_in_list_order() {
        let text = copy_selection(&results(), None).unwrap().unwrap();
        assert_eq!(
            text,
            "Skytree\tNot Found\t03-2\tOshiage\nTokyo Tower\t1 234\t03-1\tShibakoen"
        );
    }

    #[test]
    fn copy_row_is_one_based() {
        let text = copy_selection(&results(), Some(2)).unwrap().unwrap();
        assert_eq!(text, "Tokyo Tower\t1 234\t03-1\tShibakoen");
    }

    #[test]
    fn copy_row_out_of_range_is_error() {
        assert!(copy_selection(&results(), Some(0)).is_err());
        let err = copy_selection(&results(), Some(3)).unwrap_err();
        assert_eq!(err.to_string(), "row 3 does not exist; there are 2 results");
    }

    #[test]
    fn copy_all_of_nothing_is_none() {
        assert!(copy_selection(&ResultList::new(), None).unwrap().is_none());
    }

    #[tokio::test]
    async fn clear_with_yes_empties_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("results.json"));
        store.save(&results()).unwrap();

        run_clear(&store, true).await.unwrap();

        assert!(store.load().is_empty());
    }

    #[tokio::test]
    async fn clear_of_empty_store_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("results.json"));

        run_clear(&store, false).await.unwrap();

        assert!(store.try_load().unwrap().is_none());
    }
}
