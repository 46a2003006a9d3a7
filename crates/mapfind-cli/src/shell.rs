//! The interactive shell: search prompt, error banner, candidate chooser, and
//! the running result table.

use std::io::IsTerminal;
use std::time::Instant;

use crate::clipboard::{copy_to_clipboard, CopyNotice};
use crate::lookup::{Lookup, LookupView, Phase, PlaceResolver};
use crate::results::copy_selection;
use crate::{prompt, render};

const HELP: &str = "Commands: :copy (all rows), :copy N (one row), :clear, :list, :quit";

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ShellCommand {
    Search(String),
    Copy(Option<usize>),
    Clear,
    List,
    Quit,
    Empty,
    Unknown(String),
}

/// Anything not starting with `:` is a place name.
pub(crate) fn parse_line(line: &str) -> ShellCommand {
    let line = line.trim();
    if line.is_empty() {
        return ShellCommand::Empty;
    }
    let Some(command) = line.strip_prefix(':') else {
        return ShellCommand::Search(line.to_string());
    };

    let mut words = command.split_whitespace();
    match (words.next(), words.next(), words.next()) {
        (Some("copy"), None, None) => ShellCommand::Copy(None),
        (Some("copy"), Some(row), None) => row
            .parse()
            .map_or_else(|_| ShellCommand::Unknown(line.to_string()), |n| {
                ShellCommand::Copy(Some(n))
            }),
        (Some("clear"), None, None) => ShellCommand::Clear,
        (Some("list"), None, None) => ShellCommand::List,
        (Some("quit" | "q" | "exit"), None, None) => ShellCommand::Quit,
        _ => ShellCommand::Unknown(line.to_string()),
    }
}

/// Run the shell until `:quit`.
///
/// # Errors
///
/// Returns an error if stdin is not a terminal or a prompt fails.
pub(crate) async fn run_shell<R: PlaceResolver>(lookup: &Lookup<R>) -> anyhow::Result<()> {
    if !std::io::stdin().is_terminal() {
        anyhow::bail!("the shell needs a terminal; use `mapfind search <NAME>` instead");
    }

    let hyperlinks = render::hyperlinks_enabled();
    println!("{}", render::header());
    println!("{HELP}");
    lookup.warm_location().await;
    print_frame(lookup, &lookup.view(), hyperlinks);

    let mut notice: Option<CopyNotice> = None;
    let mut offer_candidates = true;

    loop {
        let view = lookup.view();
        if offer_candidates && view.phase == Phase::Idle && !view.candidates.is_empty() {
            offer_candidates = false;
            if let Some(index) = prompt::choose_candidate(&view.candidates).await? {
                if let Some(candidate) = view.candidates.get(index) {
                    eprintln!("Searching for \"{}\"...", candidate.name);
                }
                lookup.select_candidate(index).await;
                offer_candidates = true;
                print_frame(lookup, &lookup.view(), hyperlinks);
                continue;
            }
        }

        if let Some(message) = notice.and_then(|n| n.message_at(Instant::now())) {
            println!("[{message}]");
        }

        match parse_line(&prompt::read_line().await?) {
            ShellCommand::Search(place_name) => {
                eprintln!("Searching for \"{place_name}\"...");
                lookup.search(&place_name).await;
                offer_candidates = true;
                print_frame(lookup, &lookup.view(), hyperlinks);
            }
            ShellCommand::Copy(row) => match copy_selection(&lookup.view().results, row) {
                Ok(Some(text)) => {
                    let outcome = copy_to_clipboard(&text).await;
                    notice = Some(CopyNotice::new(&outcome, Instant::now()));
                }
                Ok(None) => println!("Nothing to copy yet."),
                Err(e) => println!("{}", render::error_banner(&e.to_string())),
            },
            ShellCommand::Clear => {
                let count = lookup.view().results.len();
                if count == 0 {
                    println!("No results to clear.");
                } else if prompt::confirm_clear(count).await? {
                    if let Err(e) = lookup.clear_results() {
                        println!(
                            "{}",
                            render::error_banner(&format!("Could not save cleared results: {e}"))
                        );
                    }
                    print_frame(lookup, &lookup.view(), hyperlinks);
                }
            }
            ShellCommand::List => print_frame(lookup, &lookup.view(), hyperlinks),
            ShellCommand::Quit => return Ok(()),
            ShellCommand::Empty => {}
            ShellCommand::Unknown(line) => println!("Unknown command {line}. {HELP}"),
        }
    }
}

/// Error banner (the lookup's, else the location's), candidates, and table.
fn print_frame<R: PlaceResolver>(lookup: &Lookup<R>, view: &LookupView, hyperlinks: bool) {
    let banner = view
        .error
        .as_ref()
        .map(ToString::to_string)
        .or_else(|| lookup.location_error());
    if let Some(message) = banner {
        println!("{}", render::error_banner(&message));
    }
    if view.phase == Phase::Idle && !view.candidates.is_empty() {
        println!("{}", render::candidates(&view.candidates, lookup.location()));
    }
    println!("{}", render::results_table(&view.results, hyperlinks));
}
