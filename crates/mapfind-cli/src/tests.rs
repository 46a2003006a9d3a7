use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["mapfind"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_search_with_multi_word_name() {
    let cli = Cli::try_parse_from(["mapfind", "search", "Tokyo", "Tower"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Search { ref name, no_prompt: false }) if name.join(" ") == "Tokyo Tower"
    ));
}

#[test]
fn parses_search_no_prompt() {
    let cli = Cli::try_parse_from(["mapfind", "search", "Station", "--no-prompt"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Search {
            no_prompt: true,
            ..
        })
    ));
}

#[test]
fn search_requires_a_name() {
    assert!(Cli::try_parse_from(["mapfind", "search"]).is_err());
}

#[test]
fn parses_list_command() {
    let cli = Cli::try_parse_from(["mapfind", "list"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::List)));
}

#[test]
fn parses_copy_defaults() {
    let cli = Cli::try_parse_from(["mapfind", "copy"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Copy {
            row: None,
            stdout: false
        })
    ));
}

#[test]
fn parses_copy_single_row_to_stdout() {
    let cli = Cli::try_parse_from(["mapfind", "copy", "--row", "2", "--stdout"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Copy {
            row: Some(2),
            stdout: true
        })
    ));
}

#[test]
fn copy_row_must_be_a_number() {
    assert!(Cli::try_parse_from(["mapfind", "copy", "--row", "two"]).is_err());
}

#[test]
fn parses_clear_yes() {
    let cli = Cli::try_parse_from(["mapfind", "clear", "--yes"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Clear { yes: true })));
}

#[test]
fn parses_shell_command() {
    let cli = Cli::try_parse_from(["mapfind", "shell"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Shell)));
}

#[test]
fn parses_global_location_override() {
    let cli = Cli::try_parse_from([
        "mapfind", "search", "Tokyo Tower", "--lat", "35.6586", "--lon", "139.7454",
    ])
    .unwrap();
    assert!((cli.lat.unwrap() - 35.6586).abs() < f64::EPSILON);
    assert!((cli.lon.unwrap() - 139.7454).abs() < f64::EPSILON);
}

#[test]
fn accepts_negative_coordinates() {
    let cli =
        Cli::try_parse_from(["mapfind", "--lat", "-33.86", "--lon", "151.21", "list"]).unwrap();
    assert!((cli.lat.unwrap() + 33.86).abs() < f64::EPSILON);
}

#[test]
fn latitude_requires_longitude() {
    assert!(Cli::try_parse_from(["mapfind", "--lat", "35.0", "list"]).is_err());
}
