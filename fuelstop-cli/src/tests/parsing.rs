//! Argument parsing for the `plan` subcommand.

use super::*;
use crate::plan::PlanArgs;
use camino::Utf8PathBuf;
use clap::Parser;
use rstest::rstest;

fn parse_plan(args: &[&str]) -> PlanArgs {
    let cli = Cli::try_parse_from(args).expect("arguments should parse");
    match cli.command {
        Command::Plan(plan) => plan,
    }
}

#[rstest]
fn parses_paths_and_overrides() {
    let args = parse_plan(&[
        "fuelstop",
        "plan",
        "--route",
        "route.json",
        "--stations",
        "stations.json",
        "--tank-range",
        "450",
        "--mpg",
        "8.5",
    ]);
    assert_eq!(args.route, Some(Utf8PathBuf::from("route.json")));
    assert_eq!(args.stations, Some(Utf8PathBuf::from("stations.json")));
    assert_eq!(args.tank_range, Some(450.0));
    assert_eq!(args.mpg, Some(8.5));
    assert_eq!(args.search_radius, None);
    assert_eq!(args.checkpoint_margin, None);
}

#[rstest]
fn optional_flags_may_be_omitted_at_parse_time() {
    let args = parse_plan(&["fuelstop", "plan"]);
    assert!(args.route.is_none());
    assert!(args.stations.is_none());
}

#[rstest]
#[case(&["fuelstop"])]
#[case(&["fuelstop", "plan", "--mpg", "fast"])]
#[case(&["fuelstop", "route"])]
fn invalid_invocations_are_rejected(#[case] args: &[&str]) {
    assert!(Cli::try_parse_from(args).is_err());
}
