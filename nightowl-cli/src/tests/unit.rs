//! Focused unit tests covering search CLI configuration validation.

use super::*;
use crate::search::{SearchArgs, SearchConfig};
use nightowl_core::Category;
use rstest::rstest;
use std::{fs, path::PathBuf};
use tempfile::TempDir;

fn valid_args() -> SearchArgs {
    SearchArgs {
        places: Some(PathBuf::from("snapshot.json")),
        lat: Some(37.8049),
        lng: Some(-122.2708),
        ..SearchArgs::default()
    }
}

#[rstest]
#[case(
    SearchArgs { places: None, ..valid_args() },
    ARG_SEARCH_PLACES,
    ENV_SEARCH_PLACES
)]
#[case(SearchArgs { lat: None, ..valid_args() }, ARG_SEARCH_LAT, ENV_SEARCH_LAT)]
#[case(SearchArgs { lng: None, ..valid_args() }, ARG_SEARCH_LNG, ENV_SEARCH_LNG)]
fn converting_without_required_fields_errors(
    #[case] args: SearchArgs,
    #[case] field: &'static str,
    #[case] env_var: &'static str,
) {
    let err = SearchConfig::try_from(args).expect_err("missing field should error");
    match err {
        CliError::MissingArgument {
            field: missing,
            env,
        } => {
            assert_eq!(missing, field);
            assert_eq!(env, env_var);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case(Some(90.5), None, ARG_SEARCH_LAT)]
#[case(Some(f64::NAN), None, ARG_SEARCH_LAT)]
#[case(None, Some(-180.5), ARG_SEARCH_LNG)]
#[case(None, Some(f64::INFINITY), ARG_SEARCH_LNG)]
fn out_of_range_coordinates_are_rejected(
    #[case] lat: Option<f64>,
    #[case] lng: Option<f64>,
    #[case] field: &'static str,
) {
    let mut args = valid_args();
    if let Some(lat) = lat {
        args.lat = Some(lat);
    }
    if let Some(lng) = lng {
        args.lng = Some(lng);
    }
    let err = SearchConfig::try_from(args).expect_err("coordinate should be rejected");
    match err {
        CliError::CoordinateOutOfRange { field: found, .. } => assert_eq!(found, field),
        other => panic!("expected CoordinateOutOfRange, found {other:?}"),
    }
}

#[rstest]
#[case(0.0)]
#[case(-2.5)]
#[case(f64::NAN)]
fn non_positive_radius_is_rejected(#[case] radius: f64) {
    let args = SearchArgs {
        radius: Some(radius),
        ..valid_args()
    };
    let err = SearchConfig::try_from(args).expect_err("radius should be rejected");
    assert!(matches!(err, CliError::InvalidRadius { .. }));
}

#[rstest]
fn day_above_saturday_is_rejected() {
    let args = SearchArgs {
        day: Some(7),
        ..valid_args()
    };
    let err = SearchConfig::try_from(args).expect_err("day should be rejected");
    assert!(matches!(err, CliError::InvalidDay { value: 7 }));
}

#[rstest]
fn unknown_category_names_are_rejected() {
    let args = SearchArgs {
        categories: vec!["laundry".to_owned()],
        ..valid_args()
    };
    let err = SearchConfig::try_from(args).expect_err("category should be rejected");
    match err {
        CliError::UnknownCategory { name } => assert_eq!(name, "laundry"),
        other => panic!("expected UnknownCategory, found {other:?}"),
    }
}

#[rstest]
fn defaults_fill_radius_day_and_categories() {
    let config = SearchConfig::try_from(valid_args()).expect("valid arguments");
    assert_eq!(config.radius_miles, 5.0);
    assert!(config.day <= 6);
    assert_eq!(config.categories, Category::ALL.to_vec());
    assert_eq!(config.origin.x, -122.2708);
    assert_eq!(config.origin.y, 37.8049);
}

#[rstest]
fn named_categories_are_parsed_in_order() {
    let args = SearchArgs {
        categories: vec!["gas".to_owned(), "Pharmacy".to_owned()],
        ..valid_args()
    };
    let config = SearchConfig::try_from(args).expect("valid arguments");
    assert_eq!(config.categories, vec![Category::Gas, Category::Pharmacy]);
}

#[rstest]
fn validate_sources_reports_missing_files() {
    let tmp = TempDir::new().expect("tempdir");
    let args = SearchArgs {
        places: Some(tmp.path().join("missing.json")),
        ..valid_args()
    };
    let config = SearchConfig::try_from(args).expect("valid arguments");
    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_SEARCH_PLACES),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_directories() {
    let tmp = TempDir::new().expect("tempdir");
    let args = SearchArgs {
        places: Some(tmp.path().to_path_buf()),
        ..valid_args()
    };
    let config = SearchConfig::try_from(args).expect("valid arguments");
    let err = config
        .validate_sources()
        .expect_err("expected directory rejection");
    assert!(matches!(err, CliError::MissingSourceFile { .. }));
}

#[rstest]
fn validate_sources_accepts_existing_files() {
    let tmp = TempDir::new().expect("tempdir");
    let snapshot = tmp.path().join("snapshot.json");
    fs::write(&snapshot, b"{}\n").expect("write snapshot");
    let args = SearchArgs {
        places: Some(snapshot),
        ..valid_args()
    };
    let config = SearchConfig::try_from(args).expect("valid arguments");
    config.validate_sources().expect("file should validate");
}
