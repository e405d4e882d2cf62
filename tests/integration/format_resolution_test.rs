//! Format parsing and environment-driven resolution tests
//!
//! Resolution precedence: explicit argument over environment variable over
//! the package default. Environment-touching tests serialize around a mutex
//! because the process environment is shared between test threads.

use std::sync::Mutex;

use assert_matches::assert_matches;

use oddsconv::format::{INPUT_FORMAT_ENV, OUTPUT_FORMAT_ENV};
use oddsconv::{
    convert_odds_with_defaults, input_format_from_env, output_format_from_env,
    resolve_input_format, resolve_output_format, ConvertedOdds, ConvertedValue, OddsError,
    OddsFormat, OddsInput, DEFAULT_INPUT_FORMAT, DEFAULT_OUTPUT_FORMAT,
};

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn with_env_vars(vars: &[(&str, Option<&str>)], test: impl FnOnce()) {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let saved: Vec<(String, Option<String>)> = vars
        .iter()
        .map(|(key, _)| (key.to_string(), std::env::var(key).ok()))
        .collect();
    for (key, value) in vars {
        match value {
            Some(value) => std::env::set_var(key, value),
            None => std::env::remove_var(key),
        }
    }
    test();
    for (key, value) in saved {
        match value {
            Some(value) => std::env::set_var(&key, value),
            None => std::env::remove_var(&key),
        }
    }
}

#[test]
fn test_parse_format_explicit_and_fallback() {
    let format = OddsFormat::parse(Some("DECIMAL"), Some(OddsFormat::American)).unwrap();
    assert_eq!(format, OddsFormat::Decimal);

    let format = OddsFormat::parse(None, Some(OddsFormat::Fractional)).unwrap();
    assert_eq!(format, OddsFormat::Fractional);

    assert_matches!(
        OddsFormat::parse(None, None),
        Err(OddsError::InvalidFormat { .. })
    );
}

#[test]
fn test_package_defaults_are_american() {
    assert_eq!(DEFAULT_INPUT_FORMAT, OddsFormat::American);
    assert_eq!(DEFAULT_OUTPUT_FORMAT, OddsFormat::American);
}

#[test]
fn test_unset_environment_falls_back_to_default() {
    with_env_vars(
        &[(INPUT_FORMAT_ENV, None), (OUTPUT_FORMAT_ENV, None)],
        || {
            assert_eq!(input_format_from_env().unwrap(), OddsFormat::American);
            assert_eq!(output_format_from_env().unwrap(), OddsFormat::American);
            assert_eq!(resolve_input_format(None).unwrap(), OddsFormat::American);
            assert_eq!(resolve_output_format(None).unwrap(), OddsFormat::American);
        },
    );
}

#[test]
fn test_environment_value_is_used_when_no_explicit_argument() {
    with_env_vars(
        &[
            (INPUT_FORMAT_ENV, Some("decimal")),
            (OUTPUT_FORMAT_ENV, Some("Fractional")),
        ],
        || {
            assert_eq!(resolve_input_format(None).unwrap(), OddsFormat::Decimal);
            assert_eq!(resolve_output_format(None).unwrap(), OddsFormat::Fractional);
        },
    );
}

#[test]
fn test_explicit_argument_wins_over_environment() {
    with_env_vars(&[(INPUT_FORMAT_ENV, Some("decimal"))], || {
        assert_eq!(
            resolve_input_format(Some("american")).unwrap(),
            OddsFormat::American
        );
    });
}

#[test]
fn test_unrecognized_environment_value_is_not_swallowed() {
    with_env_vars(&[(INPUT_FORMAT_ENV, Some("euro"))], || {
        assert_matches!(
            resolve_input_format(None),
            Err(OddsError::InvalidFormat { .. })
        );
    });
    with_env_vars(&[(OUTPUT_FORMAT_ENV, Some(""))], || {
        assert_matches!(
            resolve_output_format(None),
            Err(OddsError::InvalidFormat { .. })
        );
    });
}

#[test]
fn test_unrecognized_explicit_argument_fails_despite_env_and_default() {
    with_env_vars(&[(INPUT_FORMAT_ENV, Some("decimal"))], || {
        assert_matches!(
            resolve_input_format(Some("euro")),
            Err(OddsError::InvalidFormat { .. })
        );
    });
}

#[test]
fn test_convert_with_defaults_reads_environment_per_call() {
    with_env_vars(
        &[
            (INPUT_FORMAT_ENV, Some("american")),
            (OUTPUT_FORMAT_ENV, Some("decimal")),
        ],
        || {
            let converted =
                convert_odds_with_defaults(&OddsInput::scalar(-200.0), None, None).unwrap();
            assert_eq!(
                converted,
                ConvertedOdds::Scalar(ConvertedValue::Number(1.5))
            );

            // A later call observes the changed environment
            std::env::set_var(OUTPUT_FORMAT_ENV, "fractional");
            let converted =
                convert_odds_with_defaults(&OddsInput::scalar(-200.0), None, None).unwrap();
            assert_eq!(
                converted,
                ConvertedOdds::Scalar(ConvertedValue::Text("1/2".to_string()))
            );
        },
    );
}

#[test]
fn test_explicit_arguments_beat_environment_in_convert_with_defaults() {
    with_env_vars(
        &[
            (INPUT_FORMAT_ENV, Some("decimal")),
            (OUTPUT_FORMAT_ENV, Some("decimal")),
        ],
        || {
            let converted = convert_odds_with_defaults(
                &OddsInput::scalar(110.0),
                Some("american"),
                Some("fractional"),
            )
            .unwrap();
            assert_eq!(
                converted,
                ConvertedOdds::Scalar(ConvertedValue::Text("11/10".to_string()))
            );
        },
    );
}
