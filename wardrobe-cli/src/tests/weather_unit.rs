//! Focused unit tests covering the weather CLI command.

use super::helpers::{cold_weather, parse_output, temp_workspace, write_json, write_utf8, ymd};
use super::*;
use crate::weather::{WeatherArgs, WeatherConfig, config_from_layers_for_test, run_weather_with};
use camino::Utf8PathBuf;
use rstest::rstest;
use serde_json::json;

fn args_for(request_path: Option<Utf8PathBuf>, date: Option<&str>) -> WeatherArgs {
    WeatherArgs {
        request_path,
        date: date.map(str::to_owned),
        today: Some("2026-12-01".to_owned()),
    }
}

#[rstest]
#[case(None, Some("2026-12-03"), ARG_WEATHER_REQUEST, ENV_WEATHER_REQUEST)]
#[case(Some("request.json"), None, ARG_DATE, ENV_WEATHER_DATE)]
fn converting_without_required_fields_errors(
    #[case] request: Option<&str>,
    #[case] date: Option<&str>,
    #[case] field: &'static str,
    #[case] env_var: &'static str,
) {
    let args = args_for(request.map(Utf8PathBuf::from), date);
    let err = WeatherConfig::try_from(args).expect_err("missing field should error");
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
#[case("2026-12-03", ymd(2026, 12, 3))]
#[case("2026-12-03T18:45:00Z", ymd(2026, 12, 3))]
#[case("  2027-02-14 ", ymd(2027, 2, 14))]
fn dates_accept_a_trailing_time(#[case] raw: &str, #[case] expected: chrono::NaiveDate) {
    let config = WeatherConfig::try_from(args_for(Some("request.json".into()), Some(raw)))
        .expect("config should build");
    assert_eq!(config.date, expected);
    assert_eq!(config.today, ymd(2026, 12, 1));
}

#[rstest]
fn malformed_date_names_the_option() {
    let err = WeatherConfig::try_from(args_for(Some("request.json".into()), Some("12/03/2026")))
        .expect_err("malformed date should error");
    match err {
        CliError::InvalidDate { field, source } => {
            assert_eq!(field, ARG_DATE);
            assert_eq!(source.input, "12/03/2026");
        }
        other => panic!("expected InvalidDate, found {other:?}"),
    }
}

#[rstest]
fn date_can_come_from_the_environment_layer() {
    use ortho_config::MergeComposer;

    let mut composer = MergeComposer::new();
    composer.push_file(json!({ "request_path": "weather.json", "date": "2026-12-25" }), None);
    composer.push_environment(json!({ "date": "2026-12-03" }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.request_path.as_str(), "weather.json");
    assert_eq!(config.date, ymd(2026, 12, 3));
}

#[rstest]
#[case::forecast("2026-12-03", "forecast", 50.0, 40.0)]
#[case::seasonal("2027-02-14", "seasonal-fallback", 60.0, 46.0)]
fn resolves_and_prints_calendar_weather(
    #[case] date: &str,
    #[case] provenance: &str,
    #[case] high: f64,
    #[case] low: f64,
) {
    let (_tmp, root) = temp_workspace();
    let request_path = root.join("weather.json");
    write_json(&request_path, &cold_weather());
    let mut buffer = Vec::new();

    run_weather_with(args_for(Some(request_path), Some(date)), &mut buffer)
        .expect("weather should resolve");
    let output = parse_output(&buffer);
    assert_eq!(output["provenance"], provenance);
    assert_eq!(output["highTemp"], high);
    assert_eq!(output["lowTemp"], low);
    assert_eq!(output["context"]["currentTemp"], 45.0);
}

#[rstest]
fn empty_payload_resolves_to_neutral() {
    let (_tmp, root) = temp_workspace();
    let request_path = root.join("weather.json");
    write_utf8(&request_path, b"{}");
    let mut buffer = Vec::new();

    run_weather_with(args_for(Some(request_path), Some("2026-12-03")), &mut buffer)
        .expect("weather should resolve");
    let output = parse_output(&buffer);
    assert_eq!(output["provenance"], "neutral");
    assert_eq!(output["condition"], "typical conditions");
    assert_eq!(output["context"]["isMild"], true);
}

#[rstest]
fn non_finite_current_temperature_is_rejected() {
    let (_tmp, root) = temp_workspace();
    let request_path = root.join("weather.json");
    write_utf8(&request_path, br#"{ "current": { "temperature": 1e400 } }"#);
    let mut buffer = Vec::new();

    let err = run_weather_with(args_for(Some(request_path), Some("2026-12-03")), &mut buffer)
        .expect_err("overflowing temperature should error");
    assert!(
        matches!(err, CliError::InvalidWeather { .. } | CliError::ParseInput { .. }),
        "{err:?}"
    );
}
