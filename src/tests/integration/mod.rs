//! End-to-end configuration scenarios
//!
//! Properties files are written to temporary directories and run through the
//! file source, the password schema and the validator.

use crate::{
    application::LoadConfigurationUseCase,
    config::{AppConfig, ConfigValidator, ValidationMode},
    domain::{properties::PropertySource, validation::FieldRegistry, Configuration},
    infrastructure::FilePropertySource,
    shared::error::{AppError, AppResult},
    tests::{common::PropertiesFixture, config},
};

const OPTIONAL_FIELDS: [&str; 6] = ["OUT_FILE", "doExport", "LOWER_CASE", "UPPER_CASE", "DIGITS", "SYMBOLS"];

fn validate_file(fixture: &PropertiesFixture, content: &str, mode: ValidationMode) -> AppResult<Configuration> {
    config::init();
    let path = fixture.write(content);
    let properties = FilePropertySource::new(path).load()?;
    let registry = FieldRegistry::password_fields()?;
    ConfigValidator::new(mode).validate(&properties, registry.fields())
}

#[test]
fn minimal_file_validates_with_optionals_absent() {
    let fixture = PropertiesFixture::new();
    let configuration = validate_file(
        &fixture,
        "PASSWORD_LENGTH=12\nNUMBER_OF_PASSWORDS=3\nOUT_DIRECTORY=.",
        ValidationMode::FailFast,
    )
    .unwrap();

    assert_eq!(configuration.get("PASSWORD_LENGTH"), Some("12"));
    assert_eq!(configuration.get("NUMBER_OF_PASSWORDS"), Some("3"));
    assert_eq!(configuration.get("OUT_DIRECTORY"), Some("."));
    for field in OPTIONAL_FIELDS {
        assert!(!configuration.contains(field), "{} should be absent", field);
    }
}

#[test]
fn missing_number_of_passwords_is_reported() {
    let fixture = PropertiesFixture::new();
    let err = validate_file(
        &fixture,
        "PASSWORD_LENGTH=12\nOUT_DIRECTORY=.\n",
        ValidationMode::FailFast,
    )
    .unwrap_err();

    match err {
        AppError::MissingRequiredField { field } => assert_eq!(field, "NUMBER_OF_PASSWORDS"),
        other => panic!("expected MissingRequiredField, got {:?}", other),
    }
}

#[test]
fn non_numeric_length_is_invalid() {
    let fixture = PropertiesFixture::new();
    let err = validate_file(
        &fixture,
        "PASSWORD_LENGTH=notanumber\nNUMBER_OF_PASSWORDS=3\nOUT_DIRECTORY=.\n",
        ValidationMode::FailFast,
    )
    .unwrap_err();

    match err {
        AppError::InvalidFieldValue { field, violations } => {
            assert_eq!(field, "PASSWORD_LENGTH");
            assert_eq!(violations, vec!["Expected property PASSWORD_LENGTH to be an integer.".to_string()]);
        }
        other => panic!("expected InvalidFieldValue, got {:?}", other),
    }
}

#[test]
fn nonexistent_out_directory_is_invalid() {
    let fixture = PropertiesFixture::new();
    let err = validate_file(
        &fixture,
        "PASSWORD_LENGTH=12\nNUMBER_OF_PASSWORDS=3\nOUT_DIRECTORY=/path/does/not/exist\n",
        ValidationMode::FailFast,
    )
    .unwrap_err();

    assert_eq!(err.kind(), "invalid_field_value");
    assert_eq!(err.field(), Some("OUT_DIRECTORY"));
}

#[test]
fn every_optional_field_round_trips_as_written() {
    let fixture = PropertiesFixture::new();
    let out_dir = fixture.out_dir();
    let content = format!(
        "# full settings\nPASSWORD_LENGTH = -4\nNUMBER_OF_PASSWORDS=0\nOUT_DIRECTORY={}\nOUT_FILE=passwords.txt\ndoExport=False\nLOWER_CASE=true\nUPPER_CASE=TRUE\nDIGITS=false\nSYMBOLS=tRuE\n",
        out_dir
    );

    let configuration = validate_file(&fixture, &content, ValidationMode::FailFast).unwrap();
    assert_eq!(configuration.len(), 9);
    assert_eq!(configuration.get("PASSWORD_LENGTH"), Some("-4"));
    assert_eq!(configuration.get("OUT_DIRECTORY"), Some(out_dir.as_str()));
    assert_eq!(configuration.get("doExport"), Some("False"));
    assert_eq!(configuration.get("SYMBOLS"), Some("tRuE"));
}

#[test]
fn blank_out_file_is_invalid() {
    let fixture = PropertiesFixture::new();
    let err = validate_file(
        &fixture,
        "PASSWORD_LENGTH=12\nNUMBER_OF_PASSWORDS=3\nOUT_DIRECTORY=.\nOUT_FILE=   \n",
        ValidationMode::FailFast,
    )
    .unwrap_err();

    assert_eq!(err.field(), Some("OUT_FILE"));
}

#[test]
fn aggregate_mode_reports_whole_file() {
    let fixture = PropertiesFixture::new();
    let err = validate_file(
        &fixture,
        "PASSWORD_LENGTH=abc\nOUT_DIRECTORY=/path/does/not/exist\ndoExport=sometimes\n",
        ValidationMode::AggregateAll,
    )
    .unwrap_err();

    let AppError::Validation(errors) = &err else {
        panic!("expected aggregated error, got {:?}", err);
    };
    assert_eq!(
        errors.fields(),
        vec!["PASSWORD_LENGTH", "NUMBER_OF_PASSWORDS", "OUT_DIRECTORY", "doExport"]
    );

    let report = err.to_report();
    assert_eq!(report["error"]["violations"].as_array().unwrap().len(), 4);
}

#[test]
fn malformed_file_never_reaches_validation() {
    let fixture = PropertiesFixture::new();
    let err = validate_file(&fixture, "PASSWORD_LENGTH 12\n", ValidationMode::FailFast).unwrap_err();
    assert_eq!(err.kind(), "source_unreadable");
}

#[test]
fn settings_file_drives_full_flow() {
    config::init();
    let fixture = PropertiesFixture::new();
    let out_dir = fixture.out_dir();
    let properties_path = fixture.write(&format!(
        "PASSWORD_LENGTH=16\nNUMBER_OF_PASSWORDS=4\nOUT_DIRECTORY={}\nDIGITS=true\n",
        out_dir
    ));
    let settings_path = fixture.write_named(
        "passforge.json",
        &serde_json::json!({
            "properties_path": properties_path,
            "validation": { "mode": "aggregate_all" },
        })
        .to_string(),
    );

    let app_config = AppConfig::load_file(&settings_path).unwrap();
    let settings = LoadConfigurationUseCase::from_app_config(&app_config)
        .unwrap()
        .execute()
        .unwrap();

    assert_eq!(settings.password_length, 16);
    assert_eq!(settings.number_of_passwords, 4);
    assert_eq!(settings.out_directory.to_str(), Some(out_dir.as_str()));
    assert_eq!(settings.alphabet(), "0123456789");
    assert!(fixture.path().join("out").is_dir());
}
