use std::{fs, time::Duration};

use cardioform::{PredictorConfig, domain::FieldId};
use tempfile::tempdir;

#[test]
fn loads_json_config_from_disk() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("predictor.json");
    fs::write(
        &path,
        r#"{"endpoint": "http://10.0.0.5:5000/predict", "timeout_secs": 3, "defaults": {"ca": 2}}"#,
    )
    .expect("write config");

    let config = PredictorConfig::from_path(&path).expect("config loads");
    assert_eq!(config.endpoint, "http://10.0.0.5:5000/predict");
    assert_eq!(config.timeout(), Some(Duration::from_secs(3)));
    let values = config.initial_values().expect("values");
    assert_eq!(values[FieldId::Ca], "2");
    assert_eq!(values[FieldId::Age], "58");
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("absent.json");
    let err = PredictorConfig::from_path(&path).expect_err("file is missing");
    assert!(format!("{err:#}").contains("absent.json"));
}

#[test]
fn unknown_extension_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("predictor.ini");
    fs::write(&path, "endpoint = x").expect("write config");
    let err = PredictorConfig::from_path(&path).expect_err("ini is not supported");
    assert!(format!("{err:#}").contains("unsupported config format 'ini'"));
}

#[test]
fn out_of_range_default_reports_the_rule() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("predictor.json");
    fs::write(&path, r#"{"defaults": {"trestbps": 60}}"#).expect("write config");
    let err = PredictorConfig::from_path(&path).expect_err("60 is below the BP range");
    assert!(format!("{err:#}").contains("BP must be between 80 and 220."));
}

#[cfg(feature = "yaml")]
#[test]
fn loads_yaml_config() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("predictor.yaml");
    fs::write(&path, "timeout_secs: 0\ndefaults:\n  oldpeak: 3.4\n").expect("write config");
    let config = PredictorConfig::from_path(&path).expect("config loads");
    assert_eq!(config.timeout(), None);
    assert_eq!(config.initial_values().expect("values")[FieldId::Oldpeak], "3.4");
}
