//! Classifier config file loading.

use std::io::Write;

use flokkr::{ClassifierConfig, FlokkrError};

#[test]
fn loads_labels_and_template_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "labels": ["Urgent", "Routine"],
            "prompt_template": "Sort into {{labels}}: {{text}}"
        }}"#
    )
    .unwrap();

    let config = ClassifierConfig::load(file.path()).unwrap();
    let labels = config.label_set().unwrap();
    assert_eq!(labels.len(), 2);
    assert_eq!(labels.fallback(), "Routine");

    let template = config.template().unwrap();
    let rendered = template.render(&labels, "server down");
    assert_eq!(rendered, "Sort into Urgent, Routine: server down");
}

#[test]
fn missing_keys_fall_back_to_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{}}").unwrap();

    let config = ClassifierConfig::load(file.path()).unwrap();
    assert_eq!(config.label_set().unwrap().len(), 4);
}

#[test]
fn missing_file_is_a_configuration_error() {
    let err = ClassifierConfig::load(std::path::Path::new("/nonexistent/labels.json")).unwrap_err();
    assert!(matches!(err, FlokkrError::Configuration(_)));
}

#[test]
fn invalid_json_is_a_configuration_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "labels = not json").unwrap();

    let err = ClassifierConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, FlokkrError::Configuration(_)));
}

#[test]
fn template_without_text_placeholder_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"prompt_template": "no placeholder"}}"#).unwrap();

    let config = ClassifierConfig::load(file.path()).unwrap();
    assert!(config.template().is_err());
}
