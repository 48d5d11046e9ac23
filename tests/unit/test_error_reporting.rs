use search_recreate::core::error::{AppError, DefaultErrorReporter, ErrorReporter};
use search_recreate::core::transformer::TransformError;
use search_recreate::core::types::{ErrorCategory, ErrorSeverity, InputField};

#[test]
fn test_default_error_reporter_report_error() {
    let reporter = DefaultErrorReporter;
    let error: AppError = TransformError::MissingSearchVariable.into();
    reporter.report_error(&error);
}

#[test]
fn test_default_error_reporter_report_warning() {
    let reporter = DefaultErrorReporter;
    reporter.report_warning("Test warning", Some("context".to_string()));
    reporter.report_warning("Test warning", None);
}

#[test]
fn test_error_reporter_trait_object() {
    let reporter: Box<dyn ErrorReporter> = Box::new(DefaultErrorReporter::new());
    let error = AppError::with_source(
        ErrorCategory::IoError,
        "Failed to write module",
        Box::new(std::io::Error::new(std::io::ErrorKind::Other, "disk full")),
    );
    reporter.report_error(&error);
    reporter.report_info("done");
}

#[test]
fn test_transform_errors_map_to_validation_errors() {
    let errors = [
        TransformError::MissingField {
            fields: vec![InputField::Script],
        },
        TransformError::MissingSearchVariable,
        TransformError::UnterminatedFragment,
    ];

    for transform_error in errors {
        let code = transform_error.code();
        let error: AppError = transform_error.into();
        assert_eq!(error.category, ErrorCategory::ValidationError);
        assert_eq!(error.severity(), ErrorSeverity::Error);
        assert_eq!(error.code, code);
        assert!(!error.recovery_suggestions.is_empty());
    }
}

#[test]
fn test_user_facing_messages() {
    assert_eq!(
        TransformError::MissingSearchVariable.to_string(),
        "Could not find search variable in script"
    );
    assert_eq!(
        TransformError::MissingField {
            fields: vec![InputField::Name, InputField::IdSuffix],
        }
        .to_string(),
        "All fields are required (missing: name, id suffix)"
    );
}

#[test]
fn test_app_error_round_trips_through_anyhow() {
    let original = AppError::new(ErrorCategory::ConfigurationError, "bad config").with_code("CFG");
    let wrapped: anyhow::Error = original.into();
    let recovered = AppError::from(wrapped);
    assert_eq!(recovered.code, "CFG");
    assert_eq!(recovered.category, ErrorCategory::ConfigurationError);
}

#[test]
fn test_plain_anyhow_error_becomes_internal_error() {
    let error = AppError::from(anyhow::anyhow!("boom"));
    assert_eq!(error.category, ErrorCategory::InternalError);
    assert_eq!(error.code, "ANYHOW_ERROR");
    assert!(error.to_string().contains("boom"));
}
