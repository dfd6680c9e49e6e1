/*!
 * Integration tests for application lifecycle
 */

use anyhow::Result;
use mdnorm::app_config::Config;
use mdnorm::app_controller::Controller;
use mdnorm::errors::AppError;

/// Test the controller initialization with default config
#[test]
fn test_controller_initialization_withDefaultConfig_shouldSucceed() -> Result<()> {
    let controller = Controller::new_for_test()?;

    assert_eq!(controller.config(), &Config::default());

    Ok(())
}

/// Test that an invalid configuration is rejected up front
#[test]
fn test_controller_withInvalidConfig_shouldReturnConfigError() {
    let mut config = Config::default();
    config.blockquote.marker = String::new();

    let result = Controller::with_config(config);

    assert!(matches!(result, Err(AppError::Config(_))));
}

/// Test that an empty file list produces an empty summary
#[test]
fn test_run_withNoFiles_shouldReturnEmptySummary() -> Result<()> {
    let controller = Controller::new_for_test()?;

    let summary = controller.run(&[]);

    assert_eq!(summary.total(), 0);
    assert!(!summary.has_errors());

    Ok(())
}
