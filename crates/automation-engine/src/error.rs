//! Error types for the automation engine

use home_core::{DeviceError, HomeError};
use thiserror::Error;

/// Errors that can occur in the automation engine
#[derive(Error, Debug)]
pub enum AutomationError {
    /// Rule not found by name
    #[error("Rule not found: {0}")]
    RuleNotFound(String),

    /// A condition referenced a device that is not a motion sensor
    #[error("Device is not a motion sensor: {0}")]
    NotAMotionSensor(String),

    /// An action referenced a device that is not a light
    #[error("Device is not a light: {0}")]
    NotALight(String),

    /// Lookup or container failure from the home model
    #[error(transparent)]
    Home(#[from] HomeError),

    /// Device-level validation failure from an action
    #[error(transparent)]
    Device(#[from] DeviceError),
}
