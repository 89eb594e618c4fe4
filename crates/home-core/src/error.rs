//! Error types for the device and home model

use thiserror::Error;

/// Errors raised by operations on a single device
#[derive(Error, Debug)]
pub enum DeviceError {
    /// Brightness outside 0-100
    #[error("Brightness out of range (0-100): {0}")]
    BrightnessOutOfRange(u8),

    /// Target temperature outside 10-35
    #[error("Target temperature out of range (10-35): {0}")]
    TemperatureOutOfRange(i32),

    /// Channel outside 1-999
    #[error("Channel out of range (1-999): {0}")]
    ChannelOutOfRange(u16),

    /// Operation requires the device to be on
    #[error("Device is powered off: {0}")]
    PoweredOff(String),
}

/// Errors raised by the room/home containers
#[derive(Error, Debug)]
pub enum HomeError {
    /// Lookup by id failed
    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    /// Adding a device whose id already exists
    #[error("Duplicate device id: {0}")]
    DuplicateDevice(String),

    /// Lookup by room name failed
    #[error("Room not found: {0}")]
    RoomNotFound(String),

    /// Adding a room whose name already exists
    #[error("Duplicate room name: {0}")]
    DuplicateRoom(String),

    /// Device-level validation failure surfaced through a container call
    #[error(transparent)]
    Device(#[from] DeviceError),
}
