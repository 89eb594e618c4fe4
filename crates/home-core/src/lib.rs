//! Household device and home model
//!
//! This crate provides the simulated device hierarchy (lights, thermostats,
//! TVs, motion sensors), the room/home containers that namespace them, and
//! the controller facade for bulk operations and energy aggregation.

pub mod controller;
pub mod device;
pub mod error;
pub mod home;
pub mod room;

pub use controller::Controller;
pub use device::{
    Device, DeviceKind, DeviceStatus, Light, MotionSensor, SmartTv, StatusDetail, Thermostat,
    ThermostatMode,
};
pub use error::{DeviceError, HomeError};
pub use home::Home;
pub use room::Room;
