//! Household device representations
//!
//! Each device variant keeps its own validated state; the [`Device`] enum is
//! the closed union the containers and the controller operate on.

use crate::error::DeviceError;
use serde::Serialize;
use std::fmt;

/// Device kinds for classification and reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    Light,
    Thermostat,
    SmartTv,
    MotionSensor,
}

/// Thermostat operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThermostatMode {
    Heat,
    Cool,
    Auto,
}

impl fmt::Display for ThermostatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heat => write!(f, "heat"),
            Self::Cool => write!(f, "cool"),
            Self::Auto => write!(f, "auto"),
        }
    }
}

/// A dimmable light
///
/// Brightness is kept while the light is off and takes effect again on the
/// next turn-on.
#[derive(Debug, Clone)]
pub struct Light {
    id: String,
    name: String,
    is_on: bool,
    brightness: u8,
}

impl Light {
    /// Create a new light with an initial brightness percentage
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        brightness: u8,
    ) -> Result<Self, DeviceError> {
        if brightness > 100 {
            return Err(DeviceError::BrightnessOutOfRange(brightness));
        }
        Ok(Self {
            id: id.into(),
            name: name.into(),
            is_on: false,
            brightness,
        })
    }

    pub fn turn_on(&mut self) {
        self.is_on = true;
    }

    pub fn turn_off(&mut self) {
        self.is_on = false;
    }

    #[must_use]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    #[must_use]
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Set the brightness percentage (0-100)
    ///
    /// The value is stored even while the light is off.
    pub fn set_brightness(&mut self, percent: u8) -> Result<(), DeviceError> {
        if percent > 100 {
            return Err(DeviceError::BrightnessOutOfRange(percent));
        }
        self.brightness = percent;
        Ok(())
    }

    /// Current draw in watts: 10 W at full brightness, scaled linearly
    #[must_use]
    pub fn power_draw(&self) -> f64 {
        if self.is_on {
            10.0 * f64::from(self.brightness) / 100.0
        } else {
            0.0
        }
    }
}

/// A thermostat holding a target temperature and an operating mode
#[derive(Debug, Clone)]
pub struct Thermostat {
    id: String,
    name: String,
    is_on: bool,
    target_temperature: i32,
    mode: ThermostatMode,
}

impl Thermostat {
    /// Create a new thermostat with an initial target temperature in Celsius
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        target_temperature: i32,
    ) -> Result<Self, DeviceError> {
        if !(10..=35).contains(&target_temperature) {
            return Err(DeviceError::TemperatureOutOfRange(target_temperature));
        }
        Ok(Self {
            id: id.into(),
            name: name.into(),
            is_on: false,
            target_temperature,
            mode: ThermostatMode::Auto,
        })
    }

    pub fn turn_on(&mut self) {
        self.is_on = true;
    }

    pub fn turn_off(&mut self) {
        self.is_on = false;
    }

    #[must_use]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    #[must_use]
    pub fn target_temperature(&self) -> i32 {
        self.target_temperature
    }

    #[must_use]
    pub fn mode(&self) -> ThermostatMode {
        self.mode
    }

    /// Set the target temperature (10-35 Celsius)
    pub fn set_temperature(&mut self, celsius: i32) -> Result<(), DeviceError> {
        if !(10..=35).contains(&celsius) {
            return Err(DeviceError::TemperatureOutOfRange(celsius));
        }
        self.target_temperature = celsius;
        Ok(())
    }

    pub fn set_mode(&mut self, mode: ThermostatMode) {
        self.mode = mode;
    }

    /// Current draw in watts: 50 W near the 20 degree baseline, up to 150 W
    /// at the extremes of the target range
    #[must_use]
    pub fn power_draw(&self) -> f64 {
        if self.is_on {
            let offset = f64::from((self.target_temperature - 20).abs());
            50.0 + offset / 15.0 * 100.0
        } else {
            0.0
        }
    }
}

/// A smart TV with channel and volume controls
///
/// Channel and volume changes require the TV to be on.
#[derive(Debug, Clone)]
pub struct SmartTv {
    id: String,
    name: String,
    is_on: bool,
    channel: u16,
    volume: u8,
}

impl SmartTv {
    /// Create a new TV, starting on channel 1 at volume 50
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_on: false,
            channel: 1,
            volume: 50,
        }
    }

    pub fn turn_on(&mut self) {
        self.is_on = true;
    }

    pub fn turn_off(&mut self) {
        self.is_on = false;
    }

    #[must_use]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    #[must_use]
    pub fn channel(&self) -> u16 {
        self.channel
    }

    #[must_use]
    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Switch to a channel (1-999); fails while the TV is off
    pub fn change_channel(&mut self, channel: u16) -> Result<(), DeviceError> {
        if !self.is_on {
            return Err(DeviceError::PoweredOff(self.id.clone()));
        }
        if !(1..=999).contains(&channel) {
            return Err(DeviceError::ChannelOutOfRange(channel));
        }
        self.channel = channel;
        Ok(())
    }

    /// Adjust the volume by a signed delta, clamping the result to 0-100
    ///
    /// Fails while the TV is off; clamping itself is not an error. Returns
    /// the resulting volume.
    pub fn adjust_volume(&mut self, delta: i32) -> Result<u8, DeviceError> {
        if !self.is_on {
            return Err(DeviceError::PoweredOff(self.id.clone()));
        }
        let adjusted = (i32::from(self.volume) + delta).clamp(0, 100);
        self.volume = adjusted as u8;
        Ok(self.volume)
    }

    /// Current draw in watts: 80 W base plus up to 40 W scaled by volume
    #[must_use]
    pub fn power_draw(&self) -> f64 {
        if self.is_on {
            80.0 + f64::from(self.volume) / 100.0 * 40.0
        } else {
            0.0
        }
    }
}

/// A motion sensor acting purely as a boolean trigger source
#[derive(Debug, Clone)]
pub struct MotionSensor {
    id: String,
    name: String,
    is_on: bool,
    motion_detected: bool,
}

impl MotionSensor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_on: false,
            motion_detected: false,
        }
    }

    pub fn turn_on(&mut self) {
        self.is_on = true;
    }

    pub fn turn_off(&mut self) {
        self.is_on = false;
    }

    #[must_use]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    #[must_use]
    pub fn motion_detected(&self) -> bool {
        self.motion_detected
    }

    /// Latch the motion flag; fails while the sensor itself is off
    pub fn detect_motion(&mut self) -> Result<(), DeviceError> {
        if !self.is_on {
            return Err(DeviceError::PoweredOff(self.id.clone()));
        }
        self.motion_detected = true;
        Ok(())
    }

    /// Clear the motion flag
    pub fn reset_motion(&mut self) {
        self.motion_detected = false;
    }
}

/// A controllable household device
///
/// Closed variant set; containers and the controller dispatch through this
/// enum and reach variant-specific operations via the `as_*` accessors.
#[derive(Debug, Clone)]
pub enum Device {
    Light(Light),
    Thermostat(Thermostat),
    SmartTv(SmartTv),
    MotionSensor(MotionSensor),
}

impl Device {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Light(d) => &d.id,
            Self::Thermostat(d) => &d.id,
            Self::SmartTv(d) => &d.id,
            Self::MotionSensor(d) => &d.id,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Light(d) => &d.name,
            Self::Thermostat(d) => &d.name,
            Self::SmartTv(d) => &d.name,
            Self::MotionSensor(d) => &d.name,
        }
    }

    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        match self {
            Self::Light(_) => DeviceKind::Light,
            Self::Thermostat(_) => DeviceKind::Thermostat,
            Self::SmartTv(_) => DeviceKind::SmartTv,
            Self::MotionSensor(_) => DeviceKind::MotionSensor,
        }
    }

    #[must_use]
    pub fn is_on(&self) -> bool {
        match self {
            Self::Light(d) => d.is_on,
            Self::Thermostat(d) => d.is_on,
            Self::SmartTv(d) => d.is_on,
            Self::MotionSensor(d) => d.is_on,
        }
    }

    /// Turn the device on; a no-op if it already is
    pub fn turn_on(&mut self) {
        match self {
            Self::Light(d) => d.turn_on(),
            Self::Thermostat(d) => d.turn_on(),
            Self::SmartTv(d) => d.turn_on(),
            Self::MotionSensor(d) => d.turn_on(),
        }
    }

    /// Turn the device off; a no-op if it already is
    pub fn turn_off(&mut self) {
        match self {
            Self::Light(d) => d.turn_off(),
            Self::Thermostat(d) => d.turn_off(),
            Self::SmartTv(d) => d.turn_off(),
            Self::MotionSensor(d) => d.turn_off(),
        }
    }

    /// Current draw in watts; 0 for any device that is off
    #[must_use]
    pub fn power_draw(&self) -> f64 {
        match self {
            Self::Light(d) => d.power_draw(),
            Self::Thermostat(d) => d.power_draw(),
            Self::SmartTv(d) => d.power_draw(),
            // Trigger source only, negligible draw
            Self::MotionSensor(_) => 0.0,
        }
    }

    /// Snapshot of the externally visible state
    #[must_use]
    pub fn status(&self) -> DeviceStatus {
        let detail = match self {
            Self::Light(d) => StatusDetail::Light {
                brightness: d.brightness,
            },
            Self::Thermostat(d) => StatusDetail::Thermostat {
                target_temperature: d.target_temperature,
                mode: d.mode,
            },
            Self::SmartTv(d) => StatusDetail::SmartTv {
                channel: d.channel,
                volume: d.volume,
            },
            Self::MotionSensor(d) => StatusDetail::MotionSensor {
                motion_detected: d.motion_detected,
            },
        };
        DeviceStatus {
            id: self.id().to_string(),
            name: self.name().to_string(),
            kind: self.kind(),
            is_on: self.is_on(),
            power_w: self.power_draw(),
            detail,
        }
    }

    #[must_use]
    pub fn as_light(&self) -> Option<&Light> {
        match self {
            Self::Light(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_light_mut(&mut self) -> Option<&mut Light> {
        match self {
            Self::Light(d) => Some(d),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_thermostat(&self) -> Option<&Thermostat> {
        match self {
            Self::Thermostat(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_thermostat_mut(&mut self) -> Option<&mut Thermostat> {
        match self {
            Self::Thermostat(d) => Some(d),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_smart_tv(&self) -> Option<&SmartTv> {
        match self {
            Self::SmartTv(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_smart_tv_mut(&mut self) -> Option<&mut SmartTv> {
        match self {
            Self::SmartTv(d) => Some(d),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_motion_sensor(&self) -> Option<&MotionSensor> {
        match self {
            Self::MotionSensor(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_motion_sensor_mut(&mut self) -> Option<&mut MotionSensor> {
        match self {
            Self::MotionSensor(d) => Some(d),
            _ => None,
        }
    }
}

impl From<Light> for Device {
    fn from(d: Light) -> Self {
        Self::Light(d)
    }
}

impl From<Thermostat> for Device {
    fn from(d: Thermostat) -> Self {
        Self::Thermostat(d)
    }
}

impl From<SmartTv> for Device {
    fn from(d: SmartTv) -> Self {
        Self::SmartTv(d)
    }
}

impl From<MotionSensor> for Device {
    fn from(d: MotionSensor) -> Self {
        Self::MotionSensor(d)
    }
}

/// Point-in-time snapshot of a device's externally visible state
#[derive(Debug, Clone, Serialize)]
pub struct DeviceStatus {
    pub id: String,
    pub name: String,
    pub kind: DeviceKind,
    pub is_on: bool,
    pub power_w: f64,
    pub detail: StatusDetail,
}

/// Variant-specific fields of a status snapshot
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StatusDetail {
    Light { brightness: u8 },
    Thermostat { target_temperature: i32, mode: ThermostatMode },
    SmartTv { channel: u16, volume: u8 },
    MotionSensor { motion_detected: bool },
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.is_on { "ON" } else { "OFF" };
        write!(f, "[{}] {} | {} | ", self.id, self.name, state)?;
        match &self.detail {
            StatusDetail::Light { brightness } => write!(f, "brightness {brightness}%")?,
            StatusDetail::Thermostat {
                target_temperature,
                mode,
            } => write!(f, "target {target_temperature}C ({mode})")?,
            StatusDetail::SmartTv { channel, volume } => {
                write!(f, "channel {channel}, volume {volume}")?;
            }
            StatusDetail::MotionSensor { motion_detected } => {
                let motion = if *motion_detected { "motion" } else { "no motion" };
                write!(f, "{motion}")?;
            }
        }
        write!(f, " | {:.2} W", self.power_w)
    }
}
