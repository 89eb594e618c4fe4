//! Central controller: facade over one home for bulk operations,
//! energy aggregation, and the energy-saving policy

use crate::device::{Device, DeviceStatus};
use crate::error::HomeError;
use crate::home::Home;

/// Brightness every light is pulled down to in energy-saving mode.
/// Lights already at or below it are left unchanged.
pub const ENERGY_SAVING_BRIGHTNESS: u8 = 30;

/// Facade bound to one home
///
/// Owns the home; rule evaluation and presentation layers reach the device
/// graph exclusively through this handle, one mutable borrow at a time.
#[derive(Debug)]
pub struct Controller {
    home: Home,
}

impl Controller {
    #[must_use]
    pub fn new(home: Home) -> Self {
        Self { home }
    }

    #[must_use]
    pub fn home(&self) -> &Home {
        &self.home
    }

    pub fn home_mut(&mut self) -> &mut Home {
        &mut self.home
    }

    /// Turn on every light in the home; other variants are untouched
    pub fn turn_on_all_lights(&mut self) {
        let mut count = 0usize;
        for device in self.home.devices_mut() {
            if let Device::Light(light) = device {
                light.turn_on();
                count += 1;
            }
        }
        tracing::info!("Turned on {} lights", count);
    }

    /// Turn off every device of every variant
    pub fn turn_off_all_devices(&mut self) {
        let mut count = 0usize;
        for device in self.home.devices_mut() {
            device.turn_off();
            count += 1;
        }
        tracing::info!("Turned off all {} devices", count);
    }

    /// Sum of the current draw of every device in the home, in watts
    #[must_use]
    pub fn total_power(&self) -> f64 {
        self.home.devices().map(Device::power_draw).sum()
    }

    /// Apply the energy-saving policy: dim bright lights to
    /// [`ENERGY_SAVING_BRIGHTNESS`] and turn every TV off
    ///
    /// Thermostats and sensors are untouched. Synchronous, no rollback.
    pub fn energy_saving_mode(&mut self) {
        for device in self.home.devices_mut() {
            match device {
                Device::Light(light) => {
                    if light.brightness() > ENERGY_SAVING_BRIGHTNESS {
                        // In range by construction
                        let _ = light.set_brightness(ENERGY_SAVING_BRIGHTNESS);
                    }
                }
                Device::SmartTv(tv) => tv.turn_off(),
                Device::Thermostat(_) | Device::MotionSensor(_) => {}
            }
        }
        tracing::info!(
            "Energy saving mode applied, total draw now {:.2} W",
            self.total_power()
        );
    }

    /// Look a device up by id anywhere in the bound home
    pub fn find_device(&self, id: &str) -> Result<&Device, HomeError> {
        self.home.find_device(id)
    }

    pub fn find_device_mut(&mut self, id: &str) -> Result<&mut Device, HomeError> {
        self.home.find_device_mut(id)
    }

    /// Structured snapshots of every device, in home order
    #[must_use]
    pub fn device_statuses(&self) -> Vec<DeviceStatus> {
        self.home.devices().map(Device::status).collect()
    }

    /// One report line per device, in home order
    #[must_use]
    pub fn status_report(&self) -> String {
        self.device_statuses()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{Light, MotionSensor, SmartTv, Thermostat};
    use crate::room::Room;

    fn sample_controller() -> Controller {
        let mut living = Room::new("Living Room");
        living.add_device(Light::new("L1", "Lamp", 75).unwrap()).unwrap();
        living.add_device(Thermostat::new("T1", "Thermostat", 22).unwrap()).unwrap();
        living.add_device(SmartTv::new("TV1", "TV")).unwrap();
        living.add_device(MotionSensor::new("S1", "Sensor")).unwrap();

        let mut bedroom = Room::new("Bedroom");
        bedroom.add_device(Light::new("L2", "Lamp", 20).unwrap()).unwrap();

        let mut home = Home::new("Test Home");
        home.add_room(living).unwrap();
        home.add_room(bedroom).unwrap();
        Controller::new(home)
    }

    #[test]
    fn test_turn_on_all_lights_only_touches_lights() {
        let mut controller = sample_controller();
        controller.turn_on_all_lights();
        assert!(controller.find_device("L1").unwrap().is_on());
        assert!(controller.find_device("L2").unwrap().is_on());
        assert!(!controller.find_device("TV1").unwrap().is_on());
        assert!(!controller.find_device("T1").unwrap().is_on());
    }

    #[test]
    fn test_turn_off_all_devices() {
        let mut controller = sample_controller();
        controller.turn_on_all_lights();
        controller.find_device_mut("TV1").unwrap().turn_on();
        controller.turn_off_all_devices();
        assert!(controller.home().devices().all(|d| !d.is_on()));
        assert_eq!(controller.total_power(), 0.0);
    }

    #[test]
    fn test_total_power_is_room_independent() {
        let mut controller = sample_controller();
        controller.turn_on_all_lights();
        controller.find_device_mut("TV1").unwrap().turn_on();

        let device_sum: f64 = controller.home().devices().map(Device::power_draw).sum();
        let room_sum: f64 = controller.home().rooms().map(Room::total_power).sum();
        assert_eq!(controller.total_power(), device_sum);
        assert_eq!(controller.total_power(), room_sum);
        // 7.5 W + 2 W lights, 100 W TV
        assert_eq!(controller.total_power(), 109.5);
    }

    #[test]
    fn test_energy_saving_policy() {
        let mut controller = sample_controller();
        controller.turn_on_all_lights();
        controller.find_device_mut("TV1").unwrap().turn_on();

        controller.energy_saving_mode();

        let bright = controller.find_device("L1").unwrap().as_light().unwrap();
        assert_eq!(bright.brightness(), 30);
        // A light already below the floor is left unchanged
        let dim = controller.find_device("L2").unwrap().as_light().unwrap();
        assert_eq!(dim.brightness(), 20);
        assert!(!controller.find_device("TV1").unwrap().is_on());
    }

    #[test]
    fn test_energy_saving_leaves_thermostat_alone() {
        let mut controller = sample_controller();
        controller.find_device_mut("T1").unwrap().turn_on();
        let before = controller.find_device("T1").unwrap().power_draw();
        controller.energy_saving_mode();
        assert!(controller.find_device("T1").unwrap().is_on());
        assert_eq!(controller.find_device("T1").unwrap().power_draw(), before);
    }

    #[test]
    fn test_find_device_missing_id_mutates_nothing() {
        let mut controller = sample_controller();
        controller.turn_on_all_lights();
        let before = controller.status_report();
        assert!(controller.find_device("nope").is_err());
        assert_eq!(controller.status_report(), before);
    }

    #[test]
    fn test_status_report_covers_every_device() {
        let controller = sample_controller();
        let report = controller.status_report();
        assert_eq!(report.lines().count(), 5);
        assert!(report.lines().next().unwrap().starts_with("[L1]"));
        assert!(report.contains("[S1]"));
    }
}
