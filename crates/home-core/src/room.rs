//! Room container: a named, insertion-ordered set of devices

use crate::device::Device;
use crate::error::HomeError;
use indexmap::IndexMap;

/// A named room holding devices with unique ids
///
/// Devices are kept in insertion order, which the reports and the home-wide
/// flattened view rely on.
#[derive(Debug, Clone)]
pub struct Room {
    name: String,
    devices: IndexMap<String, Device>,
}

impl Room {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            devices: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a device; rejects a colliding id and leaves the room unchanged
    pub fn add_device(&mut self, device: impl Into<Device>) -> Result<(), HomeError> {
        let device = device.into();
        if self.devices.contains_key(device.id()) {
            return Err(HomeError::DuplicateDevice(device.id().to_string()));
        }
        self.devices.insert(device.id().to_string(), device);
        Ok(())
    }

    /// Remove a device by id, returning it
    pub fn remove_device(&mut self, id: &str) -> Result<Device, HomeError> {
        self.devices
            .shift_remove(id)
            .ok_or_else(|| HomeError::DeviceNotFound(id.to_string()))
    }

    pub fn device(&self, id: &str) -> Result<&Device, HomeError> {
        self.devices
            .get(id)
            .ok_or_else(|| HomeError::DeviceNotFound(id.to_string()))
    }

    pub fn device_mut(&mut self, id: &str) -> Result<&mut Device, HomeError> {
        self.devices
            .get_mut(id)
            .ok_or_else(|| HomeError::DeviceNotFound(id.to_string()))
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.devices.contains_key(id)
    }

    /// Devices in insertion order
    pub fn devices(&self) -> impl Iterator<Item = &Device> {
        self.devices.values()
    }

    pub fn devices_mut(&mut self) -> impl Iterator<Item = &mut Device> {
        self.devices.values_mut()
    }

    #[must_use]
    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    /// Sum of the current draw of every device in the room
    #[must_use]
    pub fn total_power(&self) -> f64 {
        self.devices.values().map(Device::power_draw).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{Light, SmartTv};

    #[test]
    fn test_duplicate_id_rejected() {
        let mut room = Room::new("Living Room");
        room.add_device(Light::new("L1", "Lamp", 50).unwrap()).unwrap();
        let result = room.add_device(SmartTv::new("L1", "TV"));
        assert!(matches!(result, Err(HomeError::DuplicateDevice(_))));
        assert_eq!(room.device_count(), 1);
        // The original device is untouched
        assert!(room.device("L1").unwrap().as_light().is_some());
    }

    #[test]
    fn test_lookup_missing_device() {
        let room = Room::new("Bedroom");
        assert!(matches!(
            room.device("nope"),
            Err(HomeError::DeviceNotFound(_))
        ));
    }

    #[test]
    fn test_remove_device() {
        let mut room = Room::new("Bedroom");
        room.add_device(Light::new("L1", "Lamp", 50).unwrap()).unwrap();
        let removed = room.remove_device("L1").unwrap();
        assert_eq!(removed.id(), "L1");
        assert_eq!(room.device_count(), 0);
        assert!(matches!(
            room.remove_device("L1"),
            Err(HomeError::DeviceNotFound(_))
        ));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut room = Room::new("Living Room");
        room.add_device(SmartTv::new("TV1", "TV")).unwrap();
        room.add_device(Light::new("L1", "Lamp", 50).unwrap()).unwrap();
        room.add_device(Light::new("L2", "Spot", 50).unwrap()).unwrap();
        let ids: Vec<&str> = room.devices().map(Device::id).collect();
        assert_eq!(ids, ["TV1", "L1", "L2"]);
    }

    #[test]
    fn test_total_power() {
        let mut room = Room::new("Living Room");
        let mut light = Light::new("L1", "Lamp", 100).unwrap();
        light.turn_on();
        let mut tv = SmartTv::new("TV1", "TV");
        tv.turn_on();
        room.add_device(light).unwrap();
        room.add_device(tv).unwrap();
        // 10 W light + 100 W TV at volume 50
        assert_eq!(room.total_power(), 110.0);
    }
}
