//! Home container: named rooms plus a flattened, globally unique device view

use crate::device::Device;
use crate::error::HomeError;
use crate::room::Room;
use indexmap::IndexMap;

/// A home holding rooms with unique names and globally unique device ids
///
/// Global id uniqueness is enforced when rooms and devices are added, so
/// lookups never have to disambiguate.
#[derive(Debug, Clone)]
pub struct Home {
    name: String,
    rooms: IndexMap<String, Room>,
}

impl Home {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rooms: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a room; rejects a duplicate room name or any device id already
    /// present elsewhere in the home, leaving the home unchanged
    pub fn add_room(&mut self, room: Room) -> Result<(), HomeError> {
        if self.rooms.contains_key(room.name()) {
            return Err(HomeError::DuplicateRoom(room.name().to_string()));
        }
        for device in room.devices() {
            if self.find_device(device.id()).is_ok() {
                return Err(HomeError::DuplicateDevice(device.id().to_string()));
            }
        }
        self.rooms.insert(room.name().to_string(), room);
        Ok(())
    }

    /// Add a device to a room, checking id uniqueness across the whole home
    pub fn add_device(
        &mut self,
        room_name: &str,
        device: impl Into<Device>,
    ) -> Result<(), HomeError> {
        let device = device.into();
        if self.find_device(device.id()).is_ok() {
            return Err(HomeError::DuplicateDevice(device.id().to_string()));
        }
        let room = self
            .rooms
            .get_mut(room_name)
            .ok_or_else(|| HomeError::RoomNotFound(room_name.to_string()))?;
        room.add_device(device)
    }

    pub fn room(&self, name: &str) -> Result<&Room, HomeError> {
        self.rooms
            .get(name)
            .ok_or_else(|| HomeError::RoomNotFound(name.to_string()))
    }

    pub fn room_mut(&mut self, name: &str) -> Result<&mut Room, HomeError> {
        self.rooms
            .get_mut(name)
            .ok_or_else(|| HomeError::RoomNotFound(name.to_string()))
    }

    /// Rooms in insertion order
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// All devices, rooms in insertion order then devices in insertion order
    pub fn devices(&self) -> impl Iterator<Item = &Device> {
        self.rooms.values().flat_map(Room::devices)
    }

    pub fn devices_mut(&mut self) -> impl Iterator<Item = &mut Device> {
        self.rooms.values_mut().flat_map(Room::devices_mut)
    }

    #[must_use]
    pub fn device_count(&self) -> usize {
        self.rooms.values().map(Room::device_count).sum()
    }

    /// Look a device up by id anywhere in the home
    pub fn find_device(&self, id: &str) -> Result<&Device, HomeError> {
        self.rooms
            .values()
            .find_map(|room| room.device(id).ok())
            .ok_or_else(|| HomeError::DeviceNotFound(id.to_string()))
    }

    pub fn find_device_mut(&mut self, id: &str) -> Result<&mut Device, HomeError> {
        self.rooms
            .values_mut()
            .find_map(|room| room.device_mut(id).ok())
            .ok_or_else(|| HomeError::DeviceNotFound(id.to_string()))
    }
}
