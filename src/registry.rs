//! Virtual device registry
//!
//! Holds the simulated sensor fleet in registration order. The protocol can
//! list and delete devices but never adds one; the register commands are
//! acknowledged without touching the registry.

use serde::Serialize;

/// Sensor device class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Soil,
    Atm,
}

/// Stored device status
///
/// Distinct from the per-sweep offline simulation, which never mutates this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    Online,
    Offline,
}

/// A registered virtual device
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Device {
    pub id: String,
    #[serde(rename = "type")]
    pub class: DeviceClass,
    pub status: DeviceStatus,
}

impl Device {
    pub fn new(id: &str, class: DeviceClass) -> Self {
        Self {
            id: id.into(),
            class,
            status: DeviceStatus::Online,
        }
    }
}

/// Ordered device collection; ids are unique
#[derive(Debug, Default)]
pub struct Registry {
    devices: Vec<Device>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the registry pre-populated with the simulated fleet
    /// (3 soil nodes + 1 atmospheric node, all online)
    pub fn seeded() -> Self {
        Self {
            devices: vec![
                Device::new("soil00001", DeviceClass::Soil),
                Device::new("soil00002", DeviceClass::Soil),
                Device::new("soil00003", DeviceClass::Soil),
                Device::new("atm00001", DeviceClass::Atm),
            ],
        }
    }

    /// Current contents in registration order
    pub fn list(&self) -> &[Device] {
        &self.devices
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Remove every device; idempotent
    pub fn remove_all(&mut self) {
        self.devices.clear();
    }

    /// Remove the device with the given id, returning whether one existed
    pub fn remove_by_id(&mut self, id: &str) -> bool {
        let before = self.devices.len();
        self.devices.retain(|d| d.id != id);
        self.devices.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_order_and_content() {
        let registry = Registry::seeded();
        let ids: Vec<&str> = registry.list().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["soil00001", "soil00002", "soil00003", "atm00001"]);
        assert!(registry
            .list()
            .iter()
            .all(|d| d.status == DeviceStatus::Online));
        assert_eq!(registry.list()[3].class, DeviceClass::Atm);
    }

    #[test]
    fn test_ids_unique_after_removals() {
        let mut registry = Registry::seeded();
        registry.remove_by_id("soil00002");
        registry.remove_by_id("missing");
        let mut ids: Vec<&str> = registry.list().iter().map(|d| d.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), registry.len());
    }

    #[test]
    fn test_remove_by_id() {
        let mut registry = Registry::seeded();
        assert!(registry.remove_by_id("soil00002"));
        assert_eq!(registry.len(), 3);
        assert!(registry.list().iter().all(|d| d.id != "soil00002"));

        // Absent id: nothing removed, caller decides how to report it.
        assert!(!registry.remove_by_id("soil00002"));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_remove_all_idempotent() {
        let mut registry = Registry::seeded();
        registry.remove_all();
        assert!(registry.is_empty());
        registry.remove_all();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_device_json_shape() {
        let device = Device::new("soil00001", DeviceClass::Soil);
        let json = serde_json::to_string(&device).unwrap();
        assert_eq!(
            json,
            r#"{"id":"soil00001","type":"soil","status":"online"}"#
        );
    }
}
