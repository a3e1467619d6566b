//! Settings persistence coordination.
//!
//! Stores serializable settings in eframe's persistent storage as JSON strings,
//! next to the theme preference handled by `ThemeCoordinator`.

use serde::{Deserialize, Serialize};

/// Coordinates settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting, returning `default` if it is missing or cannot be parsed.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface
    /// * `key` - The storage key for this setting
    /// * `default` - The value to use if loading fails
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::try_load_setting(storage, key).unwrap_or(default)
    }

    /// Attempts to load a setting, returning None if not found or invalid.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let json_str = storage?.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("Ignoring stored setting '{}': {}", key, err);
                None
            }
        }
    }

    /// Saves a setting to persistent storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => storage.set_string(key, json_str),
            Err(err) => log::warn!("Failed to serialize setting '{}': {}", key, err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotring::CursorSettings;
    use std::collections::HashMap;

    /// In-memory storage for testing
    #[derive(Default)]
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_round_trip_cursor_settings() {
        let mut storage = MockStorage::default();
        let settings = CursorSettings {
            theme: "Dark".to_string(),
            hovered_ring_diameter: 64.0,
            debug_trace: true,
            ..Default::default()
        };

        SettingsCoordinator::save_setting(&mut storage, "cursor_settings", &settings);
        let loaded: CursorSettings =
            SettingsCoordinator::load_setting_or(Some(&storage), "cursor_settings", CursorSettings::default());
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_storage_uses_default() {
        let loaded = SettingsCoordinator::load_setting_or(None, "cursor_settings", CursorSettings::default());
        assert_eq!(loaded, CursorSettings::default());
    }

    #[test]
    fn test_corrupt_value_is_ignored() {
        let mut storage = MockStorage::default();
        eframe::Storage::set_string(&mut storage, "cursor_settings", "{not json".to_string());

        let loaded: Option<CursorSettings> = SettingsCoordinator::try_load_setting(Some(&storage), "cursor_settings");
        assert!(loaded.is_none());
    }
}
