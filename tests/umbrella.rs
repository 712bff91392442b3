//! The umbrella crate exposes the derive and runtime together.

use observable_settings::prelude::*;
use observable_settings::{SettingProperty, StorageStrategy};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct Shortcut {
    keys: String,
    command: String,
}

#[derive(ObservableSettings)]
struct KeymapSettings {
    /// Bindings in priority order.
    #[observable_setting]
    _shortcuts: Vec<Shortcut>,

    #[observable_setting(raise_event = false)]
    _leader: char,

    context: SettingsContext,
}

#[test]
fn derive_is_reachable_through_umbrella() {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let settings = KeymapSettings {
        _shortcuts: Vec::new(),
        _leader: ' ',
        context: SettingsContext::new(Arc::clone(&store)),
    };

    let binding = Shortcut {
        keys: "ctrl+s".to_string(),
        command: "save".to_string(),
    };
    settings.set_shortcuts(vec![binding.clone()]);
    settings.set_leader(',');

    assert_eq!(settings.shortcuts(), vec![binding]);
    assert_eq!(store.try_get("Leader"), Some(SettingValue::Char(',')));
    assert_eq!(
        settings.setting_property("Leader"),
        Some(&SettingProperty {
            name: "Leader",
            key: "Leader",
            strategy: StorageStrategy::Native,
            nullable: false,
            raises_event: false,
        })
    );
}
