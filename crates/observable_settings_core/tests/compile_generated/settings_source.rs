use observable_settings_core::prelude::*;
use std::time::Duration;

/// Application settings.
#[derive(SettingsSource)]
pub struct AppSettings {
    /// Output volume between 0 and 1.
    #[observable_setting]
    _volume: f64,

    #[observable_setting(key = "app.interval", raise_event = false)]
    _interval: Duration,

    #[observable_setting]
    _anchor: Point,

    #[observable_setting]
    _recent: Vec<String>,

    context: SettingsContext,
}

include!("AppSettings_observable_settings.g.rs");

pub mod network {
    use observable_settings_core::{SettingsContext, SettingsSource};

    #[derive(SettingsSource)]
    pub struct Proxy {
        #[observable_setting = "proxy.port"]
        pub _port: Option<u16>,
        pub context: SettingsContext,
    }

    include!("network.Proxy_observable_settings.g.rs");
}

fn main() {
    let settings = AppSettings {
        _volume: 1.0,
        _interval: Duration::from_secs(60),
        _anchor: Point::default(),
        _recent: Vec::new(),
        context: SettingsContext::in_memory(),
    };

    settings.set_volume(0.5);
    settings.set_interval(Duration::from_secs(5));
    settings.set_anchor(Point::new(1.0, 2.0));
    settings.set_recent(vec!["a.txt".to_string()]);
    assert_eq!(settings.volume(), 0.5);

    let store = settings.settings_context().store();
    assert!(matches!(store.try_get("app.interval"), Some(SettingValue::Duration(_))));
    assert!(matches!(store.try_get("Anchor"), Some(SettingValue::Point(_))));
    assert!(matches!(store.try_get("Recent"), Some(SettingValue::String(_))));

    let _: std::sync::Arc<Event<SettingValueChanged<f64>>> = settings.volume_changed();
    settings.property_changed().subscribe(|_| {});

    let proxy = network::Proxy {
        _port: None,
        context: SettingsContext::in_memory(),
    };
    proxy.set_port(Some(8080));
    assert_eq!(proxy.port(), Some(8080));
    assert_eq!(proxy.setting_properties()[0].key, "proxy.port");
}
