use observable_settings_core::{
    KeyValueStore, ObservableSettings, SettingValue, SettingsContext, StorageStrategy,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Duration {
    minutes: u32,
}

#[derive(ObservableSettings)]
struct TravelSettings {
    #[observable_setting]
    _home: Point,

    #[observable_setting]
    _commute: Duration,

    #[observable_setting(json)]
    _window: observable_settings_core::Rect,

    #[observable_setting]
    _timeout: std::time::Duration,

    context: SettingsContext,
}

fn main() {
    let settings = TravelSettings {
        _home: Point { lat: 0.0, lon: 0.0 },
        _commute: Duration { minutes: 30 },
        _window: observable_settings_core::Rect::default(),
        _timeout: std::time::Duration::from_secs(1),
        context: SettingsContext::in_memory(),
    };

    settings.set_home(Point {
        lat: 52.37,
        lon: 4.89,
    });
    settings.set_commute(Duration { minutes: 25 });
    settings.set_window(observable_settings_core::Rect::new(0.0, 0.0, 640.0, 480.0));
    settings.set_timeout(std::time::Duration::from_secs(5));
    assert_eq!(settings.commute(), Duration { minutes: 25 });

    let strategies: Vec<_> = settings
        .setting_properties()
        .iter()
        .map(|property| property.strategy)
        .collect();
    assert_eq!(
        strategies,
        vec![
            StorageStrategy::Json,
            StorageStrategy::Json,
            StorageStrategy::Json,
            StorageStrategy::Native,
        ]
    );

    let store = settings.settings_context().store();
    assert!(matches!(store.try_get("Home"), Some(SettingValue::String(_))));
    assert!(matches!(store.try_get("Timeout"), Some(SettingValue::Duration(_))));
}
