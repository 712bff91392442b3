use observable_settings_core::prelude::*;
use std::collections::BTreeMap;

#[derive(ObservableSettings)]
struct AppSettings {
    /// Output volume.
    #[observable_setting]
    _volume: f64,

    #[observable_setting("app.title")]
    _title: String,

    #[observable_setting(raise_event = false)]
    _last_window: Option<Rect>,

    #[observable_setting = "app.aliases"]
    _aliases: BTreeMap<String, String>,

    context: SettingsContext,
}

fn main() {
    let settings = AppSettings {
        _volume: 1.0,
        _title: String::new(),
        _last_window: None,
        _aliases: BTreeMap::new(),
        context: SettingsContext::in_memory(),
    };

    settings.set_volume(settings.volume() / 2.0);
    settings.set_title("Editor".to_string());
    settings.set_last_window(Some(Rect::new(0.0, 0.0, 800.0, 600.0)));
    settings.set_aliases(BTreeMap::new());

    let _: std::sync::Arc<Event<SettingValueChanged<f64>>> = settings.volume_changed();
    let _: std::sync::Arc<Event<SettingValueChanged<BTreeMap<String, String>>>> =
        settings.aliases_changed();
    assert_eq!(settings.setting_properties().len(), 4);
}
