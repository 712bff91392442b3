use observable_settings_core::{ObservableSettings, SettingsContext};

#[derive(ObservableSettings)]
struct AudioSettings {
    #[observable_setting]
    _volume: f64,
    _primary: SettingsContext,
    _secondary: SettingsContext,
}

fn main() {}
