use observable_settings_core::{ObservableSettings, SettingsContext};

#[derive(ObservableSettings)]
struct AudioSettings {
    #[observable_setting(binary)]
    _volume: f64,
    context: SettingsContext,
}

fn main() {}
