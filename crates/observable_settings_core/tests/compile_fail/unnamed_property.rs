use observable_settings_core::{ObservableSettings, SettingsContext};

#[derive(ObservableSettings)]
struct AudioSettings {
    #[observable_setting]
    __: f64,
    context: SettingsContext,
}

fn main() {}
