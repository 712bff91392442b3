use observable_settings_core::ObservableSettings;

#[derive(ObservableSettings)]
struct AudioSettings {
    #[observable_setting]
    _volume: f64,
}

fn main() {}
