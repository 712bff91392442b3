use observable_settings_core::prelude::*;
use std::sync::Arc;

struct Shared {
    changed: Event<PropertyChangedEventArgs>,
}

#[derive(ObservableSettings)]
#[observable_settings(implements(NotifyPropertyChanged))]
struct SessionSettings {
    #[observable_setting]
    _user: Option<String>,

    #[observable_settings(context)]
    state: Arc<SettingsContext>,

    shared: Shared,
}

impl NotifyPropertyChanged for SessionSettings {
    fn property_changed(&self) -> &Event<PropertyChangedEventArgs> {
        &self.shared.changed
    }
}

fn main() {
    let settings = SessionSettings {
        _user: None,
        state: Arc::new(SettingsContext::in_memory()),
        shared: Shared {
            changed: Event::new(),
        },
    };

    settings.set_user(Some("ada".to_string()));
    assert_eq!(settings.user().as_deref(), Some("ada"));
}
