use observable_settings_core::{ObservableSettings, SettingsContext};
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(ObservableSettings)]
struct Slot<T: Serialize + DeserializeOwned + Clone + PartialEq + 'static> {
    #[observable_setting]
    _value: T,
    ctx: SettingsContext,
}

fn main() {
    #[derive(ObservableSettings)]
    struct Local {
        #[observable_setting]
        r#loop: bool,
        ctx: SettingsContext,
    }

    let local = Local {
        r#loop: false,
        ctx: SettingsContext::in_memory(),
    };
    local.set_loop(true);
    assert!(local.r#loop());

    let slot = Slot {
        _value: vec![1_u8],
        ctx: SettingsContext::in_memory(),
    };
    slot.set_value(vec![2]);
    assert_eq!(slot.value(), vec![2]);
}
