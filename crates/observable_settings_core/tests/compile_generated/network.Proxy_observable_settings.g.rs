// @generated by settings-gen for `network::Proxy`. Do not edit.

impl :: observable_settings_core :: ObservableSettings for Proxy { fn settings_context (& self) -> & :: observable_settings_core :: SettingsContext { & self . context } fn setting_properties (& self) -> & 'static [:: observable_settings_core :: SettingProperty] { const PROPERTIES : & [:: observable_settings_core :: SettingProperty] = & [:: observable_settings_core :: SettingProperty { name : "Port" , key : "proxy.port" , strategy : :: observable_settings_core :: StorageStrategy :: Native , nullable : true , raises_event : true , }] ; PROPERTIES } } impl :: observable_settings_core :: NotifyPropertyChanged for Proxy { fn property_changed (& self) -> & :: observable_settings_core :: Event < :: observable_settings_core :: PropertyChangedEventArgs > { self . context . property_changed () } } impl Proxy { # [doc = " Returns the `Port` setting, or the field value if it is not stored."] pub fn port (& self) -> Option < u16 > { :: observable_settings_core :: access :: get_native_nullable (self . context . store () , "proxy.port" , & self . _port) } # [doc = " Sets the `Port` setting and raises change notifications."] pub fn set_port (& self , value : Option < u16 >) { let old = self . port () ; if :: observable_settings_core :: access :: native_nullable_unchanged (& old , & value) { return ; } :: observable_settings_core :: access :: set_native_nullable (self . context . store () , "proxy.port" , & value) ; :: observable_settings_core :: NotifyPropertyChanged :: property_changed (self) . raise (& :: observable_settings_core :: PropertyChangedEventArgs :: new ("Port")) ; self . port_changed () . raise (& :: observable_settings_core :: SettingValueChanged :: new (old , value)) ; } # [doc = " Returns the event raised after `Port` changes."] pub fn port_changed (& self) -> :: std :: sync :: Arc < :: observable_settings_core :: Event < :: observable_settings_core :: SettingValueChanged < Option < u16 > >> > { self . context . value_changed :: < Option < u16 > > ("Port") } }
