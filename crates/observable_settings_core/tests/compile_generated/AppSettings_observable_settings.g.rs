// @generated by settings-gen for `AppSettings`. Do not edit.

impl :: observable_settings_core :: ObservableSettings for AppSettings { fn settings_context (& self) -> & :: observable_settings_core :: SettingsContext { & self . context } fn setting_properties (& self) -> & 'static [:: observable_settings_core :: SettingProperty] { const PROPERTIES : & [:: observable_settings_core :: SettingProperty] = & [:: observable_settings_core :: SettingProperty { name : "Volume" , key : "Volume" , strategy : :: observable_settings_core :: StorageStrategy :: Native , nullable : false , raises_event : true , } , :: observable_settings_core :: SettingProperty { name : "Interval" , key : "app.interval" , strategy : :: observable_settings_core :: StorageStrategy :: Native , nullable : false , raises_event : false , } , :: observable_settings_core :: SettingProperty { name : "Anchor" , key : "Anchor" , strategy : :: observable_settings_core :: StorageStrategy :: Native , nullable : false , raises_event : true , } , :: observable_settings_core :: SettingProperty { name : "Recent" , key : "Recent" , strategy : :: observable_settings_core :: StorageStrategy :: Json , nullable : false , raises_event : true , }] ; PROPERTIES } } impl :: observable_settings_core :: NotifyPropertyChanged for AppSettings { fn property_changed (& self) -> & :: observable_settings_core :: Event < :: observable_settings_core :: PropertyChangedEventArgs > { self . context . property_changed () } } impl AppSettings { # [doc = " Output volume between 0 and 1."] pub fn volume (& self) -> f64 { :: observable_settings_core :: access :: get_native (self . context . store () , "Volume" , & self . _volume) } # [doc = " Sets the `Volume` setting and raises change notifications."] pub fn set_volume (& self , value : f64) { let old = self . volume () ; if :: observable_settings_core :: access :: native_unchanged (& old , & value) { return ; } :: observable_settings_core :: access :: set_native (self . context . store () , "Volume" , & value) ; :: observable_settings_core :: NotifyPropertyChanged :: property_changed (self) . raise (& :: observable_settings_core :: PropertyChangedEventArgs :: new ("Volume")) ; self . volume_changed () . raise (& :: observable_settings_core :: SettingValueChanged :: new (old , value)) ; } # [doc = " Returns the event raised after `Volume` changes."] pub fn volume_changed (& self) -> :: std :: sync :: Arc < :: observable_settings_core :: Event < :: observable_settings_core :: SettingValueChanged < f64 >> > { self . context . value_changed :: < f64 > ("Volume") } # [doc = " Returns the `Interval` setting, or the field value if it is not stored."] pub fn interval (& self) -> std :: time :: Duration { :: observable_settings_core :: access :: get_native (self . context . store () , "app.interval" , & self . _interval) } # [doc = " Sets the `Interval` setting and raises change notifications."] pub fn set_interval (& self , value : std :: time :: Duration) { let old = self . interval () ; if :: observable_settings_core :: access :: native_unchanged (& old , & value) { return ; } :: observable_settings_core :: access :: set_native (self . context . store () , "app.interval" , & value) ; :: observable_settings_core :: NotifyPropertyChanged :: property_changed (self) . raise (& :: observable_settings_core :: PropertyChangedEventArgs :: new ("Interval")) ; } # [doc = " Returns the `Anchor` setting, or the field value if it is not stored."] pub fn anchor (& self) -> observable_settings_core :: prelude :: Point { :: observable_settings_core :: access :: get_native (self . context . store () , "Anchor" , & self . _anchor) } # [doc = " Sets the `Anchor` setting and raises change notifications."] pub fn set_anchor (& self , value : observable_settings_core :: prelude :: Point) { let old = self . anchor () ; if :: observable_settings_core :: access :: native_unchanged (& old , & value) { return ; } :: observable_settings_core :: access :: set_native (self . context . store () , "Anchor" , & value) ; :: observable_settings_core :: NotifyPropertyChanged :: property_changed (self) . raise (& :: observable_settings_core :: PropertyChangedEventArgs :: new ("Anchor")) ; self . anchor_changed () . raise (& :: observable_settings_core :: SettingValueChanged :: new (old , value)) ; } # [doc = " Returns the event raised after `Anchor` changes."] pub fn anchor_changed (& self) -> :: std :: sync :: Arc < :: observable_settings_core :: Event < :: observable_settings_core :: SettingValueChanged < observable_settings_core :: prelude :: Point >> > { self . context . value_changed :: < observable_settings_core :: prelude :: Point > ("Anchor") } # [doc = " Returns the `Recent` setting, or the field value if it is not stored."] pub fn recent (& self) -> Vec < String > { :: observable_settings_core :: access :: get_json (self . context . store () , "Recent" , & self . _recent) } # [doc = " Sets the `Recent` setting and raises change notifications."] pub fn set_recent (& self , value : Vec < String >) { let old = self . recent () ; if :: observable_settings_core :: access :: json_unchanged (& old , & value) { return ; } :: observable_settings_core :: access :: set_json (self . context . store () , "Recent" , & value) ; :: observable_settings_core :: NotifyPropertyChanged :: property_changed (self) . raise (& :: observable_settings_core :: PropertyChangedEventArgs :: new ("Recent")) ; self . recent_changed () . raise (& :: observable_settings_core :: SettingValueChanged :: new (old , value)) ; } # [doc = " Returns the event raised after `Recent` changes."] pub fn recent_changed (& self) -> :: std :: sync :: Arc < :: observable_settings_core :: Event < :: observable_settings_core :: SettingValueChanged < Vec < String > >> > { self . context . value_changed :: < Vec < String > > ("Recent") } }
