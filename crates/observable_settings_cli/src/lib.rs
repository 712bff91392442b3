//! `settings-gen`: observable settings for whole source trees.
//!
//! The `#[derive(ObservableSettings)]` macro covers one struct at a time.
//! `settings-gen` instead scans source files, finds every struct with
//! `#[observable_setting]` fields, and writes one generated file per struct:
//!
//! ```text
//! settings-gen --root src --out-dir src/generated src/settings.rs src/ui/mod.rs
//! ```
//!
//! A scanned struct derives `SettingsSource` so its field attributes are
//! accepted, and `include!`s its unit beside it:
//!
//! ```ignore
//! #[derive(SettingsSource)]
//! pub struct Theme {
//!     #[observable_setting("ui.accent")]
//!     _accent: String,
//!     context: SettingsContext,
//! }
//!
//! include!("generated/ui.Theme_observable_settings.g.rs");
//! ```
//!
//! - [`cli`] - Arguments and the generation run
//! - [`module_path`] - Module paths derived from file locations
//! - [`logging`] - Subscriber setup
//! - [`error`] - Failures that stop a run

pub mod cli;
pub mod error;
pub mod logging;
pub mod module_path;

pub use cli::{Args, Outcome, run};
pub use error::CliError;
pub use logging::{LogFormat, LoggingConfig};
