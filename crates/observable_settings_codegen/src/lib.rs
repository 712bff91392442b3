//! Code generation behind observable settings.
//!
//! Generation is a two-stage pipeline:
//!
//! - [`extract`] - Finds `#[observable_setting]` fields and resolves them to
//!   [`FieldDeclaration`]s
//! - [`emit`] - Turns the records of one struct into accessors, change
//!   events and trait implementations
//!
//! Two front ends drive it:
//!
//! - [`derive`] - `#[derive(ObservableSettings)]` on a single struct
//! - [`generator`] - Whole source files, one [`GeneratedUnit`] per struct
//!
//! Supporting modules:
//!
//! - [`model`] - Records passed between the stages
//! - [`naming`] - Property, getter, setter and event names
//! - [`native_types`] - The natively storable type allow-list
//! - [`enclosing`] - Struct-level configuration and the context field
//! - [`imports`] - `use` items that qualify field types in the generator
//! - [`render`] - File names and text of generated units
//! - [`crate_path`] - Locating the runtime crate from a macro

pub mod crate_path;
pub mod derive;
pub mod emit;
pub mod enclosing;
pub mod error;
pub mod extract;
pub mod generator;
pub mod imports;
pub mod model;
pub mod naming;
pub mod native_types;
pub mod render;

pub use derive::{expand_derive, expand_with_crate_path};
pub use emit::{Emitter, NOTIFY_CAPABILITY};
pub use error::CodegenError;
pub use extract::{Extractor, MARKER_ATTRIBUTE, MarkerArgs};
pub use generator::{Diagnostic, GeneratedUnit, Generation, Generator, SourceFile};
pub use model::{
    Container, EnclosingType, FieldCandidate, FieldDeclaration, StorageStrategy, TypeDescriptor,
    TypeIdentity,
};
