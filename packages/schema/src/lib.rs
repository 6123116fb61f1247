//! # Canvas Typegen Schema
//!
//! In-memory model of component schema files and the reader that discovers
//! them on disk.
//!
//! A component file looks like this (YAML or JSON):
//!
//! ```yaml
//! id: hero
//! name: Hero
//! parameters:
//!   - id: title
//!     name: Title
//!     type: text
//!     typeConfig:
//!       required: true
//! slots:
//!   - id: content
//!     name: Content
//! ```

pub mod component;
pub mod error;
pub mod reader;

pub use component::{AllowedContentType, ComponentRecord, ParameterDeclaration, SlotDeclaration};
pub use error::{SchemaError, SchemaResult};
pub use reader::{parse_component, read_components_from_dir};
