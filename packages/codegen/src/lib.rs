//! # Canvas Typegen Codegen
//!
//! Turns component schema records into a TypeScript declaration file.
//!
//! ## Pipeline
//!
//! - **Mapping**: each parameter's declared kind becomes a type expression plus
//!   the imports it needs (`TypeMapper`)
//! - **Declarations**: each component becomes one `export interface` fragment
//!   (`DeclarationBuilder`)
//! - **Merge**: per-component `Writer`s are folded into one, imports unioned by
//!   module source, bodies kept in input order (`merge_writers`)
//! - **Render**: the merged `Writer` is serialized into an import block and a
//!   body block (`render_imports`, `render_body`)
//!
//! ## Example
//!
//! ```rust
//! use canvas_typegen_codegen::{generate, GeneratedTypes, TypeCatalog};
//! use canvas_typegen_schema::{ComponentRecord, ParameterDeclaration};
//!
//! let records = vec![
//!     ComponentRecord::new("footer")
//!         .with_parameter(ParameterDeclaration::new("legal", "richText")),
//! ];
//!
//! let writer = generate(&records, &TypeCatalog::default()).unwrap();
//! let output = GeneratedTypes::from_writer(&writer);
//!
//! assert_eq!(
//!     output.imports,
//!     "import type { RichTextNode } from \"@uniformdev/richtext\";"
//! );
//! assert!(output.body.contains("legal?: RichTextNode;"));
//! ```

mod buffer;
pub mod catalog;
pub mod declarations;
pub mod error;
pub mod kind;
pub mod mapper;
pub mod naming;
pub mod render;
pub mod writer;

pub use catalog::{NamedType, TypeCatalog};
pub use declarations::DeclarationBuilder;
pub use error::{CodegenError, CodegenResult, ImportConflictError, NamingError, TypeMappingError};
pub use kind::ParameterKind;
pub use mapper::{MappedType, TypeMapper};
pub use render::{render_body, render_document, render_imports};
pub use writer::{merge_writers, ImportRequirement, ImportSet, ImportedName, Writer};

use canvas_typegen_schema::ComponentRecord;
use tracing::debug;

/// Build and merge declarations for every record, in order.
///
/// Fails on an inconsistent catalog or on the first component that cannot
/// be generated; no partial output is produced.
pub fn generate(records: &[ComponentRecord], catalog: &TypeCatalog) -> CodegenResult<Writer> {
    catalog.validate()?;

    let mut builder = DeclarationBuilder::new(catalog);
    let writers = records
        .iter()
        .map(|record| builder.build(record))
        .collect::<CodegenResult<Vec<_>>>()?;

    let merged = merge_writers(writers);
    debug!(
        "Merged {} declarations with imports from {} modules",
        merged.body().len(),
        merged.imports().len()
    );
    Ok(merged)
}

/// Rendered import and body blocks of a merged `Writer`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTypes {
    pub imports: String,
    pub body: String,
}

impl GeneratedTypes {
    pub fn from_writer(writer: &Writer) -> Self {
        Self {
            imports: render_imports(writer),
            body: render_body(writer),
        }
    }
}
