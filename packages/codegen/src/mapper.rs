use crate::catalog::{NamedType, TypeCatalog};
use crate::error::TypeMappingError;
use crate::kind::ParameterKind;
use crate::naming::string_literal;
use crate::writer::ImportSet;
use canvas_typegen_schema::ParameterDeclaration;

/// A TypeScript type expression together with the imports it needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedType {
    pub expression: String,
    pub imports: ImportSet,
}

impl MappedType {
    fn builtin(expression: &str) -> Self {
        Self {
            expression: expression.to_string(),
            imports: ImportSet::new(),
        }
    }

    fn named(named: &NamedType) -> Self {
        Self {
            expression: named.local_name().to_string(),
            imports: ImportSet::of(named),
        }
    }

    fn literal_union(values: &[String]) -> Self {
        let literals: Vec<String> = values.iter().map(|v| string_literal(v)).collect();
        Self {
            expression: literals.join(" | "),
            imports: ImportSet::new(),
        }
    }

    fn array_of(item: MappedType) -> Self {
        Self {
            expression: format!("Array<{}>", item.expression),
            imports: item.imports,
        }
    }
}

/// Maps parameter declarations to TypeScript type expressions
pub struct TypeMapper<'a> {
    catalog: &'a TypeCatalog,
}

impl<'a> TypeMapper<'a> {
    pub fn new(catalog: &'a TypeCatalog) -> Self {
        Self { catalog }
    }

    pub fn map(&self, parameter: &ParameterDeclaration) -> Result<MappedType, TypeMappingError> {
        let kind = ParameterKind::resolve(parameter)?;
        Ok(self.map_kind(&kind))
    }

    pub fn map_kind(&self, kind: &ParameterKind) -> MappedType {
        match kind {
            ParameterKind::Text => MappedType::builtin("string"),
            ParameterKind::Number => MappedType::builtin("number"),
            ParameterKind::Boolean => MappedType::builtin("boolean"),

            ParameterKind::Select { options } => MappedType::literal_union(options),
            ParameterKind::Reference { allowed } => MappedType::literal_union(allowed),

            ParameterKind::RichText => MappedType::named(&self.catalog.rich_text),
            ParameterKind::Link => MappedType::named(&self.catalog.link),
            ParameterKind::Object => MappedType::named(&self.catalog.object),

            ParameterKind::Array(item) => MappedType::array_of(self.map_kind(item)),
        }
    }

    /// Type of a slot field: an array of child component placeholders
    pub fn slot_type(&self) -> MappedType {
        MappedType::array_of(MappedType::named(&self.catalog.slot_child))
    }
}
