use crate::buffer::CodeBuffer;
use crate::catalog::TypeCatalog;
use crate::error::{CodegenError, CodegenResult, NamingError};
use crate::mapper::TypeMapper;
use crate::naming::{property_key, to_type_name};
use crate::writer::Writer;
use canvas_typegen_schema::ComponentRecord;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Global generic used for array and slot fields
const ARRAY_TYPE: &str = "Array";

/// Builds one interface declaration per component.
///
/// The builder remembers every declaration name it has issued, so two
/// components whose ids normalize to the same name are rejected. Names
/// that would collide with an imported type or `Array` are rejected too.
pub struct DeclarationBuilder<'a> {
    mapper: TypeMapper<'a>,
    reserved: HashSet<String>,
    issued: HashMap<String, String>,
}

impl<'a> DeclarationBuilder<'a> {
    pub fn new(catalog: &'a TypeCatalog) -> Self {
        let reserved = catalog
            .entries()
            .iter()
            .map(|entry| entry.local_name().to_string())
            .chain(std::iter::once(ARRAY_TYPE.to_string()))
            .collect();

        Self {
            mapper: TypeMapper::new(catalog),
            reserved,
            issued: HashMap::new(),
        }
    }

    pub fn build(&mut self, component: &ComponentRecord) -> CodegenResult<Writer> {
        let type_name = to_type_name(&component.id)?;
        if let Some(existing_id) = self.issued.get(&type_name) {
            return Err(NamingError::Duplicate {
                id: component.id.clone(),
                existing_id: existing_id.clone(),
                type_name,
            }
            .into());
        }
        if self.reserved.contains(&type_name) {
            return Err(NamingError::Reserved {
                id: component.id.clone(),
                type_name,
            }
            .into());
        }

        let mut fields: HashSet<&str> = HashSet::new();
        let mut writer = Writer::new();
        let mut buffer = CodeBuffer::new();

        buffer.add_line(&format!("export interface {} {{", type_name));
        buffer.indent();

        for parameter in &component.parameters {
            claim_field(&mut fields, component, &parameter.id)?;
            let mapped = self
                .mapper
                .map(parameter)
                .map_err(|source| CodegenError::TypeMapping {
                    component_id: component.id.clone(),
                    source,
                })?;

            let optional_marker = if parameter.is_required() { "" } else { "?" };
            buffer.add_line(&format!(
                "{}{}: {};",
                property_key(&parameter.id),
                optional_marker,
                mapped.expression
            ));
            writer.add_imports(mapped.imports);
        }

        for slot in &component.slots {
            claim_field(&mut fields, component, &slot.id)?;
            let mapped = self.mapper.slot_type();
            buffer.add_line(&format!("{}: {};", property_key(&slot.id), mapped.expression));
            writer.add_imports(mapped.imports);
        }

        buffer.dedent();
        buffer.add("}");
        writer.push_body(buffer.into_output());

        debug!(
            "Built {} for component '{}' ({} parameters, {} slots)",
            type_name,
            component.id,
            component.parameters.len(),
            component.slots.len()
        );
        self.issued.insert(type_name, component.id.clone());

        Ok(writer)
    }
}

/// Record a property key, failing if the component already declared it
fn claim_field<'r>(
    fields: &mut HashSet<&'r str>,
    component: &ComponentRecord,
    key: &'r str,
) -> CodegenResult<()> {
    if fields.insert(key) {
        Ok(())
    } else {
        Err(NamingError::DuplicateField {
            component_id: component.id.clone(),
            key: key.to_string(),
        }
        .into())
    }
}
