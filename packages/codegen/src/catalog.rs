use crate::error::ImportConflictError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An externally defined type, imported by name from a module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedType {
    /// Module specifier used in the import statement
    pub module: String,

    /// Exported symbol
    pub name: String,

    /// Local name to import the symbol as
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl NamedType {
    pub fn new(module: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            name: name.into(),
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Name the type is referred to by in generated code
    pub fn local_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    fn describe(&self) -> String {
        format!("'{}' from \"{}\"", self.name, self.module)
    }
}

/// Which external type each structured parameter kind maps to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeCatalog {
    #[serde(default = "default_rich_text")]
    pub rich_text: NamedType,

    #[serde(default = "default_link")]
    pub link: NamedType,

    /// Nested object (`json`) parameters
    #[serde(default = "default_object")]
    pub object: NamedType,

    /// Element type of slot arrays
    #[serde(default = "default_slot_child")]
    pub slot_child: NamedType,
}

fn default_rich_text() -> NamedType {
    NamedType::new("@uniformdev/richtext", "RichTextNode")
}

fn default_link() -> NamedType {
    NamedType::new("@uniformdev/canvas", "LinkParamValue")
}

fn default_object() -> NamedType {
    NamedType::new("@uniformdev/canvas", "JsonParamValue")
}

fn default_slot_child() -> NamedType {
    NamedType::new("@uniformdev/canvas", "ComponentInstance")
}

impl TypeCatalog {
    /// Every imported type the catalog can produce
    pub fn entries(&self) -> [&NamedType; 4] {
        [&self.rich_text, &self.link, &self.object, &self.slot_child]
    }

    /// Reject catalogs that bind one local name to two different symbols
    pub fn validate(&self) -> Result<(), ImportConflictError> {
        let mut bound: HashMap<&str, &NamedType> = HashMap::new();

        for entry in self.entries() {
            match bound.get(entry.local_name()).copied() {
                Some(existing) if existing.module != entry.module || existing.name != entry.name => {
                    return Err(ImportConflictError {
                        local_name: entry.local_name().to_string(),
                        first: existing.describe(),
                        second: entry.describe(),
                    });
                }
                Some(_) => {}
                None => {
                    bound.insert(entry.local_name(), entry);
                }
            }
        }

        Ok(())
    }
}

impl Default for TypeCatalog {
    fn default() -> Self {
        Self {
            rich_text: default_rich_text(),
            link: default_link(),
            object: default_object(),
            slot_child: default_slot_child(),
        }
    }
}
