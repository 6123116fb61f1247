use serde::{Deserialize, Serialize};

/// One component definition, as read from a single schema file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRecord {
    /// Unique component identifier, used to derive the declaration name
    pub id: String,

    /// Human readable label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub parameters: Vec<ParameterDeclaration>,

    /// Named child regions
    #[serde(default)]
    pub slots: Vec<SlotDeclaration>,
}

impl ComponentRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            parameters: vec![],
            slots: vec![],
        }
    }

    pub fn with_parameter(mut self, parameter: ParameterDeclaration) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_slot(mut self, slot: SlotDeclaration) -> Self {
        self.slots.push(slot);
        self
    }
}

/// A single typed input of a component.
///
/// `kind` and `type_config` are kept exactly as authored; turning them into
/// a closed set of kinds is the code generator's job, so an unknown kind can
/// be reported against the parameter that declared it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDeclaration {
    /// Property name in generated code
    pub id: String,

    /// Human readable label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Raw parameter type, e.g. `text`, `richText`, `contentReference`
    #[serde(rename = "type")]
    pub kind: String,

    /// Kind-specific settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_config: Option<serde_json::Value>,
}

impl ParameterDeclaration {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            kind: kind.into(),
            type_config: None,
        }
    }

    pub fn with_type_config(mut self, type_config: serde_json::Value) -> Self {
        self.type_config = Some(type_config);
        self
    }

    /// Whether `typeConfig.required` is set to `true`
    pub fn is_required(&self) -> bool {
        self.type_config
            .as_ref()
            .and_then(|config| config.get("required"))
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false)
    }
}

/// A named child region of a component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotDeclaration {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl SlotDeclaration {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }
}

/// A content type a reference parameter may point to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedContentType {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
