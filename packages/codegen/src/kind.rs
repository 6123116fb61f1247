use crate::error::TypeMappingError;
use canvas_typegen_schema::{AllowedContentType, ParameterDeclaration};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Closed set of parameter kinds the generator understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterKind {
    Text,
    Number,
    Boolean,
    /// One of a fixed list of string values
    Select { options: Vec<String> },
    RichText,
    Link,
    /// Free-form nested object
    Object,
    Array(Box<ParameterKind>),
    /// Reference to content of one of the allowed content types
    Reference { allowed: Vec<String> },
}

#[derive(Deserialize)]
struct SelectConfig {
    options: Vec<SelectOption>,
}

#[derive(Deserialize)]
struct SelectOption {
    value: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArrayConfig {
    item_type: String,
    #[serde(default)]
    item_type_config: Option<Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReferenceConfig {
    allowed_content_types: Vec<AllowedContentType>,
}

impl ParameterKind {
    /// Classify a declared parameter by its raw `type` and `typeConfig`
    pub fn resolve(parameter: &ParameterDeclaration) -> Result<Self, TypeMappingError> {
        Self::from_raw(&parameter.id, &parameter.kind, parameter.type_config.as_ref())
    }

    fn from_raw(
        parameter: &str,
        kind: &str,
        config: Option<&Value>,
    ) -> Result<Self, TypeMappingError> {
        let resolved = match kind {
            "text" => Self::Text,
            "number" => Self::Number,
            "checkbox" | "boolean" => Self::Boolean,
            "richText" => Self::RichText,
            "link" => Self::Link,
            "json" => Self::Object,

            "select" => {
                let config: SelectConfig = type_config(parameter, kind, config)?;
                let options = unique(config.options.into_iter().map(|option| option.value));
                if options.is_empty() {
                    return Err(TypeMappingError::malformed(parameter, kind, "no options"));
                }
                Self::Select { options }
            }

            "array" => {
                let config: ArrayConfig = type_config(parameter, kind, config)?;
                let item = Self::from_raw(
                    parameter,
                    &config.item_type,
                    config.item_type_config.as_ref(),
                )?;
                Self::Array(Box::new(item))
            }

            "contentReference" => {
                let config: ReferenceConfig = type_config(parameter, kind, config)?;
                let allowed = unique(config.allowed_content_types.into_iter().map(|ct| ct.id));
                if allowed.is_empty() {
                    return Err(TypeMappingError::malformed(
                        parameter,
                        kind,
                        "no allowed content types",
                    ));
                }
                Self::Reference { allowed }
            }

            other => return Err(TypeMappingError::unrecognized(parameter, other)),
        };

        Ok(resolved)
    }
}

fn type_config<T: DeserializeOwned>(
    parameter: &str,
    kind: &str,
    config: Option<&Value>,
) -> Result<T, TypeMappingError> {
    let config =
        config.ok_or_else(|| TypeMappingError::malformed(parameter, kind, "missing typeConfig"))?;
    T::deserialize(config).map_err(|e| TypeMappingError::malformed(parameter, kind, e.to_string()))
}

/// Keep first occurrences, in order
fn unique(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn param(kind: &str, config: Option<Value>) -> ParameterDeclaration {
        ParameterDeclaration {
            id: "field".to_string(),
            name: None,
            kind: kind.to_string(),
            type_config: config,
        }
    }

    #[test]
    fn test_resolve_scalars() {
        assert_eq!(ParameterKind::resolve(&param("text", None)), Ok(ParameterKind::Text));
        assert_eq!(ParameterKind::resolve(&param("number", None)), Ok(ParameterKind::Number));
        assert_eq!(ParameterKind::resolve(&param("checkbox", None)), Ok(ParameterKind::Boolean));
        assert_eq!(ParameterKind::resolve(&param("boolean", None)), Ok(ParameterKind::Boolean));
    }

    #[test]
    fn test_resolve_reference_dedupes_in_order() {
        let config = json!({
            "allowedContentTypes": [
                { "id": "page", "name": "Page" },
                { "id": "external" },
                { "id": "page" }
            ]
        });

        assert_eq!(
            ParameterKind::resolve(&param("contentReference", Some(config))),
            Ok(ParameterKind::Reference {
                allowed: vec!["page".to_string(), "external".to_string()]
            })
        );
    }

    #[test]
    fn test_resolve_nested_array() {
        let config = json!({ "itemType": "array", "itemTypeConfig": { "itemType": "link" } });

        assert_eq!(
            ParameterKind::resolve(&param("array", Some(config))),
            Ok(ParameterKind::Array(Box::new(ParameterKind::Array(Box::new(
                ParameterKind::Link
            )))))
        );
    }

    #[test]
    fn test_unrecognized_kind() {
        let err = ParameterKind::resolve(&param("colorPicker", None)).unwrap_err();
        assert_eq!(err, TypeMappingError::unrecognized("field", "colorPicker"));
    }

    #[test]
    fn test_unrecognized_array_item_kind() {
        let config = json!({ "itemType": "video" });
        let err = ParameterKind::resolve(&param("array", Some(config))).unwrap_err();
        assert_eq!(err, TypeMappingError::unrecognized("field", "video"));
    }

    #[test]
    fn test_malformed_configs() {
        let missing = ParameterKind::resolve(&param("contentReference", None)).unwrap_err();
        assert!(matches!(missing, TypeMappingError::Malformed { ref reason, .. } if reason == "missing typeConfig"));

        let empty = ParameterKind::resolve(&param(
            "contentReference",
            Some(json!({ "allowedContentTypes": [] })),
        ))
        .unwrap_err();
        assert!(matches!(empty, TypeMappingError::Malformed { .. }));

        let no_options =
            ParameterKind::resolve(&param("select", Some(json!({ "options": [] })))).unwrap_err();
        assert!(matches!(no_options, TypeMappingError::Malformed { .. }));

        let bad_shape =
            ParameterKind::resolve(&param("array", Some(json!({ "itemType": 3 })))).unwrap_err();
        assert_eq!(bad_shape.parameter(), "field");
    }
}
