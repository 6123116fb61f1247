use thiserror::Error;

/// A component id that cannot become a declaration name
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NamingError {
    #[error("component id '{0}' has no characters usable in a type name")]
    Empty(String),

    #[error("component id '{id}' produces '{type_name}', which is not a valid identifier")]
    InvalidIdentifier { id: String, type_name: String },

    #[error("component id '{id}' produces type '{type_name}', already generated for component '{existing_id}'")]
    Duplicate {
        id: String,
        existing_id: String,
        type_name: String,
    },

    #[error("component id '{id}' produces '{type_name}', which is reserved for an imported or built-in type")]
    Reserved { id: String, type_name: String },

    #[error("component '{component_id}' declares field '{key}' more than once")]
    DuplicateField { component_id: String, key: String },
}

/// A parameter whose declared kind cannot be mapped to a type expression
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TypeMappingError {
    #[error("parameter '{parameter}' has unrecognized type '{kind}'")]
    UnrecognizedKind { parameter: String, kind: String },

    #[error("parameter '{parameter}' of type '{kind}' is malformed: {reason}")]
    Malformed {
        parameter: String,
        kind: String,
        reason: String,
    },
}

impl TypeMappingError {
    pub fn unrecognized(parameter: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::UnrecognizedKind {
            parameter: parameter.into(),
            kind: kind.into(),
        }
    }

    pub fn malformed(
        parameter: impl Into<String>,
        kind: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Malformed {
            parameter: parameter.into(),
            kind: kind.into(),
            reason: reason.into(),
        }
    }

    /// Name of the parameter that failed to map
    pub fn parameter(&self) -> &str {
        match self {
            Self::UnrecognizedKind { parameter, .. } | Self::Malformed { parameter, .. } => {
                parameter
            }
        }
    }
}

/// Two catalog entries bind the same local name to different symbols
#[derive(Error, Debug, Clone, PartialEq)]
#[error("type catalog imports '{local_name}' as both {first} and {second}")]
pub struct ImportConflictError {
    pub local_name: String,
    pub first: String,
    pub second: String,
}

/// Errors that abort a generation run
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodegenError {
    #[error(transparent)]
    Naming(#[from] NamingError),

    #[error(transparent)]
    ImportConflict(#[from] ImportConflictError),

    #[error("Failed to generate types for component '{component_id}'")]
    TypeMapping {
        component_id: String,
        #[source]
        source: TypeMappingError,
    },
}

pub type CodegenResult<T> = Result<T, CodegenError>;
