use crate::component::ComponentRecord;
use crate::error::{SchemaError, SchemaResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Read every component file under `root`.
///
/// Files are visited depth-first in file name order, so the returned
/// records are in the same order on every run.
pub fn read_components_from_dir(root: &Path) -> SchemaResult<Vec<ComponentRecord>> {
    if !root.is_dir() {
        return Err(SchemaError::MissingRoot(root.to_path_buf()));
    }

    let mut components = Vec::new();
    for path in find_component_files(root)? {
        let contents = fs::read_to_string(&path).map_err(|e| SchemaError::io(&path, e))?;
        let component = parse_component(&path, &contents)?;
        debug!("Read component '{}' from {}", component.id, path.display());
        components.push(component);
    }

    Ok(components)
}

/// Parse one component file, picking the format from its extension
pub fn parse_component(path: &Path, contents: &str) -> SchemaResult<ComponentRecord> {
    match Format::from_path(path) {
        Some(Format::Json) => {
            serde_json::from_str(contents).map_err(|e| SchemaError::parse(path, e.to_string()))
        }
        Some(Format::Yaml) => {
            serde_yaml::from_str(contents).map_err(|e| SchemaError::parse(path, e.to_string()))
        }
        None => Err(SchemaError::parse(path, "unsupported file extension")),
    }
}

fn find_component_files(root: &Path) -> SchemaResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            SchemaError::io(path, e.into())
        })?;

        let path = entry.path();
        if entry.file_type().is_file() && Format::from_path(path).is_some() {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

impl Format {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => Some(Format::Json),
            Some("yaml") | Some("yml") => Some(Format::Yaml),
            _ => None,
        }
    }
}
