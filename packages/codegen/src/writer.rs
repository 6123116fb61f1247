use crate::catalog::NamedType;
use std::collections::btree_map::{self, BTreeMap};
use tracing::debug;

/// A symbol imported from a module, optionally under a local alias
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedName {
    pub name: String,
    pub alias: Option<String>,
}

impl ImportedName {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    pub fn local_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

impl From<&NamedType> for ImportedName {
    fn from(named: &NamedType) -> Self {
        Self {
            name: named.name.clone(),
            alias: named.alias.clone(),
        }
    }
}

/// All names required from a single module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRequirement {
    pub module_source: String,
    names: BTreeMap<String, ImportedName>,
}

impl ImportRequirement {
    pub fn new(module_source: impl Into<String>) -> Self {
        Self {
            module_source: module_source.into(),
            names: BTreeMap::new(),
        }
    }

    pub fn with_name(mut self, name: ImportedName) -> Self {
        self.insert(name);
        self
    }

    /// Add a name, keyed by the local name the body refers to.
    ///
    /// A second symbol bound to an existing local name is dropped;
    /// `TypeCatalog::validate` rules this out for generated imports.
    pub fn insert(&mut self, name: ImportedName) {
        match self.names.entry(name.local_name().to_string()) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(name);
            }
            btree_map::Entry::Occupied(entry) => {
                if entry.get() != &name {
                    debug!(
                        "Import of {:?} from \"{}\" conflicts with earlier {:?}, keeping the earlier one",
                        name,
                        self.module_source,
                        entry.get()
                    );
                }
            }
        }
    }

    /// Union another requirement for the same module into this one
    pub fn union(&mut self, other: ImportRequirement) {
        for (_, name) in other.names {
            self.insert(name);
        }
    }

    /// Imported names ordered by local name
    pub fn names(&self) -> impl Iterator<Item = &ImportedName> {
        self.names.values()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Import requirements keyed by module source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    requirements: BTreeMap<String, ImportRequirement>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set holding a single import of `named`
    pub fn of(named: &NamedType) -> Self {
        let mut set = Self::new();
        set.insert(ImportRequirement::new(&named.module).with_name(named.into()));
        set
    }

    pub fn insert(&mut self, requirement: ImportRequirement) {
        match self.requirements.entry(requirement.module_source.clone()) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(requirement);
            }
            btree_map::Entry::Occupied(mut entry) => entry.get_mut().union(requirement),
        }
    }

    pub fn extend(&mut self, other: ImportSet) {
        for (_, requirement) in other.requirements {
            self.insert(requirement);
        }
    }

    pub fn get(&self, module_source: &str) -> Option<&ImportRequirement> {
        self.requirements.get(module_source)
    }

    /// Requirements ordered by module source
    pub fn iter(&self) -> impl Iterator<Item = &ImportRequirement> {
        self.requirements.values()
    }

    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}

/// Accumulated code generation output: imports plus declaration fragments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Writer {
    imports: ImportSet,
    body: Vec<String>,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_imports(&mut self, imports: ImportSet) {
        self.imports.extend(imports);
    }

    pub fn push_body(&mut self, fragment: impl Into<String>) {
        self.body.push(fragment.into());
    }

    /// Combine two writers. Imports are unioned, `other`'s body follows ours.
    pub fn merge(mut self, other: Writer) -> Writer {
        self.imports.extend(other.imports);
        self.body.extend(other.body);
        self
    }

    pub fn imports(&self) -> &ImportSet {
        &self.imports
    }

    pub fn body(&self) -> &[String] {
        &self.body
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.body.is_empty()
    }
}

/// Fold writers in sequence order into one
pub fn merge_writers(writers: impl IntoIterator<Item = Writer>) -> Writer {
    writers.into_iter().fold(Writer::new(), Writer::merge)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer(module: &str, names: &[&str], body: &str) -> Writer {
        let mut requirement = ImportRequirement::new(module);
        for name in names {
            requirement.insert(ImportedName::new(*name));
        }
        let mut imports = ImportSet::new();
        imports.insert(requirement);

        let mut writer = Writer::new();
        writer.add_imports(imports);
        writer.push_body(body);
        writer
    }

    fn names(writer: &Writer, module: &str) -> Vec<String> {
        writer
            .imports()
            .get(module)
            .unwrap()
            .names()
            .map(|n| n.local_name().to_string())
            .collect()
    }

    #[test]
    fn test_merge_empty_sequence() {
        let merged = merge_writers(Vec::new());
        assert!(merged.is_empty());
        assert_eq!(merged, Writer::new());
    }

    #[test]
    fn test_merge_unions_names_for_same_module() {
        // Regression: a later writer must not replace names from an earlier one
        let merged = merge_writers(vec![
            writer("@uniformdev/canvas", &["LinkParamValue"], "a"),
            writer("@uniformdev/canvas", &["ComponentInstance"], "b"),
            writer("@uniformdev/canvas", &["LinkParamValue"], "c"),
        ]);

        assert_eq!(merged.imports().len(), 1);
        assert_eq!(
            names(&merged, "@uniformdev/canvas"),
            vec!["ComponentInstance", "LinkParamValue"]
        );
        assert_eq!(merged.body(), &["a", "b", "c"]);
    }

    #[test]
    fn test_merge_orders_modules_by_source() {
        let merged = merge_writers(vec![
            writer("zeta", &["Z"], "first"),
            writer("alpha", &["A"], "second"),
        ]);

        let sources: Vec<&str> = merged.imports().iter().map(|r| r.module_source.as_str()).collect();
        assert_eq!(sources, vec!["alpha", "zeta"]);
        assert_eq!(merged.body(), &["first", "second"]);
    }

    #[test]
    fn test_names_differing_in_case_are_distinct() {
        let merged = merge_writers(vec![
            writer("mod", &["RichText"], "a"),
            writer("mod", &["Richtext"], "b"),
        ]);
        assert_eq!(names(&merged, "mod"), vec!["RichText", "Richtext"]);
    }

    #[test]
    fn test_same_symbol_under_two_aliases_keeps_both() {
        let mut first = ImportSet::new();
        first.insert(ImportRequirement::new("mod").with_name(ImportedName {
            name: "Link".to_string(),
            alias: Some("CanvasLink".to_string()),
        }));
        let mut second = ImportSet::new();
        second.insert(ImportRequirement::new("mod").with_name(ImportedName::new("Link")));

        first.extend(second);
        let locals: Vec<&str> = first.get("mod").unwrap().names().map(|n| n.local_name()).collect();
        assert_eq!(locals, vec!["CanvasLink", "Link"]);
    }

    #[test]
    fn test_first_symbol_for_local_name_wins() {
        let mut requirement = ImportRequirement::new("mod").with_name(ImportedName::new("Link"));
        requirement.insert(ImportedName {
            name: "Href".to_string(),
            alias: Some("Link".to_string()),
        });

        assert_eq!(requirement.len(), 1);
        assert_eq!(requirement.names().next().unwrap(), &ImportedName::new("Link"));
    }

    #[test]
    fn test_import_set_of_named_type() {
        let named = NamedType::new("@uniformdev/canvas", "ComponentInstance").with_alias("Child");
        let set = ImportSet::of(&named);

        let requirement = set.get("@uniformdev/canvas").unwrap();
        assert_eq!(requirement.len(), 1);
        assert_eq!(requirement.names().next().unwrap().local_name(), "Child");
    }
}
