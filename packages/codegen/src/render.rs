use crate::writer::{ImportRequirement, ImportedName, Writer};

/// One `import type` statement per module source, sources and names sorted
pub fn render_imports(writer: &Writer) -> String {
    writer
        .imports()
        .iter()
        .filter(|requirement| !requirement.is_empty())
        .map(render_import)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_import(requirement: &ImportRequirement) -> String {
    let names: Vec<String> = requirement.names().map(render_name).collect();
    format!(
        "import type {{ {} }} from \"{}\";",
        names.join(", "),
        requirement.module_source
    )
}

fn render_name(name: &ImportedName) -> String {
    match &name.alias {
        Some(alias) if alias != &name.name => format!("{} as {}", name.name, alias),
        _ => name.name.clone(),
    }
}

/// Declaration fragments in stored order, separated by a blank line
pub fn render_body(writer: &Writer) -> String {
    writer.body().join("\n\n")
}

/// The complete generated file
pub fn render_document(source_label: &str, writer: &Writer) -> String {
    format!(
        "/* AUTOGENERATED FROM: {} */\n{}\n\n{}\n",
        source_label,
        render_imports(writer),
        render_body(writer)
    )
}
