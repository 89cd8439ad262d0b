use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::module::TemplateModule;
use crate::provider::Provider;

/// Compose the final schema text from a provider and an ordered module list.
///
/// The output is the generator block, the datasource block, then each
/// fragment body under a header comment naming its label, all separated by
/// blank lines and terminated by a newline. Fragment content is trimmed but
/// otherwise copied verbatim; nothing here parses it. An empty module list
/// is an error, never a generator-and-datasource-only schema.
pub fn compose(provider: Provider, modules: &[TemplateModule]) -> Result<String> {
    if modules.is_empty() {
        return Err(Box::new(Error::EmptySelection));
    }

    let generator = "generator client {\n  provider = \"prisma-client-js\"\n}".to_string();
    let datasource = format!(
        "datasource db {{\n  provider = \"{provider}\"\n  url      = env(\"DATABASE_URL\")\n}}"
    );

    let mut sections = vec![generator, datasource];
    for module in modules {
        let raw = fs::read_to_string(&module.file_path)
            .map_err(|e| Error::io(&module.file_path, e))?;
        sections.push(format!("// ==== {} ====\n{}", module.label, raw.trim()));
    }

    Ok(sections.join("\n\n") + "\n")
}

/// Compose and write the schema, creating parent directories as needed.
///
/// A relative output path is resolved against the current directory.
/// Returns the path actually written so the caller can report it.
pub fn write_schema(
    provider: Provider,
    modules: &[TemplateModule],
    output: &Path,
) -> Result<PathBuf> {
    let content = compose(provider, modules)?;

    let path = if output.is_absolute() {
        output.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|e| Error::io(output, e))?
            .join(output)
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(&path, content).map_err(|e| Error::io(&path, e))?;

    Ok(path)
}
