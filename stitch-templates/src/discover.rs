use std::fs;
use std::path::Path;

use crate::module::TemplateModule;

/// File extension a fragment must carry to enter the catalog.
pub const FRAGMENT_EXTENSION: &str = "prisma";

/// Scan the template root and build the module catalog.
///
/// Every immediate subdirectory is a category; every `.prisma` file inside
/// one becomes a module of that category. Files directly in the root land in
/// the reserved `root` category. A missing root is a valid empty library,
/// not an error; the caller decides whether an empty catalog is fatal.
///
/// The result is sorted by label so composition order is reproducible
/// across runs.
pub fn discover(root: &Path) -> Vec<TemplateModule> {
    let Ok(entries) = fs::read_dir(root) else {
        return Vec::new();
    };

    let mut modules = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            let Some(category) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Ok(files) = fs::read_dir(&path) else {
                continue;
            };
            for file in files.flatten() {
                let file_path = file.path();
                if let Some(id) = fragment_id(&file_path) {
                    modules.push(TemplateModule::in_category(category, id, file_path));
                }
            }
        } else if let Some(id) = fragment_id(&path) {
            modules.push(TemplateModule::top_level(id, path));
        }
    }

    modules.sort_by(|a, b| a.label.cmp(&b.label));
    modules
}

/// Extract the module id from a fragment path, or None for non-fragments.
fn fragment_id(path: &Path) -> Option<String> {
    if !path.is_file() {
        return None;
    }
    let extension = path.extension()?.to_str()?;
    if extension != FRAGMENT_EXTENSION {
        return None;
    }
    Some(path.file_stem()?.to_str()?.to_string())
}
