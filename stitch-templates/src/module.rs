use std::path::PathBuf;

/// Category assigned to fragment files sitting directly in the template root.
pub const ROOT_CATEGORY: &str = "root";

/// A single schema fragment discovered in the template library.
///
/// The `label` is the globally unique user-facing key (`category/id`, or the
/// bare `id` for root-level fragments). `aliases` holds every lowercase
/// spelling that selects this module exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateModule {
    pub id: String,
    pub category: String,
    pub label: String,
    pub file_path: PathBuf,
    pub aliases: Vec<String>,
}

impl TemplateModule {
    /// Create a module that lives inside a category subdirectory.
    pub fn in_category(
        category: impl Into<String>,
        id: impl Into<String>,
        file_path: impl Into<PathBuf>,
    ) -> Self {
        let category = category.into();
        let id = id.into();
        let label = format!("{category}/{id}");
        let aliases = vec![
            id.to_lowercase(),
            label.to_lowercase(),
            format!("{category}:{id}").to_lowercase(),
        ];
        Self {
            id,
            category,
            label,
            file_path: file_path.into(),
            aliases,
        }
    }

    /// Create a module for a fragment file directly in the template root.
    pub fn top_level(id: impl Into<String>, file_path: impl Into<PathBuf>) -> Self {
        let id = id.into();
        Self {
            category: ROOT_CATEGORY.to_string(),
            label: id.clone(),
            aliases: vec![id.to_lowercase()],
            id,
            file_path: file_path.into(),
        }
    }
}
