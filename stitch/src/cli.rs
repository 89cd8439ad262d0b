use std::path::{Path, PathBuf};

use clap::Parser;
use console::style;
use eyre::Result;
use schemastitch_templates::{FRAGMENT_EXTENSION, PRESETS, discover, resolve_tokens, write_schema};

use crate::interactive::{choose_modules, choose_provider};
use crate::prompt::DialoguerPrompt;

/// Extension trait for exiting on template errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for schemastitch_templates::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "stitch")]
#[command(version)]
#[command(about = "Assemble a schema.prisma from a library of reusable template modules")]
pub(crate) struct Cli {
    /// Database provider (postgresql, mysql, sqlserver, sqlite, mongodb, cockroachdb)
    #[arg(short = 'd', long = "db", value_name = "PROVIDER")]
    pub db: Option<String>,

    /// Modules to include: module names, categories, or name prefixes (comma separable)
    #[arg(short = 'a', long = "add", value_name = "TOKEN", num_args = 1..)]
    pub add: Option<Vec<String>>,

    /// Where to write the composed schema
    #[arg(short, long, default_value = "schema.prisma")]
    pub output: PathBuf,

    /// Directory holding the template library
    #[arg(short, long, default_value = "templates")]
    pub templates: PathBuf,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let catalog = discover(&self.templates);
        if catalog.is_empty() {
            eprintln!("{}", style(empty_library_message(&self.templates)).red());
            std::process::exit(1);
        }

        let mut prompt = DialoguerPrompt::default();
        let provider = choose_provider(&mut prompt, self.db.as_deref())?;

        let modules = match normalize_tokens(self.add.as_deref()) {
            // Flag-driven resolution is all-or-nothing and fatal on failure.
            Some(tokens) => resolve_tokens(&tokens, &catalog).unwrap_or_exit(),
            None => choose_modules(&mut prompt, &catalog, PRESETS)?,
        };

        let path = write_schema(provider, &modules, &self.output).unwrap_or_exit();

        let summary: Vec<&str> = modules.iter().map(|m| m.label.as_str()).collect();
        println!();
        println!(
            "{}",
            style(format!(
                "Prisma schema ({provider}) generated with: {}",
                summary.join(", ")
            ))
            .green()
        );
        println!("{}", style(format!("Saved to {}", path.display())).green());

        Ok(())
    }
}

fn empty_library_message(templates: &Path) -> String {
    format!(
        "No template modules found under '{}' (expected .{FRAGMENT_EXTENSION} fragments).",
        templates.display()
    )
}

/// Flatten comma-separated token values, trim them, and drop empties.
///
/// `--add auth,billing --add infra/webhooks` and `--add auth billing` both
/// yield flat token lists. An input that trims away to nothing counts as no
/// tokens at all, which routes to interactive selection.
fn normalize_tokens(input: Option<&[String]>) -> Option<Vec<String>> {
    let values: Vec<String> = input?
        .iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect();

    if values.is_empty() { None } else { Some(values) }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use schemastitch_templates::Provider;
    use tempfile::TempDir;

    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_flag_path_discovers_resolves_and_writes() {
        let temp = TempDir::new().unwrap();
        let templates = temp.path().join("templates");
        fs::create_dir_all(templates.join("core")).unwrap();
        fs::write(
            templates.join("core").join("auth.prisma"),
            "model User {\n  id Int @id\n}\n",
        )
        .unwrap();

        let catalog = discover(&templates);
        let tokens = normalize_tokens(Some(&args(&["core"]))).unwrap();
        let modules = resolve_tokens(&tokens, &catalog).unwrap();
        let output = temp.path().join("out").join("schema.prisma");
        let written = write_schema(Provider::PostgreSql, &modules, &output).unwrap();

        let schema = fs::read_to_string(written).unwrap();
        assert!(schema.contains("provider = \"postgresql\""));
        assert!(schema.contains("// ==== core/auth ===="));
        assert!(schema.contains("model User"));
    }

    #[test]
    fn test_empty_library_message_names_the_extension() {
        let message = empty_library_message(Path::new("missing/templates"));

        assert!(message.contains("missing/templates"));
        assert!(message.contains(".prisma"));
    }

    #[test]
    fn test_normalize_flattens_commas_and_trims() {
        let tokens = normalize_tokens(Some(&args(&["auth, billing", "infra/webhooks"]))).unwrap();

        assert_eq!(tokens, vec!["auth", "billing", "infra/webhooks"]);
    }

    #[test]
    fn test_normalize_drops_empty_fragments() {
        let tokens = normalize_tokens(Some(&args(&["auth,,", " , billing"]))).unwrap();

        assert_eq!(tokens, vec!["auth", "billing"]);
    }

    #[test]
    fn test_normalize_empty_input_is_none() {
        assert!(normalize_tokens(None).is_none());
        assert!(normalize_tokens(Some(&args(&[]))).is_none());
        assert!(normalize_tokens(Some(&args(&[" ", ","]))).is_none());
    }
}
