//! Interactive provider and module selection.
//!
//! Control flow: an unknown `--db` value warns and falls through to the
//! provider prompt; module selection offers the preset catalog first and
//! falls back to the category browser, which is also where a preset that
//! fails to resolve lands instead of aborting the session.

use std::collections::{BTreeSet, HashSet};

use console::style;
use eyre::Result;
use schemastitch_templates::{Preset, Provider, TemplateModule, resolve_tokens};

use crate::prompt::Prompt;

/// Settle the target provider, prompting when the flag is absent or unknown.
pub fn choose_provider(prompt: &mut dyn Prompt, provided: Option<&str>) -> Result<Provider> {
    if let Some(value) = provided {
        match value.parse::<Provider>() {
            Ok(provider) => return Ok(provider),
            Err(message) => println!("{}", style(message).yellow()),
        }
    }

    let items: Vec<String> = Provider::ALL.iter().map(Provider::to_string).collect();
    let default = Provider::ALL
        .iter()
        .position(|p| *p == Provider::default())
        .unwrap_or(0);
    let choice = prompt.select("Select the target database", &items, default)?;
    Ok(Provider::ALL[choice])
}

/// Pick modules interactively, via a preset or the category browser.
pub fn choose_modules(
    prompt: &mut dyn Prompt,
    catalog: &[TemplateModule],
    presets: &[Preset],
) -> Result<Vec<TemplateModule>> {
    if presets.is_empty() {
        return browse_modules(prompt, catalog, &[]);
    }

    let items = vec![
        "Preset (curated module bundles)".to_string(),
        "Custom (pick modules by category)".to_string(),
    ];
    let mode = prompt.select("How do you want to build your schema?", &items, 0)?;

    if mode == 0 {
        choose_preset(prompt, catalog, presets)
    } else {
        browse_modules(prompt, catalog, &[])
    }
}

/// Pick a preset and resolve it, falling back to manual browsing on failure.
fn choose_preset(
    prompt: &mut dyn Prompt,
    catalog: &[TemplateModule],
    presets: &[Preset],
) -> Result<Vec<TemplateModule>> {
    let items: Vec<String> = presets
        .iter()
        .map(|p| format!("{}: {}", p.label, p.summary))
        .collect();
    let choice = prompt.select("Select a preset", &items, 0)?;
    let preset = &presets[choice];

    let tokens: Vec<String> = preset.modules.iter().map(|t| t.to_string()).collect();
    let resolved = match resolve_tokens(&tokens, catalog) {
        Ok(resolved) => resolved,
        Err(e) => {
            // A preset naming a module this library does not ship is not
            // fatal inside an interactive session.
            println!("{}", style(e.to_string()).red());
            return browse_modules(prompt, catalog, &[]);
        }
    };

    println!();
    println!("{}", style(format!("Preset \"{}\" includes:", preset.label)).cyan());
    for module in &resolved {
        println!("  - {}", module.label);
    }

    if prompt.confirm("Add or remove modules?", false)? {
        return browse_modules(prompt, catalog, &resolved);
    }

    Ok(resolved)
}

/// Two-level category browser.
///
/// Outer loop picks a category (or finishes); inner checklist is scoped to
/// that category and pre-checked from the current selection. On confirm the
/// checklist is authoritative for its category: everything in the category
/// is cleared first, then the checked labels are re-added, so unchecking
/// works on every revisit. Finishing requires a non-empty selection. The
/// result is in catalog order, not selection order.
pub fn browse_modules(
    prompt: &mut dyn Prompt,
    catalog: &[TemplateModule],
    seed: &[TemplateModule],
) -> Result<Vec<TemplateModule>> {
    let categories: Vec<String> = catalog
        .iter()
        .map(|m| m.category.clone())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect();
    let mut selection: HashSet<String> = seed.iter().map(|m| m.label.clone()).collect();

    loop {
        let mut items: Vec<String> = categories
            .iter()
            .map(|category| {
                let count = catalog
                    .iter()
                    .filter(|m| &m.category == category && selection.contains(&m.label))
                    .count();
                if count > 0 {
                    format!("{category} ({count})")
                } else {
                    category.clone()
                }
            })
            .collect();
        items.push(if selection.is_empty() {
            "Finish selection".to_string()
        } else {
            format!("Finish selection ({} modules)", selection.len())
        });

        let choice = prompt.select("Browse categories and pick modules", &items, 0)?;

        if choice == categories.len() {
            if selection.is_empty() {
                println!(
                    "{}",
                    style("Select at least one module before finishing.").yellow()
                );
                continue;
            }
            break;
        }

        let category = &categories[choice];
        let in_category: Vec<&TemplateModule> =
            catalog.iter().filter(|m| &m.category == category).collect();
        if in_category.is_empty() {
            println!("{}", style("This category has no modules.").yellow());
            continue;
        }

        let labels: Vec<String> = in_category.iter().map(|m| m.label.clone()).collect();
        let checked: Vec<bool> = in_category
            .iter()
            .map(|m| selection.contains(&m.label))
            .collect();
        let picked = prompt.multi_select(
            &format!("Pick modules from {category}"),
            &labels,
            &checked,
        )?;

        for module in &in_category {
            selection.remove(&module.label);
        }
        for index in picked {
            selection.insert(labels[index].clone());
        }
    }

    Ok(catalog
        .iter()
        .filter(|m| selection.contains(&m.label))
        .cloned()
        .collect())
}
