//! Consistency checks for the built-in preset table.
//!
//! Presets are lazy token lists, so nothing validates them at runtime until
//! a user picks one. These tests pin the table down statically: every token
//! is a qualified `category/id` label, and every preset resolves cleanly
//! against a catalog that contains the modules it names.

use std::collections::BTreeSet;

use schemastitch_templates::{PRESETS, TemplateModule, resolve_tokens};

/// Build a catalog containing every module any preset references.
fn full_catalog() -> Vec<TemplateModule> {
    let mut labels: BTreeSet<&str> = BTreeSet::new();
    for preset in PRESETS {
        labels.extend(preset.modules);
    }

    // BTreeSet iteration gives the label-sorted order discover() would.
    labels
        .into_iter()
        .map(|label| {
            let (category, id) = label.split_once('/').expect("qualified label");
            TemplateModule::in_category(category, id, format!("templates/{label}.prisma"))
        })
        .collect()
}

#[test]
fn preset_ids_and_labels_are_unique() {
    let ids: BTreeSet<&str> = PRESETS.iter().map(|p| p.id).collect();
    let labels: BTreeSet<&str> = PRESETS.iter().map(|p| p.label).collect();

    assert_eq!(ids.len(), PRESETS.len());
    assert_eq!(labels.len(), PRESETS.len());
}

#[test]
fn preset_tokens_are_qualified_labels() {
    for preset in PRESETS {
        for token in preset.modules {
            assert!(
                token.split_once('/').is_some(),
                "preset '{}' token '{}' is not category/id",
                preset.id,
                token
            );
        }
    }
}

#[test]
fn preset_tokens_have_no_duplicates() {
    for preset in PRESETS {
        let unique: BTreeSet<&str> = preset.modules.iter().copied().collect();
        assert_eq!(
            unique.len(),
            preset.modules.len(),
            "preset '{}' repeats a token",
            preset.id
        );
    }
}

#[test]
fn every_preset_resolves_against_the_full_catalog() {
    let catalog = full_catalog();

    for preset in PRESETS {
        let tokens: Vec<String> = preset.modules.iter().map(|t| t.to_string()).collect();
        let resolved = resolve_tokens(&tokens, &catalog)
            .unwrap_or_else(|e| panic!("preset '{}' failed to resolve: {}", preset.id, e));

        // Qualified tokens hit the exact tier one-to-one, in token order.
        let resolved_labels: Vec<&str> = resolved.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(resolved_labels, preset.modules.to_vec(), "preset '{}'", preset.id);
    }
}
