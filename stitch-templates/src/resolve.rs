use crate::error::{Error, Result};
use crate::module::TemplateModule;

/// Resolve user-supplied tokens against the catalog.
///
/// Tokens are matched in strict tier order (exact alias, then category, then
/// id prefix); the first tier that yields anything wins. Results keep
/// first-seen order across tokens and never repeat a label. Resolution is
/// all-or-nothing: the first token no tier matches aborts the whole batch.
pub fn resolve_tokens(tokens: &[String], catalog: &[TemplateModule]) -> Result<Vec<TemplateModule>> {
    let mut resolved: Vec<TemplateModule> = Vec::new();

    for token in tokens {
        let matches = match_token(token, catalog);
        if matches.is_empty() {
            return Err(Error::unknown_token(token));
        }
        for module in matches {
            if !resolved.iter().any(|m| m.label == module.label) {
                resolved.push(module.clone());
            }
        }
    }

    Ok(resolved)
}

/// Match one token, returning the catalog modules it selects.
///
/// A bare id that exists in two categories hits the exact tier for both; the
/// first match in catalog order wins. The catalog is label-sorted, so the
/// winner is the alphabetically first category. The `category/id` and
/// `category:id` aliases disambiguate.
fn match_token<'a>(token: &str, catalog: &'a [TemplateModule]) -> Vec<&'a TemplateModule> {
    let normalized = token.to_lowercase();

    if let Some(exact) = catalog
        .iter()
        .find(|m| m.aliases.iter().any(|alias| alias == &normalized))
    {
        return vec![exact];
    }

    let by_category: Vec<&TemplateModule> = catalog
        .iter()
        .filter(|m| m.category.to_lowercase() == normalized)
        .collect();
    if !by_category.is_empty() {
        return by_category;
    }

    catalog
        .iter()
        .filter(|m| m.id.to_lowercase().starts_with(&normalized))
        .collect()
}
