//! Context-aware error suggestions.
//!
//! Complements the static suggestions in the `codes` module with hints built
//! from the error's context (available categories, similar skill names).

use serde_json::Value;

use super::codes::ErrorCode;

/// Generate a context-aware suggestion for an error.
pub fn suggest_for_error(code: ErrorCode, context: Option<&Value>) -> String {
    match code {
        ErrorCode::SkillNotFound => suggest_skill_not_found(context),
        ErrorCode::CategoryNotFound => suggest_category_not_found(context),
        ErrorCode::DuplicateSkill => suggest_duplicate_skill(context),
        ErrorCode::StoreReadError => suggest_store_read(context),
        _ => code.suggestion().to_string(),
    }
}

fn suggest_skill_not_found(context: Option<&Value>) -> String {
    let similar: Vec<&str> = context
        .and_then(|c| c.get("similar"))
        .and_then(Value::as_array)
        .map(|values| values.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    if similar.is_empty() {
        return ErrorCode::SkillNotFound.suggestion().to_string();
    }

    format!("Did you mean: {}?", similar.join(", "))
}

fn suggest_category_not_found(context: Option<&Value>) -> String {
    let available: Vec<&str> = context
        .and_then(|c| c.get("available"))
        .and_then(Value::as_array)
        .map(|values| values.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    if available.is_empty() {
        return ErrorCode::CategoryNotFound.suggestion().to_string();
    }

    format!("Available categories: {}", available.join(", "))
}

fn suggest_duplicate_skill(context: Option<&Value>) -> String {
    match context.and_then(|c| c.get("skill")).and_then(Value::as_str) {
        Some(name) => format!("Use `skillbook update \"{name}\" <level> [description]` to change it"),
        None => ErrorCode::DuplicateSkill.suggestion().to_string(),
    }
}

fn suggest_store_read(context: Option<&Value>) -> String {
    match context.and_then(|c| c.get("path")).and_then(Value::as_str) {
        Some(path) => format!(
            "Check that {path} exists and is valid JSON, or point --store / SKILLBOOK_STORE at the right file"
        ),
        None => ErrorCode::StoreReadError.suggestion().to_string(),
    }
}

/// Suggest names similar to `query` from the available list.
pub fn suggest_similar_skills(query: &str, available: &[&str], max_suggestions: usize) -> Vec<String> {
    let query_lower = query.to_lowercase();
    let mut scored: Vec<_> = available
        .iter()
        .map(|s| (s, similarity_score(&query_lower, &s.to_lowercase())))
        .filter(|(_, score)| *score > 0.3)
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored
        .into_iter()
        .take(max_suggestions)
        .map(|(s, _)| (*s).to_string())
        .collect()
}

/// Jaccard similarity on character trigrams, with a prefix/substring fallback
/// for names too short to have trigrams.
fn similarity_score(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a_trigrams: std::collections::HashSet<_> = trigrams(a).collect();
    let b_trigrams: std::collections::HashSet<_> = trigrams(b).collect();

    if a_trigrams.is_empty() || b_trigrams.is_empty() {
        if a.starts_with(b) || b.starts_with(a) {
            return 0.8;
        }
        if a.contains(b) || b.contains(a) {
            return 0.5;
        }
        return 0.0;
    }

    let intersection = a_trigrams.intersection(&b_trigrams).count();
    let union = a_trigrams.union(&b_trigrams).count();

    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

fn trigrams(s: &str) -> impl Iterator<Item = &str> {
    (0..s.len().saturating_sub(2)).filter_map(move |i| s.get(i..i + 3))
}
