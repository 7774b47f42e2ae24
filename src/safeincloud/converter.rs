//! Card → pass mapping: store path resolution and multiline entry
//! formatting.
//!
//! Both functions are pure; for a fixed card and label set they always
//! produce the same output.

use super::types::{Card, Label};

/// Make a card or label name safe for use as a store path component:
/// `/` becomes `-`, space becomes `_`. POSIX separators only.
pub fn sanitize(value: &str) -> String {
    value.replace('/', "-").replace(' ', "_")
}

/// Resolve the destination store path for a card. A resolvable `label_id`
/// prepends the label name as a group; an unresolved or absent one falls
/// back to the ungrouped title. Duplicate label ids resolve to the first
/// match in load order.
pub fn resolve_path(card: &Card, labels: &[Label]) -> String {
    let title = sanitize(&card.title);
    let label = card
        .label_id
        .as_deref()
        .and_then(|id| labels.iter().find(|l| l.id == id));

    match label {
        Some(label) => format!("{}/{}", sanitize(&label.name), title),
        None => title,
    }
}

/// Serialize a card into the text block `pass insert --multiline` expects:
/// the first password-kind field as a bare first line, then every other
/// field in document order as `name: value`. Any further password field
/// carrying the same value as the primary is dropped (value equality, not
/// instance identity), so re-exported duplicates do not repeat the secret.
pub fn format_entry(card: &Card) -> String {
    let primary = card.primary_password();

    let mut entry = String::new();
    if let Some(primary) = primary {
        entry.push_str(primary.value.as_deref().unwrap_or(""));
        entry.push('\n');
    }

    for field in &card.fields {
        if let Some(primary) = primary {
            if field.is_password() && field.value == primary.value {
                continue;
            }
        }
        entry.push_str(&field.name);
        entry.push_str(": ");
        entry.push_str(field.value.as_deref().unwrap_or(""));
        entry.push('\n');
    }

    entry
}
