//! Combo normalization and grouping for the kitchen copy
//!
//! Older order payloads carry combo membership as a `[Combo: name]` tag
//! inside the item notes. Items are normalized once at the engine boundary
//! so the renderer only ever sees a structured `combo_name`.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::types::TicketItem;

static COMBO_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[\s*combo\s*:\s*([^\]\[]*?)\s*\]").expect("valid combo tag pattern")
});

/// Items sharing one combo, in first-seen order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboGroup {
    pub name: String,
    pub items: Vec<TicketItem>,
}

/// Pull an embedded combo tag out of a notes string
///
/// Returns the combo name (if a well-formed tag was found) and the notes
/// with the tag removed (`None` when nothing else is left). A malformed or
/// empty tag is treated as "no combo" and the notes are left untouched.
pub fn extract_combo_tag(notes: &str) -> (Option<String>, Option<String>) {
    let Some(caps) = COMBO_TAG.captures(notes) else {
        return (None, non_empty(notes));
    };
    let name = caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
    if name.is_empty() {
        return (None, non_empty(notes));
    }

    let whole = caps.get(0).map(|m| m.range()).unwrap_or(0..0);
    let mut rest = String::with_capacity(notes.len());
    rest.push_str(&notes[..whole.start]);
    rest.push(' ');
    rest.push_str(&notes[whole.end..]);
    let rest = rest.split_whitespace().collect::<Vec<_>>().join(" ");

    (Some(name.to_string()), non_empty(&rest))
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Normalize one item: strip the combo tag, fill `combo_name` if missing
pub fn normalize_item(item: &TicketItem) -> TicketItem {
    let mut item = item.clone();
    if let Some(notes) = item.notes.take() {
        let (tag, visible) = extract_combo_tag(&notes);
        item.notes = visible;
        if item.combo_name.as_deref().is_none_or(|n| n.trim().is_empty()) {
            item.combo_name = tag;
        }
    }
    item
}

/// Normalize every item of a ticket
pub fn normalize_items(items: &[TicketItem]) -> Vec<TicketItem> {
    items.iter().map(normalize_item).collect()
}

/// Split normalized items into standalone items and combo groups
///
/// Both partitions keep input order; groups are ordered by the first
/// appearance of their combo name.
pub fn partition_items(items: Vec<TicketItem>) -> (Vec<TicketItem>, Vec<ComboGroup>) {
    let mut standalone = Vec::new();
    let mut groups: Vec<ComboGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in items {
        let Some(name) = item.combo_name.clone().filter(|n| !n.trim().is_empty()) else {
            standalone.push(item);
            continue;
        };
        match index.get(&name) {
            Some(&i) => groups[i].items.push(item),
            None => {
                index.insert(name.clone(), groups.len());
                groups.push(ComboGroup {
                    name,
                    items: vec![item],
                });
            }
        }
    }

    debug!(
        standalone = standalone.len(),
        combos = groups.len(),
        "kitchen items grouped"
    );
    (standalone, groups)
}
