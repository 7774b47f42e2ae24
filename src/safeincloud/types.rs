//! SafeInCloud data types — entity model for one export file, plus the
//! import options and run summary.

use serde::{Deserialize, Serialize};

// ─── Entities ───────────────────────────────────────────────────────

/// One named value inside a card (username, password, URL, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    /// Type tag from the export ("text", "password", "website", ...).
    pub kind: String,
    /// Text content of the `<field>` element; None for empty elements.
    pub value: Option<String>,
}

impl Field {
    pub fn is_password(&self) -> bool {
        self.kind == "password"
    }
}

/// One store-worthy record from the export. Built once by the loader and
/// never mutated afterwards; field order is document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub symbol: Option<String>,
    pub template: bool,
    pub deleted: bool,
    /// Weak reference to a Label, resolved by id lookup at path time.
    pub label_id: Option<String>,
    pub notes: Option<String>,
    pub fields: Vec<Field>,
}

impl Card {
    pub fn is_template(&self) -> bool {
        self.template
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// SafeInCloud ships demo cards with "(Sample)" in the title; no schema
    /// attribute marks them, so this is a title heuristic.
    pub fn is_sample(&self) -> bool {
        self.title.contains("(Sample)")
    }

    /// First password-kind field in document order.
    pub fn primary_password(&self) -> Option<&Field> {
        self.fields.iter().find(|f| f.is_password())
    }
}

/// A named group; cards reference it by id to build store paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: String,
    pub name: String,
}

/// Everything loaded from one export file. Cards and labels are independent
/// collections; the card → label link stays a string lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Database {
    pub cards: Vec<Card>,
    pub labels: Vec<Label>,
}

// ─── Import configuration & results ─────────────────────────────────

/// Filter and execution switches for one import run.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ImportOptions {
    /// Import cards whose title marks them as vendor samples.
    pub include_samples: bool,
    /// Import template cards.
    pub include_templates: bool,
    /// Import cards flagged deleted in the export.
    pub include_deleted: bool,
    /// Resolve and report every card but never invoke pass.
    pub dry_run: bool,
}

/// Why a card was excluded from the import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkipReason {
    Sample,
    Template,
    Deleted,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sample => "sample",
            Self::Template => "template",
            Self::Deleted => "deleted",
        }
    }
}

/// Outcome counts for one import run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub total: usize,
    pub imported: usize,
    /// Cards a dry run would have imported; real runs leave this 0.
    pub planned: usize,
    pub skipped: usize,
    pub failed: usize,
    /// One "path: message" entry per failed hand-off.
    pub errors: Vec<String>,
}
