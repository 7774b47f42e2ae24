//! High-level import orchestrator.
//!
//! Drives one run over a loaded database: filter each card, resolve its
//! store path, format its entry and hand it off to the secret store, one
//! card at a time in document order.

use log::{debug, warn};

use super::converter;
use super::pass::SecretStore;
use super::types::{Card, Database, ImportOptions, ImportSummary, SkipReason};

/// Service that turns a loaded `Database` into store entries.
pub struct ImportService<S: SecretStore> {
    store: S,
    options: ImportOptions,
}

impl<S: SecretStore> ImportService<S> {
    pub fn new(store: S, options: ImportOptions) -> Self {
        Self { store, options }
    }

    /// Decide whether the active filters exclude a card. Checks run in a
    /// fixed order (sample, template, deleted); the first match wins. Pure:
    /// re-running it over the same cards yields the same decisions.
    pub fn skip_reason(&self, card: &Card) -> Option<SkipReason> {
        if !self.options.include_samples && card.is_sample() {
            return Some(SkipReason::Sample);
        }
        if !self.options.include_templates && card.is_template() {
            return Some(SkipReason::Template);
        }
        if !self.options.include_deleted && card.is_deleted() {
            return Some(SkipReason::Deleted);
        }
        None
    }

    /// Run the import. Each card reaches a terminal outcome (skip, import,
    /// fail) independently of the others; a failed hand-off is recorded in
    /// the summary and the run continues with the next card. No rollback.
    pub fn run(&self, db: &Database) -> ImportSummary {
        let mut summary = ImportSummary {
            total: db.cards.len(),
            ..Default::default()
        };

        for card in &db.cards {
            if let Some(reason) = self.skip_reason(card) {
                println!("skipping ({}): {}", reason.as_str(), card.title);
                summary.skipped += 1;
                continue;
            }

            let path = converter::resolve_path(card, &db.labels);
            let entry = converter::format_entry(card);

            if self.options.dry_run {
                println!("would import: {}", path);
                summary.planned += 1;
                continue;
            }

            println!("importing: {}", path);
            match self.store.insert(&path, &entry) {
                Ok(()) => {
                    println!("OK.");
                    summary.imported += 1;
                }
                Err(e) => {
                    println!("FAILED.");
                    warn!("import failed for {}: {}", path, e);
                    summary.failed += 1;
                    summary.errors.push(format!("{}: {}", path, e));
                }
            }
        }

        debug!(
            "run finished: {} imported, {} skipped, {} failed of {}",
            summary.imported, summary.skipped, summary.failed, summary.total
        );
        summary
    }
}
