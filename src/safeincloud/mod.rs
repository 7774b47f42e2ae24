//! # safeincloud2pass — SafeInCloud → pass import
//!
//! Converts a SafeInCloud XML export into entries for `pass`, the standard
//! unix password store:
//! - **XML export** — card/field/label entity model (read)
//! - **Store paths** — label-based grouping, filesystem-safe names
//! - **Entry text** — pass `insert --multiline` layout, primary password first
//! - **pass CLI** — one `pass insert` subprocess per imported card
//!
//! Architecture:
//! - `types` — all data structures, import options, run summary
//! - `error` — import-specific error type
//! - `xml_parser` — SafeInCloud export reader (deserializer)
//! - `converter` — card → store path and multiline entry mapping
//! - `pass` — `pass` subprocess bridge behind the `SecretStore` seam
//! - `service` — high-level orchestrator (filter, convert, hand off)

pub mod converter;
pub mod error;
pub mod pass;
pub mod service;
pub mod types;
pub mod xml_parser;

// Re-exports
pub use error::{ImportError, ImportResult};
pub use pass::{PassCli, SecretStore};
pub use service::ImportService;
pub use types::*;
