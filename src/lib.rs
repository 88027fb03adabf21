//! # a3s-policy-scan
//!
//! Privacy practice detection for policy text.
//!
//! ## Overview
//!
//! `a3s-policy-scan` scans a passage of privacy-policy text for statements
//! about specific data-handling practices (selling data, third-party sharing,
//! advertising, retention, sensitive data) and classifies each one as
//! ALLOWS, FORBIDS, CONDITIONAL or UNCLEAR, with a verbatim evidence snippet.
//!
//! ## Quick Start
//!
//! ```rust
//! use a3s_policy_scan::{classify, Practice, Status};
//!
//! # fn example() -> a3s_policy_scan::Result<()> {
//! let records = classify(
//!     "We will never sell your personal data to third parties.",
//!     "section-1",
//! )?;
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].practice, Practice::DataSelling);
//! assert_eq!(records[0].status, Status::Forbids);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Architecture
//!
//! - **catalog**: immutable pattern and phrase tables, compiled once
//! - **matcher**: first hit per practice, in catalog order
//! - **resolver**: FORBIDS / CONDITIONAL / ALLOWS from a 200-char context window
//! - **evidence**: trimmed 100-char excerpt anchored at the match
//! - **classifier**: assembles records, or one UNCLEAR placeholder
//! - **chunk** / **rules**: document splitting and per-user verdicts
//! - **server** / **cli**: HTTP and command-line front ends

pub mod catalog;
pub mod chunk;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod evidence;
pub mod matcher;
pub mod resolver;
pub mod rules;
pub mod server;
pub mod types;

// Re-export core types
pub use catalog::Catalog;
pub use chunk::{chunk_text, classify_document};
pub use classifier::{classify, PracticeClassifier, FALLBACK_EVIDENCE};
pub use config::{ChunkConfig, ScanConfig};
pub use error::{Result, ScanError};
pub use rules::{evaluate_policy, PolicyEvaluation, RuleViolation, UserRule, Verdict};
pub use types::{ClassificationRecord, ClassificationRequest, Practice, Status};
