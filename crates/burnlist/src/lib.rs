//! # burnlist
//!
//! Offline detection of disposable (throwaway) email addresses.
//!
//! ## Features
//!
//! - **Bundled blacklist**: Known disposable domains ship with the crate, so
//!   no network lookup is ever made
//! - **Lazy loading**: The blacklist is parsed on first use, once
//! - **Runtime customization**: Add or remove domains for the lifetime of a
//!   classifier without touching the dataset
//! - **Subaddress detection**: Recognize `username+tag@domain` addresses
//! - **Thread-safe**: A classifier can be shared across threads
//!
//! ## Quick Start
//!
//! ```
//! use burnlist::DomainClassifier;
//!
//! # fn main() -> burnlist::Result<()> {
//! let classifier = DomainClassifier::new();
//!
//! assert!(classifier.is_disposable("someone@fakeinbox.com")?);
//! assert!(classifier.is_disposable("FakeInbox.COM")?);
//! assert!(!classifier.is_disposable("someone@outlook.com")?);
//! # Ok(())
//! # }
//! ```
//!
//! ### Custom Datasets
//!
//! ```ignore
//! use burnlist::{ClassifierConfig, DomainClassifier, DomainSource};
//!
//! let config = ClassifierConfig::builder()
//!     .source(DomainSource::file("/etc/burnlist/domains.txt"))
//!     .extra_domains(["trash.internal.example"])
//!     .eager(true)
//!     .build();
//!
//! // Fails here, not on the first query, if the file is unreadable.
//! let classifier = DomainClassifier::with_config(config)?;
//! ```
//!
//! ### Subaddressing
//!
//! ```
//! use burnlist::is_subaddressed;
//!
//! assert!(is_subaddressed("username+tag@example.com"));
//! assert!(!is_subaddressed("username@example.com"));
//! ```
//!
//! ## Modules
//!
//! - [`address`]: Domain extraction and subaddress detection
//! - [`dataset`]: Blacklist sources and line parsing

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod address;
mod classifier;
mod config;
pub mod dataset;
mod error;

pub use address::{extract_domain, is_subaddressed, local_part, normalize_domain};
pub use classifier::{Classification, DatasetStats, DomainClassifier};
pub use config::{ClassifierConfig, ClassifierConfigBuilder, DOMAINS_FILE_ENV, EAGER_ENV};
pub use dataset::{BUNDLED_DOMAINS, DomainSource, ParsedDataset, parse_domains};
pub use error::{Error, Result};
