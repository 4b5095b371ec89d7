//! `burnlist-demo` - debug page for the disposable email classifier.
//!
//! Prints blacklist statistics followed by the classification of each
//! address given on the command line (or a built-in sample set).
//!
//! ```text
//! burnlist-demo [--json] [--domains <FILE>] [address...]
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use burnlist::{Classification, ClassifierConfig, DatasetStats, DomainClassifier, DomainSource};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Addresses classified when none are given.
const SAMPLE_ADDRESSES: &[&str] = &[
    "someone@outlook.com",
    "someone@gmail.com",
    "someone@mantishub.com",
    "someone@xmaily.com",
    "someone+signup@FakeInbox.com",
];

/// Command-line interface.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    author,
    version,
    about = "Print blacklist statistics and classify email addresses"
)]
struct Options {
    /// Print the report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Dataset file to load instead of the bundled blacklist
    #[arg(long, value_name = "FILE", env = "BURNLIST_DOMAINS_FILE")]
    domains: Option<PathBuf>,

    /// Addresses or bare domains to classify (defaults to a sample set)
    addresses: Vec<String>,
}

impl Options {
    fn addresses(&self) -> Vec<String> {
        if self.addresses.is_empty() {
            SAMPLE_ADDRESSES.iter().map(ToString::to_string).collect()
        } else {
            self.addresses.clone()
        }
    }

    fn config(&self) -> ClassifierConfig {
        let mut config = ClassifierConfig::from_env();
        if let Some(path) = &self.domains {
            config.source = DomainSource::file(path);
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "burnlist=debug,burnlist_demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let options = Options::parse();
    let config = options.config();
    info!(source = %config.source, "Starting burnlist demo");

    let classifier =
        DomainClassifier::with_config(config).context("Failed to configure classifier")?;
    let stats = classifier.stats().context("Failed to load domain dataset")?;
    let results = options
        .addresses()
        .iter()
        .map(|address| classifier.classify(address))
        .collect::<burnlist::Result<Vec<_>>>()?;

    let mut out = io::stdout().lock();
    if options.json {
        let report = serde_json::json!({ "stats": stats, "results": results });
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        write_text(&mut out, &stats, &results)?;
    }
    Ok(())
}

fn write_text(
    out: &mut impl Write,
    stats: &DatasetStats,
    results: &[Classification],
) -> io::Result<()> {
    writeln!(out, "Disposable domains: {}", stats.domains)?;
    writeln!(out, "Loaded from dataset: {}", stats.loaded)?;
    writeln!(out, "Added at runtime: {}", stats.added)?;
    writeln!(out, "Removed at runtime: {}", stats.removed)?;

    for result in results {
        writeln!(out)?;
        writeln!(out, "email address = {}", result.address)?;
        writeln!(out, "domain = {}", result.domain)?;
        writeln!(out, "is_disposable = {}", result.disposable)?;
        writeln!(out, "is_subaddressed = {}", result.subaddressed)?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults_to_samples() {
        let options =
            Options::try_parse_from(["burnlist-demo", "--domains", "/tmp/x.txt"]).unwrap();
        assert!(!options.json);
        assert!(options.addresses.is_empty());
        assert_eq!(options.addresses().len(), SAMPLE_ADDRESSES.len());
        assert_eq!(options.addresses()[0], SAMPLE_ADDRESSES[0]);
    }

    #[test]
    fn test_parse_flags_and_addresses() {
        let options = Options::try_parse_from([
            "burnlist-demo",
            "a@b.com",
            "--json",
            "--domains",
            "/tmp/list.txt",
            "c@d.com",
        ])
        .unwrap();
        assert!(options.json);
        assert_eq!(options.domains, Some(PathBuf::from("/tmp/list.txt")));
        assert_eq!(options.addresses(), vec!["a@b.com", "c@d.com"]);
        assert_eq!(options.config().source, DomainSource::file("/tmp/list.txt"));
    }

    #[test]
    fn test_parse_domains_requires_path() {
        assert!(Options::try_parse_from(["burnlist-demo", "--domains"]).is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_flags() {
        let err = Options::try_parse_from(["burnlist-demo", "--jsn", "a@b.com"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_help_is_available() {
        let err = Options::try_parse_from(["burnlist-demo", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_write_text() {
        let classifier = DomainClassifier::with_source(DomainSource::text("xmaily.com\n"));
        let stats = classifier.stats().unwrap();
        let results = vec![classifier.classify("x+y@XMAILY.com").unwrap()];

        let mut out = Vec::new();
        write_text(&mut out, &stats, &results).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Disposable domains: 1\n"));
        assert!(text.contains("email address = x+y@XMAILY.com\n"));
        assert!(text.contains("domain = xmaily.com\n"));
        assert!(text.contains("is_disposable = true\n"));
        assert!(text.contains("is_subaddressed = true\n"));
    }
}
