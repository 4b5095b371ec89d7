//! Classifier configuration.

use std::env;

use crate::dataset::DomainSource;

/// Environment variable naming an alternative dataset file.
pub const DOMAINS_FILE_ENV: &str = "BURNLIST_DOMAINS_FILE";

/// Environment variable requesting eager loading.
pub const EAGER_ENV: &str = "BURNLIST_EAGER";

/// Classifier configuration.
#[derive(Debug, Clone, Default)]
pub struct ClassifierConfig {
    /// Where to load the blacklist from.
    pub source: DomainSource,
    /// Load the dataset at construction instead of on first query.
    pub eager: bool,
    /// Domains added right after the dataset is loaded.
    pub extra_domains: Vec<String>,
    /// Domains removed right after the dataset is loaded.
    pub excluded_domains: Vec<String>,
}

impl ClassifierConfig {
    /// Creates a configuration using the bundled dataset, loaded lazily.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration builder.
    #[must_use]
    pub fn builder() -> ClassifierConfigBuilder {
        ClassifierConfigBuilder::new()
    }

    /// Creates a configuration from `BURNLIST_DOMAINS_FILE` and `BURNLIST_EAGER`.
    ///
    /// Unset variables fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut builder = ClassifierConfigBuilder::new();
        if let Some(path) = lookup(DOMAINS_FILE_ENV).filter(|p| !p.trim().is_empty()) {
            builder = builder.source(DomainSource::file(path.trim()));
        }
        if let Some(flag) = lookup(EAGER_ENV) {
            builder = builder.eager(parse_flag(&flag));
        }
        builder.build()
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Builder for classifier configuration.
#[derive(Debug, Clone, Default)]
pub struct ClassifierConfigBuilder {
    source: DomainSource,
    eager: bool,
    extra_domains: Vec<String>,
    excluded_domains: Vec<String>,
}

impl ClassifierConfigBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the dataset source.
    #[must_use]
    pub fn source(mut self, source: DomainSource) -> Self {
        self.source = source;
        self
    }

    /// Sets whether the dataset is loaded at construction.
    #[must_use]
    pub const fn eager(mut self, eager: bool) -> Self {
        self.eager = eager;
        self
    }

    /// Adds domains to blacklist on top of the dataset.
    #[must_use]
    pub fn extra_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_domains.extend(domains.into_iter().map(Into::into));
        self
    }

    /// Adds dataset domains to ignore.
    #[must_use]
    pub fn excluded_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_domains.extend(domains.into_iter().map(Into::into));
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> ClassifierConfig {
        ClassifierConfig {
            source: self.source,
            eager: self.eager,
            extra_domains: self.extra_domains,
            excluded_domains: self.excluded_domains,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config() {
        let config = ClassifierConfig::new();
        assert_eq!(config.source, DomainSource::Bundled);
        assert!(!config.eager);
        assert!(config.extra_domains.is_empty());
        assert!(config.excluded_domains.is_empty());
    }

    #[test]
    fn test_builder() {
        let config = ClassifierConfig::builder()
            .source(DomainSource::file("/etc/burnlist/domains.txt"))
            .eager(true)
            .extra_domains(["corp-trash.example"])
            .excluded_domains(vec!["xmaily.com".to_string()])
            .build();

        assert_eq!(
            config.source,
            DomainSource::File(PathBuf::from("/etc/burnlist/domains.txt"))
        );
        assert!(config.eager);
        assert_eq!(config.extra_domains, vec!["corp-trash.example"]);
        assert_eq!(config.excluded_domains, vec!["xmaily.com"]);
    }

    #[test]
    fn test_from_lookup() {
        let config = ClassifierConfig::from_lookup(|key| match key {
            DOMAINS_FILE_ENV => Some(" /srv/domains.txt ".into()),
            EAGER_ENV => Some("Yes".into()),
            _ => None,
        });
        assert_eq!(config.source, DomainSource::file("/srv/domains.txt"));
        assert!(config.eager);
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = ClassifierConfig::from_lookup(|key| match key {
            DOMAINS_FILE_ENV => Some("   ".into()),
            EAGER_ENV => Some("nope".into()),
            _ => None,
        });
        assert_eq!(config.source, DomainSource::Bundled);
        assert!(!config.eager);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag(" on "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(""));
    }
}
