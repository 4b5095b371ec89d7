//! Disposable domain classifier.
//!
//! [`DomainClassifier`] owns the blacklist for its lifetime. The set starts
//! unloaded and is read from its [`DomainSource`] the first time anything
//! needs it; afterwards it only changes through [`DomainClassifier::add_domains`]
//! and [`DomainClassifier::remove_domains`]. Runtime changes are never written
//! back to the source.
//!
//! The set sits behind an [`RwLock`], so a classifier can be shared between
//! threads by reference or `Arc`. Lookups take the read lock; the one-time
//! load and mutations take the write lock, and the load re-checks the state
//! under that lock so only one thread ever reads the source.

use std::collections::HashSet;
use std::sync::RwLock;

use tracing::{debug, trace};

use crate::address::{extract_domain, is_subaddressed};
use crate::config::ClassifierConfig;
use crate::dataset::DomainSource;
use crate::error::Result;

/// Loaded blacklist plus mutation counters.
#[derive(Debug)]
struct DomainSet {
    domains: HashSet<String>,
    loaded: usize,
    added: usize,
    removed: usize,
}

impl DomainSet {
    fn insert_all<I, S>(&mut self, domains: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = self.added;
        for domain in domains {
            if self.domains.insert(domain.as_ref().to_lowercase()) {
                self.added += 1;
            }
        }
        self.added - before
    }

    fn remove_all<I, S>(&mut self, domains: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = self.removed;
        for domain in domains {
            if self.domains.remove(&domain.as_ref().to_lowercase()) {
                self.removed += 1;
            }
        }
        self.removed - before
    }

    fn stats(&self) -> DatasetStats {
        DatasetStats {
            domains: self.domains.len(),
            loaded: self.loaded,
            added: self.added,
            removed: self.removed,
        }
    }
}

/// Classification details for a single address.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Classification {
    /// The input as given.
    pub address: String,
    /// Lowercase domain used for the lookup.
    pub domain: String,
    /// Whether the domain is blacklisted.
    pub disposable: bool,
    /// Whether the address uses a `+tag`.
    pub subaddressed: bool,
}

/// Blacklist size and mutation counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DatasetStats {
    /// Domains currently blacklisted.
    pub domains: usize,
    /// Unique domains read from the dataset.
    pub loaded: usize,
    /// Additions that introduced a new domain.
    pub added: usize,
    /// Removals that dropped an existing domain.
    pub removed: usize,
}

/// Answers "is this address disposable?" against an in-memory blacklist.
///
/// # Example
///
/// ```
/// use burnlist::DomainClassifier;
///
/// # fn main() -> burnlist::Result<()> {
/// let classifier = DomainClassifier::new();
/// assert!(classifier.is_disposable("someone@xmaily.com")?);
/// assert!(!classifier.is_disposable("someone@outlook.com")?);
///
/// classifier.add_domains(["Corp-Trash.example"])?;
/// assert!(classifier.is_disposable("corp-trash.example")?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DomainClassifier {
    config: ClassifierConfig,
    /// `None` until the dataset has been loaded.
    state: RwLock<Option<DomainSet>>,
}

impl Default for DomainClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainClassifier {
    /// Creates a classifier over the bundled blacklist, loaded on first use.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ClassifierConfig::default(),
            state: RwLock::new(None),
        }
    }

    /// Creates a classifier over the given source, loaded on first use.
    #[must_use]
    pub fn with_source(source: DomainSource) -> Self {
        Self {
            config: ClassifierConfig::builder().source(source).build(),
            state: RwLock::new(None),
        }
    }

    /// Creates a classifier from a configuration.
    ///
    /// # Errors
    ///
    /// With `eager` set, returns the dataset error immediately instead of on
    /// the first query.
    pub fn with_config(config: ClassifierConfig) -> Result<Self> {
        let eager = config.eager;
        let classifier = Self {
            config,
            state: RwLock::new(None),
        };
        if eager {
            classifier.ensure_loaded()?;
        }
        Ok(classifier)
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Returns true once the dataset has been loaded.
    ///
    /// A poisoned lock reports `false`.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.state.read().is_ok_and(|state| state.is_some())
    }

    /// Loads the dataset if it has not been loaded yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be read or is empty.
    pub fn ensure_loaded(&self) -> Result<()> {
        self.read(|_| ())
    }

    /// Determines whether an address or bare domain is disposable.
    ///
    /// Everything after the first `@` is lowercased and looked up; input
    /// without an `@` is looked up as a domain. Malformed input simply
    /// doesn't match.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be loaded.
    pub fn is_disposable(&self, email_or_domain: &str) -> Result<bool> {
        let domain = extract_domain(email_or_domain);
        let disposable = self.read(|set| set.domains.contains(&domain))?;
        trace!(%domain, disposable, "Domain lookup");
        Ok(disposable)
    }

    /// Determines whether an already extracted domain is blacklisted.
    ///
    /// The domain is lowercased but not split on `@`.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be loaded.
    pub fn contains_domain(&self, domain: &str) -> Result<bool> {
        let domain = domain.to_lowercase();
        self.read(|set| set.domains.contains(&domain))
    }

    /// Determines whether an address is subaddressed (`username+tag@domain`).
    ///
    /// Never touches the blacklist. See [`crate::is_subaddressed`].
    #[must_use]
    #[allow(clippy::unused_self)] // Kept on the classifier for API symmetry
    pub fn is_subaddressed(&self, address: &str) -> bool {
        is_subaddressed(address)
    }

    /// Classifies an address in one pass.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be loaded.
    pub fn classify(&self, address: &str) -> Result<Classification> {
        let domain = extract_domain(address);
        let disposable = self.read(|set| set.domains.contains(&domain))?;
        Ok(Classification {
            address: address.to_string(),
            domain,
            disposable,
            subaddressed: is_subaddressed(address),
        })
    }

    /// Adds domains to the blacklist for the lifetime of this classifier.
    ///
    /// Domains are lowercased; adding a domain twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be loaded.
    pub fn add_domains<I, S>(&self, domains: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.write(|set| {
            let added = set.insert_all(domains);
            debug!(added, total = set.domains.len(), "Added domains");
        })
    }

    /// Removes domains from the blacklist for the lifetime of this classifier.
    ///
    /// Domains are lowercased; removing an unknown domain is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be loaded.
    pub fn remove_domains<I, S>(&self, domains: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.write(|set| {
            let removed = set.remove_all(domains);
            debug!(removed, total = set.domains.len(), "Removed domains");
        })
    }

    /// Returns blacklist size and mutation counters.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be loaded.
    pub fn stats(&self) -> Result<DatasetStats> {
        self.read(DomainSet::stats)
    }

    /// Drops runtime changes; the next query reloads from the source.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::LockPoisoned`] if the lock is poisoned.
    pub fn reload(&self) -> Result<()> {
        *self.state.write()? = None;
        debug!(source = %self.config.source, "Domain set reset");
        Ok(())
    }

    /// Runs `f` against the loaded set, loading it first if needed.
    fn read<R>(&self, f: impl FnOnce(&DomainSet) -> R) -> Result<R> {
        {
            let state = self.state.read()?;
            if let Some(set) = state.as_ref() {
                return Ok(f(set));
            }
        }
        self.write(|set| f(set))
    }

    /// Runs `f` against the loaded set under the write lock.
    fn write<R>(&self, f: impl FnOnce(&mut DomainSet) -> R) -> Result<R> {
        let mut state = self.state.write()?;
        // Another thread may have loaded while we waited for the lock.
        let set = match state.take() {
            Some(set) => set,
            None => self.load()?,
        };
        Ok(f(state.insert(set)))
    }

    fn load(&self) -> Result<DomainSet> {
        let parsed = self.config.source.load()?;
        let mut set = DomainSet {
            loaded: parsed.domains.len(),
            domains: parsed.domains,
            added: 0,
            removed: 0,
        };
        set.insert_all(&self.config.extra_domains);
        set.remove_all(&self.config.excluded_domains);
        Ok(set)
    }
}
