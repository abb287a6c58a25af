//! Configuration for scanning behavior.
//!
//! The match rules themselves (character sets, marker literals, lookahead
//! budget) are fixed. What can be configured is what happens around them:
//!
//! - [`ScanConfig`] - Fragment hashing and duplicate suppression
//! - [`HashConfig`] - Specifies whether to compute fragment fingerprints
//!
//! # Example
//!
//! ```
//! use keyfrag::{HashConfig, ScanConfig};
//!
//! // Suppress fragments that were already printed
//! let config = ScanConfig::default().with_dedup(true);
//! config.validate()?;
//!
//! // No fingerprints at all
//! let config = ScanConfig::default()
//!     .with_hash_config(HashConfig::disabled());
//!
//! # Ok::<(), keyfrag::ScanError>(())
//! ```

use crate::error::ScanError;

/// Configuration for a [`Scanner`](crate::Scanner) and the writers fed by it.
///
/// # Constraints
///
/// Duplicate suppression compares fragment fingerprints, so `dedup` requires
/// hashing to be enabled and the `hash-blake3` feature to be compiled in.
///
/// # Example
///
/// ```
/// use keyfrag::ScanConfig;
///
/// let config = ScanConfig::default();
/// assert!(!config.dedup());
///
/// let config = ScanConfig::new(true)?;
/// assert!(config.dedup());
/// # Ok::<(), keyfrag::ScanError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScanConfig {
    /// Configuration for hashing behavior.
    hash_config: HashConfig,

    /// Whether repeated fragments are suppressed on output.
    dedup: bool,
}

impl ScanConfig {
    /// Creates a new validated configuration with hashing enabled.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidConfig`] if `dedup` is requested but the
    /// crate was built without the `hash-blake3` feature.
    pub fn new(dedup: bool) -> Result<Self, ScanError> {
        let config = Self {
            hash_config: HashConfig::enabled(),
            dedup,
        };
        config.validate()?;
        Ok(config)
    }

    /// Sets the hash configuration.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`ScanConfig::validate`] to check if the configuration is valid.
    pub fn with_hash_config(mut self, config: HashConfig) -> Self {
        self.hash_config = config;
        self
    }

    /// Enables or disables duplicate suppression.
    ///
    /// Note: This does not validate the configuration.
    pub fn with_dedup(mut self, dedup: bool) -> Self {
        self.dedup = dedup;
        self
    }

    /// Returns the hash configuration.
    pub fn hash_config(&self) -> &HashConfig {
        &self.hash_config
    }

    /// Returns true if repeated fragments are suppressed.
    pub fn dedup(&self) -> bool {
        self.dedup
    }

    /// Validates the current configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use keyfrag::{HashConfig, ScanConfig};
    ///
    /// let config = ScanConfig::default()
    ///     .with_hash_config(HashConfig::disabled())
    ///     .with_dedup(true);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.dedup && !self.hash_config.enabled {
            return Err(ScanError::InvalidConfig {
                message: "dedup requires hashing to be enabled",
            });
        }

        if self.dedup && !cfg!(feature = "hash-blake3") {
            return Err(ScanError::InvalidConfig {
                message: "dedup requires the hash-blake3 feature",
            });
        }

        Ok(())
    }
}

/// Configuration for fragment hashing behavior.
///
/// `HashConfig` controls whether BLAKE3 fingerprints are computed for each
/// fragment. Hashing is enabled by default.
///
/// # Example
///
/// ```
/// use keyfrag::HashConfig;
///
/// let config = HashConfig::enabled();
/// assert!(config.enabled);
///
/// let config = HashConfig::disabled();
/// assert!(!config.enabled);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashConfig {
    /// Whether to compute BLAKE3 hashes for fragments.
    pub enabled: bool,
}

impl HashConfig {
    /// Creates a new hash configuration.
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Enables hashing.
    pub const fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Disables hashing.
    pub const fn disabled() -> Self {
        Self { enabled: false }
    }
}

impl Default for HashConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScanConfig::default();
        assert!(config.hash_config().enabled);
        assert!(!config.dedup());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ScanConfig::default()
            .with_hash_config(HashConfig::disabled())
            .with_dedup(false);

        assert!(!config.hash_config().enabled);
        assert!(!config.dedup());
    }

    #[test]
    fn test_dedup_without_hashing_is_invalid() {
        let config = ScanConfig::default()
            .with_hash_config(HashConfig::disabled())
            .with_dedup(true);
        assert!(matches!(
            config.validate(),
            Err(ScanError::InvalidConfig { .. })
        ));
    }

    #[test]
    #[cfg(feature = "hash-blake3")]
    fn test_dedup_with_hashing_is_valid() {
        let config = ScanConfig::new(true).unwrap();
        assert!(config.dedup());
        assert!(config.hash_config().enabled);
    }

    #[test]
    #[cfg(not(feature = "hash-blake3"))]
    fn test_dedup_needs_feature() {
        assert!(ScanConfig::new(true).is_err());
    }

    #[test]
    fn test_hash_config() {
        let config = HashConfig::default();
        assert!(config.enabled);

        let config = HashConfig::disabled();
        assert!(!config.enabled);

        assert_eq!(HashConfig::new(true), HashConfig::enabled());
    }
}
