use crate::error::CoreError;

/// The fixed set of domains addresses may be minted under.
///
/// Guaranteed non-empty; entries are stored trimmed and lowercased so
/// resolution is case-insensitive. The first entry is the default domain.
#[derive(Debug, Clone)]
pub struct DomainList(Vec<String>);

impl DomainList {
    /// Creates a `DomainList`, trimming, lowercasing, and discarding blank
    /// entries.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyDomainList`] if no usable entry remains.
    pub fn new(domains: Vec<String>) -> Result<Self, CoreError> {
        let cleaned: Vec<String> = domains
            .into_iter()
            .map(|d| d.trim().to_lowercase())
            .filter(|d| !d.is_empty())
            .collect();
        if cleaned.is_empty() {
            return Err(CoreError::EmptyDomainList);
        }
        Ok(Self(cleaned))
    }

    /// The default domain (first configured entry).
    #[must_use]
    pub fn first(&self) -> &str {
        // Non-empty by construction.
        &self.0[0]
    }

    /// Whether `domain` (case-insensitive) is in the configured set.
    #[must_use]
    pub fn contains(&self, domain: &str) -> bool {
        let wanted = domain.trim().to_lowercase();
        self.0.iter().any(|d| *d == wanted)
    }

    /// Resolves a requested domain against the set.
    ///
    /// Absent, blank, or unlisted domains resolve to the default domain.
    /// Address creation coerces rather than rejects.
    #[must_use]
    pub fn resolve(&self, requested: Option<&str>) -> &str {
        let Some(raw) = requested else {
            return self.first();
        };
        let wanted = raw.trim().to_lowercase();
        self.0
            .iter()
            .find(|d| **d == wanted)
            .map_or_else(|| self.first(), String::as_str)
    }

    /// The configured domains, default first.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}
