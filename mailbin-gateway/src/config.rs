//! Environment-driven gateway configuration.

use std::path::PathBuf;

use mailbin_core::{CoreError, DomainList};

/// Domains served when `MAILBIN_DOMAINS` is not set.
pub const DEFAULT_DOMAINS: [&str; 3] = ["ryuuxiao.biz.id", "ryuushop.xyz", "ryuushop.web.id"];

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Config {
    /// Address the HTTP listener binds to.
    pub listen_addr: String,
    /// Domains addresses may be minted under, default first.
    pub domains: DomainList,
    /// Expected `x-api-key` for push; `None` disables the check.
    pub api_key: Option<String>,
    /// SQLite database path; `None` selects the in-process store.
    pub db_path: Option<PathBuf>,
}

impl Config {
    /// Read configuration from `MAILBIN_*` environment variables.
    ///
    /// Unset variables fall back to defaults; empty `MAILBIN_API_KEY` and
    /// `MAILBIN_DB` count as unset.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyDomainList`] if `MAILBIN_DOMAINS` is set but
    /// contains no usable domain.
    pub fn from_env() -> Result<Self, CoreError> {
        let listen_addr =
            std::env::var("MAILBIN_LISTEN_ADDR").unwrap_or_else(|_| "127.0.0.1:8025".to_owned());

        let domains = match std::env::var("MAILBIN_DOMAINS") {
            Ok(raw) => parse_domains(&raw)?,
            Err(_) => DomainList::new(DEFAULT_DOMAINS.iter().map(|d| (*d).to_owned()).collect())?,
        };

        let api_key = std::env::var("MAILBIN_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());
        let db_path = std::env::var("MAILBIN_DB")
            .ok()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            listen_addr,
            domains,
            api_key,
            db_path,
        })
    }
}

fn parse_domains(raw: &str) -> Result<DomainList, CoreError> {
    DomainList::new(raw.split(',').map(str::to_owned).collect())
}
