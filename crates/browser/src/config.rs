//! Environment-driven configuration.
//!
//! | variable             | meaning                                   | default          |
//! |----------------------|-------------------------------------------|------------------|
//! | `PRODCAT_DATA`       | path to a JSON dataset                    | embedded sample  |
//! | `PRODCAT_OWNER`      | initial owner filter                      | `All`            |
//! | `PRODCAT_QUERY`      | initial search text                       | empty            |
//! | `PRODCAT_LOG_FORMAT` | `json` or `pretty`                        | `json`           |

use std::path::PathBuf;

use prodcat_catalog::{OwnerFilter, ProductBrowser};
use prodcat_observability::{LogFormat, UnknownLogFormat};

pub const DATA_VAR: &str = "PRODCAT_DATA";
pub const OWNER_VAR: &str = "PRODCAT_OWNER";
pub const QUERY_VAR: &str = "PRODCAT_QUERY";
pub const LOG_FORMAT_VAR: &str = "PRODCAT_LOG_FORMAT";

/// A variable that was unset (or blank) and the default used in its place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigFallback {
    pub var: &'static str,
    pub default: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserConfig {
    pub data_path: Option<PathBuf>,
    pub initial_owner: Option<String>,
    pub initial_query: Option<String>,
    pub log_format: LogFormat,
    /// Set when `PRODCAT_LOG_FORMAT` held an unrecognised value. Reported once
    /// logging is up, since it decides how logging is initialised.
    pub invalid_log_format: Option<UnknownLogFormat>,
    /// Defaults taken for unset variables, reported by [`Self::log_fallbacks`].
    /// `PRODCAT_DATA` is not listed here; dataset loading logs its own choice.
    pub fallbacks: Vec<ConfigFallback>,
}

impl BrowserConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut fallbacks = Vec::new();

        let log_format = get(LOG_FORMAT_VAR).map(|v| v.parse::<LogFormat>());
        let (log_format, invalid_log_format) = match log_format {
            None => {
                fallbacks.push(ConfigFallback {
                    var: LOG_FORMAT_VAR,
                    default: "json",
                });
                (LogFormat::default(), None)
            }
            Some(Ok(format)) => (format, None),
            Some(Err(err)) => (LogFormat::default(), Some(err)),
        };

        let initial_owner = get(OWNER_VAR);
        if initial_owner.is_none() {
            fallbacks.push(ConfigFallback {
                var: OWNER_VAR,
                default: OwnerFilter::ALL,
            });
        }

        // Whitespace-only search text is still applied verbatim.
        let initial_query = lookup(QUERY_VAR);
        if initial_query.is_none() {
            fallbacks.push(ConfigFallback {
                var: QUERY_VAR,
                default: "",
            });
        }

        Self {
            data_path: get(DATA_VAR).map(PathBuf::from),
            initial_owner,
            initial_query,
            log_format,
            invalid_log_format,
            fallbacks,
        }
    }

    /// Reports every default taken while parsing. Call after logging is initialised.
    pub fn log_fallbacks(&self) {
        if let Some(err) = &self.invalid_log_format {
            tracing::warn!(%err, "falling back to json log format");
        }
        for fallback in &self.fallbacks {
            tracing::warn!(
                var = fallback.var,
                default = fallback.default,
                "variable not set; using default"
            );
        }
    }

    /// Applies the configured starting filters to a fresh browser.
    pub fn apply_initial_filters(&self, browser: &mut ProductBrowser) {
        if let Some(owner) = &self.initial_owner {
            browser.set_owner(owner.clone());
        }
        if let Some(query) = &self.initial_query {
            browser.set_query(query.clone());
        }
    }
}
