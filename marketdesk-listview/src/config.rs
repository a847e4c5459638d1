//! List screen configuration.
//!
//! Loaded from a TOML file such as:
//!
//! ```toml
//! default_page_size = 25
//! page_size_tiers = [10, 25, 50, 100]
//!
//! [default_sort]
//! field = "created_at"
//! direction = "desc"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::criteria::SortKey;
use crate::error::{ListError, ListResult};

/// Page sizes offered by the pagination control.
pub const PAGE_SIZE_TIERS: [usize; 4] = [10, 25, 50, 100];

/// Defaults applied when a list screen opens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListConfig {
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    #[serde(default = "default_page_size_tiers")]
    pub page_size_tiers: Vec<usize>,
    #[serde(default = "default_sort")]
    pub default_sort: SortKey,
}

fn default_page_size() -> usize {
    PAGE_SIZE_TIERS[0]
}

fn default_page_size_tiers() -> Vec<usize> {
    PAGE_SIZE_TIERS.to_vec()
}

fn default_sort() -> SortKey {
    SortKey::descending("created_at")
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            page_size_tiers: default_page_size_tiers(),
            default_sort: default_sort(),
        }
    }
}

impl ListConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(contents: &str) -> ListResult<Self> {
        let config: Self =
            toml::from_str(contents).map_err(|e| ListError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`, falling back to defaults when the
    /// file is absent or invalid.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No list config at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => {
                    info!("Loaded list config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!("Failed to parse list config {:?}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read list config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Checks tiers are non-empty and positive and contain the default size.
    pub fn validate(&self) -> ListResult<()> {
        if self.page_size_tiers.is_empty() {
            return Err(ListError::Config("page_size_tiers is empty".to_string()));
        }
        if self.page_size_tiers.contains(&0) {
            return Err(ListError::ZeroPageSize);
        }
        if !self.page_size_tiers.contains(&self.default_page_size) {
            return Err(ListError::UnsupportedPageSize {
                size: self.default_page_size,
                allowed: self.page_size_tiers.clone(),
            });
        }
        if self.default_sort.field.trim().is_empty() {
            return Err(ListError::Config("default_sort.field is empty".to_string()));
        }
        Ok(())
    }

    /// Rejects page sizes the pagination control does not offer.
    pub fn check_page_size(&self, size: usize) -> ListResult<()> {
        if size == 0 {
            return Err(ListError::ZeroPageSize);
        }
        if !self.page_size_tiers.contains(&size) {
            return Err(ListError::UnsupportedPageSize {
                size,
                allowed: self.page_size_tiers.clone(),
            });
        }
        Ok(())
    }
}
