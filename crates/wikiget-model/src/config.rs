use crate::{Language, NamingScheme};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Run configuration, built once from the command line and then only read.
#[derive(Debug, Clone)]
pub struct Config {
    /// Forces every page to this wiki instead of the one in its URL.
    pub language_override: Option<Language>,
    /// Maximum number of pages to fetch; 0 fetches the whole list.
    pub item_limit: usize,
    pub destination: PathBuf,
    pub list_file: Option<PathBuf>,
    pub naming: NamingScheme,
    pub debug: bool,
    /// Upper bound on a single HTTP request.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language_override: None,
            item_limit: 0,
            destination: PathBuf::from("."),
            list_file: None,
            naming: NamingScheme::default(),
            debug: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    /// Number of pages to process out of a list of `len` entries.
    pub fn effective_limit(&self, len: usize) -> usize {
        if self.item_limit == 0 {
            len
        } else {
            self.item_limit.min(len)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_limit() {
        let mut config = Config::default();
        assert_eq!(config.effective_limit(5), 5);

        config.item_limit = 2;
        assert_eq!(config.effective_limit(5), 2);
        assert_eq!(config.effective_limit(1), 1);
        assert_eq!(config.effective_limit(0), 0);
    }
}
