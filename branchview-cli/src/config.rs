//! Configuration module
//!
//! Handles CLI configuration such as the API base URL.

use std::sync::Arc;

use anyhow::{Context, Result};
use branchview_client::GithubSource;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the hosting API
    pub api_url: String,
}

impl Config {
    /// Builds the data source for the configured API
    ///
    /// The base URL is checked by [`GithubSource`]; an unusable URL is
    /// reported here, before any command runs.
    pub fn source(&self) -> Result<Arc<GithubSource>> {
        let source = GithubSource::new(&self.api_url)
            .with_context(|| format!("Invalid API URL '{}'", self.api_url))?;
        Ok(Arc::new(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use branchview_client::{ClientError, DEFAULT_BASE_URL};

    fn config(api_url: &str) -> Config {
        Config {
            api_url: api_url.to_string(),
        }
    }

    #[test]
    fn test_source_accepts_http_urls() {
        assert!(config(DEFAULT_BASE_URL).source().is_ok());
        assert!(config("http://localhost:8080").source().is_ok());

        // Surrounding whitespace is tolerated
        assert!(config(" https://api.github.com ").source().is_ok());
    }

    #[test]
    fn test_source_rejects_unusable_urls() {
        for api_url in ["", "api.github.com", "ftp://example.com"] {
            let err = config(api_url).source().unwrap_err();
            assert!(
                matches!(
                    err.downcast_ref::<ClientError>(),
                    Some(ClientError::InvalidUrl(_))
                ),
                "{api_url:?} gave {err:#}"
            );
        }
    }

    #[test]
    fn test_source_uses_api_url() {
        let source = config("https://git.example.com/api/v3").source().unwrap();
        assert_eq!(
            source.repositories_url().unwrap().as_str(),
            "https://git.example.com/api/v3/repositories"
        );
    }
}
