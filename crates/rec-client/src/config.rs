//! Client configuration.

use url::Url;

use crate::error::ClientError;

/// Origin of the recommendation service when nothing else is configured
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Where the recommendation service lives.
///
/// The base may carry a path prefix (`https://host/api`); endpoints are
/// resolved beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_base: Url,
}

impl ClientConfig {
    pub fn new(api_base: &str) -> Result<Self, ClientError> {
        let invalid = |reason: String| ClientError::InvalidBaseUrl {
            url: api_base.to_string(),
            reason,
        };

        let mut url = Url::parse(api_base.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }
        if url.cannot_be_a_base() {
            return Err(invalid("URL cannot be used as a base".to_string()));
        }

        // Url::join replaces the last path segment unless the path ends in '/'
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url.set_query(None);
        url.set_fragment(None);

        Ok(Self { api_base: url })
    }

    /// Config pointing at [`DEFAULT_API_BASE`].
    pub fn localhost() -> Result<Self, ClientError> {
        Self::new(DEFAULT_API_BASE)
    }

    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Resolve an endpoint path such as `/recommend` against the base.
    pub fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.api_base
            .join(path.trim_start_matches('/'))
            .map_err(|e| ClientError::InvalidBaseUrl {
                url: self.api_base.to_string(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base() {
        let config = ClientConfig::localhost().unwrap();
        assert_eq!(
            config.endpoint("/recommend").unwrap().as_str(),
            "http://localhost:8000/recommend"
        );
    }

    #[test]
    fn test_trailing_slash_is_tolerated() {
        let config = ClientConfig::new("http://localhost:8000/").unwrap();
        assert_eq!(
            config.endpoint("/health").unwrap().as_str(),
            "http://localhost:8000/health"
        );
    }

    #[test]
    fn test_path_prefix_is_kept() {
        let config = ClientConfig::new("https://recs.example.com/api/v1").unwrap();
        assert_eq!(
            config.endpoint("/recommend").unwrap().as_str(),
            "https://recs.example.com/api/v1/recommend"
        );
    }

    #[test]
    fn test_invalid_bases_are_rejected() {
        assert!(matches!(
            ClientConfig::new("not a url"),
            Err(ClientError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            ClientConfig::new("ftp://files.example.com"),
            Err(ClientError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            ClientConfig::new("mailto:someone@example.com"),
            Err(ClientError::InvalidBaseUrl { .. })
        ));
    }
}
