use crate::common::option::GatewayOpts;
use crate::common::query::{ReadQuery, ReadResult};
use crate::common::time_series::WriteBatch;
use crate::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fmt;
use std::time::Duration;

mod hec;

pub use hec::{HecBackend, HecBackendBuilder};

/// Caller identity handed to the backend. Built per request and never logged,
/// `Debug` masks the password.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: &str, password: &str) -> Credentials {
        Credentials {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    /// Parse an `Authorization: Basic ...` header value.
    ///
    /// A missing or malformed header gives empty credentials, the backend
    /// decides whether that is acceptable.
    pub fn from_basic_auth(header: Option<&str>) -> Credentials {
        header
            .and_then(Credentials::parse_basic)
            .unwrap_or_default()
    }

    fn parse_basic(header: &str) -> Option<Credentials> {
        let header = header.trim();
        let (scheme, encoded) = header.split_at(header.find(' ')?);
        if !scheme.eq_ignore_ascii_case("basic") {
            return None;
        }
        let decoded = STANDARD.decode(encoded.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let idx = decoded.find(':')?;
        Some(Credentials {
            username: decoded[..idx].to_string(),
            password: decoded[idx + 1..].to_string(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_empty() && self.password.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Everything needed to build one backend client handle.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientOpts {
    pub url: String,
    pub hec_url: String,
    pub hec_token: String,
    pub index: String,
    pub source_type: String,
    pub credentials: Credentials,
    pub timeout: Duration,
}

impl ClientOpts {
    pub fn from_gateway_opts(opts: &GatewayOpts, credentials: Credentials) -> ClientOpts {
        ClientOpts {
            url: opts.splunk_url.clone(),
            hec_url: opts.splunk_hec_url.clone(),
            hec_token: opts.splunk_hec_token.clone(),
            index: opts.splunk_metrics_index.clone(),
            source_type: opts.splunk_metrics_sourcetype.clone(),
            credentials,
            timeout: opts.timeout,
        }
    }
}

/// Time series store the gateway forwards to.
///
/// Instances must be safe for concurrent use by multiple callers once built:
/// the write handle is shared by every write request.
pub trait Backend: Send + Sync {
    /// Store the whole batch, or fail without partially applying it.
    fn write(&self, batch: &WriteBatch) -> Result<()>;

    /// Answer every query, results in query order. Must give up with
    /// `RopeeErr::TimeoutErr` once the handle's timeout is exceeded.
    fn read(&self, query: &ReadQuery) -> Result<ReadResult>;
}

/// Build a backend client handle.
///
/// Failing here is reported as `RopeeErr::ConstructionErr`, distinct from a
/// later read or write failure.
pub trait BackendBuilder: Send + Sync {
    fn build(&self, opts: &ClientOpts) -> Result<Box<dyn Backend>>;
}

#[cfg(test)]
mod test {
    use crate::backend::Credentials;
    use crate::option::GatewayOpts;
    use crate::backend::ClientOpts;

    #[test]
    fn test_parse_basic_auth() {
        // "user:pa:ss"
        let creds = Credentials::from_basic_auth(Some("Basic dXNlcjpwYTpzcw=="));
        assert_eq!(creds, Credentials::new("user", "pa:ss"));
    }

    #[test]
    fn test_missing_or_malformed_auth() {
        assert!(Credentials::from_basic_auth(None).is_empty());
        assert!(Credentials::from_basic_auth(Some("Bearer abc")).is_empty());
        assert!(Credentials::from_basic_auth(Some("Basic !!!")).is_empty());
        assert!(Credentials::from_basic_auth(Some("Basic")).is_empty());
    }

    #[test]
    fn test_debug_masks_password() {
        let creds = Credentials::new("admin", "secret");
        let printed = format!("{:?}", creds);
        assert!(printed.contains("admin"));
        assert!(!printed.contains("secret"));
    }

    #[test]
    fn test_client_opts() {
        let opts = GatewayOpts::default();
        let client = ClientOpts::from_gateway_opts(&opts, Credentials::new("u", "p"));
        assert_eq!(client.url, opts.splunk_url);
        assert_eq!(client.timeout, opts.timeout);
        assert_eq!(client.credentials.username, "u");
    }
}
