use crate::error::{PetFriendsError, PetFriendsResult};
use crate::logging::log_debug;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Public PetFriends deployment used when no base URL is configured
pub const DEFAULT_BASE_URL: &str = "https://petfriends.skillfactory.ru";

/// Directory holding image fixtures, relative to the crate root
pub const DEFAULT_FIXTURES_DIR: &str = "tests/images";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Login credentials for the PetFriends account the harness acts as
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// Keep the password out of logs and panic messages
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Harness-wide configuration
#[derive(Debug, Clone)]
pub struct PetFriendsConfig {
    /// Service root, without trailing slash
    pub base_url: String,

    /// Valid account credentials. Scenarios derive their invalid
    /// variants from these.
    pub credentials: Credentials,

    /// Where image fixtures live
    pub fixtures_dir: PathBuf,

    /// Per-request timeout enforced by the HTTP client
    pub request_timeout: Duration,
}

impl Default for PetFriendsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials: Credentials::new("", ""),
            fixtures_dir: PathBuf::from(DEFAULT_FIXTURES_DIR),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl PetFriendsConfig {
    /// Validate the configuration is complete
    ///
    /// # Errors
    ///
    /// Returns [`PetFriendsError::ConfigurationError`] if:
    /// - The base URL is empty or not http(s)
    /// - Email or password is empty
    /// - The request timeout is zero
    pub fn validate(&self) -> PetFriendsResult<()> {
        if self.base_url.is_empty() {
            return Err(PetFriendsError::configuration_error(
                "PetFriends base URL is required",
            ));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(PetFriendsError::configuration_error(format!(
                "PetFriends base URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        if self.credentials.email.is_empty() {
            return Err(PetFriendsError::configuration_error(
                "PetFriends account email is required",
            ));
        }
        if self.credentials.password.is_empty() {
            return Err(PetFriendsError::configuration_error(
                "PetFriends account password is required",
            ));
        }
        if self.request_timeout.is_zero() {
            return Err(PetFriendsError::configuration_error(
                "Request timeout must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Resolve a fixture file name against [`fixtures_dir`](Self::fixtures_dir)
    ///
    /// # Errors
    ///
    /// Returns [`PetFriendsError::FixtureNotFound`] if the file does not exist.
    pub fn fixture_path(&self, name: impl AsRef<Path>) -> PetFriendsResult<PathBuf> {
        let path = self.fixtures_dir.join(name);
        if !path.is_file() {
            return Err(PetFriendsError::fixture_not_found(path));
        }
        Ok(path)
    }

    /// Load configuration from environment variables
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `PETFRIENDS_BASE_URL` | [`DEFAULT_BASE_URL`] |
    /// | `PETFRIENDS_EMAIL` | required |
    /// | `PETFRIENDS_PASSWORD` | required |
    /// | `PETFRIENDS_FIXTURES_DIR` | [`DEFAULT_FIXTURES_DIR`] |
    /// | `PETFRIENDS_TIMEOUT_SECS` | [`DEFAULT_REQUEST_TIMEOUT_SECS`] |
    ///
    /// # Errors
    ///
    /// Returns [`PetFriendsError::ConfigurationError`] if required variables
    /// are missing, the timeout is not a number, or validation fails.
    pub fn from_env() -> PetFriendsResult<Self> {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("PETFRIENDS_BASE_URL") {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Ok(email) = std::env::var("PETFRIENDS_EMAIL") {
            config.credentials.email = email;
        }
        if let Ok(password) = std::env::var("PETFRIENDS_PASSWORD") {
            config.credentials.password = password;
        }
        if let Ok(dir) = std::env::var("PETFRIENDS_FIXTURES_DIR") {
            config.fixtures_dir = PathBuf::from(dir);
        }
        if let Ok(raw) = std::env::var("PETFRIENDS_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|e| {
                PetFriendsError::configuration_error(format!(
                    "PETFRIENDS_TIMEOUT_SECS must be a whole number of seconds: {e}"
                ))
            })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        config.validate()?;

        log_debug!(
            base_url = %config.base_url,
            email = %config.credentials.email,
            fixtures_dir = %config.fixtures_dir.display(),
            timeout_secs = config.request_timeout.as_secs(),
            "PetFriends configuration loaded and validated"
        );

        Ok(config)
    }
}
