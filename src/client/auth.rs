use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::domain::{ApiKey, Password, Username, ValidationError};

pub const ENV_API_KEY: &str = "INFOBIP_API_KEY";
pub const ENV_USERNAME: &str = "INFOBIP_USERNAME";
pub const ENV_PASSWORD: &str = "INFOBIP_PASSWORD";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Authentication scheme attached to every Infobip request.
///
/// Use [`Auth::api_key`] for `Authorization: App <key>`, [`Auth::basic`] for HTTP Basic.
/// [`Auth::None`] is representable so a misconfigured client fails with
/// [`InfobipError::NoAuthentication`](crate::InfobipError::NoAuthentication) instead of
/// sending an unauthenticated request.
pub enum Auth {
    ApiKey(ApiKey),
    Basic { username: Username, password: Password },
    None,
}

impl Auth {
    /// Create [`Auth::ApiKey`] and validate that the key is non-empty after trimming.
    pub fn api_key(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::ApiKey(ApiKey::new(value)?))
    }

    /// Create [`Auth::Basic`] and validate that both parts are non-empty.
    pub fn basic(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self::Basic {
            username: Username::new(username)?,
            password: Password::new(password)?,
        })
    }

    /// Pick a scheme from optional credentials.
    ///
    /// A usable API key wins over basic credentials. Basic needs both a username and a
    /// password. Anything else resolves to [`Auth::None`].
    pub fn from_parts(
        api_key: Option<&str>,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Self {
        if let Some(Ok(key)) = api_key.map(ApiKey::new) {
            return Self::ApiKey(key);
        }
        match (username, password) {
            (Some(username), Some(password)) => {
                Self::basic(username, password).unwrap_or(Self::None)
            }
            _ => Self::None,
        }
    }

    /// Read `INFOBIP_API_KEY`, `INFOBIP_USERNAME` and `INFOBIP_PASSWORD`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup(ENV_API_KEY);
        let username = lookup(ENV_USERNAME);
        let password = lookup(ENV_PASSWORD);
        Self::from_parts(
            api_key.as_deref(),
            username.as_deref(),
            password.as_deref(),
        )
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// `Authorization` header value for this scheme, or `None` when nothing is configured.
    pub(crate) fn authorization(&self) -> Option<String> {
        match self {
            Self::ApiKey(key) => Some(format!("App {}", key.as_str())),
            Self::Basic { username, password } => {
                let credentials = format!("{}:{}", username.as_str(), password.as_str());
                Some(format!("Basic {}", STANDARD.encode(credentials)))
            }
            Self::None => None,
        }
    }
}
