use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Infobip API key, sent as `Authorization: App <key>`.
///
/// Invariant: non-empty after trimming.
pub struct ApiKey(String);

impl ApiKey {
    pub const FIELD: &'static str = "api_key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Infobip account username for HTTP Basic authentication.
///
/// Invariant: non-empty after trimming.
pub struct Username(String);

impl Username {
    pub const FIELD: &'static str = "username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated username.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Infobip account password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Provider-assigned identity of a rentable or rented number (`numberKey`).
///
/// Invariant: non-empty after trimming.
pub struct NumberKey(String);

impl NumberKey {
    pub const FIELD: &'static str = "numberKey";

    /// Create a validated [`NumberKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Provider-assigned key of a forwarding configuration (`configurationKey`).
///
/// Invariant: non-empty after trimming.
pub struct ConfigurationKey(String);

impl ConfigurationKey {
    pub const FIELD: &'static str = "configurationKey";

    /// Create a validated [`ConfigurationKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Message id (`messageId`) assigned by Infobip when a message is accepted.
///
/// Invariant: non-empty after trimming.
pub struct MessageId(String);

impl MessageId {
    /// Query parameter name used by `sms/1/reports`.
    pub const FIELD: &'static str = "messageId";

    /// Create a validated [`MessageId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number, normalized to the digits-only international form Infobip expects.
///
/// Equality and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
}

impl PhoneNumber {
    pub const FIELD: &'static str = "to";

    /// Parse and normalize a phone number.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164 })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation, including the leading `+`.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// Recipient value as sent to Infobip: E.164 without the leading `+`.
    pub fn recipient(&self) -> &str {
        self.e164.strip_prefix('+').unwrap_or(&self.e164)
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// How inbound messages received on a number are delivered.
///
/// Unknown values returned by Infobip are preserved in [`ForwardType::Other`].
pub enum ForwardType {
    /// Messages are stored and fetched by the customer (`PULL`).
    Pull,
    /// Messages are pushed with an HTTP POST (`HTTP_FORWARD_POST`).
    HttpForwardPost,
    /// Messages are pushed with an HTTP GET (`HTTP_FORWARD_GET`).
    HttpForwardGet,
    Other(String),
}

impl ForwardType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pull => "PULL",
            Self::HttpForwardPost => "HTTP_FORWARD_POST",
            Self::HttpForwardGet => "HTTP_FORWARD_GET",
            Self::Other(value) => value,
        }
    }

    pub fn from_wire(value: impl Into<String>) -> Self {
        let value = value.into();
        match value.as_str() {
            "PULL" => Self::Pull,
            "HTTP_FORWARD_POST" => Self::HttpForwardPost,
            "HTTP_FORWARD_GET" => Self::HttpForwardGet,
            _ => Self::Other(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_newtypes_trim_or_validate() {
        let key = ApiKey::new("  key ").unwrap();
        assert_eq!(key.as_str(), "key");
        assert!(ApiKey::new("  ").is_err());

        let username = Username::new(" user ").unwrap();
        assert_eq!(username.as_str(), "user");
        assert!(Username::new("").is_err());

        let password = Password::new(" secret ").unwrap();
        assert_eq!(password.as_str(), " secret ");
        assert!(Password::new("").is_err());

        let number_key = NumberKey::new(" 7B0A2E1C ").unwrap();
        assert_eq!(number_key.as_str(), "7B0A2E1C");
        assert!(matches!(
            NumberKey::new(" "),
            Err(ValidationError::Empty {
                field: NumberKey::FIELD
            })
        ));

        let config_key = ConfigurationKey::new("CFG-1").unwrap();
        assert_eq!(config_key.as_str(), "CFG-1");
        assert!(ConfigurationKey::new("").is_err());

        let message_id = MessageId::new(" 2250be2d4219-3af1 ").unwrap();
        assert_eq!(message_id.as_str(), "2250be2d4219-3af1");
        assert!(MessageId::new("\t").is_err());
    }

    #[test]
    fn password_debug_is_redacted() {
        let password = Password::new("hunter2").unwrap();
        assert_eq!(format!("{password:?}"), "Password(***)");
    }

    #[test]
    fn phone_number_normalizes_to_recipient_digits() {
        let p1 = PhoneNumber::parse(None, "+41 79 302 67 27").unwrap();
        let p2 = PhoneNumber::parse(Some(country::Id::CH), "079 302 67 27").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1.e164(), "+41793026727");
        assert_eq!(p1.recipient(), "41793026727");
        assert_eq!(p1.raw(), "+41 79 302 67 27");

        assert!(PhoneNumber::parse(None, "not-a-number").is_err());
        assert!(PhoneNumber::parse(None, "  ").is_err());
    }

    #[test]
    fn forward_type_round_trips_known_and_unknown_values() {
        assert_eq!(ForwardType::from_wire("PULL"), ForwardType::Pull);
        assert_eq!(
            ForwardType::from_wire("HTTP_FORWARD_POST"),
            ForwardType::HttpForwardPost
        );
        assert_eq!(ForwardType::HttpForwardGet.as_str(), "HTTP_FORWARD_GET");

        let other = ForwardType::from_wire("SMPP_FORWARD");
        assert_eq!(other, ForwardType::Other("SMPP_FORWARD".to_owned()));
        assert_eq!(other.as_str(), "SMPP_FORWARD");
    }
}
