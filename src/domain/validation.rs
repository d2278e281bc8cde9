use std::fmt;

/// Longest numeric sender or recipient accepted by Infobip.
pub const NUMERIC_MAX_LEN: usize = 14;
/// Longest alphanumeric sender accepted by Infobip.
pub const ALPHANUMERIC_MAX_LEN: usize = 13;
/// Identifiers must be strictly longer than this.
pub const MIN_LEN_EXCLUSIVE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    FromNonAlphanumeric,
    FromAlphanumeric,
    DestinationNonAlphanumeric { index: usize },
    ToNonAlphanumeric,
    InvalidPhoneNumber { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::FromNonAlphanumeric => write!(
                f,
                "non-alphanumeric 'From' value must be between 3 and 14 numbers"
            ),
            Self::FromAlphanumeric => write!(
                f,
                "alphanumeric 'From' value must be between 3 and 13 characters"
            ),
            Self::DestinationNonAlphanumeric { index } => write!(
                f,
                "non-alphanumeric 'Destination' value must be between 3 and 14 numbers (destination #{index})"
            ),
            Self::ToNonAlphanumeric => write!(
                f,
                "non-alphanumeric 'To' value must be between 3 and 14 numbers"
            ),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// `true` when every character is an ASCII digit. Vacuously `true` for `""`.
pub fn is_numeric(value: &str) -> bool {
    value.bytes().all(|b| b.is_ascii_digit())
}

/// `true` when `low < len(value) <= high`, counting UTF-8 bytes.
pub fn is_valid_range(value: &str, low: usize, high: usize) -> bool {
    let len = value.len();
    len > low && len <= high
}

/// Check a sender (`from`) against the numeric or alphanumeric length rule.
pub fn validate_sender(from: &str) -> Result<(), ValidationError> {
    if from.is_empty() {
        return Err(ValidationError::Empty { field: "from" });
    }
    if is_numeric(from) {
        if !is_valid_range(from, MIN_LEN_EXCLUSIVE, NUMERIC_MAX_LEN) {
            return Err(ValidationError::FromNonAlphanumeric);
        }
    } else if !is_valid_range(from, MIN_LEN_EXCLUSIVE, ALPHANUMERIC_MAX_LEN) {
        return Err(ValidationError::FromAlphanumeric);
    }
    Ok(())
}

/// Check every destination in order; the first numeric one out of range fails.
pub fn validate_destinations<'a>(
    destinations: impl IntoIterator<Item = &'a str>,
) -> Result<(), ValidationError> {
    for (index, to) in destinations.into_iter().enumerate() {
        if is_numeric(to) && !is_valid_range(to, MIN_LEN_EXCLUSIVE, NUMERIC_MAX_LEN) {
            return Err(ValidationError::DestinationNonAlphanumeric { index });
        }
    }
    Ok(())
}

/// Check the flat `to` field. An empty value means the field is unused.
pub fn validate_to(to: &str) -> Result<(), ValidationError> {
    if to.is_empty() {
        return Ok(());
    }
    if is_numeric(to) && !is_valid_range(to, MIN_LEN_EXCLUSIVE, NUMERIC_MAX_LEN) {
        return Err(ValidationError::ToNonAlphanumeric);
    }
    Ok(())
}
