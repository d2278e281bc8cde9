//! Domain layer: request/response records, identifier rules and validated newtypes (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{Action, BulkMessage, Destination, Message, SearchNumberParams};
pub use response::{
    ConfigResponse, MessageInfo, MessageResponse, MessageStatus, MessageStatusWithId, Number,
    NumberPrice, SearchNumberResponse,
};
pub use validation::{
    ALPHANUMERIC_MAX_LEN, MIN_LEN_EXCLUSIVE, NUMERIC_MAX_LEN, ValidationError, is_numeric,
    is_valid_range, validate_destinations, validate_sender, validate_to,
};
pub use value::{
    ApiKey, ConfigurationKey, ForwardType, MessageId, NumberKey, Password, PhoneNumber, Username,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_rejects_empty() {
        assert!(matches!(
            ApiKey::new("   "),
            Err(ValidationError::Empty {
                field: ApiKey::FIELD
            })
        ));
    }

    #[test]
    fn single_message_scenarios() {
        assert_eq!(Message::new("1234567890", "41793026727", "hi").validate(), Ok(()));
        assert_eq!(
            Message::new("ABC", "41793026727", "hi").validate(),
            Err(ValidationError::FromAlphanumeric)
        );
        assert_eq!(
            Message::to_destinations("InfoSMS", vec![Destination::new("12")], "hi").validate(),
            Err(ValidationError::DestinationNonAlphanumeric { index: 0 })
        );
    }

    #[test]
    fn phone_number_parses_with_region_and_trims() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::DE), " 030 123456 ").unwrap();
        assert_eq!(pn.raw(), "030 123456");
        assert_eq!(pn.e164(), "+4930123456");
        assert_eq!(Destination::phone(&pn).to, "4930123456");
    }
}
