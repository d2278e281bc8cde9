use crate::domain::value::{ConfigurationKey, NumberKey};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of a single or bulk send. Message order mirrors the request.
pub struct MessageResponse {
    pub bulk_id: Option<String>,
    pub messages: Vec<MessageInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageInfo {
    pub message_id: String,
    pub to: String,
    pub status: MessageStatus,
    pub sms_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Delivery status as reported by Infobip.
pub struct MessageStatus {
    pub id: i32,
    pub action: Option<String>,
    pub group_id: i32,
    pub group_name: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Status report entry for one message.
pub struct MessageStatusWithId {
    pub bulk_id: Option<String>,
    pub message_id: String,
    pub to: String,
    pub status: MessageStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNumberResponse {
    pub number_count: u64,
    pub numbers: Vec<Number>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A purchasable or rented number.
pub struct Number {
    pub number_key: NumberKey,
    pub number: String,
    pub country: String,
    pub number_type: Option<String>,
    pub capabilities: Vec<String>,
    pub shared: bool,
    pub price: NumberPrice,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Pricing breakdown. Amounts keep the exact text Infobip sent (`"1.50"` stays `"1.50"`).
pub struct NumberPrice {
    pub price_per_month: Option<String>,
    pub setup_price: Option<String>,
    pub initial_month_price: Option<String>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Forwarding configuration created on a number.
pub struct ConfigResponse {
    pub configuration_key: Option<ConfigurationKey>,
    pub is_active: bool,
}
