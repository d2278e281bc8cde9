use crate::domain::validation::{
    ValidationError, validate_destinations, validate_sender, validate_to,
};
use crate::domain::value::{ForwardType, PhoneNumber};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// One recipient of a message sent to a destination list.
pub struct Destination {
    /// Optional client-side message id; Infobip assigns one when absent.
    pub message_id: Option<String>,
    pub to: String,
}

impl Destination {
    pub fn new(to: impl Into<String>) -> Self {
        Self {
            message_id: None,
            to: to.into(),
        }
    }

    /// Destination for a parsed phone number, in the digits-only international form.
    pub fn phone(phone: &PhoneNumber) -> Self {
        Self::new(phone.recipient())
    }

    pub fn with_message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = Some(message_id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// A text message from one sender to either a flat `to` recipient or a destination list.
///
/// Nothing is checked at construction time; [`Message::validate`] runs before sending.
pub struct Message {
    pub from: String,
    pub destinations: Vec<Destination>,
    /// Flat recipient, used instead of (or alongside) `destinations`. `None` or `""` omits it.
    pub to: Option<String>,
    pub text: String,
    pub transliteration: Option<String>,
    pub language_code: Option<String>,
    pub notify_url: Option<String>,
}

impl Message {
    /// Message addressed through the flat `to` field.
    pub fn new(from: impl Into<String>, to: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: Some(to.into()),
            text: text.into(),
            ..Default::default()
        }
    }

    /// Message addressed to a list of destinations.
    pub fn to_destinations(
        from: impl Into<String>,
        destinations: Vec<Destination>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            destinations,
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_transliteration(mut self, transliteration: impl Into<String>) -> Self {
        self.transliteration = Some(transliteration.into());
        self
    }

    pub fn with_language_code(mut self, language_code: impl Into<String>) -> Self {
        self.language_code = Some(language_code.into());
        self
    }

    pub fn with_notify_url(mut self, notify_url: impl Into<String>) -> Self {
        self.notify_url = Some(notify_url.into());
        self
    }

    /// Validate the sender, then each destination, then the flat `to` field.
    ///
    /// The first failure is returned.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_sender(&self.from)?;
        validate_destinations(self.destinations.iter().map(|it| it.to.as_str()))?;
        validate_to(self.to.as_deref().unwrap_or_default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Several independent messages sent in one request, under an optional bulk id.
pub struct BulkMessage {
    pub bulk_id: Option<String>,
    pub messages: Vec<Message>,
}

impl BulkMessage {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            bulk_id: None,
            messages,
        }
    }

    pub fn with_bulk_id(mut self, bulk_id: impl Into<String>) -> Self {
        self.bulk_id = Some(bulk_id.into());
        self
    }

    /// Validate messages in order, stopping at the first invalid one.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.messages.iter().try_for_each(Message::validate)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Filters for `numbers/1/numbers/available`. Unset fields are left out of the query.
pub struct SearchNumberParams {
    pub number: Option<String>,
    pub capabilities: Option<String>,
    pub country: Option<String>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Forwarding rule attached to a number configuration.
///
/// Used both as the request body and as the created record returned by Infobip.
pub struct Action {
    /// Assigned by Infobip; leave `None` when creating.
    pub action_key: Option<String>,
    pub forward_type: Option<ForwardType>,
    pub forward_url: Option<String>,
    pub callback_data: Option<String>,
}

impl Action {
    /// Store inbound messages for later retrieval.
    pub fn pull() -> Self {
        Self::with_type(ForwardType::Pull, None)
    }

    /// Push inbound messages to `url` with HTTP POST.
    pub fn forward_post(url: impl Into<String>) -> Self {
        Self::with_type(ForwardType::HttpForwardPost, Some(url.into()))
    }

    /// Push inbound messages to `url` with HTTP GET.
    pub fn forward_get(url: impl Into<String>) -> Self {
        Self::with_type(ForwardType::HttpForwardGet, Some(url.into()))
    }

    pub fn with_callback_data(mut self, callback_data: impl Into<String>) -> Self {
        self.callback_data = Some(callback_data.into());
        self
    }

    fn with_type(forward_type: ForwardType, forward_url: Option<String>) -> Self {
        Self {
            action_key: None,
            forward_type: Some(forward_type),
            forward_url,
            callback_data: None,
        }
    }
}
