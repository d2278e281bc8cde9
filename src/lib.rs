//! Typed Rust client for the Infobip SMS and Numbers HTTP API.
//!
//! The crate has three layers: a domain layer of records and identifier rules,
//! a transport layer for the wire format (endpoint paths, JSON bodies, query
//! strings), and a small client layer that authenticates, sends and decodes.
//!
//! ```rust,no_run
//! use infobip::{Auth, InfobipClient, Message};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), infobip::InfobipError> {
//!     let client = InfobipClient::new(Auth::api_key("...")?);
//!     let message = Message::new("InfoSMS", "41793026727", "hello");
//!     let response = client.send_single_message(&message).await?;
//!     println!("{:?}", response.messages);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    Auth, BoxError, BoxFuture, HttpRequest, HttpResponse, HttpTransport, InfobipClient,
    InfobipClientBuilder, InfobipError, ReqwestTransport,
};
pub use domain::{
    Action, ApiKey, BulkMessage, ConfigResponse, ConfigurationKey, Destination, ForwardType,
    Message, MessageId, MessageInfo, MessageResponse, MessageStatus, MessageStatusWithId, Number,
    NumberKey, NumberPrice, Password, PhoneNumber, SearchNumberParams, SearchNumberResponse,
    Username, ValidationError,
};
pub use transport::{Endpoint, EndpointError, HttpMethod};
