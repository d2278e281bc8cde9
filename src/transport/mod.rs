//! Transport layer: endpoint table and wire-format details (JSON bodies, query strings).

mod api_error;
mod endpoint;
mod message;
mod number;
mod price;

pub use api_error::decode_api_error;
pub use endpoint::{CONFIGURATION_KEY_PARAM, Endpoint, EndpointError, HttpMethod, NUMBER_KEY_PARAM};
pub use message::{
    decode_message_response, decode_message_status_results, encode_bulk_message_json,
    encode_message_json, encode_message_status_query,
};
pub use number::{
    decode_action_response, decode_config_response, decode_number_response,
    decode_search_numbers_response, encode_action_json, encode_rent_number_json,
    encode_search_numbers_query,
};
