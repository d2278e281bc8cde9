use serde::{Deserialize, Serialize};

use super::price::NumberPriceJson;
use crate::domain::{
    Action, ConfigResponse, ConfigurationKey, ForwardType, Number, NumberKey, NumberPrice,
    SearchNumberParams, SearchNumberResponse,
};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response contains an empty {field}")]
    EmptyKey { field: &'static str },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchNumberResponseJson {
    #[serde(default)]
    number_count: u64,
    #[serde(default)]
    numbers: Vec<NumberJson>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NumberJson {
    number_key: String,
    #[serde(default)]
    number: String,
    #[serde(default)]
    country: String,
    #[serde(default, rename = "type")]
    number_type: Option<String>,
    #[serde(default)]
    capabilities: Vec<String>,
    #[serde(default)]
    shared: bool,
    #[serde(default)]
    price: NumberPriceJson,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RentNumberJson<'a> {
    number_key: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigResponseJson {
    #[serde(default)]
    configuration_key: Option<String>,
    #[serde(default)]
    is_active: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActionJson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    action_key: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    forward_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    forward_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    callback_data: Option<String>,
}

pub fn encode_search_numbers_query(params: &SearchNumberParams) -> Vec<(String, String)> {
    let mut query = Vec::<(String, String)>::new();
    push_text(&mut query, "number", params.number.as_deref());
    push_text(&mut query, "capabilities", params.capabilities.as_deref());
    push_text(&mut query, "country", params.country.as_deref());
    push_count(&mut query, "limit", params.limit);
    push_count(&mut query, "page", params.page);
    query
}

fn push_text(query: &mut Vec<(String, String)>, key: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|it| !it.is_empty()) {
        query.push((key.to_owned(), value.to_owned()));
    }
}

fn push_count(query: &mut Vec<(String, String)>, key: &str, value: Option<u32>) {
    if let Some(value) = value.filter(|it| *it != 0) {
        query.push((key.to_owned(), value.to_string()));
    }
}

pub fn decode_search_numbers_response(json: &str) -> Result<SearchNumberResponse, TransportError> {
    let parsed: SearchNumberResponseJson = serde_json::from_str(json)?;
    let numbers = parsed
        .numbers
        .into_iter()
        .map(number_from_json)
        .collect::<Result<Vec<Number>, TransportError>>()?;
    Ok(SearchNumberResponse {
        number_count: parsed.number_count,
        numbers,
    })
}

pub fn encode_rent_number_json(number_key: &NumberKey) -> Result<Vec<u8>, TransportError> {
    Ok(serde_json::to_vec(&RentNumberJson {
        number_key: number_key.as_str(),
    })?)
}

pub fn decode_number_response(json: &str) -> Result<Number, TransportError> {
    let parsed: NumberJson = serde_json::from_str(json)?;
    number_from_json(parsed)
}

fn number_from_json(value: NumberJson) -> Result<Number, TransportError> {
    let number_key = NumberKey::new(value.number_key).map_err(|_| TransportError::EmptyKey {
        field: NumberKey::FIELD,
    })?;
    Ok(Number {
        number_key,
        number: value.number,
        country: value.country,
        number_type: value.number_type.filter(|it| !it.is_empty()),
        capabilities: value.capabilities,
        shared: value.shared,
        price: NumberPrice::from(value.price),
    })
}

pub fn decode_config_response(json: &str) -> Result<ConfigResponse, TransportError> {
    let parsed: ConfigResponseJson = serde_json::from_str(json)?;
    let configuration_key = match parsed.configuration_key.filter(|it| !it.trim().is_empty()) {
        Some(key) => Some(ConfigurationKey::new(key).map_err(|_| TransportError::EmptyKey {
            field: ConfigurationKey::FIELD,
        })?),
        None => None,
    };
    Ok(ConfigResponse {
        configuration_key,
        is_active: parsed.is_active,
    })
}

pub fn encode_action_json(action: &Action) -> Result<Vec<u8>, TransportError> {
    let body = ActionJson {
        action_key: action.action_key.clone(),
        forward_type: action.forward_type.as_ref().map(|it| it.as_str().to_owned()),
        forward_url: action.forward_url.clone(),
        callback_data: action.callback_data.clone(),
    };
    Ok(serde_json::to_vec(&body)?)
}

pub fn decode_action_response(json: &str) -> Result<Action, TransportError> {
    let parsed: ActionJson = serde_json::from_str(json)?;
    Ok(Action {
        action_key: parsed.action_key,
        forward_type: parsed
            .forward_type
            .filter(|it| !it.is_empty())
            .map(ForwardType::from_wire),
        forward_url: parsed.forward_url,
        callback_data: parsed.callback_data,
    })
}
