use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorEnvelopeJson {
    request_error: RequestErrorJson,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RequestErrorJson {
    #[serde(default)]
    service_exception: Option<ExceptionJson>,
    #[serde(default)]
    policy_exception: Option<ExceptionJson>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExceptionJson {
    #[serde(default)]
    message_id: String,
    #[serde(default)]
    text: String,
}

/// Provider error extracted from a non-2xx response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorBody {
    pub message_id: String,
    pub text: String,
}

/// Decode Infobip's `requestError` envelope. Returns `None` for any other body.
pub fn decode_api_error(body: &str) -> Option<ApiErrorBody> {
    let parsed: ErrorEnvelopeJson = serde_json::from_str(body).ok()?;
    let exception = parsed
        .request_error
        .service_exception
        .or(parsed.request_error.policy_exception)?;
    Some(ApiErrorBody {
        message_id: exception.message_id,
        text: exception.text,
    })
}
