//! Client layer: authentication, request execution and one method per Infobip endpoint.

mod auth;
mod http;

use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

use tracing::{Span, debug, instrument, warn};
use url::Url;

use crate::domain::{
    Action, BulkMessage, ConfigResponse, ConfigurationKey, Message, MessageId, MessageResponse,
    MessageStatusWithId, Number, NumberKey, SearchNumberParams, SearchNumberResponse,
    ValidationError,
};
use crate::transport::{self, CONFIGURATION_KEY_PARAM, Endpoint, HttpMethod, NUMBER_KEY_PARAM};

pub use auth::{Auth, ENV_API_KEY, ENV_PASSWORD, ENV_USERNAME};
pub use http::{BoxError, BoxFuture, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};

pub const DEFAULT_BASE_URL: &str = "https://api.infobip.com/";
pub const ENV_BASE_URL: &str = "INFOBIP_BASE_URL";

const CONTENT_TYPE_JSON: &str = "application/json";

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`InfobipClient`].
///
/// Validation and authentication errors are raised before anything is sent.
/// Nothing is retried.
pub enum InfobipError {
    /// Neither an API key nor a username/password pair is configured.
    #[error("no authentication configured: set an API key or a username and password")]
    NoAuthentication,

    /// A message failed the sender/recipient rules.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A status query returned other than exactly one result.
    #[error("status for message {message_id} not found: expected exactly 1 result, got {results}")]
    StatusNotFound { message_id: String, results: usize },

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// Non-successful HTTP status code without a recognizable Infobip error body.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Infobip rejected the request with a `requestError` body.
    #[error("API error ({status}): {message_id}: {text}")]
    Api {
        status: u16,
        message_id: String,
        text: String,
    },

    /// Response body could not be decoded into the expected record.
    #[error("decode error: {0}")]
    Decode(#[source] BoxError),

    /// Request body could not be encoded.
    #[error("encode error: {0}")]
    Encode(#[source] BoxError),

    /// The base URL is invalid or cannot carry the endpoint path.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[source] BoxError),
}

#[derive(Clone)]
/// Builder for [`InfobipClient`].
///
/// Use this when you need to customize the base URL, timeout, user-agent or transport.
pub struct InfobipClientBuilder {
    auth: Auth,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl InfobipClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(auth: Auth) -> Self {
        Self {
            auth,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
            transport: None,
        }
    }

    /// Builder configured from `INFOBIP_API_KEY`, `INFOBIP_USERNAME`, `INFOBIP_PASSWORD`
    /// and `INFOBIP_BASE_URL`.
    pub fn from_env() -> Self {
        let builder = Self::new(Auth::from_env());
        match std::env::var(ENV_BASE_URL) {
            Ok(base_url) if !base_url.trim().is_empty() => builder.base_url(base_url),
            _ => builder,
        }
    }

    /// Override the base URL every endpoint path is appended to.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    ///
    /// Ignored when a custom [`transport`](Self::transport) is set.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    ///
    /// Ignored when a custom [`transport`](Self::transport) is set.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Send requests through `transport` instead of a fresh `reqwest` client.
    ///
    /// The same transport may back several clients.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build an [`InfobipClient`].
    pub fn build(self) -> Result<InfobipClient, InfobipError> {
        Url::parse(&self.base_url).map_err(|err| InfobipError::InvalidUrl(Box::new(err)))?;

        let http = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder
                    .build()
                    .map_err(|err| InfobipError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport::new(client))
            }
        };

        Ok(InfobipClient {
            auth: self.auth,
            base_url: self.base_url,
            http,
        })
    }
}

#[derive(Clone)]
/// High-level Infobip client.
///
/// Each call validates its input, performs exactly one HTTP round trip and decodes the
/// JSON response. The client holds no per-call state and can be shared across tasks.
pub struct InfobipClient {
    auth: Auth,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl InfobipClient {
    /// Create a client using the default base URL (`https://api.infobip.com/`).
    ///
    /// For more customization, use [`InfobipClient::builder`].
    pub fn new(auth: Auth) -> Self {
        Self {
            auth,
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport::default()),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(auth: Auth) -> InfobipClientBuilder {
        InfobipClientBuilder::new(auth)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one message (`POST sms/1/text/single`).
    ///
    /// Errors:
    /// - [`InfobipError::Validation`] when the sender or a recipient breaks the length rules,
    /// - [`InfobipError::NoAuthentication`] when no credentials are configured.
    pub async fn send_single_message(
        &self,
        message: &Message,
    ) -> Result<MessageResponse, InfobipError> {
        message.validate().inspect_err(log_validation)?;
        let body = transport::encode_message_json(message)
            .map_err(|err| InfobipError::Encode(Box::new(err)))?;

        self.execute(
            Endpoint::SingleMessage,
            &[],
            Vec::new(),
            Some(body),
            transport::decode_message_response,
        )
        .await
    }

    /// Send several messages in one request (`POST sms/1/text/advanced`).
    ///
    /// Messages are validated in order; the first invalid one aborts the call.
    pub async fn send_bulk_message(
        &self,
        bulk: &BulkMessage,
    ) -> Result<MessageResponse, InfobipError> {
        bulk.validate().inspect_err(log_validation)?;
        let body = transport::encode_bulk_message_json(bulk)
            .map_err(|err| InfobipError::Encode(Box::new(err)))?;

        self.execute(
            Endpoint::BulkMessage,
            &[],
            Vec::new(),
            Some(body),
            transport::decode_message_response,
        )
        .await
    }

    /// Fetch the delivery report for one message (`GET sms/1/reports?messageId=`).
    ///
    /// Fails with [`InfobipError::StatusNotFound`] unless the report holds exactly one entry.
    pub async fn get_message_status(
        &self,
        message_id: &MessageId,
    ) -> Result<MessageStatusWithId, InfobipError> {
        let results = self
            .execute(
                Endpoint::MessageStatus,
                &[],
                transport::encode_message_status_query(message_id),
                None,
                transport::decode_message_status_results,
            )
            .await?;

        match <[MessageStatusWithId; 1]>::try_from(results) {
            Ok([status]) => Ok(status),
            Err(results) => Err(InfobipError::StatusNotFound {
                message_id: message_id.as_str().to_owned(),
                results: results.len(),
            }),
        }
    }

    /// Search purchasable numbers (`GET numbers/1/numbers/available`).
    pub async fn search_numbers(
        &self,
        params: &SearchNumberParams,
    ) -> Result<SearchNumberResponse, InfobipError> {
        self.execute(
            Endpoint::SearchNumbers,
            &[],
            transport::encode_search_numbers_query(params),
            None,
            transport::decode_search_numbers_response,
        )
        .await
    }

    /// Rent the number identified by `number_key` (`POST numbers/1/numbers`).
    pub async fn rent_number(&self, number_key: &NumberKey) -> Result<Number, InfobipError> {
        let body = transport::encode_rent_number_json(number_key)
            .map_err(|err| InfobipError::Encode(Box::new(err)))?;

        self.execute(
            Endpoint::RentNumber,
            &[],
            Vec::new(),
            Some(body),
            transport::decode_number_response,
        )
        .await
    }

    /// Create a forwarding configuration on a rented number.
    pub async fn create_number_configuration(
        &self,
        number_key: &NumberKey,
    ) -> Result<ConfigResponse, InfobipError> {
        self.execute(
            Endpoint::CreateConfiguration,
            &[(NUMBER_KEY_PARAM, number_key.as_str())],
            Vec::new(),
            None,
            transport::decode_config_response,
        )
        .await
    }

    /// Attach a forwarding action to an existing configuration of a number.
    pub async fn create_number_action(
        &self,
        action: &Action,
        number_key: &NumberKey,
        configuration_key: &ConfigurationKey,
    ) -> Result<Action, InfobipError> {
        let body = transport::encode_action_json(action)
            .map_err(|err| InfobipError::Encode(Box::new(err)))?;

        self.execute(
            Endpoint::CreateAction,
            &[
                (NUMBER_KEY_PARAM, number_key.as_str()),
                (CONFIGURATION_KEY_PARAM, configuration_key.as_str()),
            ],
            Vec::new(),
            Some(body),
            transport::decode_action_response,
        )
        .await
    }

    /// Build, authenticate and send one request, then decode a 2xx body with `decode`.
    #[instrument(
        name = "infobip_request",
        skip_all,
        fields(
            http.method = %endpoint.method(),
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
        )
    )]
    async fn execute<T, E>(
        &self,
        endpoint: Endpoint,
        path_params: &[(&str, &str)],
        query: Vec<(String, String)>,
        body: Option<Vec<u8>>,
        decode: impl FnOnce(&str) -> Result<T, E>,
    ) -> Result<T, InfobipError>
    where
        E: StdError + Send + Sync + 'static,
    {
        let authorization = self.auth.authorization().ok_or_else(|| {
            debug!("refusing to send request without credentials");
            InfobipError::NoAuthentication
        })?;

        let base =
            Url::parse(&self.base_url).map_err(|err| InfobipError::InvalidUrl(Box::new(err)))?;
        let url = endpoint
            .url(&base, path_params, &query)
            .map_err(|err| InfobipError::InvalidUrl(Box::new(err)))?;
        Span::current().record("http.url", url.as_str());

        let mut headers = vec![
            ("Authorization".to_owned(), authorization),
            ("Accept".to_owned(), CONTENT_TYPE_JSON.to_owned()),
        ];
        if endpoint.method() == HttpMethod::Post {
            headers.push(("Content-Type".to_owned(), CONTENT_TYPE_JSON.to_owned()));
        }

        let request = HttpRequest {
            method: endpoint.method(),
            url,
            headers,
            body,
        };

        let response = self.http.send(request).await.map_err(|err| {
            warn!(error = %err, "request to Infobip failed");
            InfobipError::Transport(err)
        })?;
        Span::current().record("http.status_code", response.status);

        if !(200..=299).contains(&response.status) {
            return Err(status_error(response));
        }

        debug!(bytes = response.body.len(), "decoding response body");
        decode(&response.body).map_err(|err| InfobipError::Decode(Box::new(err)))
    }
}

fn status_error(response: HttpResponse) -> InfobipError {
    if let Some(api) = transport::decode_api_error(&response.body) {
        debug!(status = response.status, message_id = %api.message_id, "Infobip rejected request");
        return InfobipError::Api {
            status: response.status,
            message_id: api.message_id,
            text: api.text,
        };
    }

    debug!(status = response.status, "unexpected HTTP status");
    let body = if response.body.trim().is_empty() {
        None
    } else {
        Some(response.body)
    };
    InfobipError::HttpStatus {
        status: response.status,
        body,
    }
}

fn log_validation(err: &ValidationError) {
    debug!(error = %err, "message rejected before sending");
}
