use std::fmt;

use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EndpointError {
    #[error("base URL cannot be used as a base: {0}")]
    CannotBeABase(String),

    #[error("missing path parameter: {name}")]
    MissingPathParam { name: String },

    #[error("path parameter {name} cannot be a dot segment: {value:?}")]
    DotSegment { name: String, value: String },
}

/// Infobip endpoints used by the client, relative to the configured base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    SingleMessage,
    BulkMessage,
    SearchNumbers,
    RentNumber,
    MessageStatus,
    CreateConfiguration,
    CreateAction,
}

pub const NUMBER_KEY_PARAM: &str = "numberKey";
pub const CONFIGURATION_KEY_PARAM: &str = "configurationKey";

impl Endpoint {
    pub fn method(self) -> HttpMethod {
        match self {
            Self::SearchNumbers | Self::MessageStatus => HttpMethod::Get,
            Self::SingleMessage
            | Self::BulkMessage
            | Self::RentNumber
            | Self::CreateConfiguration
            | Self::CreateAction => HttpMethod::Post,
        }
    }

    pub fn path_template(self) -> &'static str {
        match self {
            Self::SingleMessage => "sms/1/text/single",
            Self::BulkMessage => "sms/1/text/advanced",
            Self::SearchNumbers => "numbers/1/numbers/available",
            Self::RentNumber => "numbers/1/numbers",
            Self::MessageStatus => "sms/1/reports",
            Self::CreateConfiguration => "numbers/1/numbers/{numberKey}/configurations",
            Self::CreateAction => {
                "numbers/1/numbers/{numberKey}/configurations/{configurationKey}/actions"
            }
        }
    }

    /// Resolve the endpoint against `base`.
    ///
    /// `{name}` placeholders are replaced by the matching entry in `params`, percent-encoded
    /// as a single path segment. `.` and `..` are rejected since URL normalisation would
    /// drop them. `query` pairs are appended form-urlencoded.
    pub fn url(
        self,
        base: &Url,
        params: &[(&str, &str)],
        query: &[(String, String)],
    ) -> Result<Url, EndpointError> {
        let mut url = base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| EndpointError::CannotBeABase(base.to_string()))?;
            segments.pop_if_empty();
            for segment in self.path_template().split('/') {
                match segment.strip_prefix('{').and_then(|it| it.strip_suffix('}')) {
                    Some(name) => {
                        let value = params
                            .iter()
                            .find(|(key, _)| *key == name)
                            .map(|(_, value)| *value)
                            .ok_or_else(|| EndpointError::MissingPathParam {
                                name: name.to_owned(),
                            })?;
                        if is_dot_segment(value) {
                            return Err(EndpointError::DotSegment {
                                name: name.to_owned(),
                                value: value.to_owned(),
                            });
                        }
                        segments.push(value);
                    }
                    None => {
                        segments.push(segment);
                    }
                }
            }
        }

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

fn is_dot_segment(value: &str) -> bool {
    let unescaped = value.to_ascii_lowercase().replace("%2e", ".");
    matches!(unescaped.as_str(), "." | "..")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://api.infobip.com/").unwrap()
    }

    #[test]
    fn table_matches_provider_paths() {
        let expected = [
            (Endpoint::SingleMessage, HttpMethod::Post, "sms/1/text/single"),
            (Endpoint::BulkMessage, HttpMethod::Post, "sms/1/text/advanced"),
            (Endpoint::SearchNumbers, HttpMethod::Get, "numbers/1/numbers/available"),
            (Endpoint::RentNumber, HttpMethod::Post, "numbers/1/numbers"),
            (Endpoint::MessageStatus, HttpMethod::Get, "sms/1/reports"),
        ];
        for (endpoint, method, path) in expected {
            assert_eq!(endpoint.method(), method);
            assert_eq!(endpoint.path_template(), path);
        }
    }

    #[test]
    fn url_appends_path_to_base_with_or_without_trailing_slash() {
        let url = Endpoint::SingleMessage.url(&base(), &[], &[]).unwrap();
        assert_eq!(url.as_str(), "https://api.infobip.com/sms/1/text/single");

        let proxied = Url::parse("https://gw.example.invalid/infobip").unwrap();
        let url = Endpoint::RentNumber.url(&proxied, &[], &[]).unwrap();
        assert_eq!(url.as_str(), "https://gw.example.invalid/infobip/numbers/1/numbers");
    }

    #[test]
    fn url_substitutes_and_encodes_path_params() {
        let url = Endpoint::CreateAction
            .url(
                &base(),
                &[(NUMBER_KEY_PARAM, "NK/1"), (CONFIGURATION_KEY_PARAM, "CK 2")],
                &[],
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.infobip.com/numbers/1/numbers/NK%2F1/configurations/CK%202/actions"
        );
    }

    #[test]
    fn url_appends_query_pairs() {
        let url = Endpoint::MessageStatus
            .url(&base(), &[], &[("messageId".to_owned(), "a b&c".to_owned())])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.infobip.com/sms/1/reports?messageId=a+b%26c"
        );
    }

    #[test]
    fn url_requires_every_placeholder() {
        let err = Endpoint::CreateConfiguration
            .url(&base(), &[], &[])
            .unwrap_err();
        match err {
            EndpointError::MissingPathParam { name } => assert_eq!(name, NUMBER_KEY_PARAM),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn url_rejects_dot_segment_keys() {
        let err = Endpoint::CreateConfiguration
            .url(&base(), &[(NUMBER_KEY_PARAM, "..")], &[])
            .unwrap_err();
        match err {
            EndpointError::DotSegment { name, value } => {
                assert_eq!(name, NUMBER_KEY_PARAM);
                assert_eq!(value, "..");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = Endpoint::CreateAction
            .url(
                &base(),
                &[(NUMBER_KEY_PARAM, "NK-1"), (CONFIGURATION_KEY_PARAM, ".")],
                &[],
            )
            .unwrap_err();
        assert!(matches!(
            err,
            EndpointError::DotSegment { ref name, .. } if name == CONFIGURATION_KEY_PARAM
        ));

        for value in ["%2e", "%2E%2e", ".%2E"] {
            let err = Endpoint::CreateConfiguration
                .url(&base(), &[(NUMBER_KEY_PARAM, value)], &[])
                .unwrap_err();
            assert!(matches!(err, EndpointError::DotSegment { .. }), "{value}");
        }

        let url = Endpoint::CreateAction
            .url(
                &base(),
                &[(NUMBER_KEY_PARAM, "..."), (CONFIGURATION_KEY_PARAM, ".hidden")],
                &[],
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.infobip.com/numbers/1/numbers/.../configurations/.hidden/actions"
        );
    }
}
