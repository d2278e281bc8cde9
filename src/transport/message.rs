use serde::{Deserialize, Serialize};

use crate::domain::{
    BulkMessage, Destination, Message, MessageId, MessageInfo, MessageResponse, MessageStatus,
    MessageStatusWithId,
};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MessageJson<'a> {
    from: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    destinations: Vec<DestinationJson<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<&'a str>,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    transliteration: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language_code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notify_url: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DestinationJson<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    message_id: Option<&'a str>,
    to: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BulkMessageJson<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    bulk_id: Option<&'a str>,
    messages: Vec<MessageJson<'a>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageResponseJson {
    #[serde(default)]
    bulk_id: Option<String>,
    #[serde(default)]
    messages: Vec<MessageInfoJson>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageInfoJson {
    #[serde(default)]
    message_id: String,
    #[serde(default)]
    to: String,
    #[serde(default)]
    status: MessageStatusJson,
    #[serde(default)]
    sms_count: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct MessageStatusJson {
    id: i32,
    action: Option<String>,
    group_id: i32,
    group_name: String,
    name: String,
    description: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageStatusResponseJson {
    #[serde(default)]
    results: Vec<MessageStatusWithIdJson>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageStatusWithIdJson {
    #[serde(default)]
    bulk_id: Option<String>,
    #[serde(default)]
    message_id: String,
    #[serde(default)]
    to: String,
    #[serde(default)]
    status: MessageStatusJson,
}

impl From<MessageStatusJson> for MessageStatus {
    fn from(value: MessageStatusJson) -> Self {
        Self {
            id: value.id,
            action: value.action.filter(|it| !it.is_empty()),
            group_id: value.group_id,
            group_name: value.group_name,
            name: value.name,
            description: value.description,
        }
    }
}

fn message_json(message: &Message) -> MessageJson<'_> {
    MessageJson {
        from: &message.from,
        destinations: message.destinations.iter().map(destination_json).collect(),
        to: message.to.as_deref().filter(|it| !it.is_empty()),
        text: &message.text,
        transliteration: message.transliteration.as_deref(),
        language_code: message.language_code.as_deref(),
        notify_url: message.notify_url.as_deref(),
    }
}

fn destination_json(destination: &Destination) -> DestinationJson<'_> {
    DestinationJson {
        message_id: destination.message_id.as_deref(),
        to: &destination.to,
    }
}

pub fn encode_message_json(message: &Message) -> Result<Vec<u8>, TransportError> {
    Ok(serde_json::to_vec(&message_json(message))?)
}

pub fn encode_bulk_message_json(bulk: &BulkMessage) -> Result<Vec<u8>, TransportError> {
    let body = BulkMessageJson {
        bulk_id: bulk.bulk_id.as_deref(),
        messages: bulk.messages.iter().map(message_json).collect(),
    };
    Ok(serde_json::to_vec(&body)?)
}

pub fn decode_message_response(json: &str) -> Result<MessageResponse, TransportError> {
    let parsed: MessageResponseJson = serde_json::from_str(json)?;
    Ok(MessageResponse {
        bulk_id: parsed.bulk_id,
        messages: parsed
            .messages
            .into_iter()
            .map(|info| MessageInfo {
                message_id: info.message_id,
                to: info.to,
                status: info.status.into(),
                sms_count: info.sms_count,
            })
            .collect(),
    })
}

pub fn encode_message_status_query(message_id: &MessageId) -> Vec<(String, String)> {
    vec![(MessageId::FIELD.to_owned(), message_id.as_str().to_owned())]
}

/// Decode a status report into its result entries, in response order.
pub fn decode_message_status_results(
    json: &str,
) -> Result<Vec<MessageStatusWithId>, TransportError> {
    let parsed: MessageStatusResponseJson = serde_json::from_str(json)?;
    Ok(parsed
        .results
        .into_iter()
        .map(|result| MessageStatusWithId {
            bulk_id: result.bulk_id,
            message_id: result.message_id,
            to: result.to,
            status: result.status.into(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn as_value(bytes: &[u8]) -> Value {
        serde_json::from_slice(bytes).unwrap()
    }

    #[test]
    fn encode_single_message_omits_unset_fields() {
        let message = Message::new("InfoSMS", "41793026727", "Hello");
        let body = as_value(&encode_message_json(&message).unwrap());
        assert_eq!(
            body,
            json!({ "from": "InfoSMS", "to": "41793026727", "text": "Hello" })
        );
    }

    #[test]
    fn encode_message_with_destinations_and_options() {
        let message = Message::to_destinations(
            "InfoSMS",
            vec![
                Destination::new("41793026727").with_message_id("MSG-1"),
                Destination::new("41793026834"),
            ],
            "Grüße",
        )
        .with_transliteration("TURKISH")
        .with_language_code("TR")
        .with_notify_url("https://example.invalid/dlr");

        let body = as_value(&encode_message_json(&message).unwrap());
        assert_eq!(
            body,
            json!({
                "from": "InfoSMS",
                "destinations": [
                    { "messageId": "MSG-1", "to": "41793026727" },
                    { "to": "41793026834" }
                ],
                "text": "Grüße",
                "transliteration": "TURKISH",
                "languageCode": "TR",
                "notifyUrl": "https://example.invalid/dlr"
            })
        );
    }

    #[test]
    fn encode_empty_flat_to_is_omitted() {
        let message = Message::new("InfoSMS", "", "Hello");
        let body = as_value(&encode_message_json(&message).unwrap());
        assert!(body.get("to").is_none());
    }

    #[test]
    fn encode_bulk_keeps_message_order() {
        let bulk = BulkMessage::new(vec![
            Message::new("InfoSMS", "41793026727", "first"),
            Message::new("InfoSMS", "41793026834", "second"),
        ])
        .with_bulk_id("BULK-7");

        let body = as_value(&encode_bulk_message_json(&bulk).unwrap());
        assert_eq!(body["bulkId"], "BULK-7");
        assert_eq!(body["messages"][0]["text"], "first");
        assert_eq!(body["messages"][1]["text"], "second");

        let body = as_value(&encode_bulk_message_json(&BulkMessage::default()).unwrap());
        assert_eq!(body, json!({ "messages": [] }));
    }

    #[test]
    fn decode_message_response_maps_fields() {
        let json = r#"
        {
          "bulkId": "2034072219640523072",
          "messages": [
            {
              "to": "41793026727",
              "status": {
                "groupId": 1,
                "groupName": "PENDING",
                "id": 26,
                "name": "MESSAGE_ACCEPTED",
                "description": "Message sent to next instance"
              },
              "smsCount": 1,
              "messageId": "2250be2d4219-3af1-78856-aabe-1362af1edfd2"
            }
          ]
        }
        "#;

        let response = decode_message_response(json).unwrap();
        assert_eq!(response.bulk_id.as_deref(), Some("2034072219640523072"));
        assert_eq!(response.messages.len(), 1);

        let info = &response.messages[0];
        assert_eq!(info.message_id, "2250be2d4219-3af1-78856-aabe-1362af1edfd2");
        assert_eq!(info.to, "41793026727");
        assert_eq!(info.sms_count, 1);
        assert_eq!(info.status.id, 26);
        assert_eq!(info.status.group_name, "PENDING");
        assert_eq!(info.status.action, None);
    }

    #[test]
    fn decode_message_response_rejects_invalid_json() {
        assert!(matches!(
            decode_message_response("{ not json }"),
            Err(TransportError::Json(_))
        ));
    }

    #[test]
    fn decode_status_results_keeps_every_entry() {
        let json = r#"
        {
          "results": [
            {
              "bulkId": "BULK-1",
              "messageId": "MSG-1",
              "to": "41793026727",
              "status": {
                "groupId": 3,
                "groupName": "DELIVERED",
                "id": 5,
                "name": "DELIVERED_TO_HANDSET",
                "description": "Message delivered to handset",
                "action": "NONE"
              }
            },
            { "messageId": "MSG-2" }
          ]
        }
        "#;

        let results = decode_message_status_results(json).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].bulk_id.as_deref(), Some("BULK-1"));
        assert_eq!(results[0].status.name, "DELIVERED_TO_HANDSET");
        assert_eq!(results[0].status.action.as_deref(), Some("NONE"));
        assert_eq!(results[1].message_id, "MSG-2");
        assert_eq!(results[1].status, MessageStatus::default());
    }

    #[test]
    fn entries_missing_id_or_status_decode_with_defaults() {
        let json = r#"
        {
          "bulkId": "BULK-1",
          "messages": [
            { "to": "41793026727", "messageId": "MSG-1", "status": { "groupId": 1, "name": "PENDING_ENROUTE" } },
            { "to": "123" }
          ]
        }
        "#;
        let response = decode_message_response(json).unwrap();
        assert_eq!(response.messages.len(), 2);
        assert_eq!(response.messages[0].status.name, "PENDING_ENROUTE");
        assert_eq!(response.messages[1].message_id, "");
        assert_eq!(response.messages[1].to, "123");
        assert_eq!(response.messages[1].status, MessageStatus::default());
        assert_eq!(response.messages[1].sms_count, 0);

        let results = decode_message_status_results(r#"{"results": [{"to": "41793026727"}]}"#)
            .unwrap();
        assert_eq!(results[0].message_id, "");
        assert_eq!(results[0].to, "41793026727");
    }

    #[test]
    fn encode_status_query() {
        let id = MessageId::new("MSG-1").unwrap();
        assert_eq!(
            encode_message_status_query(&id),
            vec![("messageId".to_owned(), "MSG-1".to_owned())]
        );
    }
}
