use std::io;

use infobip::{InfobipClientBuilder, Message};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let to = std::env::var("INFOBIP_TO").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "INFOBIP_TO environment variable is required",
        )
    })?;
    let from = std::env::var("INFOBIP_FROM").unwrap_or_else(|_| "InfoSMS".to_owned());
    let text = std::env::var("INFOBIP_MESSAGE")
        .unwrap_or_else(|_| "Hello from the infobip demo.".to_owned());

    // Credentials come from INFOBIP_API_KEY or INFOBIP_USERNAME/INFOBIP_PASSWORD.
    let client = InfobipClientBuilder::from_env().build()?;
    let response = client
        .send_single_message(&Message::new(from, to, text))
        .await?;

    for info in response.messages {
        println!(
            "message_id: {}, to: {}, status: {} ({})",
            info.message_id, info.to, info.status.name, info.status.group_name
        );
    }

    Ok(())
}
