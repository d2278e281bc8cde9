use std::io;

use infobip::{InfobipClientBuilder, MessageId};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let message_id = std::env::var("INFOBIP_MESSAGE_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "INFOBIP_MESSAGE_ID environment variable is required",
        )
    })?;

    let client = InfobipClientBuilder::from_env().build()?;
    let report = client
        .get_message_status(&MessageId::new(message_id)?)
        .await?;

    println!(
        "to: {}, status: {} - {}",
        report.to, report.status.name, report.status.description
    );

    Ok(())
}
