use std::io;

use infobip::{Action, InfobipClientBuilder, SearchNumberParams};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let forward_url = std::env::var("INFOBIP_FORWARD_URL").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "INFOBIP_FORWARD_URL environment variable is required",
        )
    })?;
    let country = std::env::var("INFOBIP_COUNTRY").unwrap_or_else(|_| "GB".to_owned());

    let client = InfobipClientBuilder::from_env().build()?;
    let params = SearchNumberParams {
        capabilities: Some("SMS".to_owned()),
        country: Some(country),
        limit: Some(1),
        ..Default::default()
    };

    let found = client.search_numbers(&params).await?;
    let Some(candidate) = found.numbers.into_iter().next() else {
        println!("no numbers available");
        return Ok(());
    };

    let number = client.rent_number(&candidate.number_key).await?;
    println!("rented {} ({})", number.number, number.number_key.as_str());

    let config = client.create_number_configuration(&number.number_key).await?;
    let Some(configuration_key) = config.configuration_key else {
        println!("configuration created without a key");
        return Ok(());
    };

    let action = client
        .create_number_action(
            &Action::forward_post(forward_url),
            &number.number_key,
            &configuration_key,
        )
        .await?;
    println!("action {:?} forwards to {:?}", action.action_key, action.forward_url);

    Ok(())
}
