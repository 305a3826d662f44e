use std::time::Duration;

use anyhow::Result;
use rusender::{
    domain::mail::{Contact, Mail, Mailer, Message},
    infrastructure::rusender::RuSenderClient,
};

#[tokio::main]
pub async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let api_key = std::env::var("RUSENDER_API_KEY")?;
    let client = RuSenderClient::new(reqwest::Client::new(), api_key)
        .with_timeout(Duration::from_secs(10));

    let message = Message::new(
        Mail::new(
            Contact::new("example@example.com", "example"),
            Contact::new("example2@example.com", "example2"),
            "Test",
        )
        .with_template(1234)
        .with_param("name", "example"),
    )
    .with_idempotency_key("12456");

    match client.send(&message).await {
        Ok(answer) => println!("answer uuid: {}", answer.uuid),
        Err(e) => println!("error: {}", e),
    }

    Ok(())
}
