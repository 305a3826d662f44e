#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Send a single email through the RuSender API

use anyhow::Result;
use clap::Parser;
use rusender::infrastructure::{
    cli::{send_mail, SendMailArgs},
    rusender::{RuSenderClient, RuSenderConfig},
};

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The RuSender client configuration
    #[clap(flatten)]
    pub rusender: RuSenderConfig,

    /// The message to send
    #[clap(flatten)]
    pub mail: SendMailArgs,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let client = RuSenderClient::from_config(args.rusender)?;
    let answer = send_mail(&client, args.mail).await?;

    println!("{}", answer.uuid);

    Ok(())
}
