//! RuSender HTTP API adapter

mod client;
mod config;

pub use client::{RuSenderClient, DEFAULT_BASE_URL};
pub use config::RuSenderConfig;
