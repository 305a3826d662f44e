#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Client library for the RuSender transactional email API
//!
//! Build a [`domain::mail::Message`], hand it to a
//! [`infrastructure::rusender::RuSenderClient`] and get back the provider's
//! [`domain::mail::EmailAnswer`] or a typed [`domain::mail::SendError`].

pub mod domain;
pub mod infrastructure;
