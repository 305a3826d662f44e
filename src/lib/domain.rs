//! Provider-independent email model

pub mod mail;
