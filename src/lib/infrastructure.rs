//! Adapters to the outside world

pub mod cli;
pub mod rusender;
