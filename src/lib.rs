//! Client library for the Aiven API
//!
//! Authenticates against Aiven and manages Kafka topics. The `aiven` binary
//! wraps these operations as a command line tool.

pub mod aiven;
pub mod config;
pub mod kafka;
