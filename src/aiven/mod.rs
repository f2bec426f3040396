//! Aiven API gateway
//!
//! This module provides the authenticated session and the generic HTTP call
//! every resource operation is built on.
//!
//! # Module Structure
//!
//! - [`auth`] - Credentials and the `userauth` exchange
//! - [`client`] - Main Aiven client (the session) for making API requests
//! - [`envelope`] - The `errors`/`message` envelope carried by every response
//! - [`error`] - Error kinds
//! - [`http`] - HTTP utilities for REST API calls
//!
//! # Example
//!
//! ```no_run
//! use aiven_client::aiven::auth::Credentials;
//! use aiven_client::aiven::client::{AivenClient, Endpoints};
//! use aiven_client::kafka::ListTopicsRequest;
//!
//! async fn example() -> anyhow::Result<()> {
//!     let creds = Credentials::new("me@example.com", "secret");
//!     let client = AivenClient::login(Endpoints::default(), &creds).await?;
//!     let topics = client
//!         .kafka()
//!         .list_topics(&ListTopicsRequest::new("my-project", "my-kafka"))
//!         .await?;
//!     println!("{} topics", topics.len());
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod envelope;
pub mod error;
pub mod http;
