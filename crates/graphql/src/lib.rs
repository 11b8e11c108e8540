//! # Magazine GraphQL
//!
//! The production [`magazine_core::ContentSource`]: articles, tags and block
//! records fetched from the Directus GraphQL endpoint with `reqwest`, and the
//! startup choice between it and the fixture-backed source.

pub mod client;
pub mod directus;
pub mod error;
pub mod queries;
pub mod settings;
pub mod wire;

pub use client::GraphqlClient;
pub use directus::DirectusSource;
pub use error::{GraphqlError, GraphqlResult};
pub use settings::SourceSettings;
