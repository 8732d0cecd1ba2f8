//! External weather provider integration.
//!
//! The provider is opaque to the gateway: a single POST-style webhook that
//! takes `{ "name": <place> }` and answers with an array of observations.
//! Only the transport and the response envelope are this module's concern;
//! payload semantics live in [`crate::domain::WeatherEvent`].

pub mod webhook;

pub use webhook::WebhookClient;
