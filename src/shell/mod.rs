// Composition root for the traces service.
//
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Authenticate requests and wire them into use case handlers.

pub mod auth;
pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
