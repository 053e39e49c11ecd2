//! # contact-relay
//!
//! Server-side contact-form pipeline for the mgripe.com website: an HTTP
//! endpoint that validates form posts and relays accepted submissions as
//! transactional email through Resend.
//!
//! ## Modules
//!
//! - `config` - Mail addresses and provider credential from the environment
//! - `email` - Outgoing message construction and the Resend dispatch client
//! - `form` - The client form's state-machine contract
//! - `http` - axum router and request handlers
//! - `schema` - Field validation with collected, field-keyed error codes
//! - `submit` - Submission orchestration: honeypot, validate, dispatch
//! - `testing` - Mock dispatcher shared by unit and integration tests

pub mod config;
pub mod email;
pub mod error;
pub mod form;
pub mod http;
pub mod schema;
pub mod submit;
pub mod testing;

pub use error::{Error, Result};
