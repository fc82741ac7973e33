//! Core components for signing Payment Highway API messages.
//!
//! This crate provides the foundational types shared by the Payment Highway
//! client crates.
//!
//! ## Overview
//!
//! - **Signer**: creates `SPH1` signatures for outbound requests and validates
//!   the signatures of inbound responses and form redirects
//! - **ParameterSet**: the ordered `(name, value)` pairs a message carries
//! - **Context**: a container that holds implementations for HTTP sending and
//!   environment access
//!
//! ## Example
//!
//! ```
//! use paymenthighway_core::{ParameterSet, Signer};
//!
//! let signer = Signer::new("testKey", "testSecret");
//!
//! // Validate the query string Payment Highway redirected the browser back with.
//! let params = ParameterSet::from_query("sph-success=OK&signature=SPH1+testKey+0000");
//! assert!(!signer.validate_form_redirect(&params));
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time formatting utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};
mod credential;
pub use credential::Credential;
mod error;
pub use error::{Error, ErrorKind, Result};
mod params;
pub use params::ParameterSet;
mod signer;
pub use signer::{Signer, SIGNATURE, SIGNATURE_SCHEME, SPH_PREFIX};
