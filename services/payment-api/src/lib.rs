//! Client for the Payment Highway Payment API.
//!
//! Requests are signed with [`paymenthighway_core::Signer`] and sent through the
//! [`paymenthighway_core::HttpSend`] configured in the [`paymenthighway_core::Context`].

mod config;
pub use config::Config;

mod constants;

mod model;
pub use model::*;

mod payment_api;
pub use payment_api::PaymentApi;
