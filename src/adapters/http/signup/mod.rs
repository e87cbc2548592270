//! HTTP adapter for account signup.

mod controller;
mod dto;
mod routes;

pub use controller::SignUpController;
pub use dto::{AccountResponse, RequiredFields, SignUpForm, SignUpResponseBody, REQUIRED_FIELDS};
pub use routes::{adapt_route, signup_routes};
