//! HTTP adapters - the REST boundary.
//!
//! `protocol` defines the transport-neutral controller contract, `signup`
//! implements it, and `router` mounts everything behind shared middleware.

pub mod errors;
pub mod helpers;
pub mod protocol;
pub mod router;
pub mod signup;

pub use errors::HttpError;
pub use protocol::{Controller, HttpRequest, HttpResponse};
pub use router::app_router;
pub use signup::{signup_routes, SignUpController};
