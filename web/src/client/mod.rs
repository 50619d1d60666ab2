//! Browser-side collaborators. The bodies only do work in the `hydrate`
//! build; on the server they are inert.

pub mod channel;
pub mod geolocation;

pub use channel::request_responders;
pub use geolocation::{locate_user, GEOLOCATION_UNSUPPORTED};
