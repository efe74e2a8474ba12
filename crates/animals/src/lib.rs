//! The adoption domain: adoptable animals and the requests made for them.
//!
//! All rules in this crate are synchronous and deterministic; storage and
//! HTTP live elsewhere and call in through plain methods.

pub mod animal;
pub mod request;

pub use animal::Animal;
pub use request::AdoptionRequest;
