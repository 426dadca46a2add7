pub mod attribute;
#[cfg(feature = "api")]
pub mod client;
pub mod error;
pub mod observation;
