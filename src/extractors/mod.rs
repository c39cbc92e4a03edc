//! Request extractors.

pub mod path;
pub use path::PathParams;
