//! Safe SQL building: identifiers from code only, values as parameters.

mod builder;
pub use builder::*;
