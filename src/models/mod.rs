//! Shared model types.

mod enums;

pub use enums::TimeUnit;
