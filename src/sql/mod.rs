//! Item SQL: fixed statements plus the filtered list query; values always go through parameters.

mod builder;
pub use builder::*;
