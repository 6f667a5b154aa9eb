//! Client-side utilities.

pub mod validation;
