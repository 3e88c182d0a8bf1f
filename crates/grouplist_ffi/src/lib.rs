//! FFI crate exposing the grouplist core to Flutter.

mod api;

pub use api::*;
