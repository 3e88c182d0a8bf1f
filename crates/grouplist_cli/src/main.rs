//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `grouplist_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Tiny probe to validate core crate wiring independently from the
    // Flutter/FFI runtime setup.
    println!("grouplist_core ping={}", grouplist_core::ping());
    println!("grouplist_core version={}", grouplist_core::core_version());
}
