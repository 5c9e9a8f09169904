//! Platform-specific implementations.
//!
//! Only Windows has a marker window today. It provides:
//! - Window context storage
//! - Input message translation
//! - The layered overlay window and its presentation

#[cfg(target_os = "windows")]
pub mod windows;

// Re-export the current platform's modules for convenience
#[cfg(target_os = "windows")]
pub use windows::*;
