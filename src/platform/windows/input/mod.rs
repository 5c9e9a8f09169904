//! Input handling for Windows (window message translation).

pub mod messages;

pub use messages::{cursor_position, key_from_vk, translate_message, window_origin};
