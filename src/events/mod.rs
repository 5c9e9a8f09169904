//! Event vocabulary shared by the platform layer and the input logic.
//!
//! ```text
//! platform message ──► InputEvent ──► input::drag::transition ──► [Effect]
//!                                                                   │
//!                                   handlers::dispatch_event ◄──────┘
//!                                                │
//!                                                ▼
//!                                           OverlayHost
//! ```
//!
//! - [`types`]: `InputEvent`, `Key` and `Effect`

pub mod types;

pub use types::{Effect, InputEvent, Key};
