//! Data models and pure client-side logic for The Global Magazine frontend.
//!
//! Everything here is host-testable: envelope normalization, filtering,
//! pagination math, reading-progress math, role handling and rich-text
//! helpers. The `frontend` crate wires these into Yew components.

pub mod auth;
pub mod envelope;
pub mod filter;
pub mod models;
pub mod paginate;
pub mod progress;
pub mod text;

pub use auth::{Role, UserProfile};
pub use models::{Banner, ContentKind, ContentRecord, ContentStatus};
