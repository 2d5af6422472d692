//! Player registration and the read-only statistics view.
//!
//! The registry maps names to colors and remembers insertion order, which
//! makes winner resolution deterministic when several players share a
//! color. The `Player` handle returned by registration derives its
//! statistics by scanning the live board; it owns nothing and cannot
//! mutate anything.

pub mod registry;
pub mod view;

pub use registry::PlayerRegistry;
pub use view::Player;
