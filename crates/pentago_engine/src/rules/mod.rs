//! Game rules for scalable Pentago.
//!
//! Pure functions over a [`Grid`](crate::grid::Grid). Rules are kept apart
//! from board storage so the engine can compose them per turn.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::WinDetector;
