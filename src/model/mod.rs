//! Pure data structures shared by the store, the manager and the views.

pub mod feedback;
pub mod patient;

pub use feedback::*;
pub use patient::*;
