//! # Presentation
//!
//! Plain-text rendering of a [`ManagerState`](crate::manager::ManagerState)
//! snapshot. Every function here is pure: state and translator in, text out.
//! Interaction goes through the [`ManagerClient`](crate::manager::ManagerClient);
//! the only view-local state is kept by [`PatientCard`] (expanded toggle, avatar
//! fallback).

pub mod card;
pub mod confirm;
pub mod format;
pub mod list;
pub mod modal;
pub mod screen;
pub mod skeleton;
pub mod toast;

pub use card::PatientCard;
pub use confirm::render_confirm;
pub use format::{format_date, format_timestamp, truncate_text};
pub use list::render_list;
pub use modal::render_modal;
pub use screen::render_screen;
pub use skeleton::{render_skeleton, SKELETON_COUNT};
pub use toast::render_toast;
