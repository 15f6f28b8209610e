//! # Record Manager
//!
//! The controller of the patient screen, built as an actor:
//!
//! - [`ManagerActor`] owns [`ManagerState`] and runs in its own Tokio task.
//! - [`ManagerClient`] is the cloneable handle the presentation layer talks to.
//! - [`ManagerRequest`] is the message protocol between them.
//!
//! ```rust,ignore
//! let (actor, client) = manager::new(store, translator, ManagerConfig::default());
//! tokio::spawn(actor.run());
//!
//! client.set_search_term("ana").await?;
//! let state = client.snapshot().await?;
//! ```
//!
//! The actor refetches the list after every successful write, debounces search
//! terms and auto-dismisses notifications. See [`actor`] for the details.

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod search;
pub mod state;

pub use actor::*;
pub use client::*;
pub use error::*;
pub use message::{ManagerRequest, Response};
pub use state::*;

use crate::i18n::Translator;
use crate::store::RecordStore;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Creates a manager actor and its client. The actor does nothing until `run()` is spawned.
pub fn new(
    store: Arc<dyn RecordStore>,
    translator: Arc<dyn Translator>,
    config: ManagerConfig,
) -> (ManagerActor, ManagerClient) {
    let (sender, receiver) = mpsc::channel(config.buffer_size);
    let actor = ManagerActor::new(receiver, store, translator, config);
    let client = ManagerClient::new(sender);
    (actor, client)
}
