//! # Application Lifecycle
//!
//! Wiring, startup and shutdown of the patient screen.
//!
//! ## Startup
//!
//! [`PatientApp::start`] reads an [`AppConfig`] and:
//!
//! 1. builds the record store it names (remote HTTP collection or in-process actor),
//! 2. creates the shared translation [`Catalog`](crate::i18n::Catalog),
//! 3. spawns the [`ManagerActor`](crate::manager::ManagerActor), which immediately
//!    starts the first list load.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the manager client**: the manager's `receiver.recv()` returns `None`.
//! 2. **Manager exits**: it drops its store handle, closing the in-process store's channel.
//! 3. **Await completion**: manager task first, then the store task.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the log subscriber. See [`self::tracing`] for the levels
//! and fields each layer emits.

pub mod app;
pub mod config;
pub mod tracing;

pub use app::*;
pub use config::*;
pub use self::tracing::setup_tracing;
