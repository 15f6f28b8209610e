//! # Patient Manager
//!
//! > **CRUD over a remote collection of patient records, as a set of Tokio actors.**
//!
//! The crate drives a single patient screen: list, search, create, edit and delete
//! records held by a REST collection, with form validation, avatar placeholders,
//! transient notifications and an English/Spanish UI.
//!
//! ## 🏗️ Design
//!
//! ### One owner per piece of state
//!
//! - The [`manager::ManagerActor`] owns everything the screen shows. Requests are
//!   handled one at a time, so there are no locks around the state.
//! - The in-process [`store::MemoryStore`] owns its records the same way.
//! - Slow work (HTTP calls) runs in spawned tasks that report back to the owning
//!   actor as messages.
//!
//! ### Reload after every write
//!
//! A successful create, update or delete is followed by a full list refetch. The
//! remote collection stays the single source of truth; the client never patches
//! its local copy. List responses carry a sequence number so a slow, older response
//! cannot replace a newer one.
//!
//! ### Errors stay on screen
//!
//! Store failures never abort anything. The manager logs the cause with `tracing`
//! and raises one generic, localized notification per operation kind. Validation
//! failures stay inside the form.
//!
//! ## 🗺️ Module Tour
//!
//! | Module | Role |
//! |---|---|
//! | [`model`] | [`Patient`](model::Patient), [`PatientForm`](model::PatientForm), notification and confirmation registers |
//! | [`store`] | [`RecordStore`](store::RecordStore) trait, HTTP client, in-process store, mock |
//! | [`validation`] | Per-field form rules with localized messages |
//! | [`avatar`] | Explicit avatar URL or a generated initial placeholder |
//! | [`i18n`] | [`Translator`](i18n::Translator) trait and the bundled catalog |
//! | [`manager`] | The controller actor and its client |
//! | [`view`] | Text rendering of a state snapshot |
//! | [`lifecycle`] | Configuration, tracing, startup and shutdown |
//!
//! ## 🧪 Testing
//!
//! [`store::mock::MockRecordStore`] scripts store responses (including delays) so
//! the manager can be tested on a paused Tokio clock without a network.

pub mod avatar;
pub mod i18n;
pub mod lifecycle;
pub mod manager;
pub mod model;
pub mod store;
pub mod validation;
pub mod view;
