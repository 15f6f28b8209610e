//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. Call it once, at the top of `main`.
//!
//! ## What Gets Traced
//!
//! - **Lifecycle**: manager and store startup and shutdown, language switches
//! - **Mutations**: `info!` on every saved or deleted patient, with its `id`
//! - **Reads and payloads**: `debug!` on list loads, search settles and submitted forms
//! - **Failures**: `error!` at the record client with the HTTP cause, and again at the
//!   manager with the operation and the user-facing message
//!
//! ## Usage Examples
//!
//! ```bash
//! # Lifecycle and mutations only
//! RUST_LOG=info cargo run
//!
//! # Forms, search terms and list sizes as well
//! RUST_LOG=debug cargo run
//!
//! # Only the record client
//! RUST_LOG=patient_manager::store=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` a create flows like this:
//!
//! ```text
//! DEBUG submit: Sending request form=PatientForm { name: "Ana García", .. } editing=None
//! DEBUG Submitting mode=Create form=PatientForm { .. }
//! INFO Patient saved id="1" mode=Create
//! DEBUG Loading patients seq=2
//! INFO Patients loaded count=1
//! ```
//!
//! Structured fields use `%` for `Display` and `?` for `Debug`:
//!
//! ```rust,ignore
//! error!(error = %e, cause = %e.cause(), "Error loading patients");
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
