//! # Patient Manager
//!
//! Scripted session against the configured backend. Each step prints the rendered
//! screen so the flow can be followed in the terminal.
//!
//! ## 📚 Quick Start
//!
//! ```bash
//! # In-process store (default), English
//! RUST_LOG=info cargo run
//!
//! # Remote collection, Spanish UI
//! PATIENTS_BACKEND=http PATIENTS_LANG=es RUST_LOG=debug cargo run
//! ```
//!
//! The session creates a patient, searches for it, edits it and deletes it,
//! which also mutates the remote collection when `PATIENTS_BACKEND=http`.

use patient_manager::i18n::Language;
use patient_manager::lifecycle::{setup_tracing, AppConfig, PatientApp};
use patient_manager::manager::{ManagerClient, ManagerError};
use patient_manager::model::PatientForm;
use patient_manager::view::render_screen;
use std::time::Duration;
use tracing::{info, warn, Instrument};

async fn show(app: &PatientApp, step: &str) -> Result<(), String> {
    let state = app.manager.snapshot().await.map_err(|e| e.to_string())?;
    println!("\n---- {step} ----\n{}", render_screen(&state, app.catalog.as_ref()));
    Ok(())
}

async fn settle(manager: &ManagerClient, delay: Duration) -> Result<(), ManagerError> {
    tokio::time::sleep(delay).await;
    manager.snapshot().await.map(|_| ())
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = AppConfig::from_env().map_err(|e| e.to_string())?;
    info!(backend = %config.backend, url = %config.api_url, "Starting patient manager");
    let app = PatientApp::start(&config).map_err(|e| e.to_string())?;

    match app.manager.load().await {
        Ok(count) => info!(count, "Initial list loaded"),
        Err(e) => warn!(error = %e, "Initial list unavailable, continuing"),
    }
    show(&app, "loaded").await?;

    // An incomplete form stays in the modal with inline errors.
    app.manager.open_create().await.map_err(|e| e.to_string())?;
    let rejected = app
        .manager
        .submit(PatientForm::new("A", "", "", "not a url"), None)
        .await;
    if let Err(ManagerError::Invalid(errors)) = &rejected {
        warn!(invalid = errors.len(), "Form rejected");
    }
    show(&app, "invalid form").await?;

    let span = tracing::info_span!("patient_creation");
    let created = async {
        info!("Creating patient");
        app.manager
            .submit(
                PatientForm::new(
                    "Ana García",
                    "https://i.pravatar.cc/150?img=5",
                    "Annual check-up. Mild seasonal allergies, no current medication.",
                    "https://ana-garcia.example.com",
                ),
                None,
            )
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;
    info!(id = %created.id, "Patient created");
    show(&app, "created").await?;

    app.manager
        .set_search_term("allerg")
        .await
        .map_err(|e| e.to_string())?;
    show(&app, "searching").await?;
    settle(&app.manager, config.search_delay + Duration::from_millis(50))
        .await
        .map_err(|e| e.to_string())?;
    show(&app, "search settled").await?;

    app.manager.open_edit(created.clone()).await.map_err(|e| e.to_string())?;
    let mut form = PatientForm::from(&created);
    form.description.push_str(" Follow-up booked for spring.");
    let updated = app
        .manager
        .submit(form, Some(created.clone()))
        .await
        .map_err(|e| e.to_string())?;
    info!(id = %updated.id, "Patient updated");

    app.set_language(Language::Es);
    app.manager.set_search_term("").await.map_err(|e| e.to_string())?;
    show(&app, "updated (es)").await?;

    app.manager
        .request_delete(updated.id.clone(), updated.name.clone())
        .await
        .map_err(|e| e.to_string())?;
    show(&app, "confirm delete").await?;
    app.manager.confirm_delete().await.map_err(|e| e.to_string())?;
    show(&app, "deleted").await?;

    app.shutdown().await?;

    info!("Session completed successfully");
    Ok(())
}
