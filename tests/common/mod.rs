#![allow(dead_code)]

use patient_manager::i18n::{Catalog, Language};
use patient_manager::manager::{self, ManagerClient, ManagerConfig, ManagerState};
use patient_manager::model::{Patient, PatientForm};
use patient_manager::store::mock::MockRecordStore;
use std::sync::Arc;
use std::time::Duration;

pub fn patient(id: &str, name: &str, description: &str, created_at: &str) -> Patient {
    Patient::from_form(
        id,
        PatientForm::new(
            name,
            format!("https://img.example.com/{id}.png"),
            description,
            format!("https://{}.example.com", name.to_lowercase()),
        ),
        created_at,
    )
}

pub fn ana() -> Patient {
    patient("1", "Ana", "Allergy follow-up", "2024-01-01T09:00:00.000Z")
}

pub fn bob() -> Patient {
    patient("2", "Bob", "Knee surgery recovery", "2024-02-01T09:00:00.000Z")
}

pub fn valid_form(name: &str) -> PatientForm {
    PatientForm::new(
        name,
        "https://img.example.com/new.png",
        "First consultation",
        "https://clinic.example.com",
    )
}

/// Starts a manager on `mock` with an English catalog.
pub fn start(mock: &Arc<MockRecordStore>) -> ManagerClient {
    let catalog = Arc::new(Catalog::new(Language::En));
    let (actor, client) = manager::new(mock.clone(), catalog, ManagerConfig::default());
    tokio::spawn(actor.run());
    client
}

/// Polls snapshots until `done` holds. Panics after 100 attempts.
pub async fn wait_until(
    client: &ManagerClient,
    done: impl Fn(&ManagerState) -> bool,
) -> ManagerState {
    for _ in 0..100 {
        let state = client.snapshot().await.expect("manager running");
        if done(&state) {
            return state;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("condition not reached");
}

pub async fn loaded(client: &ManagerClient) -> ManagerState {
    wait_until(client, |s| !s.is_loading_initial).await
}

pub fn ids(records: &[Patient]) -> Vec<&str> {
    records.iter().map(|p| p.id.as_str()).collect()
}
