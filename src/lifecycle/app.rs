use super::config::{AppConfig, Backend, ConfigError};
use crate::i18n::{Catalog, Language, Translator};
use crate::manager::{self, ManagerClient, ManagerConfig};
use crate::store::{HttpRecordClient, MemoryStore, RecordStore};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The running patient screen: the record store, the manager actor and the
/// shared translation catalog.
///
/// # Example
///
/// ```ignore
/// let app = PatientApp::start(&AppConfig::from_env()?)?;
///
/// app.manager.set_search_term("ana").await?;
/// let state = app.manager.snapshot().await?;
/// println!("{}", render_screen(&state, app.catalog.as_ref()));
///
/// app.shutdown().await?;
/// ```
pub struct PatientApp {
    /// Handle used by the presentation layer for every operation.
    pub manager: ManagerClient,

    /// Shared with the manager, so a language switch applies to both.
    pub catalog: Arc<Catalog>,

    /// Manager first, then the in-process store if there is one.
    handles: Vec<JoinHandle<()>>,
}

impl PatientApp {
    /// Builds the store selected by `config.backend` and starts the manager on it.
    pub fn start(config: &AppConfig) -> Result<Self, ConfigError> {
        let catalog = Arc::new(Catalog::new(config.language));
        let manager_config = config.manager_config();

        let (store, store_handle): (Arc<dyn RecordStore>, Option<JoinHandle<()>>) =
            match config.backend {
                Backend::Http => {
                    let client = HttpRecordClient::new(&config.api_url, config.request_timeout)?;
                    (Arc::new(client), None)
                }
                Backend::Memory => {
                    let (store, client) = MemoryStore::new(manager_config.buffer_size);
                    (Arc::new(client), Some(tokio::spawn(store.run())))
                }
            };
        info!(backend = %config.backend, language = %config.language, "Starting patient app");

        let mut app = Self::with_store(store, catalog, manager_config);
        app.handles.extend(store_handle);
        Ok(app)
    }

    /// Starts the manager on an already-built store.
    pub fn with_store(
        store: Arc<dyn RecordStore>,
        catalog: Arc<Catalog>,
        config: ManagerConfig,
    ) -> Self {
        let translator: Arc<dyn Translator> = catalog.clone();
        let (actor, manager) = manager::new(store, translator, config);
        let handle = tokio::spawn(actor.run());

        Self {
            manager,
            catalog,
            handles: vec![handle],
        }
    }

    pub fn set_language(&self, language: Language) {
        self.catalog.set_language(language);
    }

    /// Drops the manager handle and waits for every task to finish.
    ///
    /// Other clones of [`ManagerClient`] keep the manager alive, so drop them first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down patient app...");

        // The manager owns the store handle; once it exits the store's channel closes too.
        drop(self.manager);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Task failed during shutdown");
                return Err(format!("Task failed: {e}"));
            }
        }

        info!("Patient app shut down");
        Ok(())
    }
}
