use crate::cli::utils::{PROJECT_DIR, find_project_root};
use crate::config::ProjectConfig;
use crate::core::TicketService;
use crate::error::{HelpDeskError, Result};
use crate::storage::FileStorage;

/// Lifecycle service wired to the file backend
pub type FileBackedService = TicketService<FileStorage, FileStorage, FileStorage>;

/// Common context for all handler operations
pub struct HandlerContext {
    pub storage: FileStorage,
    pub config: ProjectConfig,
}

impl HandlerContext {
    /// Locate the project and load its storage and configuration
    pub fn new(project_dir: Option<&str>) -> Result<Self> {
        let project_root = find_project_root(project_dir)?;
        let helpdesk_dir = project_root.join(PROJECT_DIR);
        let storage = FileStorage::new(&helpdesk_dir);

        if !storage.is_initialized() {
            return Err(HelpDeskError::ProjectNotInitialized);
        }

        let config = ProjectConfig::load_or_default(&helpdesk_dir);
        Ok(Self { storage, config })
    }

    /// Build a lifecycle service over this project's storage
    #[must_use]
    pub fn service(&self) -> FileBackedService {
        TicketService::new(
            self.storage.clone(),
            self.storage.clone(),
            self.storage.clone(),
        )
    }
}
