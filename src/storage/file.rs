//! File-backed storage under a `.helpdesk` directory
//!
//! Layout:
//! - `tickets/<id>.yaml` — one YAML document per ticket
//! - `ticket_seq` — plain-text counter backing ticket id assignment
//! - `categories.yaml` / `employees.yaml` — whole-file YAML documents for the
//!   directory entities, each carrying its own id counter

use crate::core::{Category, CategoryId, Employee, EmployeeId, Ticket, TicketId};
use crate::error::{HelpDeskError, Result};
use crate::storage::repository::TicketQuery;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const TICKETS_DIR: &str = "tickets";
const TICKET_SEQ_FILE: &str = "ticket_seq";
const CATEGORIES_FILE: &str = "categories.yaml";
const EMPLOYEES_FILE: &str = "employees.yaml";

#[derive(Debug, Default, Serialize, Deserialize)]
struct CategoryFile {
    next_id: u32,
    categories: Vec<Category>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct EmployeeFile {
    next_id: u32,
    employees: Vec<Employee>,
}

/// Storage rooted at a `.helpdesk` directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create a handle rooted at the given directory
    ///
    /// Nothing is touched on disk until [`initialize`](Self::initialize) or
    /// one of the accessors runs.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory this storage operates on
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the root directory holds an initialized project
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.root.join(TICKETS_DIR).is_dir() && self.root.join(TICKET_SEQ_FILE).is_file()
    }

    /// Create the directory layout, leaving existing data alone
    pub fn initialize(&self) -> Result<()> {
        fs::create_dir_all(self.root.join(TICKETS_DIR))?;

        let seq = self.root.join(TICKET_SEQ_FILE);
        if !seq.exists() {
            fs::write(&seq, "0\n")?;
        }
        if !self.categories_path().exists() {
            self.write_category_file(&CategoryFile::default())?;
        }
        if !self.employees_path().exists() {
            self.write_employee_file(&EmployeeFile::default())?;
        }
        Ok(())
    }

    fn ensure_initialized(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(HelpDeskError::ProjectNotInitialized)
        }
    }

    fn ticket_path(&self, id: TicketId) -> PathBuf {
        self.root.join(TICKETS_DIR).join(format!("{id}.yaml"))
    }

    fn categories_path(&self) -> PathBuf {
        self.root.join(CATEGORIES_FILE)
    }

    fn employees_path(&self) -> PathBuf {
        self.root.join(EMPLOYEES_FILE)
    }

    /// Advance the id sequence and return the new value
    fn next_ticket_id(&self) -> Result<TicketId> {
        let seq_path = self.root.join(TICKET_SEQ_FILE);
        let raw = fs::read_to_string(&seq_path)?;
        let current: u64 = raw.trim().parse().map_err(|_| {
            HelpDeskError::custom(format!("corrupted id sequence file: '{}'", raw.trim()))
        })?;
        let next = current + 1;
        fs::write(&seq_path, format!("{next}\n"))?;
        Ok(TicketId::new(next))
    }

    /// Persist a new ticket, assigning the next id from the sequence
    pub fn add_ticket(&self, mut ticket: Ticket) -> Result<Ticket> {
        self.ensure_initialized()?;
        ticket.id = self.next_ticket_id()?;
        self.save_ticket(&ticket)?;
        Ok(ticket)
    }

    /// Write a ticket to its file, overwriting any previous version
    pub fn save_ticket(&self, ticket: &Ticket) -> Result<()> {
        self.ensure_initialized()?;
        let yaml = serde_yaml::to_string(ticket)?;
        fs::write(self.ticket_path(ticket.id), yaml)?;
        Ok(())
    }

    /// Load one ticket by id
    pub fn load_ticket(&self, id: TicketId) -> Result<Ticket> {
        self.ensure_initialized()?;
        let raw = fs::read_to_string(self.ticket_path(id)).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                HelpDeskError::TicketNotFound { id }
            } else {
                HelpDeskError::Io(e)
            }
        })?;
        Ok(serde_yaml::from_str(&raw)?)
    }

    /// Load every ticket, ordered by ascending id
    pub fn load_all_tickets(&self) -> Result<Vec<Ticket>> {
        self.ensure_initialized()?;
        let mut tickets = Vec::new();
        for entry in fs::read_dir(self.root.join(TICKETS_DIR))? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let raw = fs::read_to_string(&path)?;
                tickets.push(serde_yaml::from_str::<Ticket>(&raw)?);
            }
        }
        tickets.sort_by_key(|t| t.id);
        Ok(tickets)
    }

    /// Load tickets matching a query, ordered by ascending id
    pub fn load_tickets(&self, query: &TicketQuery) -> Result<Vec<Ticket>> {
        let tickets = self.load_all_tickets()?;
        Ok(tickets.into_iter().filter(|t| query.matches(t)).collect())
    }

    /// Remove a ticket file
    pub fn delete_ticket(&self, id: TicketId) -> Result<()> {
        self.ensure_initialized()?;
        fs::remove_file(self.ticket_path(id)).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                HelpDeskError::TicketNotFound { id }
            } else {
                HelpDeskError::Io(e)
            }
        })
    }

    fn read_category_file(&self) -> Result<CategoryFile> {
        self.ensure_initialized()?;
        let path = self.categories_path();
        if !path.exists() {
            return Ok(CategoryFile::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&raw)?)
    }

    fn write_category_file(&self, file: &CategoryFile) -> Result<()> {
        fs::write(self.categories_path(), serde_yaml::to_string(file)?)?;
        Ok(())
    }

    fn read_employee_file(&self) -> Result<EmployeeFile> {
        self.ensure_initialized()?;
        let path = self.employees_path();
        if !path.exists() {
            return Ok(EmployeeFile::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&raw)?)
    }

    fn write_employee_file(&self, file: &EmployeeFile) -> Result<()> {
        fs::write(self.employees_path(), serde_yaml::to_string(file)?)?;
        Ok(())
    }

    /// All known categories in id order
    pub fn load_categories(&self) -> Result<Vec<Category>> {
        Ok(self.read_category_file()?.categories)
    }

    /// Add a category, assigning the next category id
    pub fn add_category(&self, name: impl Into<String>) -> Result<Category> {
        let mut file = self.read_category_file()?;
        file.next_id += 1;
        let category = Category::new(CategoryId::new(file.next_id), name);
        file.categories.push(category.clone());
        self.write_category_file(&file)?;
        Ok(category)
    }

    /// All known employees in id order
    pub fn load_employees(&self) -> Result<Vec<Employee>> {
        Ok(self.read_employee_file()?.employees)
    }

    /// Add an employee, assigning the next employee id
    pub fn add_employee(&self, full_name: impl Into<String>) -> Result<Employee> {
        let mut file = self.read_employee_file()?;
        file.next_id += 1;
        let employee = Employee::new(EmployeeId::new(file.next_id), full_name);
        file.employees.push(employee.clone());
        self.write_employee_file(&file)?;
        Ok(employee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Status;
    use tempfile::TempDir;

    fn storage() -> (TempDir, FileStorage) {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().join(".helpdesk"));
        storage.initialize().unwrap();
        (temp_dir, storage)
    }

    fn ticket(title: &str) -> Ticket {
        Ticket::new(title, "description", "Hardware", "Sam Porter")
    }

    #[test]
    fn test_uninitialized_storage_errors() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().join(".helpdesk"));

        assert!(!storage.is_initialized());
        let err = storage.load_all_tickets().unwrap_err();
        assert!(matches!(err, HelpDeskError::ProjectNotInitialized));
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let (_dir, storage) = storage();
        storage.add_ticket(ticket("keep me")).unwrap();

        storage.initialize().unwrap();
        assert_eq!(storage.load_all_tickets().unwrap().len(), 1);
    }

    #[test]
    fn test_ticket_round_trip() {
        let (_dir, storage) = storage();
        let mut t = ticket("resolved one");
        t.status = Status::Resolved;
        t.date_resolved = Some(chrono::Utc::now());
        t.resolution_notes = Some("replaced the cable".to_string());

        let saved = storage.add_ticket(t).unwrap();
        let loaded = storage.load_ticket(saved.id).unwrap();
        assert_eq!(loaded, saved);
    }

    #[test]
    fn test_id_sequence_survives_deletion() {
        let (_dir, storage) = storage();
        let first = storage.add_ticket(ticket("one")).unwrap();
        storage.delete_ticket(first.id).unwrap();

        let second = storage.add_ticket(ticket("two")).unwrap();
        assert_eq!(second.id, TicketId::new(2));
    }

    #[test]
    fn test_load_missing_ticket_maps_to_not_found() {
        let (_dir, storage) = storage();
        let err = storage.load_ticket(TicketId::new(42)).unwrap_err();
        assert!(matches!(err, HelpDeskError::TicketNotFound { id } if id == TicketId::new(42)));
    }

    #[test]
    fn test_delete_missing_ticket_maps_to_not_found() {
        let (_dir, storage) = storage();
        let err = storage.delete_ticket(TicketId::new(7)).unwrap_err();
        assert!(matches!(err, HelpDeskError::TicketNotFound { id } if id == TicketId::new(7)));
    }

    #[test]
    fn test_load_all_orders_by_id() {
        let (_dir, storage) = storage();
        for title in ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k"] {
            storage.add_ticket(ticket(title)).unwrap();
        }

        let ids: Vec<u64> = storage
            .load_all_tickets()
            .unwrap()
            .iter()
            .map(|t| t.id.value())
            .collect();
        let expected: Vec<u64> = (1..=11).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_category_ids_are_sequential() {
        let (_dir, storage) = storage();
        let hardware = storage.add_category("Hardware").unwrap();
        let network = storage.add_category("Network").unwrap();

        assert_eq!(hardware.id, CategoryId::new(1));
        assert_eq!(network.id, CategoryId::new(2));

        let names: Vec<String> = storage
            .load_categories()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Hardware", "Network"]);
    }

    #[test]
    fn test_employee_directory_round_trip() {
        let (_dir, storage) = storage();
        storage.add_employee("Dana Scully").unwrap();
        storage.add_employee("Fox Mulder").unwrap();

        let employees = storage.load_employees().unwrap();
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].id, EmployeeId::new(1));
        assert_eq!(employees[1].full_name, "Fox Mulder");
    }
}
