use super::entry::{CatalogEntry, DataFormat, DataType};
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Dataset label must not be empty")]
    InvalidLabel,
    #[error("No dataset registered under label or path '{key}'")]
    NotFound { key: String },
}

/// Registry of sample datasets, addressable by label or by resolved path.
#[derive(Debug, Clone, Default)]
pub struct DatasetCatalog {
    entries: Vec<CatalogEntry>,
    // Registration sequence number of each entry, bumped on re-registration.
    registered_at: Vec<u64>,
    next_registration: u64,
    by_label: HashMap<String, usize>,
    by_path: HashMap<String, usize>,
}

impl DatasetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a dataset, replacing any previous entry with the same label.
    ///
    /// A replaced entry keeps its position in registration order. If the
    /// replacement moves the label to a different path, the old path stops
    /// resolving to it.
    pub fn register(
        &mut self,
        label: &str,
        path: &str,
        data_type: DataType,
        format: DataFormat,
        description: &str,
    ) -> Result<(), CatalogError> {
        if label.is_empty() {
            return Err(CatalogError::InvalidLabel);
        }
        let entry = CatalogEntry::new(label, path, data_type, format, description);
        let registration = self.next_registration;
        self.next_registration += 1;

        let existing = self.by_label.get(label).copied();
        let idx = match existing {
            Some(idx) => {
                let old = std::mem::replace(&mut self.entries[idx], entry);
                self.registered_at[idx] = registration;
                if old.path() != path {
                    self.release_path(old.path(), idx);
                }
                idx
            }
            None => {
                self.entries.push(entry);
                self.registered_at.push(registration);
                let idx = self.entries.len() - 1;
                self.by_label.insert(label.to_string(), idx);
                idx
            }
        };
        self.by_path.insert(path.to_string(), idx);
        Ok(())
    }

    /// Finds an entry by label first, then by path.
    pub fn lookup(&self, key: &str) -> Result<&CatalogEntry, CatalogError> {
        self.by_label
            .get(key)
            .or_else(|| self.by_path.get(key))
            .map(|&idx| &self.entries[idx])
            .ok_or_else(|| CatalogError::NotFound {
                key: key.to_string(),
            })
    }

    pub fn path_of(&self, label: &str) -> Result<&str, CatalogError> {
        self.by_label
            .get(label)
            .map(|&idx| self.entries[idx].path())
            .ok_or_else(|| CatalogError::NotFound {
                key: label.to_string(),
            })
    }

    pub fn description(&self, key: &str) -> Result<&str, CatalogError> {
        self.lookup(key).map(CatalogEntry::description)
    }

    /// Public labels whose registered type is `data_type`.
    pub fn list_labels_of_type(&self, data_type: DataType) -> BTreeSet<&str> {
        let public: BTreeSet<&str> = self.labels().collect();
        self.entries
            .iter()
            .filter(|e| e.data_type() == data_type)
            .map(CatalogEntry::label)
            .filter(|label| public.contains(label))
            .collect()
    }

    pub fn configs(&self) -> BTreeSet<&str> {
        self.list_labels_of_type(DataType::Config)
    }

    pub fn topologies(&self) -> BTreeSet<&str> {
        self.list_labels_of_type(DataType::Topol)
    }

    pub fn trajectories(&self) -> BTreeSet<&str> {
        self.list_labels_of_type(DataType::Traj)
    }

    /// Public labels in registration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| e.is_public())
            .map(CatalogEntry::label)
    }

    /// Every label, private fixtures included, in registration order.
    pub fn all_labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(CatalogEntry::label)
    }

    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Hands a path key that `idx` no longer owns back to the most recently
    // registered other entry using it.
    fn release_path(&mut self, path: &str, idx: usize) {
        if self.by_path.get(path) != Some(&idx) {
            return;
        }
        let successor = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.path() == path)
            .max_by_key(|&(i, _)| self.registered_at[i])
            .map(|(i, _)| i);
        match successor {
            Some(other) => {
                self.by_path.insert(path.to_string(), other);
            }
            None => {
                self.by_path.remove(path);
            }
        }
    }
}
