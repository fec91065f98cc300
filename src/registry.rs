#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::record::StudentRecord;

/// An enum to represent possible errors from the student registry
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// A record with this id is already present; the existing record is left
    /// untouched.
    #[error("Student ID {0} already exists")]
    DuplicateId(u32),
    /// No record with this id exists.
    #[error("Student ID {0} not found")]
    NotFound(u32),
}

/// The id-keyed store of all student records. Owns its records exclusively;
/// records are mutated in place and never deleted.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StudentRegistry {
    /// Records keyed by student id.
    students: HashMap<u32, StudentRecord>,
}

impl StudentRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a record under its own id. Fails with
    /// [`RegistryError::DuplicateId`] when the id is taken.
    pub fn insert(&mut self, record: StudentRecord) -> Result<(), RegistryError> {
        let id = record.id();
        if self.students.contains_key(&id) {
            return Err(RegistryError::DuplicateId(id));
        }
        self.students.insert(id, record);
        Ok(())
    }

    /// Returns the record for `id`, or `None`.
    pub fn lookup(&self, id: u32) -> Option<&StudentRecord> {
        self.students.get(&id)
    }

    /// Returns the record for `id` mutably, or `None`.
    pub fn lookup_mut(&mut self, id: u32) -> Option<&mut StudentRecord> {
        self.students.get_mut(&id)
    }

    /// Like [`Self::lookup`] but failing with [`RegistryError::NotFound`].
    pub fn get(&self, id: u32) -> Result<&StudentRecord, RegistryError> {
        self.lookup(id).ok_or(RegistryError::NotFound(id))
    }

    /// Iterates over all records. Backed by a `HashMap`, so the order is
    /// unspecified.
    pub fn all(&self) -> impl Iterator<Item = &StudentRecord> {
        self.students.values()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// True when no records are stored.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
