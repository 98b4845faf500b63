use indexmap::IndexMap;

use super::project::ProjectRecord;

/// Two records in one catalog share an id
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("duplicate project id \"{0}\"")]
pub struct DuplicateIdError(pub String);

/// The ordered, read-only set of project records keyed by id.
///
/// Insertion order is navigation order. A catalog is built once and never
/// mutated afterwards, so positions stay stable for its whole lifetime.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: IndexMap<String, ProjectRecord>,
}

impl Catalog {
    /// Build a catalog from records in display order, rejecting duplicate ids.
    pub fn from_records(records: Vec<ProjectRecord>) -> Result<Self, DuplicateIdError> {
        let mut projects = IndexMap::with_capacity(records.len());
        for record in records {
            if projects.contains_key(&record.id) {
                return Err(DuplicateIdError(record.id));
            }
            projects.insert(record.id.clone(), record);
        }
        Ok(Catalog { projects })
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.projects.contains_key(id)
    }

    /// Zero-based index of `id` in catalog order
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.projects.get_index_of(id)
    }

    /// Id at a zero-based index
    pub fn id_at(&self, index: usize) -> Option<&str> {
        self.projects.get_index(index).map(|(id, _)| id.as_str())
    }

    /// Ids in catalog order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.projects.keys().map(|id| id.as_str())
    }

    /// Records in catalog order
    pub fn records(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.projects.values()
    }
}
