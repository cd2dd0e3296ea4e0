use std::collections::HashMap;
use parking_lot::RwLock;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

pub trait Repository<Entity>: Sync + Send {
    // create an entity, failing if the id is taken
    fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // updates an existing entity
    fn update(&self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    fn get(&self, id: &str) -> LibraryResult<Entity>;

    // delete an entity
    fn delete(&self, id: &str) -> LibraryResult<usize>;

    fn exists(&self, id: &str) -> bool;

    // snapshot of every entity, in no particular order
    fn find_all(&self) -> Vec<Entity>;
}

// MemoryRepository keeps entities in a process-scoped map keyed by their id.
#[derive(Debug)]
pub struct MemoryRepository<Entity> {
    kind: String,
    entities: RwLock<HashMap<String, Entity>>,
}

impl<Entity> MemoryRepository<Entity> {
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            entities: RwLock::new(HashMap::new()),
        }
    }
}

impl<Entity: Identifiable + Clone> Repository<Entity> for MemoryRepository<Entity> {
    fn create(&self, entity: &Entity) -> LibraryResult<usize> {
        let mut entities = self.entities.write();
        let id = entity.id();
        if entities.contains_key(&id) {
            return Err(LibraryError::rule_violation(
                format!("{} already exists: {}", self.kind, id).as_str()));
        }
        entities.insert(id, entity.clone());
        Ok(1)
    }

    fn update(&self, entity: &Entity) -> LibraryResult<usize> {
        let mut entities = self.entities.write();
        match entities.get_mut(&entity.id()) {
            Some(existing) => {
                *existing = entity.clone();
                Ok(1)
            }
            None => Err(LibraryError::not_found(
                format!("{} not found: {}", self.kind, entity.id()).as_str())),
        }
    }

    fn get(&self, id: &str) -> LibraryResult<Entity> {
        self.entities.read().get(id).cloned().ok_or_else(|| LibraryError::not_found(
            format!("{} not found: {}", self.kind, id).as_str()))
    }

    fn delete(&self, id: &str) -> LibraryResult<usize> {
        match self.entities.write().remove(id) {
            Some(_) => Ok(1),
            None => Err(LibraryError::not_found(
                format!("{} not found: {}", self.kind, id).as_str())),
        }
    }

    fn exists(&self, id: &str) -> bool {
        self.entities.read().contains_key(id)
    }

    fn find_all(&self) -> Vec<Entity> {
        self.entities.read().values().cloned().collect()
    }
}
