use std::sync::Arc;
use crate::core::domain::Configuration;
use crate::core::repository::{MemoryRepository, Repository};
use crate::lending::store::LendingStore;
use crate::patrons::domain::PatronService;
use crate::patrons::domain::model::PatronEntity;
use crate::patrons::domain::service::PatronServiceImpl;

pub fn create_patron_repository() -> Box<dyn Repository<PatronEntity>> {
    Box::new(MemoryRepository::new("patron"))
}

pub fn create_patron_service(config: &Configuration, store: Arc<LendingStore>) -> Arc<dyn PatronService> {
    Arc::new(PatronServiceImpl::new(config, create_patron_repository(), store))
}
