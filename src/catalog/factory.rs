use std::sync::Arc;
use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::lending::store::LendingStore;

pub fn create_catalog_service(config: &Configuration, store: Arc<LendingStore>) -> Arc<dyn CatalogService> {
    let book_repo = factory::create_book_repository();
    Arc::new(CatalogServiceImpl::new(config, book_repo, store))
}
