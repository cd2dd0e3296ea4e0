use std::sync::Arc;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::gateway::events::NotificationSink;
use crate::lending::domain::LendingService;
use crate::lending::domain::service::LendingServiceImpl;
use crate::lending::store::LendingStore;
use crate::patrons::domain::PatronService;

// create_lending_service fails when the configured lending policy is invalid
pub fn create_lending_service(config: &Configuration, store: Arc<LendingStore>,
                              catalog_svc: Arc<dyn CatalogService>, patron_svc: Arc<dyn PatronService>,
                              notifier: Arc<dyn NotificationSink>) -> LibraryResult<Arc<dyn LendingService>> {
    let svc = LendingServiceImpl::new(config, store, catalog_svc, patron_svc, notifier)?;
    Ok(Arc::new(svc))
}
