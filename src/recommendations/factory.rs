use std::sync::Arc;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::lending::store::LendingStore;
use crate::patrons::domain::PatronService;
use crate::recommendations::domain::RecommendationService;
use crate::recommendations::domain::service::RecommendationServiceImpl;

pub fn create_recommendation_service(config: &Configuration, store: Arc<LendingStore>,
                                     catalog_svc: Arc<dyn CatalogService>,
                                     patron_svc: Arc<dyn PatronService>) -> Arc<dyn RecommendationService> {
    Arc::new(RecommendationServiceImpl::new(config, store, catalog_svc, patron_svc))
}
