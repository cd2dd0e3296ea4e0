use std::sync::Arc;
use axum::http::StatusCode;
use crate::catalog::domain::CatalogService;
use crate::catalog::factory::create_catalog_service;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::gateway::events::NotificationSink;
use crate::gateway::factory::create_notifier;
use crate::lending::domain::LendingService;
use crate::lending::factory::create_lending_service;
use crate::lending::store::LendingStore;
use crate::patrons::domain::PatronService;
use crate::patrons::factory::create_patron_service;
use crate::recommendations::domain::RecommendationService;
use crate::recommendations::factory::create_recommendation_service;

// AppState is shared by every handler; all services see the same lending store.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Configuration,
    pub(crate) catalog: Arc<dyn CatalogService>,
    pub(crate) patrons: Arc<dyn PatronService>,
    pub(crate) lending: Arc<dyn LendingService>,
    pub(crate) recommendations: Arc<dyn RecommendationService>,
    pub(crate) notifier: Arc<dyn NotificationSink>,
}

impl AppState {
    pub fn new(config: &Configuration) -> LibraryResult<AppState> {
        let store = Arc::new(LendingStore::new());
        let catalog = create_catalog_service(config, store.clone());
        let patrons = create_patron_service(config, store.clone());
        let notifier = create_notifier(config.notifier);
        let lending = create_lending_service(
            config, store.clone(), catalog.clone(), patrons.clone(), notifier.clone())?;
        let recommendations = create_recommendation_service(
            config, store, catalog.clone(), patrons.clone());
        Ok(AppState {
            config: config.clone(),
            catalog,
            patrons,
            lending,
            recommendations,
            notifier,
        })
    }
}

pub(crate) type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{:?}", err))
            }
            CommandError::Conflict { .. } => {
                (StatusCode::CONFLICT, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use crate::core::command::CommandError;
    use crate::core::controller::{AppState, ServerError};
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_map_command_errors_to_status() {
        let cases = vec![
            (CommandError::NotFound { message: "x".to_string() }, StatusCode::NOT_FOUND),
            (CommandError::Conflict { message: "x".to_string() }, StatusCode::CONFLICT),
            (CommandError::Validation { message: "x".to_string(), field: None }, StatusCode::BAD_REQUEST),
            (CommandError::Serialization { message: "x".to_string() }, StatusCode::BAD_REQUEST),
        ];
        for (err, status) in cases {
            let (code, _) = ServerError::from(err);
            assert_eq!(status, code);
        }
    }

    #[test]
    fn test_should_reject_invalid_policy() {
        let mut config = Configuration::new("test");
        config.loan_period_days = 0;
        assert!(AppState::new(&config).is_err());
        config.loan_period_days = 1_000_000_000_000;
        assert!(AppState::new(&config).is_err());
        assert!(AppState::new(&Configuration::new("test")).is_ok());
    }
}
