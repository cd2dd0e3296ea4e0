use std::sync::Arc;
use tracing::info;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::lending::store::LendingStore;
use crate::loans::dto::LoanDto;
use crate::patrons::domain::PatronService;
use crate::patrons::domain::model::PatronEntity;
use crate::patrons::dto::PatronDto;
use crate::utils::date::now;
use crate::utils::validation::require_non_blank;

pub(crate) struct PatronServiceImpl {
    branch_id: String,
    patron_repository: Box<dyn Repository<PatronEntity>>,
    store: Arc<LendingStore>,
}

impl PatronServiceImpl {
    pub(crate) fn new(config: &Configuration, patron_repository: Box<dyn Repository<PatronEntity>>,
                      store: Arc<LendingStore>) -> Self {
        PatronServiceImpl {
            branch_id: config.branch_id.to_string(),
            patron_repository,
            store,
        }
    }
}

impl PatronService for PatronServiceImpl {
    fn add_patron(&self, patron: &PatronDto) -> LibraryResult<PatronDto> {
        let patron_id = require_non_blank(patron.patron_id.as_str(), "patron_id")?;
        let name = require_non_blank(patron.name.as_str(), "name")?;
        let contact = require_non_blank(patron.contact.as_str(), "contact")?;
        let entity = PatronEntity::new(patron_id.as_str(), name.as_str(), contact.as_str());
        self.patron_repository.create(&entity)?;
        info!(branch_id = self.branch_id.as_str(), patron_id = entity.patron_id.as_str(), "patron added");
        Ok(PatronDto::from(&entity))
    }

    fn update_patron(&self, patron_id: &str, name: &str, contact: &str) -> LibraryResult<PatronDto> {
        let patron_id = require_non_blank(patron_id, "patron_id")?;
        let name = require_non_blank(name, "name")?;
        let contact = require_non_blank(contact, "contact")?;
        let mut entity = self.patron_repository.get(patron_id.as_str())?;
        entity.name = name;
        entity.contact = contact;
        entity.updated_at = now();
        self.patron_repository.update(&entity)?;
        info!(patron_id = patron_id.as_str(), "patron updated");
        Ok(PatronDto::from(&entity))
    }

    fn find_patron_by_id(&self, patron_id: &str) -> LibraryResult<PatronDto> {
        self.patron_repository.get(patron_id.trim()).map(|p| PatronDto::from(&p))
    }

    fn exists(&self, patron_id: &str) -> bool {
        self.patron_repository.exists(patron_id.trim())
    }

    fn list_patrons(&self) -> Vec<PatronDto> {
        let mut patrons: Vec<PatronDto> = self.patron_repository.find_all().iter().map(PatronDto::from).collect();
        patrons.sort_by(|a, b| a.patron_id.cmp(&b.patron_id));
        patrons
    }

    fn borrow_history(&self, patron_id: &str) -> LibraryResult<Vec<LoanDto>> {
        let patron_id = require_non_blank(patron_id, "patron_id")?;
        if !self.exists(patron_id.as_str()) {
            return Err(LibraryError::not_found(format!("patron not found: {}", patron_id).as_str()));
        }
        Ok(self.store.read().ledger.loans_for(patron_id.as_str()).iter().map(LoanDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use chrono::NaiveDate;
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;
    use crate::lending::store::LendingStore;
    use crate::loans::domain::model::LoanEntity;
    use crate::patrons::domain::PatronService;
    use crate::patrons::dto::PatronDto;
    use crate::patrons::factory::create_patron_service;

    fn patrons() -> (Arc<dyn PatronService>, Arc<LendingStore>) {
        let store = Arc::new(LendingStore::new());
        (create_patron_service(&Configuration::new("test"), store.clone()), store)
    }

    #[test]
    fn test_should_add_patron() {
        let (patron_svc, _) = patrons();
        let added = patron_svc.add_patron(&PatronDto::new(" p1 ", "Ada", "ada@example.org")).expect("should add patron");
        assert_eq!("p1", added.patron_id.as_str());
        assert!(patron_svc.exists("p1"));
        assert_eq!(added, patron_svc.find_patron_by_id("p1").expect("should find patron"));

        let dup = patron_svc.add_patron(&PatronDto::new("p1", "Other", "other@example.org"));
        assert!(matches!(dup, Err(LibraryError::RuleViolation { .. })));
        let blank = patron_svc.add_patron(&PatronDto::new("p2", " ", "x@example.org"));
        assert!(matches!(blank, Err(LibraryError::Validation { .. })));
    }

    #[test]
    fn test_should_update_patron() {
        let (patron_svc, _) = patrons();
        patron_svc.add_patron(&PatronDto::new("p1", "Ada", "ada@example.org")).expect("should add patron");
        let updated = patron_svc.update_patron("p1", "Ada Lovelace", "+44 20 7946 0000").expect("should update");
        assert_eq!("Ada Lovelace", updated.name.as_str());
        assert!(updated.updated_at >= updated.created_at);
        assert!(matches!(patron_svc.update_patron("p9", "X", "Y"), Err(LibraryError::NotFound { .. })));
    }

    #[test]
    fn test_should_list_patrons_by_id() {
        let (patron_svc, _) = patrons();
        for id in ["c", "a", "b"] {
            patron_svc.add_patron(&PatronDto::new(id, "Name", "contact")).expect("should add patron");
        }
        let ids: Vec<String> = patron_svc.list_patrons().into_iter().map(|p| p.patron_id).collect();
        assert_eq!(vec!["a", "b", "c"], ids);
    }

    #[test]
    fn test_should_return_borrow_history() {
        let (patron_svc, store) = patrons();
        patron_svc.add_patron(&PatronDto::new("p1", "Ada", "ada@example.org")).expect("should add patron");
        assert!(patron_svc.borrow_history("p1").expect("should load history").is_empty());
        assert!(matches!(patron_svc.borrow_history("p9"), Err(LibraryError::NotFound { .. })));

        let checkout = NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date");
        let mut loan = LoanEntity::new("0306406152", "p1", checkout, 14).expect("should build loan");
        store.write().ledger.record_loan(loan.clone());
        loan.mark_returned(checkout).expect("should return");
        store.write().ledger.record_loan(loan);
        store.write().ledger.record_loan(LoanEntity::new("1234567890", "p1", checkout, 14).expect("should build loan"));

        let history = patron_svc.borrow_history("p1").expect("should load history");
        assert_eq!(2, history.len());
        assert!(!history[0].is_active());
        assert!(history[1].is_active());
    }
}
