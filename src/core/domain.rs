use std::env;
use serde::{Deserialize, Serialize};
use tracing::warn;
use crate::gateway::NotifierVia;

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub max_loans_per_patron: i64,
    pub loan_period_days: i64,
    pub default_recommendations: i64,
    pub notifier: NotifierVia,
    pub bind_addr: String,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            max_loans_per_patron: 3,
            loan_period_days: 14,
            default_recommendations: 5,
            notifier: NotifierVia::InMemory,
            bind_addr: "0.0.0.0:3000".to_string(),
        }
    }

    // from_env overrides defaults with LMS_* environment variables
    pub fn from_env() -> Self {
        let mut config = Configuration::new(
            env::var("LMS_BRANCH").unwrap_or_else(|_| "main".to_string()).as_str());
        if let Some(max_loans) = parse_env_number("LMS_MAX_LOANS") {
            config.max_loans_per_patron = max_loans;
        }
        if let Some(loan_days) = parse_env_number("LMS_LOAN_DAYS") {
            config.loan_period_days = loan_days;
        }
        if let Some(limit) = parse_env_number("LMS_RECOMMENDATIONS") {
            config.default_recommendations = limit;
        }
        if let Ok(via) = env::var("LMS_NOTIFIER") {
            config.notifier = NotifierVia::from(via);
        }
        if let Ok(addr) = env::var("LMS_BIND_ADDR") {
            config.bind_addr = addr;
        }
        config
    }
}

fn parse_env_number(name: &str) -> Option<i64> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse::<i64>() {
        Ok(n) => Some(n),
        Err(_) => {
            warn!(variable = name, value = raw.as_str(), "ignoring non-numeric configuration value");
            None
        }
    }
}
