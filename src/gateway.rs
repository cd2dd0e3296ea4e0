use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

pub mod events;
pub mod factory;
pub mod logs;
pub mod memory;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum NotifierVia {
    InMemory,
    Logs,
}

impl From<String> for NotifierVia {
    fn from(s: String) -> Self {
        match s.trim().to_lowercase().as_str() {
            "logs" => NotifierVia::Logs,
            _ => NotifierVia::InMemory,
        }
    }
}

impl Display for NotifierVia {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            NotifierVia::InMemory => write!(f, "memory"),
            NotifierVia::Logs => write!(f, "logs"),
        }
    }
}
