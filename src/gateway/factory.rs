use std::sync::Arc;
use crate::gateway::events::NotificationSink;
use crate::gateway::logs::publisher::LogNotifier;
use crate::gateway::memory::publisher::MemoryNotifier;
use crate::gateway::NotifierVia;

pub fn create_notifier(via: NotifierVia) -> Arc<dyn NotificationSink> {
    match via {
        NotifierVia::InMemory => Arc::new(MemoryNotifier::new()),
        NotifierVia::Logs => Arc::new(LogNotifier::new()),
    }
}
