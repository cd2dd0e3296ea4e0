use std::collections::{HashMap, VecDeque};
use crate::reservations::domain::model::ReservationEntity;

/// ReservationQueue holds one FIFO queue of waiting patrons per ISBN.
///
/// A missing key means an empty queue: queues are created on the first enqueue and
/// dropped as soon as they drain, so long-tail ISBNs do not leave empty entries behind.
#[derive(Debug, Default, Clone)]
pub struct ReservationQueue {
    queue_by_isbn: HashMap<String, VecDeque<ReservationEntity>>,
}

impl ReservationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, reservation: ReservationEntity) {
        self.queue_by_isbn
            .entry(reservation.isbn.to_string())
            .or_default()
            .push_back(reservation);
    }

    pub fn peek_head(&self, isbn: &str) -> Option<&ReservationEntity> {
        self.queue_by_isbn.get(isbn).and_then(|q| q.front())
    }

    pub fn dequeue_head(&mut self, isbn: &str) -> Option<ReservationEntity> {
        let queue = self.queue_by_isbn.get_mut(isbn)?;
        let head = queue.pop_front();
        if queue.is_empty() {
            self.queue_by_isbn.remove(isbn);
        }
        head
    }

    pub fn has_any(&self, isbn: &str) -> bool {
        self.queue_by_isbn.get(isbn).map(|q| !q.is_empty()).unwrap_or(false)
    }

    pub fn has_reservation_for(&self, isbn: &str, patron_id: &str) -> bool {
        match self.queue_by_isbn.get(isbn) {
            Some(queue) => queue.iter().any(|r| r.patron_id == patron_id),
            None => false,
        }
    }

    // reservations_for scans every queue; ordering across ISBNs is unspecified
    pub fn reservations_for(&self, patron_id: &str) -> Vec<ReservationEntity> {
        self.queue_by_isbn.values()
            .flat_map(|q| q.iter())
            .filter(|r| r.patron_id == patron_id)
            .cloned()
            .collect()
    }

    // remove cancels the patron's reservation wherever it sits in the queue
    pub fn remove(&mut self, isbn: &str, patron_id: &str) -> Option<ReservationEntity> {
        let queue = self.queue_by_isbn.get_mut(isbn)?;
        let position = queue.iter().position(|r| r.patron_id == patron_id)?;
        let removed = queue.remove(position);
        if queue.is_empty() {
            self.queue_by_isbn.remove(isbn);
        }
        removed
    }

    pub fn queue_for(&self, isbn: &str) -> Vec<ReservationEntity> {
        self.queue_by_isbn.get(isbn)
            .map(|q| q.iter().cloned().collect())
            .unwrap_or_default()
    }

    #[cfg(test)]
    pub(crate) fn queued_isbns(&self) -> usize {
        self.queue_by_isbn.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::reservations::domain::model::ReservationEntity;
    use crate::reservations::queue::ReservationQueue;

    const ISBN: &str = "0306406152";

    fn queue_of(patrons: &[&str]) -> ReservationQueue {
        let mut queue = ReservationQueue::new();
        for patron in patrons {
            queue.enqueue(ReservationEntity::new(ISBN, patron));
        }
        queue
    }

    #[test]
    fn test_should_serve_fifo() {
        let mut queue = queue_of(&["b", "c"]);
        assert!(queue.has_any(ISBN));
        assert_eq!("b", queue.peek_head(ISBN).expect("head").patron_id.as_str());
        assert_eq!("b", queue.dequeue_head(ISBN).expect("head").patron_id.as_str());
        assert_eq!("c", queue.peek_head(ISBN).expect("head").patron_id.as_str());
        assert_eq!("c", queue.dequeue_head(ISBN).expect("head").patron_id.as_str());
        assert!(queue.dequeue_head(ISBN).is_none());
        assert!(!queue.has_any(ISBN));
    }

    #[test]
    fn test_should_discard_drained_queue() {
        let mut queue = queue_of(&["b"]);
        assert_eq!(1, queue.queued_isbns());
        queue.dequeue_head(ISBN);
        assert_eq!(0, queue.queued_isbns());
        assert!(queue.peek_head(ISBN).is_none());
    }

    #[test]
    fn test_should_find_reservations() {
        let mut queue = queue_of(&["b", "c"]);
        queue.enqueue(ReservationEntity::new("9780306406157", "c"));
        assert!(queue.has_reservation_for(ISBN, "c"));
        assert!(!queue.has_reservation_for(ISBN, "d"));
        assert!(!queue.has_reservation_for("9780306406157", "b"));
        assert_eq!(2, queue.reservations_for("c").len());
        assert!(queue.reservations_for("d").is_empty());
    }

    #[test]
    fn test_should_remove_from_middle() {
        let mut queue = queue_of(&["b", "c", "d"]);
        let removed = queue.remove(ISBN, "c").expect("should remove");
        assert_eq!("c", removed.patron_id.as_str());
        let order: Vec<String> = queue.queue_for(ISBN).into_iter().map(|r| r.patron_id).collect();
        assert_eq!(vec!["b".to_string(), "d".to_string()], order);
        assert!(queue.remove(ISBN, "c").is_none());

        queue.remove(ISBN, "b");
        queue.remove(ISBN, "d");
        assert_eq!(0, queue.queued_isbns());
    }
}
