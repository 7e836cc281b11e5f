use super::DayStore;
use crate::models::work_days::WorkDays;
use std::cell::RefCell;

/// In-process store, for embedding and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    days: RefCell<WorkDays>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DayStore for MemoryStore {
    fn load(&self) -> WorkDays {
        self.days.borrow().clone()
    }

    fn save(&self, days: &WorkDays) {
        *self.days.borrow_mut() = days.clone();
    }

    fn clear(&self) {
        *self.days.borrow_mut() = WorkDays::new();
    }
}
