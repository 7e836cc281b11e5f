//! Persistence of the recorded days.
//!
//! Stores are best-effort collaborators: `load` degrades to an empty
//! collection and `save`/`clear` log their failures instead of returning
//! them, so the day engine never sees storage errors.

pub mod activity_log;
pub mod json_file;
pub mod memory;

use crate::models::work_days::WorkDays;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

pub trait DayStore {
    /// Recorded days, or an empty collection when nothing usable is stored.
    fn load(&self) -> WorkDays;

    fn save(&self, days: &WorkDays);

    fn clear(&self);
}
