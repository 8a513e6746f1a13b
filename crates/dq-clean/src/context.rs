use chrono::{Local, NaiveDateTime};

/// Processing context shared by all cleaners in one run.
///
/// The only environmental input the engine has is the reference time used by
/// the future-date check. Capturing it once per run keeps a run internally
/// consistent, and tests construct a fixed context for reproducibility.
#[derive(Debug, Clone, Copy)]
pub struct CleanContext {
    pub now: NaiveDateTime,
}

impl CleanContext {
    /// Context anchored at the current local time.
    pub fn new() -> Self {
        Self {
            now: Local::now().naive_local(),
        }
    }

    /// Context with a fixed reference time.
    pub fn fixed(now: NaiveDateTime) -> Self {
        Self { now }
    }
}

impl Default for CleanContext {
    fn default() -> Self {
        Self::new()
    }
}
