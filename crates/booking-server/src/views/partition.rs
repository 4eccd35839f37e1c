//! Past/upcoming split of scheduled shows
//!
//! A show is upcoming iff its start time is strictly after the reference
//! instant. A show starting exactly at the reference instant is past.

use chrono::{DateTime, Utc};

use crate::models::{Show, ShowListing};

/// Anything with a scheduled start
pub trait Scheduled {
    fn start_time(&self) -> DateTime<Utc>;

    /// Upcoming relative to `reference_time`
    fn is_upcoming(&self, reference_time: DateTime<Utc>) -> bool {
        self.start_time() > reference_time
    }
}

impl Scheduled for Show {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

impl Scheduled for ShowListing {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

impl<T: Scheduled + ?Sized> Scheduled for &T {
    fn start_time(&self) -> DateTime<Utc> {
        (**self).start_time()
    }
}

/// Result of [`partition`]; both halves keep input order
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

impl<T> Partition<T> {
    pub fn past_count(&self) -> usize {
        self.past.len()
    }

    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }
}

impl<T> Default for Partition<T> {
    fn default() -> Self {
        Self {
            past: Vec::new(),
            upcoming: Vec::new(),
        }
    }
}

/// Split `shows` into past and upcoming relative to `reference_time`
pub fn partition<T, I>(shows: I, reference_time: DateTime<Utc>) -> Partition<T>
where
    I: IntoIterator<Item = T>,
    T: Scheduled,
{
    let mut split = Partition::default();
    for show in shows {
        if show.is_upcoming(reference_time) {
            split.upcoming.push(show);
        } else {
            split.past.push(show);
        }
    }
    split
}

/// Number of shows strictly after `reference_time`
pub fn count_upcoming<'a, T, I>(shows: I, reference_time: DateTime<Utc>) -> usize
where
    I: IntoIterator<Item = &'a T>,
    T: Scheduled + 'a,
{
    shows
        .into_iter()
        .filter(|show| show.is_upcoming(reference_time))
        .count()
}
