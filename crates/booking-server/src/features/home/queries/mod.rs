pub mod recent;

pub use recent::{RecentListingsError, RecentListingsQuery};
