pub mod list;

pub use list::{ListShowsError, ListShowsQuery};
