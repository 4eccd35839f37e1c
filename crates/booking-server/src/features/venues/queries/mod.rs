pub mod edit_form;
pub mod get;
pub mod list;
pub mod search;

pub use edit_form::{GetVenueFormError, GetVenueFormQuery};
pub use get::{GetVenueError, GetVenueQuery};
pub use list::{ListVenuesError, ListVenuesQuery};
pub use search::{SearchVenuesError, SearchVenuesQuery};
