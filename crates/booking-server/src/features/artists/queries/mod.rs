pub mod edit_form;
pub mod get;
pub mod list;
pub mod search;

pub use edit_form::{GetArtistFormError, GetArtistFormQuery};
pub use get::{GetArtistError, GetArtistQuery};
pub use list::{ListArtistsError, ListArtistsQuery};
pub use search::{SearchArtistsError, SearchArtistsQuery};
