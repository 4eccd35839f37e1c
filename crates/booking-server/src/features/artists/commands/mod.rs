pub mod create;
pub mod delete;
pub mod update;

pub use create::{CreateArtistCommand, CreateArtistError, CreateArtistResponse};
pub use delete::{DeleteArtistCommand, DeleteArtistError, DeleteArtistResponse};
pub use update::{UpdateArtistCommand, UpdateArtistError, UpdateArtistResponse};
