pub mod create;

pub use create::{CreateShowCommand, CreateShowError, CreateShowResponse};
