pub mod dates;
pub mod db;
pub mod errors;
pub mod mongo;
pub mod repository;

pub use errors::ServiceError;
pub use repository::{BioDataRepository, ProgramRepository};
