pub mod base;
pub mod disk;

pub use base::{StorageError, VacancyRepository};
pub use disk::JsonFileRepository;
