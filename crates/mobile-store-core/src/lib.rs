pub mod error;
pub mod mobile;

pub use error::CoreError;
pub use mobile::{Mobile, MobileStorage, MobileStorageError, MobileStore};
