//! Mobile device record storage.
//!
//! Provides the [`MobileStorage`] trait and [`MobileStore`], an
//! identifier-keyed record set that is either in-memory only or mirrored
//! to a JSONL snapshot file on every mutation.

mod jsonl;
mod storage;
mod store;
mod types;

pub use jsonl::{export_records_to_jsonl, parse_jsonl_records};
pub use storage::MobileStorage;
pub use store::{MobileStore, SNAPSHOT_FILE_NAME};
pub use types::{Mobile, MobileStorageError};
