mod record;
mod walker;

pub use record::{FileRecord, extension_of};
pub use walker::{FileEnumerator, ScanConfig, enumerate_files};
