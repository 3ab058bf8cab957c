// Format validators. Each check is a pure function of the saved content; no
// shared state and no retries.

pub mod archive;
pub mod json;
pub mod text;
#[cfg(feature = "workbook")]
pub mod workbook;
