//! Desktop platform adapters for `folio-core`.

pub mod input;
pub mod render;
pub mod scheduler;
pub mod storage;
