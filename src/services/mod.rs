pub mod export;
pub mod import;
pub mod share;
pub mod storage;
