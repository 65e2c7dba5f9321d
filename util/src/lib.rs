pub mod config;
pub mod state;
pub mod storage;
pub mod test_helpers;
