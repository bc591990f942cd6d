pub mod jwt;
pub mod query;
pub mod storage;
pub mod time;
