pub mod message;
pub mod storage;
pub mod time;
