pub mod client;
pub mod content;
pub mod model;
pub mod remote;
pub mod state;
pub mod storage;
