pub mod certification;
pub mod content;
pub mod error;
pub mod feedback;
pub mod progress;
pub mod recap;
pub mod scoring;
pub mod session;
pub mod status;
pub mod test_set;
pub mod user;
