pub mod feedback;
pub mod progress;
pub mod status;
pub mod topic;
pub mod user;
