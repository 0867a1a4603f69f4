pub mod mcq;
pub mod test_set;
pub mod topic;
pub mod user;
