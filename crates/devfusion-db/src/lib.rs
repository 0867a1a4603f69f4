pub mod test_set;
pub mod topic;
pub mod user;
pub mod util;

pub use sea_orm;
