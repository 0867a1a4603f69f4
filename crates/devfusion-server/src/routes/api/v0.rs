pub(crate) mod admin;
pub(crate) mod content;
pub(crate) mod feedback;
pub(crate) mod status;
pub(crate) mod tests;
pub(crate) mod user;
