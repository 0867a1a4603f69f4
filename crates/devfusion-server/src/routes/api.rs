pub(crate) mod v0;
