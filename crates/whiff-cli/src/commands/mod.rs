pub(crate) mod helpers;
pub(crate) mod odds;
pub(crate) mod query;
