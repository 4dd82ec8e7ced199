pub(crate) mod contents;
pub(crate) mod history;
