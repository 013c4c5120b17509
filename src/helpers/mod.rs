//! Helpers at the boundaries of the table builder.
pub(crate) mod persister;
