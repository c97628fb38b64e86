//! Domain types for the bank-marketing prediction form.

pub mod field;
pub mod prediction;
pub mod record;
pub mod session;
pub mod types;
