//! sea-orm entities backing the API
pub mod user;
