//! The common crate contains the structures shared by the laundry user API server and its callers.

#![warn(rustdoc::private_doc_tests)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backend;

/// Primary key for users
/// Note: Database assigns IDs on insert and never re-uses them.
pub type UserID = i32;

/// Message returned after a successful POST /user
pub const USER_ADDED: &str = "User added successfully";
/// Message returned after a successful PUT /user
pub const USER_UPDATED: &str = "User updated successfully";
/// Message returned after a successful DELETE /user
pub const USER_DELETED: &str = "User deleted successfully";

/// Error returned when GET /user fails
pub const LIST_FAILED: &str = "Failed to list users";
/// Error returned when POST /user fails
pub const ADD_FAILED: &str = "Failed to add user";
/// Error returned when PUT /user fails
pub const UPDATE_FAILED: &str = "Failed to update user";
/// Error returned when DELETE /user fails
pub const DELETE_FAILED: &str = "Failed to delete user";
