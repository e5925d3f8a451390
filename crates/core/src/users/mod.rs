//! Users module - registration and credential checks.
//!
//! The ledger itself trusts any `user_id` it is given; this module is the
//! collaborator that issues those ids.

mod users_model;
mod users_service;
mod users_traits;

#[cfg(test)]
mod users_service_tests;

pub use users_model::{Credentials, NewUser, User};
pub use users_service::UserService;
pub use users_traits::{UserRepositoryTrait, UserServiceTrait};
