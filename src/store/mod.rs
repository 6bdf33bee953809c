// src/store/mod.rs

//! In-memory user, state, and session stores.
//!
//! All three are process-lifetime maps behind locks; a durable backend
//! can replace them without touching the handlers, which only see these
//! types.

mod sessions;
mod users;

pub use sessions::SessionStore;
pub use users::UserStore;
