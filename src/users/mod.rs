// Gateway module for users - follows the Train Station Pattern
// All external access must go through this gateway

mod store;
mod types;

pub use store::UserStore;
pub use types::{NewUser, User, UserUpdate};
