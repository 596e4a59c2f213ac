//! Wire models exchanged with the remote authority.

pub mod errors;
pub mod user;

pub use errors::ErrorResponse;
pub use user::UserProfile;
