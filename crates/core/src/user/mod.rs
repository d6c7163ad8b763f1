mod error;
mod types;

pub use error::DiscordIdError;
pub use types::{DiscordId, User, UserClaims};
