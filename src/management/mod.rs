mod auth;

pub use auth::MAX_AUTH_ATTEMPTS;
pub use auth::TokenManager;
