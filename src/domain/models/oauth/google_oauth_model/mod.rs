//! Google OAuth 2.0 모델

pub mod google_user;
pub mod oauth_provider;

pub use google_user::{GoogleTokenResponse, GoogleUserInfo};
pub use oauth_provider::OAuthProfile;
