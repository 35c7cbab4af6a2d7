//! Auth-domain scopes, secrets, and access-token models, plus the per-scope cache.

pub mod cache;
pub mod scope;
pub mod secret;
pub mod token;

pub use cache::*;
pub use scope::*;
pub use secret::*;
pub use token::*;
