//! Data models for Funtime

pub mod account;
pub mod event;
pub mod favorite;
pub mod like;
pub mod review;

// Re-export commonly used types
pub use account::{Account, AccountClaims, Role};
pub use event::Event;
pub use favorite::Favorite;
pub use like::{Like, LikeTarget};
pub use review::Review;
