//! Selection source implementations.
//!
//! - [`StorageSource`] - Read from a [`KeyValueStore`](crate::KeyValueStore)
//! - [`CookieSource`] - Read from a [`CookieStore`](crate::CookieStore)
//! - [`FixedSource`] - Provide an explicit id

mod cookie;
mod fixed;
mod storage;

pub use cookie::CookieSource;
pub use fixed::FixedSource;
pub use storage::StorageSource;
