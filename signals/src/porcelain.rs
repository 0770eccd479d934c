//! Convenience registration helpers layered over [`Connection`](crate::Connection).

pub mod connect;

#[cfg(feature = "tokio")]
pub mod channel;

pub use connect::*;

#[cfg(feature = "tokio")]
pub use channel::*;
