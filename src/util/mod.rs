#[cfg(feature = "dynamic")]
pub mod fmt;
pub mod hash;
