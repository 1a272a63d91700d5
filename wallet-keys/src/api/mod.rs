// wallet-keys/src/api/mod.rs

#[allow(clippy::module_inception)]
mod api;

pub use self::api::*;
