#![warn(clippy::pedantic)]

pub mod codec;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;
pub mod memory;
pub mod normalize;


/// The single browser-storage key under which the whole user data blob is
/// kept. Reads and writes are always whole-value.
pub const STORAGE_KEY: &str = "tamrinsaz-user-data";
