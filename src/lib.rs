pub mod behavior;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
