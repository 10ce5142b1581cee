mod aes_core;
mod simd;

pub use aes_core::*;

#[cfg(test)]
mod tests;
