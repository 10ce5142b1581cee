mod lcg;
mod mode;

pub use mode::{derive_key, DerivationMode};

#[cfg(test)]
mod tests;
