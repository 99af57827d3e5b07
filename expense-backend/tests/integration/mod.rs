// tests/integration/mod.rs

pub mod system;
