// src/api/handlers/mod.rs
pub mod expense_handler;
pub mod system_handler;
