// src/domain/mod.rs
pub mod expense_model;
