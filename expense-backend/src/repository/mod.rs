// src/repository/mod.rs
pub mod expense_repository;
