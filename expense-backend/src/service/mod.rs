// src/service/mod.rs
pub mod expense_service;
