// src/api/dto/mod.rs
pub mod expense_dto;
