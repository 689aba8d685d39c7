/// Application layer - Use cases, sessions, and DTOs
///
/// This layer orchestrates domain services and coordinates with
/// infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod sessions;
pub mod use_cases;
