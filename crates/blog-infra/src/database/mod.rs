//! Database connection management and the SeaORM post repository.

mod connections;
pub mod entity;
mod postgres_repo;

pub use connections::{DatabaseConfig, connect, ensure_schema};
pub use postgres_repo::PostgresPostRepository;

#[cfg(test)]
mod tests;
