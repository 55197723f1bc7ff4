//! SeaORM entity and connection helpers for the registry's `users` table.

pub mod errors;
pub mod db;
pub mod user;

#[cfg(test)]
mod tests;
