//! Service layer of the user registry.
//! - `validation` turns raw request fields into a [`domain::NewUser`].
//! - `store` holds the [`store::RecordStore`] abstraction and its backends.
//! - `registry` orchestrates both behind [`registry::RegistryService`].

pub mod domain;
pub mod errors;
pub mod registry;
pub mod store;
pub mod validation;
#[cfg(test)]
pub mod test_support;

pub use registry::RegistryService;
