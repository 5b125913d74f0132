//! Connection side of a store context.
//!
//! Layout:
//! - `provider.rs`: supported relational providers
//! - `connection.rs`: connection descriptor, lenient connection-string view

pub mod connection;
pub mod provider;

pub use connection::{ConnectionDescriptor, ConnectionString, MigrationsSource};
pub use provider::ProviderKind;
