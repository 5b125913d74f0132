pub mod config;
pub mod db;
pub mod error;
pub mod store;

pub use config::Settings;
pub use db::{ConnectionDescriptor, MigrationsSource, ProviderKind};
pub use error::BootstrapError;
pub use store::{
    ConfigurationStoreConfigBuilder, DbContextHandle, DesignTimeFactory,
    OperationalStoreConfigBuilder, StoreContext, StoreContextBuilder, StoreKind,
};
