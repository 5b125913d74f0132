//! Store contexts: which store, its options, and the handle handed to the
//! migration tool.

pub mod builder;
pub mod context;
pub mod options;

use serde::Serialize;
use std::fmt;

pub use builder::{
    ConfigurationStoreConfigBuilder, DesignTimeFactory, OperationalStoreConfigBuilder,
    StoreContextBuilder,
};
pub use context::{ContextReport, DbContextHandle, StoreContext};
pub use options::{
    ConfigurationStoreOptions, OperationalStoreOptions, StoreOptions, TableConfiguration,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    Configuration,
    Operational,
}

impl StoreKind {
    pub const ALL: [StoreKind; 2] = [StoreKind::Configuration, StoreKind::Operational];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::Operational => "operational",
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compile-time store selector for [`StoreContextBuilder`].
pub trait Store: Send + Sync + 'static {
    const KIND: StoreKind;
    type Options: StoreOptions
        + Default
        + Clone
        + fmt::Debug
        + PartialEq
        + Eq
        + Serialize
        + Send
        + Sync;
}

/// Clients, resources and scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationStore {}

/// Persisted grants, tokens and device codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationalStore {}

impl Store for ConfigurationStore {
    const KIND: StoreKind = StoreKind::Configuration;
    type Options = ConfigurationStoreOptions;
}

impl Store for OperationalStore {
    const KIND: StoreKind = StoreKind::Operational;
    type Options = OperationalStoreOptions;
}
