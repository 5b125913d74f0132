use super::options::StoreOptions;
use super::{ConfigurationStore, OperationalStore, Store, StoreKind};
use crate::db::{ConnectionDescriptor, MigrationsSource, ProviderKind};
use serde::Serialize;

/// Connection plus store options, owned by whoever asked for it.
///
/// Only the builder constructs one, in a single step, so a handle is never
/// observed half-initialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbContextHandle<S: Store> {
    connection: ConnectionDescriptor,
    options: S::Options,
}

impl<S: Store> DbContextHandle<S> {
    pub(crate) fn new(connection: ConnectionDescriptor, options: S::Options) -> Self {
        Self {
            connection,
            options,
        }
    }

    pub fn kind(&self) -> StoreKind {
        S::KIND
    }

    pub fn connection(&self) -> &ConnectionDescriptor {
        &self.connection
    }

    pub fn options(&self) -> &S::Options {
        &self.options
    }

    /// Hand the pair over to the persistence framework.
    pub fn into_parts(self) -> (ConnectionDescriptor, S::Options) {
        (self.connection, self.options)
    }

    pub fn report(&self) -> ContextReport {
        ContextReport {
            store: S::KIND,
            provider: self.connection.provider(),
            database: self.connection.database_name(),
            connection: self.connection.redacted(),
            migrations_source: self.connection.migrations_source().clone(),
            default_schema: self.options.default_schema().map(str::to_string),
            tables: self.options.qualified_table_names(),
        }
    }
}

/// Either store's handle, for callers that pick the store at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreContext {
    Configuration(DbContextHandle<ConfigurationStore>),
    Operational(DbContextHandle<OperationalStore>),
}

impl StoreContext {
    pub fn kind(&self) -> StoreKind {
        match self {
            Self::Configuration(h) => h.kind(),
            Self::Operational(h) => h.kind(),
        }
    }

    pub fn report(&self) -> ContextReport {
        match self {
            Self::Configuration(h) => h.report(),
            Self::Operational(h) => h.report(),
        }
    }
}

impl From<DbContextHandle<ConfigurationStore>> for StoreContext {
    fn from(h: DbContextHandle<ConfigurationStore>) -> Self {
        Self::Configuration(h)
    }
}

impl From<DbContextHandle<OperationalStore>> for StoreContext {
    fn from(h: DbContextHandle<OperationalStore>) -> Self {
        Self::Operational(h)
    }
}

/// What the design-time tool prints. The connection string is redacted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextReport {
    pub store: StoreKind,
    pub provider: ProviderKind,
    pub database: Option<String>,
    pub connection: String,
    pub migrations_source: MigrationsSource,
    pub default_schema: Option<String>,
    pub tables: Vec<String>,
}
