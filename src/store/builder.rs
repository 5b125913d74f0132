use super::context::{DbContextHandle, StoreContext};
use super::options::StoreOptions;
use super::{ConfigurationStore, OperationalStore, Store, StoreKind};
use crate::config::Settings;
use crate::db::ConnectionDescriptor;
use std::marker::PhantomData;
use tracing::debug;

/// Constructor invoked by design-time tooling rather than the running
/// service.
pub trait DesignTimeFactory {
    type Context;

    /// `args` are the tool's command-line arguments. Implementations may
    /// ignore them.
    fn create_context(&self, args: &[String]) -> Self::Context;
}

/// Builds the context for store `S`. Infallible: a bad connection string
/// surfaces when the consumer connects, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreContextBuilder<S: Store> {
    connection: ConnectionDescriptor,
    default_schema: Option<String>,
    _store: PhantomData<fn() -> S>,
}

pub type ConfigurationStoreConfigBuilder = StoreContextBuilder<ConfigurationStore>;
pub type OperationalStoreConfigBuilder = StoreContextBuilder<OperationalStore>;

impl<S: Store> StoreContextBuilder<S> {
    pub fn new(connection: ConnectionDescriptor, default_schema: Option<String>) -> Self {
        Self {
            connection,
            default_schema,
            _store: PhantomData,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.connection_for(S::KIND),
            settings.store(S::KIND).default_schema.clone(),
        )
    }

    pub fn local_development() -> Self {
        Self::from_settings(&Settings::default())
    }

    /// Arguments are accepted and ignored.
    pub fn build(&self, args: &[String]) -> DbContextHandle<S> {
        let mut options = S::Options::default();
        if let Some(schema) = &self.default_schema {
            options.set_default_schema(Some(schema.clone()));
        }
        debug!(
            store = %S::KIND,
            provider = %self.connection.provider(),
            ignored_args = args.len(),
            "built design-time store context"
        );
        DbContextHandle::new(self.connection.clone(), options)
    }
}

impl<S: Store> Default for StoreContextBuilder<S> {
    fn default() -> Self {
        Self::local_development()
    }
}

impl<S: Store> DesignTimeFactory for StoreContextBuilder<S> {
    type Context = DbContextHandle<S>;

    fn create_context(&self, args: &[String]) -> Self::Context {
        self.build(args)
    }
}

impl StoreKind {
    pub fn build(self, settings: &Settings, args: &[String]) -> StoreContext {
        match self {
            Self::Configuration => ConfigurationStoreConfigBuilder::from_settings(settings)
                .build(args)
                .into(),
            Self::Operational => OperationalStoreConfigBuilder::from_settings(settings)
                .build(args)
                .into(),
        }
    }
}
