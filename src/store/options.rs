use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Table name and optional per-table schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfiguration {
    pub name: String,
    pub schema: Option<String>,
}

impl TableConfiguration {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            schema: None,
        }
    }

    /// `schema.name`, falling back to the store's default schema; bare
    /// `name` when neither is set.
    pub fn qualified_name(&self, default_schema: Option<&str>) -> String {
        match self.schema.as_deref().or(default_schema) {
            Some(schema) => format!("{schema}.{}", self.name),
            None => self.name.clone(),
        }
    }
}

/// Options recognized by a store's schema context.
pub trait StoreOptions {
    fn default_schema(&self) -> Option<&str>;

    fn set_default_schema(&mut self, schema: Option<String>);

    fn tables(&self) -> Vec<&TableConfiguration>;

    fn qualified_table_names(&self) -> Vec<String> {
        let schema = self.default_schema();
        self.tables()
            .into_iter()
            .map(|t| t.qualified_name(schema))
            .collect()
    }
}

/// Tables of the configuration store: clients, resources and scopes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationStoreOptions {
    pub default_schema: Option<String>,

    pub identity_resource: TableConfiguration,
    pub identity_resource_claims: TableConfiguration,
    pub identity_resource_property: TableConfiguration,

    pub api_resource: TableConfiguration,
    pub api_resource_secrets: TableConfiguration,
    pub api_resource_scopes: TableConfiguration,
    pub api_resource_claims: TableConfiguration,
    pub api_resource_property: TableConfiguration,

    pub client: TableConfiguration,
    pub client_grant_type: TableConfiguration,
    pub client_redirect_uri: TableConfiguration,
    pub client_post_logout_redirect_uri: TableConfiguration,
    pub client_scopes: TableConfiguration,
    pub client_secret: TableConfiguration,
    pub client_claims: TableConfiguration,
    pub client_idp_restriction: TableConfiguration,
    pub client_cors_origin: TableConfiguration,
    pub client_property: TableConfiguration,

    pub api_scope: TableConfiguration,
    pub api_scope_claims: TableConfiguration,
    pub api_scope_property: TableConfiguration,
}

impl Default for ConfigurationStoreOptions {
    fn default() -> Self {
        Self {
            default_schema: None,
            identity_resource: TableConfiguration::new("IdentityResources"),
            identity_resource_claims: TableConfiguration::new("IdentityResourceClaims"),
            identity_resource_property: TableConfiguration::new("IdentityResourceProperties"),
            api_resource: TableConfiguration::new("ApiResources"),
            api_resource_secrets: TableConfiguration::new("ApiResourceSecrets"),
            api_resource_scopes: TableConfiguration::new("ApiResourceScopes"),
            api_resource_claims: TableConfiguration::new("ApiResourceClaims"),
            api_resource_property: TableConfiguration::new("ApiResourceProperties"),
            client: TableConfiguration::new("Clients"),
            client_grant_type: TableConfiguration::new("ClientGrantTypes"),
            client_redirect_uri: TableConfiguration::new("ClientRedirectUris"),
            client_post_logout_redirect_uri: TableConfiguration::new(
                "ClientPostLogoutRedirectUris",
            ),
            client_scopes: TableConfiguration::new("ClientScopes"),
            client_secret: TableConfiguration::new("ClientSecrets"),
            client_claims: TableConfiguration::new("ClientClaims"),
            client_idp_restriction: TableConfiguration::new("ClientIdPRestrictions"),
            client_cors_origin: TableConfiguration::new("ClientCorsOrigins"),
            client_property: TableConfiguration::new("ClientProperties"),
            api_scope: TableConfiguration::new("ApiScopes"),
            api_scope_claims: TableConfiguration::new("ApiScopeClaims"),
            api_scope_property: TableConfiguration::new("ApiScopeProperties"),
        }
    }
}

impl StoreOptions for ConfigurationStoreOptions {
    fn default_schema(&self) -> Option<&str> {
        self.default_schema.as_deref()
    }

    fn set_default_schema(&mut self, schema: Option<String>) {
        self.default_schema = schema;
    }

    fn tables(&self) -> Vec<&TableConfiguration> {
        vec![
            &self.identity_resource,
            &self.identity_resource_claims,
            &self.identity_resource_property,
            &self.api_resource,
            &self.api_resource_secrets,
            &self.api_resource_scopes,
            &self.api_resource_claims,
            &self.api_resource_property,
            &self.client,
            &self.client_grant_type,
            &self.client_redirect_uri,
            &self.client_post_logout_redirect_uri,
            &self.client_scopes,
            &self.client_secret,
            &self.client_claims,
            &self.client_idp_restriction,
            &self.client_cors_origin,
            &self.client_property,
            &self.api_scope,
            &self.api_scope_claims,
            &self.api_scope_property,
        ]
    }
}

/// Tables and cleanup settings of the operational store: persisted grants
/// and device codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationalStoreOptions {
    pub default_schema: Option<String>,
    pub persisted_grants: TableConfiguration,
    pub device_flow_codes: TableConfiguration,
    pub enable_token_cleanup: bool,
    pub token_cleanup_interval_secs: u64,
    pub token_cleanup_batch_size: u32,
}

impl Default for OperationalStoreOptions {
    fn default() -> Self {
        Self {
            default_schema: None,
            persisted_grants: TableConfiguration::new("PersistedGrants"),
            device_flow_codes: TableConfiguration::new("DeviceCodes"),
            enable_token_cleanup: false,
            token_cleanup_interval_secs: 3600,
            token_cleanup_batch_size: 100,
        }
    }
}

impl OperationalStoreOptions {
    pub fn token_cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.token_cleanup_interval_secs)
    }
}

impl StoreOptions for OperationalStoreOptions {
    fn default_schema(&self) -> Option<&str> {
        self.default_schema.as_deref()
    }

    fn set_default_schema(&mut self, schema: Option<String>) {
        self.default_schema = schema;
    }

    fn tables(&self) -> Vec<&TableConfiguration> {
        vec![&self.persisted_grants, &self.device_flow_codes]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn configuration_tables_are_distinct() {
        let opts = ConfigurationStoreOptions::default();
        let names: HashSet<_> = opts.tables().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names.len(), opts.tables().len());
        assert!(names.contains("Clients"));
        assert!(names.contains("ApiScopes"));
    }

    #[test]
    fn operational_defaults() {
        let opts = OperationalStoreOptions::default();
        assert_eq!(opts.persisted_grants.name, "PersistedGrants");
        assert_eq!(opts.device_flow_codes.name, "DeviceCodes");
        assert!(!opts.enable_token_cleanup);
        assert_eq!(opts.token_cleanup_interval(), Duration::from_secs(3600));
        assert_eq!(opts.token_cleanup_batch_size, 100);
    }

    #[test]
    fn table_schema_overrides_default_schema() {
        let mut opts = OperationalStoreOptions::default();
        opts.set_default_schema(Some("ops".to_string()));
        opts.device_flow_codes.schema = Some("device".to_string());

        assert_eq!(
            opts.qualified_table_names(),
            vec!["ops.PersistedGrants".to_string(), "device.DeviceCodes".to_string()]
        );
    }

    #[test]
    fn unqualified_without_schema() {
        let opts = ConfigurationStoreOptions::default();
        assert_eq!(opts.client.qualified_name(opts.default_schema()), "Clients");
    }
}
