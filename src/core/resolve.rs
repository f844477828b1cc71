//! core::resolve
//!
//! Resolution of raw variables into the final output set.
//!
//! # Design
//!
//! Five fields are subject to the placeholder rule: when the raw value is
//! empty or still carries a `$`, a name is generated from the templates in
//! [`crate::core::naming`]; otherwise the raw value passes through
//! unchanged. The two endpoint names are always generated. Everything else
//! is carried over verbatim, so the full set of seventeen outputs is always
//! present.

use serde::Serialize;

use super::config::RawVariables;
use super::naming;

/// Fully resolved deployment variables.
///
/// Serializes with the published output keys (`bep`, `oep`).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResolvedConfig {
    pub location: String,
    pub namespace: String,
    pub postfix: String,
    pub environment: String,
    pub enable_monitoring: bool,
    pub enable_aml_computecluster: bool,
    pub resource_group: String,
    pub aml_workspace: String,
    #[serde(rename = "bep")]
    pub batch_endpoint_name: String,
    #[serde(rename = "oep")]
    pub online_endpoint_name: String,
    pub terraform_version: String,
    pub terraform_workingdir: String,
    pub terraform_st_location: String,
    pub terraform_st_resource_group: String,
    pub terraform_st_storage_account: String,
    pub terraform_st_container_name: String,
    pub terraform_st_key: String,
}

impl ResolvedConfig {
    /// Resolve raw variables into the final output set.
    pub fn from_raw(raw: &RawVariables) -> Self {
        let ns = &raw.namespace;
        let pf = &raw.postfix;
        let env = &raw.environment;

        let resource_group = if naming::should_generate(&raw.resource_group) {
            naming::resource_group(ns, pf, env)
        } else {
            raw.resource_group.clone()
        };

        let aml_workspace = if naming::should_generate(&raw.aml_workspace) {
            naming::aml_workspace(ns, pf, env)
        } else {
            raw.aml_workspace.clone()
        };

        let terraform_st_location = if naming::should_generate(&raw.terraform_st_location) {
            raw.location.clone()
        } else {
            raw.terraform_st_location.clone()
        };

        let terraform_st_resource_group =
            if naming::should_generate(&raw.terraform_st_resource_group) {
                naming::terraform_resource_group(ns, pf, env)
            } else {
                raw.terraform_st_resource_group.clone()
            };

        let terraform_st_storage_account =
            if naming::should_generate(&raw.terraform_st_storage_account) {
                naming::terraform_storage_account(ns, pf, env)
            } else {
                raw.terraform_st_storage_account.clone()
            };

        ResolvedConfig {
            location: raw.location.clone(),
            namespace: raw.namespace.clone(),
            postfix: raw.postfix.clone(),
            environment: raw.environment.clone(),
            enable_monitoring: raw.enable_monitoring,
            enable_aml_computecluster: raw.enable_aml_computecluster,
            resource_group,
            aml_workspace,
            batch_endpoint_name: naming::batch_endpoint(ns, pf, env),
            online_endpoint_name: naming::online_endpoint(ns, pf, env),
            terraform_version: raw.terraform_version.clone(),
            terraform_workingdir: raw.terraform_workingdir.clone(),
            terraform_st_location,
            terraform_st_resource_group,
            terraform_st_storage_account,
            terraform_st_container_name: raw.terraform_st_container_name.clone(),
            terraform_st_key: raw.terraform_st_key.clone(),
        }
    }

    /// The seventeen published outputs, in declaration order.
    ///
    /// Each key appears exactly once; booleans render as `true`/`false`.
    pub fn outputs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("location", self.location.clone()),
            ("namespace", self.namespace.clone()),
            ("postfix", self.postfix.clone()),
            ("environment", self.environment.clone()),
            ("enable_monitoring", self.enable_monitoring.to_string()),
            (
                "enable_aml_computecluster",
                self.enable_aml_computecluster.to_string(),
            ),
            ("resource_group", self.resource_group.clone()),
            ("aml_workspace", self.aml_workspace.clone()),
            ("bep", self.batch_endpoint_name.clone()),
            ("oep", self.online_endpoint_name.clone()),
            ("terraform_version", self.terraform_version.clone()),
            ("terraform_workingdir", self.terraform_workingdir.clone()),
            ("terraform_st_location", self.terraform_st_location.clone()),
            (
                "terraform_st_resource_group",
                self.terraform_st_resource_group.clone(),
            ),
            (
                "terraform_st_storage_account",
                self.terraform_st_storage_account.clone(),
            ),
            (
                "terraform_st_container_name",
                self.terraform_st_container_name.clone(),
            ),
            ("terraform_st_key", self.terraform_st_key.clone()),
        ]
    }
}
