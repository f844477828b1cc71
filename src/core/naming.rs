//! core::naming
//!
//! Resource naming templates and the placeholder rule.
//!
//! # Features
//!
//! - Decide whether a raw value still needs to be generated
//! - Build resource names from namespace/postfix/environment
//!
//! All names follow the same family: a short resource prefix, the project
//! namespace, and a `postfix`+`environment` suffix identifying the
//! deployment slot.

/// Check whether a raw value should be replaced by a generated name.
///
/// A value is considered unresolved when it is empty or still carries a `$`,
/// the marker of an unexpanded template variable from an upstream templating
/// pass. The `$` heuristic is intentionally broad; a literal `$` in a real
/// value also triggers regeneration.
///
/// # Example
///
/// ```
/// use deploy_vars::core::naming::should_generate;
///
/// assert!(should_generate(""));
/// assert!(should_generate("$(rg_name)"));
/// assert!(!should_generate("existing-rg"));
/// ```
pub fn should_generate(value: &str) -> bool {
    value.is_empty() || value.contains('$')
}

/// Resource group name: `rg-{namespace}-{postfix}{environment}`.
pub fn resource_group(namespace: &str, postfix: &str, environment: &str) -> String {
    format!("rg-{}-{}{}", namespace, postfix, environment)
}

/// Azure ML workspace name: `mlw-{namespace}-{postfix}{environment}`.
pub fn aml_workspace(namespace: &str, postfix: &str, environment: &str) -> String {
    format!("mlw-{}-{}{}", namespace, postfix, environment)
}

/// Terraform state resource group name: the deployment resource group
/// with a `-tf` suffix.
pub fn terraform_resource_group(namespace: &str, postfix: &str, environment: &str) -> String {
    format!("rg-{}-{}{}-tf", namespace, postfix, environment)
}

/// Terraform state storage account name: `st{namespace}{postfix}{environment}tf`.
///
/// Storage account names cannot contain hyphens, so this template joins the
/// parts directly.
pub fn terraform_storage_account(namespace: &str, postfix: &str, environment: &str) -> String {
    format!("st{}{}{}tf", namespace, postfix, environment)
}

/// Batch scoring endpoint name: `bep-{namespace}-{postfix}{environment}`.
pub fn batch_endpoint(namespace: &str, postfix: &str, environment: &str) -> String {
    format!("bep-{}-{}{}", namespace, postfix, environment)
}

/// Online scoring endpoint name: `oep-{namespace}-{postfix}{environment}`.
pub fn online_endpoint(namespace: &str, postfix: &str, environment: &str) -> String {
    format!("oep-{}-{}{}", namespace, postfix, environment)
}
