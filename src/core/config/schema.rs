//! core::config::schema
//!
//! Typed schema for the pipeline configuration document.
//!
//! # Document shape
//!
//! ```yaml
//! variables:
//!   namespace: myproject
//!   postfix: dev
//!   environment: "01"
//!   location: westeurope
//!   resource_group: $(resource_group)
//! ```
//!
//! # Scalar handling
//!
//! Documents load through the failsafe layer
//! ([`crate::core::config::failsafe`]), so in practice every scalar arrives
//! here as a string and type resolution happens in this schema alone. The
//! deserializers still accept resolved scalars (bool/number/null) so the
//! schema also works on ordinary serde_yaml input. Every string field keeps
//! the scalar's textual form; the two `enable_*` fields apply truthy
//! semantics. Unrecognized keys are ignored, missing keys fall back to the
//! field defaults (empty string / false).

use serde::de::{self, Deserializer};
use serde::Deserialize;

/// Top-level configuration document.
///
/// The `variables` mapping is required; its absence is a parse error.
#[derive(Debug, Deserialize)]
pub struct ConfigDocument {
    /// Pipeline variables to resolve.
    pub variables: RawVariables,
}

/// Raw pipeline variables, before resolution.
///
/// All fields are optional in the document and default to `""` / `false`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct RawVariables {
    /// Project namespace, the stem of every generated name.
    #[serde(deserialize_with = "scalar_string")]
    pub namespace: String,

    /// Deployment slot postfix (e.g. "dev", "prod").
    #[serde(deserialize_with = "scalar_string")]
    pub postfix: String,

    /// Environment ordinal appended to the postfix (e.g. "01").
    #[serde(deserialize_with = "scalar_string")]
    pub environment: String,

    /// Azure region for the deployment.
    #[serde(deserialize_with = "scalar_string")]
    pub location: String,

    /// Whether to provision an AML compute cluster.
    #[serde(deserialize_with = "truthy_scalar")]
    pub enable_aml_computecluster: bool,

    /// Whether to provision monitoring resources.
    #[serde(deserialize_with = "truthy_scalar")]
    pub enable_monitoring: bool,

    /// Deployment resource group; generated when unresolved.
    #[serde(deserialize_with = "scalar_string")]
    pub resource_group: String,

    /// Azure ML workspace name; generated when unresolved.
    #[serde(deserialize_with = "scalar_string")]
    pub aml_workspace: String,

    /// Terraform CLI version pin.
    #[serde(deserialize_with = "scalar_string")]
    pub terraform_version: String,

    /// Working directory for Terraform runs.
    #[serde(deserialize_with = "scalar_string")]
    pub terraform_workingdir: String,

    /// Remote-state storage location; defaults to `location` when unresolved.
    #[serde(deserialize_with = "scalar_string")]
    pub terraform_st_location: String,

    /// Remote-state resource group; generated when unresolved.
    #[serde(deserialize_with = "scalar_string")]
    pub terraform_st_resource_group: String,

    /// Remote-state storage account; generated when unresolved.
    #[serde(deserialize_with = "scalar_string")]
    pub terraform_st_storage_account: String,

    /// Remote-state blob container name.
    #[serde(deserialize_with = "scalar_string")]
    pub terraform_st_container_name: String,

    /// Remote-state key (state file name).
    #[serde(deserialize_with = "scalar_string")]
    pub terraform_st_key: String,
}

/// Deserialize any YAML scalar into its string form.
///
/// Null becomes `""`, booleans and numbers keep their textual form.
/// Sequences and mappings are rejected.
fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_yaml::Value::deserialize(deserializer)?;
    match value {
        serde_yaml::Value::Null => Ok(String::new()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::String(s) => Ok(s),
        other => Err(de::Error::custom(format!(
            "expected a scalar value, got {}",
            type_name(&other)
        ))),
    }
}

/// Deserialize any YAML scalar under truthy semantics.
///
/// Null, `false`, zero, the empty string, and the textual false/null
/// tokens are false; every other scalar is true.
fn truthy_scalar<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_yaml::Value::deserialize(deserializer)?;
    match value {
        serde_yaml::Value::Null => Ok(false),
        serde_yaml::Value::Bool(b) => Ok(b),
        serde_yaml::Value::Number(n) => Ok(n.as_f64().map(|f| f != 0.0).unwrap_or(true)),
        serde_yaml::Value::String(s) => Ok(truthy_text(&s)),
        other => Err(de::Error::custom(format!(
            "expected a scalar value, got {}",
            type_name(&other)
        ))),
    }
}

/// Truthiness of a raw scalar's text.
///
/// The false and null YAML tokens keep their source text under the
/// failsafe schema, so they are recognized here, in all their casings.
fn truthy_text(text: &str) -> bool {
    !matches!(
        text,
        "" | "false" | "False" | "FALSE" | "~" | "null" | "Null" | "NULL"
    )
}

/// Human-readable name of a YAML value's type, for error messages.
fn type_name(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(doc: &str) -> RawVariables {
        serde_yaml::from_str::<ConfigDocument>(doc).unwrap().variables
    }

    #[test]
    fn empty_variables_use_defaults() {
        let vars = parse("variables: {}");
        assert_eq!(vars, RawVariables::default());
        assert_eq!(vars.namespace, "");
        assert!(!vars.enable_monitoring);
    }

    #[test]
    fn missing_variables_mapping_is_an_error() {
        let result = serde_yaml::from_str::<ConfigDocument>("other: {}");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_keys_ignored() {
        let vars = parse(
            "variables:\n  namespace: proj\n  something_else: ignored\n",
        );
        assert_eq!(vars.namespace, "proj");
    }

    #[test]
    fn string_fields_accept_resolved_scalars() {
        // Direct serde_yaml input, where plain scalars arrive resolved.
        let vars = parse(
            "variables:\n  namespace: proj\n  environment: \"01\"\n  terraform_version: 1.5\n  postfix: null\n",
        );
        assert_eq!(vars.namespace, "proj");
        // Quoted scalars pass through verbatim.
        assert_eq!(vars.environment, "01");
        // Resolved numbers keep their textual form.
        assert_eq!(vars.terraform_version, "1.5");
        assert_eq!(vars.postfix, "");
    }

    #[test]
    fn truthy_fields() {
        let vars = parse(
            "variables:\n  enable_monitoring: true\n  enable_aml_computecluster: \"\"\n",
        );
        assert!(vars.enable_monitoring);
        assert!(!vars.enable_aml_computecluster);

        let vars = parse("variables:\n  enable_monitoring: \"yes\"\n");
        assert!(vars.enable_monitoring);

        let vars = parse("variables:\n  enable_monitoring: false\n");
        assert!(!vars.enable_monitoring);

        // Textual false and null tokens, as the failsafe loader emits them.
        for token in ["false", "False", "FALSE", "~", "null", "Null", "NULL"] {
            let vars = parse(&format!("variables:\n  enable_monitoring: \"{}\"\n", token));
            assert!(!vars.enable_monitoring, "token {:?} should be falsy", token);
        }

        // Absent key defaults to false.
        let vars = parse("variables: {}");
        assert!(!vars.enable_monitoring);
    }

    #[test]
    fn non_scalar_value_rejected() {
        let result = serde_yaml::from_str::<ConfigDocument>(
            "variables:\n  namespace:\n    - a\n    - b\n",
        );
        assert!(result.is_err());
    }
}
