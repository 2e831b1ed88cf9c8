//! # GitHub Actions execution context
//!
//! Typed views over the `${{ github }}` and `${{ runner }}` context values a
//! workflow passes to this tool as JSON strings.
//!
//! Every field is optional on input and unknown fields are ignored, so newer
//! runner versions adding context keys do not break parsing. The access
//! token in the GitHub context is never serialized and is cleared by
//! [`GitHubContext::redact`] right after parsing.

use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Signal value that selects the hosted builder identity.
pub const HOSTED_SIGNAL_VALUE: &str = "true";

/// Environment variable carrying the hosted-runner signal.
pub const HOSTED_SIGNAL_ENV: &str = "GITHUB_ACTIONS";

/// Where the build ran. Selects the builder identity suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerKind {
    Hosted,
    SelfHosted,
}

impl RunnerKind {
    /// Maps the raw signal value: exactly `"true"` is hosted, anything else
    /// (including an unset variable) is self-hosted.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some(HOSTED_SIGNAL_VALUE) => RunnerKind::Hosted,
            _ => RunnerKind::SelfHosted,
        }
    }

    pub fn builder_id_suffix(&self) -> &'static str {
        match self {
            RunnerKind::Hosted => crate::slsa::GITHUB_HOSTED_ID_SUFFIX,
            RunnerKind::SelfHosted => crate::slsa::SELF_HOSTED_ID_SUFFIX,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubContext {
    #[serde(deserialize_with = "nullable_string")]
    pub action: String,
    #[serde(deserialize_with = "nullable_string")]
    pub action_path: String,
    #[serde(deserialize_with = "nullable_string")]
    pub actor: String,
    #[serde(deserialize_with = "nullable_string")]
    pub base_ref: String,
    pub event: Value,
    #[serde(deserialize_with = "nullable_string")]
    pub event_name: String,
    #[serde(deserialize_with = "nullable_string")]
    pub event_path: String,
    #[serde(deserialize_with = "nullable_string")]
    pub head_ref: String,
    #[serde(deserialize_with = "nullable_string")]
    pub job: String,
    #[serde(rename = "ref", deserialize_with = "nullable_string")]
    pub git_ref: String,
    #[serde(deserialize_with = "nullable_string")]
    pub repository: String,
    #[serde(deserialize_with = "nullable_string")]
    pub repository_owner: String,
    #[serde(deserialize_with = "string_or_number")]
    pub run_id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub run_number: String,
    #[serde(deserialize_with = "nullable_string")]
    pub sha: String,
    #[serde(skip_serializing)]
    pub token: Option<String>,
    #[serde(deserialize_with = "nullable_string")]
    pub workflow: String,
    #[serde(deserialize_with = "nullable_string")]
    pub workspace: String,
}

impl GitHubContext {
    /// Parse the `${{ github }}` context.
    ///
    /// The token is redacted before the context is returned.
    pub fn parse(json: &str) -> Result<Self> {
        let mut context: GitHubContext = parse_object(json, "github")?;
        context.redact();

        debug!(
            "Parsed github context: repository={}, run_id={}, workflow={}",
            context.repository, context.run_id, context.workflow
        );

        Ok(context)
    }

    /// Clear the access token, wiping its bytes first.
    pub fn redact(&mut self) {
        if let Some(mut token) = self.token.take() {
            token.zeroize();
        }
    }

    /// `inputs` of the triggering event.
    ///
    /// Only `workflow_dispatch` events carry user-provided inputs. A missing
    /// or `null` event yields `null`; an event that is not an object is rejected.
    pub fn event_inputs(&self) -> Result<Value> {
        let event: AnyEvent = match &self.event {
            Value::Null => return Ok(Value::Null),
            Value::Object(_) => serde_json::from_value(self.event.clone())
                .map_err(|e| Error::ContextParse(format!("invalid github event: {e}")))?,
            other => {
                return Err(Error::ContextParse(format!(
                    "github event must be an object, got: {other}"
                )));
            }
        };

        Ok(event.inputs)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerContext {
    #[serde(deserialize_with = "nullable_string")]
    pub os: String,
    #[serde(deserialize_with = "nullable_string")]
    pub temp: String,
    #[serde(deserialize_with = "nullable_string")]
    pub tool_cache: String,
}

impl RunnerContext {
    pub fn parse(json: &str) -> Result<Self> {
        let context: RunnerContext = parse_object(json, "runner")?;

        debug!("Parsed runner context: os={}", context.os);

        Ok(context)
    }
}

/// The subset of a triggering event this tool reads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnyEvent {
    pub inputs: Value,
}

/// Both contexts, as recorded in `recipe.environment` when enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnyContext {
    pub github: GitHubContext,
    pub runner: RunnerContext,
}

// serde's derived struct visitors also accept sequences, and with
// `#[serde(default)]` an array would parse as an all-empty context.
fn parse_object<T: DeserializeOwned>(json: &str, name: &str) -> Result<T> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| Error::ContextParse(format!("invalid {name} context: {e}")))?;
    if !value.is_object() {
        return Err(Error::ContextParse(format!(
            "{name} context must be a JSON object"
        )));
    }

    serde_json::from_value(value)
        .map_err(|e| Error::ContextParse(format!("invalid {name} context: {e}")))
}

// `null` reads as an empty string, like an absent key.
fn nullable_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// Run ids arrive as strings from `toJSON(github)` but as numbers from some
// hand-built contexts.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got: {other}"
        ))),
    }
}
