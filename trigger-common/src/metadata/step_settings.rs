use serde::Serialize;

use crate::prelude::*;
use crate::utils::FieldNameUtils;

/// Settings of an event lookup step, as stored by the host for each configured step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepSettings {
    /// The data field to get the user id from.
    pub useridfield: InlineStr,
    /// The data field to get the context id from.
    pub contextidfield: InlineStr,
    /// The prefix to put before the fields added to the workflow data.
    pub outputprefix: InlineStr,
}

impl StepSettings {
    pub const USERIDFIELD: &'static str = "useridfield";
    pub const CONTEXTIDFIELD: &'static str = "contextidfield";
    pub const OUTPUTPREFIX: &'static str = "outputprefix";

    pub const DEFAULT_USERIDFIELD: &'static str = "userid";
    pub const DEFAULT_CONTEXTIDFIELD: &'static str = "contextid";
    pub const DEFAULT_OUTPUTPREFIX: &'static str = "user_";

    pub fn new(useridfield: &str, contextidfield: &str, outputprefix: &str) -> TriggerResult<Self> {
        let settings = Self {
            useridfield: useridfield.trim().into(),
            contextidfield: contextidfield.trim().into(),
            outputprefix: outputprefix.trim().into(),
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> TriggerResult<()> {
        FieldNameUtils::validate(Self::USERIDFIELD, &self.useridfield)?;
        FieldNameUtils::validate(Self::CONTEXTIDFIELD, &self.contextidfield)?;
        FieldNameUtils::validate(Self::OUTPUTPREFIX, &self.outputprefix)
    }

    /// Data bag key a step field is written to.
    pub fn output_key(&self, field: &str) -> InlineStr {
        let mut key = self.outputprefix.clone();
        key.push_str(field);
        key
    }

    /// Form elements the host renders to collect these settings.
    pub fn form_fields() -> Vec<FormField> {
        vec![
            FormField {
                name: Self::USERIDFIELD,
                label: "step_lookup_user_useridfield",
                param_type: ParamType::AlphaNumExt,
                required: true,
                default: Self::DEFAULT_USERIDFIELD,
            },
            FormField {
                name: Self::CONTEXTIDFIELD,
                label: "contextidfield",
                param_type: ParamType::AlphaNumExt,
                required: true,
                default: Self::DEFAULT_CONTEXTIDFIELD,
            },
            FormField {
                name: Self::OUTPUTPREFIX,
                label: "outputprefix",
                param_type: ParamType::AlphaNumExt,
                required: true,
                default: Self::DEFAULT_OUTPUTPREFIX,
            },
        ]
    }

    fn read_setting(value: &serde_json::Value, key: &str, default: &str) -> TriggerResult<InlineStr> {
        match value.get(key) {
            None | Some(serde_json::Value::Null) => Ok(default.into()),
            Some(serde_json::Value::String(v)) => {
                let v = v.trim();
                FieldNameUtils::validate(key, v)?;
                Ok(v.into())
            }
            Some(other) => fmt_err!(IllegalArgument, "{} must be a string, got: {}", key, other),
        }
    }
}

impl Default for StepSettings {
    fn default() -> Self {
        Self {
            useridfield: Self::DEFAULT_USERIDFIELD.into(),
            contextidfield: Self::DEFAULT_CONTEXTIDFIELD.into(),
            outputprefix: Self::DEFAULT_OUTPUTPREFIX.into(),
        }
    }
}

impl TryFrom<&serde_json::Value> for StepSettings {
    type Error = ErrorCode;
    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        if !value.is_object() {
            return str_err!(IllegalArgument, "step settings must be a json object");
        }

        Ok(Self {
            useridfield: Self::read_setting(value, Self::USERIDFIELD, Self::DEFAULT_USERIDFIELD)?,
            contextidfield: Self::read_setting(
                value,
                Self::CONTEXTIDFIELD,
                Self::DEFAULT_CONTEXTIDFIELD,
            )?,
            outputprefix: Self::read_setting(
                value,
                Self::OUTPUTPREFIX,
                Self::DEFAULT_OUTPUTPREFIX,
            )?,
        })
    }
}

/// One form element of the configuration surface.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    /// Language string id of the element label.
    pub label: &'static str,
    #[serde(rename = "type")]
    pub param_type: ParamType,
    pub required: bool,
    pub default: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParamType {
    /// Letters, digits, `_`, `.` and `-`.
    AlphaNumExt,
}
