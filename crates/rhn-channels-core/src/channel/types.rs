use std::collections::HashMap;

use crate::error::{Result, RhnError};
use crate::xmlrpc::Value;

/// One record from `channel.listSoftwareChannels`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelSummary {
    /// Unique channel label
    pub label: String,
    /// Label of the base channel, or empty for a base channel
    pub parent_label: String,
}

impl ChannelSummary {
    pub fn new(label: impl Into<String>, parent_label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            parent_label: parent_label.into(),
        }
    }

    /// Whether this is a base (parent) channel.
    pub fn is_base(&self) -> bool {
        self.parent_label.is_empty()
    }

    pub(crate) fn from_value(value: &Value) -> Result<Self> {
        let record = as_record(value)?;
        Ok(Self {
            label: str_field(record, "channel_label")?.to_string(),
            parent_label: str_field(record, "channel_parent_label")?.to_string(),
        })
    }
}

/// Detail record from `channel.software.getDetails`, reduced to the field
/// the reporter inspects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelDetails {
    /// GPG signing-key URL, empty when the channel has none
    pub gpg_key_url: String,
}

impl ChannelDetails {
    /// The custom-channel heuristic: no signing-key URL means the channel
    /// carries non-official content.
    pub fn is_custom(&self) -> bool {
        self.gpg_key_url.is_empty()
    }

    pub(crate) fn from_value(value: &Value) -> Result<Self> {
        let record = as_record(value)?;
        Ok(Self {
            gpg_key_url: str_field(record, "channel_gpg_key_url")?.to_string(),
        })
    }
}

fn as_record(value: &Value) -> Result<&HashMap<String, Value>> {
    value.as_struct().ok_or_else(|| RhnError::MalformedResponse {
        message: "channel record is not a struct".to_string(),
    })
}

fn str_field<'a>(record: &'a HashMap<String, Value>, field: &'static str) -> Result<&'a str> {
    record
        .get(field)
        .and_then(Value::as_str)
        .ok_or(RhnError::MissingField { field })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Value {
        let mut members = HashMap::new();
        for (name, value) in pairs {
            members.insert(name.to_string(), Value::String(value.to_string()));
        }
        Value::Struct(members)
    }

    #[test]
    fn summary_from_record() {
        let value = record(&[
            ("channel_label", "rhel-x86_64-server-6"),
            ("channel_parent_label", ""),
        ]);
        let summary = ChannelSummary::from_value(&value).unwrap();
        assert_eq!(summary.label, "rhel-x86_64-server-6");
        assert!(summary.is_base());
    }

    #[test]
    fn summary_missing_field() {
        let value = record(&[("channel_label", "orphan")]);
        assert!(matches!(
            ChannelSummary::from_value(&value),
            Err(RhnError::MissingField {
                field: "channel_parent_label"
            })
        ));
    }

    #[test]
    fn summary_requires_struct() {
        assert!(matches!(
            ChannelSummary::from_value(&Value::String("nope".to_string())),
            Err(RhnError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn details_custom_heuristic() {
        let signed = ChannelDetails::from_value(&record(&[(
            "channel_gpg_key_url",
            "https://example.com/RPM-GPG-KEY",
        )]))
        .unwrap();
        assert!(!signed.is_custom());

        let custom = ChannelDetails::from_value(&record(&[("channel_gpg_key_url", "")])).unwrap();
        assert!(custom.is_custom());
    }
}
