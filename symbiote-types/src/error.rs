use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::resource::ResourceKind;

/// Error payload returned by the backend. It is either a JSON object carrying a summary
/// message plus optional per-field messages, or plain text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ErrorBody {
    message: Option<String>,
    fields: Map<String, Value>,
}

impl ErrorBody {

    const SUMMARY_KEYS: [&'static str; 4] = ["error", "message", "platformRegistrationError", "platformUpdateError"];

    pub fn parse(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(fields)) => {
                let message = Self::SUMMARY_KEYS.iter()
                    .find_map(|key| fields.get(*key).and_then(Value::as_str))
                    .map(String::from);
                Self { message, fields }
            }
            Ok(Value::String(text)) => Self::from_text(&text),
            _ => Self::from_text(&String::from_utf8_lossy(body)),
        }
    }

    fn from_text(text: &str) -> Self {
        let text = text.trim();
        Self {
            message: (!text.is_empty()).then(|| text.to_owned()),
            fields: Map::new(),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn message_or(&self, fallback: impl Into<String>) -> String {
        self.message.clone().unwrap_or_else(|| fallback.into())
    }

    pub fn field_errors(&self, kind: ResourceKind, prefix: FieldErrorPrefix) -> FieldErrors {
        FieldErrors::from_fields(kind, prefix.as_str(kind), &self.fields)
    }
}

/// Key prefix the backend puts in front of field names in an error body.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FieldErrorPrefix {
    Registration,
    Update,
}

impl FieldErrorPrefix {
    pub fn as_str(&self, kind: ResourceKind) -> &'static str {
        match (self, kind) {
            (FieldErrorPrefix::Registration, ResourceKind::Platform) => "pl_reg_error_",
            (FieldErrorPrefix::Registration, ResourceKind::InformationModel) => "info_model_reg_error_",
            (FieldErrorPrefix::Registration, ResourceKind::Federation) => "federation_reg_error_",
            (FieldErrorPrefix::Update, _) => "error_",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum FieldKey {
    Id,
    Name,
    Uri,
    Rdf,
    Label,
    Comment,
    ServiceUrl,
    ServiceModel,
    IsEnabler,
    Platform1Id,
    Platform2Id,
}

impl FieldKey {

    pub fn suffix(&self) -> &'static str {
        match self {
            FieldKey::Id => "id",
            FieldKey::Name => "name",
            FieldKey::Uri => "uri",
            FieldKey::Rdf => "rdf",
            FieldKey::Label => "labels_label",
            FieldKey::Comment => "comments_comment",
            FieldKey::ServiceUrl => "interworkingServices_url",
            FieldKey::ServiceModel => "interworkingServices_informationModelId",
            FieldKey::IsEnabler => "isEnabler",
            FieldKey::Platform1Id => "platform1Id",
            FieldKey::Platform2Id => "platform2Id",
        }
    }

    /// Positional keys carry one message per input row.
    pub fn is_positional(&self) -> bool {
        matches!(self, FieldKey::Label | FieldKey::Comment | FieldKey::ServiceUrl | FieldKey::ServiceModel)
    }

    pub fn recognized(kind: ResourceKind) -> &'static [FieldKey] {
        match kind {
            ResourceKind::Platform => &[
                FieldKey::Id,
                FieldKey::Name,
                FieldKey::Label,
                FieldKey::Comment,
                FieldKey::ServiceUrl,
                FieldKey::ServiceModel,
                FieldKey::IsEnabler,
            ],
            ResourceKind::InformationModel => &[FieldKey::Name, FieldKey::Uri, FieldKey::Rdf],
            ResourceKind::Federation => &[FieldKey::Id, FieldKey::Platform1Id, FieldKey::Platform2Id],
        }
    }
}

/// Inline error messages for the inputs of one form.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldErrors {
    single: BTreeMap<FieldKey, String>,
    positional: BTreeMap<FieldKey, Vec<String>>,
}

impl FieldErrors {

    pub fn from_fields(kind: ResourceKind, prefix: &str, fields: &Map<String, Value>) -> Self {
        let mut errors = FieldErrors::default();

        for key in FieldKey::recognized(kind) {
            let Some(value) = fields.get(&format!("{prefix}{}", key.suffix())) else {
                continue;
            };

            if key.is_positional() {
                let rows = match value {
                    Value::Array(rows) => rows.iter()
                        .map(|row| row.as_str().unwrap_or_default().to_owned())
                        .collect::<Vec<_>>(),
                    Value::String(message) => vec![message.to_owned()],
                    _ => continue,
                };
                if rows.iter().any(|row| !row.is_empty()) {
                    errors.positional.insert(*key, rows);
                }
            }
            else if let Some(message) = value.as_str().filter(|message| !message.is_empty()) {
                errors.single.insert(*key, message.to_owned());
            }
        }

        errors
    }

    pub fn get(&self, key: FieldKey) -> Option<&str> {
        self.single.get(&key).map(String::as_str)
    }

    pub fn at(&self, key: FieldKey, index: usize) -> Option<&str> {
        self.positional.get(&key)
            .and_then(|rows| rows.get(index))
            .map(String::as_str)
            .filter(|message| !message.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.single.is_empty() && self.positional.is_empty()
    }

    /// Every populated error slot as `(key, row)`; `row` is `None` for non-positional keys.
    pub fn populated(&self) -> Vec<(FieldKey, Option<usize>)> {
        let single = self.single.keys().map(|key| (*key, None));
        let positional = self.positional.iter()
            .flat_map(|(key, rows)| {
                rows.iter().enumerate()
                    .filter(|(_, message)| !message.is_empty())
                    .map(|(index, _)| (*key, Some(index)))
            });
        single.chain(positional).collect()
    }
}
