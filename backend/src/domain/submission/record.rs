//! Raw submission record as decoded from the request body.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field names checked by the submission rules, in presence-check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Email,
    Age,
    Phone,
}

impl FieldName {
    /// Every required field, in the order the presence rule inspects them.
    pub const REQUIRED: [Self; 4] = [Self::Name, Self::Email, Self::Age, Self::Phone];

    /// Key used for the field in JSON and form bodies.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Age => "age",
            Self::Phone => "phone",
        }
    }
}

/// Flat key/value record submitted by a client.
///
/// The record keeps every submitted field, including ones the rules ignore,
/// so a successful response can echo it back unchanged.
///
/// # Examples
/// ```
/// use contact_intake::domain::submission::{FieldName, SubmissionRecord};
/// use serde_json::json;
///
/// let record = SubmissionRecord::from_json(json!({ "name": "Ada" }));
/// assert_eq!(record.field(FieldName::Name), Some(&json!("Ada")));
/// assert!(record.field(FieldName::Email).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionRecord(Map<String, Value>);

impl SubmissionRecord {
    /// Wrap an already-decoded JSON object.
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Build a record from any JSON value.
    ///
    /// Only objects carry fields; any other JSON value yields an empty record,
    /// which the presence rule then rejects.
    #[must_use]
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self(fields),
            _ => Self::default(),
        }
    }

    /// Build a record from decoded form pairs. Later duplicates win.
    pub fn from_form_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        pairs
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect()
    }

    /// Look up one of the validated fields.
    #[must_use]
    pub fn field(&self, name: FieldName) -> Option<&Value> {
        self.0.get(name.as_str())
    }

    /// Borrow every submitted field.
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Number of submitted fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record has no fields at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Value)> for SubmissionRecord {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Map<String, Value>> for SubmissionRecord {
    fn from(value: Map<String, Value>) -> Self {
        Self::new(value)
    }
}

impl From<SubmissionRecord> for Value {
    fn from(value: SubmissionRecord) -> Self {
        Value::Object(value.0)
    }
}
