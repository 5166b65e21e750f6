use crate::domain::models::event::EventFields;
use crate::error::AppError;
use serde_json::{Map, Value};

/// Required body fields in the order they are checked, with the label used in
/// error messages.
pub const REQUIRED_FIELDS: [(&str, &str); 5] = [
    ("name", "Name"),
    ("date", "Date"),
    ("type", "Type"),
    ("game", "Game"),
    ("description", "Description"),
];

/// Raw request arguments for creating or replacing an event, before
/// validation. Unknown keys are carried along and ignored. A body that could
/// not be read is kept as an error and reported by `validate`, so callers can
/// do their own checks first.
#[derive(Debug, Default, Clone)]
pub struct EventArgs {
    values: Map<String, Value>,
    body_error: Option<String>,
}

impl EventArgs {
    pub fn new(values: Map<String, Value>) -> Self {
        Self { values, body_error: None }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self { values: Map::new(), body_error: Some(message.into()) }
    }

    pub fn from_json_body(body: &[u8]) -> Self {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Self::default();
        }

        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(map)) => Self::new(map),
            _ => Self::rejected("Request body must be a JSON object"),
        }
    }

    pub fn from_form<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self::new(pairs.into_iter().map(|(k, v)| (k, Value::String(v))).collect())
    }

    /// Fills in keys the body did not set, e.g. from the query string.
    pub fn with_fallback<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in pairs {
            self.values.entry(key).or_insert(Value::String(value));
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Checks the five required fields in order and fails on the first one that
    /// is missing or null.
    pub fn validate(&self) -> Result<EventFields, AppError> {
        if let Some(message) = &self.body_error {
            return Err(AppError::Validation(message.clone()));
        }

        let field = |index: usize| {
            let (key, label) = REQUIRED_FIELDS[index];
            text_field(self.values.get(key), label)
        };

        Ok(EventFields {
            name: field(0)?,
            date: field(1)?,
            event_type: field(2)?,
            game: field(3)?,
            description: field(4)?,
        })
    }
}

fn text_field(value: Option<&Value>, label: &str) -> Result<String, AppError> {
    match value {
        None | Some(Value::Null) => Err(AppError::Validation(format!("{} cannot be blank", label))),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(true)) => Ok("True".to_string()),
        Some(Value::Bool(false)) => Ok("False".to_string()),
        Some(Value::Array(_)) | Some(Value::Object(_)) => {
            Err(AppError::Validation(format!("{} must be a string", label)))
        }
    }
}
