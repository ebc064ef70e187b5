use serde::Serialize;

/// One successfully parsed roster line: `1234567 Jane Doe`.
///
/// `id` is the stable identity of a driver; `name` is display data only and
/// may differ between lines carrying the same id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriverLine {
    pub id: String,
    pub name: String,
}

impl DriverLine {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
