use serde::{Deserialize, Serialize};

/// Error category enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCategory {
    ValidationError,
    ConfigurationError,
    IoError,
    InternalError,
    Unknown,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Error severity enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Error,
    Info,
}

/// Input fields collected from the caller before a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    Script,
    Name,
    IdSuffix,
    Description,
}

impl InputField {
    /// All fields in the order they are validated.
    pub const ALL: [InputField; 4] = [
        InputField::Script,
        InputField::Name,
        InputField::IdSuffix,
        InputField::Description,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InputField::Script => "script",
            InputField::Name => "name",
            InputField::IdSuffix => "id suffix",
            InputField::Description => "description",
        }
    }
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
