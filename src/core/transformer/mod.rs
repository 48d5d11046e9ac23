//! Extracts the `search.create` fragment from an exported saved-search script
//! and rewraps it in a module that saves the search under a new id and title.
//!
//! The script is treated as opaque text. Boundaries are found with fixed
//! anchor strings (see [`anchors`]) rather than by parsing SuiteScript.

pub mod anchors;

use crate::core::template::{self, ModuleParts};
use crate::core::types::InputField;
use anchors::{slice, Anchors};
use serde::{Deserialize, Serialize};

/// Failures raised before any output is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    #[error("All fields are required (missing: {})", join_fields(.fields))]
    MissingField { fields: Vec<InputField> },
    #[error("Could not find search variable in script")]
    MissingSearchVariable,
    #[error("Could not find the end of the search.create fragment")]
    UnterminatedFragment,
}

impl TransformError {
    /// Stable code used by the error reporter.
    pub fn code(&self) -> &'static str {
        match self {
            TransformError::MissingField { .. } => "TRANSFORM_MISSING_FIELD",
            TransformError::MissingSearchVariable => "TRANSFORM_MISSING_SEARCH_VARIABLE",
            TransformError::UnterminatedFragment => "TRANSFORM_UNTERMINATED_FRAGMENT",
        }
    }
}

fn join_fields(fields: &[InputField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// What to do when a script has no `/*` comment and no
/// `var searchResultCount` + `.run().each` pair to end the fragment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum UnterminatedFragment {
    /// Keep everything up to the end of the script.
    #[default]
    EndOfScript,
    /// Stop one character short of the end, as the legacy generator did.
    DropLastChar,
    /// Fail with [`TransformError::UnterminatedFragment`].
    Reject,
}

impl UnterminatedFragment {
    pub(crate) fn resolve(self, script: &str) -> Result<usize, TransformError> {
        match self {
            UnterminatedFragment::EndOfScript => Ok(script.len()),
            UnterminatedFragment::DropLastChar => Ok(script
                .char_indices()
                .last()
                .map(|(idx, _)| idx)
                .unwrap_or(0)),
            UnterminatedFragment::Reject => Err(TransformError::UnterminatedFragment),
        }
    }
}

impl std::fmt::Display for UnterminatedFragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnterminatedFragment::EndOfScript => write!(f, "end-of-script"),
            UnterminatedFragment::DropLastChar => write!(f, "drop-last-char"),
            UnterminatedFragment::Reject => write!(f, "reject"),
        }
    }
}

impl std::str::FromStr for UnterminatedFragment {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "end-of-script" => Ok(UnterminatedFragment::EndOfScript),
            "drop-last-char" => Ok(UnterminatedFragment::DropLastChar),
            "reject" => Ok(UnterminatedFragment::Reject),
            _ => Err(format!(
                "invalid unterminated fragment policy '{}'; supported values are end-of-script, drop-last-char, reject",
                value
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformOptions {
    pub unterminated_fragment: UnterminatedFragment,
}

/// The four caller-supplied inputs, untrimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchModuleRequest {
    pub script: String,
    pub name: String,
    pub id_suffix: String,
    pub description: String,
}

impl SearchModuleRequest {
    pub fn new(
        script: impl Into<String>,
        name: impl Into<String>,
        id_suffix: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            script: script.into(),
            name: name.into(),
            id_suffix: id_suffix.into(),
            description: description.into(),
        }
    }

    fn field(&self, field: InputField) -> &str {
        match field {
            InputField::Script => self.script.trim(),
            InputField::Name => self.name.trim(),
            InputField::IdSuffix => self.id_suffix.trim(),
            InputField::Description => self.description.trim(),
        }
    }

    /// Fields that are blank after trimming, in validation order.
    pub fn missing_fields(&self) -> Vec<InputField> {
        InputField::ALL
            .into_iter()
            .filter(|field| self.field(*field).is_empty())
            .collect()
    }
}

/// A rendered module together with the values derived from the script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchModule {
    pub title: String,
    pub search_id: String,
    pub search_variable: String,
    pub search_create_code: String,
    pub source: String,
}

/// Transform with the default options.
pub fn transform(request: &SearchModuleRequest) -> Result<SearchModule, TransformError> {
    transform_with(request, &TransformOptions::default())
}

/// Convenience wrapper returning only the module text.
pub fn generate_module(
    script: &str,
    name: &str,
    id_suffix: &str,
    description: &str,
) -> Result<String, TransformError> {
    let request = SearchModuleRequest::new(script, name, id_suffix, description);
    transform(&request).map(|module| module.source)
}

pub fn transform_with(
    request: &SearchModuleRequest,
    options: &TransformOptions,
) -> Result<SearchModule, TransformError> {
    let missing = request.missing_fields();
    if !missing.is_empty() {
        return Err(TransformError::MissingField { fields: missing });
    }

    let script = request.field(InputField::Script);
    let name = request.field(InputField::Name);
    let description = request.field(InputField::Description);
    let search_id = template::search_id(request.field(InputField::IdSuffix));

    let anchors = Anchors::locate(script);
    let start = anchors
        .declaration
        .ok_or(TransformError::MissingSearchVariable)?;
    let search_variable = anchors
        .search_variable(script)
        .ok_or(TransformError::MissingSearchVariable)?;
    let end = anchors.fragment_end(script, options.unterminated_fragment)?;
    let search_create_code = slice(script, start, end).trim();

    tracing::debug!(
        search_variable,
        search_id = %search_id,
        fragment_start = start,
        fragment_end = end,
        "extracted search.create fragment"
    );

    let source = template::render_module(&ModuleParts {
        description,
        search_create_code,
        search_variable,
        search_id: &search_id,
        title: name,
    });

    Ok(SearchModule {
        title: name.to_string(),
        search_id,
        search_variable: search_variable.to_string(),
        search_create_code: search_create_code.to_string(),
        source,
    })
}
