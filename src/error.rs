use thiserror::Error;

/// Errors that can occur during diagram generation.
///
/// Generation is the only failing phase: canonicalization of supplied
/// payloads degrades malformed fields to defaults instead of erroring, and
/// every policy branch other than on-demand regeneration has a defined
/// output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("workflow text is empty; there is nothing to generate a diagram from")]
    EmptyInput,
}
