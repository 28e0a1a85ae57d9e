use thiserror::Error;

/// Contract violations raised while building or inspecting effect records.
///
/// A failed destination write is never reported through this type: it is
/// recorded as data with [`crate::EffectType::Error`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EffectError {
    /// A required field was never supplied.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("unknown effect type: {0}")]
    UnknownType(String),

    /// Scripting surface lookup for a name the record does not expose.
    #[error("unknown field '{field}' on {object}")]
    UnknownField {
        object: &'static str,
        field: String,
    },
}
