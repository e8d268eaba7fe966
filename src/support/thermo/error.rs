use thiserror::Error;

/// Errors that may occur when evaluating thermodynamic properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The input state is outside the model's valid domain.
    ///
    /// For example, a nitrogen temperature above the top correlation band.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// The calculation failed due to a numerical or internal error.
    ///
    /// For example, a model that cannot be built from its fluid constants.
    #[error("calculation error: {context}")]
    Calculation { context: String },
}
