//! # Framework Errors
//!
//! Case-mapping validation is the only fallible step in the framework. All variants are
//! raised by [`Reducer::new`](crate::Reducer::new) (and therefore by
//! [`Duck::create_reducer`](crate::Duck::create_reducer)) at construction time. A reducer
//! that was built successfully never fails afterwards.

/// Errors raised while validating the keys of a case mapping.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaseError {
    /// The mapping has no keys at all.
    #[error("You should pass at least one case name when creating a reducer.")]
    EmptyCaseSet,

    /// Every key is the literal string `"undefined"`.
    #[error("All of your action types are undefined.")]
    AllCasesUndefined,

    /// Some, but not all, keys are `"undefined"`. `valid` holds the others in mapping order.
    #[error(
        "One or more of your action types are undefined. Valid cases are: {}.",
        .valid.join(", ")
    )]
    SomeCasesUndefined { valid: Vec<String> },
}
