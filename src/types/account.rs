//! Account identity types for the multisig engine
//!
//! Identities are opaque to the engine: the authentication collaborator
//! verifies callers out-of-band and hands the engine an already-verified
//! identity value.

/// Opaque account identity
///
/// Used both for approvers and transfer recipients. The engine never
/// inspects the value beyond equality comparisons.
pub type AccountId = String;

/// Transfer amount in the smallest value unit
///
/// Amounts are integral; a valid transfer amount is always positive.
pub type Amount = u64;
