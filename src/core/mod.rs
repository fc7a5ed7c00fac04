//! Core business logic module
//!
//! This module contains the core approval-engine components:
//! - `registry` - Fixed approver membership and quorum threshold
//! - `ledger` - Transfer request storage and per-request invariants
//! - `engine` - Caller-facing façade: authorization, quorum, release
//! - `traits` - The fund-release seam to the external settlement system
//! - `vault` - In-memory fund-release implementation
//! - `shared` - Thread-safe handle preserving the serial operation order

pub mod engine;
pub mod ledger;
pub mod registry;
pub mod shared;
pub mod traits;
pub mod vault;

pub use engine::ApprovalEngine;
pub use ledger::TransferLedger;
pub use registry::ApproverRegistry;
pub use shared::SharedApprovalEngine;
pub use traits::FundRelease;
pub use vault::Vault;
