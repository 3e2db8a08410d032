//! ow-core: Core library for the Otter Watch (ow) scheduler dashboard client
//!
//! This crate provides:
//! - The cron/interval trigger model and its exact display contracts
//! - Typed resource entities (jobs, executions, audit logs) with pure
//!   display derivations
//! - Envelope parsing for collection and single-item responses
//! - Draft validation for job mutations
//! - The sync lifecycle state machine consumed by view bindings
//! - Route parsing for deep links

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod audit;
pub mod draft;
pub mod execution;
pub mod job;
pub mod resource;
pub mod route;
pub mod sync;
pub mod trigger;
pub mod wire;

// Re-exports
pub use audit::{AuditEntry, AuditEvent};
pub use draft::{JobDraft, JobPayload, ValidationError};
pub use execution::{Execution, ExecutionState, JobRef, StatusStyle};
pub use job::Job;
pub use resource::{parse_envelope, ParseError, Resource, ResourceKind};
pub use route::{Route, Tab};
pub use sync::{SyncEvent, SyncPhase, ViewEffect};
pub use trigger::{format_duration, IntervalParts, Trigger, TriggerForm};
