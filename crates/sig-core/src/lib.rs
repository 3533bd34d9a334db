//! # sig-core
//!
//! Core types and error types for sig2moq.
//!
//! This crate provides the foundational types shared across all sig2moq crates:
//! - The member-description contract (methods, properties, parameters) that any
//!   host can hand to the generation engine, as Rust values or as JSON
//! - Enums for visibility, accessor kinds and action kinds
//! - Triggered actions offered for a selection
//! - The `DeliverySink` capability the engine writes finished snippets to
//! - Cross-cutting error types
//! - CLI response types

pub mod actions;
pub mod delivery;
pub mod enums;
pub mod errors;
pub mod member;
pub mod responses;

pub use actions::Action;
pub use delivery::{DeliveryError, DeliverySink, MemorySink};
pub use enums::{AccessorKind, ActionKind, Visibility};
pub use errors::CoreError;
pub use member::{
    MemberDescription, MethodDescription, ParameterDescription, PropertyDescription, ReturnType,
};
