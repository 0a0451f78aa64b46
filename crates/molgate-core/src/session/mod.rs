//! # Session Module
//!
//! This module implements the exclusive session access controller: the
//! correctness-critical layer that decides which caller is inside the engine
//! handle at any instant and guarantees the handle is handed over clean.
//!
//! ## Overview
//!
//! Multiple independent threads each need to run a self-contained unit of
//! work against one shared engine handle. The broker serializes them behind
//! a single exclusivity primitive, resets the handle to baseline both before
//! and after every work unit, bounds the wait for acquisition, and recovers
//! by force when a presumed-stuck holder never releases. A lock-free
//! per-call alternative is provided for deployments that construct a private
//! engine instance per session instead.
//!
//! - **Brokering** ([`broker`]) - [`broker::ExclusiveSessionBroker`], the
//!   single serialization point for the shared handle
//! - **Exclusivity Tokens** ([`token`]) - RAII ownership of the primitive
//!   with idempotent release
//! - **Status Reporting** ([`status`]) - Observable `Idle`/`Working` phase,
//!   diagnostics only
//! - **Configuration** ([`config`]) - Acquisition timeout settings
//! - **Pooled Sessions** ([`pooled`]) - The per-call, no-shared-state
//!   alternative design
//! - **Error Handling** ([`error`]) - Session-level failure conditions

pub mod broker;
pub mod config;
pub mod error;
pub mod pooled;
pub mod status;
pub mod token;
