//! # Molgate Core Library
//!
//! A small brokering library that serializes concurrent callers' access to a
//! single shared, stateful, non-reentrant molecular-visualization engine
//! instance, returning the engine to a clean baseline between sessions.
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers with a strict dependency direction,
//! keeping the concurrency-bearing logic isolated from any knowledge of what
//! the engine actually renders.
//!
//! - **[`engine`]: The Capability Seam.** Defines the [`engine::handle::EngineHandle`]
//!   trait, the only two capabilities (`reset`, `execute`) this library
//!   requires from whatever native engine is plugged in, plus the handle-level
//!   error type. The engine's vocabulary (structures, colors, meshes) never
//!   crosses this seam.
//!
//! - **[`session`]: The Logic Core.** The correctness-critical layer. It
//!   provides [`session::broker::ExclusiveSessionBroker`], which gates a
//!   shared handle behind a timeout-bounded exclusivity primitive with forced
//!   recovery and pre/post baseline resets, and
//!   [`session::pooled::PooledSessionRunner`], the lock-free per-call
//!   alternative for deployments that can afford a fresh engine instance per
//!   session.

pub mod engine;
pub mod session;
