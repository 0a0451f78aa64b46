//! # Engine Module
//!
//! This module defines the capability seam between the session layer and the
//! native visualization engine, abstracting the engine down to the two
//! operations the broker needs: a baseline reset and the execution of an
//! opaque operation against the live instance.
//!
//! ## Overview
//!
//! The native engine is a long-lived, mutable, non-reentrant resource. This
//! module does not attempt to model what the engine contains; it only models
//! how to hand it back in a known-clean state and how to run a caller's work
//! against it. All concurrency control lives one layer up, in
//! [`crate::session`].
//!
//! - **Handle Abstraction** ([`handle`]) - The [`handle::EngineHandle`] trait
//!   implemented by concrete engine bindings
//! - **Error Handling** ([`error`]) - Handle-level failure conditions

pub mod error;
pub mod handle;
