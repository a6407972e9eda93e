//! # genmakeimpl
//!
//! Build-time generator for the factory overloads of a dependency-injection
//! container. For every constructor arity `k` it emits one overload per way
//! of choosing which of the `k` constructor arguments the caller supplies;
//! every other argument is resolved from the container. That is `2^k`
//! overloads per arity, written to a single generated source file.
//!
//! ## Quick Example
//!
//! ```
//! use genmakeimpl::phases::{phase1, phase2, Slot};
//!
//! // Every explicit/injected marking of a two-parameter constructor
//! let plans: Vec<_> = phase1::execute(2).map(|p| phase2::execute(&p)).collect();
//! assert_eq!(plans.len(), 4);
//!
//! // Pattern `01`: position 0 is injected, the caller supplies position 1
//! assert_eq!(plans[1].explicit_args, vec!["arg0"]);
//! assert_eq!(
//!     plans[1].call,
//!     vec![Slot::InjectedResolve { position: 0 }, Slot::ExplicitRef(0)]
//! );
//! ```
//!
//! ## Core Concepts
//!
//! - **Partitions (`phases::enumerate`)**: the explicit/injected markings of
//!   one arity, in a fixed canonical order.
//! - **Signature plans (`phases::planning`)**: the language-neutral shape of
//!   one overload: which arguments the caller passes and how the
//!   constructor call interleaves them with container resolutions.
//! - **Targets (`target`)**: the host language the artifact is emitted in,
//!   with its fixed templates. C++ and Rust are supported.
//! - **Templates (`template`)**: the substitution engine, behind a trait so
//!   the pipeline does not depend on one implementation.
//!
//! ## Execution Flow
//!
//! The main entry point is `phases::orchestrator::execute`:
//!
//! 1.  **Enumeration**: yield every partition of each configured arity.
//! 2.  **Planning**: derive a signature plan per partition.
//! 3.  **Collision Checking**: fail if two plans share a signature key.
//! 4.  **Rendering**: fill the target's templates for each plan.
//! 5.  **Writing**: atomically replace the artifact on disk.
//!
//! Steps 1-4 run per arity in parallel; step 5 runs once, after every arity
//! has been checked.

pub mod config;
pub mod defaults;
pub mod error;
pub mod output;
pub mod phases;
pub mod target;
pub mod template;

#[cfg(test)]
mod partition_proptest;
