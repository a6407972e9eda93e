//! Phase 3: Collision Checking
//!
//! This is the third phase of the generation pipeline. It verifies that no
//! two planned overloads share a signature key, because the host compiler
//! would either reject such a pair as ambiguous or silently pick the wrong
//! one.
//!
//! The canonical enumeration cannot produce a collision as long as the key
//! encodes the full marker sequence. The check runs on every arity anyway,
//! and a collision is always fatal.

use std::collections::HashMap;

use log::debug;

use super::{Partition, SignatureKey, SignaturePlan};
use crate::error::{Error, Result};

/// Accumulates signature keys and rejects the first duplicate.
///
/// A single checker can be fed plans from several arities when the host
/// needs uniqueness across the whole artifact.
#[derive(Debug, Default)]
pub struct CollisionChecker {
    seen: HashMap<SignatureKey, Partition>,
}

impl CollisionChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a plan's key, failing if an earlier plan already holds it.
    pub fn admit(&mut self, plan: &SignaturePlan) -> Result<()> {
        if let Some(existing) = self.seen.get(&plan.key) {
            return Err(Error::Collision {
                arity: plan.arity,
                first: existing.to_string(),
                second: plan.partition.to_string(),
                key: plan.key.to_string(),
            });
        }
        self.seen.insert(plan.key.clone(), plan.partition);
        Ok(())
    }

    /// Number of distinct keys admitted so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Execute Phase 3: check a set of plans for duplicate signature keys.
pub fn execute(plans: &[SignaturePlan]) -> Result<()> {
    let mut checker = CollisionChecker::new();
    for plan in plans {
        checker.admit(plan)?;
    }
    debug!("{} signature keys are unique", checker.len());
    Ok(())
}
