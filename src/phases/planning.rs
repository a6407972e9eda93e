//! Phase 2: Signature Planning
//!
//! This is the second phase of the generation pipeline. It turns one
//! partition into a `SignaturePlan`, the language-neutral description of a
//! single overload.
//!
//! ## Process
//!
//! The markers are walked in constructor-parameter order while counting the
//! explicit arguments seen so far:
//!
//! -   An explicit marker takes the next explicit identifier (`arg0`,
//!     `arg1`, ...) and emits `Slot::ExplicitRef(n)` at its position.
//! -   An injected marker emits `Slot::InjectedResolve { position }`, a
//!     container resolution for that position's type placeholder.
//!
//! The resulting call list always has one slot per constructor parameter,
//! so explicit and injected values keep their original relative order no
//! matter how they interleave. The signature key records the full tag
//! sequence and the explicit count; uniqueness of keys is checked by
//! Phase 3, not here.

use super::{explicit_arg, Partition, SignatureKey, SignaturePlan, Slot};

/// Execute Phase 2: derive the signature plan for one partition.
pub fn execute(partition: &Partition) -> SignaturePlan {
    let mut explicit_args = Vec::with_capacity(partition.explicit_count());
    let mut call = Vec::with_capacity(partition.arity());

    for (position, explicit) in partition.markers().enumerate() {
        if explicit {
            let index = explicit_args.len();
            explicit_args.push(explicit_arg(index));
            call.push(Slot::ExplicitRef(index));
        } else {
            call.push(Slot::InjectedResolve { position });
        }
    }

    let key = SignatureKey {
        tags: call.iter().map(Slot::tag).collect(),
        explicit_count: explicit_args.len(),
    };

    SignaturePlan {
        arity: partition.arity(),
        partition: *partition,
        explicit_args,
        call,
        key,
    }
}
