//! Property-based tests for partition enumeration and planning.
//!
//! These tests use proptest to generate arities and marker sequences and
//! verify that the pipeline invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::phases::{phase1, phase2, phase3, Partition, SignaturePlan, Slot, SlotTag};
    use proptest::prelude::*;
    use std::collections::HashSet;

    // ============================================================================
    // enumeration property tests
    // ============================================================================

    proptest! {
        /// Property: every arity yields exactly 2^k distinct partitions
        #[test]
        fn enumeration_yields_all_partitions_once(arity in 0usize..=12) {
            let partitions: Vec<Partition> = phase1::execute(arity).collect();
            let distinct: HashSet<Partition> = partitions.iter().copied().collect();
            prop_assert_eq!(partitions.len(), 1usize << arity);
            prop_assert_eq!(distinct.len(), partitions.len());
        }

        /// Property: enumeration order is strictly ascending by marker bits
        #[test]
        fn enumeration_is_canonical(arity in 1usize..=12) {
            let bits: Vec<u32> = phase1::execute(arity).map(|p| p.bits()).collect();
            prop_assert!(bits.windows(2).all(|w| w[0] + 1 == w[1]));
        }

        /// Property: markers round-trip through from_markers
        #[test]
        fn markers_round_trip(markers in prop::collection::vec(any::<bool>(), 0..=32)) {
            let partition = Partition::from_markers(&markers);
            let recovered: Vec<bool> = partition.markers().collect();
            prop_assert_eq!(recovered, markers);
        }
    }

    // ============================================================================
    // planning property tests
    // ============================================================================

    proptest! {
        /// Property: the call list has one slot per position, explicit slots
        /// exactly where the markers are true, numbered in order
        #[test]
        fn plan_preserves_positions(markers in prop::collection::vec(any::<bool>(), 0..=20)) {
            let plan = phase2::execute(&Partition::from_markers(&markers));
            prop_assert_eq!(plan.call.len(), markers.len());

            let mut next_explicit = 0;
            for (position, (slot, explicit)) in plan.call.iter().zip(&markers).enumerate() {
                if *explicit {
                    prop_assert_eq!(*slot, Slot::ExplicitRef(next_explicit));
                    next_explicit += 1;
                } else {
                    prop_assert_eq!(*slot, Slot::InjectedResolve { position });
                }
            }
            prop_assert_eq!(plan.explicit_args.len(), next_explicit);
        }

        /// Property: the key mirrors the markers and counts explicit slots
        #[test]
        fn key_mirrors_markers(markers in prop::collection::vec(any::<bool>(), 0..=20)) {
            let plan = phase2::execute(&Partition::from_markers(&markers));
            let expected: Vec<SlotTag> = markers
                .iter()
                .map(|&m| if m { SlotTag::Explicit } else { SlotTag::Injected })
                .collect();
            prop_assert_eq!(&plan.key.tags, &expected);
            prop_assert_eq!(plan.key.explicit_count, markers.iter().filter(|&&m| m).count());
        }

        /// Property: planning is deterministic
        #[test]
        fn plan_is_deterministic(arity in 0usize..=16, seed in any::<u32>()) {
            let partition = Partition::new(arity, seed);
            prop_assert_eq!(phase2::execute(&partition), phase2::execute(&partition));
        }

        /// Property: the canonical enumeration never collides
        #[test]
        fn canonical_enumeration_is_collision_free(arity in 0usize..=10) {
            let plans: Vec<SignaturePlan> = phase1::execute(arity)
                .map(|p| phase2::execute(&p))
                .collect();
            prop_assert!(phase3::execute(&plans).is_ok());
        }
    }
}
