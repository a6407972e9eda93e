//! Implementation of the phases of a genmakeimpl generation run.
//!
//! ## Overview
//!
//! A run follows 5 phases:
//! 1. Enumeration - Yield every explicit/injected partition of an arity
//! 2. Planning - Derive a signature plan from each partition
//! 3. Collision Checking - Reject plans that share a signature key
//! 4. Rendering - Turn each plan into declaration/definition text
//! 5. Writing - Atomically write the assembled artifact to disk
//!
//! Phases 1-4 run per arity and are independent across arities, so the
//! orchestrator runs them in parallel and collects the results back in
//! ascending arity order before Phase 5.
//!
//! Each phase depends only on the previous phases and the data types below.

use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

// Phase modules
pub mod collision;
pub mod enumerate;
pub mod orchestrator;
pub mod planning;
pub mod render;
pub mod write;

// Numbered aliases for the pipeline order
pub use collision as phase3;
pub use enumerate as phase1;
pub use planning as phase2;
pub use render as phase4;
pub use write as phase5;

/// Largest arity a `Partition` can represent.
pub const MAX_PARTITION_ARITY: usize = 32;

/// One explicit/injected marking of every constructor position.
///
/// Position 0 (the first constructor parameter) is the most significant of
/// the `arity` low bits; a set bit marks the position as explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Partition {
    arity: usize,
    bits: u32,
}

impl Partition {
    /// Build a partition from its arity and marker bits.
    ///
    /// Bits above `arity` are ignored.
    pub fn new(arity: usize, bits: u32) -> Self {
        assert!(
            arity <= MAX_PARTITION_ARITY,
            "arity {} exceeds the partition limit of {}",
            arity,
            MAX_PARTITION_ARITY
        );
        let mask = if arity == MAX_PARTITION_ARITY {
            u32::MAX
        } else {
            (1u32 << arity) - 1
        };
        Self {
            arity,
            bits: bits & mask,
        }
    }

    /// Build a partition from per-position markers, `true` = explicit.
    pub fn from_markers(markers: &[bool]) -> Self {
        let bits = markers
            .iter()
            .fold(0u32, |acc, &explicit| (acc << 1) | u32::from(explicit));
        Self::new(markers.len(), bits)
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Whether the parameter at `position` is supplied by the caller.
    pub fn is_explicit(&self, position: usize) -> bool {
        debug_assert!(position < self.arity);
        (self.bits >> (self.arity - 1 - position)) & 1 == 1
    }

    /// Markers in constructor-parameter order.
    pub fn markers(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.arity).map(move |position| self.is_explicit(position))
    }

    pub fn explicit_count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// The marker string, e.g. `101`. Empty for arity 0.
    pub fn pattern(&self) -> String {
        self.markers().map(|m| if m { '1' } else { '0' }).collect()
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.arity == 0 {
            f.write_str("<empty>")
        } else {
            f.write_str(&self.pattern())
        }
    }
}

/// Whether a call slot is caller-supplied or container-resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SlotTag {
    Explicit,
    Injected,
}

/// One argument of the constructor invocation, in original position order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Slot {
    /// Forward the i-th explicit argument.
    ExplicitRef(usize),
    /// Resolve the parameter at `position` from the container.
    InjectedResolve { position: usize },
}

impl Slot {
    pub fn tag(&self) -> SlotTag {
        match self {
            Slot::ExplicitRef(_) => SlotTag::Explicit,
            Slot::InjectedResolve { .. } => SlotTag::Injected,
        }
    }

    /// Name of the generic type placeholder bound to this slot.
    pub fn type_param(&self) -> String {
        match self {
            Slot::ExplicitRef(index) => explicit_type_param(*index),
            Slot::InjectedResolve { position } => injected_type_param(*position),
        }
    }
}

/// Identifier of the i-th explicit argument.
pub fn explicit_arg(index: usize) -> String {
    format!("arg{}", index)
}

/// Type placeholder of the i-th explicit argument.
pub fn explicit_type_param(index: usize) -> String {
    format!("A{}", index)
}

/// Type placeholder of the injected parameter at a constructor position.
pub fn injected_type_param(position: usize) -> String {
    format!("T{}", position)
}

/// Uniqueness fingerprint of a generated overload.
///
/// Encodes the full marker sequence, not just the explicit count, so that
/// partitions with the same number of explicit arguments in different
/// positions stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SignatureKey {
    pub tags: Vec<SlotTag>,
    pub explicit_count: usize,
}

impl fmt::Display for SignatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in &self.tags {
            f.write_str(match tag {
                SlotTag::Explicit => "E",
                SlotTag::Injected => "I",
            })?;
        }
        write!(f, "/{}", self.explicit_count)
    }
}

/// Everything the renderer needs to emit one overload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignaturePlan {
    pub arity: usize,
    #[serde(serialize_with = "serialize_partition")]
    pub partition: Partition,
    /// Caller-supplied argument identifiers, in order.
    pub explicit_args: Vec<String>,
    /// Constructor invocation, one slot per position.
    pub call: Vec<Slot>,
    pub key: SignatureKey,
}

impl SignaturePlan {
    /// Type placeholders of the injected positions, in position order.
    pub fn injected_type_params(&self) -> Vec<String> {
        self.call
            .iter()
            .filter(|slot| slot.tag() == SlotTag::Injected)
            .map(Slot::type_param)
            .collect()
    }

    /// Type placeholders of the explicit arguments, in order.
    pub fn explicit_type_params(&self) -> Vec<String> {
        (0..self.explicit_args.len()).map(explicit_type_param).collect()
    }
}

fn serialize_partition<S: serde::Serializer>(
    partition: &Partition,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&partition.pattern())
}

/// Rendered text for one plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmissionBlock {
    /// Forward declaration, for targets that separate it from the definition.
    pub declaration: Option<String>,
    pub definition: String,
}

/// The complete generated source unit.
///
/// Declarations of every block come first, then every definition, both in
/// block order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub prologue: String,
    pub blocks: Vec<EmissionBlock>,
    pub epilogue: String,
}

impl Artifact {
    pub fn new(prologue: String, epilogue: String) -> Self {
        Self {
            prologue,
            blocks: Vec::new(),
            epilogue,
        }
    }

    /// Append the blocks of the next arity.
    pub fn extend(&mut self, blocks: impl IntoIterator<Item = EmissionBlock>) {
        self.blocks.extend(blocks);
    }

    /// Number of overloads the artifact defines.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The artifact text in output order: prologue, every declaration,
    /// every definition, epilogue.
    pub fn parts(&self) -> impl Iterator<Item = &str> + '_ {
        let declarations = self.blocks.iter().filter_map(|b| b.declaration.as_deref());
        let definitions = self.blocks.iter().map(|b| b.definition.as_str());
        std::iter::once(self.prologue.as_str())
            .chain(declarations)
            .chain(definitions)
            .chain(std::iter::once(self.epilogue.as_str()))
    }

    /// Stream the artifact text into `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for part in self.parts() {
            out.write_all(part.as_bytes())?;
        }
        Ok(())
    }

    /// The artifact text as bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.parts().collect::<String>().into_bytes()
    }
}
