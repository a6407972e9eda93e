//! Host languages the artifact can be emitted for.
//!
//! A [`Target`] owns the fixed templates of its language and knows how to
//! turn a [`SignaturePlan`] into the bindings those templates expect.
//!
//! ## Disambiguation
//!
//! Two overloads of the same arity can take the same number of explicit
//! arguments in different positions (`100` and `001` both take one). The
//! marker pattern is therefore part of every emitted signature:
//!
//! - **C++**: a `pattern_tag<bool...>` tag parameter follows the container
//!   argument, so `make_impl<Foo, Bar>(container, pattern_tag<true, false>{}, x)`
//!   picks exactly one overload.
//! - **Rust**: there is no overloading, so the pattern becomes part of the
//!   function name (`make_2_10`).

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::phases::{explicit_type_param, SignaturePlan, Slot};
use crate::template::Bindings;

/// Language of the generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// C++ header of function templates
    #[default]
    Cpp,
    /// Rust source of generic functions
    Rust,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Target::Cpp => "cpp",
            Target::Rust => "rust",
        })
    }
}

const CPP_PROLOGUE: &str = "\
// @generated by genmakeimpl. Do not edit by hand.
//
// Factory overloads for constructor arities ${min_arity} through ${max_arity}.
// Each overload takes the explicit arguments named by its pattern_tag and
// resolves every other constructor parameter from the container.

#pragma once

#include <utility>

namespace makeimpl {

// Marks which constructor positions an overload takes explicitly.
template<bool... Markers>
struct pattern_tag {};

";

const CPP_DECLARATION: &str = "\
// arity ${arity}, pattern ${pattern}
template<${type_params}>
Impl_* make_impl(${params});

";

const CPP_DEFINITION: &str = "\
template<${type_params}>
Impl_* make_impl(${params})
{
    return new Impl_(${call_args});
}

";

const CPP_EPILOGUE: &str = "} // namespace makeimpl\n";

const RUST_PROLOGUE: &str = "\
// @generated by genmakeimpl. Do not edit by hand.
//
// Factory functions for constructor arities ${min_arity} through ${max_arity}.
// `Container` and `Resolve<T>` must be in scope where this file is included.

";

const RUST_DEFINITION: &str = "\
/// Arity ${arity}, pattern `${pattern}`.
#[allow(clippy::too_many_arguments, unused_variables)]
pub fn ${name}<${type_params}>(${params}) -> Result<R, C::Error>
where
${bounds}
{
    Ok(ctor(${call_args}))
}

";

impl Target {
    /// Conventional file extension of the artifact.
    pub fn file_extension(&self) -> &'static str {
        match self {
            Target::Cpp => "hpp",
            Target::Rust => "rs",
        }
    }

    pub fn prologue_template(&self) -> &'static str {
        match self {
            Target::Cpp => CPP_PROLOGUE,
            Target::Rust => RUST_PROLOGUE,
        }
    }

    pub fn epilogue_template(&self) -> &'static str {
        match self {
            Target::Cpp => CPP_EPILOGUE,
            Target::Rust => "",
        }
    }

    /// Forward declaration template, for languages that need one.
    pub fn declaration_template(&self) -> Option<&'static str> {
        match self {
            Target::Cpp => Some(CPP_DECLARATION),
            Target::Rust => None,
        }
    }

    pub fn definition_template(&self) -> &'static str {
        match self {
            Target::Cpp => CPP_DEFINITION,
            Target::Rust => RUST_DEFINITION,
        }
    }

    /// Bindings for the prologue and epilogue.
    pub fn frame_bindings(&self, min_arity: usize, max_arity: usize) -> Bindings {
        let mut bindings = Bindings::new();
        bindings.insert("min_arity", min_arity.to_string());
        bindings.insert("max_arity", max_arity.to_string());
        bindings
    }

    /// Bindings for the declaration and definition of one plan.
    pub fn plan_bindings(&self, plan: &SignaturePlan) -> Bindings {
        let mut bindings = Bindings::new();
        bindings.insert("arity", plan.arity.to_string());
        bindings.insert("pattern", plan.partition.to_string());
        match self {
            Target::Cpp => cpp::fill(plan, &mut bindings),
            Target::Rust => rust::fill(plan, &mut bindings),
        }
        bindings
    }
}

mod cpp {
    use super::*;

    pub(super) fn fill(plan: &SignaturePlan, bindings: &mut Bindings) {
        let mut type_params = vec!["class Impl_".to_string()];
        type_params.extend(
            plan.injected_type_params()
                .into_iter()
                .map(|t| format!("typename {}", t)),
        );
        type_params.push("class Container_".to_string());
        type_params.extend(
            plan.explicit_type_params()
                .into_iter()
                .map(|a| format!("typename {}", a)),
        );

        let markers: Vec<&str> = plan
            .partition
            .markers()
            .map(|explicit| if explicit { "true" } else { "false" })
            .collect();
        let mut params = vec![
            "const Container_& container".to_string(),
            format!("pattern_tag<{}>", markers.join(", ")),
        ];
        params.extend(
            plan.explicit_args
                .iter()
                .enumerate()
                .map(|(index, arg)| format!("{}&& {}", explicit_type_param(index), arg)),
        );

        let call_args: Vec<String> = plan
            .call
            .iter()
            .map(|slot| match slot {
                Slot::ExplicitRef(index) => format!(
                    "std::forward<{}>({})",
                    slot.type_param(),
                    plan.explicit_args[*index]
                ),
                Slot::InjectedResolve { .. } => {
                    format!("container.template resolve<{}>()", slot.type_param())
                }
            })
            .collect();

        bindings.insert("type_params", type_params.join(", "));
        bindings.insert("params", params.join(", "));
        bindings.insert("call_args", call_args.join(", "));
    }
}

mod rust {
    use super::*;

    pub(super) fn fill(plan: &SignaturePlan, bindings: &mut Bindings) {
        let injected = plan.injected_type_params();

        let mut type_params = vec!["R".to_string()];
        type_params.extend(injected.iter().cloned());
        type_params.push("C".to_string());
        type_params.push("F".to_string());
        type_params.extend(plan.explicit_type_params());

        let mut params = vec!["container: &C".to_string(), "ctor: F".to_string()];
        params.extend(
            plan.explicit_args
                .iter()
                .enumerate()
                .map(|(index, arg)| format!("{}: {}", arg, explicit_type_param(index))),
        );

        let mut container_bounds = vec!["Container".to_string()];
        container_bounds.extend(injected.iter().map(|t| format!("Resolve<{}>", t)));
        let ctor_inputs: Vec<String> = plan.call.iter().map(Slot::type_param).collect();
        let bounds = format!(
            "    C: {},\n    F: FnOnce({}) -> R,",
            container_bounds.join(" + "),
            ctor_inputs.join(", ")
        );

        let call_args: Vec<String> = plan
            .call
            .iter()
            .map(|slot| match slot {
                Slot::ExplicitRef(index) => plan.explicit_args[*index].clone(),
                Slot::InjectedResolve { .. } => {
                    format!("<C as Resolve<{}>>::resolve(container)?", slot.type_param())
                }
            })
            .collect();

        let name = if plan.arity == 0 {
            "make_0".to_string()
        } else {
            format!("make_{}_{}", plan.arity, plan.partition.pattern())
        };

        bindings.insert("name", name);
        bindings.insert("type_params", type_params.join(", "));
        bindings.insert("params", params.join(", "));
        bindings.insert("bounds", bounds);
        bindings.insert("call_args", call_args.join(", "));
    }
}
