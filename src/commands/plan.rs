//! # Plan Command Implementation
//!
//! This module implements the `plan` subcommand, which prints the signature
//! plans of a single arity: for each partition its marker pattern, signature
//! key, explicit arguments and the interleaved constructor call. It is a
//! read-only view of phases 1-3 and never renders or writes anything.
//!
//! ## Example
//!
//! ```bash
//! $ genmakeimpl plan 2
//! Arity 2: 4 overloads
//!
//!   00  II/0  ()            -> (resolve<T0>, resolve<T1>)
//!   01  IE/1  (arg0)        -> (resolve<T0>, arg0)
//!   10  EI/1  (arg0)        -> (arg0, resolve<T1>)
//!   11  EE/2  (arg0, arg1)  -> (arg0, arg1)
//! ```

use anyhow::Result;
use clap::{Args, ValueEnum};

use genmakeimpl::defaults::MAX_SUPPORTED_ARITY;
use genmakeimpl::phases::{explicit_arg, phase1, phase2, phase3, SignaturePlan, Slot};

/// Output format of the plan listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PlanFormat {
    /// Human-readable table
    #[default]
    Text,
    /// JSON array of plans
    Json,
}

/// Show the signature plans of one arity
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Constructor arity to plan
    #[arg(value_name = "ARITY")]
    pub arity: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = PlanFormat::Text)]
    pub format: PlanFormat,
}

/// Execute the `plan` command.
pub fn execute(args: PlanArgs) -> Result<()> {
    let plans = plans_for(args.arity)?;
    let rendered = match args.format {
        PlanFormat::Text => format_text(args.arity, &plans),
        PlanFormat::Json => serde_json::to_string_pretty(&plans)?,
    };
    println!("{}", rendered);
    Ok(())
}

fn plans_for(arity: usize) -> Result<Vec<SignaturePlan>> {
    if arity > MAX_SUPPORTED_ARITY {
        anyhow::bail!(
            "Arity {} exceeds the supported maximum of {}",
            arity,
            MAX_SUPPORTED_ARITY
        );
    }
    let plans: Vec<SignaturePlan> = phase1::execute(arity)
        .map(|partition| phase2::execute(&partition))
        .collect();
    phase3::execute(&plans)?;
    Ok(plans)
}

fn format_slot(slot: &Slot) -> String {
    match slot {
        Slot::ExplicitRef(index) => explicit_arg(*index),
        Slot::InjectedResolve { .. } => format!("resolve<{}>", slot.type_param()),
    }
}

fn format_text(arity: usize, plans: &[SignaturePlan]) -> String {
    let rows: Vec<[String; 4]> = plans
        .iter()
        .map(|plan| {
            let call: Vec<String> = plan.call.iter().map(format_slot).collect();
            [
                plan.partition.to_string(),
                plan.key.to_string(),
                format!("({})", plan.explicit_args.join(", ")),
                format!("({})", call.join(", ")),
            ]
        })
        .collect();

    let mut widths = [0usize; 3];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = format!("Arity {}: {} overloads\n", arity, plans.len());
    for [pattern, key, args, call] in &rows {
        out.push_str(&format!(
            "\n  {:<w0$}  {:<w1$}  {:<w2$}  -> {}",
            pattern,
            key,
            args,
            call,
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
        ));
    }
    out
}
