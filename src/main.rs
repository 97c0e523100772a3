use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use natural::{logging, NaturalNumber};

#[derive(Debug, Parser)]
#[command(name = "natural", version, about = "Arithmetic on natural numbers in bases 2 to 10")]
struct Cli {
    /// Base of the operands, between 2 and 10.
    #[arg(long, short, default_value_t = 10)]
    base: u32,
    /// Check multiplication and division against the slow versions.
    #[arg(long)]
    verify: bool,
    #[command(subcommand)]
    op: Op,
}

#[derive(Debug, Subcommand)]
enum Op {
    /// a + b
    Add { a: String, b: String },
    /// a - b, requires a >= b
    Sub { a: String, b: String },
    /// a * b, long multiplication
    Mul { a: String, b: String },
    /// a * b, repeated addition
    SlowMul { a: String, b: String },
    /// a / b rounded down, long division
    Div { a: String, b: String },
    /// a / b rounded down, repeated subtraction
    SlowDiv { a: String, b: String },
    /// Prints -1, 0 or 1
    Cmp { a: String, b: String },
    /// Rewrites a in another base
    Convert { a: String, to: u32 },
}

fn operand(s: &str, base: u32) -> Result<NaturalNumber> {
    NaturalNumber::from_decimal_str(s, base).with_context(|| format!("invalid operand {s:?}"))
}

fn operands(a: &str, b: &str, base: u32) -> Result<(NaturalNumber, NaturalNumber)> {
    Ok((operand(a, base)?, operand(b, base)?))
}

fn verified(
    fast: NaturalNumber,
    slow: impl FnOnce() -> natural::Result<NaturalNumber>,
    verify: bool,
) -> Result<NaturalNumber> {
    if verify {
        let expected = slow()?;
        if fast != expected {
            bail!("fast result {fast} disagrees with slow result {expected}");
        }
        info!(%fast, "verified against slow oracle");
    }
    Ok(fast)
}

fn run(cli: Cli) -> Result<String> {
    let base = cli.base;
    let res = match &cli.op {
        Op::Add { a, b } => {
            let (a, b) = operands(a, b, base)?;
            a.plus(&b)?
        }
        Op::Sub { a, b } => {
            let (a, b) = operands(a, b, base)?;
            a.minus(&b)?
        }
        Op::Mul { a, b } => {
            let (a, b) = operands(a, b, base)?;
            verified(a.times(&b)?, || a.slow_times(&b), cli.verify)?
        }
        Op::SlowMul { a, b } => {
            let (a, b) = operands(a, b, base)?;
            a.slow_times(&b)?
        }
        Op::Div { a, b } => {
            let (a, b) = operands(a, b, base)?;
            verified(a.divide(&b)?, || a.slow_divide(&b), cli.verify)?
        }
        Op::SlowDiv { a, b } => {
            let (a, b) = operands(a, b, base)?;
            a.slow_divide(&b)?
        }
        Op::Cmp { a, b } => {
            let (a, b) = operands(a, b, base)?;
            return Ok((a.try_cmp(&b)? as i8).to_string());
        }
        Op::Convert { a, to } => operand(a, base)?.to_base(*to)?,
    };
    Ok(res.to_string())
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();
    info!(?cli, "running");
    println!("{}", run(cli)?);
    Ok(())
}
