use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use env_logger::Env;
use recurcalc::{AngleUnit, EvaluationOutcome, evaluate_expression};

/// recurcalc evaluates an arithmetic expression and prints the result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Unit used for the arguments of sin, cos, tg and ctg.
    #[arg(short, long, value_enum, default_value_t = AngleArg::Radian)]
    angle_unit: AngleArg,

    /// Log the parsed tree and the evaluation to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// The expression to evaluate, for example '2 + 3 * sin(pi / 2)'.
    #[arg(allow_hyphen_values = true)]
    expression: String,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum AngleArg {
    Radian,
    Degree,
}

impl From<AngleArg> for AngleUnit {
    fn from(arg: AngleArg) -> Self {
        match arg {
            AngleArg::Radian => Self::Radian,
            AngleArg::Degree => Self::Degree,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    match evaluate_expression(&args.expression, args.angle_unit.into()) {
        outcome @ EvaluationOutcome::Success(_) => {
            println!("{outcome}");
            ExitCode::SUCCESS
        },
        failure => {
            eprintln!("{failure}");
            ExitCode::FAILURE
        },
    }
}
