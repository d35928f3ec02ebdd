use anyhow::Result;

use crate::core::{SplitContext, run_pipeline};

pub mod args;
mod exit_status;
pub mod report;

pub use args::Arguments;
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let ctx = SplitContext::new(&args)?;

    report::print_header(&ctx);
    let outcome = run_pipeline(&ctx)?;
    report::print_outcome(&outcome, ctx.verbose);

    Ok(ExitStatus::Success)
}
