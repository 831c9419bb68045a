//! Fix command CLI wrapper
//!
//! Loads configuration, delegates the work to `operations::fix` and maps the
//! report to the process result.

use crate::cli::FixArgs;
use crate::config::FixerConfig;
use crate::error::{Result, SkillfixError};
use crate::operations::fix::display;
use crate::operations::{FixOperation, FixOptions};

/// Run the fix command
pub fn run(args: &FixArgs) -> Result<()> {
    let config = FixerConfig::load(args.config.as_deref(), &args.root)?;
    let options = FixOptions::from_args(args, &config);
    let operation = FixOperation::new(options);

    display::print_header(&args.root, operation.options());
    let report = operation.execute(&args.root)?;
    display::print_summary(&report, operation.options());

    let malformed = report.malformed();
    if operation.options().strict && malformed > 0 {
        return Err(SkillfixError::MalformedFrontmatter { count: malformed });
    }

    Ok(())
}
