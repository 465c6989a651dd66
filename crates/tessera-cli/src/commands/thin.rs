//! Thin command implementation.

use crate::cli::ThinArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use tessera_domain::{is_thin_category, THIN_CATEGORIES};

/// Execute the thin command.
pub fn execute_thin(args: ThinArgs, formatter: &Formatter) -> Result<()> {
    if args.list {
        println!("{}", formatter.format_thin_list(&THIN_CATEGORIES)?);
        return Ok(());
    }

    let slug = args
        .slug
        .ok_or_else(|| CliError::InvalidInput("A category slug is required".to_string()))?;
    println!("{}", formatter.format_thin(&slug, is_thin_category(&slug))?);

    Ok(())
}
