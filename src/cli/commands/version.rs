//! Version command implementation

use anyhow::Result;

use crate::cli::Output;

pub fn execute(output: &Output) -> Result<()> {
    output.header("Wordguard Version");
    output.table_row("Version", crate::VERSION);
    output.table_row("Package", crate::PKG_NAME);
    output.table_row("Description", crate::PKG_DESCRIPTION);
    Ok(())
}
