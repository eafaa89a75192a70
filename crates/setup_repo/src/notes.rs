// crates/setup_repo/src/notes.rs

use anyhow::{bail, Context, Result};
use std::path::Path;

use execute_command::executed_successfully;
use status_report::print_status;
use substitute_placeholders::substitute_file;

use crate::options::{required, Options};

/// Creates `<notes>/<repo>.txt` from the template. Preflight has already refused an existing notes file.
pub fn create_notes(options: &Options) -> Result<()> {
    if !options.uses_template() {
        return Ok(());
    }

    let template = Path::new(required(&options.template, "template")?);
    let notes_file = options.notes_file()?;
    print_status(
        &format!("Creating notes {} from {}", notes_file.display(), template.display()),
        options.verbose,
    );

    let failure = format!("Failed creating notes {} from {}", notes_file.display(), template.display());
    if options.no_modify {
        if !executed_successfully("cp", &[template, notes_file.as_path()], None, options.verbose) {
            bail!(failure);
        }
    } else {
        substitute_file(template, &notes_file, &options.placeholders()).context(failure)?;
    }
    Ok(())
}
