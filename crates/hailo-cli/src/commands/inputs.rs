//! Input inspection commands

use hailo_config::ConfigContext;

use crate::error::{CliError, Result};

/// Run the input-list command
pub fn run_input_list(ctx: &ConfigContext, app: &str) -> Result<()> {
    let catalog = ctx.resources()?;
    if catalog.inputs_for_app(app).is_empty() {
        return Err(CliError::user(format!("No inputs defined for app '{app}'")));
    }

    for asset in catalog.app_inputs(app) {
        println!("{}: {}", asset.kind, asset.name);
    }
    Ok(())
}

/// Run the input-get command
///
/// Prints the resolved URL; fetching it is left to the downloader.
pub fn run_input_get(ctx: &ConfigContext, app: &str, id: &str) -> Result<()> {
    let catalog = ctx.resources()?;
    if catalog.inputs_for_app(app).is_empty() {
        return Err(CliError::user(format!("No inputs defined for app '{app}'")));
    }

    let asset = catalog
        .find_input(app, id)
        .ok_or_else(|| CliError::user(format!("Input '{id}' not found for app '{app}'")))?;
    let url = catalog
        .resolve_input_url(&asset)
        .ok_or_else(|| CliError::user(format!("No URL found for input '{id}'")))?;

    tracing::debug!(app, id, kind = %asset.kind, %url, "Resolved input URL");
    println!("{url}");
    Ok(())
}
