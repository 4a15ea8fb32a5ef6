//! List commands for applications and architectures

use hailo_config::ConfigContext;

use crate::error::{CliError, Result};

/// Run the list-apps command
pub fn run_list_apps(ctx: &ConfigContext) -> Result<()> {
    for app in ctx.available_apps()? {
        println!("{app}");
    }
    Ok(())
}

/// Run the list-archs command
pub fn run_list_archs(ctx: &ConfigContext, app: &str) -> Result<()> {
    let archs = ctx.supported_architectures(app)?;
    if archs.is_empty() {
        return Err(CliError::user(format!("No architectures found for app '{app}'")));
    }
    for arch in archs {
        println!("{arch}");
    }
    Ok(())
}
