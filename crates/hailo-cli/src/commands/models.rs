//! Model inspection commands

use hailo_config::ConfigContext;

use super::validate_arch;
use crate::error::{CliError, Result};

/// Run the show-models command
pub fn run_show_models(ctx: &ConfigContext, app: &str, arch: &str, json: bool) -> Result<()> {
    let arch = validate_arch(arch)?;
    let models = ctx.all_models(app, &arch)?;
    if models.is_empty() {
        return Err(CliError::user(format!("No models found for app '{app}' arch '{arch}'")));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&models)?);
    } else {
        for model in &models {
            println!("{}", model.name());
        }
    }
    Ok(())
}

/// Run the model-info command
pub fn run_model_info(
    ctx: &ConfigContext,
    app: &str,
    arch: &str,
    model: &str,
    json: bool,
) -> Result<()> {
    let arch = validate_arch(arch)?;
    let Some(entry) = ctx.model_info(app, &arch, model)? else {
        return Err(CliError::user(format!(
            "Model '{model}' not found for app '{app}' arch '{arch}'"
        )));
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
    } else {
        println!("name:   {}", entry.name());
        println!("source: {}", entry.source());
        println!("url:    {}", entry.url().unwrap_or("-"));
    }
    Ok(())
}

/// Run the is-gen-ai command
pub fn run_is_gen_ai(ctx: &ConfigContext, app: &str) -> Result<()> {
    println!("{}", ctx.is_gen_ai_app(app)?);
    Ok(())
}
