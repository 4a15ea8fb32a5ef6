//! Command implementations for hailo-cli

pub mod inputs;
pub mod list;
pub mod models;

pub use inputs::{run_input_get, run_input_list};
pub use list::{run_list_apps, run_list_archs};
pub use models::{run_is_gen_ai, run_model_info, run_show_models};

use crate::error::{CliError, Result};

/// Architectures accepted by `--arch`.
pub const SUPPORTED_ARCHES: [&str; 3] = ["hailo8", "hailo8l", "hailo10h"];

/// Lowercase `arch` and check it against [`SUPPORTED_ARCHES`].
pub fn validate_arch(arch: &str) -> Result<String> {
    let arch = arch.to_lowercase();
    if SUPPORTED_ARCHES.contains(&arch.as_str()) {
        Ok(arch)
    } else {
        Err(CliError::user(format!(
            "Invalid arch '{}', supported: {}",
            arch,
            SUPPORTED_ARCHES.join(", ")
        )))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_arch_is_case_insensitive() {
        assert_eq!(validate_arch("HAILO8L").unwrap(), "hailo8l");
        assert_eq!(validate_arch("hailo10h").unwrap(), "hailo10h");
    }

    #[test]
    fn test_validate_arch_rejects_unknown() {
        let err = validate_arch("hailo15").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Invalid arch 'hailo15'"));
        assert!(msg.contains("hailo8, hailo8l, hailo10h"));
    }
}
