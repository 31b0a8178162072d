//! Terminal output - styled messages and version rendering.

use anyhow::Result;

use crate::version::VersionTriple;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message);
}

/// Renders the derived versions for the requested output format.
///
/// `standard`, `dirty` and `full` print the single matching value; `all`
/// prints one `key=value` line per variant so build pipelines can capture
/// each output separately.
///
/// # Arguments
/// * `triple` - The derived version strings
/// * `format` - One of "standard", "dirty", "full" or "all"
///
/// # Returns
/// * `Ok(String)` - The rendered output, without a trailing newline
/// * `Err` - If the format name is not recognized
pub fn format_versions(triple: &VersionTriple, format: &str) -> Result<String> {
    match format {
        "standard" => Ok(triple.standard.clone()),
        "dirty" => Ok(triple.standard_with_dirty.clone()),
        "full" => Ok(triple.full.clone()),
        "all" => Ok(format!(
            "standard={}\nstandard_with_dirty={}\nfull={}",
            triple.standard, triple.standard_with_dirty, triple.full
        )),
        other => Err(anyhow::anyhow!(
            "Unknown output format '{}': expected standard, dirty, full or all",
            other
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_triple() -> VersionTriple {
        VersionTriple {
            standard: "3.2.1".to_string(),
            standard_with_dirty: "3.2.1-dirty".to_string(),
            full: "3.2.1-deadbee-dirty".to_string(),
        }
    }

    #[test]
    fn test_format_single_values() {
        let triple = sample_triple();

        assert_eq!(format_versions(&triple, "standard").unwrap(), "3.2.1");
        assert_eq!(format_versions(&triple, "dirty").unwrap(), "3.2.1-dirty");
        assert_eq!(
            format_versions(&triple, "full").unwrap(),
            "3.2.1-deadbee-dirty"
        );
    }

    #[test]
    fn test_format_all_emits_key_value_lines() {
        let rendered = format_versions(&sample_triple(), "all").unwrap();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "standard=3.2.1");
        assert_eq!(lines[1], "standard_with_dirty=3.2.1-dirty");
        assert_eq!(lines[2], "full=3.2.1-deadbee-dirty");
    }

    #[test]
    fn test_format_unknown_name_errors() {
        let result = format_versions(&sample_triple(), "json");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("json"));
    }
}
