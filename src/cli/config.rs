use ascbin::{Charset, CharsetRegistry};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use super::global::GlobalArgs;

/// Loads built-in charsets, user overrides, and the `--charsets` file if given.
pub fn load_registry(global: &GlobalArgs) -> Result<CharsetRegistry, Box<dyn std::error::Error>> {
    let mut registry = CharsetRegistry::load_with_overrides()?;

    if let Some(path) = &global.charsets {
        let path = expand_path(path);
        let extra = CharsetRegistry::load_from_file(&path)
            .map_err(|e| format!("Cannot load charsets from '{}': {}", path.display(), e))?;
        registry.merge(extra);
    }

    Ok(registry)
}

/// Expands a leading `~` in user-supplied paths.
fn expand_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(raw) => PathBuf::from(shellexpand::tilde(raw).as_ref()),
        None => path.to_path_buf(),
    }
}

/// Builds the named charset, or the registry default when no name is given.
pub fn resolve_charset(
    registry: &CharsetRegistry,
    name: Option<&str>,
) -> Result<Charset, Box<dyn std::error::Error>> {
    let name = name.unwrap_or_else(|| registry.default_name());
    log::debug!("using charset '{}'", name);
    registry.build(name)
}

/// Reads the input file or stdin, enforcing `--max-size`.
pub fn read_input(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(file_path) = file {
        // Check file size if max_size is set
        if global.max_size > 0 {
            let metadata = fs::metadata(file_path)?;
            let file_size = metadata.len() as usize;

            if file_size > global.max_size {
                if global.force {
                    if !global.quiet {
                        eprintln!(
                            "Warning: Processing large file ({} bytes, limit: {} bytes)",
                            file_size, global.max_size
                        );
                    }
                } else {
                    return Err(format!(
                        "File size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
                        file_size, global.max_size
                    )
                    .into());
                }
            }
        }

        Ok(fs::read(file_path)?)
    } else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;

        // Check stdin size after reading
        if global.max_size > 0 && buffer.len() > global.max_size {
            return Err(format!(
                "Input size ({} bytes) exceeds maximum ({} bytes). Use a file with --force for large inputs.",
                buffer.len(),
                global.max_size
            )
            .into());
        }

        Ok(buffer)
    }
}

/// Writes to the output file, or stdout when none is given.
pub fn write_output(output: Option<&PathBuf>, data: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    use std::io::Write;

    if let Some(output_path) = output {
        fs::write(output_path, data)?;
    } else {
        io::stdout().write_all(data)?;
    }
    Ok(())
}
