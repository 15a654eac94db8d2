use kwgen_codegen::render_table;
use kwgen_config::Config;
use kwgen_fs::{FileEmitter, FileLoader};
use kwgen_scan::{ReservedWord, extract_reserved};
use std::{io, path::PathBuf};
use tracing::debug;

/// The only ways a run can fail. Malformed headers are not errors; they
/// just produce a different table.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("failed to read {}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub keywords: Vec<ReservedWord>,
    pub code: String,
    pub output_path: PathBuf,
}

/// Extracts the keywords from `source` and renders the table, without
/// touching any file.
pub fn render(source: &str, config: &Config) -> (Vec<ReservedWord>, String) {
    let keywords = extract_reserved(source, &config.markers);
    debug!(count = keywords.len(), "extracted reserved words");

    let code = render_table(&keywords, &config.template);
    (keywords, code)
}

/// Reads the token header once, then overwrites the output file once.
///
/// Nothing is written if the header can't be read.
pub fn generate<F>(files: &mut F, config: &Config) -> Result<Generated, GenerateError>
where
    F: FileLoader + FileEmitter,
{
    let source = files
        .read_file(&config.input_path)
        .map_err(|source| GenerateError::Read {
            path: config.input_path.clone(),
            source,
        })?;

    let (keywords, code) = render(&source, config);

    files
        .write_file(&config.output_path, &code)
        .map_err(|source| GenerateError::Write {
            path: config.output_path.clone(),
            source,
        })?;

    debug!(path = %config.output_path.display(), "wrote keyword table");

    Ok(Generated {
        keywords,
        code,
        output_path: config.output_path.clone(),
    })
}
