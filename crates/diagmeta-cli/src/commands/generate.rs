//! Generate command - run the pipeline and write both artifacts.

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;
use diagmeta::validate::standards::{CfValidator, CmipValidator};
use diagmeta::{DocumentAssembler, FieldValidator, MetaError, SourceFile};
use tracing::{debug, info};

use crate::discovery::find_meta_files;

#[allow(clippy::too_many_arguments)]
pub fn run(
    path: PathBuf,
    output: Option<PathBuf>,
    filename: String,
    levels: Option<PathBuf>,
    cmip: Option<PathBuf>,
    cf: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!("Path not found: {}", path.display()).into());
    }

    let markers = load_level_markers(&path, levels)?;

    let mut validator = FieldValidator::new();
    if let Some(cmip) = cmip {
        validator =
            validator.with_standard(CmipValidator::from_json_str(&fs::read_to_string(cmip)?)?);
    }
    if let Some(cf) = cf {
        validator =
            validator.with_standard(CfValidator::from_json_str(&fs::read_to_string(cf)?)?);
    }

    let files = find_meta_files(&path);
    info!("Discovered {} metadata files under {}", files.len(), path.display());
    println!(
        "{} {} metadata files under {}",
        "Processing".cyan().bold(),
        files.len().to_string().white().bold(),
        path.display()
    );

    let mut assembler = DocumentAssembler::new(markers, validator);
    for file in files {
        debug!("Reading {}", file.display());
        let parsed = load_source_file(&file);
        assembler.process_file(&file.display().to_string(), parsed);
    }
    let result = assembler.finish();

    if verbose {
        for diagnostic in result.report.diagnostics() {
            println!(
                "  {:25} {}: {}",
                diagnostic.kind.label(),
                diagnostic.scope,
                diagnostic.message
            );
        }
    }

    println!(
        "Found {} findings ({} errors, {} warnings)",
        result.report.diagnostics().len().to_string().white().bold(),
        result.report.error_count().to_string().red(),
        result.report.warning_count().to_string().yellow()
    );

    // No partial output: an invalid run writes nothing.
    if !result.valid {
        return Err("Document is invalid; no output written".into());
    }

    let output = output.unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output)?;
    let snapshot_path = diagmeta::snapshot::write_snapshot(&result.document, &output)?;
    let schema_path =
        diagmeta::schema_conf::write_config_schema(&result.document, &output, &filename)?;

    println!(
        "{} {} and {}",
        "Wrote".green().bold(),
        snapshot_path.display().to_string().white(),
        schema_path.display().to_string().white()
    );
    Ok(())
}

/// Read the ordered level-marker list. A missing default file means no
/// model-relative dimensions are in use, which is not an error.
fn load_level_markers(
    root: &Path,
    levels: Option<PathBuf>,
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    match levels {
        Some(path) => Ok(serde_json::from_str(&fs::read_to_string(path)?)?),
        None => {
            let default = root.join("meta_types").join("levels.json");
            if default.exists() {
                Ok(serde_json::from_str(&fs::read_to_string(default)?)?)
            } else {
                Ok(Vec::new())
            }
        }
    }
}

fn load_source_file(path: &Path) -> diagmeta::Result<SourceFile> {
    let text = fs::read_to_string(path).map_err(|source| MetaError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|error| MetaError::StructuralParse {
        file: path.display().to_string(),
        message: error.to_string(),
    })
}
