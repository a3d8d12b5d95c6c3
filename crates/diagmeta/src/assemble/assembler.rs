//! The document assembler: one pass over all source files.

use tracing::{error, info};

use crate::dimension::DimensionRegistry;
use crate::error::Result;
use crate::extract::extract_field;
use crate::input::SourceFile;
use crate::model::{FieldRef, Group, MetadataDocument, Section};
use crate::report::{DiagnosticKind, ValidationReport};
use crate::validate::{split_section_group, validate_names, FieldValidator};

/// Result of assembling a full run.
pub struct AssemblyResult {
    /// The assembled document, populated even when invalid so every error
    /// can be surfaced.
    pub document: MetadataDocument,
    /// Document-wide validity; serialization must be gated on this.
    pub valid: bool,
    /// Every aggregated finding, in processing order.
    pub report: ValidationReport,
}

/// Builds the section/group/field hierarchy record by record.
///
/// The assembler exclusively owns the in-progress document and the
/// non-spatial dimension registry; both are single-writer and the
/// first-seen-wins semantics of the registry make processing order
/// significant, so files must be supplied in a deterministic order.
pub struct DocumentAssembler {
    document: MetadataDocument,
    registry: DimensionRegistry,
    validator: FieldValidator,
    report: ValidationReport,
    total_files: usize,
    valid_files: usize,
}

impl DocumentAssembler {
    /// Create an assembler carrying the standard level markers and the
    /// injected field validator.
    pub fn new(standard_level_markers: Vec<String>, validator: FieldValidator) -> Self {
        Self {
            document: MetadataDocument::new(standard_level_markers),
            registry: DimensionRegistry::new(),
            validator,
            report: ValidationReport::new(),
            total_files: 0,
            valid_files: 0,
        }
    }

    /// Process a batch of files in sorted-path order.
    pub fn process_files(&mut self, mut files: Vec<(String, Result<SourceFile>)>) {
        files.sort_by(|a, b| a.0.cmp(&b.0));
        for (path, parsed) in files {
            self.process_file(&path, parsed);
        }
    }

    /// Process one source file.
    ///
    /// A structural parse failure skips the file (fatal for the file only).
    /// Everything else aggregates: the file's fields are attached to their
    /// group valid or not, and any failure clears the document-wide flag.
    pub fn process_file(&mut self, path: &str, parsed: Result<SourceFile>) {
        self.total_files += 1;

        let file = match parsed {
            Ok(file) => file,
            Err(parse_error) => {
                self.report.error(
                    DiagnosticKind::StructuralParse,
                    path,
                    format!("Fatal parse error: {parse_error}"),
                );
                self.document.valid = false;
                return;
            }
        };

        let mut file_valid = validate_names(
            &file.file_name,
            &file.module_name,
            &file.type_name,
            file.group_name.as_deref(),
            &mut self.report,
        );

        let Some((section_name, group_name)) = split_section_group(&file.file_name) else {
            // No sensible attachment point exists; skip the file's records.
            self.report.error(
                DiagnosticKind::Naming,
                path,
                format!("Filename is not correct: {}", file.file_name),
            );
            self.document.valid = false;
            return;
        };

        let mut group = Group::new(&group_name, &file.file_name);

        for record in &file.records {
            let (field, mut field_valid) =
                extract_field(record, &file.file_name, &mut self.report);

            // Shared-definition consistency; a conflict is a hard stop for
            // this record because the snapshot cannot hold two definitions
            // under one dimension name.
            for definition in field.non_spatial_dimension.values() {
                let reference = FieldRef {
                    section: section_name.clone(),
                    group: group_name.clone(),
                    field_id: field.label().to_string(),
                };
                if let Err(conflict) = self.registry.register(definition, reference) {
                    self.report.error(
                        DiagnosticKind::Dimension,
                        field.label().to_string(),
                        conflict.to_string(),
                    );
                    field_valid = false;
                    break;
                }
            }

            if !self.validator.validate(&field, &mut self.report) {
                field_valid = false;
            }

            if let Some(id) = &field.unique_id {
                if group.fields.contains_key(id.as_str()) {
                    self.report.error(
                        DiagnosticKind::Duplicate,
                        id.clone(),
                        format!("Field {id} is already declared in group {group_name}"),
                    );
                    field_valid = false;
                }
            }
            group.add_field(field);

            if !field_valid {
                file_valid = false;
            }
        }

        let section = self
            .document
            .sections
            .entry(section_name.clone())
            .or_insert_with(|| Section::new(&section_name));
        if !section.add_group(group) {
            self.report.error(
                DiagnosticKind::Duplicate,
                path,
                format!("Group {group_name} is already declared in section {section_name}"),
            );
            file_valid = false;
        }

        if file_valid {
            self.valid_files += 1;
        } else {
            self.document.valid = false;
        }
    }

    /// Freeze the document and hand back the run's outcome.
    pub fn finish(self) -> AssemblyResult {
        let mut document = self.document;
        document.non_spatial_dimensions = self.registry.into_dimensions();

        if self.valid_files == self.total_files {
            info!("All {} files are valid", self.total_files);
        } else {
            error!(
                "{} of {} files are invalid",
                self.total_files - self.valid_files,
                self.total_files
            );
        }

        AssemblyResult {
            valid: document.valid,
            document,
            report: self.report,
        }
    }
}
