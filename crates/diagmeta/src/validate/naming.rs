//! Cross-checks of the four derived names for one record group.
//!
//! Every source file contributes a file name, a module name, a type name,
//! and a declared group name; all four must decompose to the same
//! `(section, group)` pair.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::report::{DiagnosticKind, ValidationReport};

static FILE_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<section>[A-Za-z0-9_]+?)__(?P<group>[A-Za-z0-9_]+)__meta\.[A-Za-z0-9]+$")
        .expect("valid regex")
});
static MODULE_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<section>[A-Za-z0-9_]+?)__(?P<group>[A-Za-z0-9_]+)__meta_mod$")
        .expect("valid regex")
});
static TYPE_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<section>[A-Za-z0-9_]+?)__(?P<group>[A-Za-z0-9_]+)__meta_type$")
        .expect("valid regex")
});
static GROUP_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<section>[A-Za-z0-9_]+?)__(?P<group>[A-Za-z0-9_]+)$").expect("valid regex")
});

fn section_group(regex: &Regex, name: &str) -> Option<(String, String)> {
    regex.captures(name).map(|caps| {
        (
            caps["section"].to_string(),
            caps["group"].to_string(),
        )
    })
}

/// Derive the `(section, group)` pair from a source file name.
pub fn split_section_group(file_name: &str) -> Option<(String, String)> {
    section_group(&FILE_NAME_REGEX, file_name)
}

/// Validate the four names declared by one source file.
///
/// Each rule is independently checked and reported; any failure makes the
/// whole record group invalid. A missing group name is an immediate
/// single-cause failure with no further checks.
pub fn validate_names(
    file_name: &str,
    module_name: &str,
    type_name: &str,
    group_name: Option<&str>,
    report: &mut ValidationReport,
) -> bool {
    let Some(group_name) = group_name else {
        report.error(
            DiagnosticKind::Naming,
            file_name,
            format!("There is no group name in {file_name}"),
        );
        return false;
    };

    let mut valid = true;

    let file_parts = section_group(&FILE_NAME_REGEX, file_name);
    let module_parts = section_group(&MODULE_NAME_REGEX, module_name);
    let type_parts = section_group(&TYPE_NAME_REGEX, type_name);
    let group_parts = section_group(&GROUP_NAME_REGEX, group_name);

    if file_parts.is_none() {
        report.error(
            DiagnosticKind::Naming,
            file_name,
            format!("Filename is not correct: {file_name}"),
        );
        valid = false;
    }
    if module_parts.is_none() {
        report.error(
            DiagnosticKind::Naming,
            file_name,
            format!("Module name in file is not correct: {module_name}"),
        );
        valid = false;
    }
    if type_parts.is_none() {
        report.error(
            DiagnosticKind::Naming,
            file_name,
            format!("Type name in file is not correct: {type_name}"),
        );
        valid = false;
    }
    if group_parts.is_none() {
        report.error(
            DiagnosticKind::Naming,
            file_name,
            format!("Group name in file is not correct: {group_name}"),
        );
        valid = false;
    }

    let (Some(file), Some(module), Some(type_), Some(group)) =
        (file_parts, module_parts, type_parts, group_parts)
    else {
        return valid;
    };

    if module.0 != file.0 {
        report.error(
            DiagnosticKind::Naming,
            file_name,
            format!(
                "Section names do not match in {file_name}: {} != {}",
                module.0, file.0
            ),
        );
        valid = false;
    }
    if module.1 != file.1 {
        report.error(
            DiagnosticKind::Naming,
            file_name,
            format!(
                "Group names do not match in {file_name}: {} != {}",
                module.1, file.1
            ),
        );
        valid = false;
    }
    if module.1 != type_.1 {
        report.error(
            DiagnosticKind::Naming,
            file_name,
            format!(
                "Bad module name in {file_name}: {} != {}",
                module.1, type_.1
            ),
        );
        valid = false;
    }
    if module.0 != type_.0 {
        report.error(
            DiagnosticKind::Naming,
            file_name,
            format!(
                "Bad meta_type name in {file_name}: {} != {}",
                module.0, type_.0
            ),
        );
        valid = false;
    }
    if group.0 != file.0 {
        report.error(
            DiagnosticKind::Naming,
            file_name,
            format!(
                "Section names do not match in {file_name}: {} != {}",
                group.0, file.0
            ),
        );
        valid = false;
    }
    if group.1 != file.1 {
        report.error(
            DiagnosticKind::Naming,
            file_name,
            format!(
                "Group names do not match in {file_name}: {} != {}",
                group.1, file.1
            ),
        );
        valid = false;
    }

    valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_names_agree() {
        let mut report = ValidationReport::new();
        let valid = validate_names(
            "physics__cloud__meta.json",
            "physics__cloud__meta_mod",
            "physics__cloud__meta_type",
            Some("physics__cloud"),
            &mut report,
        );
        assert!(valid);
        assert!(report.is_clean());
    }

    #[test]
    fn test_missing_group_name_is_single_cause() {
        let mut report = ValidationReport::new();
        let valid = validate_names(
            "physics__cloud__meta.json",
            "physics__cloud__meta_mod",
            "physics__cloud__meta_type",
            None,
            &mut report,
        );
        assert!(!valid);
        assert_eq!(report.error_count(), 1);
        assert!(report.diagnostics()[0]
            .message
            .contains("no group name"));
    }

    #[test]
    fn test_type_section_mismatch_detected() {
        // The file suffix pattern accepts any extension.
        let mut report = ValidationReport::new();
        let valid = validate_names(
            "sec__grp__meta.ext",
            "sec__grp__meta_mod",
            "other__grp__meta_type",
            Some("sec__grp"),
            &mut report,
        );
        assert!(!valid);
        assert_eq!(report.error_count(), 1);
        assert!(report.diagnostics()[0].message.contains("Bad meta_type name"));
        assert!(report.diagnostics()[0].message.contains("sec != other"));
    }

    #[test]
    fn test_bad_suffix_reported_per_name() {
        let mut report = ValidationReport::new();
        let valid = validate_names(
            "physics__cloud__meta.json",
            "physics__cloud__wrong_mod",
            "physics__cloud__meta_type",
            Some("physics__cloud"),
            &mut report,
        );
        assert!(!valid);
        assert_eq!(report.error_count(), 1);
        assert!(report.diagnostics()[0]
            .message
            .contains("Module name in file is not correct"));
    }

    #[test]
    fn test_group_string_mismatch() {
        let mut report = ValidationReport::new();
        let valid = validate_names(
            "physics__cloud__meta.json",
            "physics__cloud__meta_mod",
            "physics__cloud__meta_type",
            Some("physics__rain"),
            &mut report,
        );
        assert!(!valid);
        assert_eq!(report.error_count(), 1);
        assert!(report.diagnostics()[0].message.contains("rain != cloud"));
    }

    #[test]
    fn test_split_section_group() {
        assert_eq!(
            split_section_group("physics__cloud__meta.json"),
            Some(("physics".to_string(), "cloud".to_string()))
        );
        assert_eq!(split_section_group("not_a_meta_file.json"), None);
    }
}
