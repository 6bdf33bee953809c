// src/services/importer.rs

//! Merging catalog course names into a user's subject list.

use crate::models::Course;

/// Extract usable subject names from catalog records.
///
/// Reads the `name` field only. The upstream catalog also carries a
/// `course_code` field that may be the better label; switching to it is
/// a deliberate product decision, not a bug fix, so this stays a
/// single-field read.
pub fn extract_subject_names(courses: &[Course]) -> Vec<String> {
    courses
        .iter()
        .filter_map(|course| course.display_name().map(str::to_string))
        .collect()
}

/// Append each incoming subject not already present, case-sensitively.
///
/// Preserves the existing order and the relative first-appearance order
/// of `incoming`. Returns whether anything was appended.
pub fn merge_subjects(existing: &mut Vec<String>, incoming: &[String]) -> bool {
    let mut added = false;
    for subject in incoming {
        if !existing.iter().any(|s| s == subject) {
            existing.push(subject.clone());
            added = true;
        }
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_appends_new_only() {
        let mut subjects = vec!["Math".to_string()];
        let added = merge_subjects(&mut subjects, &["Math".to_string(), "Bio".to_string()]);
        assert!(added);
        assert_eq!(subjects, vec!["Math", "Bio"]);
    }

    #[test]
    fn test_merge_reports_nothing_new() {
        let mut subjects = vec!["Math".to_string()];
        let added = merge_subjects(&mut subjects, &["Math".to_string()]);
        assert!(!added);
        assert_eq!(subjects, vec!["Math"]);
    }

    #[test]
    fn test_merge_is_case_sensitive() {
        let mut subjects = vec!["Math".to_string()];
        let added = merge_subjects(&mut subjects, &["math".to_string()]);
        assert!(added);
        assert_eq!(subjects, vec!["Math", "math"]);
    }

    #[test]
    fn test_merge_dedups_within_incoming() {
        let mut subjects = Vec::new();
        merge_subjects(
            &mut subjects,
            &["Bio".to_string(), "Chem".to_string(), "Bio".to_string()],
        );
        assert_eq!(subjects, vec!["Bio", "Chem"]);
    }

    #[test]
    fn test_extract_skips_blank_names() {
        let courses = vec![
            Course {
                id: Some(1),
                name: Some("Calculus I".to_string()),
            },
            Course {
                id: Some(2),
                name: Some("  ".to_string()),
            },
            Course {
                id: Some(3),
                name: None,
            },
            Course {
                id: Some(4),
                name: Some(" Intro to Psychology ".to_string()),
            },
        ];
        assert_eq!(
            extract_subject_names(&courses),
            vec!["Calculus I", "Intro to Psychology"]
        );
    }
}
