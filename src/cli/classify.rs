use std::io::Read;
use std::path::Path;

use crate::chunk::classify_document;
use crate::classifier::PracticeClassifier;
use crate::config::ScanConfig;
use crate::error::Result;
use crate::types::ClassificationRecord;

/// Execute the `classify` command: print records for a file or stdin.
pub fn execute(
    config: &ScanConfig,
    file: Option<&Path>,
    section_id: &str,
    document: bool,
) -> Result<()> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let records = run(config, &text, section_id, document)?;
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}

/// Classify `text` either as a single section or as a chunked document
pub fn run(
    config: &ScanConfig,
    text: &str,
    section_id: &str,
    document: bool,
) -> Result<Vec<ClassificationRecord>> {
    let classifier = PracticeClassifier::builtin()?;
    if document {
        classify_document(&classifier, text, &config.chunk)
    } else {
        classifier.classify(text, section_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScanError;
    use crate::types::{Practice, Status};

    #[test]
    fn test_run_single_section() {
        let records = run(
            &ScanConfig::default(),
            "We retain your data for 5 years.",
            "cli",
            false,
        )
        .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].section_id, "cli");
        assert_eq!(records[0].practice, Practice::Retention);
        assert_eq!(records[0].status, Status::Allows);
    }

    #[test]
    fn test_run_document_uses_chunk_ids() {
        let records = run(&ScanConfig::default(), "We sell data.", "ignored", true).unwrap();
        assert_eq!(records[0].section_id, "chunk_0");
    }

    #[test]
    fn test_run_empty_text() {
        let err = run(&ScanConfig::default(), "", "cli", false).unwrap_err();
        assert!(matches!(err, ScanError::InvalidInput(_)));
    }

    #[test]
    fn test_execute_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policy.txt");
        std::fs::write(&path, "We use your health information for research.").unwrap();
        assert!(execute(&ScanConfig::default(), Some(path.as_path()), "f", false).is_ok());
    }

    #[test]
    fn test_execute_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = execute(
            &ScanConfig::default(),
            Some(dir.path().join("absent.txt").as_path()),
            "f",
            false,
        )
        .unwrap_err();
        assert!(matches!(err, ScanError::Io(_)));
    }
}
