//! Client-side guard for the resume upload field.
//!
//! The server does the real parsing; this only stops obviously wrong picks
//! (bad extension, oversized file) before the form ever submits.

use thiserror::Error;

/// Extensions the analyzer can ingest, lower-case with leading dot.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = [".txt", ".pdf", ".docx"];

/// Upper bound on the selected file, inclusive (5 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("Please upload a TXT, PDF, or DOCX file")]
    UnsupportedType,
    #[error("File size should be less than 5MB")]
    TooLarge,
}

/// Extension as the substring after the last `.`, lower-cased and prefixed
/// with a dot. `None` when the name carries no dot at all.
pub fn file_extension(name: &str) -> Option<String> {
    let idx = name.rfind('.')?;
    Some(format!(".{}", name[idx + 1..].to_lowercase()))
}

/// Validate a selected file. Type is checked before size, mirroring the
/// order the alerts fire in.
pub fn validate_upload(name: &str, size: u64) -> Result<(), UploadError> {
    let ext = file_extension(name).ok_or(UploadError::UnsupportedType)?;
    if !ACCEPTED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(UploadError::UnsupportedType);
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_extensions_case_insensitively() {
        for name in ["resume.TXT", "resume.Pdf", "resume.docx", "a.b.PDF"] {
            assert_eq!(validate_upload(name, 1024), Ok(()), "{name}");
        }
    }

    #[test]
    fn rejects_unknown_or_missing_extensions() {
        for name in ["resume.doc", "photo.png", "resume", "tarball.tar.gz"] {
            assert_eq!(
                validate_upload(name, 1024),
                Err(UploadError::UnsupportedType),
                "{name}"
            );
        }
    }

    #[test]
    fn size_limit_is_inclusive() {
        assert_eq!(validate_upload("resume.pdf", MAX_UPLOAD_BYTES), Ok(()));
        assert_eq!(
            validate_upload("resume.pdf", MAX_UPLOAD_BYTES + 1),
            Err(UploadError::TooLarge)
        );
    }

    #[test]
    fn type_check_wins_over_size() {
        assert_eq!(
            validate_upload("huge.png", MAX_UPLOAD_BYTES + 1),
            Err(UploadError::UnsupportedType)
        );
    }

    #[test]
    fn alert_messages_match_the_dialogs() {
        assert_eq!(
            UploadError::UnsupportedType.to_string(),
            "Please upload a TXT, PDF, or DOCX file"
        );
        assert_eq!(
            UploadError::TooLarge.to_string(),
            "File size should be less than 5MB"
        );
    }

    #[test]
    fn extension_extraction() {
        assert_eq!(file_extension("a.DOCX").as_deref(), Some(".docx"));
        assert_eq!(file_extension("archive.tar.gz").as_deref(), Some(".gz"));
        assert_eq!(file_extension("noext"), None);
    }
}
