//! Validation and processing of an uploaded download log
//!
//! Nothing here talks to Telegram: the document handler fetches the bytes and
//! hands them over as a [`RawUpload`].

use extractor::{LinkExtractor, OutputDocument};
use thiserror::Error;

use crate::constants::{INPUT_EXTENSION, MAX_UPLOAD_SIZE, OUTPUT_EXTENSION};
use crate::utils::format_bytes;

/// Reasons an upload is refused before extraction
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("Document has no file name")]
    MissingFileName,
    #[error("'{0}' is not a .sh file")]
    WrongExtension(String),
    #[error("File too large ({}). Maximum size is {}.", human(.size), human(.limit))]
    TooLarge { size: u64, limit: u64 },
}

fn human(bytes: &u64) -> String {
    format_bytes(*bytes)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error(transparent)]
    Invalid(#[from] InvalidInput),
    #[error("Upload is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}

/// An uploaded document as received from the chat
#[derive(Debug, Clone)]
pub struct RawUpload {
    pub file_name: Option<String>,
    pub content: Vec<u8>,
}

/// Result of a successful upload: the document and the name to send it under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed {
    pub output_name: String,
    pub document: OutputDocument,
}

/// Accept only names ending in `.sh` (case-sensitive)
pub fn validate_file_name(name: Option<&str>) -> Result<&str, InvalidInput> {
    match name {
        None => Err(InvalidInput::MissingFileName),
        Some(name) if name.ends_with(INPUT_EXTENSION) => Ok(name),
        Some(name) => Err(InvalidInput::WrongExtension(name.to_string())),
    }
}

pub fn check_size(size: u32) -> Result<(), InvalidInput> {
    if size > MAX_UPLOAD_SIZE {
        return Err(InvalidInput::TooLarge {
            size: u64::from(size),
            limit: u64::from(MAX_UPLOAD_SIZE),
        });
    }
    Ok(())
}

/// `download.sh` -> `download.txt`
pub fn output_file_name(name: &str) -> String {
    let base = name.strip_suffix(INPUT_EXTENSION).unwrap_or(name);
    format!("{}{}", base, OUTPUT_EXTENSION)
}

/// Validate, decode and extract links from one upload
pub fn process_upload(upload: RawUpload, extractor: &LinkExtractor) -> Result<Processed, UploadError> {
    let name = validate_file_name(upload.file_name.as_deref())?;
    let output_name = output_file_name(name);
    let content = String::from_utf8(upload.content)?;

    let document = extractor.extract(&content);
    tracing::info!(
        file = %output_name,
        entries = document.len(),
        mode = %extractor.mode(),
        "Extracted links"
    );

    Ok(Processed {
        output_name,
        document,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use extractor::PairingMode;

    fn upload(name: &str, content: &str) -> RawUpload {
        RawUpload {
            file_name: Some(name.to_string()),
            content: content.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_validate_file_name() {
        assert_eq!(validate_file_name(Some("batch.sh")), Ok("batch.sh"));
        assert_eq!(
            validate_file_name(Some("notes.txt")),
            Err(InvalidInput::WrongExtension("notes.txt".to_string()))
        );
        // suffix check is case-sensitive
        assert!(validate_file_name(Some("BATCH.SH")).is_err());
        assert!(validate_file_name(Some("batch.sh.bak")).is_err());
        assert_eq!(validate_file_name(None), Err(InvalidInput::MissingFileName));
    }

    #[test]
    fn test_check_size() {
        assert!(check_size(0).is_ok());
        assert!(check_size(MAX_UPLOAD_SIZE).is_ok());
        assert!(matches!(
            check_size(MAX_UPLOAD_SIZE + 1),
            Err(InvalidInput::TooLarge { .. })
        ));
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name("batch.sh"), "batch.txt");
        assert_eq!(output_file_name("my.sh.logs.sh"), "my.sh.logs.txt");
        assert_eq!(output_file_name(".sh"), ".txt");
    }

    #[test]
    fn test_process_upload_rejects_wrong_extension() {
        let result = process_upload(
            upload("notes.txt", "Video ID not found in URL: https://youtube.com/embed/a"),
            &LinkExtractor::default(),
        );
        assert_eq!(
            result,
            Err(UploadError::Invalid(InvalidInput::WrongExtension(
                "notes.txt".to_string()
            )))
        );
    }

    #[test]
    fn test_process_upload_invalid_utf8() {
        let raw = RawUpload {
            file_name: Some("batch.sh".to_string()),
            content: vec![0xff, 0xfe, 0xfd],
        };
        let result = process_upload(raw, &LinkExtractor::default());
        assert!(matches!(result, Err(UploadError::Decode(_))));
    }

    #[test]
    fn test_process_upload_extracts() {
        let log = "Starting download: \"Class 1.mp4\"\n\
                   ffmpeg -i \"https://stream.pwjarvis.app/c1/index.m3u8\"\n\
                   wget https://cdn.example/DPP_01.pdf\n";
        let processed = process_upload(
            upload("batch.sh", log),
            &LinkExtractor::new(PairingMode::Proximity),
        )
        .unwrap();

        assert_eq!(processed.output_name, "batch.txt");
        assert_eq!(
            processed.document.render(),
            "Class 1 : https://stream.pwjarvis.app/c1/index.m3u8\n\
             DPP 01 : https://cdn.example/DPP_01.pdf\n"
        );
    }

    #[test]
    fn test_process_upload_empty_file() {
        let processed = process_upload(upload("empty.sh", ""), &LinkExtractor::default()).unwrap();
        assert!(processed.document.is_empty());
        assert_eq!(processed.output_name, "empty.txt");
    }
}
