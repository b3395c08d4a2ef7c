//! Zip payload construction

use chrono::{DateTime, Utc};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::entities::decode_basic_entities;
use super::{Archive, ArchiveError};
use crate::config::{ArchiveCompression, CaptureConfig};
use crate::resources::FetchedResource;

/// Final artifact handed to the save collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivePayload {
    /// Suggested file name, `{prefix}{epoch_millis}.zip`
    pub filename_hint: String,
    /// Zip bytes
    pub bytes: Vec<u8>,
    /// Number of entries in the archive, document included
    pub entries: usize,
}

/// Archive name derived from the capture timestamp
#[must_use]
pub fn archive_name(prefix: &str, captured_at: DateTime<Utc>) -> String {
    format!("{prefix}{}.zip", captured_at.timestamp_millis())
}

/// Assembles the document and fetched resources into a zip payload
pub struct ArchiveBuilder<'a> {
    config: &'a CaptureConfig,
}

impl<'a> ArchiveBuilder<'a> {
    #[must_use]
    pub fn new(config: &'a CaptureConfig) -> Self {
        Self { config }
    }

    /// Attribution comment, newline, then the document with the eight
    /// supported entities decoded
    #[must_use]
    pub fn prepare_document(&self, document: &str) -> String {
        let commented = format!("{}\n{document}", self.config.attribution_comment());
        decode_basic_entities(&commented).into_owned()
    }

    /// Document entry first, then one entry per fetched resource
    ///
    /// Resources without bytes are skipped. Resources sharing a local path
    /// overwrite each other.
    #[must_use]
    pub fn assemble(&self, document: &str, resources: &[FetchedResource]) -> Archive {
        let mut archive = Archive::new();
        archive.insert(
            self.config.document_name(),
            self.prepare_document(document).into_bytes(),
        );

        for resource in resources {
            if let Some(bytes) = &resource.bytes {
                archive.insert(resource.record.local_path.as_str(), bytes.clone());
            }
        }

        archive
    }

    /// Assemble and serialize the archive
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError` if the zip writer fails.
    pub fn build(
        &self,
        document: &str,
        resources: &[FetchedResource],
        captured_at: DateTime<Utc>,
    ) -> Result<ArchivePayload, ArchiveError> {
        let archive = self.assemble(document, resources);
        let bytes = self.write_zip(&archive)?;

        Ok(ArchivePayload {
            filename_hint: archive_name(self.config.archive_prefix(), captured_at),
            bytes,
            entries: archive.len(),
        })
    }

    /// Serialize an archive to zip bytes
    ///
    /// Entry timestamps are fixed so identical archives produce identical bytes.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError` if the zip writer fails.
    pub fn write_zip(&self, archive: &Archive) -> Result<Vec<u8>, ArchiveError> {
        let method = match self.config.compression() {
            ArchiveCompression::Deflated => CompressionMethod::Deflated,
            ArchiveCompression::Stored => CompressionMethod::Stored,
        };
        let options = SimpleFileOptions::default()
            .compression_method(method)
            .last_modified_time(zip::DateTime::default())
            .unix_permissions(0o644);

        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (path, bytes) in archive.entries() {
            writer.start_file(path.as_str(), options)?;
            writer.write_all(bytes)?;
        }

        Ok(writer.finish()?.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{ResourceKind, ResourceRecord};
    use chrono::TimeZone;
    use std::io::Read;

    fn fetched(path: &str, bytes: Option<&[u8]>) -> FetchedResource {
        FetchedResource {
            record: ResourceRecord::remote(format!("https://x.test/{path}"), path, ResourceKind::Image),
            bytes: bytes.map(<[u8]>::to_vec),
        }
    }

    #[test]
    fn test_archive_name_uses_epoch_millis() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(archive_name("page_", at), "page_1700000000123.zip");
    }

    #[test]
    fn test_document_is_commented_then_decoded() {
        let config = CaptureConfig::builder()
            .attribution_comment("<!-- captured -->")
            .build()
            .unwrap();
        let prepared = ArchiveBuilder::new(&config).prepare_document("<p>a &amp; b &nbsp;</p>");
        assert_eq!(prepared, "<!-- captured -->\n<p>a & b &nbsp;</p>");
    }

    #[test]
    fn test_failed_resources_are_not_archived() {
        let config = CaptureConfig::default();
        let resources = vec![
            fetched("assets/image0.png", Some(b"png")),
            fetched("assets/image1.png", None),
            fetched("assets/script0.js", Some(b"js")),
        ];

        let archive = ArchiveBuilder::new(&config).assemble("<html></html>", &resources);

        assert_eq!(
            archive.paths().collect::<Vec<_>>(),
            vec!["index.html", "assets/image0.png", "assets/script0.js"]
        );
    }

    #[test]
    fn test_zip_round_trip_and_determinism() {
        let config = CaptureConfig::default();
        let resources = vec![fetched("assets/image0.png", Some(b"png-bytes"))];
        let at = Utc.timestamp_millis_opt(42).unwrap();
        let builder = ArchiveBuilder::new(&config);

        let first = builder.build("<html></html>", &resources, at).unwrap();
        let second = builder.build("<html></html>", &resources, at).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.entries, 2);

        let mut zip = zip::ZipArchive::new(Cursor::new(first.bytes)).unwrap();
        assert_eq!(zip.len(), 2);
        let mut image = String::new();
        zip.by_name("assets/image0.png")
            .unwrap()
            .read_to_string(&mut image)
            .unwrap();
        assert_eq!(image, "png-bytes");
    }
}
