use crate::utils::error::Result;
use std::io::Cursor;

/// Leading bytes of a ZIP local file header.
pub const ZIP_SIGNATURE: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// Manifest entry every OOXML container carries.
pub const OOXML_MANIFEST: &str = "[Content_Types].xml";

pub fn has_zip_signature(bytes: &[u8]) -> bool {
    bytes.len() >= ZIP_SIGNATURE.len() && bytes[..ZIP_SIGNATURE.len()] == ZIP_SIGNATURE
}

/// Scan the raw bytes for the manifest name. Entry names are stored verbatim
/// in the ZIP headers, so this works without unpacking the container.
pub fn contains_ooxml_manifest(bytes: &[u8]) -> bool {
    contains_subsequence(bytes, OOXML_MANIFEST.as_bytes())
}

fn contains_subsequence(haystack: &[u8], needle: &[u8]) -> bool {
    !needle.is_empty()
        && haystack.len() >= needle.len()
        && haystack.windows(needle.len()).any(|window| window == needle)
}

/// Open the container and list its entry names. A corrupt archive surfaces
/// as a ZipError instead of a byte-level mismatch.
pub fn list_entries(bytes: &[u8]) -> Result<Vec<String>> {
    let mut container = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut names = Vec::with_capacity(container.len());
    for i in 0..container.len() {
        names.push(container.by_index(i)?.name().to_string());
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::{FileOptions, ZipWriter};

    fn sample_container() -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        zip.start_file::<_, ()>(OOXML_MANIFEST, FileOptions::default())
            .unwrap();
        zip.write_all(b"<Types/>").unwrap();
        zip.start_file::<_, ()>("xl/worksheets/sheet1.xml", FileOptions::default())
            .unwrap();
        zip.write_all(b"<worksheet/>").unwrap();
        zip.finish().unwrap().into_inner()
    }

    #[test]
    fn signature_matches_zip_output() {
        let bytes = sample_container();
        assert!(has_zip_signature(&bytes));
        assert_eq!(&bytes[..4], &[0x50, 0x4B, 0x03, 0x04]);
    }

    #[test]
    fn signature_rejects_short_or_foreign_content() {
        assert!(!has_zip_signature(b"PK"));
        assert!(!has_zip_signature(b"{\"not\": \"a zip\"}"));
        assert!(!has_zip_signature(&[]));
    }

    #[test]
    fn manifest_marker_found_in_raw_bytes() {
        assert!(contains_ooxml_manifest(&sample_container()));
        assert!(!contains_ooxml_manifest(b"plain text content"));
    }

    #[test]
    fn list_entries_names_every_member() {
        let names = list_entries(&sample_container()).unwrap();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&OOXML_MANIFEST.to_string()));
    }

    #[test]
    fn list_entries_rejects_corrupt_container() {
        assert!(list_entries(b"PK\x03\x04 but truncated").is_err());
    }
}
