//! Archive scenario: ZIP signature, OOXML manifest marker, and (with the
//! workbook capability) the marked-row scrub.

mod common;

use anyhow::Result;
use fetch_verify::core::checks::archive;
use fetch_verify::{DownloadHarness, HttpPage, ScenarioRunner};
use httpmock::prelude::*;
use std::io::{Cursor, Write};
use tempfile::TempDir;
use zip::write::{FileOptions, ZipWriter};

/// Minimal container that looks like an OOXML spreadsheet from the outside:
/// ZIP signature plus a manifest entry.
fn pseudo_xlsx() -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    zip.start_file::<_, ()>("[Content_Types].xml", FileOptions::default())
        .unwrap();
    zip.write_all(b"<Types/>").unwrap();
    zip.start_file::<_, ()>("xl/workbook.xml", FileOptions::default())
        .unwrap();
    zip.write_all(b"<workbook/>").unwrap();
    zip.finish().unwrap().into_inner()
}

#[tokio::test]
async fn saved_archive_has_signature_and_manifest_marker() -> Result<()> {
    let server = MockServer::start();
    common::mock_page(&server, &["excelParaValidar.xlsx"]);
    common::mock_file(
        &server,
        "excelParaValidar.xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        pseudo_xlsx(),
    );

    let temp = TempDir::new()?;
    let page = HttpPage::open(&server.url("/download")).await?;
    let harness = DownloadHarness::new(page, temp.path().join("download"));

    let file = harness.retrieve("excelParaValidar.xlsx").await?;
    assert_eq!(file.suggested_name, "excelParaValidar.xlsx");

    let bytes = file.bytes()?;
    assert_eq!(&bytes[..4], &archive::ZIP_SIGNATURE);
    assert!(archive::contains_ooxml_manifest(&bytes));
    assert!(archive::list_entries(&bytes)?.contains(&"[Content_Types].xml".to_string()));
    Ok(())
}

#[cfg(not(feature = "workbook"))]
mod without_workbook {
    use super::*;

    #[tokio::test]
    async fn archive_scenario_skips_workbook_checks() -> Result<()> {
        let server = MockServer::start();
        common::mock_page(&server, &["excelParaValidar.xlsx"]);
        common::mock_file(
            &server,
            "excelParaValidar.xlsx",
            "application/octet-stream",
            pseudo_xlsx(),
        );

        let temp = TempDir::new()?;
        let page = HttpPage::open(&server.url("/download")).await?;
        let runner =
            ScenarioRunner::new(DownloadHarness::new(page, temp.path().join("download")));

        let report = runner.run_archive_scenario("excelParaValidar.xlsx").await?;
        assert_eq!(report.skipped_checks().count(), 1);
        Ok(())
    }
}

#[cfg(feature = "workbook")]
mod with_workbook {
    use super::*;
    use fetch_verify::core::checks::workbook;

    /// Real workbook fixture with one row carrying the marker.
    pub fn marked_workbook() -> Vec<u8> {
        let temp = TempDir::new().unwrap();
        let mut book = umya_spreadsheet::new_file();
        let sheet = book.get_sheet_mut(&0).unwrap();
        sheet.get_cell_mut((1, 1)).set_value("id");
        sheet.get_cell_mut((2, 1)).set_value("descripcion");
        sheet.get_cell_mut((3, 1)).set_value("ciudad");
        sheet.get_cell_mut((4, 1)).set_value("estado");
        sheet.get_cell_mut((1, 2)).set_value("7");
        sheet.get_cell_mut((2, 2)).set_value("esta fila NO DEBE ESTAR");
        sheet.get_cell_mut((3, 2)).set_value("Sevilla");
        sheet.get_cell_mut((4, 2)).set_value("pendiente");

        let path = temp.path().join("excelParaValidar.xlsx");
        umya_spreadsheet::writer::xlsx::write(&book, &path).unwrap();
        std::fs::read(&path).unwrap()
    }

    #[tokio::test]
    async fn archive_scenario_scrubs_marked_rows() -> Result<()> {
        let server = MockServer::start();
        common::mock_page(&server, &["excelParaValidar.xlsx"]);
        common::mock_file(
            &server,
            "excelParaValidar.xlsx",
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            marked_workbook(),
        );

        let temp = TempDir::new()?;
        let page = HttpPage::open(&server.url("/download")).await?;
        let runner =
            ScenarioRunner::new(DownloadHarness::new(page, temp.path().join("download")));

        let report = runner.run_archive_scenario("excelParaValidar.xlsx").await?;
        assert_eq!(report.skipped_checks().count(), 0);

        // The saved workbook was rewritten in place.
        let saved = &report.file.local_path;
        assert!(workbook::any_row_scrubbed(saved)?);

        // Scrubbing again finds no marker: same invariant, no rewrite.
        assert!(!workbook::scrub_marker_rows(saved, "NO DEBE ESTAR")?);
        assert!(workbook::any_row_scrubbed(saved)?);
        Ok(())
    }
}

#[tokio::test]
async fn run_all_covers_the_three_fixture_links() -> Result<()> {
    let server = MockServer::start();
    common::mock_page(
        &server,
        &["excelParaValidar.xlsx", "file.json", "some-file.txt"],
    );
    #[cfg(feature = "workbook")]
    let archive_body = with_workbook::marked_workbook();
    #[cfg(not(feature = "workbook"))]
    let archive_body = pseudo_xlsx();
    common::mock_file(
        &server,
        "excelParaValidar.xlsx",
        "application/octet-stream",
        archive_body,
    );
    common::mock_file(
        &server,
        "file.json",
        "application/json",
        br#"[{"id": 1}]"#.to_vec(),
    );
    common::mock_file(
        &server,
        "some-file.txt",
        "text/plain",
        b"plain enough\n".to_vec(),
    );

    let temp = TempDir::new()?;
    let page = HttpPage::open(&server.url("/download")).await?;
    let runner = ScenarioRunner::new(DownloadHarness::new(page, temp.path().join("download")));

    let reports = runner.run_all().await?;
    assert_eq!(reports.len(), 3);
    let names: Vec<&str> = reports
        .iter()
        .map(|r| r.file.suggested_name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["excelParaValidar.xlsx", "file.json", "some-file.txt"]
    );
    for report in &reports {
        assert!(report.file.local_path.exists());
    }
    Ok(())
}
