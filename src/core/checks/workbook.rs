use crate::utils::error::{HarnessError, Result};
use std::path::Path;
use umya_spreadsheet::{reader, writer};

/// Number of leading columns rewritten when a marked row is scrubbed.
const SCRUB_COLUMNS: u32 = 4;

/// Value written into scrubbed cells.
pub const SCRUB_VALUE: &str = "test";

fn workbook_err(e: impl std::fmt::Display) -> HarnessError {
    HarnessError::WorkbookError(e.to_string())
}

/// Scan every populated cell of the first sheet for `marker` and overwrite
/// the first four columns of each marked row with "test". The workbook is
/// written back only when something was replaced. Returns whether any row
/// was rewritten.
///
/// Running the scrub again is a no-op: scrubbed cells no longer carry the
/// marker, so the row invariant survives repeated passes.
pub fn scrub_marker_rows(path: &Path, marker: &str) -> Result<bool> {
    let mut book = reader::xlsx::read(path).map_err(workbook_err)?;
    let sheet = book
        .get_sheet_mut(&0)
        .ok_or_else(|| workbook_err("workbook has no sheets"))?;

    let (max_col, max_row) = sheet.get_highest_column_and_row();
    let mut replaced = false;
    for row in 1..=max_row {
        let marked = (1..=max_col).any(|col| sheet.get_value((col, row)).contains(marker));
        if marked {
            tracing::debug!("Scrubbing marked row {}", row);
            for col in 1..=SCRUB_COLUMNS {
                sheet.get_cell_mut((col, row)).set_value(SCRUB_VALUE);
            }
            replaced = true;
        }
    }

    if replaced {
        writer::xlsx::write(&book, path).map_err(workbook_err)?;
    }
    Ok(replaced)
}

/// True when at least one row of the first sheet has its first four columns
/// all equal to "test".
pub fn any_row_scrubbed(path: &Path) -> Result<bool> {
    let book = reader::xlsx::read(path).map_err(workbook_err)?;
    let sheet = book
        .get_sheet(&0)
        .ok_or_else(|| workbook_err("workbook has no sheets"))?;

    let (_, max_row) = sheet.get_highest_column_and_row();
    for row in 1..=max_row {
        if (1..=SCRUB_COLUMNS).all(|col| sheet.get_value((col, row)) == SCRUB_VALUE) {
            return Ok(true);
        }
    }
    Ok(false)
}
