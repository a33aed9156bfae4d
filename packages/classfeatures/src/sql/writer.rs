//! SQL writer for class feature records.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::annotate::escape_quotes;
use crate::config::{DATABASE_NAME, RESERVED_COLUMNS, TABLE_NAME};
use crate::error::{ConverterError, Result};
use crate::types::FeatureRecord;

/// Statement selecting the target database.
pub fn use_statement() -> String {
    format!("USE {DATABASE_NAME};")
}

/// Render one insert statement.
///
/// `class_id` is interpolated verbatim. The record text is already escaped
/// by the finalizer; the name is escaped here.
///
/// # Examples
/// ```
/// use classfeatures::sql::insert_statement;
/// use classfeatures::FeatureRecord;
///
/// let record = FeatureRecord::new("Rage", "<p>Angry.</p>");
/// assert_eq!(
///     insert_statement("7", &record),
///     r#"INSERT INTO class_features VALUES (7, NULL, NULL, NULL, "Rage", "<p>Angry.</p>");"#
/// );
/// ```
pub fn insert_statement(class_id: &str, record: &FeatureRecord) -> String {
    let reserved = vec!["NULL"; RESERVED_COLUMNS].join(", ");
    format!(
        r#"INSERT INTO {TABLE_NAME} VALUES ({class_id}, {reserved}, "{}", "{}");"#,
        escape_quotes(&record.name),
        record.text
    )
}

/// Render a complete SQL script: the `USE` line, then one insert per record.
pub fn render_sql(class_id: &str, records: &[FeatureRecord]) -> String {
    let mut sql = use_statement();
    sql.push('\n');
    for record in records {
        sql.push_str(&insert_statement(class_id, record));
        sql.push('\n');
    }
    sql
}

/// Print insert statements for a dry run, each followed by a blank line.
///
/// No `USE` line is printed.
pub fn print_sql<W: Write>(out: &mut W, class_id: &str, records: &[FeatureRecord]) -> Result<()> {
    for record in records {
        writeln!(out, "{}\n", insert_statement(class_id, record))?;
    }
    out.flush()?;
    Ok(())
}

/// Write the SQL script to a file.
///
/// The script is written to a temporary file next to the target, synced,
/// then renamed over the target.
pub fn write_sql(path: &Path, class_id: &str, records: &[FeatureRecord]) -> Result<()> {
    let write_error = |source| ConverterError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output.sql".to_string());
    let temp_file = path.with_file_name(format!(".{file_name}.tmp"));

    {
        let file = File::create(&temp_file).map_err(write_error)?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(render_sql(class_id, records).as_bytes())
            .map_err(write_error)?;
        let file = writer.into_inner().map_err(|e| write_error(e.into_error()))?;
        file.sync_all().map_err(write_error)?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path).map_err(write_error)?;
    }

    fs::rename(&temp_file, path).map_err(write_error)?;
    tracing::info!(path = %path.display(), records = records.len(), "Wrote SQL file");
    Ok(())
}
