use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::{SeedError, SeedResult};

/// Create `path` for writing, making missing parent directories first.
///
/// An existing file is truncated.
pub fn create_output(path: &Path) -> SeedResult<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| SeedError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    File::create(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// CSV writer that emits `header` immediately, so an empty table still has one line.
///
/// Rows must then be written with `serialize` on the returned writer.
pub fn table_writer<W: Write>(inner: W, header: &[&str]) -> SeedResult<csv::Writer<W>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(inner);
    writer.write_record(header)?;
    Ok(writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_output_makes_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db").join("csv").join("out.csv");

        create_output(&path).expect("Failed to create output");
        assert!(path.exists());
    }

    #[test]
    fn test_create_output_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "old content\n").unwrap();

        drop(create_output(&path).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_create_output_under_a_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let result = create_output(&blocker.join("out.csv"));
        assert!(matches!(result, Err(SeedError::Io { .. })));
    }

    #[test]
    fn test_header_written_without_rows() {
        let writer = table_writer(vec![], &["user_id", "friend_id"]).unwrap();
        let bytes = writer.into_inner().unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "user_id,friend_id\n");
    }
}
