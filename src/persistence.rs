// File: src/persistence.rs
use crate::core::types::ExclusionSet;
use crate::error::{DictError, DictResult};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

pub const DEFAULT_EXCLUDE_PATH: &str = "exclude_titles.txt";

/// Loads the exclusion file, one title per line.
///
/// Entries are taken as-is: the file is expected to come from
/// `exclude_titles`, which already writes simplified titles. A missing file
/// yields an empty set.
pub fn load_excluded_titles(path: &Path) -> DictResult<ExclusionSet> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(
                "No excluded titles file found at {}, continuing without exclusions",
                path.display()
            );
            return Ok(ExclusionSet::new());
        }
        Err(e) => return Err(DictError::io(path, e)),
    };

    let mut excluded = ExclusionSet::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| DictError::io(path, e))?;
        let title = line.trim();
        if !title.is_empty() {
            excluded.insert(title.to_string());
        }
    }

    info!("Loaded {} excluded titles from {}", excluded.len(), path.display());
    Ok(excluded)
}

/// Writes the set one title per line, in set iteration order.
///
/// The file is replaced atomically, so a failed write leaves any previous
/// version intact.
pub fn save_excluded_titles(excluded: &ExclusionSet, path: &Path) -> DictResult<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir).map_err(|e| DictError::io(parent_dir, e))?;

    let temp_file = NamedTempFile::new_in(parent_dir).map_err(|e| DictError::io(parent_dir, e))?;
    {
        let mut writer = BufWriter::new(&temp_file);
        for title in excluded {
            writeln!(writer, "{}", title).map_err(|e| DictError::io(temp_file.path(), e))?;
        }
        writer.flush().map_err(|e| DictError::io(temp_file.path(), e))?;
    }

    temp_file.persist(path).map_err(|e| DictError::io(path, e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_means_no_exclusions() {
        let dir = TempDir::new().unwrap();
        let excluded = load_excluded_titles(&dir.path().join("absent.txt")).unwrap();
        assert!(excluded.is_empty());
    }

    #[test]
    fn lines_are_trimmed_but_not_normalized() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("exclude.txt");
        fs::write(&path, "测试  \n\n測試\r\n").unwrap();

        let excluded = load_excluded_titles(&path).unwrap();
        assert_eq!(excluded.len(), 2);
        assert!(excluded.contains("测试"));
        // traditional entries stay traditional
        assert!(excluded.contains("測試"));
    }

    #[test]
    fn saved_file_loads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("exclude.txt");
        let excluded = ExclusionSet::from(["测试".to_string(), "错字".to_string()]);

        save_excluded_titles(&excluded, &path).unwrap();
        assert_eq!(load_excluded_titles(&path).unwrap(), excluded);
    }
}
