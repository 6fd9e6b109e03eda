//! Puzzle inputs stored on disk

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// File-based store of puzzle inputs
///
/// Directory structure: `{base_dir}/{year}/day{day:02}.txt`
pub struct InputStore {
    base_dir: PathBuf,
}

impl InputStore {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the input path for a specific year/day
    pub fn path(&self, year: u16, day: u8) -> PathBuf {
        self.base_dir
            .join(year.to_string())
            .join(format!("day{:02}.txt", day))
    }

    /// Check if the input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.path(year, day).is_file()
    }

    /// Read the whole input file as text
    pub fn read(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.path(year, day);
        log::debug!("reading {}", path.display());
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => InputError::NotFound(path),
            _ => InputError::Io { path, source },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_path_format() {
        let store = InputStore::new(PathBuf::from("inputs"));
        assert_eq!(store.path(2020, 1), PathBuf::from("inputs/2020/day01.txt"));
        assert_eq!(store.path(2020, 25), PathBuf::from("inputs/2020/day25.txt"));
    }

    #[test]
    fn test_missing_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(!store.contains(2020, 1));
        match store.read(2020, 1) {
            Err(InputError::NotFound(path)) => assert_eq!(path, store.path(2020, 1)),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_read_keeps_content_verbatim() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        fs::create_dir_all(temp.path().join("2020")).unwrap();

        let input = "1721\r\n979\r\n\r\n366\n";
        fs::write(store.path(2020, 1), input).unwrap();

        assert!(store.contains(2020, 1));
        assert_eq!(store.read(2020, 1).unwrap(), input);
    }

    #[test]
    fn test_directory_is_not_an_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        fs::create_dir_all(store.path(2020, 2)).unwrap();

        assert!(!store.contains(2020, 2));
        assert!(matches!(store.read(2020, 2), Err(InputError::Io { .. })));
    }
}
