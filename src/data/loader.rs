//! CSV Data Loader Module
//! Loads tyre sales CSV files into Polars and classifies open failures.

use polars::prelude::*;
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("The file at {0} was not found.")]
    NotFound(PathBuf),
    #[error("Permission denied for file at {0}.")]
    PermissionDenied(PathBuf),
    #[error("An unexpected error occurred: {0}")]
    Io(std::io::Error),
    #[error("An unexpected error occurred: {0}")]
    Csv(#[from] PolarsError),
}

impl LoaderError {
    /// Classify an IO failure from opening the file.
    fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            ErrorKind::NotFound => LoaderError::NotFound(path.to_path_buf()),
            ErrorKind::PermissionDenied => LoaderError::PermissionDenied(path.to_path_buf()),
            _ => LoaderError::Io(err),
        }
    }
}

/// Handles CSV file loading with Polars.
pub struct DataLoader {
    df: Option<DataFrame>,
    file_path: Option<PathBuf>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self {
            df: None,
            file_path: None,
        }
    }

    /// Load a CSV file using Polars.
    ///
    /// The file is opened first so that not-found and permission failures get
    /// their own error kinds; parse and encoding failures fall through to the
    /// catch-all `Csv` kind. On any failure no partial table is kept.
    pub fn load_csv(&mut self, path: &Path) -> Result<&DataFrame, LoaderError> {
        File::open(path).map_err(|e| LoaderError::from_io(path, e))?;

        let path_str = path.to_string_lossy();
        let df = LazyCsvReader::new(path_str.as_ref())
            .with_infer_schema_length(Some(10000))
            .finish()?
            .collect()?;

        info!(rows = df.height(), cols = df.width(), path = %path.display(), "CSV loaded");

        self.file_path = Some(path.to_path_buf());
        Ok(self.df.insert(df))
    }

    /// Get list of column names from the loaded DataFrame.
    pub fn get_columns(&self) -> Vec<String> {
        self.df
            .as_ref()
            .map(|df| {
                df.get_column_names()
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Get the number of rows in the DataFrame.
    pub fn get_row_count(&self) -> usize {
        self.df.as_ref().map(|df| df.height()).unwrap_or(0)
    }

    /// Get a reference to the loaded DataFrame.
    pub fn get_dataframe(&self) -> Option<&DataFrame> {
        self.df.as_ref()
    }

    /// Get file path.
    pub fn get_file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn nonexistent_path_is_classified_not_found() {
        let mut loader = DataLoader::new();
        let err = loader
            .load_csv(Path::new("/no/such/dir/tyre_sales.csv"))
            .unwrap_err();
        assert!(matches!(err, LoaderError::NotFound(_)));
        assert!(loader.get_dataframe().is_none());
        assert_eq!(loader.get_row_count(), 0);
    }

    #[test]
    fn io_classification_maps_error_kinds() {
        let path = Path::new("sales.csv");
        let nf = LoaderError::from_io(path, std::io::Error::from(ErrorKind::NotFound));
        assert!(matches!(nf, LoaderError::NotFound(_)));

        let pd = LoaderError::from_io(path, std::io::Error::from(ErrorKind::PermissionDenied));
        assert!(matches!(pd, LoaderError::PermissionDenied(_)));
        assert_eq!(pd.to_string(), "Permission denied for file at sales.csv.");

        let other = LoaderError::from_io(path, std::io::Error::from(ErrorKind::Interrupted));
        assert!(matches!(other, LoaderError::Io(_)));
    }

    #[test]
    fn loads_a_valid_csv_with_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tyres.csv");
        let mut f = File::create(&path).unwrap();
        writeln!(f, "Sales,Price,season,Vehicle Type,Company").unwrap();
        writeln!(f, "10,5.5,Summer,SUV,Acme").unwrap();
        writeln!(f, "12,6.0,Winter,Sedan,Bolt").unwrap();
        drop(f);

        let mut loader = DataLoader::new();
        let df = loader.load_csv(&path).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(loader.get_columns().len(), 5);
        assert_eq!(loader.get_file_path(), Some(&path));
    }

    #[test]
    fn failed_load_leaves_loader_unset() {
        let mut loader = DataLoader::new();
        let _ = loader.load_csv(Path::new("/definitely/missing.csv"));
        assert!(loader.get_dataframe().is_none());
        assert!(loader.get_file_path().is_none());
    }
}
