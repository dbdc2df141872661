use crate::error::{Result, SweepError};
use std::path::Path;

/// Counts the observations (cell barcodes) in a filtered 10x HDF5 matrix.
///
/// CellRanger v3 stores barcodes under `matrix/barcodes`; the legacy v2
/// layout nests them under a per-genome group. Only the dataset extent is
/// read, never the barcode strings themselves.
pub fn count_cells<P: AsRef<Path>>(path: P) -> Result<usize> {
    let path = path.as_ref();
    let file = hdf5::File::open(path)?;

    if let Ok(ds) = file.dataset("matrix/barcodes") {
        return Ok(ds.size());
    }

    // Legacy layout: one top-level group per reference genome.
    for name in file.member_names()? {
        if let Ok(ds) = file.dataset(&format!("{}/barcodes", name)) {
            return Ok(ds.size());
        }
    }

    Err(SweepError::Matrix {
        path: path.to_path_buf(),
        reason: "no barcodes dataset found".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_barcodes(file: &hdf5::File, group: &str, n: usize) {
        let g = file.create_group(group).unwrap();
        let barcodes: Vec<i64> = (0..n as i64).collect();
        g.new_dataset_builder()
            .with_data(barcodes.as_slice())
            .create("barcodes")
            .unwrap();
    }

    #[test]
    fn counts_v3_barcodes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("filtered.h5");
        let file = hdf5::File::create(&path).unwrap();
        write_barcodes(&file, "matrix", 137);
        drop(file);

        assert_eq!(count_cells(&path).unwrap(), 137);
    }

    #[test]
    fn counts_legacy_genome_group() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("filtered.h5");
        let file = hdf5::File::create(&path).unwrap();
        write_barcodes(&file, "GRCh38", 3);
        drop(file);

        assert_eq!(count_cells(&path).unwrap(), 3);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(count_cells("/nonexistent/filtered.h5").is_err());
    }

    #[test]
    fn file_without_barcodes_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.h5");
        let file = hdf5::File::create(&path).unwrap();
        file.create_group("unrelated").unwrap();
        drop(file);

        let err = count_cells(&path).unwrap_err();
        assert!(matches!(err, SweepError::Matrix { .. }));
    }
}
