use std::{fs::File, io::BufReader, path::Path};

use posematch::PoseSet;
use serde::Deserialize;

use crate::{records::MatrixRecord, IoError};

/// Accepted top-level layouts: a bare array, or an object wrapping it under `matrices`.
#[derive(Deserialize)]
#[serde(untagged)]
enum PoseSetDocument {
    Bare(Vec<MatrixRecord>),
    Wrapped { matrices: Vec<MatrixRecord> },
}

impl PoseSetDocument {
    fn into_records(self) -> Vec<MatrixRecord> {
        match self {
            Self::Bare(records) | Self::Wrapped { matrices: records } => records,
        }
    }
}

fn records_to_pose_set(records: Vec<MatrixRecord>) -> PoseSet {
    let non_rigid = records.iter().filter(|r| !r.is_rigid()).count();
    if non_rigid > 0 {
        log::warn!(
            "{} of {} matrices have a bottom row other than (0, 0, 0, 1), ignoring it",
            non_rigid,
            records.len()
        );
    }
    records.iter().map(MatrixRecord::to_pose).collect()
}

/// Parse a pose set from JSON text.
///
/// # Arguments
///
/// * `json` - A JSON array of matrix records, optionally wrapped as `{"matrices": [...]}`.
///
/// # Returns
///
/// The poses in file order.
pub fn parse_pose_set(json: &str) -> Result<PoseSet, IoError> {
    let document: PoseSetDocument = serde_json::from_str(json)?;
    Ok(records_to_pose_set(document.into_records()))
}

/// Read a pose set from a JSON file.
///
/// # Arguments
///
/// * `path` - The path to the JSON file.
///
/// # Returns
///
/// The poses in file order.
pub fn read_pose_set(path: impl AsRef<Path>) -> Result<PoseSet, IoError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(IoError::FileDoesNotExist(path.to_path_buf()));
    }

    let reader = BufReader::new(File::open(path)?);
    let document: PoseSetDocument = serde_json::from_reader(reader)?;
    let poses = records_to_pose_set(document.into_records());

    log::info!("Read {} poses from {}", poses.len(), path.display());
    Ok(poses)
}

/// Read a pose set, treating a missing file as an empty set.
///
/// A missing file is reported with an error diagnostic and yields an empty set; a file that
/// exists but cannot be parsed is still an error.
pub fn load_pose_set(path: impl AsRef<Path>) -> Result<PoseSet, IoError> {
    match read_pose_set(path) {
        Err(IoError::FileDoesNotExist(path)) => {
            log::error!("Pose file not found: {}", path.display());
            Ok(PoseSet::default())
        }
        other => other,
    }
}
