use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use posematch::{Offset, Pose};

use crate::{records::OffsetRecord, IoError};

/// Write offsets to a JSON file as an array of row-major `e00..e33` records.
///
/// Translation-only offsets are written as transforms with an identity rotation block.
///
/// # Arguments
///
/// * `offsets` - The accepted offsets.
/// * `path` - The path to the output file.
///
/// # Returns
///
/// The number of records written. An empty `offsets` is reported and nothing is written.
pub fn write_offsets_json<O: Offset>(
    offsets: &[O],
    path: impl AsRef<Path>,
) -> Result<usize, IoError> {
    let path = path.as_ref();
    if offsets.is_empty() {
        log::warn!("No offsets to export, {} not written", path.display());
        return Ok(0);
    }

    let records = offsets
        .iter()
        .map(|o| OffsetRecord::from_pose(&o.to_pose()))
        .collect::<Vec<_>>();

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &records)?;
    writer.flush()?;

    log::info!("Exported {} offsets to {}", records.len(), path.display());
    Ok(records.len())
}

/// Read offsets previously written by [`write_offsets_json`].
pub fn read_offsets_json(path: impl AsRef<Path>) -> Result<Vec<Pose>, IoError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(IoError::FileDoesNotExist(path.to_path_buf()));
    }

    let reader = BufReader::new(File::open(path)?);
    let records: Vec<OffsetRecord> = serde_json::from_reader(reader)?;
    Ok(records.iter().map(OffsetRecord::to_pose).collect())
}
