use crate::error::BundleError;
use core_types::DataBundle;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::Path;

/// On-disk encodings of the bundle, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundleFormat {
    Json,
    Bincode,
}

impl BundleFormat {
    pub fn from_path(path: &Path) -> Result<Self, BundleError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some("json") => Ok(BundleFormat::Json),
            Some("bin") | Some("bincode") => Ok(BundleFormat::Bincode),
            _ => Err(BundleError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Reads the data bundle at `path` and checks its structural invariants.
///
/// A missing file, an undecodable file and a malformed bundle are all errors; the
/// caller is expected to stop rendering when this fails.
pub fn load_bundle(path: &Path) -> Result<DataBundle, BundleError> {
    let format = BundleFormat::from_path(path)?;

    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => BundleError::NotFound(path.to_path_buf()),
        _ => BundleError::Io(e),
    })?;
    let reader = BufReader::new(file);

    let bundle: DataBundle = match format {
        BundleFormat::Json => serde_json::from_reader(reader)?,
        BundleFormat::Bincode => bincode::deserialize_from(reader)?,
    };
    bundle.validate()?;

    tracing::info!(
        path = %path.display(),
        rows = bundle.master_data.len(),
        symbols = bundle.metrics.len(),
        months = bundle.monthly_performance.len(),
        "Data bundle loaded."
    );

    Ok(bundle)
}

/// Writes `bundle` to `path` in the format implied by its extension.
pub fn save_bundle(bundle: &DataBundle, path: &Path) -> Result<(), BundleError> {
    let format = BundleFormat::from_path(path)?;
    let writer = BufWriter::new(File::create(path)?);
    match format {
        BundleFormat::Json => serde_json::to_writer(writer, bundle)?,
        BundleFormat::Bincode => bincode::serialize_into(writer, bundle)?,
    }
    Ok(())
}
