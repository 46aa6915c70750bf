use crate::error::BundleError;
use crate::loader::load_bundle;
use core_types::DataBundle;
use std::path::Path;
use std::sync::OnceLock;

/// A read-once holder for the data bundle.
///
/// The first successful `get_or_load` stores the bundle; every later call returns the
/// same instance and ignores `path`. A failed load leaves the cache empty.
#[derive(Debug, Default)]
pub struct BundleCache {
    cell: OnceLock<DataBundle>,
}

impl BundleCache {
    pub const fn new() -> Self {
        Self { cell: OnceLock::new() }
    }

    pub fn get(&self) -> Option<&DataBundle> {
        self.cell.get()
    }

    pub fn get_or_load(&self, path: &Path) -> Result<&DataBundle, BundleError> {
        if let Some(bundle) = self.cell.get() {
            return Ok(bundle);
        }
        let bundle = load_bundle(path)?;
        // A concurrent initialiser may have won; either value is the same artifact.
        Ok(self.cell.get_or_init(|| bundle))
    }
}

static GLOBAL: BundleCache = BundleCache::new();

/// The process-wide cache. Lives as long as the process.
pub fn global() -> &'static BundleCache {
    &GLOBAL
}
