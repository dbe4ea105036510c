pub mod keys;
pub mod local;
pub mod memory;
pub mod s3;
pub mod traits;

use crate::config::CoverConfig;
use std::sync::Arc;

pub use keys::CoverKeys;
pub use local::LocalObjectStore;
pub use memory::MemoryObjectStore;
pub use s3::S3ObjectStore;
pub use traits::ObjectStore;

/// S3 unless `COVER_LOCAL_DIR` points the run at a local directory.
pub fn object_store_for(config: &CoverConfig, sdk_config: &aws_config::SdkConfig) -> Arc<dyn ObjectStore> {
    match &config.local_dir {
        Some(dir) => {
            log::info!("📁 Storing objects under local directory {}", dir);
            Arc::new(LocalObjectStore::new(dir))
        }
        None => Arc::new(S3ObjectStore::from_sdk_config(sdk_config)),
    }
}
