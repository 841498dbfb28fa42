pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::LocalStorage;
pub use config::PatchConfig;
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use self::core::{engine::PatchEngine, pipeline::FilePatchPipeline};
pub use domain::model::{PatchReport, PatchSet, Replacement};
pub use utils::error::{PatchError, Result};
