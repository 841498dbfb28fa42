pub mod engine;
pub mod pipeline;
pub mod plusvalia;
pub mod replace;

pub use crate::domain::model::{PatchReport, PatchResult, PatchSet, Replacement, ReplacementOutcome};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
