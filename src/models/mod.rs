//! Catalog of the Gemini models the pipeline stages target.

mod builtin;
mod family;
mod registry;
mod spec;

pub use builtin::{
    GEMINI_2_0_FLASH, GEMINI_2_5_FLASH_PREVIEW_04_17, GEMINI_2_5_PRO_EXP_03_25,
    GEMINI_2_5_PRO_PREVIEW_03_25, GEMINI_2_5_PRO_PREVIEW_05_06,
};
pub use family::ModelFamily;
pub use registry::{ModelRegistry, registry};
pub use spec::{Capabilities, ModelId, ModelSpec, ModelVersion, ReleaseChannel};

