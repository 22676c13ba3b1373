use super::family::ModelFamily;
use super::registry::ModelRegistry;
use super::spec::{Capabilities, ModelSpec, ModelVersion, ReleaseChannel};

pub const GEMINI_2_0_FLASH: &str = "gemini-2.0-flash";
pub const GEMINI_2_5_FLASH_PREVIEW_04_17: &str = "gemini-2.5-flash-preview-04-17";
pub const GEMINI_2_5_PRO_EXP_03_25: &str = "gemini-2.5-pro-exp-03-25";
pub const GEMINI_2_5_PRO_PREVIEW_03_25: &str = "gemini-2.5-pro-preview-03-25";
pub const GEMINI_2_5_PRO_PREVIEW_05_06: &str = "gemini-2.5-pro-preview-05-06";

const CONTEXT_1M: u64 = 1_048_576;

pub fn register_all(registry: &mut ModelRegistry) {
    registry.register(flash_2_0());
    registry.register(flash_2_5_preview_04_17());
    registry.register(pro_2_5_preview_05_06());
    registry.register(pro_2_5_preview_03_25());
    registry.register(pro_2_5_exp_03_25());
}

fn flash_2_0() -> ModelSpec {
    ModelSpec {
        id: GEMINI_2_0_FLASH.into(),
        family: ModelFamily::Flash,
        version: ModelVersion {
            version: "2.0".into(),
            channel: ReleaseChannel::Stable,
            snapshot: None,
        },
        capabilities: Capabilities {
            context_window: CONTEXT_1M,
            max_output_tokens: 8_192,
            thinking: false,
            video_input: true,
            structured_output: true,
        },
    }
}

fn flash_2_5_preview_04_17() -> ModelSpec {
    ModelSpec {
        id: GEMINI_2_5_FLASH_PREVIEW_04_17.into(),
        family: ModelFamily::Flash,
        version: ModelVersion {
            version: "2.5".into(),
            channel: ReleaseChannel::Preview,
            snapshot: Some("04-17".into()),
        },
        capabilities: Capabilities {
            context_window: CONTEXT_1M,
            max_output_tokens: 65_536,
            thinking: true,
            video_input: true,
            structured_output: true,
        },
    }
}

fn pro_2_5(id: &str, channel: ReleaseChannel, snapshot: &str) -> ModelSpec {
    ModelSpec {
        id: id.into(),
        family: ModelFamily::Pro,
        version: ModelVersion {
            version: "2.5".into(),
            channel,
            snapshot: Some(snapshot.into()),
        },
        capabilities: Capabilities {
            context_window: CONTEXT_1M,
            max_output_tokens: 65_536,
            thinking: true,
            video_input: true,
            structured_output: true,
        },
    }
}

fn pro_2_5_preview_05_06() -> ModelSpec {
    pro_2_5(GEMINI_2_5_PRO_PREVIEW_05_06, ReleaseChannel::Preview, "05-06")
}

fn pro_2_5_preview_03_25() -> ModelSpec {
    pro_2_5(GEMINI_2_5_PRO_PREVIEW_03_25, ReleaseChannel::Preview, "03-25")
}

fn pro_2_5_exp_03_25() -> ModelSpec {
    pro_2_5(GEMINI_2_5_PRO_EXP_03_25, ReleaseChannel::Experimental, "03-25")
}
