//! BytePlus provider patch set
//!
//! Teaches the AutoMV checkout to talk to BytePlus ModelArk (international) as well
//! as Volcengine Ark (mainland China). The provider is picked at runtime from
//! `ARK_PROVIDER` in the application's `.env`.

use super::patcher::{FilePatch, PatchEdit, PatchSet};

const SDK_MARKER: &str = "byteplussdkarkruntime";

const VOLC_IMPORT: &str = "from volcenginesdkarkruntime import Ark";
const DUAL_IMPORT: &str = "try:
    from byteplussdkarkruntime import Ark
except ImportError:
    from volcenginesdkarkruntime import Ark";

const CONFIG_ANCHOR: &str = r#"    music_name = "1""#;
const CONFIG_PROVIDER_BLOCK: &str = r#"    music_name = "1"

    # BytePlus (international) vs Volcengine (China) configuration
    ARK_PROVIDER = os.getenv('ARK_PROVIDER', 'byteplus')

    @classmethod
    def get_ark_base_url(cls):
        if cls.ARK_PROVIDER == 'byteplus':
            return "https://ark.ap-southeast.bytepluses.com/api/v3"
        return "https://ark.cn-beijing.volces.com/api/v3"

    @classmethod
    def get_model_name(cls, model_short):
        if cls.ARK_PROVIDER == 'byteplus':
            return model_short
        return f"doubao-{model_short}"

    MODEL_SEEDREAM = os.getenv('MODEL_SEEDREAM', 'seedream-4-0-250828')
    MODEL_SEEDANCE = os.getenv('MODEL_SEEDANCE', 'seedance-1-0-pro-250528')
    MODEL_SEED_LLM = os.getenv('MODEL_SEED_LLM', 'seed-1.6-250615')
"#;

const CONFIG_KEY_CHECK_OLD: &str = r#"        if not cls.DOUBAO_API_KEY:
            raise ValueError("OPENAI_API_KEY not found in .env")"#;
const CONFIG_KEY_CHECK_NEW: &str = r#"        if not cls.DOUBAO_API_KEY:
            raise ValueError("DOUBAO_API_KEY not found in .env")"#;

const SEED_LLM_MODEL_OLD: &str = r#"model="doubao-seed-1.6-250615","#;
const SEED_LLM_MODEL_NEW: &str = "model=Config.get_model_name(Config.MODEL_SEED_LLM),";

const LIP_SYNC_KEYS: &str = r"    visual_service\.set_ak\('[^']+'\)\n    visual_service\.set_sk\('[^']+'\)";
const LIP_SYNC_CONFIG_KEYS: &str = "    # Note: Jimeng lip-sync requires Volcengine (China) credentials.
    # This feature is NOT available via BytePlus (international).
    visual_service.set_ak(config.HUOSHAN_ACCESS_KEY)
    visual_service.set_sk(config.HUOSHAN_SECRET_KEY)";

/// The built-in patch set applied after cloning
pub fn byteplus_patch_set() -> PatchSet {
    PatchSet {
        name: "byteplus".to_string(),
        files: vec![
            FilePatch::new("config.py", "ARK_PROVIDER")
                .edit(PatchEdit::literal(CONFIG_ANCHOR, CONFIG_PROVIDER_BLOCK))
                .edit(PatchEdit::literal(CONFIG_KEY_CHECK_OLD, CONFIG_KEY_CHECK_NEW)),
            FilePatch::new("picture_generate/picture.py", SDK_MARKER)
                .edit(PatchEdit::literal(VOLC_IMPORT, DUAL_IMPORT))
                .edit(PatchEdit::literal(
                    "client_doubao = Ark(\n    api_key=Config.DOUBAO_API_KEY\n)",
                    "client_doubao = Ark(\n    api_key=Config.DOUBAO_API_KEY,\n    base_url=Config.get_ark_base_url(),\n)",
                ))
                .edit(PatchEdit::literal(
                    r#"model="doubao-seedream-4-0-250828","#,
                    "model=Config.get_model_name(Config.MODEL_SEEDREAM),",
                ))
                .edit(PatchEdit::literal(SEED_LLM_MODEL_OLD, SEED_LLM_MODEL_NEW)),
            FilePatch::new("video_generate/video_generate_pipeline.py", SDK_MARKER)
                .edit(PatchEdit::literal(VOLC_IMPORT, DUAL_IMPORT))
                .edit(PatchEdit::literal(
                    "def __init__(self, api_key: str, base_url: str = \"https://ark.cn-beijing.volces.com/api/v3\"):\n        self.client = Ark(base_url=base_url, api_key=api_key)",
                    "def __init__(self, api_key: str, base_url: str = None):\n        if base_url is None:\n            base_url = Config.get_ark_base_url()\n        self.client = Ark(base_url=base_url, api_key=api_key)",
                ))
                .edit(PatchEdit::literal(
                    r#"    model = "doubao-seedance-1-0-pro-250528""#,
                    "    model = config.get_model_name(config.MODEL_SEEDANCE)",
                )),
            FilePatch::new("video_generate/call_gemini.py", "get_ark_base_url")
                .edit(PatchEdit::literal(
                    r#"base_url="https://ark.cn-beijing.volces.com/api/v3""#,
                    "base_url=Config.get_ark_base_url()",
                ))
                .edit(PatchEdit::literal(SEED_LLM_MODEL_OLD, SEED_LLM_MODEL_NEW)),
            FilePatch::new(
                "generate_lip_video/gen_lip_sycn_video_jimeng.py",
                "config.HUOSHAN_ACCESS_KEY",
            )
            .edit(PatchEdit::pattern(LIP_SYNC_KEYS, LIP_SYNC_CONFIG_KEYS)),
        ],
    }
}
