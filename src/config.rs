use std::env;

pub const DEFAULT_BUCKET: &str = "a-box-of-mac-and-cheese-images";
pub const DEFAULT_IMAGE_MODEL: &str = "amazon.titan-image-generator-v1";

#[derive(Debug, Clone)]
pub struct AwsConfig {
    pub region: Option<String>,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageSettings {
    pub width: u32,
    pub height: u32,
    pub num_images: u32,
    pub quality: String,
    pub cfg_scale: f32,
    pub steps: u32,
    pub seed: u64,
}

#[derive(Debug, Clone)]
pub struct CoverConfig {
    pub bucket: String,
    pub model_id: String,
    pub image: ImageSettings,
    pub title_seed: Option<u64>,
    pub font_path: Option<String>,
    pub local_dir: Option<String>,
    pub aws: AwsConfig,
}

#[derive(Debug, Clone, Default)]
pub struct WorkflowConfig {
    pub state_machine_arn: Option<String>,
}

impl Default for AwsConfig {
    fn default() -> Self {
        AwsConfig {
            region: None,
            access_key: None,
            secret_key: None,
        }
    }
}

impl AwsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit credentials are only picked up when both halves are present;
    /// otherwise the SDK default provider chain applies.
    pub fn from_env() -> Self {
        let region = env::var("AWS_REGION")
            .or_else(|_| env::var("AWS_DEFAULT_REGION"))
            .ok();
        let access_key = env::var("AWS_ACCESS_KEY_ID").ok();
        let secret_key = env::var("AWS_SECRET_ACCESS_KEY").ok();

        AwsConfig {
            region,
            access_key,
            secret_key,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_credentials(
        mut self,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        self.access_key = Some(access_key.into());
        self.secret_key = Some(secret_key.into());
        self
    }
}

impl Default for ImageSettings {
    fn default() -> Self {
        ImageSettings {
            width: 384,
            height: 640,
            num_images: 1,
            quality: "standard".to_string(),
            cfg_scale: 8.0,
            steps: 50,
            seed: 0,
        }
    }
}

impl ImageSettings {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        ImageSettings {
            width: parse_var("IMAGE_WIDTH").unwrap_or(defaults.width),
            height: parse_var("IMAGE_HEIGHT").unwrap_or(defaults.height),
            num_images: defaults.num_images,
            quality: env::var("IMAGE_QUALITY").unwrap_or(defaults.quality),
            cfg_scale: parse_var("IMAGE_CFG_SCALE").unwrap_or(defaults.cfg_scale),
            steps: parse_var("IMAGE_STEPS").unwrap_or(defaults.steps),
            seed: parse_var("IMAGE_SEED").unwrap_or(defaults.seed),
        }
    }
}

impl Default for CoverConfig {
    fn default() -> Self {
        CoverConfig {
            bucket: DEFAULT_BUCKET.to_string(),
            model_id: DEFAULT_IMAGE_MODEL.to_string(),
            image: ImageSettings::default(),
            title_seed: None,
            font_path: None,
            local_dir: None,
            aws: AwsConfig::default(),
        }
    }
}

impl CoverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let bucket = env::var("COVER_BUCKET").unwrap_or_else(|_| DEFAULT_BUCKET.to_string());
        let model_id =
            env::var("IMAGE_MODEL_ID").unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.to_string());

        CoverConfig {
            bucket,
            model_id,
            image: ImageSettings::from_env(),
            title_seed: parse_var("TITLE_SEED"),
            font_path: non_empty_var("COVER_FONT_PATH"),
            local_dir: non_empty_var("COVER_LOCAL_DIR"),
            aws: AwsConfig::from_env(),
        }
    }

    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn with_image_settings(mut self, image: ImageSettings) -> Self {
        self.image = image;
        self
    }

    pub fn with_title_seed(mut self, seed: u64) -> Self {
        self.title_seed = Some(seed);
        self
    }

    pub fn with_font_path(mut self, path: impl Into<String>) -> Self {
        self.font_path = Some(path.into());
        self
    }

    pub fn with_local_dir(mut self, dir: impl Into<String>) -> Self {
        self.local_dir = Some(dir.into());
        self
    }

    pub fn with_aws(mut self, aws: AwsConfig) -> Self {
        self.aws = aws;
        self
    }
}

impl WorkflowConfig {
    pub fn from_env() -> Self {
        WorkflowConfig {
            state_machine_arn: non_empty_var("STATE_MACHINE_ARN"),
        }
    }

    pub fn with_state_machine(mut self, arn: impl Into<String>) -> Self {
        self.state_machine_arn = Some(arn.into());
        self
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|value| value.trim().parse().ok())
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
