/// Stands in for spaces in object keys and URLs.
pub const SPACE_PLACEHOLDER: &str = "+";

pub const BACKGROUND_PREFIX: &str = "backgrounds";
pub const COVER_PREFIX: &str = "covers";

/// Where a title's background and cover live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverKeys {
    pub bucket: String,
    pub background_key: String,
    pub cover_key: String,
}

impl CoverKeys {
    pub fn for_title(bucket: &str, title: &str) -> Self {
        let slug = title.replace(' ', SPACE_PLACEHOLDER);
        Self {
            bucket: bucket.to_string(),
            background_key: format!("{}/{}.png", BACKGROUND_PREFIX, slug),
            cover_key: format!("{}/{}.png", COVER_PREFIX, slug),
        }
    }

    pub fn background_object(&self) -> String {
        s3_address(&self.bucket, &self.background_key)
    }

    pub fn cover_object(&self) -> String {
        s3_address(&self.bucket, &self.cover_key)
    }

    pub fn output_url(&self) -> String {
        public_url(&self.bucket, &self.cover_key)
    }
}

pub fn s3_address(bucket: &str, key: &str) -> String {
    format!("s3://{}/{}", bucket, key)
}

pub fn public_url(bucket: &str, key: &str) -> String {
    format!(
        "https://{}.s3.amazonaws.com/{}",
        bucket,
        key.replace(' ', SPACE_PLACEHOLDER)
    )
}
