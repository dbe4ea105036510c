use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use covergen::{
    bedrock::ImageGenerator,
    config::{CoverConfig, WorkflowConfig},
    error::{CoverError, Result},
    facade::{handle_invoke, handle_status, WorkflowEngine},
    models::{
        unwrap_stage_event, BackgroundHandoff, ExecutionStatus, ImageGenerationRequest,
        ImageGenerationResponse, StageEnvelope,
    },
    pipeline::{render_cover, request_background, CoverFont},
    storage::{LocalObjectStore, MemoryObjectStore, ObjectStore},
    title::{title_rng, TitleGenerator, WordPools},
};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use serde_json::{json, Value};
use std::io::Cursor;
use std::sync::Mutex;

const BUCKET: &str = "cover-test-bucket";

struct PlainBackground {
    prompts: Mutex<Vec<String>>,
}

impl PlainBackground {
    fn new() -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ImageGenerator for PlainBackground {
    async fn generate(&self, request: &ImageGenerationRequest) -> Result<ImageGenerationResponse> {
        self.prompts.lock().unwrap().push(request.prompt.clone());

        let image = RgbaImage::from_pixel(request.width, request.height, Rgba([30, 60, 90, 255]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(image)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();

        Ok(ImageGenerationResponse {
            image_data: STANDARD.encode(bytes),
            model: request.model_id.clone(),
        })
    }
}

fn config() -> CoverConfig {
    CoverConfig::new().with_bucket(BUCKET).with_title_seed(7)
}

#[tokio::test]
async fn seeded_run_produces_a_cover_at_the_output_url() {
    let config = config();
    let generator = PlainBackground::new();
    let store = MemoryObjectStore::new();
    let font = CoverFont::embedded().unwrap();

    let (title, author) = TitleGenerator::default()
        .generate(&mut title_rng(config.title_seed))
        .unwrap();
    let handoff = request_background(&title, &author, &config, &generator, &store)
        .await
        .unwrap();
    let result = render_cover(&handoff, &font, &store).await.unwrap();

    let slug = title.display_title().replace(' ', "+");
    assert_eq!(result.title, title.display_title());
    assert_eq!(result.author, author.to_string());
    assert_eq!(
        result.output_url,
        format!("https://{}.s3.amazonaws.com/covers/{}.png", BUCKET, slug)
    );

    let cover = store.object(BUCKET, &format!("covers/{}.png", slug)).unwrap();
    assert_eq!(cover.content_type, "image/png");
    let decoded = image::load_from_memory(&cover.body).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (config.image.width, config.image.height));
    assert!(store.object(BUCKET, &format!("backgrounds/{}.png", slug)).is_some());

    let prompts = generator.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains(&title.display_title()));
}

#[tokio::test]
async fn handoff_survives_the_workflow_envelope() {
    let config = config();
    let store = MemoryObjectStore::new();
    let font = CoverFont::embedded().unwrap();

    let no_singular: [&str; 0] = [];
    let pools = WordPools::new(&no_singular, &["Stars"], &["Ash", "Thorns"]).unwrap();
    let generator = TitleGenerator::new(pools, Default::default());
    let (title, author) = generator.generate(&mut title_rng(Some(1))).unwrap();
    assert!(title.display_title().starts_with("Stars of "));

    let handoff = request_background(&title, &author, &config, &PlainBackground::new(), &store)
        .await
        .unwrap();

    // The workflow passes stage output along as a JSON string body.
    let envelope = serde_json::to_value(StageEnvelope::ok(&handoff)).unwrap();
    let event = json!({
        "statusCode": envelope["statusCode"],
        "body": envelope["body"].to_string(),
    });
    let received: BackgroundHandoff = unwrap_stage_event(event).unwrap();
    assert_eq!(received, handoff);

    let result = render_cover(&received, &font, &store).await.unwrap();
    let output = serde_json::to_value(StageEnvelope::ok(result)).unwrap();
    assert_eq!(output["statusCode"], 200);
    assert_eq!(output["body"]["output"], json!(handoff.output_url));
}

#[tokio::test]
async fn legacy_handoff_without_structured_title_is_parsed() {
    let config = config();
    let store = MemoryObjectStore::new();
    let font = CoverFont::embedded().unwrap();
    let (title, author) = TitleGenerator::default()
        .generate(&mut title_rng(Some(3)))
        .unwrap();

    let mut handoff = request_background(&title, &author, &config, &PlainBackground::new(), &store)
        .await
        .unwrap();
    handoff.title_spec = None;

    let result = render_cover(&handoff, &font, &store).await.unwrap();
    assert_eq!(result.title, title.display_title());
}

#[tokio::test]
async fn missing_background_writes_no_cover() {
    let store = MemoryObjectStore::new();
    let font = CoverFont::embedded().unwrap();
    let handoff: BackgroundHandoff = serde_json::from_value(json!({
        "title": "An Empire of Fire and Ice",
        "author": "Ada L. Moss",
        "model_id": "amazon.titan-image-generator-v1",
        "bucket": BUCKET,
        "background_key": "backgrounds/An+Empire+of+Fire+and+Ice.png",
        "background_object": "s3://cover-test-bucket/backgrounds/An+Empire+of+Fire+and+Ice.png",
        "cover_key": "covers/An+Empire+of+Fire+and+Ice.png",
        "cover_object": "s3://cover-test-bucket/covers/An+Empire+of+Fire+and+Ice.png",
        "output_url": "https://cover-test-bucket.s3.amazonaws.com/covers/An+Empire+of+Fire+and+Ice.png"
    }))
    .unwrap();

    let err = render_cover(&handoff, &font, &store).await.unwrap_err();
    assert!(matches!(err, CoverError::StorageError(_)));
    assert!(store.is_empty());
}

#[tokio::test]
async fn local_directory_run_writes_files() {
    let root = std::env::temp_dir().join(format!("covergen-it-{}", uuid::Uuid::new_v4()));
    let config = config().with_local_dir(root.to_string_lossy());
    let store = LocalObjectStore::new(&root);
    let font = CoverFont::embedded().unwrap();

    let (title, author) = TitleGenerator::default()
        .generate(&mut title_rng(config.title_seed))
        .unwrap();
    let handoff = request_background(&title, &author, &config, &PlainBackground::new(), &store)
        .await
        .unwrap();
    render_cover(&handoff, &font, &store).await.unwrap();

    let cover = store.get_object(BUCKET, &handoff.cover_key).await.unwrap();
    assert!(image::load_from_memory(&cover).is_ok());
    assert!(root.join(BUCKET).join(&handoff.cover_key).is_file());

    std::fs::remove_dir_all(&root).unwrap();
}

/// Keeps started runs in memory and reports each one as finished with the
/// stored stage output.
struct InMemoryWorkflow {
    runs: Mutex<Vec<(String, String)>>,
    output: String,
}

#[async_trait]
impl WorkflowEngine for InMemoryWorkflow {
    async fn start_execution(&self, state_machine_arn: &str) -> Result<String> {
        let mut runs = self.runs.lock().unwrap();
        let arn = format!("{}:run-{}", state_machine_arn, runs.len());
        runs.push((arn.clone(), self.output.clone()));
        Ok(arn)
    }

    async fn describe_execution(&self, execution_arn: &str) -> Result<ExecutionStatus> {
        self.runs
            .lock()
            .unwrap()
            .iter()
            .find(|(arn, _)| arn == execution_arn)
            .map(|(_, output)| ExecutionStatus {
                status: "SUCCEEDED".into(),
                output: output.clone(),
            })
            .ok_or_else(|| CoverError::WorkflowError("ExecutionDoesNotExist".into()))
    }
}

#[tokio::test]
async fn browser_can_start_and_poll_a_run() {
    let output_url = "https://cover-test-bucket.s3.amazonaws.com/covers/Stars+of+Ash+and+Thorns.png";
    let engine = InMemoryWorkflow {
        runs: Mutex::new(Vec::new()),
        output: json!({"statusCode": 200, "body": {"title": "Stars of Ash and Thorns", "author": "Ada L. Moss", "output": output_url}})
            .to_string(),
    };
    let config = WorkflowConfig::default().with_state_machine("arn:aws:states:us-east-1:1:stateMachine:Covers");

    let started = handle_invoke(&json!({"httpMethod": "POST"}), &config, &engine).await;
    assert_eq!(started.status_code, 200);
    let started: Value = serde_json::from_str(&started.body).unwrap();
    let arn = started["executionArn"].as_str().unwrap().to_string();

    let polled = handle_status(json!({"body": json!({"arn": arn}).to_string()}), &engine).await;
    assert_eq!(polled.status_code, 200);
    let polled: Value = serde_json::from_str(&polled.body).unwrap();
    assert_eq!(polled["status"], "SUCCEEDED");

    let output: Value = serde_json::from_str(polled["output"].as_str().unwrap()).unwrap();
    assert_eq!(output["body"]["output"], output_url);

    let unknown = handle_status(json!({"arn": "arn:aws:states:x:nope"}), &engine).await;
    assert_eq!(unknown.status_code, 500);
}
