use crate::{
    error::{CoverError, Result},
    logger,
    models::{BackgroundHandoff, CoverResult, TitleClauses},
    pipeline::{background::content_type_of, font::CoverFont},
    storage::ObjectStore,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use rusttype::PositionedGlyph;
use serde_json::Value;
use std::io::Cursor;

pub const CLAUSE_FONT_SIZE: f32 = 56.0;
pub const JOINER_FONT_SIZE: f32 = 40.0;

/// One centered line of cover text, `offset` pixels below the image center.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine<'a> {
    pub text: &'a str,
    pub size: f32,
    pub offset: i32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub fill: Rgba<u8>,
    pub stroke: Rgba<u8>,
    pub stroke_width: u32,
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            fill: Rgba([255, 255, 255, 255]),
            stroke: Rgba([0, 0, 0, 255]),
            stroke_width: 2,
        }
    }
}

pub fn layout_lines(clauses: &TitleClauses) -> [TextLine<'_>; 5] {
    [
        TextLine { text: &clauses.noun, size: CLAUSE_FONT_SIZE, offset: 50 },
        TextLine { text: "of", size: JOINER_FONT_SIZE, offset: 100 },
        TextLine { text: &clauses.element1, size: CLAUSE_FONT_SIZE, offset: 132 },
        TextLine { text: "and", size: JOINER_FONT_SIZE, offset: 182 },
        TextLine { text: &clauses.element2, size: CLAUSE_FONT_SIZE, offset: 214 },
    ]
}

/// Decodes a stored background. Besides plain image bytes this accepts a raw
/// model response (`images[0]` or `artifacts[0].base64`).
pub fn decode_background(bytes: &[u8]) -> Result<(DynamicImage, ImageFormat)> {
    if let Ok(format) = image::guess_format(bytes) {
        let image = image::load_from_memory_with_format(bytes, format)?;
        return Ok((image, format));
    }

    let response: Value = serde_json::from_slice(bytes)
        .map_err(|_| CoverError::ImageError("background is neither an image nor a model response".into()))?;
    let encoded = response
        .pointer("/images/0")
        .or_else(|| response.pointer("/artifacts/0/base64"))
        .and_then(Value::as_str)
        .ok_or_else(|| CoverError::ImageError("model response holds no image".into()))?;
    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|e| CoverError::ImageError(format!("background image is not base64: {}", e)))?;

    let format = image::guess_format(&decoded)?;
    let image = image::load_from_memory_with_format(&decoded, format)?;
    Ok((image, format))
}

pub fn encode_image(image: DynamicImage, format: ImageFormat) -> Result<Vec<u8>> {
    let image = match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(image.to_rgb8()),
        _ => image,
    };
    let mut out = Vec::new();
    image.write_to(&mut Cursor::new(&mut out), format)?;
    Ok(out)
}

/// Draws the title over `background` and re-encodes it in the same format.
pub fn compose_cover(background: &[u8], clauses: &TitleClauses, font: &CoverFont) -> Result<Vec<u8>> {
    let (image, format) = decode_background(background)?;
    let mut canvas = image.to_rgba8();
    let style = TextStyle::default();

    for line in layout_lines(clauses) {
        draw_line(&mut canvas, font, &line, &style);
    }

    encode_image(DynamicImage::ImageRgba8(canvas), format)
}

pub fn draw_line(canvas: &mut RgbaImage, font: &CoverFont, line: &TextLine<'_>, style: &TextStyle) {
    let width = font.text_width(line.text, line.size);
    let x = ((canvas.width() as f32 - width) / 2.0).floor();
    let y = (canvas.height() / 2) as f32 + line.offset as f32;

    let glyphs = font.layout_at(line.text, line.size, x, y);
    let Some(mask) = GlyphMask::rasterize(&glyphs, style.stroke_width as i32) else {
        return;
    };

    let stroke = mask.dilate(style.stroke_width as i32);
    mask.blend_onto(canvas, &stroke, style.stroke);
    mask.blend_onto(canvas, &mask.coverage, style.fill);
}

/// Glyph coverage for one line, padded by the stroke width on every side.
struct GlyphMask {
    x0: i32,
    y0: i32,
    width: usize,
    height: usize,
    coverage: Vec<f32>,
}

impl GlyphMask {
    fn rasterize(glyphs: &[PositionedGlyph<'static>], pad: i32) -> Option<Self> {
        let boxes: Vec<_> = glyphs
            .iter()
            .filter_map(|glyph| glyph.pixel_bounding_box())
            .collect();
        let min_x = boxes.iter().map(|bb| bb.min.x).min()?;
        let min_y = boxes.iter().map(|bb| bb.min.y).min()?;
        let max_x = boxes.iter().map(|bb| bb.max.x).max()?;
        let max_y = boxes.iter().map(|bb| bb.max.y).max()?;

        let x0 = min_x - pad;
        let y0 = min_y - pad;
        let width = (max_x - min_x + 2 * pad) as usize;
        let height = (max_y - min_y + 2 * pad) as usize;
        let mut coverage = vec![0.0f32; width * height];

        for glyph in glyphs {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, v| {
                let mx = (bb.min.x + gx as i32 - x0) as usize;
                let my = (bb.min.y + gy as i32 - y0) as usize;
                let cell = &mut coverage[my * width + mx];
                *cell = cell.max(v);
            });
        }

        Some(Self {
            x0,
            y0,
            width,
            height,
            coverage,
        })
    }

    /// Coverage grown by a disc of `radius` pixels.
    fn dilate(&self, radius: i32) -> Vec<f32> {
        let offsets: Vec<(i32, i32)> = (-radius..=radius)
            .flat_map(|dy| (-radius..=radius).map(move |dx| (dx, dy)))
            .filter(|(dx, dy)| dx * dx + dy * dy <= radius * radius)
            .collect();

        let mut out = vec![0.0f32; self.coverage.len()];
        for my in 0..self.height as i32 {
            for mx in 0..self.width as i32 {
                let mut best = 0.0f32;
                for (dx, dy) in &offsets {
                    let (sx, sy) = (mx + dx, my + dy);
                    if sx < 0 || sy < 0 || sx >= self.width as i32 || sy >= self.height as i32 {
                        continue;
                    }
                    best = best.max(self.coverage[sy as usize * self.width + sx as usize]);
                }
                out[my as usize * self.width + mx as usize] = best;
            }
        }
        out
    }

    fn blend_onto(&self, canvas: &mut RgbaImage, alpha: &[f32], color: Rgba<u8>) {
        for my in 0..self.height {
            for mx in 0..self.width {
                let a = alpha[my * self.width + mx];
                if a <= 0.0 {
                    continue;
                }
                let px = self.x0 + mx as i32;
                let py = self.y0 + my as i32;
                if px < 0 || py < 0 || px >= canvas.width() as i32 || py >= canvas.height() as i32 {
                    continue;
                }
                let dst = canvas.get_pixel_mut(px as u32, py as u32);
                let inv = 1.0 - a;
                for c in 0..3 {
                    dst.0[c] = (color.0[c] as f32 * a + dst.0[c] as f32 * inv).round() as u8;
                }
                dst.0[3] = (255.0 * a + dst.0[3] as f32 * inv).round() as u8;
            }
        }
    }
}

/// Clauses straight from the structured title when the payload carries one,
/// otherwise parsed out of the display title.
pub fn clauses_for(handoff: &BackgroundHandoff) -> Result<TitleClauses> {
    match &handoff.title_spec {
        Some(spec) => Ok(spec.clauses()),
        None => TitleClauses::parse(&handoff.title),
    }
}

/// Loads the background, overlays the title and writes the cover. The cover
/// key is only written once composition has fully succeeded.
pub async fn render_cover(
    handoff: &BackgroundHandoff,
    font: &CoverFont,
    store: &dyn ObjectStore,
) -> Result<CoverResult> {
    let clauses = clauses_for(handoff)?;
    let background = store
        .get_object(&handoff.bucket, &handoff.background_key)
        .await?;

    let cover = {
        let _timer = logger::timer("cover composition");
        compose_cover(&background, &clauses, font)?
    };

    log::info!("📚 Writing cover for '{}' to {}", handoff.title, handoff.cover_object);
    let content_type = content_type_of(&cover);
    store
        .put_object(&handoff.bucket, &handoff.cover_key, cover, content_type)
        .await?;

    Ok(CoverResult {
        title: handoff.title.clone(),
        author: handoff.author.clone(),
        output_url: handoff.output_url.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TitleSpec;
    use crate::storage::MemoryObjectStore;

    const BACKDROP: Rgba<u8> = Rgba([40, 70, 120, 255]);

    fn background_png(width: u32, height: u32) -> Vec<u8> {
        let image = RgbaImage::from_pixel(width, height, BACKDROP);
        encode_image(DynamicImage::ImageRgba8(image), ImageFormat::Png).unwrap()
    }

    fn clauses() -> TitleClauses {
        TitleClauses::parse("An Empire of Fire and Ice").unwrap()
    }

    fn handoff(title_spec: Option<TitleSpec>, title: &str) -> BackgroundHandoff {
        BackgroundHandoff {
            title: title.into(),
            author: "Lara A. Saas".into(),
            title_spec,
            model_id: "amazon.titan-image-generator-v1".into(),
            bucket: "b".into(),
            background_key: "backgrounds/x.png".into(),
            background_object: "s3://b/backgrounds/x.png".into(),
            cover_key: "covers/x.png".into(),
            cover_object: "s3://b/covers/x.png".into(),
            output_url: "https://b.s3.amazonaws.com/covers/x.png".into(),
        }
    }

    #[test]
    fn lines_follow_cover_layout() {
        let clauses = clauses();
        let lines = layout_lines(&clauses);
        let texts: Vec<_> = lines.iter().map(|line| line.text).collect();
        assert_eq!(texts, vec!["An Empire", "of", "Fire", "and", "Ice"]);
        let offsets: Vec<_> = lines.iter().map(|line| line.offset).collect();
        assert_eq!(offsets, vec![50, 100, 132, 182, 214]);
        assert_eq!(lines[1].size, JOINER_FONT_SIZE);
        assert_eq!(lines[4].size, CLAUSE_FONT_SIZE);
    }

    #[test]
    fn composed_cover_keeps_size_and_format() {
        let font = CoverFont::embedded().unwrap();
        let cover = compose_cover(&background_png(384, 640), &clauses(), &font).unwrap();

        assert_eq!(image::guess_format(&cover).unwrap(), ImageFormat::Png);
        let decoded = image::load_from_memory(&cover).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (384, 640));
    }

    #[test]
    fn text_is_drawn_below_center_with_fill_and_stroke() {
        let font = CoverFont::embedded().unwrap();
        let cover = compose_cover(&background_png(384, 640), &clauses(), &font).unwrap();
        let decoded = image::load_from_memory(&cover).unwrap().to_rgba8();

        // Upper half is untouched.
        for y in 0..300 {
            for x in 0..384 {
                assert_eq!(*decoded.get_pixel(x, y), BACKDROP);
            }
        }

        let lower: Vec<_> = (320..640)
            .flat_map(|y| (0..384).map(move |x| (x, y)))
            .map(|(x, y)| *decoded.get_pixel(x, y))
            .collect();
        assert!(lower.contains(&Rgba([255, 255, 255, 255])));
        assert!(lower.contains(&Rgba([0, 0, 0, 255])));
    }

    #[test]
    fn lines_are_horizontally_centered() {
        let font = CoverFont::embedded().unwrap();
        let mut canvas = RgbaImage::from_pixel(384, 640, BACKDROP);
        let line = TextLine { text: "Destruction", size: CLAUSE_FONT_SIZE, offset: 50 };
        draw_line(&mut canvas, &font, &line, &TextStyle::default());

        let touched: Vec<u32> = (0..384)
            .filter(|&x| (370..440).any(|y| *canvas.get_pixel(x, y) != BACKDROP))
            .collect();
        let left = *touched.first().unwrap() as i32;
        let right = 383 - *touched.last().unwrap() as i32;
        assert!((left - right).abs() <= 8, "left margin {} right margin {}", left, right);
    }

    #[test]
    fn composition_is_deterministic() {
        let font = CoverFont::embedded().unwrap();
        let background = background_png(384, 640);
        let first = compose_cover(&background, &clauses(), &font).unwrap();
        let second = compose_cover(&background, &clauses(), &font).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn jpeg_backgrounds_stay_jpeg() {
        let font = CoverFont::embedded().unwrap();
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(384, 640, BACKDROP));
        let jpeg = encode_image(image, ImageFormat::Jpeg).unwrap();

        let cover = compose_cover(&jpeg, &clauses(), &font).unwrap();
        assert_eq!(image::guess_format(&cover).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn accepts_raw_model_response_as_background() {
        let font = CoverFont::embedded().unwrap();
        let response = serde_json::json!({
            "images": [STANDARD.encode(background_png(384, 640))]
        });
        let cover = compose_cover(response.to_string().as_bytes(), &clauses(), &font).unwrap();
        assert_eq!(image::guess_format(&cover).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn garbage_background_is_an_image_error() {
        let font = CoverFont::embedded().unwrap();
        let err = compose_cover(b"garbage", &clauses(), &font).unwrap_err();
        assert!(matches!(err, CoverError::ImageError(_)));
    }

    #[test]
    fn structured_title_wins_over_display_string() {
        let spec = TitleSpec {
            noun: "Stars".into(),
            article: " ".into(),
            element1: "Ash".into(),
            element2: "Thorns".into(),
        };
        let clauses = clauses_for(&handoff(Some(spec), "ignored")).unwrap();
        assert_eq!(clauses.noun, "Stars");

        let parsed = clauses_for(&handoff(None, "A Court of Mist and Fury")).unwrap();
        assert_eq!(parsed.noun, "A Court");
        assert_eq!(parsed.element2, "Fury");
    }

    #[tokio::test]
    async fn renders_cover_into_store() {
        let font = CoverFont::embedded().unwrap();
        let store = MemoryObjectStore::new();
        store
            .put_object("b", "backgrounds/x.png", background_png(384, 640), "image/png")
            .await
            .unwrap();

        let result = render_cover(&handoff(None, "A Court of Mist and Fury"), &font, &store)
            .await
            .unwrap();

        assert_eq!(result.output_url, "https://b.s3.amazonaws.com/covers/x.png");
        assert_eq!(result.author, "Lara A. Saas");
        let cover = store.object("b", "covers/x.png").unwrap();
        assert_eq!(cover.content_type, "image/png");
        assert_ne!(cover.body, background_png(384, 640));
    }

    #[tokio::test]
    async fn malformed_title_writes_no_cover() {
        let font = CoverFont::embedded().unwrap();
        let store = MemoryObjectStore::new();
        store
            .put_object("b", "backgrounds/x.png", background_png(384, 640), "image/png")
            .await
            .unwrap();

        let err = render_cover(&handoff(None, "Untitled"), &font, &store)
            .await
            .unwrap_err();

        assert!(matches!(err, CoverError::MalformedTitle(_)));
        assert!(store.object("b", "covers/x.png").is_none());
    }

    #[tokio::test]
    async fn missing_background_is_a_storage_error() {
        let font = CoverFont::embedded().unwrap();
        let store = MemoryObjectStore::new();
        let err = render_cover(&handoff(None, "A Court of Mist and Fury"), &font, &store)
            .await
            .unwrap_err();
        assert!(matches!(err, CoverError::StorageError(_)));
        assert!(store.is_empty());
    }
}
