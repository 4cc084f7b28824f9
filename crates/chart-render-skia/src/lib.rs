// File: crates/chart-render-skia/src/lib.rs
// Summary: Headless PNG rendering of a chart-core RenderFrame using Skia CPU raster surfaces.

use anyhow::Result;
use chart_core::{Header, RenderFrame, TraceFrame};
use skia_safe as skia;

pub mod palette;

pub use palette::Palette;

pub struct RenderOptions {
    /// Device pixels per chart point.
    pub scale: f32,
    pub palette: Palette,
    pub stroke_width: f32,
    pub indicator_radius: f32,
    /// Header and tick text; off for pixel-exact tests.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            palette: Palette::default(),
            stroke_width: 3.0,
            indicator_radius: 6.0,
            draw_labels: true,
        }
    }
}

#[derive(Default)]
pub struct SkiaRenderer;

impl SkiaRenderer {
    pub fn new() -> Self { Self }

    /// Render the frame and return encoded PNG bytes.
    pub fn render_png_bytes(&self, frame: &RenderFrame, opts: &RenderOptions) -> Result<Vec<u8>> {
        let width = ((frame.width as f32) * opts.scale).ceil().max(1.0) as i32;
        let height = ((frame.height as f32) * opts.scale).ceil().max(1.0) as i32;
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow::anyhow!("failed to create {width}x{height} raster surface"))?;
        let canvas = surface.canvas();

        canvas.clear(opts.palette.background);
        canvas.save();
        canvas.scale((opts.scale, opts.scale));

        let mut card = skia::Paint::default();
        card.set_anti_alias(true);
        card.set_color(opts.palette.card);
        let card_rect = skia::Rect::from_wh(frame.width as f32, frame.height as f32);
        canvas.draw_round_rect(card_rect, 20.0, 20.0, &card);

        for trace in &frame.traces {
            draw_trace(canvas, trace, opts);
        }
        if opts.draw_labels {
            draw_header(canvas, frame, opts);
        }
        canvas.restore();

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        log::debug!("rendered {}x{} frame ({} bytes)", width, height, data.len());
        Ok(data.as_bytes().to_vec())
    }

    /// Render the frame to a PNG at `output_png_path`.
    pub fn render_to_png(
        &self,
        frame: &RenderFrame,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_png_bytes(frame, opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_trace(canvas: &skia::Canvas, trace: &TraceFrame, opts: &RenderOptions) {
    canvas.save();
    canvas.translate((trace.region.left as f32, trace.region.top as f32));

    if opts.draw_labels && !trace.ticks.is_empty() {
        let mut tick_paint = skia::Paint::default();
        tick_paint.set_anti_alias(true);
        tick_paint.set_color(opts.palette.tick);
        let mut font = skia::Font::default();
        font.set_size(10.0);
        for tick in &trace.ticks {
            canvas.draw_str(format!("{:.0}", tick.value), (4.0, tick.y as f32), &font, &tick_paint);
        }
    }

    if let Some((first, rest)) = trace.points.split_first() {
        let mut path = skia::Path::new();
        path.move_to((first.x as f32, first.y as f32));
        for p in rest {
            path.line_to((p.x as f32, p.y as f32));
        }

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(opts.stroke_width);
        stroke.set_stroke_join(skia::paint::Join::Round);
        stroke.set_color(if trace.flip { opts.palette.mirror_stroke } else { opts.palette.line_stroke });
        canvas.draw_path(&path, &stroke);
    }

    if let Some(ind) = &trace.indicator {
        let center = (ind.position.x as f32, ind.position.y as f32);
        let mut dot = skia::Paint::default();
        dot.set_anti_alias(true);
        dot.set_style(skia::paint::Style::Fill);

        dot.set_color(opts.palette.indicator_ring);
        canvas.draw_circle(center, opts.indicator_radius + 2.0, &dot);
        dot.set_color(opts.palette.indicator);
        canvas.draw_circle(center, opts.indicator_radius, &dot);
    }

    canvas.restore();
}

fn draw_header(canvas: &skia::Canvas, frame: &RenderFrame, opts: &RenderOptions) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(opts.palette.text);
    let mut font = skia::Font::default();

    match &frame.header {
        Header::Title { title, legend } => {
            font.set_size(28.0);
            canvas.draw_str(title, (16.0, 40.0), &font, &paint);
            if let Some(legend) = legend {
                paint.set_color(opts.palette.legend);
                font.set_size(16.0);
                canvas.draw_str(legend, (16.0, 64.0), &font, &paint);
            }
        }
        Header::Value { text, .. } => {
            font.set_size(41.0);
            let (advance, _) = font.measure_str(text, Some(&paint));
            let x = (frame.width as f32 - advance) * 0.5;
            canvas.draw_str(text, (x, 56.0), &font, &paint);
        }
    }
}
