// File: crates/demo/src/main.rs
// Summary: Demo loads a chart (JSON config, eye/head CSV, or built-in samples), replays a scripted
//          drag, logs selection changes, and renders PNG frames of the card.

use anyhow::{Context, Result};
use chart_core::{ChartConfig, Point, ScrubChart, SelectionChange};
use chart_render_skia::{Palette, RenderOptions, SkiaRenderer};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Accept path from CLI: *.json config, *.csv with eye/head columns, or nothing for built-ins
    let config = match std::env::args().nth(1) {
        Some(raw) => load_config(Path::new(&raw))?,
        None => ChartConfig::default(),
    };
    let palette = std::env::var("SCRUB_PALETTE").map(|n| Palette::find(&n)).unwrap_or_default();
    log::info!(
        "chart '{}' with {} trace(s), palette {}",
        config.title,
        config.traces.len(),
        palette.name
    );

    let mut chart = config.build().context("invalid chart config")?;
    chart.set_observer(|c: &SelectionChange| {
        log::info!("selection changed on '{}': index {} -> {}", c.name, c.index, c.value);
    });

    let renderer = SkiaRenderer::new();
    let opts = RenderOptions { scale: 2.0, palette, ..RenderOptions::default() };
    let out_dir = PathBuf::from("target/out");

    write_frame(&renderer, &chart, &opts, &out_dir, "idle")?;

    let w = config.frame.width;
    let h = config.frame.height;
    let script = drag_script(w, h);
    let last = script.len() - 1;
    for (i, pos) in script.into_iter().enumerate() {
        if i == 0 { chart.on_pointer_down(pos); } else { chart.on_pointer_move(pos); }
        if i % 4 == 0 || i == last {
            write_frame(&renderer, &chart, &opts, &out_dir, &format!("scrub_{i:02}"))?;
        }
    }
    if let Some(owner) = chart.active_trace().and_then(|i| chart.trace(i)) {
        log::info!("drag stayed on '{}' after leaving its region", owner.name);
    }
    chart.on_pointer_up();
    write_frame(&renderer, &chart, &opts, &out_dir, "released")?;
    Ok(())
}

/// Sweep the top trace left to right, then wander into the trace below.
fn drag_script(w: f64, h: f64) -> Vec<Point> {
    let steps = 16;
    let mut pts: Vec<Point> = (0..=steps).map(|i| Point::new(w * i as f64 / steps as f64, h * 0.5)).collect();
    pts.push(Point::new(w * 0.5, h * 1.5));
    pts.push(Point::new(w * 0.25, h * 1.5));
    pts
}

fn write_frame(renderer: &SkiaRenderer, chart: &ScrubChart, opts: &RenderOptions, dir: &Path, name: &str) -> Result<()> {
    let out = dir.join(format!("card_{name}.png"));
    renderer.render_to_png(&chart.render(), opts, &out)?;
    log::info!("Wrote {}", out.display());
    Ok(())
}

fn load_config(path: &Path) -> Result<ChartConfig> {
    match path.extension().and_then(|e| e.to_str()).map(|e| e.to_ascii_lowercase()).as_deref() {
        Some("json") => ChartConfig::from_path(path).with_context(|| format!("failed to load '{}'", path.display())),
        Some("csv") => load_traces_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display())),
        _ => anyhow::bail!("unsupported input {} (expected .json or .csv)", path.display()),
    }
}

/// Load one trace per numeric column; a column named "head" is drawn mirrored.
fn load_traces_csv(path: &Path) -> Result<ChartConfig> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    log::debug!("headers: {headers:?}");
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];

    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        for (col, field) in rec.iter().enumerate().take(headers.len()) {
            match field.parse::<f64>() {
                Ok(v) => columns[col].push(v),
                Err(_) => log::warn!("row {row}: skipping non-numeric '{field}' in column '{}'", headers[col]),
            }
        }
    }

    let mut config = ChartConfig::default();
    config.title = path.file_stem().and_then(|s| s.to_str()).unwrap_or("chart").to_string();
    config.legend = None;
    config.traces = headers
        .into_iter()
        .zip(columns)
        .map(|(name, values)| chart_core::TraceConfig {
            flip: name == "head",
            name,
            values,
            min: None,
            max: None,
            axis_ticks: 3,
        })
        .collect();
    Ok(config)
}
