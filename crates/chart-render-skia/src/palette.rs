// File: crates/chart-render-skia/src/palette.rs
// Summary: Light/dark card palettes for the raster backend.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub name: &'static str,
    pub background: skia::Color,
    pub card: skia::Color,
    /// Stroke for unflipped traces.
    pub line_stroke: skia::Color,
    /// Stroke for flipped (mirrored) traces.
    pub mirror_stroke: skia::Color,
    pub indicator: skia::Color,
    pub indicator_ring: skia::Color,
    pub text: skia::Color,
    pub legend: skia::Color,
    pub tick: skia::Color,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 242, 242, 247),
            card: skia::Color::from_argb(255, 255, 255, 255),
            line_stroke: skia::Color::from_argb(255, 233, 80, 130),
            mirror_stroke: skia::Color::from_argb(255, 80, 130, 233),
            indicator: skia::Color::from_argb(255, 255, 150, 0),
            indicator_ring: skia::Color::from_argb(255, 255, 255, 255),
            text: skia::Color::from_argb(255, 20, 20, 30),
            legend: skia::Color::from_argb(255, 120, 120, 130),
            tick: skia::Color::from_argb(255, 160, 160, 170),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 0, 0, 0),
            card: skia::Color::from_argb(255, 28, 28, 30),
            line_stroke: skia::Color::from_argb(255, 255, 105, 150),
            mirror_stroke: skia::Color::from_argb(255, 100, 160, 255),
            indicator: skia::Color::from_argb(255, 255, 190, 40),
            indicator_ring: skia::Color::from_argb(255, 28, 28, 30),
            text: skia::Color::from_argb(255, 235, 235, 245),
            legend: skia::Color::from_argb(255, 150, 150, 160),
            tick: skia::Color::from_argb(255, 110, 110, 120),
        }
    }

    /// Find a palette by `name`, falling back to light.
    pub fn find(name: &str) -> Self {
        if name.eq_ignore_ascii_case("dark") { Self::dark() } else { Self::light() }
    }
}

impl Default for Palette {
    fn default() -> Self { Self::light() }
}
