use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use bevel_engine::coords::Point;

/// Command-line options: `[output.png] [width] [height] [hover_x hover_y]`.
#[derive(Debug, Clone, PartialEq)]
pub struct StudioConfig {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Pointer position for the second frame.
    pub hover: Option<Point>,
    /// TrueType font for the title, from `BEVEL_STUDIO_FONT`.
    pub title_font: Option<PathBuf>,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("bevel-studio.png"),
            width: 640,
            height: 480,
            hover: None,
            title_font: None,
        }
    }
}

impl StudioConfig {
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let args: Vec<String> = args.into_iter().collect();
        let mut config = Self::default();

        if let Some(out) = args.first() {
            config.output = PathBuf::from(out);
        }
        if let Some(w) = args.get(1) {
            config.width = w.parse().with_context(|| format!("invalid width {w:?}"))?;
        }
        if let Some(h) = args.get(2) {
            config.height = h.parse().with_context(|| format!("invalid height {h:?}"))?;
        }
        match &args[args.len().min(3)..] {
            [] => {}
            [x, y] => {
                let x = x.parse().with_context(|| format!("invalid hover x {x:?}"))?;
                let y = y.parse().with_context(|| format!("invalid hover y {y:?}"))?;
                config.hover = Some(Point::new(x, y));
            }
            rest => bail!("expected hover as two coordinates, got {rest:?}"),
        }
        if config.width == 0 || config.height == 0 {
            bail!("canvas size must be non-zero, got {}x{}", config.width, config.height);
        }
        Ok(config)
    }

    pub fn with_title_font(mut self, path: Option<PathBuf>) -> Self {
        self.title_font = path;
        self
    }
}
