//! Renders the sample start menu to a PNG, optionally next to a frame with one item hovered.

mod config;
mod start_menu;

use anyhow::{Context, Result};
use bevel_engine::canvas::Canvas;
use bevel_engine::coords::Point;
use bevel_engine::logging::{LoggingConfig, init_logging};
use bevel_engine::text::TrueTypeFont;
use bevel_ui::style::TextFont;
use log::info;

use config::StudioConfig;
use start_menu::StartMenu;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = StudioConfig::from_args(std::env::args().skip(1))?
        .with_title_font(std::env::var_os("BEVEL_STUDIO_FONT").map(Into::into));

    let title_font = match &config.title_font {
        Some(path) => Some(TextFont::from_face(TrueTypeFont::from_file(path, 32.0)?).with_adjustment(0, 8)),
        None => None,
    };
    let mut menu = StartMenu::new(title_font).context("building start menu styles")?;
    let (width, height) = (config.width, config.height);

    // Areas only exist after a draw, so hit-testing needs a first frame.
    let mut idle = Canvas::new(width, height);
    menu.draw(&mut idle);

    // With a hover point the PNG shows the idle and hovered frames side by side.
    let frame = match config.hover {
        Some(p) => {
            menu.on_pointer_move(p);
            let mut hovered = Canvas::new(width, height);
            menu.draw(&mut hovered);
            info!("hover at ({}, {}): {}", p.x, p.y, menu.selected_label().unwrap_or("nothing"));

            let mut sheet = Canvas::new(width * 2, height);
            sheet.draw_canvas(&idle, Point::new(0, 0));
            sheet.draw_canvas(&hovered, Point::new(width as i32, 0));
            sheet
        }
        None => idle,
    };

    image::save_buffer(&config.output, frame.as_bytes(), frame.width(), frame.height(), image::ColorType::Rgba8)
        .with_context(|| format!("writing {}", config.output.display()))?;
    info!("wrote {}x{} frame to {}", frame.width(), frame.height(), config.output.display());
    Ok(())
}
