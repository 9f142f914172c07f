//! The sample start menu: a centred title and three selectable items.

use bevel_ui::prelude::*;

const ITEMS: [&str; 3] = ["START", "SETTING", "EXIT"];
const BACKGROUND: u32 = 0x111111ff;

/// Owns the UI tree; items live at `[0, 1..=3]` under the root window.
pub struct StartMenu {
    root: Node,
    selected: Option<usize>,
    hover: BoxStyle,
}

impl StartMenu {
    pub fn new(title_font: Option<TextFont>) -> Result<Self, StyleParseError> {
        let title_style = match title_font {
            Some(font) => TextStyle::new().font(font).line_height(px(36)),
            None => TextStyle::new().line_height(px(24)),
        };
        let title = View::new(BoxStyle::new().margin(parse_edges("10 50 20")?)).child(Text::with_style("SAMPLE", title_style));

        let item_style = BoxStyle::new()
            .margin(parse_edges("5 45")?)
            .width(px(200))
            .padding(parse_edges("2 40 1 10")?)
            .border_width(parse_edges("1 0 1 1")?)
            .border_color(parse_colors("#00000000")?)
            .background(parse_colors("#00000000")?)
            .radius(parse_radius("20 0 0 20")?);

        let mut column = View::new(
            BoxStyle::new()
                .width(vw(1.0))
                .height(vh(1.0))
                .align_vertical(Align::Center),
        )
        .child(title);
        for label in ITEMS {
            column.push_child(View::new(item_style.clone()).child(Text::new(label)));
        }

        let hover = BoxStyle::new()
            .border_color(Corners::horizontal(parse_color("#fffffff0")?, parse_color("#ffffff00")?))
            .background(corner_colors_horizontal(0x5599ccb0, 0x5599cc00));

        Ok(Self { root: Window::new().child(column).into(), selected: None, hover })
    }

    fn item(&self, index: usize) -> Option<&Node> {
        self.root.components().first()?.components().get(index + 1)
    }

    fn item_mut(&mut self, index: usize) -> Option<&mut View> {
        self.root.at_path_mut(&[0, index + 1])?.as_view_mut()
    }

    /// Selects the item under `p`, using the areas from the last draw.
    pub fn on_pointer_move(&mut self, p: Point) {
        self.selected = (0..ITEMS.len()).find(|&i| self.item(i).is_some_and(|n| n.area().contains(p)));
        log::debug!("pointer at ({}, {}) selects {:?}", p.x, p.y, self.selected_label());
    }

    pub fn selected_label(&self) -> Option<&'static str> {
        self.selected.map(|i| ITEMS[i])
    }

    /// Paints the frame. Slot 0 of each item's style stack carries the hover look.
    pub fn draw(&mut self, canvas: &mut Canvas) {
        canvas.clear(Color::from_rgba_u32(BACKGROUND));
        let hover = self.hover.clone();
        for i in 0..ITEMS.len() {
            let selected = self.selected == Some(i);
            if let Some(item) = self.item_mut(i) {
                if selected {
                    item.replace_style(0, hover.clone());
                } else {
                    item.pop_style();
                }
            }
        }
        self.root.draw(canvas, 0, 0);
    }

    #[cfg(test)]
    fn item_styles(&mut self, index: usize) -> usize {
        self.item_mut(index).map_or(0, |v| v.styles_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centre(area: Area) -> Point {
        Point::new((area.min.x + area.max.x) / 2, (area.min.y + area.max.y) / 2)
    }

    #[test]
    fn items_are_stacked_and_centred_vertically() {
        let mut menu = StartMenu::new(None).unwrap();
        let mut canvas = Canvas::new(640, 480);
        menu.draw(&mut canvas);

        let areas: Vec<Area> = (0..3).map(|i| menu.item(i).unwrap().area()).collect();
        assert!(areas.windows(2).all(|w| w[0].max.y < w[1].min.y));
        assert!(areas.iter().all(|a| a.min.x == 45 && a.size().width == 200 - 90));
        assert!(areas[0].min.y > 100);
    }

    #[test]
    fn hovering_an_item_fills_slot_zero() {
        let mut menu = StartMenu::new(None).unwrap();
        let mut canvas = Canvas::new(640, 480);
        menu.draw(&mut canvas);

        let target = centre(menu.item(1).unwrap().area());
        menu.on_pointer_move(target);
        assert_eq!(menu.selected_label(), Some("SETTING"));
        menu.draw(&mut canvas);
        menu.draw(&mut canvas);
        assert_eq!((menu.item_styles(0), menu.item_styles(1), menu.item_styles(2)), (0, 1, 0));

        let before = Color::from_rgba_u32(BACKGROUND).to_rgba8();
        let lit = canvas.pixel(target.x, target.y).unwrap();
        assert_ne!(lit, before);

        menu.on_pointer_move(Point::new(0, 0));
        assert_eq!(menu.selected_label(), None);
        menu.draw(&mut canvas);
        assert_eq!(menu.item_styles(1), 0);
    }
}
