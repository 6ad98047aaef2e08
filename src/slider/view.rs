use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use super::{SwipeToStart, CHEVRONS};
use crate::theme::Theme;

/// Column where the label starts, relative to the track
const LABEL_INDENT: u16 = 4;
const CHEVRON_GLYPH: &str = "❮";
const LABEL: &str = "Swipe to start";

/// One frame of the slider. Call [`SwipeToStart::on_layout`] with the same
/// area before rendering so the handle lands inside it.
pub struct SliderView<'a> {
    slider: &'a SwipeToStart,
    theme: &'a Theme,
    phase: f32,
}

impl<'a> SliderView<'a> {
    pub fn new(slider: &'a SwipeToStart, theme: &'a Theme, phase: f32) -> Self {
        Self {
            slider,
            theme,
            phase,
        }
    }
}

impl Widget for SliderView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let track_style = Style::default().bg(self.theme.track);
        fill(buf, area, track_style);

        let label_row = area.y + area.height / 2;
        if area.width > LABEL_INDENT {
            buf.set_stringn(
                area.x + LABEL_INDENT,
                label_row,
                LABEL,
                (area.width - LABEL_INDENT) as usize,
                track_style.fg(self.theme.text).add_modifier(Modifier::BOLD),
            );
        }

        let full = self.slider.handle_rect();
        let handle = full.intersection(area);
        if handle.is_empty() {
            return;
        }
        let handle_style = Style::default().bg(self.theme.handle);
        fill(buf, handle, handle_style);

        let row = handle.y + handle.height / 2;
        for chevron in CHEVRONS.iter() {
            let column = full.x + (full.width as f32 * chevron.position).round() as u16;
            if column < handle.x || column >= handle.x + handle.width {
                continue;
            }
            if let Some(cell) = buf.cell_mut((column, row)) {
                cell.set_symbol(CHEVRON_GLYPH).set_style(
                    handle_style
                        .fg(chevron.stops.at(self.phase))
                        .add_modifier(Modifier::BOLD),
                );
            }
        }
    }
}

/// Blank out `area` and paint it with `style`
fn fill(buf: &mut Buffer, area: Rect, style: Style) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(" ").set_style(style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slider::Geometry;
    use ratatui::style::Color;

    fn slider(width: u16) -> SwipeToStart {
        let mut slider = SwipeToStart::new(|| {}).with_geometry(Geometry::new(12.0, 2.0));
        slider.on_layout(Rect::new(0, 0, width, 5));
        slider
    }

    #[test]
    fn test_renders_handle_at_rest() {
        let theme = Theme::default();
        let slider = slider(40);
        let area = Rect::new(0, 0, 40, 5);
        let mut buf = Buffer::empty(area);

        SliderView::new(&slider, &theme, 0.0).render(area, &mut buf);

        // handle spans columns 26..38 on rows 1..4
        assert_eq!(buf[(25, 2)].bg, theme.track);
        assert_eq!(buf[(26, 2)].bg, theme.handle);
        assert_eq!(buf[(37, 2)].bg, theme.handle);
        assert_eq!(buf[(38, 2)].bg, theme.track);
        assert_eq!(buf[(30, 0)].bg, theme.track);
        assert_eq!(buf[(30, 4)].bg, theme.track);
    }

    #[test]
    fn test_chevrons_take_shimmer_colors() {
        let theme = Theme::default();
        let slider = slider(40);
        let area = Rect::new(0, 0, 40, 5);
        let mut buf = Buffer::empty(area);

        SliderView::new(&slider, &theme, 0.5).render(area, &mut buf);

        let handle = slider.handle_rect();
        let row = handle.y + handle.height / 2;
        for chevron in CHEVRONS.iter() {
            let column = handle.x + (handle.width as f32 * chevron.position).round() as u16;
            let cell = &buf[(column, row)];
            assert_eq!(cell.symbol(), CHEVRON_GLYPH);
            assert_eq!(cell.fg, chevron.stops.at(0.5));
        }
        assert_eq!(CHEVRONS[2].stops.at(0.5), Color::Rgb(0x6f, 0xb2, 0x68));
    }

    #[test]
    fn test_label_drawn_on_track() {
        let theme = Theme::default();
        let slider = slider(40);
        let area = Rect::new(0, 0, 40, 5);
        let mut buf = Buffer::empty(area);

        SliderView::new(&slider, &theme, 0.0).render(area, &mut buf);

        assert_eq!(buf[(4, 2)].symbol(), "S");
        assert_eq!(buf[(5, 2)].symbol(), "w");
        assert_eq!(buf[(4, 2)].fg, theme.text);
    }

    #[test]
    fn test_narrow_track_does_not_panic() {
        let theme = Theme::default();
        let slider = slider(6);
        let area = Rect::new(0, 0, 6, 5);
        let mut buf = Buffer::empty(area);

        SliderView::new(&slider, &theme, 0.3).render(area, &mut buf);
        assert_eq!(slider.drag_distance(), 0.0);
    }
}
