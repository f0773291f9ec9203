use crate::window::Window;
use anyhow::anyhow;
use line_2d::Coord;
use sdl2::{gfx::primitives::DrawRenderer, pixels::Color, rect::Rect};

const BACKGROUND: Color = Color::RGB(36, 36, 44);
const GRID: Color = Color::RGB(60, 60, 72);
const AXIS: Color = Color::RGB(110, 110, 125);

/// A closed interval of data values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// The span from `-half_width` to `half_width`.
    pub fn symmetric(half_width: f64) -> Self {
        Self::new(-half_width, half_width)
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Multiples of `spacing` that lie within the span.
    fn multiples(&self, spacing: f64) -> impl Iterator<Item = f64> {
        let first = (self.min / spacing).ceil() as i64;
        let last = (self.max / spacing).floor() as i64;
        (first..=last).map(move |k| k as f64 * spacing)
    }
}

/// Spacing between grid lines in data units. `None` means no grid lines along that axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Grid {
    pub x_spacing: Option<f64>,
    pub y_spacing: Option<f64>,
}

/// Maps a rectangle of data space onto a rectangle of the window and draws into it.
#[derive(Clone, Debug)]
pub struct Plot {
    rect: Rect,
    x_span: Span,
    y_span: Span,
    grid: Grid,
}

impl Plot {
    pub fn new(rect: Rect, x_span: Span, y_span: Span, grid: Grid) -> Self {
        Self {
            rect,
            x_span,
            y_span,
            grid,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Converts a point in data space to a pixel. Larger y values are higher up the window.
    pub fn to_screen(&self, x: f64, y: f64) -> Coord {
        let x_01 = (x - self.x_span.min) / self.x_span.width();
        let y_01 = (y - self.y_span.min) / self.y_span.width();
        let width = (self.rect.width() - 1) as f64;
        let height = (self.rect.height() - 1) as f64;
        Coord {
            x: self.rect.x() + (x_01 * width).round() as i32,
            y: self.rect.y() + ((1.0 - y_01) * height).round() as i32,
        }
    }

    fn render_vertical_line(
        &self,
        window: &mut Window,
        x: f64,
        color: Color,
    ) -> anyhow::Result<()> {
        let Coord { x, .. } = self.to_screen(x, 0.0);
        window.canvas.set_draw_color(color);
        window
            .canvas
            .fill_rect(Rect::new(x, self.rect.y(), 1, self.rect.height()))
            .map_err(|e| anyhow!("{e}"))
    }

    fn render_horizontal_line(
        &self,
        window: &mut Window,
        y: f64,
        color: Color,
    ) -> anyhow::Result<()> {
        let Coord { y, .. } = self.to_screen(0.0, y);
        window.canvas.set_draw_color(color);
        window
            .canvas
            .fill_rect(Rect::new(self.rect.x(), y, self.rect.width(), 1))
            .map_err(|e| anyhow!("{e}"))
    }

    /// Fills the plot area and draws grid lines, with the lines through zero highlighted.
    pub fn render_background(&self, window: &mut Window) -> anyhow::Result<()> {
        window.canvas.set_draw_color(BACKGROUND);
        window
            .canvas
            .fill_rect(self.rect)
            .map_err(|e| anyhow!("{e}"))?;
        if let Some(spacing) = self.grid.x_spacing {
            for x in self.x_span.multiples(spacing) {
                let color = if x == 0.0 { AXIS } else { GRID };
                self.render_vertical_line(window, x, color)?;
            }
        }
        if let Some(spacing) = self.grid.y_spacing {
            for y in self.y_span.multiples(spacing) {
                let color = if y == 0.0 { AXIS } else { GRID };
                self.render_horizontal_line(window, y, color)?;
            }
        }
        window.canvas.set_draw_color(AXIS);
        window
            .canvas
            .draw_rect(self.rect)
            .map_err(|e| anyhow!("{e}"))?;
        Ok(())
    }

    /// Draws line segments joining consecutive points. Nothing is drawn outside the plot area.
    pub fn render_polyline(
        &self,
        window: &mut Window,
        points: impl IntoIterator<Item = (f64, f64)>,
        color: Color,
        line_width: u32,
    ) -> anyhow::Result<()> {
        let mut coord_iter =
            points.into_iter().map(|(x, y)| self.to_screen(x, y));
        let Some(mut prev) = coord_iter.next() else {
            return Ok(());
        };
        let half_width = line_width as i32 / 2;
        let mut rects = Vec::new();
        for coord in coord_iter {
            for Coord { x, y } in line_2d::coords_between(prev, coord) {
                rects.push(Rect::new(
                    x - half_width,
                    y - half_width,
                    line_width,
                    line_width,
                ));
            }
            prev = coord;
        }
        window.canvas.set_clip_rect(self.rect);
        window.canvas.set_draw_color(color);
        let result = window.canvas.fill_rects(&rects);
        window.canvas.set_clip_rect(None::<Rect>);
        result.map_err(|e| anyhow!("{e}"))
    }

    pub fn render_marker(
        &self,
        window: &mut Window,
        x: f64,
        y: f64,
        radius: i16,
        color: Color,
    ) -> anyhow::Result<()> {
        let Coord { x, y } = self.to_screen(x, y);
        window
            .canvas
            .filled_circle(x as i16, y as i16, radius, color)
            .map_err(|e| anyhow!(e))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn plot() -> Plot {
        Plot::new(
            Rect::new(100, 50, 201, 101),
            Span::symmetric(5.0),
            Span::symmetric(2.0),
            Grid::default(),
        )
    }

    #[test]
    fn corners_map_to_rect_corners() {
        let plot = plot();
        assert_eq!(plot.to_screen(-5.0, 2.0), Coord { x: 100, y: 50 });
        assert_eq!(plot.to_screen(5.0, -2.0), Coord { x: 300, y: 150 });
        assert_eq!(plot.to_screen(0.0, 0.0), Coord { x: 200, y: 100 });
    }

    #[test]
    fn larger_y_is_higher_up() {
        let plot = plot();
        assert!(plot.to_screen(0.0, 1.0).y < plot.to_screen(0.0, -1.0).y);
    }

    #[test]
    fn grid_multiples_within_span() {
        let span = Span::symmetric(2.1);
        assert_eq!(
            span.multiples(1.0).collect::<Vec<_>>(),
            vec![-2.0, -1.0, 0.0, 1.0, 2.0]
        );
        let time = Span::new(0.0, 2.0 * std::f64::consts::PI);
        assert_eq!(time.multiples(std::f64::consts::FRAC_PI_4).count(), 9);
    }
}
