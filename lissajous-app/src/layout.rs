use sdl2::rect::Rect;

const PADDING_PX: i32 = 16;
const CONTROL_ROW_PX: i32 = 32;
const CONTROL_HEIGHT_PX: u32 = 24;
const TITLE_HEIGHT_PX: i32 = 48;
const RESET_BUTTON_WIDTH_PX: u32 = 80;

/// Where everything goes. The waveforms and controls are stacked in a column on the left, and the
/// curve and its title fill the space on the right.
#[derive(Clone, Debug)]
pub struct Layout {
    pub x_wave: Rect,
    pub y_wave: Rect,
    pub x_slider: Rect,
    pub y_slider: Rect,
    pub reset_button: Rect,
    pub title_origin: (i32, i32),
    pub curve: Rect,
}

fn px(value: i32) -> u32 {
    value.max(1) as u32
}

impl Layout {
    pub fn new(width_px: u32, height_px: u32) -> Self {
        let width = width_px as i32;
        let height = height_px as i32;
        let column_split = (width * 3) / 5;
        let left_width = column_split - (2 * PADDING_PX);
        let controls_height = 3 * CONTROL_ROW_PX;
        let wave_height = (height - controls_height - (4 * PADDING_PX)) / 2;
        let controls_y = (3 * PADDING_PX) + (2 * wave_height);
        let curve_x = column_split + PADDING_PX;
        let curve_y = PADDING_PX + TITLE_HEIGHT_PX;
        Self {
            x_wave: Rect::new(
                PADDING_PX,
                PADDING_PX,
                px(left_width),
                px(wave_height),
            ),
            y_wave: Rect::new(
                PADDING_PX,
                (2 * PADDING_PX) + wave_height,
                px(left_width),
                px(wave_height),
            ),
            x_slider: Rect::new(
                PADDING_PX,
                controls_y,
                px(left_width),
                CONTROL_HEIGHT_PX,
            ),
            y_slider: Rect::new(
                PADDING_PX,
                controls_y + CONTROL_ROW_PX,
                px(left_width),
                CONTROL_HEIGHT_PX,
            ),
            reset_button: Rect::new(
                PADDING_PX + (left_width - RESET_BUTTON_WIDTH_PX as i32) / 2,
                controls_y + (2 * CONTROL_ROW_PX),
                RESET_BUTTON_WIDTH_PX,
                CONTROL_HEIGHT_PX,
            ),
            title_origin: (curve_x, PADDING_PX),
            curve: Rect::new(
                curve_x,
                curve_y,
                px(width - curve_x - PADDING_PX),
                px(height - curve_y - PADDING_PX),
            ),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn everything_fits_without_overlapping() {
        let (width, height) = (1200, 700);
        let layout = Layout::new(width, height);
        let window = Rect::new(0, 0, width, height);
        let rects = [
            layout.x_wave,
            layout.y_wave,
            layout.x_slider,
            layout.y_slider,
            layout.reset_button,
            layout.curve,
        ];
        for (i, a) in rects.iter().enumerate() {
            assert!(window.contains_rect(*a), "{a:?} is outside the window");
            for b in &rects[i + 1..] {
                assert!(!a.has_intersection(*b), "{a:?} overlaps {b:?}");
            }
        }
        assert!(layout.title_origin.1 < layout.curve.y());
    }
}
