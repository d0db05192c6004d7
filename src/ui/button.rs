use macroquad::prelude::*;

const IDLE: Color = Color::new(0.27, 0.51, 0.71, 1.0);
const IDLE_HOVER: Color = Color::new(0.39, 0.58, 0.93, 1.0);
const LATCHED: Color = Color::new(0.18, 0.55, 0.34, 1.0);
const LATCHED_HOVER: Color = Color::new(0.24, 0.70, 0.44, 1.0);

/// Panel or menu button. A latched button shows a state that is currently
/// on, like a running board or an active edit mode.
#[derive(Clone, Debug)]
pub struct Button {
    rect: Rect,
    text: String,
    latched: bool,
}

impl Button {
    pub fn new(rect: Rect, text: impl Into<String>) -> Self {
        Self {
            rect,
            text: text.into(),
            latched: false,
        }
    }

    pub fn with_latch(rect: Rect, text: impl Into<String>, latched: bool) -> Self {
        Self {
            latched,
            ..Self::new(rect, text)
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_latched(&self) -> bool {
        self.latched
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.rect.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    fn fill(&self, hovered: bool) -> Color {
        match (self.latched, hovered) {
            (false, false) => IDLE,
            (false, true) => IDLE_HOVER,
            (true, false) => LATCHED,
            (true, true) => LATCHED_HOVER,
        }
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let Rect { x, y, w, h } = self.rect;
        draw_rectangle(x, y, w, h, self.fill(self.is_hovered(mouse_pos)));
        draw_rectangle_lines(x, y, w, h, 2.0, WHITE);

        let label = measure_text(&self.text, None, 20, 1.0);
        let center = self.rect.center();
        draw_text(
            &self.text,
            center.x - label.width / 2.0,
            center.y + label.height / 2.0,
            20.0,
            WHITE,
        );
    }

    /// Left click landed on the button this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        is_mouse_button_pressed(MouseButton::Left) && self.is_hovered(mouse_pos)
    }
}
