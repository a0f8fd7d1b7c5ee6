use raylib::prelude::*;

use crate::constants::FADE_DURATION;
use crate::deck::Activate;
use crate::library::SlideSource;
use crate::theme::Palette;

use super::color;

pub struct Slide {
    pub source: SlideSource,
    texture: Option<Texture2D>,
    failed: bool,
    active: bool,
    opacity: f32,
}

impl Slide {
    pub fn new(source: SlideSource) -> Self {
        Self {
            source,
            texture: None,
            failed: false,
            active: false,
            opacity: 0.0,
        }
    }

    pub fn set_texture(&mut self, texture: Texture2D) {
        self.texture = Some(texture);
    }

    /// Dropping the texture unloads it from the GPU.
    pub fn release_texture(&mut self) {
        self.texture = None;
    }

    pub fn set_failed(&mut self) {
        self.failed = true;
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    /// Fade toward fully shown when active, fully hidden otherwise.
    pub fn update(&mut self, dt: f32) {
        let step = dt / FADE_DURATION;
        self.opacity = if self.active {
            (self.opacity + step).min(1.0)
        } else {
            (self.opacity - step).max(0.0)
        };
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle, palette: &Palette) {
        if !self.is_visible() {
            return;
        }
        let alpha = (self.opacity * 255.0) as u8;

        let Some(texture) = &self.texture else {
            // Not decoded yet, or decoding failed: draw a labelled placeholder.
            let label = if self.failed { "Unable to load" } else { "Loading..." };
            let mut fg = color(palette.foreground);
            fg.a = alpha;
            d.draw_text(
                &format!("{label}: {}", self.source.caption),
                (area.x + 20.0) as i32,
                (area.y + area.height / 2.0) as i32,
                20,
                fg,
            );
            return;
        };

        let tex_width = texture.width() as f32;
        let tex_height = texture.height() as f32;

        // Fit within 90% of the area, never upscale.
        let scale = (area.width * 0.9 / tex_width)
            .min(area.height * 0.9 / tex_height)
            .min(1.0);
        let width = tex_width * scale;
        let height = tex_height * scale;

        d.draw_texture_pro(
            texture,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(
                area.x + (area.width - width) / 2.0,
                area.y + (area.height - height) / 2.0,
                width,
                height,
            ),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::new(255, 255, 255, alpha),
        );
    }
}

impl Activate for Slide {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

/// Indicator dot under the slides.
#[derive(Debug, Default)]
pub struct Dot {
    active: bool,
}

impl Activate for Dot {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}
