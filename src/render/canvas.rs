//! Canvas 2D implementation of the drawing surface

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::{Color, Surface, TextAlign};

const FONT_FAMILY: &str = "'Press Start 2P', monospace";

/// A browser canvas 2D context wrapped as a [`Surface`]
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f32,
    height: f32,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d, width: f32, height: f32) -> Self {
        Self { ctx, width, height }
    }

    /// Track a resized backing store
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx
            .fill_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    fn set_fill(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&color.css());
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(cx as f64, cy as f64, r as f64, 0.0, TAU);
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, size_px: f32, align: TextAlign) {
        self.ctx.set_font(&format!("{size_px}px {FONT_FAMILY}"));
        self.ctx.set_text_align(match align {
            TextAlign::Start => "start",
            TextAlign::Center => "center",
        });
        let _ = self.ctx.fill_text(text, x as f64, y as f64);
    }
}
