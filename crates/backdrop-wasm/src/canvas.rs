use backdrop_core::render::{Painter, RadialGradient, Rgba};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys::{CanvasGradient, CanvasRenderingContext2d};

/// [`Painter`] over a browser 2D canvas context.
pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn gradient(&self, g: &RadialGradient) -> Result<CanvasGradient, JsValue> {
        let (cx, cy) = (g.center.x as f64, g.center.y as f64);
        let grad = self.ctx.create_radial_gradient(
            cx,
            cy,
            g.inner_radius as f64,
            cx,
            cy,
            g.outer_radius as f64,
        )?;
        for stop in &g.stops {
            grad.add_color_stop(stop.offset, &stop.color.to_string())?;
        }
        Ok(grad)
    }
}

impl Painter for CanvasPainter {
    type Error = JsValue;

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
        Ok(())
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
        Ok(())
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)?;
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill();
        Ok(())
    }

    fn fill_gradient_circle(&mut self, gradient: &RadialGradient, radius: f32) -> Result<(), JsValue> {
        let grad = self.gradient(gradient)?;
        self.ctx.begin_path();
        self.ctx.arc(
            gradient.center.x as f64,
            gradient.center.y as f64,
            radius.max(0.0) as f64,
            0.0,
            TAU,
        )?;
        self.ctx.set_fill_style_canvas_gradient(&grad);
        self.ctx.fill();
        Ok(())
    }

    fn fill_gradient_rect(
        &mut self,
        gradient: &RadialGradient,
        origin: Vec2,
        size: Vec2,
    ) -> Result<(), JsValue> {
        let grad = self.gradient(gradient)?;
        self.ctx.set_fill_style_canvas_gradient(&grad);
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
        Ok(())
    }
}
