#![allow(dead_code)]

use backdrop_core::render::{Painter, RadialGradient, Rgba};
use glam::Vec2;

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Rect { origin: Vec2, size: Vec2, color: Rgba },
    Line { from: Vec2, to: Vec2, width: f32, color: Rgba },
    Circle { center: Vec2, radius: f32, color: Rgba },
    GradientCircle { gradient: RadialGradient, radius: f32 },
    GradientRect { gradient: RadialGradient, origin: Vec2, size: Vec2 },
}

/// Painter that records every call. Optionally fails on the n-th call.
#[derive(Default)]
pub struct RecordingPainter {
    pub calls: Vec<DrawCall>,
    pub fail_after: Option<usize>,
}

impl RecordingPainter {
    pub fn failing_after(n: usize) -> Self {
        Self {
            calls: Vec::new(),
            fail_after: Some(n),
        }
    }

    pub fn lines(&self) -> Vec<(Vec2, Vec2, Rgba)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Line { from, to, color, .. } => Some((*from, *to, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn circles(&self) -> Vec<(Vec2, f32, Rgba)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Circle { center, radius, color } => Some((*center, *radius, *color)),
                _ => None,
            })
            .collect()
    }

    fn record(&mut self, call: DrawCall) -> Result<(), String> {
        if let Some(n) = self.fail_after {
            if self.calls.len() >= n {
                return Err("context lost".to_string());
            }
        }
        self.calls.push(call);
        Ok(())
    }
}

impl Painter for RecordingPainter {
    type Error = String;

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) -> Result<(), String> {
        self.record(DrawCall::Rect { origin, size, color })
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) -> Result<(), String> {
        self.record(DrawCall::Line { from, to, width, color })
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) -> Result<(), String> {
        self.record(DrawCall::Circle { center, radius, color })
    }

    fn fill_gradient_circle(&mut self, gradient: &RadialGradient, radius: f32) -> Result<(), String> {
        self.record(DrawCall::GradientCircle {
            gradient: gradient.clone(),
            radius,
        })
    }

    fn fill_gradient_rect(
        &mut self,
        gradient: &RadialGradient,
        origin: Vec2,
        size: Vec2,
    ) -> Result<(), String> {
        self.record(DrawCall::GradientRect {
            gradient: gradient.clone(),
            origin,
            size,
        })
    }
}
