use glam::Vec2;

/// Pixel dimensions of the drawable surface.
///
/// `width`/`height` are in device pixels (client size times the capped
/// device pixel ratio); every simulation distance is measured in this space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceMetrics {
    pub width: f32,
    pub height: f32,
    pub dpr: f32,
}

impl SurfaceMetrics {
    /// Derive metrics from the element's client size and the host's device
    /// pixel ratio, capping the ratio at `max_dpr`.
    ///
    /// A non-finite or non-positive ratio is treated as 1.
    pub fn from_client(client_width: f32, client_height: f32, device_pixel_ratio: f32, max_dpr: f32) -> Self {
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio.min(max_dpr)
        } else {
            1.0
        };
        Self {
            width: client_width.max(0.0) * dpr,
            height: client_height.max(0.0) * dpr,
            dpr,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Backing buffer size in whole pixels.
    pub fn buffer_size(&self) -> (u32, u32) {
        (self.width as u32, self.height as u32)
    }

    /// Convert a client-space point (CSS px) into device pixels.
    pub fn to_device(&self, client_x: f32, client_y: f32) -> Vec2 {
        Vec2::new(client_x, client_y) * self.dpr
    }
}

impl Default for SurfaceMetrics {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            dpr: 1.0,
        }
    }
}
