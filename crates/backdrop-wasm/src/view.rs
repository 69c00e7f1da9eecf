use backdrop_core::transition::{ProjectTransition, ViewState};
use wasm_bindgen::prelude::*;

/// Projects section grid/detail transition, driven by page timestamps (ms).
#[wasm_bindgen]
#[derive(Default)]
pub struct ProjectView {
    inner: ProjectTransition,
}

#[wasm_bindgen]
impl ProjectView {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ProjectView {
        ProjectView::default()
    }

    #[wasm_bindgen]
    pub fn select(&mut self, project: usize, now_ms: f64) -> bool {
        self.inner.select(project, seconds(now_ms))
    }

    #[wasm_bindgen]
    pub fn back(&mut self, now_ms: f64) -> bool {
        self.inner.back(seconds(now_ms))
    }

    #[wasm_bindgen]
    pub fn advance(&mut self, now_ms: f64) -> bool {
        self.inner.advance(seconds(now_ms))
    }

    /// One of `"grid"`, `"exiting"`, `"entering"`, `"detail"`.
    #[wasm_bindgen]
    pub fn state(&self) -> String {
        match self.inner.state() {
            ViewState::Grid => "grid",
            ViewState::Exiting => "exiting",
            ViewState::Entering => "entering",
            ViewState::Detail => "detail",
        }
        .to_string()
    }

    #[wasm_bindgen]
    pub fn selected(&self) -> Option<usize> {
        self.inner.selected()
    }

    #[wasm_bindgen]
    pub fn shows_grid(&self) -> bool {
        self.inner.shows_grid()
    }
}

fn seconds(ms: f64) -> f64 {
    ms / 1000.0
}
