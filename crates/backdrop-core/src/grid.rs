use glam::Vec2;

/// Dense uniform grid over the surface for neighbour queries.
///
/// Holds particle indices only. Uses counting sort for O(N) construction:
/// count particles per cell -> prefix sum -> scatter. Rebuilt from scratch
/// every frame; the buffers are reused between builds.
pub struct SpatialGrid {
    cell_size: f32,
    inv_cell_size: f32,
    cols: usize,
    rows: usize,
    /// cell_count[cell] = number of particles in cell
    cell_count: Vec<u32>,
    /// cell_start[cell] = index where particles for this cell begin in sorted_indices
    cell_start: Vec<u32>,
    /// Particle indices sorted by cell
    sorted_indices: Vec<u32>,
    /// Cell per particle (used during build)
    particle_cells: Vec<u32>,
}

impl SpatialGrid {
    /// Create an empty grid. `cell_size` should equal the maximum
    /// connection distance so that every pair within range sits in
    /// adjacent cells.
    pub fn new(cell_size: f32) -> Self {
        let cell_size = cell_size.max(f32::EPSILON);
        Self {
            cell_size,
            inv_cell_size: 1.0 / cell_size,
            cols: 1,
            rows: 1,
            cell_count: vec![0],
            cell_start: vec![0],
            sorted_indices: Vec::new(),
            particle_cells: Vec::new(),
        }
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Change the cell size; takes effect on the next [`build`](Self::build).
    pub fn set_cell_size(&mut self, cell_size: f32) {
        self.cell_size = cell_size.max(f32::EPSILON);
        self.inv_cell_size = 1.0 / self.cell_size;
    }

    /// Build the grid for a `width` x `height` surface from current positions.
    pub fn build(&mut self, positions: &[Vec2], width: f32, height: f32) {
        self.cols = ((width * self.inv_cell_size).ceil() as usize).max(1);
        self.rows = ((height * self.inv_cell_size).ceil() as usize).max(1);
        let cells = self.cols * self.rows;
        let count = positions.len();

        // 1. Size and clear per-cell counters
        self.cell_count.clear();
        self.cell_count.resize(cells, 0);
        self.cell_start.clear();
        self.cell_start.resize(cells, 0);
        self.particle_cells.resize(count, 0);
        self.sorted_indices.resize(count, 0);

        // 2. For each particle, compute its cell, store it, and increment count
        for (i, &pos) in positions.iter().enumerate() {
            let (col, row) = self.cell_of(pos);
            let cell = row * self.cols + col;
            self.particle_cells[i] = cell as u32;
            self.cell_count[cell] += 1;
        }

        // 3. Prefix sum on cell_count -> cell_start
        self.cell_start[0] = 0;
        for k in 1..cells {
            self.cell_start[k] = self.cell_start[k - 1] + self.cell_count[k - 1];
        }

        // 4. Scatter, reusing cell_count as the write offset
        for v in self.cell_count.iter_mut() {
            *v = 0;
        }
        for i in 0..count {
            let cell = self.particle_cells[i] as usize;
            let dst = self.cell_start[cell] + self.cell_count[cell];
            self.sorted_indices[dst as usize] = i as u32;
            self.cell_count[cell] += 1;
        }
    }

    /// Cell coordinates for a position, clamped into the grid so particles
    /// on (or past) the edges are never dropped.
    #[inline]
    pub fn cell_of(&self, pos: Vec2) -> (usize, usize) {
        let col = (pos.x * self.inv_cell_size).floor().max(0.0) as usize;
        let row = (pos.y * self.inv_cell_size).floor().max(0.0) as usize;
        (col.min(self.cols - 1), row.min(self.rows - 1))
    }

    /// Particle indices stored in one cell.
    pub fn cell(&self, col: usize, row: usize) -> &[u32] {
        if col >= self.cols || row >= self.rows {
            return &[];
        }
        let cell = row * self.cols + col;
        let start = self.cell_start[cell] as usize;
        let end = start + self.cell_count[cell] as usize;
        &self.sorted_indices[start..end]
    }

    /// Visit every particle index in the 3x3 block of cells centred on
    /// (`col`, `row`), clipped to the grid.
    pub fn for_each_neighbor<F: FnMut(u32)>(&self, col: usize, row: usize, mut callback: F) {
        for dr in -1..=1_isize {
            for dc in -1..=1_isize {
                let r = row as isize + dr;
                let c = col as isize + dc;
                if r < 0 || c < 0 {
                    continue;
                }
                for &idx in self.cell(c as usize, r as usize) {
                    callback(idx);
                }
            }
        }
    }

    /// Collecting variant of [`for_each_neighbor`](Self::for_each_neighbor).
    pub fn neighbors(&self, col: usize, row: usize) -> Vec<u32> {
        let mut out = Vec::new();
        self.for_each_neighbor(col, row, |idx| out.push(idx));
        out
    }
}
