/// A pixel position. Signed so that pointer positions left of or above the
/// image can be represented and rejected by [`locate_cell`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A grid cell in original-image pixel coordinates.
///
/// `x2`/`y2` are the start of the next cell, so `x2 - x1` is the cell width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl CellRect {
    pub fn width(&self) -> u32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> u32 {
        self.y2 - self.y1
    }

    /// Inclusive on all four edges.
    pub fn contains(&self, p: Point) -> bool {
        let (x, y) = (i64::from(p.x), i64::from(p.y));
        i64::from(self.x1) <= x
            && x <= i64::from(self.x2)
            && i64::from(self.y1) <= y
            && y <= i64::from(self.y2)
    }

    pub fn center(&self) -> Point {
        Point::new(
            ((self.x1 + self.x2) / 2) as i32,
            ((self.y1 + self.y2) / 2) as i32,
        )
    }
}

/// Compute the row-major cell rectangles for an image.
///
/// Cell sizes use truncating division, so when `width`/`height` are not
/// multiples of `cols`/`rows` the strip past `cols * cell_w` (or
/// `rows * cell_h`) belongs to no cell. `rows` and `cols` must be non-zero.
pub fn compute_cells(width: u32, height: u32, rows: u32, cols: u32) -> Vec<CellRect> {
    let cell_w = width / cols;
    let cell_h = height / rows;

    let mut cells = Vec::with_capacity(rows as usize * cols as usize);
    for row in 0..rows {
        for col in 0..cols {
            let x1 = col * cell_w;
            let y1 = row * cell_h;
            cells.push(CellRect {
                x1,
                y1,
                x2: x1 + cell_w,
                y2: y1 + cell_h,
            });
        }
    }
    cells
}

/// Index of the first cell (row-major) containing `point`.
pub fn locate_cell(point: Point, cells: &[CellRect]) -> Option<usize> {
    cells.iter().position(|c| c.contains(point))
}

/// Grid layout of a single image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridGeometry {
    pub rows: u32,
    pub cols: u32,
    pub cells: Vec<CellRect>,
}

impl GridGeometry {
    pub fn new(width: u32, height: u32, rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            cells: compute_cells(width, height, rows, cols),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell(&self, index: usize) -> Option<&CellRect> {
        self.cells.get(index)
    }

    pub fn locate(&self, point: Point) -> Option<usize> {
        locate_cell(point, &self.cells)
    }
}
