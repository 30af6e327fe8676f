use image::Rgb;

use crate::error::{Result, VoxelError};
use crate::preprocess;

// Row-major 2D grid of samples, indexed as `cells[y * width + x]`
#[derive(Debug, Clone, PartialEq)]
pub struct SampleField<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

// Number of cells in a width x height grid, rejecting empty and overflowing sizes
pub fn cell_count(width: usize, height: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(VoxelError::EmptyField { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(VoxelError::FieldTooLarge { width, height })
}

impl<T: Copy> SampleField<T> {
    pub fn new(width: usize, height: usize, cells: Vec<T>) -> Result<Self> {
        let expected = cell_count(width, height)?;
        if cells.len() != expected {
            return Err(VoxelError::DataLength {
                width,
                height,
                expected,
                actual: cells.len(),
            });
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn filled(width: usize, height: usize, value: T) -> Result<Self> {
        let count = cell_count(width, height)?;
        Self::new(width, height, vec![value; count])
    }

    // Build a field by evaluating `f(x, y)` for every cell
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Result<Self> {
        let mut cells = Vec::with_capacity(cell_count(width, height)?);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self::new(width, height, cells)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    // Exact lookup. Indices outside the grid are a caller bug and panic.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        assert!(
            x < self.width && y < self.height,
            "sample ({x}, {y}) outside {}x{} field",
            self.width,
            self.height
        );
        self.cells[y * self.width + x]
    }

    // World-coordinate lookup with modulo wrap on both axes.
    // Coordinates are floored, so -0.5 lands in the last column, not in column 0.
    #[inline]
    pub fn wrapped(&self, x: f64, y: f64) -> T {
        let ix = (x.floor() as i64).rem_euclid(self.width as i64) as usize;
        let iy = (y.floor() as i64).rem_euclid(self.height as i64) as usize;
        self.cells[iy * self.width + ix]
    }
}

// A height field and the color field draped over it, always the same size
#[derive(Debug, Clone, PartialEq)]
pub struct Terrain {
    heights: SampleField<u8>,
    colors: SampleField<Rgb<u8>>,
}

impl Terrain {
    pub fn new(heights: SampleField<u8>, colors: SampleField<Rgb<u8>>) -> Result<Self> {
        if heights.dims() != colors.dims() {
            return Err(VoxelError::FieldMismatch {
                height_dims: heights.dims(),
                color_dims: colors.dims(),
            });
        }
        Ok(Self { heights, colors })
    }

    // Constant height and color everywhere
    pub fn flat(width: usize, height: usize, elevation: u8, color: Rgb<u8>) -> Result<Self> {
        Self::new(
            SampleField::filled(width, height, elevation)?,
            SampleField::filled(width, height, color)?,
        )
    }

    pub fn heights(&self) -> &SampleField<u8> {
        &self.heights
    }

    pub fn colors(&self) -> &SampleField<Rgb<u8>> {
        &self.colors
    }

    pub fn width(&self) -> usize {
        self.heights.width()
    }

    pub fn height(&self) -> usize {
        self.heights.height()
    }

    #[inline]
    pub fn height_at(&self, x: f64, y: f64) -> u8 {
        self.heights.wrapped(x, y)
    }

    #[inline]
    pub fn color_at(&self, x: f64, y: f64) -> Rgb<u8> {
        self.colors.wrapped(x, y)
    }

    // Replicate both fields factor x factor times
    pub fn tile(&self, factor: usize) -> Result<Terrain> {
        Ok(Terrain {
            heights: preprocess::tile(&self.heights, factor)?,
            colors: preprocess::tile(&self.colors, factor)?,
        })
    }

    // Nearest-neighbour enlargement of both fields
    pub fn upsample(&self, factor: usize) -> Result<Terrain> {
        Ok(Terrain {
            heights: preprocess::upsample(&self.heights, factor)?,
            colors: preprocess::upsample(&self.colors, factor)?,
        })
    }
}
