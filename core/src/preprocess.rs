use crate::error::{Result, VoxelError};
use crate::field::{SampleField, cell_count};

// Replicate `field` into a factor x factor grid of copies.
// Trades factor^2 memory for dropping the modulo from the render loop:
// any coordinate inside the enlarged grid maps straight to a cell.
pub fn tile<T: Copy>(field: &SampleField<T>, factor: usize) -> Result<SampleField<T>> {
    if factor == 0 {
        return Err(VoxelError::ZeroFactor { what: "tile" });
    }
    let (w, h) = field.dims();
    let (tw, th) = scaled_dims(w, h, factor)?;
    let src = field.cells();

    let mut cells = Vec::with_capacity(cell_count(tw, th)?);
    for _ in 0..factor {
        for y in 0..h {
            let row = &src[y * w..(y + 1) * w];
            for _ in 0..factor {
                cells.extend_from_slice(row);
            }
        }
    }

    SampleField::new(tw, th, cells)
}

// Nearest-neighbour supersampling: every source cell becomes a
// factor x factor block
pub fn upsample<T: Copy>(field: &SampleField<T>, factor: usize) -> Result<SampleField<T>> {
    if factor == 0 {
        return Err(VoxelError::ZeroFactor { what: "upsample" });
    }
    let (uw, uh) = scaled_dims(field.width(), field.height(), factor)?;
    SampleField::from_fn(uw, uh, |x, y| field.get(x / factor, y / factor))
}

fn scaled_dims(width: usize, height: usize, factor: usize) -> Result<(usize, usize)> {
    match (width.checked_mul(factor), height.checked_mul(factor)) {
        (Some(w), Some(h)) => {
            cell_count(w, h)?;
            Ok((w, h))
        }
        _ => Err(VoxelError::FieldTooLarge {
            width: width.saturating_mul(factor),
            height: height.saturating_mul(factor),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{tile, upsample};
    use crate::error::VoxelError;
    use crate::field::SampleField;

    fn ramp() -> SampleField<u8> {
        SampleField::from_fn(3, 2, |x, y| (y * 3 + x) as u8).unwrap()
    }

    #[test]
    fn tile_dimensions() {
        let t = tile(&ramp(), 3).unwrap();
        assert_eq!(t.dims(), (9, 6));
    }

    #[test]
    fn tile_preserves_content_in_every_copy() {
        let src = ramp();
        let t = tile(&src, 3).unwrap();
        for y in 0..t.height() {
            for x in 0..t.width() {
                assert_eq!(t.get(x, y), src.get(x % 3, y % 2), "cell ({x}, {y})");
            }
        }
    }

    #[test]
    fn tile_factor_one_is_identity() {
        assert_eq!(tile(&ramp(), 1).unwrap(), ramp());
    }

    #[test]
    fn upsample_blocks() {
        let u = upsample(&ramp(), 2).unwrap();
        assert_eq!(u.dims(), (6, 4));
        assert_eq!(u.get(0, 0), 0);
        assert_eq!(u.get(1, 1), 0);
        assert_eq!(u.get(2, 0), 1);
        assert_eq!(u.get(5, 3), 5);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn oversized_factor_is_rejected() {
        let huge = usize::MAX / 2;
        assert!(matches!(
            tile(&ramp(), huge),
            Err(VoxelError::FieldTooLarge { .. })
        ));
        // each axis fits on its own, the cell count does not
        assert!(matches!(
            upsample(&ramp(), 1 << 31),
            Err(VoxelError::FieldTooLarge { .. })
        ));
    }

    #[test]
    fn zero_factor_is_rejected() {
        assert_eq!(
            tile(&ramp(), 0).unwrap_err(),
            VoxelError::ZeroFactor { what: "tile" }
        );
        assert_eq!(
            upsample(&ramp(), 0).unwrap_err(),
            VoxelError::ZeroFactor { what: "upsample" }
        );
    }
}
