//! Boundary handling for neighbourhood operations
//!
//! Every filter that reads pixels around a target pixel (convolution, rank
//! filtering, bicubic sampling) asks this module where an out-of-range
//! neighbour should be read from.
//!
//! Two policies are provided:
//!
//! - [`BorderMode::Clamp`] replicates the nearest edge sample. This is the
//!   default everywhere.
//! - [`BorderMode::Mirror`] reflects about the edge sample without repeating
//!   it (`-1 -> 1`, `len -> len - 2`).

/// Border policy used when a neighbour coordinate falls outside the image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderMode {
    /// Replicate the nearest edge sample
    #[default]
    Clamp,
    /// Reflect about the edge sample (edge not repeated)
    Mirror,
}

impl BorderMode {
    /// Map `coord` onto `[0, len - 1]` according to this policy.
    ///
    /// Total over all `i64` inputs. A zero-length axis maps everything to 0.
    #[inline]
    pub fn resolve(self, coord: i64, len: u32) -> u32 {
        match self {
            BorderMode::Clamp => clamp_coord(coord, len),
            BorderMode::Mirror => mirror_coord(coord, len),
        }
    }
}

/// Clamp-to-edge: negative coordinates map to 0, coordinates at or past
/// `len` map to `len - 1`.
#[inline]
pub fn clamp_coord(coord: i64, len: u32) -> u32 {
    if len == 0 || coord < 0 {
        0
    } else if coord >= len as i64 {
        len - 1
    } else {
        coord as u32
    }
}

/// Mirror reflection about the edge samples, periodic with `2 * (len - 1)`.
#[inline]
pub fn mirror_coord(coord: i64, len: u32) -> u32 {
    if len <= 1 {
        return 0;
    }
    if (0..len as i64).contains(&coord) {
        return coord as u32;
    }
    let period = 2 * (len as i64 - 1);
    let m = coord.rem_euclid(period);
    let reflected = if m < len as i64 { m } else { period - m };
    reflected as u32
}
