//! Convolution kernels
//!
//! Square, odd-sized weight matrices with the origin at the centre element.
//! Two families are built here:
//!
//! - Gaussian kernels, normalized so the weights sum to 1
//! - The fixed 3x3 sharpen / edge-detect pattern, left unnormalized:
//!
//! ```text
//!  0 -1  0
//! -1  k -1      k = 5 (sharpen) or 4 (edge detect)
//!  0 -1  0
//! ```

use crate::{FilterError, FilterResult};
use std::f64::consts::PI;

/// Centre weight selection for [`Kernel::fixed_pattern`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedPattern {
    /// Centre weight 5: the image plus its Laplacian
    Sharpen,
    /// Centre weight 4: the Laplacian alone
    EdgeDetect,
}

impl FixedPattern {
    fn center_weight(self) -> f64 {
        match self {
            FixedPattern::Sharpen => 5.0,
            FixedPattern::EdgeDetect => 4.0,
        }
    }
}

/// A square 2D convolution kernel
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Side length (odd)
    size: u32,
    /// Kernel data (row-major order)
    data: Vec<f64>,
}

impl Kernel {
    /// Create a zero kernel with side `size`.
    ///
    /// # Errors
    ///
    /// [`FilterError::InvalidKernel`] if `size` is zero or even, or if
    /// `size²` overflows; [`FilterError::Core`] if the weights cannot be
    /// allocated.
    pub fn new(size: u32) -> FilterResult<Self> {
        let len = element_count(size)?;
        let mut data: Vec<f64> = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| pixkit_core::Error::AllocationFailed(len))?;
        data.resize(len, 0.0);
        Ok(Kernel { size, data })
    }

    /// Create a kernel from row-major values.
    pub fn from_slice(size: u32, data: &[f64]) -> FilterResult<Self> {
        let expected = element_count(size)?;
        if data.len() != expected {
            return Err(FilterError::InvalidKernel(format!(
                "expected {} values for a {}x{} kernel, got {}",
                expected,
                size,
                size,
                data.len()
            )));
        }
        Ok(Kernel {
            size,
            data: data.to_vec(),
        })
    }

    /// Create a normalized Gaussian kernel.
    ///
    /// Raw weights are `exp(-(dx² + dy²) / (2σ²)) / (2πσ²)` for offsets from
    /// the centre; the matrix is then divided by the raw sum.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameters`] if `size` is zero or even,
    /// or if `sigma` is not a positive finite number.
    pub fn gaussian(size: u32, sigma: f64) -> FilterResult<Self> {
        if !(sigma > 0.0 && sigma.is_finite()) {
            return Err(FilterError::InvalidParameters(format!(
                "sigma must be positive, got {sigma}"
            )));
        }
        let mut kernel = Self::new(size).map_err(|e| match e {
            FilterError::InvalidKernel(_) => FilterError::InvalidParameters(format!(
                "kernel size must be odd and positive, got {size}"
            )),
            other => other,
        })?;

        let two_sigma_sq = 2.0 * sigma * sigma;
        let center = (size / 2) as i64;
        for y in 0..size {
            for x in 0..size {
                let dx = x as i64 - center;
                let dy = y as i64 - center;
                let r2 = (dx * dx + dy * dy) as f64;
                kernel.set(x, y, (-r2 / two_sigma_sq).exp() / (PI * two_sigma_sq));
            }
        }
        kernel.normalize();
        Ok(kernel)
    }

    /// Create the 3x3 cross pattern with the given centre weight.
    ///
    /// Positions where `row + col` is even are 0, the rest are -1, and the
    /// centre is overwritten with 5 or 4.
    pub fn fixed_pattern(pattern: FixedPattern) -> Self {
        let mut data = vec![0.0; 9];
        for row in 0..3 {
            for col in 0..3 {
                data[row * 3 + col] = if (row + col) % 2 == 0 { 0.0 } else { -1.0 };
            }
        }
        data[4] = pattern.center_weight();
        Kernel { size: 3, data }
    }

    /// Create the sharpening kernel (centre 5).
    pub fn sharpen() -> Self {
        Self::fixed_pattern(FixedPattern::Sharpen)
    }

    /// Create the edge-detection kernel (centre 4).
    pub fn edge_detect() -> Self {
        Self::fixed_pattern(FixedPattern::EdgeDetect)
    }

    /// Get the side length.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Distance from the centre to an edge (`size / 2`).
    #[inline]
    pub fn radius(&self) -> u32 {
        self.size / 2
    }

    /// Get the kernel data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Get the weight at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        if x < self.size && y < self.size {
            Some(self.data[self.index(x, y)])
        } else {
            None
        }
    }

    /// Set the weight at column `x`, row `y`. Out-of-range writes are ignored.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f64) {
        if x < self.size && y < self.size {
            let i = self.index(x, y);
            self.data[i] = value;
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.size as usize + x as usize
    }

    /// Normalize the kernel so that values sum to 1.
    ///
    /// Kernels whose sum is zero are left unchanged.
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum != 0.0 {
            for v in &mut self.data {
                *v /= sum;
            }
        }
    }

    /// Get the sum of all kernel values.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }
}

/// Number of weights in a `size x size` kernel.
fn element_count(size: u32) -> FilterResult<usize> {
    if size == 0 || size % 2 == 0 {
        return Err(FilterError::InvalidKernel(format!(
            "kernel size must be odd and positive, got {size}"
        )));
    }
    (size as usize)
        .checked_mul(size as usize)
        .ok_or_else(|| FilterError::InvalidKernel(format!("kernel size {size} overflows")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gaussian_sums_to_one() {
        for size in [1u32, 3, 5, 7, 9, 15, 31] {
            for sigma in [0.1, 0.5, 1.0, 2.5, 10.0] {
                let k = Kernel::gaussian(size, sigma).unwrap();
                assert!(
                    (k.sum() - 1.0).abs() < 1e-9,
                    "size {size} sigma {sigma}: sum {}",
                    k.sum()
                );
            }
        }
    }

    #[test]
    fn test_gaussian_unit_kernel() {
        let k = Kernel::gaussian(1, 1.0).unwrap();
        assert_eq!(k.size(), 1);
        assert_eq!(k.data(), &[1.0]);
    }

    #[test]
    fn test_gaussian_symmetric_and_peaked() {
        let k = Kernel::gaussian(5, 1.2).unwrap();
        let c = k.get(2, 2).unwrap();
        for y in 0..5 {
            for x in 0..5 {
                let v = k.get(x, y).unwrap();
                assert!(v <= c);
                assert!((v - k.get(4 - x, y).unwrap()).abs() < 1e-15);
                assert!((v - k.get(y, x).unwrap()).abs() < 1e-15);
            }
        }
    }

    #[test]
    fn test_gaussian_invalid_params() {
        assert!(matches!(
            Kernel::gaussian(0, 1.0),
            Err(FilterError::InvalidParameters(_))
        ));
        assert!(Kernel::gaussian(4, 1.0).is_err());
        assert!(Kernel::gaussian(3, 0.0).is_err());
        assert!(Kernel::gaussian(3, -1.0).is_err());
        assert!(Kernel::gaussian(3, f64::NAN).is_err());
        assert!(Kernel::gaussian(3, f64::INFINITY).is_err());
    }

    #[test]
    fn test_fixed_patterns() {
        assert_eq!(
            Kernel::sharpen().data(),
            &[0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0]
        );
        assert_eq!(
            Kernel::edge_detect().data(),
            &[0.0, -1.0, 0.0, -1.0, 4.0, -1.0, 0.0, -1.0, 0.0]
        );
        assert_eq!(Kernel::edge_detect().sum(), 0.0);
        assert_eq!(Kernel::sharpen().sum(), 1.0);
    }

    #[test]
    fn test_from_slice_validation() {
        assert!(Kernel::from_slice(3, &[0.0; 9]).is_ok());
        assert!(matches!(
            Kernel::from_slice(3, &[0.0; 8]),
            Err(FilterError::InvalidKernel(_))
        ));
        assert!(Kernel::from_slice(2, &[0.0; 4]).is_err());
    }

    #[test]
    fn test_get_set_and_normalize() {
        let mut k = Kernel::new(3).unwrap();
        assert_eq!(k.radius(), 1);
        k.set(0, 0, 2.0);
        k.set(2, 2, 6.0);
        k.set(3, 3, 100.0);
        assert_eq!(k.get(3, 3), None);
        assert_eq!(k.sum(), 8.0);
        k.normalize();
        assert_eq!(k.get(0, 0), Some(0.25));
        assert_eq!(k.get(2, 2), Some(0.75));
    }

    #[test]
    fn test_huge_sizes_fail_cleanly() {
        assert!(matches!(
            Kernel::from_slice(65537, &[1.0]),
            Err(FilterError::InvalidKernel(_))
        ));
        assert!(matches!(
            Kernel::from_slice(u32::MAX, &[1.0]),
            Err(FilterError::InvalidKernel(_))
        ));
        assert!(matches!(
            Kernel::new(u32::MAX),
            Err(FilterError::Core(pixkit_core::Error::AllocationFailed(_)))
        ));
        assert!(matches!(
            Kernel::gaussian(u32::MAX, 1.0),
            Err(FilterError::Core(pixkit_core::Error::AllocationFailed(_)))
        ));
    }
}
