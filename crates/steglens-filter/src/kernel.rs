//! Correlation kernels
//!
//! A kernel is a square `side x side` grid of weights stored row-major.
//! Weight `i` sits at offset `(i % side - side / 2, i / side - side / 2)`
//! from the output position, so odd kernels are centred and even kernels
//! lean towards the top-left.

use crate::{FilterError, FilterResult};

/// A square correlation kernel
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Side length
    side: u32,
    /// Weights (row-major order)
    data: Vec<f64>,
}

impl Kernel {
    /// Create a kernel from a slice of weights.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if `side` is 0 or
    /// `data.len() != side * side`.
    ///
    /// # Examples
    ///
    /// ```
    /// use steglens_filter::Kernel;
    ///
    /// let k = Kernel::from_slice(2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(k.get(1, 0), Some(2.0));
    /// assert!(Kernel::from_slice(2, &[1.0]).is_err());
    /// ```
    pub fn from_slice(side: u32, data: &[f64]) -> FilterResult<Self> {
        check_side(side)?;
        let expected = (side as usize) * (side as usize);
        if data.len() != expected {
            return Err(FilterError::InvalidKernel(format!(
                "expected {} weights for a {}x{} kernel, got {}",
                expected,
                side,
                side,
                data.len()
            )));
        }
        Ok(Kernel {
            side,
            data: data.to_vec(),
        })
    }

    /// Create a box (averaging) kernel.
    ///
    /// All values are `1/(side*side)`. Even sides are accepted.
    pub fn box_blur(side: u32) -> FilterResult<Self> {
        check_side(side)?;
        let n = (side as usize) * (side as usize);
        Ok(Kernel {
            side,
            data: vec![1.0 / n as f64; n],
        })
    }

    /// Create an identity kernel: a single 1 at the centre.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] for a zero or even side.
    pub fn identity(side: u32) -> FilterResult<Self> {
        check_odd_side(side)?;
        let n = (side as usize) * (side as usize);
        let mut data = vec![0.0; n];
        data[n / 2] = 1.0;
        Ok(Kernel { side, data })
    }

    /// Create an unsharp kernel, `2 * identity - box_blur`.
    ///
    /// The weights sum to 1, so flat regions keep their value.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] for a zero or even side.
    pub fn unsharp(side: u32) -> FilterResult<Self> {
        let identity = Self::identity(side)?;
        let blur = Self::box_blur(side)?;
        let data = identity
            .data
            .iter()
            .zip(&blur.data)
            .map(|(&i, &b)| 2.0 * i - b)
            .collect();
        Ok(Kernel { side, data })
    }

    /// Sobel kernel responding to horizontal gradients.
    pub fn sobel_x() -> Self {
        Kernel {
            side: 3,
            data: vec![-1.0, 0.0, 1.0, -2.0, 0.0, 2.0, -1.0, 0.0, 1.0],
        }
    }

    /// Sobel kernel responding to vertical gradients.
    pub fn sobel_y() -> Self {
        Kernel {
            side: 3,
            data: vec![-1.0, -2.0, -1.0, 0.0, 0.0, 0.0, 1.0, 2.0, 1.0],
        }
    }

    /// Get the side length.
    #[inline]
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Get the centre coordinate (same on both axes).
    #[inline]
    pub fn center(&self) -> u32 {
        self.side / 2
    }

    /// Get the kernel weights.
    pub fn weights(&self) -> &[f64] {
        &self.data
    }

    /// Get the weight at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        if x < self.side && y < self.side {
            Some(self.data[y as usize * self.side as usize + x as usize])
        } else {
            None
        }
    }

    /// Offset `(dx, dy)` of weight `i` relative to the output position.
    #[inline]
    pub fn offset(&self, i: usize) -> (i64, i64) {
        let side = self.side as usize;
        let c = i64::from(self.center());
        ((i % side) as i64 - c, (i / side) as i64 - c)
    }

    /// Get the sum of all weights.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }
}

fn check_side(side: u32) -> FilterResult<()> {
    if side == 0 {
        return Err(FilterError::InvalidKernel(
            "side must be at least 1".into(),
        ));
    }
    Ok(())
}

fn check_odd_side(side: u32) -> FilterResult<()> {
    check_side(side)?;
    if side % 2 == 0 {
        return Err(FilterError::InvalidKernel(format!(
            "side must be odd, got {}",
            side
        )));
    }
    Ok(())
}
