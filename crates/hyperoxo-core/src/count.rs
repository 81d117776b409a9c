//! Closed-form counts for hypercube lines.
//!
//! Let `h(d, n)` be the grid with `d` axes and `n` cells per axis. A line
//! whose `k` varying axes are chosen from the `d` axes can be placed in
//! `n^(d-k)` ways (one per assignment of the fixed axes), and the
//! `k`-dimensional sub-grid it lives in has `2^k` corners joined pairwise by
//! `2^(k-1)` diagonals. Summing over `k`:
//!
//! ```text
//! num_lines(d, n) = Σ_{k=1}^{d} C(d, k) · n^(d-k) · 2^(k-1)
//! ```
//!
//! For a 2×2 grid this gives `4` axis-aligned lines plus `2` diagonals.
//!
//! All functions use checked arithmetic and return `None` on overflow.

/// Computes `base^exp`, or `None` on overflow.
///
/// # Examples
///
/// ```
/// use hyperoxo_core::count::checked_pow;
///
/// assert_eq!(checked_pow(3, 4), Some(81));
/// assert_eq!(checked_pow(1, usize::MAX), Some(1));
/// assert_eq!(checked_pow(2, 200), None);
/// ```
#[must_use]
pub fn checked_pow(base: usize, exp: usize) -> Option<usize> {
    if base <= 1 || exp == 0 {
        return Some(if exp == 0 { 1 } else { base });
    }
    // With base >= 2 this overflows within usize::BITS iterations.
    let mut acc: usize = 1;
    for _ in 0..exp {
        acc = acc.checked_mul(base)?;
    }
    Some(acc)
}

/// Computes the binomial coefficient `C(n, k)`, or `None` on overflow.
///
/// # Examples
///
/// ```
/// use hyperoxo_core::count::binomial;
///
/// assert_eq!(binomial(4, 2), Some(6));
/// assert_eq!(binomial(3, 5), Some(0));
/// ```
#[must_use]
pub fn binomial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // acc * (n - i) is divisible by (i + 1) at every step.
        acc = acc.checked_mul(u128::try_from(n - i).ok()?)? / u128::try_from(i + 1).ok()?;
    }
    usize::try_from(acc).ok()
}

/// Number of lines in `h(dim, size)` that vary along exactly `extent` axes.
///
/// # Examples
///
/// ```
/// use hyperoxo_core::count::num_lines_with_extent;
///
/// // 3×3×3: 27 axis-aligned lines, 18 face diagonals, 4 space diagonals.
/// assert_eq!(num_lines_with_extent(3, 3, 1), Some(27));
/// assert_eq!(num_lines_with_extent(3, 3, 2), Some(18));
/// assert_eq!(num_lines_with_extent(3, 3, 3), Some(4));
/// assert_eq!(num_lines_with_extent(3, 3, 0), Some(0));
/// ```
#[must_use]
pub fn num_lines_with_extent(dim: usize, size: usize, extent: usize) -> Option<usize> {
    if extent == 0 || extent > dim {
        return Some(0);
    }
    num_slices_with_extent(dim, size, extent)?.checked_mul(num_diagonals(extent)?)
}

/// Number of `extent`-dimensional slices of `h(dim, size)`.
///
/// This is the number of (axis set, fixed assignment) pairs with `extent` varying axes.
#[must_use]
pub fn num_slices_with_extent(dim: usize, size: usize, extent: usize) -> Option<usize> {
    if extent > dim {
        return Some(0);
    }
    binomial(dim, extent)?.checked_mul(checked_pow(size, dim - extent)?)
}

/// Number of diagonals of a `extent`-dimensional sub-grid, `2^(extent-1)`.
///
/// A 0-dimensional sub-grid has no diagonals.
#[must_use]
pub fn num_diagonals(extent: usize) -> Option<usize> {
    match extent {
        0 => Some(0),
        _ => checked_pow(2, extent - 1),
    }
}

/// Total number of lines in `h(dim, size)`.
///
/// # Examples
///
/// ```
/// use hyperoxo_core::count::num_lines;
///
/// assert_eq!(num_lines(2, 3), Some(8));
/// assert_eq!(num_lines(3, 4), Some(76));
/// assert_eq!(num_lines(1, 5), Some(1));
/// ```
#[must_use]
pub fn num_lines(dim: usize, size: usize) -> Option<usize> {
    (1..=dim).try_fold(0usize, |acc, extent| {
        acc.checked_add(num_lines_with_extent(dim, size, extent)?)
    })
}

/// Total number of (axis set, fixed assignment) pairs in `h(dim, size)`.
#[must_use]
pub fn num_slices(dim: usize, size: usize) -> Option<usize> {
    (1..=dim).try_fold(0usize, |acc, extent| {
        acc.checked_add(num_slices_with_extent(dim, size, extent)?)
    })
}
