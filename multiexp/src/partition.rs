//! Splitting a base vector into blocks of a fixed width.

use core::ops::Range;

use crate::errors::Error;

/// Layout of `len` bases in `ceil(len / width)` contiguous blocks.
///
/// Every block has `width` bases except possibly the last, which holds the
/// remaining `len - (blocks - 1) * width` bases. When `len < width` there is
/// a single block narrower than `width`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BlockPartition {
    len: usize,
    width: usize,
    blocks: usize,
}

impl BlockPartition {
    pub fn new(len: usize, width: usize) -> Result<Self, Error> {
        if len == 0 {
            return Err(Error::EmptyInput);
        }
        if width == 0 {
            return Err(Error::ZeroBlockWidth);
        }
        Ok(Self {
            len,
            width,
            blocks: len.div_ceil(width),
        })
    }

    #[inline]
    pub fn num_bases(&self) -> usize {
        self.len
    }

    /// Nominal width of every block but the last.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn num_blocks(&self) -> usize {
        self.blocks
    }

    /// Width of the final block, in `1..=width`.
    #[inline]
    pub fn last_width(&self) -> usize {
        self.len - (self.blocks - 1) * self.width
    }

    /// Width of block `i`.
    pub fn block_width(&self, i: usize) -> usize {
        debug_assert!(i < self.blocks);
        if i + 1 == self.blocks {
            self.last_width()
        } else {
            self.width
        }
    }

    /// Index range of block `i` within the base vector.
    pub fn block_range(&self, i: usize) -> Range<usize> {
        let start = i * self.width;
        start..start + self.block_width(i)
    }

    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        (0..self.blocks).map(|i| self.block_range(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_degenerate() {
        assert_eq!(BlockPartition::new(0, 3), Err(Error::EmptyInput));
        assert_eq!(BlockPartition::new(3, 0), Err(Error::ZeroBlockWidth));
    }

    #[test]
    fn test_exact_multiple() {
        let p = BlockPartition::new(6, 3).unwrap();
        assert_eq!(p.num_blocks(), 2);
        assert_eq!(p.last_width(), 3);
        assert_eq!(p.ranges().collect::<Vec<_>>(), vec![0..3, 3..6]);
    }

    #[test]
    fn test_ragged_last_block() {
        let p = BlockPartition::new(7, 3).unwrap();
        assert_eq!(p.num_blocks(), 3);
        assert_eq!(p.last_width(), 1);
        assert_eq!(
            (0..3).map(|i| p.block_width(i)).collect::<Vec<_>>(),
            vec![3, 3, 1]
        );
        assert_eq!(p.ranges().collect::<Vec<_>>(), vec![0..3, 3..6, 6..7]);
    }

    #[test]
    fn test_single_narrow_block() {
        let p = BlockPartition::new(2, 5).unwrap();
        assert_eq!(p.num_blocks(), 1);
        assert_eq!(p.last_width(), 2);
        assert_eq!(p.ranges().collect::<Vec<_>>(), vec![0..2]);
    }

    #[test]
    fn test_ranges_cover_input() {
        for len in 1..40 {
            for width in 1..10 {
                let p = BlockPartition::new(len, width).unwrap();
                let covered: Vec<usize> = p.ranges().flatten().collect();
                assert_eq!(covered, (0..len).collect::<Vec<_>>());
                assert!(p.last_width() >= 1 && p.last_width() <= width);
            }
        }
    }
}
