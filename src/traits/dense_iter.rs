// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use minarrow::Bitmask;

/// Iterator over the non-null values of a slice, using an optional validity mask.
pub struct DenseIter<'a, T> {
    slice: &'a [T],
    idx: usize,
    mask: Option<&'a Bitmask>,
}

impl<'a, T: Copy> DenseIter<'a, T> {
    #[inline(always)]
    pub fn new(slice: &'a [T], mask: Option<&'a Bitmask>) -> Self {
        Self {
            slice,
            idx: 0,
            mask,
        }
    }
}

impl<'a, T: Copy> Iterator for DenseIter<'a, T> {
    type Item = T;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        match self.mask {
            None => {
                let v = self.slice.get(self.idx).copied();
                self.idx += 1;
                v
            }
            Some(m) => {
                while self.idx < self.slice.len() {
                    let i = self.idx;
                    self.idx += 1;
                    if m.get(i) {
                        return Some(self.slice[i]);
                    }
                }
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.slice.len().saturating_sub(self.idx);
        match self.mask {
            None => (rest, Some(rest)),
            Some(_) => (0, Some(rest)),
        }
    }
}

/// Row positions of the valid entries, in row order.
#[inline]
pub fn valid_positions(len: usize, m: Option<&Bitmask>) -> Vec<usize> {
    match m {
        None => (0..len).collect(),
        Some(mask) => (0..len).filter(|&i| mask.get(i)).collect(),
    }
}
