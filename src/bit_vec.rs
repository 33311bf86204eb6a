use num_traits::{PrimInt, Unsigned};

/// Fixed number of `width`-bit unsigned slots packed back to back into words of `T`.
pub(crate) struct BitVec<T> {
    buf: Vec<T>,
    width: usize,
    size: usize,
}

impl<T> BitVec<T>
where
    T: PrimInt + UShl + UShr + Unsigned,
{
    const WORD_SIZE: usize = 8 * size_of::<T>();

    pub fn new(width: usize, size: usize) -> Self {
        assert!(
            0 < width && width < Self::WORD_SIZE,
            "width must be in the range (0, word size)"
        );
        assert!(size > 0, "size must be > 0");
        // Allocate 1 extra word for safe indexing word pairs.
        let num_words = (width * size).div_ceil(Self::WORD_SIZE) + 1;

        Self {
            buf: vec![T::zero(); num_words],
            width,
            size,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, index: usize) -> T {
        assert!(index < self.size, "index out of bounds");
        // SAFETY: just checked that `index` is in bounds
        unsafe { self.get_unchecked(index) }
    }

    /// # Safety
    ///
    /// `index` must be less than `self.size()`.
    pub unsafe fn get_unchecked(&self, index: usize) -> T {
        let (word_index, offset) = self.index_and_offset(index);
        let (first, second) = (
            *self.buf.get_unchecked(word_index),
            *self.buf.get_unchecked(word_index + 1),
        );
        let first_shifted = first >> offset;
        let second_shifted = second.ushl((Self::WORD_SIZE - offset) as u32);
        (first_shifted | second_shifted) & self.lsb_mask()
    }

    pub fn set(&mut self, index: usize, value: T) {
        assert!(index < self.size, "index out of bounds");
        // SAFETY: just checked that `index` is in bounds
        unsafe { self.set_unchecked(index, value) }
    }

    /// # Safety
    ///
    /// `index` must be less than `self.size()`.
    pub unsafe fn set_unchecked(&mut self, index: usize, value: T) {
        let (word_index, offset) = self.index_and_offset(index);
        let mask = self.lsb_mask();
        let value_masked = value & mask;
        let spill = (Self::WORD_SIZE - offset) as u32;
        {
            let first = self.buf.get_unchecked_mut(word_index);
            let first_cleared = *first & !(mask << offset);
            *first = first_cleared | (value_masked << offset);
        }
        let second = self.buf.get_unchecked_mut(word_index + 1);
        let second_cleared = *second & !mask.ushr(spill);
        *second = second_cleared | value_masked.ushr(spill);
    }

    pub fn clear(&mut self) {
        self.buf.fill(T::zero());
    }

    fn lsb_mask(&self) -> T {
        (T::one() << self.width) - T::one()
    }

    fn index_and_offset(&self, index: usize) -> (usize, usize) {
        (
            self.width * index / Self::WORD_SIZE,
            self.width * index % Self::WORD_SIZE,
        )
    }
}

// TODO: Replace these once num-traits provides traits over uXX::unbounded_shl/unbounded_shr.
pub trait UShl {
    fn ushl(self, rhs: u32) -> Self;
}

pub trait UShr {
    fn ushr(self, rhs: u32) -> Self;
}

macro_rules! impl_unbounded_shifts {
    ($($t:ty),*) => {
        $(
            impl UShl for $t {
                fn ushl(self, rhs: u32) -> Self {
                    self.unbounded_shl(rhs)
                }
            }

            impl UShr for $t {
                fn ushr(self, rhs: u32) -> Self {
                    self.unbounded_shr(rhs)
                }
            }
        )*
    };
}

impl_unbounded_shifts!(u8, u16, u32, u64, u128, usize);
