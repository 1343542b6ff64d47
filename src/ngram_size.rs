use strum_macros::{EnumCount, EnumIter};

/// Length of an n-gram, in chars.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, EnumCount, EnumIter)]
#[repr(usize)]
pub enum NgramSize {
    Uni = 1,
    Bi = 2,
    Tri = 3,
    Quadri = 4,
}

impl NgramSize {
    #[inline(always)]
    pub const fn len(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::NgramSize;
    use crate::NGRAM_DEPTH;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_ngram_sizes_are_consecutive() {
        let lens: Vec<_> = NgramSize::iter().map(NgramSize::len).collect();
        assert_eq!(lens, (1..=NGRAM_DEPTH).collect::<Vec<_>>());
        assert_eq!(NgramSize::COUNT, NGRAM_DEPTH);
    }
}
