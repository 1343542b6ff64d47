use crate::rank::RankTable;
use ::std::cell::OnceCell;

/// Rank table of a text, computed on first access.
///
/// Lives for a single detection call, never reused across calls.
#[derive(Debug)]
pub struct LazyRanks<'t> {
    text: &'t str,
    ranks: OnceCell<RankTable>,
}

impl<'t> LazyRanks<'t> {
    #[inline]
    pub fn new(text: &'t str) -> Self {
        Self {
            text,
            ranks: OnceCell::new(),
        }
    }

    #[inline]
    pub fn text(&self) -> &'t str {
        self.text
    }

    #[inline]
    pub fn get(&self) -> &RankTable {
        self.ranks.get_or_init(|| RankTable::from_text(self.text))
    }

    #[inline]
    pub fn is_computed(&self) -> bool {
        self.ranks.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::LazyRanks;
    use crate::rank::RankTable;

    #[test]
    fn test_computed_once() {
        let lazy = LazyRanks::new("hello world");
        assert!(!lazy.is_computed());

        let first = lazy.get();
        assert!(lazy.is_computed());
        assert!(::std::ptr::eq(first, lazy.get()));
        assert_eq!(first, &RankTable::from_text("hello world"));
        assert_eq!(lazy.text(), "hello world");
    }
}
