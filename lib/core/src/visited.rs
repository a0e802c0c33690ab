/// Dense bit vector for discovered-vertex tracking during a traversal.
/// Sized once per query from the graph's vertex count.
#[derive(Debug, Clone)]
pub struct VisitedSet {
    bits: Vec<u64>,
    len: usize,
}

impl VisitedSet {
    #[inline]
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let num_words = (capacity + 63) / 64;
        Self {
            bits: vec![0; num_words],
            len: 0,
        }
    }

    /// Marks `idx` as visited. Returns `true` if it was not visited before.
    ///
    /// `idx` must be below the capacity given to [`VisitedSet::new`].
    #[inline]
    pub fn insert(&mut self, idx: usize) -> bool {
        let word_idx = idx / 64;
        let mask = 1u64 << (idx % 64);

        let was_set = (self.bits[word_idx] & mask) != 0;
        self.bits[word_idx] |= mask;
        if !was_set {
            self.len += 1;
        }
        !was_set
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, idx: usize) -> bool {
        let word_idx = idx / 64;
        match self.bits.get(word_idx) {
            Some(word) => (word & (1u64 << (idx % 64))) != 0,
            None => false,
        }
    }

    /// Number of distinct vertices marked so far.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
