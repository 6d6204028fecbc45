// Stacking order source for the whole desktop session

/// Issues strictly increasing z-order values.
/// Values are never reused or reset, so no two windows ever compare equal.
#[derive(Debug, Clone)]
pub struct ZOrderCounter {
    last_issued: u64,
}

impl ZOrderCounter {
    pub fn new(base: u64) -> Self {
        Self { last_issued: base }
    }

    pub fn next(&mut self) -> u64 {
        self.last_issued += 1;
        self.last_issued
    }

    pub fn last_issued(&self) -> u64 {
        self.last_issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_starts_above_base() {
        let mut counter = ZOrderCounter::new(100);
        assert_eq!(counter.last_issued(), 100);
        assert_eq!(counter.next(), 101);
        assert_eq!(counter.next(), 102);
        assert_eq!(counter.last_issued(), 102);
    }
}
