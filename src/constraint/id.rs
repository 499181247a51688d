// ConstraintId
//
// Allocated once per constraint declaration and stable across every
// teardown/recreate cycle of that declaration. The worker keys all constraint
// state on it.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct ConstraintId(u64);

impl ConstraintId {
    pub fn to_u64(&self) -> u64 {
        self.0
    }
}

// ConstraintIdGenerator
//
// Monotonic allocator. Ids are never recycled: a disposed constraint's id may
// still be in flight toward the worker, and u64 space outlives any session.
pub struct ConstraintIdGenerator {
    next: u64,
}

impl ConstraintIdGenerator {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    pub fn generate(&mut self) -> ConstraintId {
        let id = ConstraintId(self.next);
        self.next += 1;
        id
    }
}

impl Default for ConstraintIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_and_distinct() {
        let mut generator = ConstraintIdGenerator::new();

        let first = generator.generate();
        let second = generator.generate();
        let third = generator.generate();

        assert_eq!(first.to_u64(), 0);
        assert_eq!(second.to_u64(), 1);
        assert_eq!(third.to_u64(), 2);
        assert_ne!(first, second);
    }
}
