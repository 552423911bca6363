use uuid::Uuid;

/// Source of fresh identifiers for newly created records.
///
/// Normalization and the add-customer flow take the generator as a parameter,
/// so production code draws random v4 UUIDs while tests plug in
/// [`SequentialIdGenerator`] and get stable ids.
pub trait IdGenerator {
    fn next_id(&mut self) -> Uuid;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4Generator;

impl IdGenerator for UuidV4Generator {
    fn next_id(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Deterministic ids `00000000-0000-0000-0000-000000000001`, `...0002`, ...
#[derive(Debug, Clone, Default)]
pub struct SequentialIdGenerator {
    issued: u128,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> u128 {
        self.issued
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> Uuid {
        self.issued += 1;
        Uuid::from_u128(self.issued)
    }
}

impl<F> IdGenerator for F
where
    F: FnMut() -> Uuid,
{
    fn next_id(&mut self) -> Uuid {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIdGenerator::new();
        assert_eq!(ids.next_id(), Uuid::from_u128(1));
        assert_eq!(ids.next_id(), Uuid::from_u128(2));
        assert_eq!(ids.issued(), 2);
    }

    #[test]
    fn test_v4_ids_differ() {
        let mut ids = UuidV4Generator;
        assert_ne!(ids.next_id(), ids.next_id());
    }

    #[test]
    fn test_closure_generator() {
        let mut ids = || Uuid::nil();
        assert_eq!(IdGenerator::next_id(&mut ids), Uuid::nil());
    }
}
