/// Per-query transaction id generator.
pub trait TransactionIdSource: Send + Sync {
    fn next_id(&self) -> u16;
}

/// Uniform ids in `0..space`. Collisions between concurrent queries are
/// possible and tolerated.
#[derive(Debug, Clone, Copy)]
pub struct RandomTransactionIds {
    space: u32,
}

impl RandomTransactionIds {
    pub const MAX_SPACE: u32 = 1 << 16;

    pub fn new(space: u32) -> Self {
        Self {
            space: space.clamp(1, Self::MAX_SPACE),
        }
    }

    pub fn space(&self) -> u32 {
        self.space
    }
}

impl TransactionIdSource for RandomTransactionIds {
    fn next_id(&self) -> u16 {
        fastrand::u32(0..self.space) as u16
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedTransactionId(pub u16);

impl TransactionIdSource for FixedTransactionId {
    fn next_id(&self) -> u16 {
        self.0
    }
}
