//! Item-count distributions and the duration rules derived from basket size.
//!
//! Shoppers draw their basket size once, when they start shopping. Shopping and
//! checkout durations are pure functions of that count.

use bevy_ecs::prelude::Resource;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// Smallest basket a shopper can draw.
pub const MIN_ITEMS: u32 = 5;
/// Largest basket a shopper can draw.
pub const MAX_ITEMS: u32 = 20;
/// Items picked per minute while shopping.
pub const SHOPPING_ITEMS_PER_MINUTE: u32 = 2;
/// Items scanned per minute at a checkout, on top of the one-minute transaction floor.
pub const CHECKOUT_ITEMS_PER_MINUTE: u32 = 10;

/// Minutes spent shopping for `items` items.
pub fn shopping_duration(items: u32) -> u64 {
    u64::from(items / SHOPPING_ITEMS_PER_MINUTE)
}

/// Minutes a checker spends on a basket of `items` items. Always at least 1.
pub fn checkout_duration(items: u32) -> u64 {
    u64::from(items / CHECKOUT_ITEMS_PER_MINUTE) + 1
}

/// Trait for drawing basket sizes.
pub trait ItemCountDistribution: Send + Sync + std::fmt::Debug {
    /// Draw the item count for the next shopper.
    fn sample_items(&mut self) -> u32;
}

/// Uniform draw over [`MIN_ITEMS`, `MAX_ITEMS`] from a seedable generator.
#[derive(Debug, Clone)]
pub struct UniformItemCount {
    rng: StdRng,
}

impl UniformItemCount {
    /// With no seed the generator is seeded from entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl ItemCountDistribution for UniformItemCount {
    fn sample_items(&mut self) -> u32 {
        self.rng.gen_range(MIN_ITEMS..=MAX_ITEMS)
    }
}

/// Every shopper carries the same basket. Used to pin scenarios in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedItemCount(pub u32);

impl ItemCountDistribution for FixedItemCount {
    fn sample_items(&mut self) -> u32 {
        self.0
    }
}

/// Hands out a scripted list of baskets in arrival order, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ItemSequence {
    baskets: Vec<u32>,
    next: usize,
}

impl ItemSequence {
    /// An empty list behaves like [`FixedItemCount`] at [`MIN_ITEMS`].
    pub fn new(baskets: Vec<u32>) -> Self {
        let baskets = if baskets.is_empty() {
            vec![MIN_ITEMS]
        } else {
            baskets
        };
        Self { baskets, next: 0 }
    }
}

impl ItemCountDistribution for ItemSequence {
    fn sample_items(&mut self) -> u32 {
        let items = self.baskets[self.next % self.baskets.len()];
        self.next += 1;
        items
    }
}

/// The world's single source of basket sizes.
#[derive(Debug, Resource)]
pub struct ItemCountSource(pub Box<dyn ItemCountDistribution>);

impl ItemCountSource {
    pub fn uniform(seed: Option<u64>) -> Self {
        Self(Box::new(UniformItemCount::new(seed)))
    }

    pub fn fixed(items: u32) -> Self {
        Self(Box::new(FixedItemCount(items)))
    }

    pub fn sequence(baskets: Vec<u32>) -> Self {
        Self(Box::new(ItemSequence::new(baskets)))
    }

    pub fn sample_items(&mut self) -> u32 {
        self.0.sample_items()
    }
}
