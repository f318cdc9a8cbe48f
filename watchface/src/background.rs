//! Rotating background selection

use rand_xoshiro::{
    rand_core::{RngCore, SeedableRng},
    Xoroshiro128StarStar,
};

use crate::resources::ResourceId;

pub const BACKGROUND_COUNT: u8 = 4;

/// Scenery shown behind the status boxes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Background {
    Cave,
    Grass,
    Sand,
    Water,
}

impl Background {
    pub const ALL: [Background; BACKGROUND_COUNT as usize] = [
        Background::Cave,
        Background::Grass,
        Background::Sand,
        Background::Water,
    ];

    /// Bitmap holding this background.
    pub fn resource(self) -> ResourceId {
        match self {
            Background::Cave => ResourceId::BackgroundCave,
            Background::Grass => ResourceId::BackgroundGrass,
            Background::Sand => ResourceId::BackgroundSand,
            Background::Water => ResourceId::BackgroundWater,
        }
    }
}

/// Index into [`Background::ALL`], always in `0..BACKGROUND_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BackgroundIndex(u8);

impl BackgroundIndex {
    /// Returns `None` for indices past the last background.
    pub const fn new(index: u8) -> Option<Self> {
        if index < BACKGROUND_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Uniformly random index drawn from a generator seeded with `seed`.
    pub fn random(seed: u64) -> Self {
        let mut rng = Xoroshiro128StarStar::seed_from_u64(seed);
        // 2^32 is a multiple of the background count, so the draw stays uniform
        Self((rng.next_u32() % BACKGROUND_COUNT as u32) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// The next background, wrapping from the last back to the first.
    pub fn advance(self) -> Self {
        Self((self.0 + 1) % BACKGROUND_COUNT)
    }

    pub fn background(self) -> Background {
        Background::ALL[self.0 as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_out_of_range() {
        for i in 0..BACKGROUND_COUNT {
            assert_eq!(BackgroundIndex::new(i).map(BackgroundIndex::get), Some(i));
        }
        assert_eq!(BackgroundIndex::new(4), None);
        assert_eq!(BackgroundIndex::new(u8::MAX), None);
    }

    #[test]
    fn advance_wraps() {
        let last = BackgroundIndex::new(3).unwrap();
        assert_eq!(last.advance().get(), 0);

        let mut index = BackgroundIndex::new(0).unwrap();
        for expected in [1, 2, 3, 0, 1] {
            index = index.advance();
            assert_eq!(index.get(), expected);
        }
    }

    #[test]
    fn random_covers_every_background() {
        let mut seen = [false; BACKGROUND_COUNT as usize];
        for seed in 0..1_000 {
            let index = BackgroundIndex::random(seed);
            assert!(index.get() < BACKGROUND_COUNT);
            seen[index.get() as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn random_is_repeatable_for_a_seed() {
        assert_eq!(
            BackgroundIndex::random(1_705_932_300),
            BackgroundIndex::random(1_705_932_300)
        );
    }

    #[test]
    fn backgrounds_map_to_distinct_bitmaps() {
        for (i, a) in Background::ALL.iter().enumerate() {
            assert_eq!(BackgroundIndex::new(i as u8).unwrap().background(), *a);
            for b in &Background::ALL[i + 1..] {
                assert_ne!(a.resource(), b.resource());
            }
        }
    }
}
