//! Display resources and the platform that provides them

use crate::{clock::Locale, error::Error};

pub const BITMAP_COUNT: usize = 7;
pub const FONT_COUNT: usize = 3;

/// Bitmaps the watchface draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResourceId {
    BackgroundCave,
    BackgroundGrass,
    BackgroundSand,
    BackgroundWater,
    /// Text box behind the time and date labels
    StatusBottomBox,
    /// Health box of the player's monster
    StatusMainHealth,
    /// Health box of the opposing monster
    StatusEnemyHealth,
}

impl ResourceId {
    /// All bitmaps in acquisition order.
    pub const ALL: [ResourceId; BITMAP_COUNT] = [
        ResourceId::BackgroundCave,
        ResourceId::BackgroundGrass,
        ResourceId::BackgroundSand,
        ResourceId::BackgroundWater,
        ResourceId::StatusBottomBox,
        ResourceId::StatusMainHealth,
        ResourceId::StatusEnemyHealth,
    ];

    /// Static UI elements, in drawing order.
    pub const UI_ELEMENTS: [ResourceId; 3] = [
        ResourceId::StatusBottomBox,
        ResourceId::StatusMainHealth,
        ResourceId::StatusEnemyHealth,
    ];

    pub(crate) fn slot(self) -> usize {
        self as usize
    }
}

/// Font sizes the watchface loads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontId {
    Small,
    Medium,
    Large,
}

impl FontId {
    pub const ALL: [FontId; FONT_COUNT] = [FontId::Small, FontId::Medium, FontId::Large];

    pub(crate) fn slot(self) -> usize {
        self as usize
    }
}

/// Host platform that owns bitmap and font storage.
///
/// Every handle handed out by a `load_*` call is given back exactly once
/// through the matching release call.
pub trait Platform: Locale {
    type Bitmap;
    type Font;

    fn load_bitmap(&mut self, id: ResourceId) -> Result<Self::Bitmap, Error>;
    fn release_bitmap(&mut self, id: ResourceId, bitmap: Self::Bitmap);

    fn load_font(&mut self, id: FontId) -> Result<Self::Font, Error>;
    fn unload_font(&mut self, id: FontId, font: Self::Font);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_follow_acquisition_order() {
        for (i, id) in ResourceId::ALL.iter().enumerate() {
            assert_eq!(id.slot(), i);
        }
        for (i, id) in FontId::ALL.iter().enumerate() {
            assert_eq!(id.slot(), i);
        }
    }

    #[test]
    fn ui_elements_are_not_backgrounds() {
        for id in ResourceId::UI_ELEMENTS {
            assert!(id.slot() >= 4);
        }
    }
}
