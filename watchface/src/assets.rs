//! Built-in platform backed by flash-resident fonts and sprites

use embedded_graphics::mono_font::MonoFont;
use profont::{PROFONT_10_POINT, PROFONT_24_POINT, PROFONT_9_POINT};

use crate::{
    clock::{ClockStyle, Locale},
    error::Error,
    resources::{FontId, Platform, ResourceId},
    sprite::Sprite,
};

/// Assets compiled into the firmware image.
///
/// Nothing is allocated, but handles are still counted so a leaked or doubly
/// released handle shows up in [`StaticAssets::live_handles`].
pub struct StaticAssets {
    clock_style: ClockStyle,
    live: usize,
}

impl StaticAssets {
    pub const fn new(clock_style: ClockStyle) -> Self {
        Self {
            clock_style,
            live: 0,
        }
    }

    /// Number of handles loaded and not yet released.
    pub fn live_handles(&self) -> usize {
        self.live
    }
}

impl Locale for StaticAssets {
    fn clock_style(&self) -> ClockStyle {
        self.clock_style
    }
}

impl Platform for StaticAssets {
    type Bitmap = Sprite;
    type Font = &'static MonoFont<'static>;

    fn load_bitmap(&mut self, id: ResourceId) -> Result<Sprite, Error> {
        trace!("Loading bitmap {}", id);
        self.live += 1;
        Ok(Sprite::new(id))
    }

    fn release_bitmap(&mut self, id: ResourceId, _bitmap: Sprite) {
        trace!("Releasing bitmap {}", id);
        self.live -= 1;
    }

    fn load_font(&mut self, id: FontId) -> Result<Self::Font, Error> {
        trace!("Loading font {}", id);
        self.live += 1;
        Ok(match id {
            FontId::Small => &PROFONT_9_POINT,
            FontId::Medium => &PROFONT_10_POINT,
            FontId::Large => &PROFONT_24_POINT,
        })
    }

    fn unload_font(&mut self, id: FontId, _font: Self::Font) {
        trace!("Unloading font {}", id);
        self.live -= 1;
    }
}
