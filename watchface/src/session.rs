//! Display session
//!
//! A [`Session`] holds every font and bitmap the watchface needs for as long
//! as the watchface is shown. Resources are loaded in [`Session::start`] and
//! handed back to the platform when the session is dropped, in reverse order
//! of loading. A start that fails part way releases what it already loaded.

use chrono::{Datelike, Timelike};

use crate::{
    background::BackgroundIndex,
    controller::{Refresh, RefreshController},
    error::Error,
    resources::{FontId, Platform, ResourceId, BITMAP_COUNT, FONT_COUNT},
    state::PresentationState,
};

/// Loaded handles, released on drop.
struct Assets<'p, P: Platform> {
    platform: &'p mut P,
    fonts: [Option<P::Font>; FONT_COUNT],
    bitmaps: [Option<P::Bitmap>; BITMAP_COUNT],
}

impl<'p, P: Platform> Assets<'p, P> {
    fn acquire(platform: &'p mut P) -> Result<Self, Error> {
        let mut assets = Self {
            platform,
            fonts: core::array::from_fn(|_| None),
            bitmaps: core::array::from_fn(|_| None),
        };

        // An early return drops `assets`, releasing what was loaded so far
        for id in FontId::ALL {
            assets.fonts[id.slot()] = Some(assets.platform.load_font(id)?);
        }
        for id in ResourceId::ALL {
            assets.bitmaps[id.slot()] = Some(assets.platform.load_bitmap(id)?);
        }

        Ok(assets)
    }
}

impl<P: Platform> Drop for Assets<'_, P> {
    fn drop(&mut self) {
        for id in ResourceId::ALL.into_iter().rev() {
            if let Some(bitmap) = self.bitmaps[id.slot()].take() {
                self.platform.release_bitmap(id, bitmap);
            }
        }
        for id in FontId::ALL.into_iter().rev() {
            if let Some(font) = self.fonts[id.slot()].take() {
                self.platform.unload_font(id, font);
            }
        }
    }
}

/// The watchface while it is on screen.
pub struct Session<'p, P: Platform> {
    assets: Assets<'p, P>,
    controller: RefreshController,
}

impl<'p, P: Platform> Session<'p, P> {
    /// Load all resources and pick a random starting background from `seed`.
    pub fn start(platform: &'p mut P, seed: u64) -> Result<Self, Error> {
        let assets = Assets::acquire(platform)?;
        let background = BackgroundIndex::random(seed);
        info!("Session started on background {}", background.get());

        Ok(Self {
            assets,
            controller: RefreshController::new(background),
        })
    }

    /// Refresh the presentation state for `now`, using the platform's locale.
    pub fn on_minute_tick<T>(&mut self, now: &T) -> Refresh
    where
        T: Datelike + Timelike,
    {
        self.controller.on_minute_tick(now, &*self.assets.platform)
    }

    pub fn state(&self) -> &PresentationState {
        self.controller.state()
    }

    pub fn bitmap(&self, id: ResourceId) -> Option<&P::Bitmap> {
        self.assets.bitmaps[id.slot()].as_ref()
    }

    pub fn font(&self, id: FontId) -> Option<&P::Font> {
        self.assets.fonts[id.slot()].as_ref()
    }

    pub fn platform(&self) -> &P {
        &*self.assets.platform
    }
}

impl<P: Platform> Drop for Session<'_, P> {
    fn drop(&mut self) {
        info!("Session ended");
    }
}
