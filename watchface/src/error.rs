//! Error types

use crate::resources::{FontId, ResourceId};

/// Failure to acquire a display resource from the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    BitmapUnavailable(ResourceId),
    FontUnavailable(FontId),
}
