//! Bitmaps drawn from primitives

use embedded_graphics::{
    pixelcolor::{Rgb565, RgbColor},
    prelude::*,
    primitives::{Ellipse, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle},
};

use crate::{background::Background, layout, resources::ResourceId};

/// Sky and ground colours of a background.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub sky: Rgb565,
    pub ground: Rgb565,
    pub platform: Rgb565,
}

impl Background {
    pub fn palette(self) -> Palette {
        match self {
            Background::Cave => Palette {
                sky: Rgb565::new(6, 10, 6),
                ground: Rgb565::new(12, 22, 10),
                platform: Rgb565::new(9, 16, 7),
            },
            Background::Grass => Palette {
                sky: Rgb565::new(17, 50, 31),
                ground: Rgb565::new(10, 48, 8),
                platform: Rgb565::new(6, 36, 4),
            },
            Background::Sand => Palette {
                sky: Rgb565::new(29, 58, 25),
                ground: Rgb565::new(30, 52, 14),
                platform: Rgb565::new(26, 42, 10),
            },
            Background::Water => Palette {
                sky: Rgb565::new(18, 54, 31),
                ground: Rgb565::new(4, 30, 28),
                platform: Rgb565::new(2, 22, 22),
            },
        }
    }
}

const OUTLINE: Rgb565 = Rgb565::BLACK;
const BOX_FILL: Rgb565 = Rgb565::WHITE;
const HP_BAR: Rgb565 = Rgb565::new(4, 52, 8);

/// A drawable bitmap, positioned by [`layout::bounds`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sprite {
    id: ResourceId,
    bounds: Rectangle,
}

impl Sprite {
    pub fn new(id: ResourceId) -> Self {
        Self {
            id,
            bounds: layout::bounds(id),
        }
    }

    pub fn id(&self) -> ResourceId {
        self.id
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn draw_background<D>(&self, background: Background, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let palette = background.palette();
        let sky_height = layout::HORIZON as u32;

        // Sky
        Rectangle::new(self.bounds.top_left, Size::new(self.bounds.size.width, sky_height))
            .into_styled(PrimitiveStyle::with_fill(palette.sky))
            .draw(target)?;

        // Ground
        Rectangle::new(
            self.bounds.top_left + Point::new(0, layout::HORIZON),
            Size::new(
                self.bounds.size.width,
                self.bounds.size.height.saturating_sub(sky_height),
            ),
        )
        .into_styled(PrimitiveStyle::with_fill(palette.ground))
        .draw(target)?;

        // Monster platforms
        let platform = PrimitiveStyle::with_fill(palette.platform);
        for area in [layout::ENEMY_PLATFORM, layout::MAIN_PLATFORM] {
            Ellipse::new(area.top_left, area.size)
                .into_styled(platform)
                .draw(target)?;
        }

        Ok(())
    }

    fn draw_status<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.draw_box(6, 2, target)?;

        // Health bar along the lower edge of the box
        let bar = Rectangle::new(
            self.bounds.top_left
                + Point::new(40, self.bounds.size.height as i32 - 14),
            Size::new(self.bounds.size.width.saturating_sub(52), 6),
        );
        bar.into_styled(
            PrimitiveStyleBuilder::new()
                .fill_color(HP_BAR)
                .stroke_color(OUTLINE)
                .stroke_width(1)
                .build(),
        )
        .draw(target)
    }

    fn draw_box<D>(&self, radius: u32, stroke: u32, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        RoundedRectangle::with_equal_corners(self.bounds, Size::new(radius, radius))
            .into_styled(
                PrimitiveStyleBuilder::new()
                    .fill_color(BOX_FILL)
                    .stroke_color(OUTLINE)
                    .stroke_width(stroke)
                    .build(),
            )
            .draw(target)
    }
}

impl Drawable for Sprite {
    type Color = Rgb565;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        match self.id {
            ResourceId::BackgroundCave => self.draw_background(Background::Cave, target),
            ResourceId::BackgroundGrass => self.draw_background(Background::Grass, target),
            ResourceId::BackgroundSand => self.draw_background(Background::Sand, target),
            ResourceId::BackgroundWater => self.draw_background(Background::Water, target),
            ResourceId::StatusBottomBox => self.draw_box(4, 3, target),
            ResourceId::StatusMainHealth | ResourceId::StatusEnemyHealth => {
                self.draw_status(target)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sprites_take_their_layout_bounds() {
        for id in ResourceId::ALL {
            assert_eq!(Sprite::new(id).bounds(), layout::bounds(id));
        }
    }

    #[test]
    fn backgrounds_have_distinct_skies() {
        for (i, a) in Background::ALL.iter().enumerate() {
            for b in &Background::ALL[i + 1..] {
                assert_ne!(a.palette().sky, b.palette().sky);
            }
        }
    }
}
