//! Frame drawing

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::{Rgb565, RgbColor},
    prelude::*,
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

use crate::{
    layout,
    resources::{FontId, Platform, ResourceId},
    session::Session,
    sprite::Sprite,
};

const LABEL_COLOR: Rgb565 = Rgb565::BLACK;

/// Draw the current frame of `session` onto `target`.
///
/// Background first, then the status boxes, then the time and date labels.
pub fn draw<P, D>(session: &Session<'_, P>, target: &mut D) -> Result<(), D::Error>
where
    P: Platform<Bitmap = Sprite, Font = &'static MonoFont<'static>>,
    D: DrawTarget<Color = Rgb565>,
{
    let state = session.state();

    if let Some(background) = session.bitmap(state.background().resource()) {
        background.draw(target)?;
    }
    for id in ResourceId::UI_ELEMENTS {
        if let Some(element) = session.bitmap(id) {
            element.draw(target)?;
        }
    }

    if let Some(font) = session.font(FontId::Large) {
        let character_style = MonoTextStyle::new(*font, LABEL_COLOR);

        Text::with_text_style(
            state.displayed_time(),
            layout::TIME_ANCHOR,
            character_style,
            TextStyleBuilder::new()
                .alignment(Alignment::Left)
                .baseline(Baseline::Middle)
                .build(),
        )
        .draw(target)?;

        Text::with_text_style(
            state.displayed_date(),
            layout::DATE_ANCHOR,
            character_style,
            TextStyleBuilder::new()
                .alignment(Alignment::Right)
                .baseline(Baseline::Middle)
                .build(),
        )
        .draw(target)?;
    }

    Ok(())
}
