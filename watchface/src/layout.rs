//! Screen layout for the 240x240 panel

use embedded_graphics::{
    geometry::{Point, Size},
    primitives::Rectangle,
};

use crate::resources::ResourceId;

pub const SCREEN: Rectangle = Rectangle::new(Point::new(0, 0), Size::new(240, 240));

/// Health box of the opposing monster, top left
pub const ENEMY_STATUS: Rectangle = Rectangle::new(Point::new(0, 17), Size::new(137, 37));
/// Health box of the player's monster, right of centre
pub const MAIN_STATUS: Rectangle = Rectangle::new(Point::new(103, 129), Size::new(137, 49));
/// Text box along the bottom edge
pub const BOTTOM_BOX: Rectangle = Rectangle::new(Point::new(0, 203), Size::new(240, 37));

/// Left edge of the time label, vertically centred in the bottom box
pub const TIME_ANCHOR: Point = Point::new(10, 221);
/// Right edge of the date label, vertically centred in the bottom box
pub const DATE_ANCHOR: Point = Point::new(230, 221);

/// Ground level of the backgrounds
pub const HORIZON: i32 = 120;
/// Where the opposing monster stands
pub const ENEMY_PLATFORM: Rectangle = Rectangle::new(Point::new(140, 78), Size::new(90, 28));
/// Where the player's monster stands
pub const MAIN_PLATFORM: Rectangle = Rectangle::new(Point::new(10, 160), Size::new(110, 32));

/// Area covered by a bitmap.
pub fn bounds(id: ResourceId) -> Rectangle {
    match id {
        ResourceId::BackgroundCave
        | ResourceId::BackgroundGrass
        | ResourceId::BackgroundSand
        | ResourceId::BackgroundWater => SCREEN,
        ResourceId::StatusBottomBox => BOTTOM_BOX,
        ResourceId::StatusMainHealth => MAIN_STATUS,
        ResourceId::StatusEnemyHealth => ENEMY_STATUS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::ContainsPoint;

    #[test]
    fn ui_elements_fit_on_screen() {
        for id in ResourceId::UI_ELEMENTS {
            let area = bounds(id);
            assert_eq!(SCREEN.intersection(&area), area);
        }
    }

    #[test]
    fn labels_sit_inside_bottom_box() {
        assert!(BOTTOM_BOX.contains(TIME_ANCHOR));
        assert!(BOTTOM_BOX.contains(DATE_ANCHOR));
    }
}
