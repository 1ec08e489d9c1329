use std::f32::consts::TAU;

use glam::Vec2;
use tracing::trace;

use crate::data_types::{TooltipContent, TooltipState};
use crate::scene::Scene;

/// Offset between the pointer (or shape anchor) and the tooltip box, chosen
/// so the tooltip does not sit on top of the hovered shape.
pub const TOOLTIP_OFFSET: Vec2 = Vec2::new(10.0, -10.0);

/// Hoverable area in scene coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum HitShape {
    Rect { min: Vec2, max: Vec2 },
    Circle { center: Vec2, radius: f32 },
    /// Annular sector; angles in radians from 12 o'clock, clockwise.
    Sector {
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        start_angle: f32,
        end_angle: f32,
    },
}

impl HitShape {
    pub fn contains(&self, p: Vec2) -> bool {
        match self {
            HitShape::Rect { min, max } => {
                p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
            }
            HitShape::Circle { center, radius } => p.distance_squared(*center) <= radius * radius,
            HitShape::Sector {
                center,
                inner_radius,
                outer_radius,
                start_angle,
                end_angle,
            } => {
                let v = p - *center;
                let r = v.length();
                if r < *inner_radius || r > *outer_radius {
                    return false;
                }
                // Angle measured like the arc layout: 0 at 12 o'clock,
                // increasing clockwise in screen coordinates.
                let angle = v.x.atan2(-v.y).rem_euclid(TAU);
                angle >= *start_angle && angle < *end_angle
            }
        }
    }
}

/// A drawn shape's hover contract: where it is, what its tooltip says, and
/// the anchor point markers pin their tooltip to.
#[derive(Clone, Debug, PartialEq)]
pub struct HitRegion {
    pub shape: HitShape,
    pub anchor: Vec2,
    pub content: TooltipContent,
}

/// Result of one full redraw: the scene plus the hover regions for it.
/// Regions are empty when tooltips are disabled or the data is empty.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartOutput {
    pub scene: Scene,
    pub hit_regions: Vec<HitRegion>,
}

impl ChartOutput {
    /// Topmost (last drawn) region under `p`.
    pub fn hit_test(&self, p: Vec2) -> Option<(usize, &HitRegion)> {
        self.hit_regions
            .iter()
            .enumerate()
            .rev()
            .find(|(_, r)| r.shape.contains(p))
    }
}

/// Per-instance hover state machine. Pointer events arrive synchronously in
/// order; the last event wins. A disabled controller ignores everything.
#[derive(Clone, Debug, Default)]
pub struct HoverController {
    enabled: bool,
    state: TooltipState,
    active: Option<usize>,
}

impl HoverController {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            state: TooltipState::Hidden,
            active: None,
        }
    }

    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    /// Call when the dataset changes: hover state never outlives the render
    /// pass it was computed against.
    pub fn reset(&mut self) {
        self.state = TooltipState::Hidden;
        self.active = None;
    }

    pub fn pointer_enter(&mut self, output: &ChartOutput, pos: Vec2) {
        self.pointer_move(output, pos);
    }

    pub fn pointer_move(&mut self, output: &ChartOutput, pos: Vec2) {
        if !self.enabled {
            return;
        }
        match output.hit_test(pos) {
            Some((idx, region)) => {
                let position = match region.shape {
                    // Point markers pin to their anchor, area shapes follow
                    // the pointer.
                    HitShape::Circle { .. } => region.anchor + TOOLTIP_OFFSET,
                    _ => pos + TOOLTIP_OFFSET,
                };
                if self.active == Some(idx) {
                    // Same shape: position refresh only, content unchanged.
                    if let TooltipState::Shown {
                        position: ref mut p,
                        ..
                    } = self.state
                    {
                        *p = position;
                        return;
                    }
                }
                trace!(region = idx, "tooltip shown");
                self.active = Some(idx);
                self.state = TooltipState::Shown {
                    content: region.content.clone(),
                    position,
                };
            }
            None => {
                self.active = None;
                self.state = TooltipState::Hidden;
            }
        }
    }

    pub fn pointer_leave(&mut self) {
        if !self.enabled {
            return;
        }
        self.active = None;
        self.state = TooltipState::Hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_types::TooltipLine;

    fn output_with_rect() -> ChartOutput {
        ChartOutput {
            scene: Scene::new(100, 100, "t"),
            hit_regions: vec![HitRegion {
                shape: HitShape::Rect {
                    min: Vec2::new(10.0, 10.0),
                    max: Vec2::new(20.0, 40.0),
                },
                anchor: Vec2::new(15.0, 10.0),
                content: TooltipContent::new(vec![TooltipLine::new("Category", "A")]),
            }],
        }
    }

    #[test]
    fn test_enter_move_leave() {
        let output = output_with_rect();
        let mut hover = HoverController::new(true);

        hover.pointer_enter(&output, Vec2::new(15.0, 20.0));
        assert!(hover.state().is_visible());
        let first = hover.state().position().unwrap();
        assert_eq!(first, Vec2::new(25.0, 10.0));

        hover.pointer_move(&output, Vec2::new(16.0, 21.0));
        assert_eq!(hover.state().position().unwrap(), Vec2::new(26.0, 11.0));

        hover.pointer_leave();
        assert!(!hover.state().is_visible());
    }

    #[test]
    fn test_disabled_controller_ignores_events() {
        let output = output_with_rect();
        let mut hover = HoverController::new(false);
        hover.pointer_enter(&output, Vec2::new(15.0, 20.0));
        assert!(!hover.state().is_visible());
    }

    #[test]
    fn test_move_off_shape_hides() {
        let output = output_with_rect();
        let mut hover = HoverController::new(true);
        hover.pointer_enter(&output, Vec2::new(15.0, 20.0));
        hover.pointer_move(&output, Vec2::new(90.0, 90.0));
        assert!(!hover.state().is_visible());
    }

    #[test]
    fn test_sector_contains() {
        use std::f32::consts::PI;
        let sector = HitShape::Sector {
            center: Vec2::ZERO,
            inner_radius: 0.0,
            outer_radius: 100.0,
            start_angle: 0.0,
            end_angle: PI / 2.0,
        };
        // First quadrant clockwise from 12 o'clock = +x, -y side.
        assert!(sector.contains(Vec2::new(30.0, -30.0)));
        assert!(!sector.contains(Vec2::new(-30.0, -30.0)));
        assert!(!sector.contains(Vec2::new(120.0, -10.0)));
    }
}
