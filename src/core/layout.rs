//! Menu placement
//!
//! Pure viewport-geometry math for the root menu and for folder
//! sub-panels. All coordinates are signed absolute terminal cells: the
//! upward flip deliberately does not re-clamp, so a menu taller than the
//! viewport keeps its documented partially-off-screen placement and the
//! renderer clips it.

/// Folder panels overlap their parent by one cell so the borders merge
/// into a single column.
const FOLDER_OVERLAP: i32 = 1;

/// Place the root menu for an anchor point (usually the pointer).
///
/// The anchor is nudged left by `x_offset` so the pointer starts inside
/// the menu, then clamped to the horizontal viewport range. On bottom
/// overflow the menu flips upward by its own height with no further
/// clamping; the resulting top may be negative.
pub fn place_root(
    anchor: (i32, i32),
    size: (u16, u16),
    viewport: (u16, u16),
    x_offset: i32,
) -> (i32, i32) {
    let (w, h) = (size.0 as i32, size.1 as i32);
    let (vw, vh) = (viewport.0 as i32, viewport.1 as i32);

    let left = (anchor.0 - x_offset).min(vw - w).max(0);

    let mut top = anchor.1;
    if top + h > vh {
        top -= h;
    }

    (left, top)
}

/// Place a folder sub-panel relative to its parent panel and the row that
/// triggered it.
///
/// Default placement opens rightward at a fixed pitch (parent width minus
/// the merged border column) with the folder's first row aligned to the
/// trigger row. Right-edge overflow flips it to open leftward of the
/// parent column; bottom-edge overflow anchors the folder's bottom to the
/// trigger row. The two corrections are independent and may both apply.
pub fn place_folder(
    parent_left: i32,
    parent_width: u16,
    trigger_y: i32,
    size: (u16, u16),
    viewport: (u16, u16),
) -> (i32, i32) {
    let (w, h) = (size.0 as i32, size.1 as i32);
    let (vw, vh) = (viewport.0 as i32, viewport.1 as i32);

    let mut left = parent_left + parent_width as i32 - FOLDER_OVERLAP;
    if left + w > vw {
        left = parent_left - w + FOLDER_OVERLAP;
    }

    // Put the top border one row above the trigger so the folder's first
    // entry lands exactly on the trigger row.
    let mut top = trigger_y - 1;
    if top + h > vh {
        top = trigger_y - h + 1;
    }

    (left, top)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_natural_placement() {
        let (left, top) = place_root((20, 10), (12, 6), (80, 24), 2);
        assert_eq!((left, top), (18, 10));
    }

    #[test]
    fn test_root_clamps_to_right_edge_exactly() {
        // Would overflow the right edge: clamped, not flipped
        let (left, _) = place_root((75, 5), (12, 6), (80, 24), 2);
        assert_eq!(left, 80 - 12);
    }

    #[test]
    fn test_root_clamps_to_left_edge() {
        let (left, _) = place_root((1, 5), (12, 6), (80, 24), 2);
        assert_eq!(left, 0);
    }

    #[test]
    fn test_root_flips_up_on_bottom_overflow() {
        let (_, top) = place_root((10, 20), (12, 6), (80, 24), 2);
        assert_eq!(top, 20 - 6);
    }

    #[test]
    fn test_root_flip_up_may_go_negative() {
        // A menu taller than the viewport flips above the screen and is
        // not re-clamped
        let (_, top) = place_root((10, 20), (12, 30), (80, 24), 2);
        assert_eq!(top, -10);
    }

    #[test]
    fn test_folder_opens_rightward_by_default() {
        let (left, top) = place_folder(10, 14, 8, (10, 5), (80, 24));
        assert_eq!(left, 10 + 14 - 1);
        assert_eq!(top, 7);
    }

    #[test]
    fn test_folder_flips_left_on_right_overflow() {
        // Parent column ends near the right edge: folder opens flush left
        // of the parent instead
        let (left, _) = place_folder(60, 18, 8, (10, 5), (80, 24));
        assert_eq!(left, 60 - 10 + 1);
    }

    #[test]
    fn test_folder_anchors_bottom_on_bottom_overflow() {
        let (_, top) = place_folder(10, 14, 22, (10, 8), (80, 24));
        assert_eq!(top, 22 - 8 + 1);
    }

    #[test]
    fn test_folder_corrections_are_independent() {
        // Overflows both edges: opens left and up simultaneously
        let (left, top) = place_folder(65, 14, 22, (10, 8), (80, 24));
        assert_eq!(left, 65 - 10 + 1);
        assert_eq!(top, 22 - 8 + 1);
    }
}
