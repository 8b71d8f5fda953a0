pub const MAX_TILT_DEG: f64 = 10.0;
pub const PERSPECTIVE_PX: u32 = 1000;

/// Resting transform for a tilt card.
pub fn neutral() -> String {
    tilt_transform(0.0, 0.0, 0.0, 0.0, MAX_TILT_DEG)
}

/// CSS transform that leans a card towards the pointer.
///
/// `x`/`y` are relative to the card's top-left corner. The card's centre is
/// flat; its edges reach `max_deg`. Points outside the card are clamped.
pub fn tilt_transform(x: f64, y: f64, width: f64, height: f64, max_deg: f64) -> String {
    let (rx, ry) = if width > 0.0 && height > 0.0 {
        let (cx, cy) = (width / 2.0, height / 2.0);
        let rx = ((y - cy) / cy).clamp(-1.0, 1.0) * -max_deg;
        let ry = ((x - cx) / cx).clamp(-1.0, 1.0) * max_deg;
        (rx, ry)
    } else {
        (0.0, 0.0)
    };
    // + 0.0 folds -0.0 so the centre prints as 0.00
    format!(
        "perspective({PERSPECTIVE_PX}px) rotateX({:.2}deg) rotateY({:.2}deg)",
        rx + 0.0,
        ry + 0.0
    )
}
