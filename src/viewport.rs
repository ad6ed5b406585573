// Canvas sizing and device probing helpers with no DOM access.

const DPR_MAX: f64 = 3.0; // cap the backing store on very dense displays

/// Device pixel ratio used for the backing store: 1 when unknown, capped.
#[inline]
pub fn effective_dpr(raw: f64) -> f64 {
    if raw.is_finite() && raw > 0.0 {
        raw.min(DPR_MAX)
    } else {
        1.0
    }
}

/// Backing-store size for a canvas of the given CSS size. Never zero.
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let dpr = effective_dpr(dpr);
    let px = |css: f64| {
        if css.is_finite() && css > 0.0 {
            ((css * dpr).round() as u32).max(1)
        } else {
            1
        }
    };
    (px(css_width), px(css_height))
}

#[inline]
pub fn touch_capable(max_touch_points: i32, has_ontouchstart: bool) -> bool {
    has_ontouchstart || max_touch_points > 0
}
