/// Smallest extent an item may resolve to.
pub const MIN_EXTENT: f32 = 10.0;

/// Resolves the per-item extent.
///
/// - With `desired_visible_count > 0` and a positive viewport, the viewport is split evenly.
/// - With a visible-count lock but no viewport yet, `previous` is kept.
/// - Otherwise the measured prototype extent is used, falling back to `previous`.
///
/// The result is never below [`MIN_EXTENT`].
pub fn resolve_extent(
    desired_visible_count: usize,
    viewport_main: f32,
    measured: f32,
    previous: f32,
) -> f32 {
    let raw = if desired_visible_count > 0 {
        if viewport_main > 0.0 {
            viewport_main / desired_visible_count as f32
        } else {
            previous
        }
    } else if measured > 0.0 {
        measured
    } else {
        previous
    };
    raw.max(MIN_EXTENT)
}

/// Picks the first positive prototype measurement, or `0.0` when there is none.
pub fn measure_prototype(natural: f32, preferred: Option<f32>) -> f32 {
    if natural > 0.0 {
        return natural;
    }
    match preferred {
        Some(p) if p > 0.0 => p,
        _ => 0.0,
    }
}

/// Total scrollable extent of `count` items of `item_extent` each.
pub fn total_extent(item_extent: f32, count: usize) -> f32 {
    count as f32 * item_extent.max(MIN_EXTENT)
}

pub(crate) fn approx_eq(a: f32, b: f32) -> bool {
    if a == b {
        return true;
    }
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= f32::EPSILON * 8.0 * scale
}

/// Tracks the resolved item extent and the visible-count lock.
#[derive(Clone, Copy, Debug)]
pub struct ExtentResolver {
    item_extent: f32,
    desired_visible_count: usize,
}

impl ExtentResolver {
    pub fn new(item_extent: f32, desired_visible_count: usize) -> Self {
        Self {
            item_extent: item_extent.max(MIN_EXTENT),
            desired_visible_count,
        }
    }

    pub fn item_extent(&self) -> f32 {
        self.item_extent
    }

    pub fn desired_visible_count(&self) -> usize {
        self.desired_visible_count
    }

    /// Whether the extent is derived from the viewport rather than measured.
    pub fn is_locked(&self) -> bool {
        self.desired_visible_count > 0
    }

    pub fn set_desired_visible_count(&mut self, count: usize) {
        self.desired_visible_count = count;
    }

    /// Overrides the extent directly. Returns `true` if the value changed.
    pub fn set_item_extent(&mut self, extent: f32) -> bool {
        self.replace(extent.max(MIN_EXTENT))
    }

    /// Re-resolves against the current viewport and prototype measurement.
    ///
    /// Returns `true` if the resolved value changed; callers must then force a full rebuild.
    pub fn resolve(&mut self, viewport_main: f32, measured: f32) -> bool {
        let next = resolve_extent(
            self.desired_visible_count,
            viewport_main,
            measured,
            self.item_extent,
        );
        self.replace(next)
    }

    pub fn total_extent(&self, count: usize) -> f32 {
        total_extent(self.item_extent, count)
    }

    fn replace(&mut self, next: f32) -> bool {
        let changed = !approx_eq(self.item_extent, next);
        self.item_extent = next;
        changed
    }
}

impl Default for ExtentResolver {
    fn default() -> Self {
        Self::new(crate::options::DEFAULT_ITEM_EXTENT, 0)
    }
}
