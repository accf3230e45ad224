use crate::coords::Point;

/// Default minimum distance, in normalized space, between consecutive
/// stored stroke points.
///
/// At typical surface sizes this thins a dense move stream to roughly
/// sub-pixel resolution: near-duplicate samples are discarded, which bounds
/// stroke length without visible degradation. Whether this should scale
/// with pen size or device pixel density is an open tuning question, hence
/// a config field rather than a hard-wired constant.
pub const MIN_SAMPLE_DISTANCE: f32 = 0.002;

/// Tuning for the gesture-to-path sampler.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SamplerConfig {
    pub min_distance: f32,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            min_distance: MIN_SAMPLE_DISTANCE,
        }
    }
}

impl SamplerConfig {
    /// Whether a move sample is far enough from the last stored point to be
    /// appended. Accepted points are never later removed.
    #[inline]
    pub fn accepts(&self, last: Point, candidate: Point) -> bool {
        last.distance_to(candidate) >= self.min_distance
    }
}
