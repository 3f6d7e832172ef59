//! Region color statistics
//!
//! Running per-channel sums and sums of squares over the visible pixels
//! of a square region. Child statistics fold into their parent by
//! pointwise addition, so a region's dispersion can be evaluated
//! without a second pass over its pixels.
//!
//! The representative color of a region is the quadratic mean (RMS) of
//! each channel, not the arithmetic mean: `sqrt(sum_of_squares / n)`.
//! The variance below is derived from the same sum-of-squares
//! statistic, so the two stay consistent and both fall out of the
//! accumulators directly.

use quadpress_core::color;

/// Accumulated color statistics for a square region
///
/// `pixel_count` counts only visible pixels; a region lying entirely
/// outside the source accumulates nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionStats {
    pixel_count: u32,
    sums: [i64; 4],
    square_sums: [i64; 4],
}

impl RegionStats {
    /// Statistics of an empty region (no visible pixels).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Statistics of a single visible pixel.
    pub fn from_pixel(pixel: u32) -> Self {
        let mut sums = [0i64; 4];
        let mut square_sums = [0i64; 4];
        for ch in 0..4 {
            let v = color::channel(pixel, ch) as i64;
            sums[ch] = v;
            square_sums[ch] = v * v;
        }
        RegionStats {
            pixel_count: 1,
            sums,
            square_sums,
        }
    }

    /// Fold another region's statistics into this one.
    ///
    /// Pointwise addition; order-independent.
    pub fn merge(&mut self, other: &RegionStats) {
        self.pixel_count += other.pixel_count;
        for ch in 0..4 {
            self.sums[ch] += other.sums[ch];
            self.square_sums[ch] += other.square_sums[ch];
        }
    }

    /// Number of visible pixels accumulated.
    #[inline]
    pub fn pixel_count(&self) -> u32 {
        self.pixel_count
    }

    /// Check whether no visible pixel has been accumulated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixel_count == 0
    }

    /// Running sum for one channel.
    #[inline]
    pub fn channel_sum(&self, ch: usize) -> i64 {
        self.sums[ch]
    }

    /// Running sum of squares for one channel.
    #[inline]
    pub fn channel_square_sum(&self, ch: usize) -> i64 {
        self.square_sums[ch]
    }

    /// Untruncated quadratic mean of one channel.
    ///
    /// `sqrt(sum_of_squares / n)`, with the division performed in
    /// integer arithmetic. Must not be called when `pixel_count == 0`.
    #[inline]
    fn channel_mean(&self, ch: usize) -> f32 {
        debug_assert!(self.pixel_count > 0);
        ((self.square_sums[ch] / self.pixel_count as i64) as f32).sqrt()
    }

    /// Representative color of the region.
    ///
    /// Each channel is the quadratic mean truncated to 8 bits. Must not
    /// be called when `pixel_count == 0`.
    pub fn mean_color(&self) -> u32 {
        color::compose_rgba(
            self.channel_mean(color::RED) as u8,
            self.channel_mean(color::GREEN) as u8,
            self.channel_mean(color::BLUE) as u8,
            self.channel_mean(color::ALPHA) as u8,
        )
    }

    /// Combined standard deviation across all four channels.
    ///
    /// Per channel, the variance `sum((v - mean)^2) / n` expands to
    ///
    /// ```text
    /// (sum_of_squares - 2*mean*sum + n*mean^2) / n
    /// ```
    ///
    /// evaluated against the quadratic mean: the cross term uses the
    /// truncated 8-bit mean (the value a reconstruction actually
    /// paints), the quadratic term the untruncated one. Channel
    /// variances add, and the square root of their total is the
    /// combined dispersion metric. Must not be called when
    /// `pixel_count == 0`.
    pub fn combined_stdev(&self) -> f32 {
        debug_assert!(self.pixel_count > 0);
        let n = self.pixel_count as i64;
        let mut total = 0.0f32;
        for ch in 0..4 {
            let mean = self.channel_mean(ch);
            let mean_trunc = mean as u8 as i64;
            let cross = self.square_sums[ch] - 2 * mean_trunc * self.sums[ch];
            total += (cross as f32 + n as f32 * mean * mean) / n as f32;
        }
        total.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadpress_core::color::compose_rgba;

    #[test]
    fn test_empty() {
        let stats = RegionStats::empty();
        assert!(stats.is_empty());
        assert_eq!(stats.pixel_count(), 0);
        assert_eq!(stats.channel_sum(0), 0);
        assert_eq!(stats.channel_square_sum(0), 0);
    }

    #[test]
    fn test_from_pixel() {
        let stats = RegionStats::from_pixel(compose_rgba(3, 0, 200, 255));
        assert_eq!(stats.pixel_count(), 1);
        assert_eq!(stats.channel_sum(0), 3);
        assert_eq!(stats.channel_square_sum(0), 9);
        assert_eq!(stats.channel_sum(2), 200);
        assert_eq!(stats.channel_square_sum(2), 40000);
        assert_eq!(stats.channel_sum(3), 255);
        assert_eq!(stats.channel_square_sum(3), 65025);
    }

    #[test]
    fn test_merge_is_pointwise() {
        let mut a = RegionStats::from_pixel(compose_rgba(10, 0, 0, 255));
        let b = RegionStats::from_pixel(compose_rgba(20, 0, 0, 255));
        a.merge(&b);
        assert_eq!(a.pixel_count(), 2);
        assert_eq!(a.channel_sum(0), 30);
        assert_eq!(a.channel_square_sum(0), 100 + 400);
        assert_eq!(a.channel_sum(3), 510);

        // Merging empty statistics changes nothing
        a.merge(&RegionStats::empty());
        assert_eq!(a.pixel_count(), 2);
        assert_eq!(a.channel_sum(0), 30);
    }

    #[test]
    fn test_uniform_region_has_zero_stdev() {
        let pixel = compose_rgba(37, 120, 250, 255);
        let mut stats = RegionStats::empty();
        for _ in 0..16 {
            stats.merge(&RegionStats::from_pixel(pixel));
        }
        assert_eq!(stats.mean_color(), pixel);
        assert_eq!(stats.combined_stdev(), 0.0);
    }

    #[test]
    fn test_known_two_pixel_dispersion() {
        // Red channel 0 and 10, alpha 255 on both:
        //   red: sum = 10, sq = 100, mean = sqrt(100/2) = sqrt(50)
        //        cross = 100 - 2*7*10 = -40
        //        var = (-40 + 2*50) / 2 = 30 (within float rounding)
        //   alpha contributes no variance
        let mut stats = RegionStats::from_pixel(compose_rgba(0, 0, 0, 255));
        stats.merge(&RegionStats::from_pixel(compose_rgba(10, 0, 0, 255)));

        let stdev = stats.combined_stdev();
        assert!((stdev - 30.0f32.sqrt()).abs() < 1e-3, "stdev = {stdev}");

        let (r, g, b, a) = quadpress_core::color::extract_rgba(stats.mean_color());
        assert_eq!((r, g, b, a), (7, 0, 0, 255));
    }

    #[test]
    fn test_mean_is_quadratic_not_arithmetic() {
        // Values 0 and 200: arithmetic mean 100, quadratic mean
        // sqrt(20000) ~ 141
        let mut stats = RegionStats::from_pixel(compose_rgba(0, 0, 0, 255));
        stats.merge(&RegionStats::from_pixel(compose_rgba(200, 0, 0, 255)));
        let r = quadpress_core::color::red(stats.mean_color());
        assert_eq!(r, 141);
    }
}
