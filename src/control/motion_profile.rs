/*
    Speed Profile Generator
        Seven contiguous segments over [0, inf):
        hold 0 -> ramp to 100% -> hold -> ramp to 50% -> hold -> ramp to 75% -> hold forever
        Base profile markers are stretched to the target duration.
        A boundary time belongs to the earlier segment.
*/

use super::*;

// Ramp shape from 0 to 1 with flat start and stop
// Evaluated in f64, the alternating coefficients cancel too much in f32 near k = 1
pub fn bezier(k: f32) -> f32 {
    const R1: f64 = 252.0;
    const R2: f64 = 1050.0;
    const R3: f64 = 1800.0;
    const R4: f64 = 1575.0;
    const R5: f64 = 700.0;
    const R6: f64 = 126.0;

    let k = k as f64;
    let k2 = k * k;
    let k3 = k2 * k;
    let k4 = k3 * k;
    let k5 = k4 * k;

    let value = k5 * (R1 - (R2 * k) + (R3 * k2) - (R4 * k3) + (R5 * k4) - (R6 * k5));
    return value as f32;
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProfileSegment {
    HoldZero,
    RampUp,
    HoldFull,
    RampDown,
    HoldHalf,
    RampToCruise,
    HoldCruise,
}

#[derive(Clone, Copy, Debug)]
pub struct BezierProfile {
    kf_rad_s: f32,
    rpm_scale: f32,
    markers: [f32; 6],
}

impl BezierProfile {
    pub fn new(config: TrajectoryConfig) -> Self {
        let time_scale = config.target_duration_s / config.base_duration_s;

        let mut markers = [0.0; 6];
        for (marker, base) in markers.iter_mut().zip(config.base_markers_s.iter()) {
            *marker = base * time_scale;
        }

        Self {
            kf_rad_s: config.kf_rad_s,
            rpm_scale: config.rpm_scale,
            markers,
        }
    }

    pub fn markers(&self) -> &[f32; 6] {
        &self.markers
    }

    pub fn segment(&self, t_seconds: f32) -> ProfileSegment {
        let [t1, t2, t3, t4, t5, t6] = self.markers;

        if t_seconds <= t1 {
            ProfileSegment::HoldZero
        } else if t_seconds <= t2 {
            ProfileSegment::RampUp
        } else if t_seconds <= t3 {
            ProfileSegment::HoldFull
        } else if t_seconds <= t4 {
            ProfileSegment::RampDown
        } else if t_seconds <= t5 {
            ProfileSegment::HoldHalf
        } else if t_seconds <= t6 {
            ProfileSegment::RampToCruise
        } else {
            ProfileSegment::HoldCruise
        }
    }

    pub fn velocity_rad_s(&self, t_seconds: f32) -> f32 {
        if t_seconds.is_nan() {
            return 0.0;
        }

        let kf = self.kf_rad_s;
        let [t1, t2, t3, t4, t5, t6] = self.markers;

        match self.segment(t_seconds) {
            ProfileSegment::HoldZero => 0.0,
            ProfileSegment::RampUp => {
                let k = (t_seconds - t1) / (t2 - t1);
                kf * bezier(k)
            },
            ProfileSegment::HoldFull => kf,
            ProfileSegment::RampDown => {
                let k = (t_seconds - t3) / (t4 - t3);
                kf - kf * 0.5 * bezier(k)
            },
            ProfileSegment::HoldHalf => kf * 0.5,
            ProfileSegment::RampToCruise => {
                let k = (t_seconds - t5) / (t6 - t5);
                (kf * 0.5) + kf * 0.25 * bezier(k)
            },
            ProfileSegment::HoldCruise => kf * (1.0 - 0.25),
        }
    }

    pub fn reference_rpm(&self, t_seconds: f32) -> f32 {
        return self.velocity_rad_s(t_seconds) * RAD_S_TO_RPM * self.rpm_scale;
    }
}

impl Default for BezierProfile {
    fn default() -> Self {
        Self::new(crate::resources::DEFAULT_TRAJECTORY_CONFIG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_RPM: f32 = 24.0 * RAD_S_TO_RPM * 1.7;

    #[test]
    fn bezier_is_a_smooth_unit_ramp() {
        assert_eq!(bezier(0.0), 0.0);
        assert!((bezier(1.0) - 1.0).abs() < 1e-6);

        let mut previous = 0.0;
        for i in 1..=100 {
            let value = bezier(i as f32 / 100.0);
            assert!(value >= previous - 1e-6, "ramp must not go backwards at {}", i);
            previous = value;
        }
    }

    #[test]
    fn bezier_settles_flat_at_both_ends() {
        assert!(bezier(1.0e-4) < 1.0e-6);
        assert!(bezier(1.0 - 1.0e-4) > 1.0 - 1.0e-6);

        let mut previous = bezier(0.9);
        for i in 1..=1000 {
            let value = bezier(0.9 + 0.1 * i as f32 / 1000.0);
            assert!(value >= previous, "ramp must not go backwards near the end at {}", i);
            previous = value;
        }
        assert_eq!(previous, 1.0);
    }

    #[test]
    fn starts_from_rest() {
        let profile = BezierProfile::default();
        assert_eq!(profile.reference_rpm(0.0), 0.0);
        assert_eq!(profile.reference_rpm(-3.0), 0.0);
        assert_eq!(profile.segment(0.0), ProfileSegment::HoldZero);
    }

    #[test]
    fn markers_are_scaled_and_increasing() {
        let profile = BezierProfile::default();
        let markers = profile.markers();
        assert!((markers[0] - 0.1 * 40.0 / 3.3).abs() < 1e-4);
        assert!((markers[5] - 40.0).abs() < 1e-4);
        assert!(markers.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn boundary_belongs_to_earlier_segment() {
        let profile = BezierProfile::default();
        let markers = *profile.markers();
        assert_eq!(profile.segment(markers[0]), ProfileSegment::HoldZero);
        assert_eq!(profile.segment(markers[1]), ProfileSegment::RampUp);
        assert_eq!(profile.segment(markers[5]), ProfileSegment::RampToCruise);
        assert_eq!(profile.segment(markers[5] + 0.01), ProfileSegment::HoldCruise);
    }

    #[test]
    fn continuous_across_boundaries() {
        let profile = BezierProfile::default();
        for marker in profile.markers() {
            let at = profile.reference_rpm(*marker);
            let left = profile.reference_rpm(*marker - 1e-4);
            let right = profile.reference_rpm(*marker + 1e-4);
            assert!((left - at).abs() < 1e-3, "jump into {}: {} -> {}", marker, left, at);
            assert!((at - right).abs() < 1e-3, "jump out of {}: {} -> {}", marker, at, right);
        }
    }

    #[test]
    fn ramps_approach_their_end_level_from_the_left() {
        let profile = BezierProfile::default();
        let markers = *profile.markers();
        let ends = [(markers[1], FULL_RPM), (markers[3], FULL_RPM * 0.5), (markers[5], FULL_RPM * 0.75)];

        for (end, level) in ends {
            for step in 1..=10 {
                let t = end - step as f32 * 1e-4;
                let rpm = profile.reference_rpm(t);
                assert!((rpm - level).abs() < 1e-3, "{} rpm at {} s, expected {}", rpm, t, level);
            }
        }
    }

    #[test]
    fn plateau_levels() {
        let profile = BezierProfile::default();
        let markers = *profile.markers();
        let mid = |a: f32, b: f32| (a + b) / 2.0;

        assert!((profile.reference_rpm(mid(markers[1], markers[2])) - FULL_RPM).abs() < 1e-3);
        assert!((profile.reference_rpm(mid(markers[3], markers[4])) - FULL_RPM * 0.5).abs() < 1e-3);
        assert!((profile.reference_rpm(markers[5] + 1.0) - FULL_RPM * 0.75).abs() < 1e-3);
    }

    #[test]
    fn constant_after_last_marker() {
        let profile = BezierProfile::default();
        let tail = profile.reference_rpm(41.0);
        assert_eq!(profile.reference_rpm(100.0), tail);
        assert_eq!(profile.reference_rpm(1.0e6), tail);
        assert_eq!(profile.reference_rpm(f32::INFINITY), tail);
    }

    #[test]
    fn deterministic_and_nan_safe() {
        let profile = BezierProfile::default();
        for t in [0.5_f32, 3.3, 7.77, 20.0, 39.0] {
            assert_eq!(profile.reference_rpm(t), profile.reference_rpm(t));
        }
        assert_eq!(profile.reference_rpm(f32::NAN), 0.0);
    }
}
