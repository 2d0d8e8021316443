//! Music volume cycling for the HUD volume button.
//!
//! Each press moves to the next of four fixed levels. The current volume may
//! have been set elsewhere (e.g. restored from storage) and need not sit on a
//! level, so it is first snapped to a level and the level after it is used.

/// Volume levels visited in order, wrapping back to mute.
pub const VOLUME_LEVELS: [f64; 4] = [0.0, 0.3, 0.6, 1.0];

/// Distance within which a volume counts as sitting on a level.
pub const VOLUME_TOLERANCE: f64 = 0.1;

// Distances closer than this are treated as a tie, which goes to the lower level.
const TIE_EPSILON: f64 = 1e-9;

/// Index of the level the given volume is snapped to.
///
/// The first level within [`VOLUME_TOLERANCE`] wins. Otherwise the nearest
/// level is used, ties going to the lower one, rather than restarting from
/// mute: a volume of 0.45 must advance to 0.6, not 0.3. Non-finite input
/// snaps to 0.
pub fn volume_level_index(volume: f64) -> usize {
    if !volume.is_finite() {
        return 0;
    }

    if let Some(idx) = VOLUME_LEVELS
        .iter()
        .position(|level| (level - volume).abs() <= VOLUME_TOLERANCE)
    {
        return idx;
    }

    let mut best = 0;
    let mut best_distance = (VOLUME_LEVELS[0] - volume).abs();
    for (idx, level) in VOLUME_LEVELS.iter().enumerate().skip(1) {
        let distance = (level - volume).abs();
        if distance + TIE_EPSILON < best_distance {
            best = idx;
            best_distance = distance;
        }
    }
    best
}

/// Volume after one press of the volume button.
pub fn next_volume(volume: f64) -> f64 {
    let idx = volume_level_index(volume);
    VOLUME_LEVELS[(idx + 1) % VOLUME_LEVELS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_through_all_levels_from_mute() {
        let mut volume = 0.0;
        let mut seen = Vec::new();
        for _ in 0..4 {
            volume = next_volume(volume);
            seen.push(volume);
        }
        assert_eq!(seen, vec![0.3, 0.6, 1.0, 0.0]);
    }

    #[test]
    fn off_level_volume_snaps_down_on_tie() {
        // 0.45 is equally far from 0.3 and 0.6
        assert_eq!(volume_level_index(0.45), 1);
        assert_eq!(next_volume(0.45), 0.6);
    }

    #[test]
    fn off_level_volume_snaps_to_nearest_level() {
        assert_eq!(volume_level_index(0.85), 3);
        assert_eq!(next_volume(0.85), 0.0);
        assert_eq!(next_volume(0.17), 0.6);
        // Midway between 0.6 and 1.0
        assert_eq!(next_volume(0.8), 1.0);
    }

    #[test]
    fn near_level_uses_tolerance() {
        assert_eq!(next_volume(0.95), 0.0);
        assert_eq!(next_volume(0.25), 0.6);
        assert_eq!(next_volume(0.05), 0.3);
    }

    #[test]
    fn non_finite_volume_restarts_cycle() {
        assert_eq!(next_volume(f64::NAN), 0.3);
        assert_eq!(next_volume(f64::INFINITY), 0.3);
    }
}
