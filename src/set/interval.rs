// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Intervals of ordered segments.

use super::{interval_class, MODULUS};

/// Successive pitch intervals of a pitch segment.
///
/// `ordered = true` keeps direction (negative means descending);
/// otherwise absolute sizes are returned.
pub fn pitch_intervals(pitches: &[i32], ordered: bool) -> Vec<i32> {
    pitches
        .windows(2)
        .map(|pair| pair[1] - pair[0])
        .map(|interval| if ordered { interval } else { interval.abs() })
        .collect()
}

/// Successive ordered pitch-class intervals (b - a mod 12)
pub fn pc_intervals(pcseg: &[i32]) -> Vec<u8> {
    pcseg
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).rem_euclid(MODULUS as i32) as u8)
        .collect()
}

/// Successive interval classes (0-6)
pub fn interval_classes(pcseg: &[i32]) -> Vec<u8> {
    pcseg
        .windows(2)
        .map(|pair| {
            let a = pair[0].rem_euclid(MODULUS as i32) as u8;
            let b = pair[1].rem_euclid(MODULUS as i32) as u8;
            interval_class(a, b)
        })
        .collect()
}
