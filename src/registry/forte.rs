// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Forte's catalogue of set classes.
//!
//! One row per non-empty set class: name, prime form and interval-class
//! vector. Rows run in catalogue order within each cardinality; the
//! classes of cardinality 7-9 and 10-12 carry the ordinal of their
//! complement.

/// (name, prime form, interval-class vector)
pub type ForteRow = (&'static str, &'static [u8], [u32; 6]);

pub const FORTE_TABLE: &[ForteRow] = &[
    ("1-1", &[0], [0, 0, 0, 0, 0, 0]),
    ("2-1", &[0, 1], [1, 0, 0, 0, 0, 0]),
    ("2-2", &[0, 2], [0, 1, 0, 0, 0, 0]),
    ("2-3", &[0, 3], [0, 0, 1, 0, 0, 0]),
    ("2-4", &[0, 4], [0, 0, 0, 1, 0, 0]),
    ("2-5", &[0, 5], [0, 0, 0, 0, 1, 0]),
    ("2-6", &[0, 6], [0, 0, 0, 0, 0, 1]),
    ("3-1", &[0, 1, 2], [2, 1, 0, 0, 0, 0]),
    ("3-2", &[0, 1, 3], [1, 1, 1, 0, 0, 0]),
    ("3-3", &[0, 1, 4], [1, 0, 1, 1, 0, 0]),
    ("3-4", &[0, 1, 5], [1, 0, 0, 1, 1, 0]),
    ("3-5", &[0, 1, 6], [1, 0, 0, 0, 1, 1]),
    ("3-6", &[0, 2, 4], [0, 2, 0, 1, 0, 0]),
    ("3-7", &[0, 2, 5], [0, 1, 1, 0, 1, 0]),
    ("3-8", &[0, 2, 6], [0, 1, 0, 1, 0, 1]),
    ("3-9", &[0, 2, 7], [0, 1, 0, 0, 2, 0]),
    ("3-10", &[0, 3, 6], [0, 0, 2, 0, 0, 1]),
    ("3-11", &[0, 3, 7], [0, 0, 1, 1, 1, 0]),
    ("3-12", &[0, 4, 8], [0, 0, 0, 3, 0, 0]),
    ("4-1", &[0, 1, 2, 3], [3, 2, 1, 0, 0, 0]),
    ("4-2", &[0, 1, 2, 4], [2, 2, 1, 1, 0, 0]),
    ("4-4", &[0, 1, 2, 5], [2, 1, 1, 1, 1, 0]),
    ("4-5", &[0, 1, 2, 6], [2, 1, 0, 1, 1, 1]),
    ("4-6", &[0, 1, 2, 7], [2, 1, 0, 0, 2, 1]),
    ("4-3", &[0, 1, 3, 4], [2, 1, 2, 1, 0, 0]),
    ("4-11", &[0, 1, 3, 5], [1, 2, 1, 1, 1, 0]),
    ("4-13", &[0, 1, 3, 6], [1, 1, 2, 0, 1, 1]),
    ("4-Z29", &[0, 1, 3, 7], [1, 1, 1, 1, 1, 1]),
    ("4-7", &[0, 1, 4, 5], [2, 0, 1, 2, 1, 0]),
    ("4-Z15", &[0, 1, 4, 6], [1, 1, 1, 1, 1, 1]),
    ("4-18", &[0, 1, 4, 7], [1, 0, 2, 1, 1, 1]),
    ("4-19", &[0, 1, 4, 8], [1, 0, 1, 3, 1, 0]),
    ("4-8", &[0, 1, 5, 6], [2, 0, 0, 1, 2, 1]),
    ("4-16", &[0, 1, 5, 7], [1, 1, 0, 1, 2, 1]),
    ("4-20", &[0, 1, 5, 8], [1, 0, 1, 2, 2, 0]),
    ("4-9", &[0, 1, 6, 7], [2, 0, 0, 0, 2, 2]),
    ("4-10", &[0, 2, 3, 5], [1, 2, 2, 0, 1, 0]),
    ("4-12", &[0, 2, 3, 6], [1, 1, 2, 1, 0, 1]),
    ("4-14", &[0, 2, 3, 7], [1, 1, 1, 1, 2, 0]),
    ("4-21", &[0, 2, 4, 6], [0, 3, 0, 2, 0, 1]),
    ("4-22", &[0, 2, 4, 7], [0, 2, 1, 1, 2, 0]),
    ("4-24", &[0, 2, 4, 8], [0, 2, 0, 3, 0, 1]),
    ("4-23", &[0, 2, 5, 7], [0, 2, 1, 0, 3, 0]),
    ("4-27", &[0, 2, 5, 8], [0, 1, 2, 1, 1, 1]),
    ("4-25", &[0, 2, 6, 8], [0, 2, 0, 2, 0, 2]),
    ("4-17", &[0, 3, 4, 7], [1, 0, 2, 2, 1, 0]),
    ("4-26", &[0, 3, 5, 8], [0, 1, 2, 1, 2, 0]),
    ("4-28", &[0, 3, 6, 9], [0, 0, 4, 0, 0, 2]),
    ("5-1", &[0, 1, 2, 3, 4], [4, 3, 2, 1, 0, 0]),
    ("5-2", &[0, 1, 2, 3, 5], [3, 3, 2, 1, 1, 0]),
    ("5-4", &[0, 1, 2, 3, 6], [3, 2, 2, 1, 1, 1]),
    ("5-5", &[0, 1, 2, 3, 7], [3, 2, 1, 1, 2, 1]),
    ("5-3", &[0, 1, 2, 4, 5], [3, 2, 2, 2, 1, 0]),
    ("5-9", &[0, 1, 2, 4, 6], [2, 3, 1, 2, 1, 1]),
    ("5-Z36", &[0, 1, 2, 4, 7], [2, 2, 2, 1, 2, 1]),
    ("5-13", &[0, 1, 2, 4, 8], [2, 2, 1, 3, 1, 1]),
    ("5-6", &[0, 1, 2, 5, 6], [3, 1, 1, 2, 2, 1]),
    ("5-14", &[0, 1, 2, 5, 7], [2, 2, 1, 1, 3, 1]),
    ("5-Z38", &[0, 1, 2, 5, 8], [2, 1, 2, 2, 2, 1]),
    ("5-7", &[0, 1, 2, 6, 7], [3, 1, 0, 1, 3, 2]),
    ("5-15", &[0, 1, 2, 6, 8], [2, 2, 0, 2, 2, 2]),
    ("5-10", &[0, 1, 3, 4, 6], [2, 2, 3, 1, 1, 1]),
    ("5-16", &[0, 1, 3, 4, 7], [2, 1, 3, 2, 1, 1]),
    ("5-Z17", &[0, 1, 3, 4, 8], [2, 1, 2, 3, 2, 0]),
    ("5-Z12", &[0, 1, 3, 5, 6], [2, 2, 2, 1, 2, 1]),
    ("5-24", &[0, 1, 3, 5, 7], [1, 3, 1, 2, 2, 1]),
    ("5-27", &[0, 1, 3, 5, 8], [1, 2, 2, 2, 3, 0]),
    ("5-19", &[0, 1, 3, 6, 7], [2, 1, 2, 1, 2, 2]),
    ("5-29", &[0, 1, 3, 6, 8], [1, 2, 2, 1, 3, 1]),
    ("5-31", &[0, 1, 3, 6, 9], [1, 1, 4, 1, 1, 2]),
    ("5-Z18", &[0, 1, 4, 5, 7], [2, 1, 2, 2, 2, 1]),
    ("5-21", &[0, 1, 4, 5, 8], [2, 0, 2, 4, 2, 0]),
    ("5-30", &[0, 1, 4, 6, 8], [1, 2, 1, 3, 2, 1]),
    ("5-32", &[0, 1, 4, 6, 9], [1, 1, 3, 2, 2, 1]),
    ("5-22", &[0, 1, 4, 7, 8], [2, 0, 2, 3, 2, 1]),
    ("5-20", &[0, 1, 5, 6, 8], [2, 1, 1, 2, 3, 1]),
    ("5-8", &[0, 2, 3, 4, 6], [2, 3, 2, 2, 0, 1]),
    ("5-11", &[0, 2, 3, 4, 7], [2, 2, 2, 2, 2, 0]),
    ("5-23", &[0, 2, 3, 5, 7], [1, 3, 2, 1, 3, 0]),
    ("5-25", &[0, 2, 3, 5, 8], [1, 2, 3, 1, 2, 1]),
    ("5-28", &[0, 2, 3, 6, 8], [1, 2, 2, 2, 1, 2]),
    ("5-26", &[0, 2, 4, 5, 8], [1, 2, 2, 3, 1, 1]),
    ("5-33", &[0, 2, 4, 6, 8], [0, 4, 0, 4, 0, 2]),
    ("5-34", &[0, 2, 4, 6, 9], [0, 3, 2, 2, 2, 1]),
    ("5-35", &[0, 2, 4, 7, 9], [0, 3, 2, 1, 4, 0]),
    ("5-Z37", &[0, 3, 4, 5, 8], [2, 1, 2, 3, 2, 0]),
    ("6-1", &[0, 1, 2, 3, 4, 5], [5, 4, 3, 2, 1, 0]),
    ("6-2", &[0, 1, 2, 3, 4, 6], [4, 4, 3, 2, 1, 1]),
    ("6-Z36", &[0, 1, 2, 3, 4, 7], [4, 3, 3, 2, 2, 1]),
    ("6-Z37", &[0, 1, 2, 3, 4, 8], [4, 3, 2, 3, 2, 1]),
    ("6-Z3", &[0, 1, 2, 3, 5, 6], [4, 3, 3, 2, 2, 1]),
    ("6-9", &[0, 1, 2, 3, 5, 7], [3, 4, 2, 2, 3, 1]),
    ("6-Z40", &[0, 1, 2, 3, 5, 8], [3, 3, 3, 2, 3, 1]),
    ("6-5", &[0, 1, 2, 3, 6, 7], [4, 2, 2, 2, 3, 2]),
    ("6-Z41", &[0, 1, 2, 3, 6, 8], [3, 3, 2, 2, 3, 2]),
    ("6-Z42", &[0, 1, 2, 3, 6, 9], [3, 2, 4, 2, 2, 2]),
    ("6-Z38", &[0, 1, 2, 3, 7, 8], [4, 2, 1, 2, 4, 2]),
    ("6-Z4", &[0, 1, 2, 4, 5, 6], [4, 3, 2, 3, 2, 1]),
    ("6-Z11", &[0, 1, 2, 4, 5, 7], [3, 3, 3, 2, 3, 1]),
    ("6-15", &[0, 1, 2, 4, 5, 8], [3, 2, 3, 4, 2, 1]),
    ("6-Z12", &[0, 1, 2, 4, 6, 7], [3, 3, 2, 2, 3, 2]),
    ("6-22", &[0, 1, 2, 4, 6, 8], [2, 4, 1, 4, 2, 2]),
    ("6-Z46", &[0, 1, 2, 4, 6, 9], [2, 3, 3, 3, 3, 1]),
    ("6-Z17", &[0, 1, 2, 4, 7, 8], [3, 2, 2, 3, 3, 2]),
    ("6-Z47", &[0, 1, 2, 4, 7, 9], [2, 3, 3, 2, 4, 1]),
    ("6-Z6", &[0, 1, 2, 5, 6, 7], [4, 2, 1, 2, 4, 2]),
    ("6-Z43", &[0, 1, 2, 5, 6, 8], [3, 2, 2, 3, 3, 2]),
    ("6-Z44", &[0, 1, 2, 5, 6, 9], [3, 1, 3, 4, 3, 1]),
    ("6-18", &[0, 1, 2, 5, 7, 8], [3, 2, 2, 2, 4, 2]),
    ("6-Z48", &[0, 1, 2, 5, 7, 9], [2, 3, 2, 3, 4, 1]),
    ("6-7", &[0, 1, 2, 6, 7, 8], [4, 2, 0, 2, 4, 3]),
    ("6-Z10", &[0, 1, 3, 4, 5, 7], [3, 3, 3, 3, 2, 1]),
    ("6-14", &[0, 1, 3, 4, 5, 8], [3, 2, 3, 4, 3, 0]),
    ("6-Z13", &[0, 1, 3, 4, 6, 7], [3, 2, 4, 2, 2, 2]),
    ("6-Z24", &[0, 1, 3, 4, 6, 8], [2, 3, 3, 3, 3, 1]),
    ("6-27", &[0, 1, 3, 4, 6, 9], [2, 2, 5, 2, 2, 2]),
    ("6-Z19", &[0, 1, 3, 4, 7, 8], [3, 1, 3, 4, 3, 1]),
    ("6-Z49", &[0, 1, 3, 4, 7, 9], [2, 2, 4, 3, 2, 2]),
    ("6-Z25", &[0, 1, 3, 5, 6, 8], [2, 3, 3, 2, 4, 1]),
    ("6-Z28", &[0, 1, 3, 5, 6, 9], [2, 2, 4, 3, 2, 2]),
    ("6-Z26", &[0, 1, 3, 5, 7, 8], [2, 3, 2, 3, 4, 1]),
    ("6-34", &[0, 1, 3, 5, 7, 9], [1, 4, 2, 4, 2, 2]),
    ("6-30", &[0, 1, 3, 6, 7, 9], [2, 2, 4, 2, 2, 3]),
    ("6-16", &[0, 1, 4, 5, 6, 8], [3, 2, 2, 4, 3, 1]),
    ("6-31", &[0, 1, 4, 5, 7, 9], [2, 2, 3, 4, 3, 1]),
    ("6-20", &[0, 1, 4, 5, 8, 9], [3, 0, 3, 6, 3, 0]),
    ("6-Z50", &[0, 1, 4, 6, 7, 9], [2, 2, 4, 2, 3, 2]),
    ("6-8", &[0, 2, 3, 4, 5, 7], [3, 4, 3, 2, 3, 0]),
    ("6-Z39", &[0, 2, 3, 4, 5, 8], [3, 3, 3, 3, 2, 1]),
    ("6-21", &[0, 2, 3, 4, 6, 8], [2, 4, 2, 4, 1, 2]),
    ("6-Z45", &[0, 2, 3, 4, 6, 9], [2, 3, 4, 2, 2, 2]),
    ("6-Z23", &[0, 2, 3, 5, 6, 8], [2, 3, 4, 2, 2, 2]),
    ("6-33", &[0, 2, 3, 5, 7, 9], [1, 4, 3, 2, 4, 1]),
    ("6-Z29", &[0, 2, 3, 6, 7, 9], [2, 2, 4, 2, 3, 2]),
    ("6-32", &[0, 2, 4, 5, 7, 9], [1, 4, 3, 2, 5, 0]),
    ("6-35", &[0, 2, 4, 6, 8, 10], [0, 6, 0, 6, 0, 3]),
    ("7-1", &[0, 1, 2, 3, 4, 5, 6], [6, 5, 4, 3, 2, 1]),
    ("7-2", &[0, 1, 2, 3, 4, 5, 7], [5, 5, 4, 3, 3, 1]),
    ("7-4", &[0, 1, 2, 3, 4, 6, 7], [5, 4, 4, 3, 3, 2]),
    ("7-5", &[0, 1, 2, 3, 5, 6, 7], [5, 4, 3, 3, 4, 2]),
    ("7-3", &[0, 1, 2, 3, 4, 5, 8], [5, 4, 4, 4, 3, 1]),
    ("7-9", &[0, 1, 2, 3, 4, 6, 8], [4, 5, 3, 4, 3, 2]),
    ("7-Z36", &[0, 1, 2, 3, 5, 6, 8], [4, 4, 4, 3, 4, 2]),
    ("7-13", &[0, 1, 2, 4, 5, 6, 8], [4, 4, 3, 5, 3, 2]),
    ("7-6", &[0, 1, 2, 3, 4, 7, 8], [5, 3, 3, 4, 4, 2]),
    ("7-14", &[0, 1, 2, 3, 5, 7, 8], [4, 4, 3, 3, 5, 2]),
    ("7-Z38", &[0, 1, 2, 4, 5, 7, 8], [4, 3, 4, 4, 4, 2]),
    ("7-7", &[0, 1, 2, 3, 6, 7, 8], [5, 3, 2, 3, 5, 3]),
    ("7-15", &[0, 1, 2, 4, 6, 7, 8], [4, 4, 2, 4, 4, 3]),
    ("7-10", &[0, 1, 2, 3, 4, 6, 9], [4, 4, 5, 3, 3, 2]),
    ("7-16", &[0, 1, 2, 3, 5, 6, 9], [4, 3, 5, 4, 3, 2]),
    ("7-Z17", &[0, 1, 2, 4, 5, 6, 9], [4, 3, 4, 5, 4, 1]),
    ("7-Z12", &[0, 1, 2, 3, 4, 7, 9], [4, 4, 4, 3, 4, 2]),
    ("7-24", &[0, 1, 2, 3, 5, 7, 9], [3, 5, 3, 4, 4, 2]),
    ("7-27", &[0, 1, 2, 4, 5, 7, 9], [3, 4, 4, 4, 5, 1]),
    ("7-19", &[0, 1, 2, 3, 6, 7, 9], [4, 3, 4, 3, 4, 3]),
    ("7-29", &[0, 1, 2, 4, 6, 7, 9], [3, 4, 4, 3, 5, 2]),
    ("7-31", &[0, 1, 3, 4, 6, 7, 9], [3, 3, 6, 3, 3, 3]),
    ("7-Z18", &[0, 1, 4, 5, 6, 7, 9], [4, 3, 4, 4, 4, 2]),
    ("7-21", &[0, 1, 2, 4, 5, 8, 9], [4, 2, 4, 6, 4, 1]),
    ("7-30", &[0, 1, 2, 4, 6, 8, 9], [3, 4, 3, 5, 4, 2]),
    ("7-32", &[0, 1, 3, 4, 6, 8, 9], [3, 3, 5, 4, 4, 2]),
    ("7-22", &[0, 1, 2, 5, 6, 8, 9], [4, 2, 4, 5, 4, 2]),
    ("7-20", &[0, 1, 2, 5, 6, 7, 9], [4, 3, 3, 4, 5, 2]),
    ("7-8", &[0, 2, 3, 4, 5, 6, 8], [4, 5, 4, 4, 2, 2]),
    ("7-11", &[0, 1, 3, 4, 5, 6, 8], [4, 4, 4, 4, 4, 1]),
    ("7-23", &[0, 2, 3, 4, 5, 7, 9], [3, 5, 4, 3, 5, 1]),
    ("7-25", &[0, 2, 3, 4, 6, 7, 9], [3, 4, 5, 3, 4, 2]),
    ("7-28", &[0, 1, 3, 5, 6, 7, 9], [3, 4, 4, 4, 3, 3]),
    ("7-26", &[0, 1, 3, 4, 5, 7, 9], [3, 4, 4, 5, 3, 2]),
    ("7-33", &[0, 1, 2, 4, 6, 8, 10], [2, 6, 2, 6, 2, 3]),
    ("7-34", &[0, 1, 3, 4, 6, 8, 10], [2, 5, 4, 4, 4, 2]),
    ("7-35", &[0, 1, 3, 5, 6, 8, 10], [2, 5, 4, 3, 6, 1]),
    ("7-Z37", &[0, 1, 3, 4, 5, 7, 8], [4, 3, 4, 5, 4, 1]),
    ("8-1", &[0, 1, 2, 3, 4, 5, 6, 7], [7, 6, 5, 4, 4, 2]),
    ("8-2", &[0, 1, 2, 3, 4, 5, 6, 8], [6, 6, 5, 5, 4, 2]),
    ("8-4", &[0, 1, 2, 3, 4, 5, 7, 8], [6, 5, 5, 5, 5, 2]),
    ("8-5", &[0, 1, 2, 3, 4, 6, 7, 8], [6, 5, 4, 5, 5, 3]),
    ("8-6", &[0, 1, 2, 3, 5, 6, 7, 8], [6, 5, 4, 4, 6, 3]),
    ("8-3", &[0, 1, 2, 3, 4, 5, 6, 9], [6, 5, 6, 5, 4, 2]),
    ("8-11", &[0, 1, 2, 3, 4, 5, 7, 9], [5, 6, 5, 5, 5, 2]),
    ("8-13", &[0, 1, 2, 3, 4, 6, 7, 9], [5, 5, 6, 4, 5, 3]),
    ("8-Z29", &[0, 1, 2, 3, 5, 6, 7, 9], [5, 5, 5, 5, 5, 3]),
    ("8-7", &[0, 1, 2, 3, 4, 5, 8, 9], [6, 4, 5, 6, 5, 2]),
    ("8-Z15", &[0, 1, 2, 3, 4, 6, 8, 9], [5, 5, 5, 5, 5, 3]),
    ("8-18", &[0, 1, 2, 3, 5, 6, 8, 9], [5, 4, 6, 5, 5, 3]),
    ("8-19", &[0, 1, 2, 4, 5, 6, 8, 9], [5, 4, 5, 7, 5, 2]),
    ("8-8", &[0, 1, 2, 3, 4, 7, 8, 9], [6, 4, 4, 5, 6, 3]),
    ("8-16", &[0, 1, 2, 3, 5, 7, 8, 9], [5, 5, 4, 5, 6, 3]),
    ("8-20", &[0, 1, 2, 4, 5, 7, 8, 9], [5, 4, 5, 6, 6, 2]),
    ("8-9", &[0, 1, 2, 3, 6, 7, 8, 9], [6, 4, 4, 4, 6, 4]),
    ("8-10", &[0, 2, 3, 4, 5, 6, 7, 9], [5, 6, 6, 4, 5, 2]),
    ("8-12", &[0, 1, 3, 4, 5, 6, 7, 9], [5, 5, 6, 5, 4, 3]),
    ("8-14", &[0, 1, 2, 4, 5, 6, 7, 9], [5, 5, 5, 5, 6, 2]),
    ("8-21", &[0, 1, 2, 3, 4, 6, 8, 10], [4, 7, 4, 6, 4, 3]),
    ("8-22", &[0, 1, 2, 3, 5, 6, 8, 10], [4, 6, 5, 5, 6, 2]),
    ("8-24", &[0, 1, 2, 4, 5, 6, 8, 10], [4, 6, 4, 7, 4, 3]),
    ("8-23", &[0, 1, 2, 3, 5, 7, 8, 10], [4, 6, 5, 4, 7, 2]),
    ("8-27", &[0, 1, 2, 4, 5, 7, 8, 10], [4, 5, 6, 5, 5, 3]),
    ("8-25", &[0, 1, 2, 4, 6, 7, 8, 10], [4, 6, 4, 6, 4, 4]),
    ("8-17", &[0, 1, 3, 4, 5, 6, 8, 9], [5, 4, 6, 6, 5, 2]),
    ("8-26", &[0, 1, 3, 4, 5, 7, 8, 10], [4, 5, 6, 5, 6, 2]),
    ("8-28", &[0, 1, 3, 4, 6, 7, 9, 10], [4, 4, 8, 4, 4, 4]),
    ("9-1", &[0, 1, 2, 3, 4, 5, 6, 7, 8], [8, 7, 6, 6, 6, 3]),
    ("9-2", &[0, 1, 2, 3, 4, 5, 6, 7, 9], [7, 7, 7, 6, 6, 3]),
    ("9-3", &[0, 1, 2, 3, 4, 5, 6, 8, 9], [7, 6, 7, 7, 6, 3]),
    ("9-4", &[0, 1, 2, 3, 4, 5, 7, 8, 9], [7, 6, 6, 7, 7, 3]),
    ("9-5", &[0, 1, 2, 3, 4, 6, 7, 8, 9], [7, 6, 6, 6, 7, 4]),
    ("9-6", &[0, 1, 2, 3, 4, 5, 6, 8, 10], [6, 8, 6, 7, 6, 3]),
    ("9-7", &[0, 1, 2, 3, 4, 5, 7, 8, 10], [6, 7, 7, 6, 7, 3]),
    ("9-8", &[0, 1, 2, 3, 4, 6, 7, 8, 10], [6, 7, 6, 7, 6, 4]),
    ("9-9", &[0, 1, 2, 3, 5, 6, 7, 8, 10], [6, 7, 6, 6, 8, 3]),
    ("9-10", &[0, 1, 2, 3, 4, 6, 7, 9, 10], [6, 6, 8, 6, 6, 4]),
    ("9-11", &[0, 1, 2, 3, 5, 6, 7, 9, 10], [6, 6, 7, 7, 7, 3]),
    ("9-12", &[0, 1, 2, 4, 5, 6, 8, 9, 10], [6, 6, 6, 9, 6, 3]),
    ("10-1", &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9], [9, 8, 8, 8, 8, 4]),
    ("10-2", &[0, 1, 2, 3, 4, 5, 6, 7, 8, 10], [8, 9, 8, 8, 8, 4]),
    ("10-3", &[0, 1, 2, 3, 4, 5, 6, 7, 9, 10], [8, 8, 9, 8, 8, 4]),
    ("10-4", &[0, 1, 2, 3, 4, 5, 6, 8, 9, 10], [8, 8, 8, 9, 8, 4]),
    ("10-5", &[0, 1, 2, 3, 4, 5, 7, 8, 9, 10], [8, 8, 8, 8, 9, 4]),
    ("10-6", &[0, 1, 2, 3, 4, 6, 7, 8, 9, 10], [8, 8, 8, 8, 8, 5]),
    ("11-1", &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10], [10, 10, 10, 10, 10, 5]),
    ("12-1", &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11], [12, 12, 12, 12, 12, 6]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::set::{interval_class_vector, prime_form, PitchClassSet};

    #[test]
    fn test_table_size() {
        assert_eq!(FORTE_TABLE.len(), 223);
        for (cardinality, expected) in [(1, 1), (2, 6), (3, 12), (4, 29), (5, 38), (6, 50), (7, 38), (8, 29), (9, 12), (10, 6), (11, 1), (12, 1)] {
            let count = FORTE_TABLE.iter().filter(|(_, pcs, _)| pcs.len() == cardinality).count();
            assert_eq!(count, expected, "cardinality {}", cardinality);
        }
    }

    #[test]
    fn test_rows_are_prime_forms_with_matching_vectors() {
        for (name, pcs, vector) in FORTE_TABLE {
            let set = PitchClassSet::new(pcs.iter().copied());
            assert_eq!(prime_form(set).to_vec(), pcs.to_vec(), "{} is not in prime form", name);
            assert_eq!(interval_class_vector(set).entries(), vector, "{} vector", name);
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = FORTE_TABLE.iter().map(|(name, _, _)| *name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), FORTE_TABLE.len());
    }
}
