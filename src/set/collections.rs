// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Reference to the modal collections.
//!
//! The octatonic (OCT), whole-tone (WT) and hexatonic (HEX) collections
//! are compared literally, one transposition at a time. The diatonic
//! collection (DT, set class 7-35) is compared abstractly.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::PitchClassSet;

/// Symmetric modal collections checked at each of their transpositions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalCollection {
    Octatonic,
    WholeTone,
    Hexatonic,
}

impl ModalCollection {
    /// All collections in catalogue order
    pub const ALL: [ModalCollection; 3] = [
        ModalCollection::Octatonic,
        ModalCollection::WholeTone,
        ModalCollection::Hexatonic,
    ];

    /// Catalogue symbol
    pub fn symbol(self) -> char {
        match self {
            ModalCollection::Octatonic => 'O',
            ModalCollection::WholeTone => 'W',
            ModalCollection::Hexatonic => 'H',
        }
    }

    /// The collection at level 0
    pub fn base(self) -> PitchClassSet {
        match self {
            ModalCollection::Octatonic => PitchClassSet::new([0, 1, 3, 4, 6, 7, 9, 10]),
            ModalCollection::WholeTone => PitchClassSet::new([0, 2, 4, 6, 8, 10]),
            ModalCollection::Hexatonic => PitchClassSet::new([0, 1, 4, 5, 8, 9]),
        }
    }

    /// Number of distinct transpositions
    pub fn levels(self) -> u8 {
        match self {
            ModalCollection::Octatonic => 3,
            ModalCollection::WholeTone => 2,
            ModalCollection::Hexatonic => 4,
        }
    }

    /// The collection transposed to `level`
    pub fn at(self, level: u8) -> PitchClassSet {
        self.base().transpose(level as i64)
    }
}

/// The diatonic collection in prime form (7-35)
pub fn diatonic() -> PitchClassSet {
    PitchClassSet::new([0, 1, 3, 5, 6, 8, 10])
}

/// A specific transposition of a modal collection, e.g. `O2`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollectionLabel {
    pub collection: ModalCollection,
    pub level: u8,
}

impl CollectionLabel {
    /// Every labelled transposition: O0-O2, W0-W1, H0-H3
    pub fn all() -> impl Iterator<Item = CollectionLabel> {
        ModalCollection::ALL.into_iter().flat_map(|collection| {
            (0..collection.levels()).map(move |level| CollectionLabel { collection, level })
        })
    }

    /// Pitch classes of this transposition
    pub fn pitch_classes(self) -> PitchClassSet {
        self.collection.at(self.level)
    }
}

impl fmt::Display for CollectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.collection.symbol(), self.level)
    }
}

/// Literal inclusion of a set in a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceStatus {
    /// Two or more pitch classes fall outside, or the set strictly contains the collection
    Unrelated,
    /// Exactly one pitch class falls outside
    AllButOne,
    /// Every pitch class is in the collection
    Literal,
}

/// Literal status of `set` against one collection
pub fn reference_status(set: PitchClassSet, collection: PitchClassSet) -> ReferenceStatus {
    if set.is_proper_superset(collection) {
        return ReferenceStatus::Unrelated;
    }
    match set.difference(collection).len() {
        0 => ReferenceStatus::Literal,
        1 => ReferenceStatus::AllButOne,
        _ => ReferenceStatus::Unrelated,
    }
}

/// Status of a set against every labelled collection, plus diatonic reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferentialCollections {
    pub statuses: Vec<(CollectionLabel, ReferenceStatus)>,
    /// Whether the set is an abstract proper subset of the diatonic collection
    pub diatonic: bool,
}

impl ReferentialCollections {
    /// Status for one labelled collection
    pub fn status(&self, label: CollectionLabel) -> Option<ReferenceStatus> {
        self.statuses
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, status)| *status)
    }
}

/// Check a set against the modal collections
pub fn referential_collections(set: PitchClassSet) -> ReferentialCollections {
    let statuses = CollectionLabel::all()
        .map(|label| (label, reference_status(set, label.pitch_classes())))
        .collect();

    let dt = diatonic();
    let diatonic = set.len() < dt.len() && set.images().any(|(_, image)| image.is_proper_subset(dt));

    ReferentialCollections { statuses, diatonic }
}

/// Pitch classes each labelled collection has that the set lacks
pub fn modal_complements(set: PitchClassSet) -> Vec<(CollectionLabel, PitchClassSet)> {
    CollectionLabel::all()
        .map(|label| (label, label.pitch_classes().difference(set)))
        .collect()
}

/// Catalogue attribute describing modal reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalAttribute {
    /// Literal subset of some transposition (`O`, `W`, `H`)
    Literal(ModalCollection),
    /// Hexachord with all but one pitch class in some transposition (`O'`, `W'`, `H'`)
    AllButOne(ModalCollection),
    /// Abstract subset of the diatonic collection (`D`)
    Diatonic,
}

impl fmt::Display for ModalAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModalAttribute::Literal(c) => write!(f, "{}", c.symbol()),
            ModalAttribute::AllButOne(c) => write!(f, "{}'", c.symbol()),
            ModalAttribute::Diatonic => write!(f, "D"),
        }
    }
}

/// Modal attributes in catalogue order, without duplicates
pub fn modal_attributes(set: PitchClassSet) -> Vec<ModalAttribute> {
    let reference = referential_collections(set);
    let mut attributes = Vec::new();

    for (label, status) in &reference.statuses {
        let attribute = match status {
            ReferenceStatus::Literal => Some(ModalAttribute::Literal(label.collection)),
            // Prime reference only counts for hexachords
            ReferenceStatus::AllButOne if set.len() == 6 => {
                Some(ModalAttribute::AllButOne(label.collection))
            }
            _ => None,
        };
        if let Some(attribute) = attribute {
            if !attributes.contains(&attribute) {
                attributes.push(attribute);
            }
        }
    }

    if reference.diatonic {
        attributes.push(ModalAttribute::Diatonic);
    }
    attributes
}
