//! Acquisition-source decoding.
//!
//! Each species carries a table of move id -> source tags. A tag is
//! `<generation digit><kind letter><detail>`, e.g. `9L1` (level 1 in Gen 9),
//! `8M` (TM in Gen 8), `7E` (egg move in Gen 7). Learnability in a
//! generation only needs the leading digit; the kind letter is decoded for
//! display.

use crate::error::LearnsetResult;
use crate::generation::Generation;
use crate::id::Id;
use async_trait::async_trait;
use bitflags::bitflags;
use std::collections::HashMap;
use std::sync::Arc;

// ============================================================================
// Source Tags
// ============================================================================

/// How a move is obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceKind {
    LevelUp,
    Machine,
    Tutor,
    Egg,
    Event,
    DreamWorld,
    /// Virtual Console or Let's Go transfer
    Virtual,
    /// Form-change or otherwise restricted source
    Restricted,
}

impl SourceKind {
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'L' => Some(SourceKind::LevelUp),
            'M' => Some(SourceKind::Machine),
            'T' => Some(SourceKind::Tutor),
            'E' => Some(SourceKind::Egg),
            'S' => Some(SourceKind::Event),
            'D' => Some(SourceKind::DreamWorld),
            'V' => Some(SourceKind::Virtual),
            'R' => Some(SourceKind::Restricted),
            _ => None,
        }
    }

    pub fn flag(self) -> SourceKinds {
        match self {
            SourceKind::LevelUp => SourceKinds::LEVEL_UP,
            SourceKind::Machine => SourceKinds::MACHINE,
            SourceKind::Tutor => SourceKinds::TUTOR,
            SourceKind::Egg => SourceKinds::EGG,
            SourceKind::Event => SourceKinds::EVENT,
            SourceKind::DreamWorld => SourceKinds::DREAM_WORLD,
            SourceKind::Virtual => SourceKinds::VIRTUAL,
            SourceKind::Restricted => SourceKinds::RESTRICTED,
        }
    }
}

bitflags! {
    /// Set of acquisition methods available for one species/move pair.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct SourceKinds: u8 {
        const LEVEL_UP    = 1 << 0;
        const MACHINE     = 1 << 1;
        const TUTOR       = 1 << 2;
        const EGG         = 1 << 3;
        const EVENT       = 1 << 4;
        const DREAM_WORLD = 1 << 5;
        const VIRTUAL     = 1 << 6;
        const RESTRICTED  = 1 << 7;
    }
}

impl SourceKinds {
    /// Human-readable method names, in flag order.
    pub fn labels(self) -> Vec<&'static str> {
        self.iter_names()
            .map(|(name, _)| match name {
                "LEVEL_UP" => "level-up",
                "MACHINE" => "TM",
                "TUTOR" => "tutor",
                "EGG" => "egg",
                "EVENT" => "event",
                "DREAM_WORLD" => "dream world",
                "VIRTUAL" => "transfer",
                _ => "restricted",
            })
            .collect()
    }
}

/// Returns the generation digit of a tag, or `None` if the tag does not
/// start with one. A digit followed by another digit would be a two-digit
/// generation, which the encoding cannot express; such tags are rejected
/// rather than read as their first digit.
#[inline]
pub fn tag_generation_digit(tag: &str) -> Option<char> {
    let mut chars = tag.chars();
    let first = chars.next().filter(|c| c.is_ascii_digit() && *c != '0')?;
    match chars.next() {
        Some(next) if next.is_ascii_digit() => None,
        _ => Some(first),
    }
}

/// A fully decoded source tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceTag<'a> {
    pub generation: Generation,
    pub kind: SourceKind,
    /// Whatever follows the kind letter (a level for `L`, an event index for `S`).
    pub detail: &'a str,
}

impl<'a> SourceTag<'a> {
    /// Decode a tag. Unknown kind letters and malformed tags yield `None`.
    pub fn parse(tag: &'a str) -> Option<Self> {
        let digit = tag_generation_digit(tag)?;
        let generation = Generation::new(digit.to_digit(10)?).ok()?;
        let mut rest = tag[1..].chars();
        let kind = SourceKind::from_letter(rest.next()?)?;
        Some(SourceTag {
            generation,
            kind,
            detail: rest.as_str(),
        })
    }
}

// ============================================================================
// Acquisition Records
// ============================================================================

/// Tag list for one move of one species.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceList {
    Tags(Vec<String>),
    /// Present in the data but not an array; never learnable.
    Malformed,
}

impl SourceList {
    /// Interpret a raw JSON value. Non-string array elements are skipped.
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Array(items) => SourceList::Tags(
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_owned))
                    .collect(),
            ),
            _ => SourceList::Malformed,
        }
    }

    pub fn tags(&self) -> &[String] {
        match self {
            SourceList::Tags(tags) => tags,
            SourceList::Malformed => &[],
        }
    }
}

/// One species' move id -> source tags table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AcquisitionRecord {
    moves: HashMap<Id, SourceList>,
}

impl AcquisitionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, move_id: Id, sources: SourceList) {
        self.moves.insert(move_id, sources);
    }

    pub fn sources(&self, move_id: &str) -> Option<&SourceList> {
        self.moves.get(move_id)
    }

    /// True iff some tag for `move_id` carries `gen`'s digit.
    pub fn is_learnable(&self, move_id: &str, gen: Generation) -> bool {
        let Some(sources) = self.sources(move_id) else {
            return false;
        };
        let digit = gen.digit();
        sources
            .tags()
            .iter()
            .any(|tag| tag_generation_digit(tag) == Some(digit))
    }

    /// Decoded acquisition methods for `move_id` in `gen`.
    pub fn methods(&self, move_id: &str, gen: Generation) -> SourceKinds {
        self.sources(move_id)
            .map(|sources| {
                sources
                    .tags()
                    .iter()
                    .filter_map(|tag| SourceTag::parse(tag))
                    .filter(|tag| tag.generation == gen)
                    .fold(SourceKinds::empty(), |acc, tag| acc | tag.kind.flag())
            })
            .unwrap_or_default()
    }
}

/// Every species' acquisition record, keyed by species id.
#[derive(Clone, Debug, Default)]
pub struct Learnsets {
    records: HashMap<Id, Arc<AcquisitionRecord>>,
}

impl Learnsets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, species_id: Id, record: AcquisitionRecord) {
        self.records.insert(species_id, Arc::new(record));
    }

    pub fn record(&self, species_id: &str) -> Option<&Arc<AcquisitionRecord>> {
        self.records.get(species_id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ============================================================================
// Decoder
// ============================================================================

/// Supplier of acquisition records.
///
/// Retrieval may suspend (lazy loading, remote fetch). `Ok(None)` means the
/// source has no data for the species; `Err` means the lookup itself failed.
#[async_trait]
pub trait LearnsetSource: Send + Sync {
    async fn acquisition_record(
        &self,
        species_id: &Id,
    ) -> LearnsetResult<Option<Arc<AcquisitionRecord>>>;
}

#[async_trait]
impl LearnsetSource for Learnsets {
    async fn acquisition_record(
        &self,
        species_id: &Id,
    ) -> LearnsetResult<Option<Arc<AcquisitionRecord>>> {
        Ok(self.record(species_id.as_str()).cloned())
    }
}

#[async_trait]
impl<S: LearnsetSource + ?Sized> LearnsetSource for Arc<S> {
    async fn acquisition_record(
        &self,
        species_id: &Id,
    ) -> LearnsetResult<Option<Arc<AcquisitionRecord>>> {
        (**self).acquisition_record(species_id).await
    }
}

/// Answers "can this species learn this move in generation N".
#[derive(Clone, Debug)]
pub struct AcquisitionDecoder<S> {
    source: S,
}

impl<S: LearnsetSource> AcquisitionDecoder<S> {
    pub fn new(source: S) -> Self {
        AcquisitionDecoder { source }
    }

    /// Missing records and missing or malformed tag lists are `Ok(false)`.
    /// Only a failing source surfaces as `Err`.
    pub async fn is_learnable(
        &self,
        species_id: &Id,
        move_id: &Id,
        gen: Generation,
    ) -> LearnsetResult<bool> {
        let record = self.source.acquisition_record(species_id).await?;
        Ok(record.is_some_and(|record| record.is_learnable(move_id.as_str(), gen)))
    }

    pub async fn methods(
        &self,
        species_id: &Id,
        move_id: &Id,
        gen: Generation,
    ) -> LearnsetResult<SourceKinds> {
        let record = self.source.acquisition_record(species_id).await?;
        Ok(record
            .map(|record| record.methods(move_id.as_str(), gen))
            .unwrap_or_default())
    }
}
