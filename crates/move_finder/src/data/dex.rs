//! Catalog loading and generation snapshots.
//!
//! `Dex` holds the raw, all-generation data as read from disk. A
//! `GenerationDex` is the read-only view of one generation: only species and
//! moves that exist in that generation can be resolved through it.

use crate::data::catalog::{Catalog, Move, Species};
use crate::data::models::{LearnsetEntry, MoveEntry, PokedexEntry, NONSTANDARD_PAST};
use crate::error::{DexError, DexResult, LearnsetError, LearnsetResult};
use crate::generation::Generation;
use crate::id::Id;
use crate::learnset::{AcquisitionDecoder, AcquisitionRecord, Learnsets, SourceKinds, SourceList};
use crate::resolver;
use crate::search::LearnDecider;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, instrument};

pub const POKEDEX_FILE: &str = "pokedex.json";
pub const MOVES_FILE: &str = "moves.json";
pub const LEARNSETS_FILE: &str = "learnsets.json";

/// Raw catalog data for every generation.
#[derive(Clone, Debug)]
pub struct Dex {
    pokedex: BTreeMap<String, PokedexEntry>,
    moves: BTreeMap<String, MoveEntry>,
    learnsets: Arc<Learnsets>,
}

impl Dex {
    /// Load `pokedex.json`, `moves.json` and `learnsets.json` from a directory.
    #[instrument(level = "debug")]
    pub fn load(data_dir: &Path) -> DexResult<Self> {
        let read = |file: &str| {
            let path = data_dir.join(file);
            fs::read_to_string(&path).map_err(|source| DexError::Io { path, source })
        };
        let pokedex = read(POKEDEX_FILE)?;
        let moves = read(MOVES_FILE)?;
        let learnsets = read(LEARNSETS_FILE)?;
        Self::from_json(&pokedex, &moves, &learnsets)
    }

    /// Build from the three JSON documents.
    pub fn from_json(pokedex: &str, moves: &str, learnsets: &str) -> DexResult<Self> {
        let pokedex: BTreeMap<String, PokedexEntry> =
            serde_json::from_str(pokedex).map_err(|source| DexError::Parse {
                what: POKEDEX_FILE.to_string(),
                source,
            })?;
        let moves: BTreeMap<String, MoveEntry> =
            serde_json::from_str(moves).map_err(|source| DexError::Parse {
                what: MOVES_FILE.to_string(),
                source,
            })?;
        let raw_learnsets: BTreeMap<String, serde_json::Value> = serde_json::from_str(learnsets)
            .map_err(|source| DexError::Parse {
                what: LEARNSETS_FILE.to_string(),
                source,
            })?;

        let learnsets = build_learnsets(raw_learnsets);
        debug!(
            species = pokedex.len(),
            moves = moves.len(),
            learnsets = learnsets.len(),
            "loaded dex"
        );

        Ok(Dex {
            pokedex,
            moves,
            learnsets: Arc::new(learnsets),
        })
    }

    /// Build the snapshot of one generation.
    #[instrument(level = "debug", skip(self), fields(gen = gen.num()))]
    pub fn generation(&self, gen: Generation) -> DexResult<GenerationDex> {
        let mut species: Vec<Species> = self
            .pokedex
            .iter()
            .filter_map(|(key, entry)| {
                let num = species_num(entry, gen)?;
                Some(Species {
                    name: entry.name.clone(),
                    id: Id::from_name(key),
                    num,
                })
            })
            .collect();
        species.sort_by(|a, b| by_name(&a.name, &a.id, &b.name, &b.id));

        let mut moves: Vec<Move> = self
            .moves
            .iter()
            .filter(|(_, entry)| move_available(entry, gen))
            .map(|(key, entry)| Move {
                name: entry.name.clone(),
                id: Id::from_name(key),
                move_type: entry.move_type.clone(),
                category: entry.category.clone(),
            })
            .collect();
        moves.sort_by(|a, b| by_name(&a.name, &a.id, &b.name, &b.id));

        let lineages: HashMap<Id, Vec<Id>> = species
            .iter()
            .map(|s| (s.id.clone(), self.learnset_lineage(s.id.as_str(), gen)))
            .collect();

        debug!(species = species.len(), moves = moves.len(), "built generation snapshot");

        Ok(GenerationDex {
            generation: gen,
            species: Catalog::from_entries(species)?,
            moves: Catalog::from_entries(moves)?,
            lineages,
            decoder: AcquisitionDecoder::new(Arc::clone(&self.learnsets)),
        })
    }

    /// Species whose learnsets count for `species_id` in `gen`.
    ///
    /// Starts with the species' own learnset, or the forme it falls back to
    /// when it has none, then follows the pre-evolution chain. The walk
    /// stops at the first species without a learnset.
    fn learnset_lineage(&self, species_id: &str, gen: Generation) -> Vec<Id> {
        let Some(entry) = self.pokedex.get(species_id) else {
            return Vec::new();
        };
        let first = if self.learnsets.record(species_id).is_some() {
            Id::from_name(species_id)
        } else {
            match entry.learnset_fallback() {
                Some(name) => Id::from_name(name),
                None => return Vec::new(),
            }
        };
        if self.learnsets.record(first.as_str()).is_none() {
            return Vec::new();
        }

        let mut lineage = vec![first];
        let mut prevo = entry.prevo.as_deref();
        while let Some(name) = prevo {
            let id = Id::from_name(name);
            let Some(prev) = self
                .pokedex
                .get(id.as_str())
                .filter(|prev| species_num(prev, gen).is_some())
            else {
                break;
            };
            if lineage.contains(&id) || self.learnsets.record(id.as_str()).is_none() {
                break;
            }
            prevo = prev.prevo.as_deref();
            lineage.push(id);
        }
        lineage
    }
}

fn build_learnsets(raw: BTreeMap<String, serde_json::Value>) -> Learnsets {
    let mut learnsets = Learnsets::new();
    for (species_key, value) in raw {
        let entry: LearnsetEntry = match serde_json::from_value(value) {
            Ok(entry) => entry,
            Err(err) => {
                debug!(species = %species_key, %err, "skipping unreadable learnset entry");
                continue;
            }
        };
        let Some(table) = entry.learnset else {
            continue;
        };
        let mut record = AcquisitionRecord::new();
        for (move_key, tags) in &table {
            record.insert(Id::from_name(move_key), SourceList::from_json(tags));
        }
        learnsets.insert(Id::from_name(&species_key), record);
    }
    learnsets
}

fn by_name(a_name: &str, a_id: &Id, b_name: &str, b_id: &Id) -> std::cmp::Ordering {
    a_name
        .to_lowercase()
        .cmp(&b_name.to_lowercase())
        .then_with(|| a_id.cmp(b_id))
}

/// `isNonstandard` filter. "Past" entries are still part of older generations.
fn standard_in(nonstandard: Option<&str>, gen: Generation) -> bool {
    match nonstandard {
        None => true,
        Some(NONSTANDARD_PAST) => !gen.is_latest(),
        Some(_) => false,
    }
}

/// Dex number of a species that exists in `gen`, or `None` if it is
/// excluded there. Numbers outside `1..=u16::MAX` exclude the entry.
fn species_num(entry: &PokedexEntry, gen: Generation) -> Option<u16> {
    let num = u16::try_from(entry.num).ok().filter(|&num| num > 0)?;
    if !standard_in(entry.is_nonstandard.as_deref(), gen) {
        return None;
    }
    let introduced = entry
        .gen
        .and_then(|explicit| Generation::new(u32::from(explicit)).ok())
        .or_else(|| {
            entry
                .base_species
                .as_ref()
                .and(entry.forme.as_deref())
                .and_then(Generation::of_forme)
        })
        .or_else(|| Generation::of_species_num(num));
    introduced.filter(|&introduced| introduced <= gen).map(|_| num)
}

fn move_available(entry: &MoveEntry, gen: Generation) -> bool {
    let Some(num) = u16::try_from(entry.num).ok().filter(|&num| num > 0) else {
        return false;
    };
    if !standard_in(entry.is_nonstandard.as_deref(), gen) {
        return false;
    }
    let introduced = entry
        .gen
        .and_then(|explicit| Generation::new(u32::from(explicit)).ok())
        .or_else(|| Generation::of_move_num(num));
    introduced.is_some_and(|introduced| introduced <= gen)
}

// ============================================================================
// Generation Snapshot
// ============================================================================

/// Read-only catalog of one generation, plus its learnability decoder.
#[derive(Clone, Debug)]
pub struct GenerationDex {
    generation: Generation,
    species: Catalog<Species>,
    moves: Catalog<Move>,
    /// Species id -> ids whose learnsets it draws on, own first.
    lineages: HashMap<Id, Vec<Id>>,
    decoder: AcquisitionDecoder<Arc<Learnsets>>,
}

impl GenerationDex {
    #[inline]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn species(&self) -> &Catalog<Species> {
        &self.species
    }

    pub fn moves(&self) -> &Catalog<Move> {
        &self.moves
    }

    pub fn find_species(&self, query: &str) -> Option<&Species> {
        resolver::resolve(query, &self.species)
    }

    pub fn find_move(&self, query: &str) -> Option<&Move> {
        resolver::resolve(query, &self.moves)
    }

    fn lineage(&self, species: &Species) -> &[Id] {
        self.lineages
            .get(&species.id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Learnability of a resolved pair in this generation, including moves
    /// inherited from a base forme or a pre-evolution.
    pub async fn is_learnable(&self, species: &Species, move_: &Move) -> LearnsetResult<bool> {
        for id in self.lineage(species) {
            if self
                .decoder
                .is_learnable(id, &move_.id, self.generation)
                .await?
            {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Acquisition methods of a resolved pair in this generation, across
    /// the same lineage as [`GenerationDex::is_learnable`].
    pub async fn learn_methods(
        &self,
        species: &Species,
        move_: &Move,
    ) -> LearnsetResult<SourceKinds> {
        let mut methods = SourceKinds::empty();
        for id in self.lineage(species) {
            methods |= self.decoder.methods(id, &move_.id, self.generation).await?;
        }
        Ok(methods)
    }
}

/// Decides by display name. Names that do not resolve in this generation
/// are caller misuse and come back as errors.
#[async_trait]
impl LearnDecider for GenerationDex {
    async fn decide(&self, member: &str, move_name: &str) -> LearnsetResult<bool> {
        let species = self
            .find_species(member)
            .ok_or_else(|| LearnsetError::UnknownSpecies(member.to_string()))?;
        let move_ = self
            .find_move(move_name)
            .ok_or_else(|| LearnsetError::UnknownMove(move_name.to_string()))?;
        self.is_learnable(species, move_).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_dex() -> Dex {
        let pokedex = json!({
            "pikachu": { "num": 25, "name": "Pikachu" },
            "raichualola": { "num": 26, "name": "Raichu-Alola", "baseSpecies": "Raichu", "forme": "Alola" },
            "beedrill": { "num": 15, "name": "Beedrill", "isNonstandard": "Past" },
            "garchomp": { "num": 445, "name": "Garchomp" },
            "syclant": { "num": -1, "name": "Syclant", "isNonstandard": "CAP" },
            "missingno": { "num": 0, "name": "MissingNo." }
        });
        let moves = json!({
            "thunderbolt": { "num": 85, "name": "Thunderbolt", "type": "Electric", "category": "Special" },
            "terablast": { "num": 851, "name": "Tera Blast", "type": "Normal", "category": "Special" },
            "hiddenpower": { "num": 237, "name": "Hidden Power", "type": "Normal", "category": "Special", "isNonstandard": "Past" }
        });
        let learnsets = json!({
            "pikachu": { "learnset": { "thunderbolt": ["9M", "3M"], "terablast": ["9M"] } },
            "garchomp": { "learnset": "broken" },
            "raichualola": {}
        });
        Dex::from_json(
            &pokedex.to_string(),
            &moves.to_string(),
            &learnsets.to_string(),
        )
        .unwrap()
    }

    fn gen(num: u32) -> Generation {
        Generation::new(num).unwrap()
    }

    #[test]
    fn test_latest_snapshot_excludes_nonstandard() {
        let dex = sample_dex().generation(Generation::LATEST).unwrap();
        let names: Vec<&str> = dex.species().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Garchomp", "Pikachu", "Raichu-Alola"]);
        assert!(dex.moves().get("hiddenpower").is_none());
        assert!(dex.moves().get("terablast").is_some());
    }

    #[test]
    fn test_older_snapshot_is_not_a_superset() {
        let dex = sample_dex().generation(gen(3)).unwrap();
        let names: Vec<&str> = dex.species().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Beedrill", "Pikachu"]);
        assert!(dex.find_species("Garchomp").is_none());
        assert!(dex.find_move("Tera Blast").is_none());
        assert!(dex.find_move("Hidden Power").is_some());
    }

    #[test]
    fn test_forme_generation() {
        let dex = sample_dex();
        assert!(dex.generation(gen(6)).unwrap().find_species("raichualola").is_none());
        assert!(dex.generation(gen(7)).unwrap().find_species("raichualola").is_some());
    }

    #[test]
    fn test_malformed_learnset_entry_is_skipped() {
        let dex = sample_dex();
        assert!(dex.learnsets.record("pikachu").is_some());
        assert!(dex.learnsets.record("garchomp").is_none());
        assert!(dex.learnsets.record("raichualola").is_none());
    }

    #[test]
    fn test_from_json_reports_file() {
        let err = Dex::from_json("{", "{}", "{}").unwrap_err();
        assert!(matches!(err, DexError::Parse { ref what, .. } if what == POKEDEX_FILE));
    }

    #[tokio::test]
    async fn test_decide_by_name() {
        let dex = sample_dex().generation(Generation::LATEST).unwrap();
        assert_eq!(dex.decide("Pikachu", "Thunderbolt").await, Ok(true));
        assert_eq!(dex.decide("pikachu", "tera-blast").await, Ok(true));
        assert_eq!(dex.decide("Garchomp", "Thunderbolt").await, Ok(false));
        assert_eq!(
            dex.decide("Fakemon", "Thunderbolt").await,
            Err(LearnsetError::UnknownSpecies("Fakemon".into()))
        );
        assert_eq!(
            dex.decide("Pikachu", "Hidden Power").await,
            Err(LearnsetError::UnknownMove("Hidden Power".into()))
        );
    }

    #[tokio::test]
    async fn test_generation_change_invalidates_eligibility() {
        let dex = sample_dex();
        let gen9 = dex.generation(Generation::LATEST).unwrap();
        let gen5 = dex.generation(gen(5)).unwrap();
        assert_eq!(gen9.decide("Pikachu", "Thunderbolt").await, Ok(true));
        assert_eq!(gen5.decide("Pikachu", "Thunderbolt").await, Ok(false));
    }

    fn inheritance_dex() -> Dex {
        let pokedex = json!({
            "pichu": { "num": 172, "name": "Pichu" },
            "pikachu": { "num": 25, "name": "Pikachu", "prevo": "Pichu" },
            "raichu": { "num": 26, "name": "Raichu", "prevo": "Pikachu" },
            "urshifu": { "num": 892, "name": "Urshifu" },
            "urshifurapidstrike": {
                "num": 892, "name": "Urshifu-Rapid-Strike",
                "baseSpecies": "Urshifu", "forme": "Rapid-Strike"
            }
        });
        let moves = json!({
            "encore": { "num": 227, "name": "Encore", "type": "Normal", "category": "Status" },
            "thunderbolt": { "num": 85, "name": "Thunderbolt", "type": "Electric", "category": "Special" },
            "protect": { "num": 182, "name": "Protect", "type": "Normal", "category": "Status" }
        });
        let learnsets = json!({
            "pichu": { "learnset": { "encore": ["9E", "8E"] } },
            "pikachu": { "learnset": { "thunderbolt": ["9M"] } },
            "raichu": { "learnset": { "thunderbolt": ["9M"] } },
            "urshifu": { "learnset": { "protect": ["9M"] } }
        });
        Dex::from_json(
            &pokedex.to_string(),
            &moves.to_string(),
            &learnsets.to_string(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_prevo_moves_are_inherited() {
        let dex = inheritance_dex().generation(Generation::LATEST).unwrap();
        assert_eq!(dex.decide("Pikachu", "Encore").await, Ok(true));
        assert_eq!(dex.decide("Raichu", "Encore").await, Ok(true));
        assert_eq!(dex.decide("Pichu", "Thunderbolt").await, Ok(false));

        // Pichu only exists from Gen 2, so Gen 1 Pikachu has no prevo.
        let dex = inheritance_dex();
        assert!(dex.generation(gen(1)).unwrap().find_species("Pichu").is_none());
        assert_eq!(
            dex.learnset_lineage("pikachu", gen(1)),
            [Id::from_name("pikachu")]
        );
        assert_eq!(
            dex.learnset_lineage("raichu", gen(2)),
            [Id::from_name("raichu"), Id::from_name("pikachu"), Id::from_name("pichu")]
        );
    }

    #[tokio::test]
    async fn test_forme_without_learnset_uses_base_species() {
        let dex = inheritance_dex().generation(Generation::LATEST).unwrap();
        assert_eq!(dex.decide("Urshifu-Rapid-Strike", "Protect").await, Ok(true));

        let rapid = dex.find_species("Urshifu-Rapid-Strike").unwrap();
        let protect = dex.find_move("Protect").unwrap();
        assert_eq!(
            dex.learn_methods(rapid, protect).await,
            Ok(SourceKinds::MACHINE)
        );
    }

    #[tokio::test]
    async fn test_learn_methods_union_over_lineage() {
        let dex = inheritance_dex().generation(Generation::LATEST).unwrap();
        let raichu = dex.find_species("Raichu").unwrap();
        let encore = dex.find_move("Encore").unwrap();
        let thunderbolt = dex.find_move("Thunderbolt").unwrap();
        assert_eq!(dex.learn_methods(raichu, encore).await, Ok(SourceKinds::EGG));
        assert_eq!(
            dex.learn_methods(raichu, thunderbolt).await,
            Ok(SourceKinds::MACHINE)
        );
        assert_eq!(dex.is_learnable(raichu, encore).await, Ok(true));
    }

    #[test]
    fn test_prevo_cycle_terminates() {
        let pokedex = json!({
            "a": { "num": 1, "name": "A", "prevo": "B" },
            "b": { "num": 2, "name": "B", "prevo": "A" }
        });
        let learnsets = json!({
            "a": { "learnset": {} },
            "b": { "learnset": {} }
        });
        let dex = Dex::from_json(&pokedex.to_string(), "{}", &learnsets.to_string()).unwrap();
        let lineage = dex.learnset_lineage("a", Generation::LATEST);
        assert_eq!(lineage, [Id::from_name("a"), Id::from_name("b")]);
    }

    #[test]
    fn test_out_of_range_num_is_excluded() {
        let pokedex = json!({
            "bigmon": { "num": 70000, "name": "Bigmon", "gen": 1 },
            "pikachu": { "num": 25, "name": "Pikachu" }
        });
        let moves = json!({
            "bigmove": { "num": 65561, "name": "Big Move", "type": "Normal", "category": "Status", "gen": 1 }
        });
        let dex = Dex::from_json(&pokedex.to_string(), &moves.to_string(), "{}")
            .unwrap()
            .generation(Generation::LATEST)
            .unwrap();
        let names: Vec<&str> = dex.species().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Pikachu"]);
        assert!(dex.moves().is_empty());
    }
}
