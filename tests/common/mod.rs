// tests/common/mod.rs
// Stub CatalogApi backend: canned payloads keyed the way the upstream keys
// them, with per-resource failure switches and a fetch counter.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::json;

use pokedex::api::types::{
    EvolutionChain, NamedRef, Pokemon, PokemonPage, Species, TypeDetail,
};
use pokedex::api::{ApiError, CatalogApi};

pub fn entry_url(id: u32) -> String {
    format!("https://pokeapi.co/api/v2/pokemon/{id}/")
}

pub fn named_ref(name: &str, url: &str) -> NamedRef {
    NamedRef {
        name: name.to_string(),
        url: url.to_string(),
    }
}

pub fn pokemon(id: u32, name: &str, types: &[&str]) -> Pokemon {
    let type_slots: Vec<_> = types.iter().map(|t| json!({ "type": { "name": t } })).collect();
    serde_json::from_value(json!({
        "id": id,
        "name": name,
        "height": 4,
        "weight": 60,
        "sprites": {
            "front_default": format!("https://img/{id}.png"),
            "other": { "official-artwork": { "front_default": format!("https://img/art/{id}.png") } }
        },
        "types": type_slots,
        "stats": [ { "base_stat": 35, "stat": { "name": "hp" } } ],
        "abilities": [ { "ability": { "name": "static" } } ]
    }))
    .unwrap()
}

#[derive(Default)]
pub struct StubApi {
    pub index: Option<PokemonPage>,
    /// Entries keyed by both id string and name.
    pub entries: HashMap<String, Pokemon>,
    pub types: Vec<NamedRef>,
    pub type_details: HashMap<String, TypeDetail>,
    pub species: HashMap<String, Species>,
    pub chains: HashMap<String, EvolutionChain>,
    pub fail_index: bool,
    pub fail_type_detail: bool,
    pub fail_entries: HashSet<String>,
    pub entry_calls: AtomicUsize,
}

impl StubApi {
    /// A catalog of `count` entries named `mon-1..mon-count`, indexed and
    /// individually fetchable.
    pub fn with_catalog(count: u32) -> Self {
        let mut stub = Self::default();
        let mut results = Vec::new();
        for id in 1..=count {
            let name = format!("mon-{id}");
            results.push(named_ref(&name, &entry_url(id)));
            stub.insert_pokemon(pokemon(id, &name, &["normal"]));
        }
        stub.index = Some(PokemonPage {
            count: count as usize,
            next: None,
            previous: None,
            results,
        });
        stub
    }

    pub fn insert_pokemon(&mut self, pokemon: Pokemon) {
        self.entries.insert(pokemon.id.to_string(), pokemon.clone());
        self.entries.insert(pokemon.name.clone(), pokemon);
    }

    pub fn insert_species(&mut self, name_or_id: &str, species_json: serde_json::Value) {
        self.species
            .insert(name_or_id.to_string(), serde_json::from_value(species_json).unwrap());
    }

    pub fn insert_chain(&mut self, url: &str, chain_json: serde_json::Value) {
        self.chains
            .insert(url.to_string(), serde_json::from_value(chain_json).unwrap());
    }

    pub fn entry_call_count(&self) -> usize {
        self.entry_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogApi for StubApi {
    async fn entry_index(&self, _limit: u32, _offset: u32) -> Result<PokemonPage, ApiError> {
        if self.fail_index {
            return Err(ApiError::unavailable("pokemon list"));
        }
        self.index
            .clone()
            .ok_or_else(|| ApiError::unavailable("pokemon list"))
    }

    async fn entry(&self, name_or_id: &str) -> Result<Pokemon, ApiError> {
        self.entry_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_entries.contains(name_or_id) {
            return Err(ApiError::status(format!("pokemon {name_or_id}"), 500));
        }
        self.entries
            .get(name_or_id)
            .cloned()
            .ok_or_else(|| ApiError::status(format!("pokemon {name_or_id}"), 404))
    }

    async fn type_index(&self) -> Result<pokedex::api::types::TypeIndex, ApiError> {
        Ok(pokedex::api::types::TypeIndex {
            results: self.types.clone(),
        })
    }

    async fn type_detail(&self, name: &str) -> Result<TypeDetail, ApiError> {
        if self.fail_type_detail {
            return Err(ApiError::unavailable(format!("type {name}")));
        }
        self.type_details
            .get(name)
            .cloned()
            .ok_or_else(|| ApiError::status(format!("type {name}"), 404))
    }

    async fn species(&self, name_or_id: &str) -> Result<Species, ApiError> {
        self.species
            .get(name_or_id)
            .cloned()
            .ok_or_else(|| ApiError::status(format!("species {name_or_id}"), 404))
    }

    async fn evolution_chain(&self, url: &str) -> Result<EvolutionChain, ApiError> {
        self.chains
            .get(url)
            .cloned()
            .ok_or_else(|| ApiError::unavailable("evolution chain"))
    }
}
