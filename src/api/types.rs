// src/api/types.rs
// Wire types for the upstream endpoints this crate consumes. Field names and
// nesting mirror the JSON payloads exactly so a value can be re-serialized
// for the inspector without losing the shape a caller would address.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A `{name, url}` reference, the upstream's universal link shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    pub name: String,
    pub url: String,
}

/// Response of `GET /pokemon?limit=&offset=`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonPage {
    pub count: usize,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedRef>,
}

/// A full catalog entry from `GET /pokemon/{idOrName}`.
///
/// `height` and `weight` are raw upstream units (decimeters / hectograms);
/// display values divide by 10. Unrecognized fields are retained so the
/// inspector shows the payload the wire actually carried.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub sprites: Sprites,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatSlot>,
    pub abilities: Vec<AbilitySlot>,
    pub height: u32,
    pub weight: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Pokemon {
    /// Preferred image: official artwork, falling back to the default sprite.
    pub fn image_url(&self) -> Option<&str> {
        self.sprites
            .other
            .official_artwork
            .front_default
            .as_deref()
            .or(self.sprites.front_default.as_deref())
    }

    /// Height in meters (raw units are decimeters).
    pub fn height_m(&self) -> f64 {
        f64::from(self.height) / 10.0
    }

    /// Weight in kilograms (raw units are hectograms).
    pub fn weight_kg(&self) -> f64 {
        f64::from(self.weight) / 10.0
    }

    /// First listed type, `normal` when the list is empty.
    pub fn primary_type(&self) -> &str {
        self.types
            .first()
            .map(|slot| slot.type_ref.name.as_str())
            .unwrap_or("normal")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
    #[serde(default)]
    pub other: OtherSprites,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Artwork,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Artwork {
    pub front_default: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub type_ref: NameOnly,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NameOnly,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub ability: NameOnly,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Nested `{name}` object; only `name` is read, but companions like the
/// upstream `url` are retained for the inspector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameOnly {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of `GET /type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeIndex {
    pub results: Vec<NamedRef>,
}

/// Response of `GET /type/{name}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeDetail {
    pub pokemon: Vec<TypeMember>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeMember {
    pub pokemon: NamedRef,
}

/// Response of `GET /pokemon-species/{idOrName}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Species {
    pub id: u32,
    pub name: String,
    pub evolution_chain: ChainLocator,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Absolute locator of the evolution graph; opaque, not templated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainLocator {
    pub url: String,
}

/// Response of `GET {evolution chain url}`. One shared tree reused by every
/// species that appears anywhere in it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionChain {
    pub id: u32,
    pub chain: ChainLink,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainLink {
    #[serde(default)]
    pub is_baby: bool,
    pub species: NamedRef,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionDetail {
    #[serde(default)]
    pub min_level: Option<u32>,
    pub trigger: NameOnly,
    #[serde(default)]
    pub item: Option<NameOnly>,
}

/// Extract the numeric id from the trailing path segment of an upstream URL
/// (`.../pokemon/25/` -> 25).
pub fn id_from_url(url: &str) -> Option<u32> {
    let parsed = url::Url::parse(url).ok()?;
    parsed
        .path_segments()?
        .rev()
        .find(|segment| !segment.is_empty())?
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id_from_url() {
        assert_eq!(id_from_url("https://pokeapi.co/api/v2/pokemon/25/"), Some(25));
        assert_eq!(id_from_url("https://pokeapi.co/api/v2/pokemon/25"), Some(25));
        assert_eq!(id_from_url("https://pokeapi.co/api/v2/pokemon/pikachu/"), None);
    }

    #[test]
    fn test_entry_decodes_and_reserializes_wire_shape() {
        let wire = json!({
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "weight": 60,
            "base_experience": 112,
            "sprites": {
                "front_default": "https://img/25.png",
                "front_shiny": null,
                "back_default": "https://img/back/25.png",
                "versions": { "generation-i": { "red-blue": {} } },
                "other": { "official-artwork": { "front_default": "https://img/art/25.png" } }
            },
            "types": [ { "slot": 1, "type": { "name": "electric", "url": "https://t/13/" } } ],
            "stats": [ { "base_stat": 35, "effort": 0, "stat": { "name": "hp" } } ],
            "abilities": [ { "is_hidden": false, "ability": { "name": "static" } } ]
        });

        let pokemon: Pokemon = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(pokemon.primary_type(), "electric");
        assert_eq!(pokemon.height_m(), 0.4);
        assert_eq!(pokemon.weight_kg(), 6.0);
        assert_eq!(pokemon.image_url(), Some("https://img/art/25.png"));

        // Unknown fields at every nesting level survive the round trip for
        // the inspector.
        let back = serde_json::to_value(&pokemon).unwrap();
        assert_eq!(back["base_experience"], 112);
        assert_eq!(back["sprites"]["back_default"], "https://img/back/25.png");
        assert_eq!(back["sprites"]["versions"], wire["sprites"]["versions"]);
        assert_eq!(back["types"][0]["slot"], 1);
        assert_eq!(back["types"][0]["type"]["url"], "https://t/13/");
        assert_eq!(back["stats"][0]["effort"], 0);
        assert_eq!(back["abilities"][0]["is_hidden"], false);
        assert_eq!(back["sprites"]["other"]["official-artwork"]["front_default"],
                   "https://img/art/25.png");
    }

    #[test]
    fn test_artwork_falls_back_to_front_default() {
        let pokemon: Pokemon = serde_json::from_value(json!({
            "id": 132,
            "name": "ditto",
            "height": 3,
            "weight": 40,
            "sprites": { "front_default": "https://img/132.png" },
            "types": [],
            "stats": [],
            "abilities": []
        }))
        .unwrap();
        assert_eq!(pokemon.image_url(), Some("https://img/132.png"));
        assert_eq!(pokemon.primary_type(), "normal");
    }
}
