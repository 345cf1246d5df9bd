// src/ui/card.rs
// The interactive card as data: every clickable element declares the
// canonical path of the JSON field it was rendered from, a human-readable
// description, and its display text. Clicking one emits (path, description)
// toward the detail inspector.

use crate::api::types::Pokemon;
use crate::catalog::EvolutionNode;
use crate::config::STAT_BAR_MAX;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardElement {
    pub path: String,
    pub description: String,
    pub text: String,
}

impl CardElement {
    fn new(
        path: impl Into<String>,
        description: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            description: description.into(),
            text: text.into(),
        }
    }
}

/// The card's clickable elements in display order.
pub fn card_elements(pokemon: &Pokemon, evolutions: &[EvolutionNode]) -> Vec<CardElement> {
    let mut elements = vec![
        CardElement::new("id", "Pokemon ID number", format_dex_number(pokemon.id)),
        CardElement::new("name", "Pokemon name", pokemon.name.clone()),
    ];

    for (i, slot) in pokemon.types.iter().enumerate() {
        elements.push(CardElement::new(
            format!("types[{i}].type.name"),
            format!("Pokemon type: {}", slot.type_ref.name),
            slot.type_ref.name.clone(),
        ));
    }

    elements.push(CardElement::new(
        "sprites.other.official-artwork.front_default",
        "Pokemon artwork image URL",
        pokemon.image_url().unwrap_or_default(),
    ));
    elements.push(CardElement::new(
        "height",
        "Pokemon height in decimeters",
        format!("{}m", pokemon.height_m()),
    ));
    elements.push(CardElement::new(
        "weight",
        "Pokemon weight in hectograms",
        format!("{}kg", pokemon.weight_kg()),
    ));

    for (i, slot) in pokemon.stats.iter().enumerate() {
        elements.push(CardElement::new(
            format!("stats[{i}].stat.name"),
            format!("Stat name: {}", slot.stat.name),
            format_stat_name(&slot.stat.name),
        ));
        elements.push(CardElement::new(
            format!("stats[{i}].base_stat"),
            format!("Base stat value for {}", slot.stat.name),
            slot.base_stat.to_string(),
        ));
    }

    for (i, slot) in pokemon.abilities.iter().enumerate() {
        elements.push(CardElement::new(
            format!("abilities[{i}].ability.name"),
            format!("Pokemon ability: {}", slot.ability.name),
            slot.ability.name.replace('-', " "),
        ));
    }

    for (i, evolution) in evolutions.iter().enumerate() {
        elements.push(CardElement::new(
            format!("evolution_chain.chain.evolves_to[{i}].species.name"),
            "Evolution species name from evolution chain API",
            evolution.sprite.clone().unwrap_or_default(),
        ));
        elements.push(CardElement::new(
            format!("evolution_chain.chain.evolves_to[{i}].species.name"),
            "Evolution name from species data",
            evolution.name.clone(),
        ));
        elements.push(CardElement::new(
            format!("evolution_chain.chain.evolves_to[{i}].evolution_details[0]"),
            "Evolution requirements and trigger method",
            format_evolution_method(evolution),
        ));
        elements.push(CardElement::new(
            format!("evolution_chain.chain.evolves_to[{i}].species.url"),
            "Evolution Pokemon ID extracted from species URL",
            format_dex_number(evolution.id),
        ));
    }

    elements
}

/// `#025`-style padded catalog number.
pub fn format_dex_number(id: u32) -> String {
    format!("#{id:03}")
}

/// `special-attack` -> `Special Attack`.
pub fn format_stat_name(name: &str) -> String {
    name.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Display label for how an evolution is reached: a level requirement wins
/// over an item, which wins over the bare trigger name.
pub fn format_evolution_method(evolution: &EvolutionNode) -> String {
    if let Some(level) = evolution.level {
        return format!("Level {level}");
    }
    if let Some(item) = &evolution.item {
        return item.replace('-', " ");
    }
    if let Some(trigger) = &evolution.trigger {
        return trigger.replace('-', " ");
    }
    "Evolution".to_string()
}

/// Stat bar fill fraction, capped at 1.0 (stats are scaled against 150).
pub fn stat_bar_ratio(base_stat: u32) -> f32 {
    (base_stat as f32 / STAT_BAR_MAX as f32).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pikachu() -> Pokemon {
        serde_json::from_value(json!({
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "weight": 60,
            "sprites": { "front_default": "https://img/25.png" },
            "types": [
                { "type": { "name": "electric" } },
                { "type": { "name": "flying" } }
            ],
            "stats": [ { "base_stat": 35, "stat": { "name": "hp" } } ],
            "abilities": [ { "ability": { "name": "lightning-rod" } } ]
        }))
        .unwrap()
    }

    #[test]
    fn test_type_tag_declares_indexed_path() {
        let elements = card_elements(&pikachu(), &[]);
        let type_tags: Vec<&CardElement> = elements
            .iter()
            .filter(|e| e.path.starts_with("types["))
            .collect();
        assert_eq!(type_tags.len(), 2);
        assert_eq!(type_tags[1].path, "types[1].type.name");
        assert_eq!(type_tags[1].text, "flying");
    }

    #[test]
    fn test_measurements_divide_by_ten() {
        let elements = card_elements(&pikachu(), &[]);
        let height = elements.iter().find(|e| e.path == "height").unwrap();
        let weight = elements.iter().find(|e| e.path == "weight").unwrap();
        assert_eq!(height.text, "0.4m");
        assert_eq!(weight.text, "6kg");
    }

    #[test]
    fn test_format_stat_name() {
        assert_eq!(format_stat_name("special-attack"), "Special Attack");
        assert_eq!(format_stat_name("hp"), "Hp");
    }

    #[test]
    fn test_evolution_method_precedence() {
        let mut node = EvolutionNode {
            name: "raichu".to_string(),
            id: 26,
            sprite: None,
            trigger: Some("use-item".to_string()),
            level: Some(36),
            item: Some("thunder-stone".to_string()),
        };
        assert_eq!(format_evolution_method(&node), "Level 36");
        node.level = None;
        assert_eq!(format_evolution_method(&node), "thunder stone");
        node.item = None;
        assert_eq!(format_evolution_method(&node), "use item");
        node.trigger = None;
        assert_eq!(format_evolution_method(&node), "Evolution");
    }

    #[test]
    fn test_stat_bar_ratio_caps_at_one() {
        assert_eq!(stat_bar_ratio(75), 0.5);
        assert_eq!(stat_bar_ratio(300), 1.0);
    }

    #[test]
    fn test_dex_number_padding() {
        assert_eq!(format_dex_number(25), "#025");
        assert_eq!(format_dex_number(1000), "#1000");
    }
}
