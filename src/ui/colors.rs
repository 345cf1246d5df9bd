// src/ui/colors.rs

/// Display color per type, `normal`'s gray as the fallback.
pub fn type_color(type_name: &str) -> &'static str {
    match type_name {
        "fire" => "#f08030",
        "water" => "#6890f0",
        "electric" => "#f8d030",
        "grass" => "#78c850",
        "ice" => "#98d8d8",
        "fighting" => "#c03028",
        "poison" => "#a040a0",
        "ground" => "#e0c068",
        "flying" => "#a890f0",
        "psychic" => "#f85888",
        "bug" => "#a8b820",
        "rock" => "#b8a038",
        "ghost" => "#705898",
        "dragon" => "#7038f8",
        "dark" => "#705848",
        "steel" => "#b8b8d0",
        "fairy" => "#ee99ac",
        _ => "#a8a878",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_type_falls_back_to_normal() {
        assert_eq!(type_color("normal"), type_color("stellar"));
        assert_ne!(type_color("fire"), type_color("water"));
    }
}
