//! PokeAPI response models
//!
//! Only the fields the Pokedex displays are decoded; the rest is ignored.

use serde::{Deserialize, Serialize};

/// A name/url pair, the shape PokeAPI uses for every reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of the paginated location listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationPage {
    /// Total number of locations across all pages
    pub count: u32,
    /// URL of the following page, absent on the last page
    pub next: Option<String>,
    /// URL of the preceding page, absent on the first page
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

/// Detail record for a single location area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationArea {
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

impl LocationArea {
    /// Names of the Pokemon that can be encountered in this area.
    pub fn pokemon_names(&self) -> impl Iterator<Item = &str> {
        self.pokemon_encounters
            .iter()
            .map(|encounter| encounter.pokemon.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_page_parsing() {
        let json = r#"{
            "count": 1036,
            "next": "https://pokeapi.co/api/v2/location/?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "canalave-city", "url": "https://pokeapi.co/api/v2/location/1/"},
                {"name": "eterna-city", "url": "https://pokeapi.co/api/v2/location/2/"}
            ]
        }"#;

        let page: LocationPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 1036);
        assert!(page.previous.is_none());
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].name, "canalave-city");
    }

    #[test]
    fn test_location_area_parsing() {
        let json = r#"{
            "id": 1,
            "name": "canalave-city-area",
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": "https://pokeapi.co/api/v2/pokemon/72/"}, "version_details": []},
                {"pokemon": {"name": "staryu", "url": "https://pokeapi.co/api/v2/pokemon/120/"}, "version_details": []}
            ]
        }"#;

        let area: LocationArea = serde_json::from_str(json).unwrap();
        assert_eq!(area.name, "canalave-city-area");
        assert_eq!(area.pokemon_names().collect::<Vec<_>>(), ["tentacool", "staryu"]);
    }

    #[test]
    fn test_location_area_without_encounters() {
        let area: LocationArea = serde_json::from_str(r#"{"name": "empty-area"}"#).unwrap();
        assert_eq!(area.pokemon_names().count(), 0);
    }
}
