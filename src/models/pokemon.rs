//! API payload types for the PokéAPI endpoints.
//!
//! All types here are immutable once fetched. The list endpoint returns
//! lightweight [`NamedResource`] references; the numeric id of an entity is
//! not a field of its own but encoded in the last path segment of the
//! resource URL.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single entry of the paginated index: a stable lowercase name plus a
/// reference URL to the detail resource.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

impl NamedResource {
    /// Numeric entity id, parsed from the last non-empty path segment of
    /// the resource URL (e.g. `.../pokemon/25/` → 25).
    ///
    /// Returns 0 for malformed URLs so sorting stays total.
    pub fn id(&self) -> u32 {
        self.url
            .split('/')
            .filter(|segment| !segment.is_empty())
            .next_back()
            .and_then(|segment| segment.parse().ok())
            .unwrap_or(0)
    }
}

/// One offset window of the paginated list endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonPage {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

// =============================================================================
// Detail Endpoint
// =============================================================================

/// Full entity record from the per-entity detail endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    /// Height in decimeters.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
    pub sprites: Sprites,
    pub stats: Vec<StatSlot>,
    pub types: Vec<TypeSlot>,
}

impl PokemonDetail {
    /// Preferred image URL: official artwork, falling back to the default
    /// front sprite when artwork is missing.
    pub fn image_url(&self) -> Option<String> {
        self.sprites
            .other
            .as_ref()
            .and_then(|o| o.official_artwork.front_default.clone())
            .or_else(|| self.sprites.front_default.clone())
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub other: Option<OtherSprites>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork")]
    pub official_artwork: ArtworkSprites,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ArtworkSprites {
    pub front_default: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedEntry,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub type_info: NamedEntry,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NamedEntry {
    pub name: String,
}

// =============================================================================
// Type Endpoint
// =============================================================================

/// Payload of the per-type endpoint; only the member names matter here.
#[derive(Clone, Debug, Deserialize)]
pub struct TypeResponse {
    pub pokemon: Vec<TypeMember>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TypeMember {
    pub pokemon: NamedEntry,
}

impl TypeResponse {
    /// Collapse the nested payload into the membership set for this type.
    pub fn member_names(self) -> HashSet<String> {
        self.pokemon.into_iter().map(|m| m.pokemon.name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(name: &str, url: &str) -> NamedResource {
        NamedResource {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_id_from_trailing_segment() {
        let r = resource("pikachu", "https://pokeapi.co/api/v2/pokemon/25/");
        assert_eq!(r.id(), 25);
    }

    #[test]
    fn test_id_without_trailing_slash() {
        let r = resource("bulbasaur", "https://pokeapi.co/api/v2/pokemon/1");
        assert_eq!(r.id(), 1);
    }

    #[test]
    fn test_id_malformed_url_is_zero() {
        let r = resource("missingno", "not-a-url");
        assert_eq!(r.id(), 0);
    }

    #[test]
    fn test_page_deserializes_api_shape() {
        let json = r#"{
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=24&limit=24",
            "previous": null,
            "results": [{"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"}]
        }"#;
        let page: PokemonPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 1302);
        assert!(page.previous.is_none());
        assert_eq!(page.results[0].id(), 1);
    }

    #[test]
    fn test_type_response_member_names() {
        let json = r#"{"pokemon": [
            {"pokemon": {"name": "charizard"}},
            {"pokemon": {"name": "moltres"}}
        ]}"#;
        let resp: TypeResponse = serde_json::from_str(json).unwrap();
        let names = resp.member_names();
        assert!(names.contains("charizard"));
        assert!(names.contains("moltres"));
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn test_detail_image_prefers_artwork() {
        let json = r#"{
            "id": 25, "name": "pikachu", "height": 4, "weight": 60,
            "sprites": {
                "front_default": "https://img/front/25.png",
                "other": {"official-artwork": {"front_default": "https://img/art/25.png"}}
            },
            "stats": [{"base_stat": 35, "stat": {"name": "hp"}}],
            "types": [{"type": {"name": "electric"}}]
        }"#;
        let detail: PokemonDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.image_url().as_deref(), Some("https://img/art/25.png"));
        assert_eq!(detail.types[0].type_info.name, "electric");
    }
}
