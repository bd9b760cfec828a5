//! Canned upstream records served by the mock.
//!
//! Shapes follow PokeAPI v2 closely enough for the client and the terminal
//! front end; values for the listed Pokémon match upstream.

use serde_json::{json, Value};

/// Static data served by the mock routes.
#[derive(Debug, Clone)]
pub struct Dex {
    pub pokemon: Vec<Value>,
    pub species: Vec<Value>,
    pub types: Vec<Value>,
}

struct Entry {
    id: u32,
    name: &'static str,
    types: &'static [&'static str],
    height: u32,
    weight: u32,
    base_experience: u32,
    abilities: &'static [(&'static str, bool)],
    stats: [u32; 6],
    moves: &'static [&'static str],
    genus: &'static str,
    color: &'static str,
    evolves_from: Option<&'static str>,
}

const ENTRIES: &[Entry] = &[
    Entry {
        id: 1,
        name: "bulbasaur",
        types: &["grass", "poison"],
        height: 7,
        weight: 69,
        base_experience: 64,
        abilities: &[("overgrow", false), ("chlorophyll", true)],
        stats: [45, 49, 49, 65, 65, 45],
        moves: &["razor-wind", "swords-dance", "cut", "bind", "vine-whip", "headbutt", "tackle"],
        genus: "Seed Pokémon",
        color: "green",
        evolves_from: None,
    },
    Entry {
        id: 2,
        name: "ivysaur",
        types: &["grass", "poison"],
        height: 10,
        weight: 130,
        base_experience: 142,
        abilities: &[("overgrow", false), ("chlorophyll", true)],
        stats: [60, 62, 63, 80, 80, 60],
        moves: &["swords-dance", "cut", "bind", "vine-whip", "headbutt"],
        genus: "Seed Pokémon",
        color: "green",
        evolves_from: Some("bulbasaur"),
    },
    Entry {
        id: 4,
        name: "charmander",
        types: &["fire"],
        height: 6,
        weight: 85,
        base_experience: 62,
        abilities: &[("blaze", false), ("solar-power", true)],
        stats: [39, 52, 43, 60, 50, 65],
        moves: &["mega-punch", "fire-punch", "thunder-punch", "scratch", "swords-dance", "cut", "ember"],
        genus: "Lizard Pokémon",
        color: "red",
        evolves_from: None,
    },
    Entry {
        id: 25,
        name: "pikachu",
        types: &["electric"],
        height: 4,
        weight: 60,
        base_experience: 112,
        abilities: &[("static", false), ("lightning-rod", true)],
        stats: [35, 55, 40, 50, 50, 90],
        moves: &["mega-punch", "pay-day", "thunder-punch", "slam", "double-kick", "mega-kick", "thunder-shock"],
        genus: "Mouse Pokémon",
        color: "yellow",
        evolves_from: Some("pichu"),
    },
];

const TYPES: &[(u32, &str)] = &[(4, "poison"), (10, "fire"), (12, "grass"), (13, "electric")];

const STAT_NAMES: [&str; 6] = [
    "hp",
    "attack",
    "defense",
    "special-attack",
    "special-defense",
    "speed",
];

impl Dex {
    /// Fixture set with upstream URLs rooted at `base_url`.
    pub fn new(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            pokemon: ENTRIES.iter().map(|e| pokemon_record(base, e)).collect(),
            species: ENTRIES.iter().map(|e| species_record(base, e)).collect(),
            types: TYPES
                .iter()
                .map(|&(id, name)| type_record(base, id, name))
                .collect(),
        }
    }
}

/// Upstream-style `{name, url}` reference.
pub fn named(base: &str, resource: &str, id: u32, name: &str) -> Value {
    json!({ "name": name, "url": format!("{base}/{resource}/{id}/") })
}

fn type_id(name: &str) -> u32 {
    TYPES
        .iter()
        .find(|(_, n)| *n == name)
        .map(|(id, _)| *id)
        .unwrap_or_default()
}

fn pokemon_record(base: &str, e: &Entry) -> Value {
    let sprite = |kind: &str| {
        format!(
            "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/{kind}{}.png",
            e.id
        )
    };
    json!({
        "id": e.id,
        "name": e.name,
        "height": e.height,
        "weight": e.weight,
        "base_experience": e.base_experience,
        "order": e.id,
        "is_default": true,
        "species": named(base, "pokemon-species", e.id, e.name),
        "types": e.types.iter().enumerate().map(|(i, t)| json!({
            "slot": i + 1,
            "type": named(base, "type", type_id(t), t),
        })).collect::<Vec<_>>(),
        "abilities": e.abilities.iter().enumerate().map(|(i, (name, hidden))| json!({
            "slot": i + 1,
            "is_hidden": hidden,
            "ability": { "name": name, "url": format!("{base}/ability/{name}/") },
        })).collect::<Vec<_>>(),
        "stats": STAT_NAMES.iter().zip(e.stats).map(|(name, value)| json!({
            "base_stat": value,
            "effort": 0,
            "stat": { "name": name, "url": format!("{base}/stat/{name}/") },
        })).collect::<Vec<_>>(),
        "moves": e.moves.iter().map(|name| json!({
            "move": { "name": name, "url": format!("{base}/move/{name}/") },
        })).collect::<Vec<_>>(),
        "sprites": {
            "front_default": sprite(""),
            "back_default": sprite("back/"),
            "front_shiny": sprite("shiny/"),
            "back_shiny": sprite("back/shiny/"),
            "other": {
                "official-artwork": {
                    "front_default": sprite("other/official-artwork/"),
                },
            },
        },
    })
}

fn species_record(base: &str, e: &Entry) -> Value {
    json!({
        "id": e.id,
        "name": e.name,
        "color": { "name": e.color, "url": format!("{base}/pokemon-color/{}/", e.color) },
        "genera": [{ "genus": e.genus, "language": { "name": "en" } }],
        "evolves_from_species": e.evolves_from.map(|name| json!({
            "name": name,
            "url": format!("{base}/pokemon-species/{name}/"),
        })),
        "is_legendary": false,
        "is_mythical": false,
        "varieties": [{ "is_default": true, "pokemon": named(base, "pokemon", e.id, e.name) }],
    })
}

fn type_record(base: &str, id: u32, name: &str) -> Value {
    let members: Vec<Value> = ENTRIES
        .iter()
        .filter(|e| e.types.contains(&name))
        .map(|e| {
            let slot = e.types.iter().position(|t| *t == name).unwrap_or_default() + 1;
            json!({ "slot": slot, "pokemon": named(base, "pokemon", e.id, e.name) })
        })
        .collect();
    json!({
        "id": id,
        "name": name,
        "pokemon": members,
    })
}
