//! Text rendering of Pokémon records.
//!
//! Records arrive as raw upstream JSON. The view structs below pick out the
//! fields the card and detail view show and default everything else, so a
//! sparse record still renders.

use std::fmt::Write;

use serde::Deserialize;
use serde_json::Value;

const STAT_BAR_WIDTH: usize = 20;
const MAX_BASE_STAT: f64 = 255.0;
const MISSING_ART: &str = "(no artwork)";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PokemonView {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub base_experience: Option<u32>,
    pub types: Vec<TypeSlot>,
    pub abilities: Vec<AbilitySlot>,
    pub stats: Vec<StatSlot>,
    pub moves: Vec<MoveSlot>,
    pub sprites: Sprites,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NamedRef {
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedRef,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AbilitySlot {
    pub ability: NamedRef,
    pub is_hidden: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedRef,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub kind: NamedRef,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub back_default: Option<String>,
    pub front_shiny: Option<String>,
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork")]
    pub official_artwork: Option<Artwork>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Artwork {
    pub front_default: Option<String>,
}

impl PokemonView {
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(value)
    }

    /// Official artwork, falling back to the front sprite.
    pub fn artwork(&self) -> Option<&str> {
        self.sprites
            .other
            .as_ref()
            .and_then(|o| o.official_artwork.as_ref())
            .and_then(|a| a.front_default.as_deref())
            .or(self.sprites.front_default.as_deref())
    }

    fn type_names(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.kind.name.as_str()).collect()
    }
}

/// `#025` style id.
pub fn padded_id(id: u32) -> String {
    format!("#{id:03}")
}

pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Decimetres/hectograms to one decimal place.
fn tenths(value: u32) -> String {
    format!("{:.1}", f64::from(value) / 10.0)
}

/// Upstream slugs with the first dash turned into a space.
fn label(slug: &str) -> String {
    slug.replacen('-', " ", 1)
}

fn stat_bar(base_stat: u32) -> String {
    let ratio = (f64::from(base_stat) / MAX_BASE_STAT).min(1.0);
    let filled = (ratio * STAT_BAR_WIDTH as f64).round() as usize;
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(STAT_BAR_WIDTH - filled)
    )
}

/// Summary card shown after a successful search.
pub fn render_card(p: &PokemonView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", padded_id(p.id), display_name(&p.name));
    let _ = writeln!(out, "Type: {}", p.type_names().join(", "));
    let _ = writeln!(out, "Height: {}m  Weight: {}kg", tenths(p.height), tenths(p.weight));
    let abilities: Vec<&str> = p
        .abilities
        .iter()
        .take(2)
        .map(|a| a.ability.name.as_str())
        .collect();
    let _ = writeln!(out, "Abilities: {}", abilities.join(", "));
    let _ = writeln!(out, "Artwork: {}", p.artwork().unwrap_or(MISSING_ART));
    out
}

/// Full detail overlay.
pub fn render_details(p: &PokemonView) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} [{}]",
        padded_id(p.id),
        display_name(&p.name),
        p.type_names().join(", ")
    );
    let base_experience = p
        .base_experience
        .map(|xp| xp.to_string())
        .unwrap_or_else(|| "?".to_string());
    let _ = writeln!(
        out,
        "Height: {}m  Weight: {}kg  Base experience: {}",
        tenths(p.height),
        tenths(p.weight),
        base_experience
    );

    let _ = writeln!(out, "\nAbilities");
    for a in &p.abilities {
        let hidden = if a.is_hidden { " (hidden)" } else { "" };
        let _ = writeln!(out, "  {}{hidden}", a.ability.name);
    }

    let _ = writeln!(out, "\nBase Stats");
    for s in &p.stats {
        let _ = writeln!(
            out,
            "  {:<16}{:>4} {}",
            label(&s.stat.name),
            s.base_stat,
            stat_bar(s.base_stat)
        );
    }

    let _ = writeln!(out, "\nSample Moves");
    let moves: Vec<String> = p.moves.iter().take(6).map(|m| label(&m.kind.name)).collect();
    let _ = writeln!(out, "  {}", moves.join(", "));

    let _ = writeln!(out, "\nSprites");
    let _ = writeln!(out, "  artwork: {}", p.artwork().unwrap_or(MISSING_ART));
    for (kind, url) in [
        ("front", &p.sprites.front_default),
        ("back", &p.sprites.back_default),
        ("shiny", &p.sprites.front_shiny),
    ] {
        if let Some(url) = url {
            let _ = writeln!(out, "  {kind}: {url}");
        }
    }
    out
}
