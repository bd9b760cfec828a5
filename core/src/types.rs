//! Input types for the PokeAPI client.
//!
//! # Design
//! Upstream payloads are not modelled here; they pass through as
//! `serde_json::Value`. Only the values the client marshals into URLs get
//! types of their own.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Deserialize;

/// Page size used when the caller does not pick one.
pub const DEFAULT_LIST_LIMIT: u32 = 20;

/// Page start used when the caller does not pick one.
pub const DEFAULT_LIST_OFFSET: u32 = 0;

/// Bytes escaped inside a single path segment: the URL path set plus `/`
/// and `%`, so an identifier always stays one segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// A Pokémon (or species, or type) name or numeric id.
///
/// `Display` yields the value as given; `path_segment` yields the lowercased,
/// percent-encoded form placed in request URLs. Whitespace is never trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Id(u32),
    Name(String),
}

impl Identifier {
    pub fn path_segment(&self) -> String {
        match self {
            Identifier::Id(id) => id.to_string(),
            Identifier::Name(name) => {
                utf8_percent_encode(&name.to_lowercase(), PATH_SEGMENT).to_string()
            }
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Id(id) => write!(f, "{id}"),
            Identifier::Name(name) => f.write_str(name),
        }
    }
}

impl From<u32> for Identifier {
    fn from(id: u32) -> Self {
        Identifier::Id(id)
    }
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        Identifier::Name(name.to_string())
    }
}

impl From<String> for Identifier {
    fn from(name: String) -> Self {
        Identifier::Name(name)
    }
}

impl From<&String> for Identifier {
    fn from(name: &String) -> Self {
        Identifier::Name(name.clone())
    }
}

/// Upstream resources addressable by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Pokemon,
    PokemonSpecies,
    PokemonType,
}

impl Resource {
    /// First path segment under the base URL.
    pub fn path(self) -> &'static str {
        match self {
            Resource::Pokemon => "pokemon",
            Resource::PokemonSpecies => "pokemon-species",
            Resource::PokemonType => "type",
        }
    }

    /// Label used in not-found messages.
    pub fn label(self) -> &'static str {
        match self {
            Resource::Pokemon => "Pokemon",
            Resource::PokemonSpecies => "Pokemon species",
            Resource::PokemonType => "Pokemon type",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `limit`/`offset` pair for the list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ListParams {
    pub limit: u32,
    pub offset: u32,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIST_LIMIT,
            offset: DEFAULT_LIST_OFFSET,
        }
    }
}
