//! Search session state.
//!
//! # Design
//! `Pokedex` owns the `PokeApi` handle and the state shown to the user:
//! `Idle → Loading → {Success, Error}`, plus a detail overlay that is
//! toggled independently. A new search is refused while one is loading.
//! There is no request-id fencing: whichever response is finished last
//! replaces the state.

use pokeapi_core::{random_pokemon_id, ApiError, Identifier, PokeApi, Transport};
use serde_json::Value;

use crate::search::{self, ValidationError};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Loading {
        term: String,
    },
    Success(Value),
    Error(String),
}

/// Why a search was not started.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchRejected {
    #[error("a search is already in progress")]
    Busy,

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Message shown for any failed lookup.
pub fn not_found_message(term: &str) -> String {
    format!("Pokemon \"{term}\" not found. Please try a different name or ID.")
}

#[derive(Debug)]
pub struct Pokedex<T> {
    api: PokeApi<T>,
    state: SearchState,
    selected: Option<Value>,
}

impl<T: Transport> Pokedex<T> {
    pub fn new(api: PokeApi<T>) -> Self {
        Self {
            api,
            state: SearchState::Idle,
            selected: None,
        }
    }

    pub fn api(&self) -> &PokeApi<T> {
        &self.api
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SearchState::Loading { .. })
    }

    /// Record shown in the detail overlay, if open.
    pub fn selected(&self) -> Option<&Value> {
        self.selected.as_ref()
    }

    /// Validate `input` and run the lookup.
    pub fn submit(&mut self, input: &str) -> Result<&SearchState, SearchRejected> {
        let id = self.begin(input)?;
        let result = self.api.get_pokemon(id);
        Ok(self.finish(result))
    }

    /// Look up a random id. Skips input validation.
    pub fn random(&mut self) -> Result<&SearchState, SearchRejected> {
        self.search_id(random_pokemon_id())
    }

    pub fn search_id(&mut self, id: u32) -> Result<&SearchState, SearchRejected> {
        let id = self.begin_with(Identifier::Id(id))?;
        let result = self.api.get_pokemon(id);
        Ok(self.finish(result))
    }

    /// Enter `Loading` for a validated term and hand back the identifier to
    /// fetch. Validation failures leave the state untouched.
    pub fn begin(&mut self, input: &str) -> Result<Identifier, SearchRejected> {
        if self.is_loading() {
            return Err(SearchRejected::Busy);
        }
        let term = search::validate(input)?;
        self.begin_with(Identifier::from(term))
    }

    fn begin_with(&mut self, id: Identifier) -> Result<Identifier, SearchRejected> {
        if self.is_loading() {
            return Err(SearchRejected::Busy);
        }
        tracing::info!(term = %id, "searching");
        self.state = SearchState::Loading {
            term: id.to_string(),
        };
        Ok(id)
    }

    /// Apply a lookup outcome. The term shown in error messages is the one
    /// recorded by the latest `begin`.
    pub fn finish(&mut self, result: Result<Value, ApiError>) -> &SearchState {
        let term = match &self.state {
            SearchState::Loading { term } => term.clone(),
            _ => String::new(),
        };
        self.state = match result {
            Ok(record) => SearchState::Success(record),
            Err(err) => {
                tracing::warn!(%term, %err, "search failed");
                SearchState::Error(not_found_message(&term))
            }
        };
        &self.state
    }

    /// Open the detail overlay on the loaded record. Returns `false` when
    /// there is nothing loaded.
    pub fn select(&mut self) -> bool {
        match &self.state {
            SearchState::Success(record) => {
                self.selected = Some(record.clone());
                true
            }
            _ => false,
        }
    }

    /// Open the overlay on the loaded record if there is one, otherwise keep
    /// whatever the overlay already shows.
    pub fn open_details(&mut self) -> Option<&Value> {
        self.select();
        self.selected()
    }

    pub fn close_details(&mut self) {
        self.selected = None;
    }
}
