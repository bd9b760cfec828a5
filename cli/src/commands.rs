//! Command line surface.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use pokeapi_core::{
    Identifier, PokeApi, PokeApiClient, Transport, DEFAULT_BASE_URL, DEFAULT_LIST_LIMIT,
    DEFAULT_LIST_OFFSET,
};
use serde_json::Value;

use crate::app::{Pokedex, SearchState};
use crate::transport::UreqTransport;
use crate::view::{render_card, render_details, PokemonView};

const PROMPT: &str = "pokedex> ";

#[derive(Debug, Parser)]
#[command(name = "pokedex", version, about = "Look up Pokémon on PokeAPI")]
pub struct Cli {
    /// Upstream API root
    #[arg(long, env = "POKEAPI_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search by name or id (1-1010)
    Search {
        term: String,
        /// Show the full detail view instead of the card
        #[arg(long)]
        details: bool,
    },
    /// Show a random Pokémon
    Random {
        #[arg(long)]
        details: bool,
    },
    /// Print one page of the Pokémon list as JSON
    List {
        #[arg(long, default_value_t = DEFAULT_LIST_LIMIT)]
        limit: u32,
        #[arg(long, default_value_t = DEFAULT_LIST_OFFSET)]
        offset: u32,
    },
    /// Print a species record as JSON
    Species { name_or_id: String },
    /// Print a type record as JSON
    Type { name_or_id: String },
    /// Search repeatedly from a prompt
    Interactive,
}

impl Cli {
    pub fn pokedex(&self) -> Pokedex<UreqTransport> {
        Pokedex::new(PokeApi::new(
            PokeApiClient::new(&self.base_url),
            UreqTransport::new(),
        ))
    }
}

/// Run `command` against `dex`, reading prompts from `input` and writing to
/// `out`.
pub fn run<T, R, W>(command: &Command, dex: &mut Pokedex<T>, input: R, out: &mut W) -> Result<()>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    match command {
        Command::Search { term, details } => {
            dex.submit(term)?;
            show_result(dex, *details, out)
        }
        Command::Random { details } => {
            dex.random()?;
            show_result(dex, *details, out)
        }
        Command::List { limit, offset } => {
            let page = dex.api().get_pokemon_list(*limit, *offset)?;
            print_json(&page, out)
        }
        Command::Species { name_or_id } => {
            let species = dex.api().get_pokemon_species(Identifier::from(name_or_id))?;
            print_json(&species, out)
        }
        Command::Type { name_or_id } => {
            let kind = dex.api().get_pokemon_type(Identifier::from(name_or_id))?;
            print_json(&kind, out)
        }
        Command::Interactive => interactive(dex, input, out),
    }
}

fn print_json<W: Write>(value: &Value, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn show_result<T: Transport, W: Write>(dex: &mut Pokedex<T>, details: bool, out: &mut W) -> Result<()> {
    if details && dex.select() {
        return show_details(dex, out);
    }
    match dex.state() {
        SearchState::Success(record) => {
            let view = PokemonView::from_value(record).context("unexpected Pokemon record")?;
            write!(out, "{}", render_card(&view))?;
            Ok(())
        }
        SearchState::Error(message) => bail!("{message}"),
        SearchState::Idle | SearchState::Loading { .. } => Ok(()),
    }
}

fn show_details<T: Transport, W: Write>(dex: &Pokedex<T>, out: &mut W) -> Result<()> {
    if let Some(record) = dex.selected() {
        let view = PokemonView::from_value(record).context("unexpected Pokemon record")?;
        write!(out, "{}", render_details(&view))?;
    }
    Ok(())
}

fn interactive<T, R, W>(dex: &mut Pokedex<T>, input: R, out: &mut W) -> Result<()>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    writeln!(
        out,
        "Search by name or id, or use :random, :details, :close, :quit."
    )?;
    write!(out, "{PROMPT}")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        match line.trim() {
            ":quit" | ":q" => break,
            ":random" => {
                dex.random()?;
                report(dex, out)?;
            }
            ":details" => {
                if dex.open_details().is_some() {
                    show_details(dex, out)?;
                } else {
                    writeln!(out, "Nothing loaded yet.")?;
                }
            }
            ":close" => dex.close_details(),
            _ => match dex.submit(&line) {
                Ok(_) => report(dex, out)?,
                Err(rejected) => writeln!(out, "{rejected}")?,
            },
        }
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

/// Print the card or the error for the latest search.
fn report<T: Transport, W: Write>(dex: &mut Pokedex<T>, out: &mut W) -> Result<()> {
    if let SearchState::Error(message) = dex.state() {
        writeln!(out, "{message}")?;
        return Ok(());
    }
    show_result(dex, false, out)
}
