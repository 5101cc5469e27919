//! PokeAPI Module
//!
//! The remote data service whose responses the Pokedex caches.

mod client;
mod models;

pub use client::{ApiError, PokeApiClient, PokeSource};
pub use models::{LocationArea, LocationPage, NamedResource, PokemonEncounter};
