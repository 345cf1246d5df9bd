// src/catalog/mod.rs
// Domain aggregator: composes raw endpoint responses into the higher-level
// results the view layer consumes.

pub mod evolution;

use std::sync::Arc;

use futures::future::{join_all, try_join_all};
use serde::Serialize;
use tracing::{debug, warn};

use crate::api::types::{id_from_url, NamedRef, Pokemon};
use crate::api::{ApiError, CatalogApi};
use crate::catalog::evolution::direct_evolutions_of;
use crate::config::{EXCLUDED_TYPES, TYPE_MEMBER_CAP};

/// One resolved evolution step: an immediate successor of the examined
/// species, with how it is reached.
#[derive(Debug, Clone, Serialize)]
pub struct EvolutionNode {
    pub name: String,
    pub id: u32,
    pub sprite: Option<String>,
    pub trigger: Option<String>,
    pub level: Option<u32>,
    pub item: Option<String>,
}

pub struct Catalog<A: CatalogApi> {
    api: Arc<A>,
}

impl<A: CatalogApi> Catalog<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Selectable types in upstream order. `unknown` and `shadow` are listed
    /// by the index but are not real filters.
    pub async fn list_types(&self) -> Result<Vec<NamedRef>, ApiError> {
        let index = self.api.type_index().await?;
        Ok(index
            .results
            .into_iter()
            .filter(|t| !EXCLUDED_TYPES.contains(&t.name.as_str()))
            .collect())
    }

    /// Full entries for at most the first `TYPE_MEMBER_CAP` members of a
    /// type, fetched concurrently. All-or-nothing: one failed member fails
    /// the batch. Result order matches the upstream member order, not fetch
    /// completion order.
    pub async fn members_of_type(&self, name: &str) -> Result<Vec<Pokemon>, ApiError> {
        let detail = self.api.type_detail(name).await?;
        let fetches = detail.pokemon.iter().take(TYPE_MEMBER_CAP).map(|member| {
            let key = id_from_url(&member.pokemon.url)
                .map(|id| id.to_string())
                .unwrap_or_else(|| member.pokemon.name.clone());
            async move { self.api.entry(&key).await }
        });
        try_join_all(fetches).await
    }

    /// Exact-name lookup. The query is lowercased and tried as a direct
    /// fetch; any miss is an empty result, never an error.
    pub async fn search_exact(&self, query: &str) -> Vec<Pokemon> {
        let query = query.to_lowercase();
        match self.api.entry(&query).await {
            Ok(pokemon) => vec![pokemon],
            Err(err) => {
                debug!(%query, %err, "exact-name search missed");
                Vec::new()
            }
        }
    }

    /// Immediate evolutions of the given entry, in graph order.
    ///
    /// Species metadata and the shared chain are fetched first; the chain is
    /// walked for every node matching the species, and each collected child
    /// is resolved to a full entry concurrently. A child that fails to
    /// resolve is logged and omitted; a species/chain-level failure yields an
    /// empty list. This never returns an error.
    pub async fn resolve_evolutions(&self, name_or_id: &str) -> Vec<EvolutionNode> {
        let species = match self.api.species(name_or_id).await {
            Ok(species) => species,
            Err(err) => {
                warn!(%name_or_id, %err, "failed to fetch species; no evolutions");
                return Vec::new();
            }
        };
        let chain = match self.api.evolution_chain(&species.evolution_chain.url).await {
            Ok(chain) => chain,
            Err(err) => {
                warn!(%name_or_id, %err, "failed to fetch evolution chain");
                return Vec::new();
            }
        };

        let pending = direct_evolutions_of(&chain.chain, &species.name);
        let resolved = join_all(pending.iter().map(|p| self.api.entry(&p.name))).await;

        pending
            .into_iter()
            .zip(resolved)
            .filter_map(|(pending, result)| match result {
                Ok(pokemon) => Some(EvolutionNode {
                    id: pokemon.id,
                    sprite: pokemon.image_url().map(str::to_string),
                    name: pending.name,
                    trigger: pending.detail.as_ref().map(|d| d.trigger.name.clone()),
                    level: pending.detail.as_ref().and_then(|d| d.min_level),
                    item: pending
                        .detail
                        .as_ref()
                        .and_then(|d| d.item.as_ref().map(|i| i.name.clone())),
                }),
                Err(err) => {
                    warn!(name = %pending.name, %err, "failed to resolve evolution; omitting");
                    None
                }
            })
            .collect()
    }
}
