use std::collections::BTreeMap;

use futures::future::join_all;

use crate::{
    spotify::Catalog,
    types::{ArtistRecord, Lookup},
};

/// What the catalog answered for one user-supplied artist name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub query: String,
    pub outcome: Lookup<ArtistRecord>,
}

impl Resolution {
    /// Name-keyed view consumed by the mood filter. Misses and failures both
    /// become `None`; for duplicate queries the later one wins.
    pub fn resolved_map(resolutions: &[Resolution]) -> BTreeMap<String, Option<ArtistRecord>> {
        resolutions
            .iter()
            .map(|r| (r.query.clone(), r.outcome.found().cloned()))
            .collect()
    }
}

/// Resolves every name with one catalog search each.
///
/// Lookups run concurrently and never abort each other: a name the catalog
/// does not know becomes [`Lookup::NotFound`], a failed call becomes
/// [`Lookup::Failed`]. The result keeps the order of `names`, duplicates
/// included.
pub async fn resolve_artists<C: Catalog>(catalog: &C, names: &[String]) -> Vec<Resolution> {
    let lookups = names.iter().map(|name| async move {
        let outcome = match catalog.search_artist(name).await {
            Ok(Some(record)) => Lookup::Found(record),
            Ok(None) => {
                tracing::debug!(artist = %name, "no catalog match");
                Lookup::NotFound
            }
            Err(e) => {
                tracing::warn!(artist = %name, error = %e, "artist lookup failed");
                Lookup::Failed(e.to_string())
            }
        };

        Resolution {
            query: name.clone(),
            outcome,
        }
    });

    join_all(lookups).await
}
