// src/resolver/mod.rs

//! Registry dependency resolution
//!
//! Expands requested component names into the full installation list by
//! walking each component's `registryDependencies` depth-first. Dependencies
//! are emitted before their dependents and every name appears at most once.
//!
//! A name is marked as seen before its dependencies are visited, so a cycle
//! ends at the second visit instead of recursing forever. Cycles are logged
//! and otherwise treated as a valid graph.

use crate::error::{Error, Result};
use crate::registry::{RegistryClient, RegistryIndex};
use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;
use tracing::{debug, info, warn};

type VisitFuture<'a> = Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;

/// Ordered, deduplicated installation list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Component names, dependencies before dependents
    pub order: Vec<String>,
    /// Number of distinct names that were explicitly requested
    pub requested: usize,
}

impl Resolution {
    /// How many components were pulled in only as dependencies
    pub fn extra_dependencies(&self) -> usize {
        self.order.len().saturating_sub(self.requested)
    }
}

/// State for a single resolution run
#[derive(Default)]
struct Walk {
    seen: HashSet<String>,
    /// Names whose dependencies are currently being visited
    path: Vec<String>,
    order: Vec<String>,
}

/// Resolves registry dependencies through a [`RegistryClient`]
pub struct Resolver {
    client: RegistryClient,
}

impl Resolver {
    pub fn new(client: RegistryClient) -> Self {
        Self { client }
    }

    /// Expand `names` into the complete installation order
    ///
    /// Fails on the first component that cannot be fetched; no partial list
    /// is returned.
    pub async fn resolve(&self, names: &[String]) -> Result<Vec<String>> {
        let mut walk = Walk::default();
        self.visit(names, &mut walk).await?;
        Ok(walk.order)
    }

    /// Like [`Resolver::resolve`], also reporting how many names were requested
    pub async fn plan(&self, names: &[String]) -> Result<Resolution> {
        let requested = names.iter().collect::<HashSet<_>>().len();
        let order = self.resolve(names).await?;

        info!(
            "Resolved {} requested component(s) to {} total",
            requested,
            order.len()
        );

        Ok(Resolution { order, requested })
    }

    fn visit<'a>(&'a self, names: &'a [String], walk: &'a mut Walk) -> VisitFuture<'a> {
        Box::pin(async move {
            for name in names {
                if walk.seen.contains(name) {
                    if walk.path.contains(name) {
                        warn!(
                            "Dependency cycle: {} -> {}; keeping the first visit",
                            walk.path.join(" -> "),
                            name
                        );
                    }
                    continue;
                }
                walk.seen.insert(name.clone());

                let component = self.client.fetch_component(name).await?;

                if !component.registry_dependencies.is_empty() {
                    debug!(
                        "{} depends on {}",
                        name,
                        component.registry_dependencies.join(", ")
                    );
                    walk.path.push(name.clone());
                    self.visit(&component.registry_dependencies, walk).await?;
                    walk.path.pop();
                }

                walk.order.push(name.clone());
            }
            Ok(())
        })
    }
}

/// Check requested names against the index before resolving
///
/// Returns every unknown name (deduplicated, in request order).
pub fn validate_requested(index: &RegistryIndex, names: &[String]) -> Result<()> {
    let mut unknown: Vec<String> = Vec::new();
    for name in names {
        if !index.contains(name) && !unknown.contains(name) {
            unknown.push(name.clone());
        }
    }

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(Error::UnknownComponents(unknown))
    }
}
