use crate::{route_path::RoutePath, slug::format_slug};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, sync::Arc};

mod labels;
mod memo;

pub use labels::*;
pub use memo::*;

pub const HOME_NAME: &str = "Home";
pub const HOME_URL: &str = "/";

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Crumb {
    pub name: String,
    /// Cumulative, from root.
    pub url: String,
}

impl Crumb {
    pub fn home() -> Self {
        Self {
            name: HOME_NAME.to_owned(),
            url: HOME_URL.to_owned(),
        }
    }
}

/// Always starts with [`Crumb::home`].
pub type CrumbList = Vec<Crumb>;

/// Names numeric path segments (order ids, product ids) that would otherwise
/// be left out of the trail.
pub trait IdResolver: Send + Sync {
    /// `path` is the cumulative path ending in `segment`.
    fn resolve(&self, path: &str, segment: &str) -> Option<String>;
}

impl IdResolver for HashMap<String, String> {
    fn resolve(&self, path: &str, _segment: &str) -> Option<String> {
        self.get(path).cloned()
    }
}

#[derive(Clone)]
pub struct BreadcrumbBuilder {
    labels: Arc<LabelDictionary>,
    resolver: Option<Arc<dyn IdResolver>>,
}

impl Default for BreadcrumbBuilder {
    fn default() -> Self {
        Self::new(LabelDictionary::storefront())
    }
}

impl std::fmt::Debug for BreadcrumbBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BreadcrumbBuilder")
            .field("labels", &self.labels.len())
            .field("resolver", &self.resolver.is_some())
            .finish()
    }
}

impl BreadcrumbBuilder {
    pub fn new(labels: Arc<LabelDictionary>) -> Self {
        Self {
            labels,
            resolver: None,
        }
    }

    pub fn with_resolver(mut self, resolver: Arc<dyn IdResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn build(&self, path: &str) -> CrumbList {
        self.build_path(&RoutePath::new(path))
    }

    pub fn build_path(&self, path: &RoutePath) -> CrumbList {
        let mut crumbs = vec![Crumb::home()];
        let mut url = String::new();

        for segment in path.iter_segments() {
            url.push('/');
            url.push_str(segment);

            let name = if is_numeric_id(segment) {
                // Ids never reach the dictionary. `url` keeps them.
                match self
                    .resolver
                    .as_ref()
                    .and_then(|r| r.resolve(&url, segment))
                {
                    Some(name) => name,
                    None => continue,
                }
            } else {
                self.label(segment)
            };

            crumbs.push(Crumb {
                name,
                url: url.clone(),
            });
        }

        crumbs
    }

    pub fn label(&self, segment: &str) -> String {
        self.labels
            .get(segment)
            .map(|s| s.to_owned())
            .unwrap_or_else(|| format_slug(segment))
    }
}

/// One or more ASCII digits.
pub fn is_numeric_id(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}
