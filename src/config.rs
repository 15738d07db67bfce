use crate::{
    breadcrumb::{BreadcrumbBuilder, LabelDictionary},
    route_path::RoutePath,
};
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("couldn't read `{0}`")]
    Io(PathBuf, #[source] std::io::Error),
    #[error("invalid config")]
    Toml(#[from] toml::de::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// Prefixed onto crumb urls in structured data, and onto canonical urls.
    #[serde(default = "default_root_url")]
    pub root_url: String,
    pub description: Option<String>,
    pub author: Option<String>,
    /// Root-relative or absolute.
    pub og_image: Option<String>,
    /// Merged over the storefront labels.
    #[serde(default)]
    pub labels: HashMap<String, String>,
    /// Full path (`/shop/42`) to entity name.
    #[serde(default)]
    pub numeric_names: HashMap<String, String>,
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default = "default_login_path")]
    pub login_path: String,
    #[serde(default = "default_unauthorized_path")]
    pub unauthorized_path: String,
    /// Route prefixes that need a signed in viewer.
    #[serde(default = "default_protected")]
    pub protected: Vec<String>,
    /// Route prefixes that need an admin.
    #[serde(default = "default_admin")]
    pub admin: Vec<String>,
    #[serde(default)]
    pub pages: Vec<PageConfig>,
}

fn default_title() -> String {
    "Handicrafts".to_owned()
}

fn default_root_url() -> String {
    "https://handicrafts.example".to_owned()
}

fn default_separator() -> String {
    "»".to_owned()
}

fn default_login_path() -> String {
    "/login".to_owned()
}

fn default_unauthorized_path() -> String {
    "/unauthorized".to_owned()
}

fn default_protected() -> Vec<String> {
    ["/my-orders", "/profile", "/checkout", "/wishlist"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_admin() -> Vec<String> {
    vec!["/admin".to_owned()]
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_toml("").expect("empty config is valid")
    }
}

impl SiteConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text =
            fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_owned(), e))?;
        Self::from_toml(&text)
    }

    /// Falls back to defaults only if `path` doesn't exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match fs::exists(path) {
            Ok(true) => Self::load(path),
            Ok(false) => Ok(Self::default()),
            Err(e) => Err(ConfigError::Io(path.to_owned(), e)),
        }
    }

    pub fn label_dictionary(&self) -> Arc<LabelDictionary> {
        let storefront = LabelDictionary::storefront();
        if self.labels.is_empty() {
            storefront
        } else {
            Arc::new(storefront.with_overrides(&self.labels))
        }
    }

    pub fn breadcrumb_builder(&self) -> BreadcrumbBuilder {
        let builder = BreadcrumbBuilder::new(self.label_dictionary());
        if self.numeric_names.is_empty() {
            builder
        } else {
            builder.with_resolver(Arc::new(self.numeric_names.clone()))
        }
    }

    /// Leaves absolute urls alone.
    pub fn absolute_url(&self, url: &str) -> String {
        if url.starts_with("http") {
            url.to_owned()
        } else {
            format!("{}{url}", self.root_url.trim_end_matches('/'))
        }
    }

    pub fn page(&self, path: &str) -> Option<&PageConfig> {
        let path = RoutePath::new(path);
        self.pages.iter().find(|p| RoutePath::new(&p.path) == path)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub path: String,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Markdown.
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub faqs: Vec<Faq>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}
