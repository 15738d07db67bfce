use std::{
    collections::HashMap,
    sync::{Arc, LazyLock},
};

const DEFAULT_LABELS: &[(&str, &str)] = &[
    ("shop", "Shop"),
    ("category", "Categories"),
    ("categories", "Categories"),
    ("products", "Products"),
    ("product", "Product"),
    ("cart", "Shopping Cart"),
    ("checkout", "Checkout"),
    ("my-orders", "My Orders"),
    ("orders", "Orders"),
    ("profile", "My Profile"),
    ("wishlist", "Wishlist"),
    ("about", "About Us"),
    ("contact", "Contact Us"),
    ("faq", "FAQ"),
    ("terms", "Terms & Conditions"),
    ("login", "Login"),
    ("register", "Register"),
    ("unauthorized", "Unauthorized"),
    ("admin", "Admin"),
];

static DEFAULT: LazyLock<Arc<LabelDictionary>> = LazyLock::new(|| {
    Arc::new(LabelDictionary {
        labels: DEFAULT_LABELS
            .iter()
            .map(|(segment, label)| ((*segment).to_owned(), (*label).to_owned()))
            .collect(),
    })
});

/// Segment keyword to display label. Keys are matched exactly, so `Shop`
/// does not hit the `shop` entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelDictionary {
    labels: HashMap<String, String>,
}

impl LabelDictionary {
    /// Storefront labels, built once per process.
    pub fn storefront() -> Arc<Self> {
        Arc::clone(&DEFAULT)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Copy of `self` with `overrides` layered on top.
    pub fn with_overrides<'a>(
        &self,
        overrides: impl IntoIterator<Item = (&'a String, &'a String)>,
    ) -> Self {
        let mut labels = self.labels.clone();
        labels.extend(
            overrides
                .into_iter()
                .map(|(segment, label)| (segment.clone(), label.clone())),
        );
        Self { labels }
    }

    pub fn get(&self, segment: &str) -> Option<&str> {
        self.labels.get(segment).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LabelDictionary {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            labels: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
