use crate::breadcrumb::{BreadcrumbBuilder, CrumbList};
use std::sync::Arc;
use tracing::trace;

/// Remembers the trail for the most recent path only.
#[derive(Debug)]
pub struct BreadcrumbMemo {
    builder: BreadcrumbBuilder,
    last: Option<(String, Arc<CrumbList>)>,
}

impl BreadcrumbMemo {
    pub fn new(builder: BreadcrumbBuilder) -> Self {
        Self {
            builder,
            last: None,
        }
    }

    pub fn get(&mut self, path: &str) -> Arc<CrumbList> {
        if let Some((last_path, crumbs)) = &self.last {
            if last_path == path {
                trace!(path, "breadcrumb memo hit");
                return Arc::clone(crumbs);
            }
        }
        let crumbs = Arc::new(self.builder.build(path));
        self.last = Some((path.to_owned(), Arc::clone(&crumbs)));
        crumbs
    }
}
