//! Breadcrumbs, page shell and structured data for a handicrafts storefront.
//!
//! A navigation path such as `/category/trophies/products/golden-trophy` is
//! split into segments, turned into a trail of `{name, url}` crumbs, rendered
//! as a clickable trail and mirrored into a schema.org `BreadcrumbList`.
//!
//! ```
//! use crumbtrail::breadcrumb::BreadcrumbBuilder;
//!
//! let crumbs = BreadcrumbBuilder::default().build("/my-orders/1001");
//! assert_eq!(crumbs.len(), 2);
//! assert_eq!(crumbs[1].name, "My Orders");
//! ```

pub mod breadcrumb;
pub mod config;
pub mod error;
pub mod guard;
pub mod output;
pub mod route_path;
pub mod slug;

pub use error::Error;
