use crumbtrail::{
    breadcrumb::{is_numeric_id, BreadcrumbBuilder, Crumb, LabelDictionary},
    config::SiteConfig,
    output::{breadcrumb_trail, structured_data_json, BreadcrumbList},
    route_path::RoutePath,
    slug::format_slug,
};
use proptest::prelude::*;
use std::sync::Arc;
use yew::LocalServerRenderer;

fn pairs(crumbs: &[Crumb]) -> Vec<(&str, &str)> {
    crumbs
        .iter()
        .map(|c| (c.name.as_str(), c.url.as_str()))
        .collect()
}

#[test]
fn storefront_scenarios() {
    let builder = BreadcrumbBuilder::default();
    assert_eq!(pairs(&builder.build("/")), [("Home", "/")]);
    assert_eq!(pairs(&builder.build("/shop")), [("Home", "/"), ("Shop", "/shop")]);
    assert_eq!(pairs(&builder.build("/shop/42")), [("Home", "/"), ("Shop", "/shop")]);
    assert_eq!(
        pairs(&builder.build("/category/trophies/products/golden-trophy")),
        [
            ("Home", "/"),
            ("Categories", "/category"),
            ("Trophies", "/category/trophies"),
            ("Products", "/category/trophies/products"),
            ("Golden Trophy", "/category/trophies/products/golden-trophy"),
        ]
    );
    assert_eq!(
        pairs(&builder.build("/my-orders/1001")),
        [("Home", "/"), ("My Orders", "/my-orders")]
    );
}

#[test]
fn trail_json_shape() {
    let crumbs = BreadcrumbBuilder::default().build("/cart");
    assert_eq!(
        serde_json::to_value(&crumbs).unwrap(),
        serde_json::json!([
            {"name": "Home", "url": "/"},
            {"name": "Shopping Cart", "url": "/cart"},
        ])
    );
}

#[test]
fn rendered_trail_links_all_but_last() {
    let crumbs = BreadcrumbBuilder::default().build("/category/trophies/products/golden-trophy");

    #[derive(yew::Properties, PartialEq)]
    struct Props {
        html: yew::Html,
    }

    #[yew::function_component(Trail)]
    fn trail(props: &Props) -> yew::Html {
        props.html.clone()
    }

    let html = futures::executor::block_on(
        LocalServerRenderer::<Trail>::with_props(Props {
            html: breadcrumb_trail(&crumbs, "/"),
        })
        .hydratable(false)
        .render(),
    );

    assert_eq!(html.matches("<a ").count(), crumbs.len() - 1);
    assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
    assert_eq!(html.matches("breadcrumb_separator").count(), crumbs.len() - 1);
    assert!(html.contains("Golden Trophy</span>"));
}

fn path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-z]{1,8}(-[a-z]{1,8}){0,2}",
            "[0-9]{1,5}",
            Just(String::new()),
            Just("shop".to_owned()),
            Just("category".to_owned()),
        ],
        0..8,
    )
    .prop_map(|segments| format!("/{}", segments.join("/")))
}

/// Mixed case, accents, non-Latin scripts, `?` and `#`.
fn cased_segment() -> impl Strategy<Value = String> {
    "[A-Za-zÀ-ÿЀ-ӿ?#]{1,8}(-[A-Za-zÀ-ÿЀ-ӿ?#]{1,8}){0,2}"
}

fn cased_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(cased_segment(), 1..6)
        .prop_map(|segments| format!("/{}", segments.join("/")))
}

proptest! {
    #[test]
    fn any_string_builds(path in any::<String>()) {
        let crumbs = BreadcrumbBuilder::default().build(&path);
        prop_assert_eq!(&crumbs[0], &Crumb::home());
        let segments = RoutePath::new(&path);
        let numeric = segments.iter_segments().filter(|s| is_numeric_id(s)).count();
        prop_assert_eq!(crumbs.len(), segments.len() + 1 - numeric);
        for pair in crumbs.windows(2) {
            prop_assert!(pair[1].url.starts_with(&pair[0].url));
            prop_assert!(pair[1].url.len() > pair[0].url.len());
        }
    }

    #[test]
    fn printable_string_builds(path in "\\PC*") {
        let crumbs = BreadcrumbBuilder::default().build(&path);
        prop_assert_eq!(&crumbs[0], &Crumb::home());
        for pair in crumbs.windows(2) {
            prop_assert!(pair[1].url.starts_with(&pair[0].url));
            prop_assert!(pair[1].url.len() > pair[0].url.len());
        }
    }

    #[test]
    fn unlabelled_segments_are_slug_formatted(path in cased_path_strategy()) {
        let labels = LabelDictionary::storefront();
        let route = RoutePath::new(&path);
        let crumbs = BreadcrumbBuilder::default().build(&path);
        prop_assert_eq!(crumbs.len(), route.len() + 1);
        for (segment, crumb) in route.iter_segments().zip(&crumbs[1..]) {
            let expected = labels
                .get(segment)
                .map(|s| s.to_owned())
                .unwrap_or_else(|| format_slug(segment));
            prop_assert_eq!(&crumb.name, &expected);
            prop_assert!(crumb.url.ends_with(segment));
        }
    }

    #[test]
    fn trail_renders_for_any_string(path in any::<String>()) {
        let config = SiteConfig::default();
        let crumbs = BreadcrumbBuilder::default().build(&path);
        let json = structured_data_json(BreadcrumbList::from_crumbs(&crumbs, &config)).unwrap();
        prop_assert!(!json.contains('<'));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(
            value["itemListElement"].as_array().map(|items| items.len()),
            Some(crumbs.len())
        );
    }

    #[test]
    fn home_comes_first(path in path_strategy()) {
        let crumbs = BreadcrumbBuilder::default().build(&path);
        prop_assert_eq!(&crumbs[0], &Crumb::home());
    }

    #[test]
    fn one_crumb_per_named_segment(path in path_strategy()) {
        let crumbs = BreadcrumbBuilder::default().build(&path);
        let segments = RoutePath::new(&path);
        let numeric = segments.iter_segments().filter(|s| is_numeric_id(s)).count();
        prop_assert!(crumbs.len() <= segments.len() + 1);
        prop_assert_eq!(crumbs.len() == segments.len() + 1, numeric == 0);
        prop_assert_eq!(crumbs.len(), segments.len() + 1 - numeric);
    }

    #[test]
    fn urls_extend_each_other(path in path_strategy()) {
        let crumbs = BreadcrumbBuilder::default().build(&path);
        for pair in crumbs.windows(2) {
            prop_assert!(pair[1].url.starts_with(&pair[0].url));
            prop_assert!(pair[1].url.len() > pair[0].url.len());
        }
    }

    #[test]
    fn build_is_idempotent(path in path_strategy()) {
        let builder = BreadcrumbBuilder::new(Arc::new(LabelDictionary::empty()));
        prop_assert_eq!(builder.build(&path), builder.build(&path));
    }

    #[test]
    fn structured_positions_and_items(path in path_strategy()) {
        let config = SiteConfig::default();
        let crumbs = BreadcrumbBuilder::default().build(&path);
        let json = structured_data_json(BreadcrumbList::from_crumbs(&crumbs, &config)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let items = value["itemListElement"].as_array().unwrap();
        prop_assert_eq!(items.len(), crumbs.len());
        for (i, item) in items.iter().enumerate() {
            prop_assert_eq!(item["position"].as_u64(), Some(i as u64 + 1));
            prop_assert!(item["item"].as_str().unwrap().starts_with(&config.root_url));
        }
    }
}
