use crate::{
    breadcrumb::{BreadcrumbBuilder, Crumb},
    config::{Faq, PageConfig, SiteConfig},
    error::Error,
    route_path::RoutePath,
};
use tracing::debug;
use yew::{html, Html};

mod app;
mod rich_text;
mod serve;
mod structured_data;

pub use app::*;
pub use rich_text::*;
pub use serve::*;
pub use structured_data::*;

const WHY_CHOOSE_US: &[(&str, &str)] = &[
    (
        "Handmade by artisans",
        "Every piece is crafted by hand in small workshops.",
    ),
    (
        "Fair prices",
        "Makers set their own prices and keep most of every sale.",
    ),
    (
        "Careful shipping",
        "Fragile work is packed by the people who made it.",
    ),
    (
        "Easy returns",
        "Not what you hoped for? Send it back within 30 days.",
    ),
];

pub fn render_page(
    config: &SiteConfig,
    builder: &BreadcrumbBuilder,
    path: &str,
) -> Result<Vec<u8>, Error> {
    render_route(config, path, &builder.build(path))
}

/// `crumbs` must be the trail for `path`.
pub fn render_route(
    config: &SiteConfig,
    path: &str,
    crumbs: &[Crumb],
) -> Result<Vec<u8>, Error> {
    let route = RoutePath::new(path);
    let page = config.page(path);
    debug!(
        path = %route.to_string_with_leading_slash(),
        crumbs = crumbs.len(),
        configured = page.is_some(),
        "rendering"
    );

    let title = page.and_then(|p| p.title.clone()).or_else(|| match crumbs {
        [_, .., last] => Some(last.name.clone()),
        _ => None,
    });

    let (head, body) = match page {
        Some(page) => (faq_structured_data(&page.faqs)?, render_configured(page)?),
        None if route.is_root() => (Html::default(), render_why_choose_us()),
        None => (Html::default(), render_placeholder(title.as_deref())),
    };

    render_html(AppProps {
        config,
        canonical: route.to_string_with_leading_slash(),
        crumbs,
        title: title.map(|t| t.into()),
        description: page
            .and_then(|p| p.description.clone())
            .or_else(|| config.description.clone())
            .map(|d| d.into()),
        head,
        body,
    })
}

fn faq_structured_data(faqs: &[Faq]) -> Result<Html, Error> {
    match FaqPage::new(faqs) {
        Some(faq_page) => write_structured_data(faq_page),
        None => Ok(Html::default()),
    }
}

fn render_configured(page: &PageConfig) -> Result<Html, Error> {
    let body = markdown_html(&page.body)?;
    Ok(html! {<>
        {body}
        if !page.faqs.is_empty() {
            <section id="faqs">
                <h2>{"Frequently Asked Questions"}</h2>
                {page.faqs.iter().map(|faq| html!{
                    <details class="faq">
                        <summary>{faq.question.clone()}</summary>
                        <p>{faq.answer.clone()}</p>
                    </details>
                }).collect::<Html>()}
            </section>
        }
    </>})
}

fn render_why_choose_us() -> Html {
    html! {
        <section id="why_choose_us">
            {WHY_CHOOSE_US.iter().map(|(heading, text)| html!{
                <div class="why_choose_us_item">
                    <h2>{*heading}</h2>
                    <p>{*text}</p>
                </div>
            }).collect::<Html>()}
        </section>
    }
}

fn render_placeholder(title: Option<&str>) -> Html {
    html! {
        <h2>{title.unwrap_or_default().to_owned()}</h2>
    }
}

#[cfg(test)]
mod tests {
    use super::render_page;
    use crate::{breadcrumb::BreadcrumbBuilder, config::SiteConfig};

    fn render(config: &SiteConfig, path: &str) -> String {
        String::from_utf8(render_page(config, &config.breadcrumb_builder(), path).unwrap())
            .unwrap()
    }

    #[test]
    fn home_page() {
        let html = render(&SiteConfig::default(), "/");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Handicrafts</title>"));
        assert!(html.contains("Handmade by artisans"));
        // Only Home, so no trail schema.
        assert!(!html.contains("BreadcrumbList"));
        assert!(html.contains("\"WebSite\""));
    }

    #[test]
    fn product_page() {
        let config = SiteConfig::default();
        let html = String::from_utf8(
            render_page(
                &config,
                &BreadcrumbBuilder::default(),
                "/category/trophies/products/golden-trophy",
            )
            .unwrap(),
        )
        .unwrap();
        assert!(html.contains("<title>Golden Trophy | Handicrafts</title>"));
        assert!(html.contains("\"BreadcrumbList\""));
        assert!(html.contains("https://handicrafts.example/category/trophies"));
        assert!(html.contains(r#"href="/category/trophies/products""#));
        assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
        assert!(html.contains(
            r#"href="https://handicrafts.example/category/trophies/products/golden-trophy""#
        ));
    }

    #[test]
    fn configured_page_with_faqs() {
        let config = SiteConfig::from_toml(
            r#"
            [[pages]]
            path = "/faq"
            title = "Questions"
            description = "Shipping, returns and care."
            body = "Answers to **common** questions."

            [[pages.faqs]]
            question = "How do I clean brass?"
            answer = "Soft cloth, no polish."
            "#,
        )
        .unwrap();
        let html = render(&config, "/faq");
        assert!(html.contains("<title>Questions | Handicrafts</title>"));
        assert!(html.contains("<strong>common</strong>"));
        assert!(html.contains("\"FAQPage\""));
        assert!(html.contains("How do I clean brass?"));
        assert!(html.contains(r#"content="Shipping, returns and care.""#));
    }
}
