use crate::{
    breadcrumb::Crumb,
    config::SiteConfig,
    error::Error,
    output::{write_structured_data, BreadcrumbList, WebSiteStructuredData},
};
use chrono::Datelike;
use yew::{function_component, html, AttrValue, Html, LocalServerRenderer, Properties};

pub struct AppProps<'a> {
    pub config: &'a SiteConfig,
    /// Root-relative.
    pub canonical: String,
    pub crumbs: &'a [Crumb],
    /// `None` on the home page.
    pub title: Option<AttrValue>,
    pub description: Option<AttrValue>,
    pub head: Html,
    pub body: Html,
}

/// `Golden Trophy | Handicrafts`, or just the site title.
pub fn document_title(page: Option<&str>, site: &str) -> String {
    match page {
        Some(page) if !page.is_empty() && page != site => format!("{page} | {site}"),
        _ => site.to_owned(),
    }
}

pub fn breadcrumb_trail(crumbs: &[Crumb], separator: &str) -> Html {
    let Some((current, ancestors)) = crumbs.split_last() else {
        return Html::default();
    };
    let separator = html! {
        <span class="breadcrumb_separator" aria-hidden="true">{separator.to_owned()}</span>
    };
    html! {
        <nav id="breadcrumbs" aria-label="Breadcrumb">
            {ancestors.iter().map(|crumb| html!{<>
                <a
                    class={"breadcrumb"}
                    href={crumb.url.clone()}
                >{crumb.name.clone()}</a>
                {separator.clone()}
            </>}).collect::<Html>()}
            <span
                class={"breadcrumb breadcrumb_final"}
                aria-current="page"
            >{current.name.clone()}</span>
        </nav>
    }
}

pub fn app(props: AppProps<'_>) -> Result<Html, Error> {
    let style = Html::from_html_unchecked(
        r#"
        body {
            background-color: #f6f1ea;
            margin: 2rem;
            font-family: "Helvetica Neue", Arial, Helvetica, sans-serif;
        }

        a {
            text-decoration: none;
            color: #8a4b1f;
        }

        #page {
            background-color: white;
            max-width: 60rem;
            margin: 0rem auto;
            border-radius: 0.5rem;
            overflow: hidden;
        }

        #header {
            background-color: #e9dcc7;
            padding: 2rem;
        }

        #title {
            font-size: 1.5rem;
            font-weight: normal;
            margin: 0;
        }

        #breadcrumbs {
            background-color: #505050;
            padding: 0.5rem 2rem;
            color: white;
            display: flex;
            flex-direction: row;
            gap: 0.25rem;
            white-space: nowrap;
        }

        .breadcrumb {
            color: #ffd9a8;
        }

        .breadcrumb_final {
            color: white;
            font-weight: bold;
        }

        #page_main_body {
            margin: 2rem;
        }

        #why_choose_us {
            display: flex;
            flex-wrap: wrap;
            gap: 1rem;
        }

        .why_choose_us_item {
            flex: 1 1 12rem;
            border: 1px solid #eee3d3;
            padding: 1rem;
        }

        #footer {
            background-color: #e9dcc7;
            text-align: center;
            padding: 0.5rem;
        }
    "#
        .into(),
    );

    let config = props.config;
    let title = document_title(props.title.as_deref(), &config.title);
    let canonical = config.absolute_url(&props.canonical);

    let web_site_structured_data = write_structured_data(WebSiteStructuredData::new(config))?;
    let breadcrumb_structured_data = if props.crumbs.len() > 1 {
        write_structured_data(BreadcrumbList::from_crumbs(props.crumbs, config))?
    } else {
        Html::default()
    };

    let year = chrono::Utc::now().year();
    let holder = config.author.clone().unwrap_or_else(|| config.title.clone());

    Ok(html! {
        <html lang="en">
            <head>
                <meta charset="UTF-8"/>
                <title>{title.clone()}</title>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                if let Some(description) = props.description.clone() {
                    <meta name="description" content={description.clone()}/>
                    <meta property="og:description" content={description}/>
                }
                if let Some(author) = config.author.clone() {
                    <meta name="author" content={author}/>
                }
                <meta name="generator" content="crumbtrail"/>
                <link rel="canonical" href={canonical.clone()}/>
                <meta property="og:title" content={title}/>
                <meta property="og:site_name" content={config.title.clone()}/>
                <meta property="og:type" content="website"/>
                <meta property="og:url" content={canonical}/>
                if let Some(og_image) = &config.og_image {
                    <meta property="og:image" content={config.absolute_url(og_image)}/>
                }
                {web_site_structured_data}
                {breadcrumb_structured_data}
                {props.head}
                <style>{style}</style>
            </head>
            <body>
                <div id="page">
                    <header id="header">
                        <h1 id="title"><a href="/">{config.title.clone()}</a></h1>
                    </header>
                    {breadcrumb_trail(props.crumbs, &config.separator)}
                    <main id="page_main_body">
                        {props.body}
                    </main>
                    <footer id="footer">
                        {format!("© {year} {holder}")}
                    </footer>
                </div>
            </body>
        </html>
    })
}

pub fn render_html(props: AppProps<'_>) -> Result<Vec<u8>, Error> {
    let html = app(props)?;

    #[derive(Properties, PartialEq)]
    struct InnerAppProps {
        html: Html,
    }

    #[function_component(InnerApp)]
    fn inner_app(props: &InnerAppProps) -> Html {
        props.html.clone()
    }

    let renderer =
        LocalServerRenderer::<InnerApp>::with_props(InnerAppProps { html }).hydratable(false);
    let html = futures::executor::block_on(renderer.render());

    let html = tidy(&html)?;
    Ok(format!("<!DOCTYPE html>\n{html}").into_bytes())
}

/// Reindents with tabs and drops blank lines. Embedded scripts and styles are
/// passed through untouched.
fn tidy(html: &str) -> Result<String, Error> {
    let mut options = markup_fmt::config::FormatOptions::default();
    options.layout.use_tabs = true;
    options.layout.indent_width = 1;
    let formatted =
        markup_fmt::format_text(html, markup_fmt::Language::Html, &options, |code, _| {
            Ok::<_, std::convert::Infallible>(code.into())
        })
        .map_err(|e| Error::Format(format!("{e:?}")))?;

    let mut out = String::with_capacity(formatted.len());
    for line in formatted.lines().filter(|l| !l.trim().is_empty()) {
        out.push_str(line);
        out.push('\n');
    }
    Ok(out)
}
