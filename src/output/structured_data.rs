use crate::{
    breadcrumb::Crumb,
    config::{Faq, SiteConfig},
    error::Error,
};
use serde::Serialize;
use yew::Html;

pub fn structured_data_json<T: Serialize>(data: T) -> Result<String, serde_json::Error> {
    #[derive(Serialize)]
    struct Context<T> {
        #[serde(rename = "@context")]
        context: &'static str,
        #[serde(flatten)]
        data: T,
    }

    let json = serde_json::to_string_pretty(&Context {
        context: "https://schema.org",
        data,
    })?;
    // Keep `</script>` in a name from closing the tag.
    Ok(json.replace('<', "\\u003c"))
}

pub fn write_structured_data<T: Serialize>(data: T) -> Result<Html, Error> {
    Ok(Html::from_html_unchecked(
        format!(
            "<script type=\"application/ld+json\">\n{}\n</script>",
            structured_data_json(data)?
        )
        .into(),
    ))
}

/// https://schema.org/BreadcrumbList
#[derive(Debug, Serialize)]
pub struct BreadcrumbList {
    #[serde(rename = "@type")]
    pub _type: &'static str,
    #[serde(rename = "itemListElement")]
    pub item_list_element: Vec<BreadcrumbListElement>,
}

#[derive(Debug, Serialize)]
pub struct BreadcrumbListElement {
    #[serde(rename = "@type")]
    pub _type: &'static str,
    pub position: usize,
    pub name: String,
    pub item: String,
}

impl BreadcrumbList {
    pub fn from_crumbs(crumbs: &[Crumb], config: &SiteConfig) -> Self {
        Self {
            _type: "BreadcrumbList",
            item_list_element: crumbs
                .iter()
                .enumerate()
                .map(|(i, crumb)| BreadcrumbListElement {
                    _type: "ListItem",
                    position: i + 1,
                    name: crumb.name.clone(),
                    item: config.absolute_url(&crumb.url),
                })
                .collect(),
        }
    }
}

/// https://schema.org/FAQPage
#[derive(Debug, Serialize)]
pub struct FaqPage {
    #[serde(rename = "@type")]
    pub _type: &'static str,
    #[serde(rename = "mainEntity")]
    pub main_entity: Vec<Question>,
}

#[derive(Debug, Serialize)]
pub struct Question {
    #[serde(rename = "@type")]
    pub _type: &'static str,
    pub name: String,
    #[serde(rename = "acceptedAnswer")]
    pub accepted_answer: Answer,
}

#[derive(Debug, Serialize)]
pub struct Answer {
    #[serde(rename = "@type")]
    pub _type: &'static str,
    pub text: String,
}

impl FaqPage {
    /// `None` without questions, since an empty FAQPage is invalid.
    pub fn new(faqs: &[Faq]) -> Option<Self> {
        (!faqs.is_empty()).then(|| Self {
            _type: "FAQPage",
            main_entity: faqs
                .iter()
                .map(|faq| Question {
                    _type: "Question",
                    name: faq.question.clone(),
                    accepted_answer: Answer {
                        _type: "Answer",
                        text: faq.answer.clone(),
                    },
                })
                .collect(),
        })
    }
}

/// https://schema.org/Person
#[derive(Clone, Debug, Serialize)]
pub struct PersonStructuredData {
    #[serde(rename = "@type")]
    pub _type: &'static str,
    pub name: String,
}

/// https://schema.org/WebSite
#[derive(Debug, Serialize)]
pub struct WebSiteStructuredData {
    #[serde(rename = "@type")]
    pub _type: &'static str,
    pub url: String,
    pub name: String,
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "copyrightHolder", skip_serializing_if = "Option::is_none")]
    pub copyright_holder: Option<PersonStructuredData>,
}

impl WebSiteStructuredData {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            _type: "WebSite",
            url: config.absolute_url("/"),
            name: config.title.clone(),
            description: config.description.clone(),
            copyright_holder: config.author.clone().map(|name| PersonStructuredData {
                _type: "Person",
                name,
            }),
        }
    }
}
