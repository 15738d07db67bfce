use crate::error::Error;
use yew::Html;

pub fn markdown_html(content: &str) -> Result<Html, Error> {
    let mut options = markdown::Options::gfm();
    options.compile.allow_dangerous_html = true;
    let html = markdown::to_html_with_options(content, &options)
        .map_err(|e| Error::Format(e.to_string()))?;
    Ok(Html::from_html_unchecked(html.into()))
}
