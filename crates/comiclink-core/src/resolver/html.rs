//! Resolve a comic by scraping its rendered page.
//!
//! Looks for the element with `id="comic"` and takes the first `img` among
//! its immediate children.

use scraper::{ElementRef, Html, Selector};

use crate::comic::{ComicImage, ResolvedComic, DEFAULT_IMAGE_TITLE};
use crate::http::{CurlClient, HttpClient};
use crate::matcher::ComicReference;

use super::{ResolveError, Resolver};

pub struct HtmlResolver<C = CurlClient> {
    client: C,
    base_url: String,
}

impl HtmlResolver<CurlClient> {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(CurlClient, base_url)
    }
}

impl<C: HttpClient> HtmlResolver<C> {
    pub fn with_client(client: C, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `{base}/{id}/`
    pub fn page_url(&self, identifier: &str) -> String {
        format!("{}/{}/", self.base_url, identifier)
    }
}

impl<C: HttpClient> Resolver for HtmlResolver<C> {
    fn resolve(&self, reference: &ComicReference) -> Result<ResolvedComic, ResolveError> {
        let url = self.page_url(&reference.identifier);
        let response = self.client.get(&url)?;
        let page = String::from_utf8_lossy(&response.body);
        let image = extract_comic_image(&page, &url, &reference.identifier)?;
        tracing::trace!("scraped comic image {} from {}", image.image_url, url);
        Ok(ResolvedComic::Image(image))
    }
}

/// Pull the comic image out of a rendered page served from `page_url`.
pub(crate) fn extract_comic_image(
    page: &str,
    page_url: &str,
    identifier: &str,
) -> Result<ComicImage, ResolveError> {
    let markup_err = |reason| ResolveError::Markup {
        url: page_url.to_string(),
        reason,
    };

    let document = Html::parse_document(page);
    let selector = Selector::parse("#comic").map_err(|_| markup_err("invalid selector"))?;
    let container = document
        .select(&selector)
        .next()
        .ok_or_else(|| markup_err("no #comic element"))?;

    let img = container
        .children()
        .filter_map(ElementRef::wrap)
        .find(|child| child.value().name() == "img")
        .ok_or_else(|| markup_err("no img inside #comic"))?;

    let src = img
        .value()
        .attr("src")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| markup_err("comic img has no src"))?;
    let image_url = url::Url::parse(page_url)
        .and_then(|base| base.join(src))
        .map_err(|_| markup_err("comic img src is not a valid URL"))?;

    let title = img
        .value()
        .attr("title")
        .unwrap_or(DEFAULT_IMAGE_TITLE)
        .to_string();
    let alt = img
        .value()
        .attr("alt")
        .filter(|a| !a.trim().is_empty())
        .map(String::from);

    Ok(ComicImage {
        id: identifier.to_string(),
        image_url: image_url.to_string(),
        title,
        alt,
    })
}
