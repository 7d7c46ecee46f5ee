//! HTML rendering.
//!
//! # Responsibilities
//! - Register the page templates (layout, listing, detail, not-found)
//! - Render `Serialize` page data through Handlebars
//!
//! # Design Decisions
//! - Handlebars escapes `{{value}}` output; only the layout's `{{{body}}}`
//!   slot takes pre-rendered HTML
//! - Asset references are absolute (`<prefix>/...`) so the exporter can relocate them

use std::sync::Arc;

use handlebars::Handlebars;
use serde::Serialize;
use thiserror::Error;

use crate::catalog::Product;

pub const SITE_NAME: &str = "Scamazon";

const LAYOUT: &str = "layout";
const LISTING: &str = "listing";
const DETAIL: &str = "detail";
const NOT_FOUND: &str = "not_found";

const LAYOUT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{title}}</title>
  <link rel="stylesheet" href="{{asset_prefix}}/style.css">
</head>
<body>
<header class="site-header"><a href="/">{{site}}</a></header>
<main>
{{{body}}}
</main>
<footer>{{site}} is a parody. Nothing here is for sale.</footer>
</body>
</html>
"#;

const LISTING_TEMPLATE: &str = r#"<h1>Today's Unbelievable Deals</h1>
<ul class="products">
{{#each products}}
  <li class="product-card">
    <a href="/product/{{id}}"><h2>{{name}}</h2></a>
    <p class="price">{{price}}</p>
    <p class="short">{{short}}</p>
  </li>
{{/each}}
</ul>
"#;

const DETAIL_TEMPLATE: &str = r#"<article class="product-detail">
  <h1>{{name}}</h1>
  <p class="price">{{price}}</p>
  <p class="short">{{short}}</p>
  <p class="desc">{{desc}}</p>
  <section class="scam-note">
    <h2>Why this is a scam</h2>
    <p>{{scam_note}}</p>
  </section>
  <a class="back" href="/">&larr; Back to all deals</a>
</article>
"#;

const NOT_FOUND_TEMPLATE: &str = r#"<h1>Not found</h1>
<p>We couldn't find {{what}}. It may have been too good to be true.</p>
<a class="back" href="/">&larr; Back to all deals</a>
"#;

/// Template registration or rendering failure.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to register template {name}: {source}")]
    Template {
        name: &'static str,
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    #[error("failed to render {name}: {source}")]
    Render {
        name: &'static str,
        #[source]
        source: handlebars::RenderError,
    },
}

#[derive(Serialize)]
struct LayoutData<'a> {
    title: &'a str,
    asset_prefix: &'a str,
    site: &'a str,
    body: &'a str,
}

#[derive(Serialize)]
struct ListingData<'a> {
    products: &'a [Product],
}

#[derive(Serialize)]
struct NotFoundData<'a> {
    what: &'a str,
}

/// Renders pages with asset links under a fixed URL prefix.
#[derive(Clone)]
pub struct Renderer {
    handlebars: Arc<Handlebars<'static>>,
    asset_prefix: String,
}

impl Renderer {
    /// Create a renderer. `asset_prefix` is the mount point, e.g. `/assets`.
    pub fn new(asset_prefix: impl Into<String>) -> Result<Self, RenderError> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);

        for (name, template) in [
            (LAYOUT, LAYOUT_TEMPLATE),
            (LISTING, LISTING_TEMPLATE),
            (DETAIL, DETAIL_TEMPLATE),
            (NOT_FOUND, NOT_FOUND_TEMPLATE),
        ] {
            handlebars
                .register_template_string(name, template)
                .map_err(|e| RenderError::Template {
                    name,
                    source: Box::new(e),
                })?;
        }

        let prefix = asset_prefix.into();
        Ok(Self {
            handlebars: Arc::new(handlebars),
            asset_prefix: prefix.trim_end_matches('/').to_string(),
        })
    }

    /// Listing of every product, in the given order.
    pub fn listing(&self, products: &[Product]) -> Result<String, RenderError> {
        let body = self.render(LISTING, &ListingData { products })?;
        self.layout(SITE_NAME, &body)
    }

    /// Detail page for a single product.
    pub fn detail(&self, product: &Product) -> Result<String, RenderError> {
        let body = self.render(DETAIL, product)?;
        self.layout(&format!("{} | {SITE_NAME}", product.name), &body)
    }

    /// Page served with a 404 status.
    pub fn not_found(&self, what: &str) -> Result<String, RenderError> {
        let body = self.render(NOT_FOUND, &NotFoundData { what })?;
        self.layout(&format!("Not found | {SITE_NAME}"), &body)
    }

    fn layout(&self, title: &str, body: &str) -> Result<String, RenderError> {
        self.render(
            LAYOUT,
            &LayoutData {
                title,
                asset_prefix: &self.asset_prefix,
                site: SITE_NAME,
                body,
            },
        )
    }

    fn render<T: Serialize>(&self, name: &'static str, data: &T) -> Result<String, RenderError> {
        self.handlebars
            .render(name, data)
            .map_err(|source| RenderError::Render { name, source })
    }
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("asset_prefix", &self.asset_prefix)
            .finish()
    }
}
