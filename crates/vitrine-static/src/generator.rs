//! The single generation path from site description to document.

use vitrine_site::{defaults, model, SiteDescription};

use crate::nav::nav_items;
use crate::templates::{PageContext, TemplateEngine};
use crate::theme::{minify_css, Theme};

/// Options for document generation.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Minify the embedded stylesheet (export path; previews skip it)
    pub minify_css: bool,
}

/// Errors that can occur during generation.
///
/// User input never produces an error; missing fields fall back and
/// malformed colors degrade to the default palette. The only failure mode
/// is a template fault.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Failed to render site template: {0}")]
    Template(String),
}

/// Generate the complete preview document for a site description.
///
/// Pure and deterministic: no I/O, no mutation of the input, and identical
/// input yields byte-identical output.
pub fn generate(site: &SiteDescription) -> Result<String, GenerateError> {
    generate_with(site, &GenerateOptions::default())
}

/// Generate with explicit options.
pub fn generate_with(
    site: &SiteDescription,
    options: &GenerateOptions,
) -> Result<String, GenerateError> {
    let name = model::text_or(site.brand.name.as_deref(), defaults::SITE_NAME);
    let tagline = model::text_or(site.brand.tagline.as_deref(), defaults::TAGLINE);
    let description = model::text_or(site.brand.description.as_deref(), defaults::DESCRIPTION);
    let about = model::text_or(site.content.about.as_deref(), defaults::ABOUT);

    let stylesheet = Theme::from_brand(&site.brand).stylesheet();
    let stylesheet = if options.minify_css {
        // Fall back to the readable form if minification trips on the CSS
        minify_css(&stylesheet).unwrap_or(stylesheet)
    } else {
        stylesheet
    };

    let context = PageContext {
        name: name.to_string(),
        tagline: tagline.to_string(),
        description: description.to_string(),
        about_html: render_markdown(about),
        stylesheet,
        nav: nav_items(&site.pages),
        social: site.social.clone(),
    };

    TemplateEngine::new()
        .render_page(&context)
        .map_err(|e| GenerateError::Template(e.to_string()))
}

/// Render the about-section body from markdown.
fn render_markdown(content: &str) -> String {
    use pulldown_cmark::{html, Options, Parser};

    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(content, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}
