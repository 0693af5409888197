//! Template engine for rendering the preview document.

use minijinja::{context, Environment};

use crate::nav::NavItem;
use vitrine_site::SocialLink;

/// The compliance footer line.
///
/// This string must appear verbatim in every generated document and is not
/// user-configurable.
pub const WATERMARK: &str =
    "Made with Vitrine. Preview generated by the Vitrine site builder.";

/// Context for rendering the site template.
#[derive(Debug, Clone)]
pub struct PageContext {
    /// Brand/site name
    pub name: String,
    /// Brand tagline
    pub tagline: String,
    /// Hero description
    pub description: String,
    /// Rendered about-section HTML
    pub about_html: String,
    /// Full embedded stylesheet
    pub stylesheet: String,
    /// Navigation items
    pub nav: Vec<NavItem>,
    /// Social/contact links
    pub social: Vec<SocialLink>,
}

/// Template engine using minijinja.
///
/// The template is registered under an `.html` name, so every interpolated
/// value is HTML-escaped; only the stylesheet and the pre-rendered about
/// body are marked safe.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the site template.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("site.html".to_string(), SITE_TEMPLATE.to_string())
            .expect("Failed to add site template");

        Self { env }
    }

    /// Render the preview document.
    pub fn render_page(&self, context: &PageContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("site.html")?;

        tmpl.render(context! {
            name => &context.name,
            tagline => &context.tagline,
            description => &context.description,
            about_html => &context.about_html,
            stylesheet => &context.stylesheet,
            nav => &context.nav,
            social => &context.social,
            watermark => WATERMARK,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const SITE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ name }} | {{ tagline }}</title>
  <meta name="description" content="{{ description }}">
  <style>{{ stylesheet | safe }}</style>
</head>
<body>
  <header class="site-header">
    <a class="brand" href="#top">{{ name }}</a>
    <nav class="site-nav">
      {%- for item in nav %}
      <a href="{{ item.href }}">{{ item.label }}</a>
      {%- endfor %}
    </nav>
  </header>

  <main id="top">
    <section class="hero" id="home">
      <h1>{{ name }}</h1>
      <p class="tagline">{{ tagline }}</p>
      <p class="lede">{{ description }}</p>
      <a class="cta" href="#about">Discover</a>
    </section>

    <section class="about" id="about">
      <h2>About</h2>
      <div class="about-body">{{ about_html | safe }}</div>
    </section>

    <section class="services" id="services">
      <h2>Services</h2>
      <div class="service-grid">
        <div class="service-card">
          <h3>Identity</h3>
          <p>A visual language built around your brand, from palette to typography.</p>
        </div>
        <div class="service-card">
          <h3>Presence</h3>
          <p>A fast, polished site that carries your name everywhere it appears.</p>
        </div>
        <div class="service-card">
          <h3>Care</h3>
          <p>Ongoing refinement so your presence stays as sharp as your work.</p>
        </div>
      </div>
    </section>

    <section class="contact" id="contact">
      <h2>Contact</h2>
      <p>Tell us where you want to be seen. We will take it from there.</p>
      {%- if social %}
      <div class="social-links">
        {%- for link in social %}
        <a href="{{ link.url }}" rel="noopener">{{ link.label }}</a>
        {%- endfor %}
      </div>
      {%- endif %}
    </section>
  </main>

  <footer class="site-footer">
    <p>&copy; {{ name }}. All rights reserved.</p>
    <p class="watermark">{{ watermark }}</p>
  </footer>

  <script>
    document.querySelectorAll('a[href^="#"]').forEach(function (link) {
      link.addEventListener('click', function (event) {
        var target = document.querySelector(link.getAttribute('href'));
        if (target) {
          event.preventDefault();
          target.scrollIntoView({ behavior: 'smooth' });
        }
      });
    });
  </script>
</body>
</html>"##;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_context() -> PageContext {
        PageContext {
            name: "Neon Tech".to_string(),
            tagline: "Luxury digital identity".to_string(),
            description: "The platform for discerning brands.".to_string(),
            about_html: "<p>We make things.</p>".to_string(),
            stylesheet: ":root { --primary: #00E5FF; }".to_string(),
            nav: vec![NavItem {
                label: "Home".to_string(),
                href: "#home".to_string(),
            }],
            social: vec![],
        }
    }

    #[test]
    fn renders_complete_document() {
        let engine = TemplateEngine::new();
        let html = engine.render_page(&sample_context()).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>"));
        assert!(html.contains("<title>Neon Tech | Luxury digital identity</title>"));
        assert!(html.contains("<p>We make things.</p>"));
        assert!(html.contains("--primary: #00E5FF"));
    }

    #[test]
    fn always_renders_the_watermark() {
        let engine = TemplateEngine::new();
        let html = engine.render_page(&sample_context()).unwrap();

        assert_eq!(html.matches(WATERMARK).count(), 1);
    }

    #[test]
    fn escapes_user_text() {
        let engine = TemplateEngine::new();
        let mut context = sample_context();
        context.name = "<script>alert('x')</script>".to_string();

        let html = engine.render_page(&context).unwrap();

        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn omits_link_container_when_social_is_empty() {
        let engine = TemplateEngine::new();
        let html = engine.render_page(&sample_context()).unwrap();

        assert!(!html.contains("social-links"));
    }

    #[test]
    fn renders_social_links_when_present() {
        let engine = TemplateEngine::new();
        let mut context = sample_context();
        context.social = vec![SocialLink {
            label: "Instagram".to_string(),
            url: "https://instagram.com/neontech".to_string(),
        }];

        let html = engine.render_page(&context).unwrap();

        assert!(html.contains("social-links"));
        assert!(html.contains(r#"href="https://instagram.com/neontech""#));
        assert!(html.contains(">Instagram</a>"));
    }
}
