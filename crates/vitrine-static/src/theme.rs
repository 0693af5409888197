//! Brand theme and stylesheet assembly.

use vitrine_site::{defaults, Brand, Color};

/// The resolved three-color palette for a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
}

impl Theme {
    /// Resolve a theme from brand colors.
    ///
    /// Missing or malformed color tokens fall back to the default palette
    /// slot, so theming never fails.
    pub fn from_brand(brand: &Brand) -> Self {
        Self {
            primary: resolve(brand.primary_color.as_deref(), defaults::PRIMARY_COLOR),
            secondary: resolve(brand.secondary_color.as_deref(), defaults::SECONDARY_COLOR),
            accent: resolve(brand.accent_color.as_deref(), defaults::ACCENT_COLOR),
        }
    }

    /// Build the full embedded stylesheet for this theme.
    ///
    /// Palette colors surface as design tokens in `:root`, both opaque and
    /// as alpha-suffixed translucent variants; the layout rules below only
    /// reference the tokens.
    pub fn stylesheet(&self) -> String {
        let tokens = format!(
            ":root {{\n  \
             --primary: {primary};\n  \
             --primary-soft: {primary_soft};\n  \
             --primary-faint: {primary_faint};\n  \
             --secondary: {secondary};\n  \
             --secondary-faint: {secondary_faint};\n  \
             --accent: {accent};\n  \
             --accent-glow: {accent_glow};\n\
             }}\n",
            primary = self.primary.hex(),
            primary_soft = self.primary.with_alpha(0x30),
            primary_faint = self.primary.with_alpha(0x15),
            secondary = self.secondary.hex(),
            secondary_faint = self.secondary.with_alpha(0x15),
            accent = self.accent.hex(),
            accent_glow = self.accent.with_alpha(0x40),
        );

        tokens + BASE_CSS
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_brand(&Brand::default())
    }
}

fn resolve(token: Option<&str>, fallback: &str) -> Color {
    token
        .and_then(Color::parse)
        .or_else(|| Color::parse(fallback))
        .unwrap_or(Color::rgb(0, 0, 0))
}

/// Minify a stylesheet using lightningcss.
pub fn minify_css(css: &str) -> Result<String, String> {
    use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

    let stylesheet = StyleSheet::parse(css, ParserOptions::default())
        .map_err(|e| format!("CSS parse error: {}", e))?;

    let minified = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| format!("CSS minify error: {}", e))?;

    Ok(minified.code)
}

const BASE_CSS: &str = r#"
* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
  background: #0A0A0F;
  color: #F2F2F7;
  line-height: 1.6;
}

.site-header {
  position: sticky;
  top: 0;
  z-index: 10;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 2rem;
  background: #0A0A0FE6;
  backdrop-filter: blur(12px);
  border-bottom: 1px solid var(--primary-soft);
}

.brand {
  font-size: 1.125rem;
  font-weight: 700;
  letter-spacing: 0.08em;
  text-transform: uppercase;
  color: var(--primary);
  text-decoration: none;
}

.site-nav a {
  margin-left: 1.5rem;
  font-size: 0.875rem;
  color: #F2F2F7;
  text-decoration: none;
  transition: color 0.15s;
}

.site-nav a:hover {
  color: var(--primary);
}

.hero {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  min-height: 80vh;
  padding: 4rem 2rem;
  text-align: center;
  background:
    radial-gradient(ellipse at top, var(--primary-faint), transparent 60%),
    radial-gradient(ellipse at bottom, var(--secondary-faint), transparent 60%);
}

.hero h1 {
  font-size: clamp(2.5rem, 7vw, 4.5rem);
  font-weight: 800;
  letter-spacing: -0.02em;
  background: linear-gradient(90deg, var(--primary), var(--secondary));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero .tagline {
  margin-top: 1rem;
  font-size: 1.25rem;
  color: var(--primary);
}

.hero .lede {
  margin-top: 1rem;
  max-width: 36rem;
  color: #A1A1AA;
}

.cta {
  display: inline-block;
  margin-top: 2.5rem;
  padding: 0.875rem 2.5rem;
  font-weight: 600;
  color: #0A0A0F;
  background: var(--primary);
  border-radius: 999px;
  text-decoration: none;
  box-shadow: 0 0 30px var(--accent-glow);
  transition: transform 0.15s;
}

.cta:hover {
  transform: translateY(-2px);
}

section {
  max-width: 64rem;
  margin: 0 auto;
  padding: 5rem 2rem;
}

section h2 {
  font-size: 2rem;
  font-weight: 700;
  margin-bottom: 1.5rem;
  color: var(--primary);
}

.about-body {
  max-width: 42rem;
  color: #D4D4D8;
}

.about-body p {
  margin-bottom: 1rem;
}

.about-body a {
  color: var(--secondary);
}

.service-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
  gap: 1.5rem;
}

.service-card {
  padding: 2rem;
  background: var(--secondary-faint);
  border: 1px solid var(--primary-soft);
  border-radius: 1rem;
  transition: box-shadow 0.2s;
}

.service-card:hover {
  box-shadow: 0 0 30px var(--accent-glow);
}

.service-card h3 {
  margin-bottom: 0.5rem;
  color: var(--accent);
}

.service-card p {
  font-size: 0.9375rem;
  color: #A1A1AA;
}

.contact p {
  max-width: 36rem;
  color: #D4D4D8;
}

.social-links {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  margin-top: 2rem;
}

.social-links a {
  padding: 0.5rem 1.25rem;
  font-size: 0.875rem;
  color: var(--primary);
  border: 1px solid var(--primary-soft);
  border-radius: 999px;
  text-decoration: none;
  transition: background 0.15s;
}

.social-links a:hover {
  background: var(--primary-faint);
}

.site-footer {
  padding: 3rem 2rem;
  text-align: center;
  border-top: 1px solid var(--primary-soft);
  color: #A1A1AA;
  font-size: 0.875rem;
}

.site-footer .watermark {
  margin-top: 0.75rem;
  font-size: 0.75rem;
  letter-spacing: 0.04em;
  color: var(--primary);
}

@media (max-width: 720px) {
  .site-header {
    flex-direction: column;
    gap: 0.75rem;
  }

  .site-nav a {
    margin: 0 0.75rem;
  }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_contains_bare_and_alpha_suffixed_colors() {
        let brand = Brand {
            primary_color: Some("#00E5FF".to_string()),
            ..Brand::default()
        };

        let css = Theme::from_brand(&brand).stylesheet();

        assert!(css.contains("#00E5FF"));
        assert!(css.contains("#00E5FF30"));
        assert!(css.contains("#00E5FF15"));
    }

    #[test]
    fn malformed_colors_fall_back_to_default_palette() {
        let brand = Brand {
            primary_color: Some("definitely-not-a-color".to_string()),
            ..Brand::default()
        };

        let theme = Theme::from_brand(&brand);

        assert_eq!(theme.primary.hex(), defaults::PRIMARY_COLOR);
    }

    #[test]
    fn named_colors_normalize_to_hex() {
        let brand = Brand {
            accent_color: Some("hotpink".to_string()),
            ..Brand::default()
        };

        let css = Theme::from_brand(&brand).stylesheet();

        assert!(css.contains("#FF69B4"));
        assert!(css.contains("#FF69B440"));
    }

    #[test]
    fn minifies_css() {
        let css = r#"
.button {
    background-color: blue;
    padding: 10px;
}
        "#;

        let minified = minify_css(css).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.contains(".button"));
    }

    #[test]
    fn stylesheet_only_styles_through_tokens() {
        let css = Theme::default().stylesheet();

        assert!(css.contains(":root"));
        assert!(css.contains("var(--primary)"));
        assert!(css.contains("var(--accent-glow)"));
    }
}
