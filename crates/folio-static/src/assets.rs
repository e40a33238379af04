//! Asset pipeline for the site stylesheet.

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the main CSS file.
    pub fn generate_css() -> String {
        DEFAULT_CSS.to_string()
    }

    /// Minify CSS using lightningcss.
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
}

// Both palettes ship in one file; `data-theme` on <html> picks one.
const DEFAULT_CSS: &str = r#"/* Folio portfolio theme */

:root,
[data-theme="dark"] {
  --background: #0f1117;
  --foreground: #e6e8ee;
  --muted: #1a1d27;
  --muted-foreground: #9aa1b2;
  --card: #161923;
  --border: #2a2f3d;
  --primary: #7c8cff;
  --primary-foreground: #0f1117;
  --radius: 0.75rem;
  --content-max-width: 1100px;
}

[data-theme="light"] {
  --background: #ffffff;
  --foreground: #1b1e28;
  --muted: #f3f4f8;
  --muted-foreground: #5b6275;
  --card: #ffffff;
  --border: #dfe2ea;
  --primary: #4453e0;
  --primary-foreground: #ffffff;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: var(--font-sans, system-ui, -apple-system, sans-serif);
  background: var(--background);
  color: var(--foreground);
  line-height: 1.6;
}

/* Header */
.site-header {
  position: sticky;
  top: 0;
  z-index: 10;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 2rem;
  background: var(--muted);
  border-bottom: 1px solid var(--border);
}

.site-logo {
  font-weight: 700;
  font-size: 1.25rem;
  color: var(--foreground);
  text-decoration: none;
}

.site-nav {
  display: flex;
  gap: 1rem;
}

.nav-link {
  color: var(--muted-foreground);
  text-decoration: none;
  transition: color 0.15s;
}

.nav-link:hover {
  color: var(--foreground);
}

/* Sections */
main {
  max-width: var(--content-max-width);
  margin: 0 auto;
  padding: 2rem;
}

section {
  padding: 3rem 0;
}

section h2 {
  font-size: 1.75rem;
  font-weight: 600;
  margin-bottom: 1.5rem;
  padding-bottom: 0.5rem;
  border-bottom: 1px solid var(--border);
}

.hero h1 {
  font-size: 3rem;
  font-weight: 700;
}

.tagline {
  color: var(--muted-foreground);
  font-size: 1.25rem;
}

/* Skills */
.skills-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
  gap: 1rem;
}

.skill-item {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 1rem;
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
}

.skill-icon {
  font-size: 1.5rem;
  color: var(--primary);
}

.skill-level {
  font-size: 0.875rem;
  color: var(--muted-foreground);
}

/* Card grid */
.row {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: 1.5rem;
}

.project-card {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  overflow: hidden;
  height: 100%;
}

.project-card:focus-visible {
  outline: 2px solid var(--primary);
  outline-offset: 2px;
}

.project-image {
  position: relative;
  aspect-ratio: 16 / 9;
}

.project-image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.project-overlay {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.5);
  opacity: 0;
  transition: opacity 0.2s;
}

.project-card:hover .project-overlay {
  opacity: 1;
}

.overlay-btn {
  color: #ffffff;
  font-size: 1.5rem;
}

.project-content {
  padding: 1.25rem;
}

.project-content h3 {
  font-size: 1.25rem;
  margin-bottom: 0.5rem;
}

.project-content p {
  color: var(--muted-foreground);
  margin-bottom: 1rem;
}

.btn {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 1rem;
  border-radius: var(--radius);
  text-decoration: none;
}

.btn-primary {
  background: var(--primary);
  color: var(--primary-foreground);
}

/* Certificates */
.certificate-item {
  border: 1px solid var(--border);
  border-radius: var(--radius);
  overflow: hidden;
}

.certificate-thumbnail {
  display: block;
  width: 100%;
  aspect-ratio: 4 / 3;
  object-fit: cover;
  transition: transform 0.2s;
}

.certificate-item a:focus-visible .certificate-thumbnail,
.certificate-thumbnail:hover {
  transform: scale(1.03);
}

/* Responsive */
@media (max-width: 768px) {
  .site-header {
    flex-direction: column;
    gap: 0.5rem;
  }

  .hero h1 {
    font-size: 2.25rem;
  }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_css() {
        let css = AssetPipeline::generate_css();
        assert!(css.contains(":root"));
        assert!(css.contains("[data-theme=\"light\"]"));
        assert!(css.contains(".project-card"));
        assert!(css.contains(".certificate-item"));
    }

    #[test]
    fn minifies_css() {
        let css = r#"
.project-card {
    background-color: blue;
    padding: 10px;
}
        "#;

        let minified = AssetPipeline::minify_css(css).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.contains(".project-card"));
    }

    #[test]
    fn minifies_default_css() {
        let css = AssetPipeline::generate_css();
        let minified = AssetPipeline::minify_css(&css).unwrap();
        assert!(minified.len() < css.len());
    }
}
