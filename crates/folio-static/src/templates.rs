//! Template engine for rendering the portfolio page and its cards.

use minijinja::{context, Environment};
use serde::Serialize;

use folio_content::ResourceKind;

/// Context for rendering the page template.
#[derive(Debug, Clone, Serialize)]
pub struct Context {
    /// Site title
    pub title: String,
    /// Name shown in the hero section
    pub owner: String,
    /// One-line introduction
    pub tagline: String,
    /// Contact address, if any
    pub email: Option<String>,
    /// Base URL
    pub base_url: String,
    /// `dark` or `light`
    pub theme: String,
    /// Paths to CSS stylesheets to include
    pub styles: Vec<String>,
    /// Rendered skill items
    pub skills_html: String,
    /// Rendered project cards
    pub projects_html: String,
    /// Rendered certificate cards
    pub certificates_html: String,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("index.html".to_string(), INDEX_TEMPLATE.to_string())
            .expect("Failed to add index template");

        env.add_template_owned("projects.html".to_string(), PROJECTS_TEMPLATE.to_string())
            .expect("Failed to add projects template");

        env.add_template_owned(
            "certificates.html".to_string(),
            CERTIFICATES_TEMPLATE.to_string(),
        )
        .expect("Failed to add certificates template");

        env.add_template_owned("skills.html".to_string(), SKILLS_TEMPLATE.to_string())
            .expect("Failed to add skills template");

        Self { env }
    }

    /// Render one card per item for a resource kind, in list order.
    pub fn render_cards<T: Serialize>(
        &self,
        kind: ResourceKind,
        items: &[T],
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(cards_template(kind))?;
        tmpl.render(context! { items => items })
    }

    /// Render the skill list.
    pub fn render_skills<T: Serialize>(&self, items: &[T]) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("skills.html")?;
        tmpl.render(context! { items => items })
    }

    /// Render the full page.
    pub fn render_page(&self, context: &Context) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("index.html")?;
        tmpl.render(context)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn cards_template(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Projects => "projects.html",
        ResourceKind::Certificates => "certificates.html",
    }
}

const INDEX_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en" data-theme="{{ theme }}">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }}</title>
  {% for style in styles %}<link rel="stylesheet" href="{{ style }}">
  {% endfor %}<link rel="stylesheet" href="{{ base_url }}assets/main.css">
</head>
<body>
  <header class="site-header">
    <a href="{{ base_url }}" class="site-logo">{{ owner }}</a>
    <nav class="site-nav">
      <a class="nav-link" href="#skills">Skills</a>
      <a class="nav-link" href="#projects">Projects</a>
      <a class="nav-link" href="#certificates">Certificates</a>
      {% if email %}<a class="nav-link" href="#contact">Contact</a>{% endif %}
    </nav>
  </header>
  <main>
    <section id="home" class="hero">
      <h1>{{ owner }}</h1>
      <p class="tagline">{{ tagline }}</p>
    </section>
    <section id="skills">
      <h2>Skills</h2>
      <div id="webSkills" class="skills-grid">{{ skills_html | safe }}</div>
    </section>
    <section id="projects">
      <h2>Projects</h2>
      <div id="projectsContainer" class="row">{{ projects_html | safe }}</div>
    </section>
    <section id="certificates">
      <h2>Certificates</h2>
      <div id="certificatesContainer" class="row">{{ certificates_html | safe }}</div>
    </section>
    {% if email %}
    <section id="contact">
      <h2>Contact</h2>
      <a class="btn btn-primary" href="mailto:{{ email }}">{{ email }}</a>
    </section>
    {% endif %}
  </main>
</body>
</html>"##;

const PROJECTS_TEMPLATE: &str = r##"{% for project in items %}
<div class="col">
  <div class="project-card" tabindex="0">
    <div class="project-image">
      <img src="{{ project.image }}" alt="{{ project.title }}" loading="lazy">
      <div class="project-overlay">
        <a href="{{ project.live }}" target="_blank" rel="noopener noreferrer" class="overlay-btn" aria-label="View live demo for {{ project.title }}">
          <i class="bi bi-box-arrow-up-right"></i>
        </a>
      </div>
    </div>
    <div class="project-content">
      <h3>{{ project.title }}</h3>
      <p>{{ project.description }}</p>
      <div class="project-links">
        <a href="{{ project.live }}" target="_blank" rel="noopener noreferrer" class="btn btn-primary">
          <i class="bi bi-box-arrow-up-right"></i>Live Demo
        </a>
      </div>
    </div>
  </div>
</div>
{% endfor %}"##;

const CERTIFICATES_TEMPLATE: &str = r##"{% for cert in items %}
<div class="col">
  <div class="certificate-item">
    <a href="{{ cert.url }}" target="_blank" rel="noopener noreferrer" aria-label="View certificate: {{ cert.title }}">
      <img src="{{ cert.thumbnail }}" alt="{{ cert.title }}" class="certificate-thumbnail" loading="lazy">
    </a>
  </div>
</div>
{% endfor %}"##;

const SKILLS_TEMPLATE: &str = r##"{% for skill in items %}
<div class="skill-item">
  <div class="skill-icon"><i class="{{ skill.icon }}"></i></div>
  <div class="skill-info">
    <h4>{{ skill.name }}</h4>
    <div class="skill-level">{{ skill.level }}</div>
  </div>
</div>
{% endfor %}"##;

#[cfg(test)]
mod tests {
    use super::*;
    use folio_content::{fallback_certificates, Project, Skill};

    fn project(title: &str) -> Project {
        Project {
            title: title.to_string(),
            image: "shot.png".to_string(),
            description: format!("About {}", title),
            live: "https://example.com".to_string(),
        }
    }

    fn context() -> Context {
        Context {
            title: "Portfolio".to_string(),
            owner: "Ada".to_string(),
            tagline: "Builder of things".to_string(),
            email: None,
            base_url: "/".to_string(),
            theme: "dark".to_string(),
            styles: vec![],
            skills_html: String::new(),
            projects_html: "<p>projects here</p>".to_string(),
            certificates_html: String::new(),
        }
    }

    #[test]
    fn renders_one_card_per_project_in_order() {
        let engine = TemplateEngine::new();
        let items = vec![project("Second"), project("First"), project("Third")];

        let html = engine.render_cards(ResourceKind::Projects, &items).unwrap();

        assert_eq!(html.matches(r#"class="project-card""#).count(), 3);
        let second = html.find("<h3>Second</h3>").unwrap();
        let first = html.find("<h3>First</h3>").unwrap();
        let third = html.find("<h3>Third</h3>").unwrap();
        assert!(second < first && first < third);
    }

    #[test]
    fn renders_certificate_cards() {
        let engine = TemplateEngine::new();

        let html = engine
            .render_cards(ResourceKind::Certificates, &fallback_certificates())
            .unwrap();

        assert_eq!(html.matches(r#"class="certificate-item""#).count(), 4);
        assert!(html.contains("View certificate: MongoDB Basics"));
    }

    #[test]
    fn escapes_card_fields() {
        let engine = TemplateEngine::new();
        let items = vec![project("<script>alert(1)</script>")];

        let html = engine.render_cards(ResourceKind::Projects, &items).unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn empty_list_renders_nothing() {
        let engine = TemplateEngine::new();

        let html = engine
            .render_cards::<Project>(ResourceKind::Projects, &[])
            .unwrap();

        assert!(html.trim().is_empty());
    }

    #[test]
    fn renders_skills() {
        let engine = TemplateEngine::new();
        let skills = vec![Skill::new("Rust", "Advanced", "bi bi-gear")];

        let html = engine.render_skills(&skills).unwrap();

        assert!(html.contains("<h4>Rust</h4>"));
        assert!(html.contains("Advanced"));
    }

    #[test]
    fn renders_page_with_containers() {
        let engine = TemplateEngine::new();

        let html = engine.render_page(&context()).unwrap();

        assert!(html.contains("<title>Portfolio</title>"));
        assert!(html.contains(r#"data-theme="dark""#));
        assert!(html.contains(r#"<div id="projectsContainer" class="row"><p>projects here</p></div>"#));
        assert!(html.contains(r#"id="certificatesContainer""#));
        assert!(!html.contains(r#"id="contact""#));
    }

    #[test]
    fn renders_contact_when_email_set() {
        let engine = TemplateEngine::new();
        let mut context = context();
        context.email = Some("ada@example.com".to_string());

        let html = engine.render_page(&context).unwrap();

        assert!(html.contains(r#"id="contact""#));
        assert!(html.contains("ada@example.com"));
    }
}
