//! Built-in content used when a resource cannot be loaded.
//!
//! These lists intentionally stay as they were first published, even where
//! they have drifted from the JSON in `data/`.

use crate::models::{Certificate, Project, Skill};

/// Projects rendered when `data/projects.json` is unavailable.
pub fn fallback_projects() -> Vec<Project> {
    vec![
        Project {
            title: "HTML IN MY STYLE".to_string(),
            image: "./html.png".to_string(),
            description: "A personal portfolio website built with HTML, CSS, and JavaScript, showcasing my skills and projects.".to_string(),
            live: "https://techinmystyle.com/html%20in%20my%20style/".to_string(),
        },
        Project {
            title: "CSS IN MY STYLE".to_string(),
            image: "./css.png".to_string(),
            description: "A responsive and visually appealing portfolio website using advanced CSS techniques and animations.".to_string(),
            live: "https://techinmystyle.com/css%20in%20my%20style/".to_string(),
        },
        Project {
            title: "JavaScript IN MY STYLE".to_string(),
            image: "./js.png".to_string(),
            description: "A dynamic portfolio website with interactive features and animations using JavaScript and DOM manipulation.".to_string(),
            live: "https://techinmystyle.com/javascript%20in%20my%20style%20-%20basic/".to_string(),
        },
    ]
}

/// Certificates rendered when `data/certificates.json` is unavailable.
pub fn fallback_certificates() -> Vec<Certificate> {
    vec![
        Certificate {
            title: "HTML IN MY STYLE".to_string(),
            thumbnail: "./html.png".to_string(),
            url: "https://freecodecamp.org/certification/sailesh/javascript-algorithms-and-data-structures".to_string(),
        },
        Certificate {
            title: "Responsive Web Design".to_string(),
            thumbnail: "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?auto=compress&cs=tinysrgb&w=600".to_string(),
            url: "https://freecodecamp.org/certification/sailesh/responsive-web-design".to_string(),
        },
        Certificate {
            title: "Node.js Fundamentals".to_string(),
            thumbnail: "https://images.pexels.com/photos/11035471/pexels-photo-11035471.jpeg?auto=compress&cs=tinysrgb&w=600".to_string(),
            url: "https://coursera.org/verify/nodejs-fundamentals-sailesh".to_string(),
        },
        Certificate {
            title: "MongoDB Basics".to_string(),
            thumbnail: "https://images.pexels.com/photos/546819/pexels-photo-546819.jpeg?auto=compress&cs=tinysrgb&w=600".to_string(),
            url: "https://university.mongodb.com/verify/mongodb-basics-sailesh".to_string(),
        },
    ]
}

/// Skills shown when the site config does not list any.
pub fn default_skills() -> Vec<Skill> {
    vec![
        Skill::new("HTML", "Advanced", "bi bi-filetype-html"),
        Skill::new("CSS", "Advanced", "bi bi-filetype-css"),
        Skill::new("JavaScript", "Intermediate", "bi bi-filetype-js"),
        Skill::new("Node.js", "Intermediate", "bi bi-server"),
        Skill::new("Express.js", "Intermediate", "bi bi-lightning-fill"),
        Skill::new("MongoDB", "Beginner", "bi bi-database"),
        Skill::new("React", "Beginner", "bi bi-circle"),
        Skill::new("Git", "Intermediate", "bi bi-git"),
    ]
}
