use crate::models::NewProject;

/// The showcase entries every fresh catalog starts with, in display order.
pub fn seed_projects() -> Vec<NewProject> {
    vec![
        NewProject::new(
            "Aura Component Library",
            "A comprehensive UI kit for modern web applications.",
            "https://images.unsplash.com/photo-1550745165-9bc0b252726f?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        ),
        NewProject::new(
            "Skidive Cloud Dashboard",
            "Enterprise analytics and monitoring platform.",
            "https://images.unsplash.com/photo-1558655146-d09347e92766?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        ),
        NewProject::new(
            "Project Nexus",
            "Decentralized task management system.",
            "https://images.unsplash.com/photo-1518770660439-4636190af475?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        ),
    ]
}
