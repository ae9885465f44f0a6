//! Static reference data: the selectable skill catalogue and the example
//! matches shown when the model cannot be used.

use axum::Json;
use serde::Serialize;

use crate::matches::models::SkillMatch;

pub const AVAILABLE_SKILLS: &[&str] = &[
    "JavaScript", "Python", "Java", "C++", "C#", "Ruby", "Go", "Swift", "Kotlin", "PHP",
    "HTML", "CSS", "React", "Angular", "Vue.js", "Node.js", "Django", "Flask", "Spring Boot",
    "SQL", "NoSQL", "MongoDB", "PostgreSQL", "MySQL", "Firebase", "AWS", "Azure", "Google Cloud",
    "Docker", "Kubernetes", "Terraform", "Git", "Agile", "Scrum", "Data Analysis", "Machine Learning",
    "Deep Learning", "Natural Language Processing", "Computer Vision", "Data Structures", "Algorithms",
    "System Design", "Cybersecurity", "Penetration Testing", "UI Design", "UX Design", "Figma",
    "Adobe XD", "Photoshop", "Illustrator", "Video Editing", "Content Writing", "SEO", "Digital Marketing",
    "Project Management", "Product Management", "Public Speaking", "Negotiation", "Leadership",
];

/// General examples returned by the matches endpoint as a fallback.
pub fn example_matches() -> Vec<SkillMatch> {
    vec![
        SkillMatch {
            user_id: "user_jane_doe".to_string(),
            name: "Jane Doe".to_string(),
            avatar_url: "https://placehold.co/80x80.png".to_string(),
            common_skills_to_teach: vec!["Data Structures".to_string(), "System Design".to_string()],
            common_skills_to_learn: vec!["Python".to_string()],
            reasoning: "Jane is looking to learn Python, which you can teach. You want to learn \
                Data Structures and System Design, which Jane is proficient in."
                .to_string(),
        },
        SkillMatch {
            user_id: "user_john_smith".to_string(),
            name: "John Smith".to_string(),
            avatar_url: "https://placehold.co/80x80.png".to_string(),
            common_skills_to_teach: vec!["Advanced SQL".to_string()],
            common_skills_to_learn: vec!["React".to_string(), "JavaScript".to_string()],
            reasoning: "John can help you with Advanced SQL. You can help John improve his \
                React and JavaScript skills."
                .to_string(),
        },
    ]
}

#[derive(Debug, Serialize)]
pub struct SkillCatalogResponse {
    pub skills: &'static [&'static str],
}

/// GET /api/v1/skills
pub async fn handle_list_skills() -> Json<SkillCatalogResponse> {
    Json(SkillCatalogResponse {
        skills: AVAILABLE_SKILLS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_no_duplicates() {
        let unique: HashSet<_> = AVAILABLE_SKILLS.iter().collect();
        assert_eq!(unique.len(), AVAILABLE_SKILLS.len());
    }

    #[test]
    fn test_examples_are_complete_records() {
        for example in example_matches() {
            assert!(!example.name.is_empty());
            assert!(!example.reasoning.is_empty());
            assert!(!example.common_skills_to_teach.is_empty());
        }
    }
}
