use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

use crate::view_state::Detail;

static PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> = LazyLock::new(Portfolio::load);

/// Filter value that matches every project.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Embed)]
#[folder = "content"]
struct ContentAssets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    Missing(String),
    #[error("couldn't parse {file}: {detail}")]
    Malformed { file: String, detail: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub icon: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub year: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub headline: String,
    pub tagline: String,
    pub roles: String,
    pub summary: String,
    pub email: String,
    pub image: String,
    pub socials: Vec<SocialLink>,
    pub stats: Vec<Stat>,
    pub timeline: Vec<Milestone>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub image: String,
    pub github: String,
    pub demo: Option<String>,
    pub featured: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: String,
    pub proficiency: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub company: String,
    pub role: String,
    pub period: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub id: u32,
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub badge: String,
    pub verify_url: Option<String>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub icon: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CertificationsFile {
    certifications: Vec<Certification>,
    achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub years: String,
    pub grade: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resume {
    pub summary: String,
    pub download: String,
    pub education: Vec<Education>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub company: String,
    pub image: String,
    pub rating: u8,
    pub text: String,
}

/// Everything the page renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub experience: Vec<Role>,
    pub certifications: Vec<Certification>,
    pub achievements: Vec<Achievement>,
    pub resume: Resume,
    pub testimonials: Vec<Testimonial>,
}

fn load_file<T: DeserializeOwned>(name: &str) -> Result<T, ContentError> {
    let file = ContentAssets::get(name).ok_or_else(|| ContentError::Missing(name.to_string()))?;
    serde_json::from_slice(&file.data).map_err(|e| ContentError::Malformed {
        file: name.to_string(),
        detail: e.to_string(),
    })
}

/// Parsed site content, loaded once per process.
pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    PORTFOLIO.as_ref().map_err(Clone::clone)
}

impl Portfolio {
    fn load() -> Result<Self, ContentError> {
        let CertificationsFile {
            certifications,
            achievements,
        } = load_file("certifications.json")?;
        Ok(Self {
            profile: load_file("profile.json")?,
            projects: load_file("projects.json")?,
            skills: load_file("skills.json")?,
            experience: load_file("experience.json")?,
            certifications,
            achievements,
            resume: load_file("resume.json")?,
            testimonials: load_file("testimonials.json")?,
        })
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn certification(&self, id: u32) -> Option<&Certification> {
        self.certifications.iter().find(|c| c.id == id)
    }

    /// `"all"` followed by each project category in first-seen order.
    pub fn project_categories(&self) -> Vec<&str> {
        categories(self.projects.iter().map(|p| p.category.as_str()))
    }

    pub fn projects_in<'a>(&'a self, filter: &'a str) -> impl Iterator<Item = &'a Project> + 'a {
        self.projects
            .iter()
            .filter(move |p| filter == ALL_CATEGORIES || p.category == filter)
    }

    /// `"all"` followed by each skill category in first-seen order.
    pub fn skill_categories(&self) -> Vec<&str> {
        categories(self.skills.iter().map(|s| s.category.as_str()))
    }

    pub fn skills_in<'a>(&'a self, filter: &'a str) -> impl Iterator<Item = &'a Skill> + 'a {
        self.skills
            .iter()
            .filter(move |s| filter == ALL_CATEGORIES || s.category == filter)
    }

    /// Whether a detail modal for `detail` has anything to show.
    pub fn has_detail(&self, detail: Detail) -> bool {
        match detail {
            Detail::Project(id) => self.project(id).is_some(),
            Detail::Certification(id) => self.certification(id).is_some(),
        }
    }

    /// Skills grouped by category, categories in first-seen order.
    pub fn skills_by_category(&self) -> Vec<(&str, Vec<&Skill>)> {
        let mut groups: Vec<(&str, Vec<&Skill>)> = Vec::new();
        for skill in &self.skills {
            match groups.iter_mut().find(|(c, _)| *c == skill.category) {
                Some((_, skills)) => skills.push(skill),
                None => groups.push((skill.category.as_str(), vec![skill])),
            }
        }
        groups
    }
}

fn categories<'a>(names: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut categories = vec![ALL_CATEGORIES];
    for name in names {
        if !categories.contains(&name) {
            categories.push(name);
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_parses() {
        let portfolio = portfolio().expect("embedded content should parse");
        assert!(!portfolio.profile.name.is_empty());
        assert!(!portfolio.projects.is_empty());
        assert!(!portfolio.testimonials.is_empty());
        assert!(portfolio
            .testimonials
            .iter()
            .all(|t| (1..=5).contains(&t.rating)));
        assert!(portfolio.skills.iter().all(|s| s.proficiency <= 100));
    }

    #[test]
    fn test_ids_are_unique() {
        let portfolio = portfolio().unwrap();
        let mut ids = portfolio.projects.iter().map(|p| p.id).collect::<Vec<_>>();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), portfolio.projects.len());

        let mut ids = portfolio
            .certifications
            .iter()
            .map(|c| c.id)
            .collect::<Vec<_>>();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), portfolio.certifications.len());
    }

    #[test]
    fn test_project_lookup() {
        let portfolio = portfolio().unwrap();
        let first = &portfolio.projects[0];
        assert_eq!(portfolio.project(first.id).map(|p| &p.title), Some(&first.title));
        assert!(portfolio.project(u32::MAX).is_none());
        assert!(portfolio.certification(u32::MAX).is_none());
    }

    #[test]
    fn test_project_categories_and_filter() {
        let portfolio = portfolio().unwrap();
        let categories = portfolio.project_categories();
        assert_eq!(categories[0], ALL_CATEGORIES);
        assert_eq!(categories, vec!["all", "Full Stack", "Machine Learning"]);

        assert_eq!(
            portfolio.projects_in(ALL_CATEGORIES).count(),
            portfolio.projects.len()
        );
        assert!(portfolio
            .projects_in("Machine Learning")
            .all(|p| p.category == "Machine Learning"));
        assert_eq!(portfolio.projects_in("Embedded").count(), 0);
    }

    #[test]
    fn test_skill_categories_and_filter() {
        let portfolio = portfolio().unwrap();
        assert_eq!(
            portfolio.skill_categories(),
            vec!["all", "Frontend", "Backend", "Language", "DevOps", "Database"]
        );

        assert_eq!(
            portfolio.skills_in(ALL_CATEGORIES).count(),
            portfolio.skills.len()
        );
        let backend = portfolio.skills_in("Backend").collect::<Vec<_>>();
        assert!(!backend.is_empty());
        assert!(backend.iter().all(|s| s.category == "Backend"));
        assert_eq!(portfolio.skills_in("Tools").count(), 0);
    }

    #[test]
    fn test_unknown_detail_has_nothing_to_show() {
        let portfolio = portfolio().unwrap();
        let project = portfolio.projects[0].id;
        let cert = portfolio.certifications[0].id;
        assert!(portfolio.has_detail(Detail::Project(project)));
        assert!(portfolio.has_detail(Detail::Certification(cert)));
        assert!(!portfolio.has_detail(Detail::Project(u32::MAX)));
        assert!(!portfolio.has_detail(Detail::Certification(u32::MAX)));
    }

    #[test]
    fn test_skills_grouped_in_first_seen_order() {
        let portfolio = portfolio().unwrap();
        let groups = portfolio.skills_by_category();
        let names = groups.iter().map(|(c, _)| *c).collect::<Vec<_>>();
        assert_eq!(
            names,
            vec!["Frontend", "Backend", "Language", "DevOps", "Database"]
        );
        let total = groups.iter().map(|(_, s)| s.len()).sum::<usize>();
        assert_eq!(total, portfolio.skills.len());
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = load_file::<Vec<Skill>>("nope.json").unwrap_err();
        assert_eq!(err, ContentError::Missing("nope.json".to_string()));
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        let err = load_file::<Vec<Skill>>("profile.json").unwrap_err();
        assert!(matches!(err, ContentError::Malformed { file, .. } if file == "profile.json"));
    }
}
