mod inline;
pub mod roadmap;

use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

pub use inline::inline_resume;

/// Name of the embedded document under `data/`.
pub const RESUME_DOCUMENT: &str = "resume.json";

static RESUME: LazyLock<ResumeData> = LazyLock::new(load);

#[derive(Embed)]
#[folder = "data"]
pub struct DataAssets;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobExperience {
    pub id: String,
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: Vec<String>,
    pub skills: Vec<String>,
    pub location: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub id: String,
    pub name: String,
    /// Raw tag as written in the data. See [`Skill::category`].
    pub category: String,
    pub level: Option<String>,
}

impl Skill {
    pub fn category(&self) -> Option<SkillCategory> {
        SkillCategory::from_tag(&self.category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudSecurityStep {
    pub id: String,
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    pub completed: bool,
    /// Percent complete, clamped to 0..=100.
    pub progress: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeData {
    pub name: String,
    pub title: String,
    pub location: String,
    pub summary: String,
    pub contact: ContactInfo,
    pub experience: Vec<JobExperience>,
    pub skills: Vec<Skill>,
    pub cloud_roadmap: Vec<CloudSecurityStep>,
}

/// The job with `id`, if any.
pub fn find_job<'a>(jobs: &'a [JobExperience], id: &str) -> Option<&'a JobExperience> {
    jobs.iter().find(|j| j.id == id)
}

#[derive(Error, Debug)]
pub enum ResumeError {
    #[error("embedded document {0} not found")]
    NotFound(&'static str),
    #[error("resume document isn't valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
    #[error("couldn't parse resume document: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Interpersonal,
    Management,
    Analytical,
    Productivity,
    Operations,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 5] = [
        Self::Interpersonal,
        Self::Management,
        Self::Analytical,
        Self::Productivity,
        Self::Operations,
    ];

    /// Bucket used to present tags we don't recognize.
    pub const DEFAULT: SkillCategory = Self::Management;

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "interpersonal" => Some(Self::Interpersonal),
            "management" => Some(Self::Management),
            "analytical" => Some(Self::Analytical),
            "productivity" => Some(Self::Productivity),
            "operations" => Some(Self::Operations),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::Interpersonal => "interpersonal",
            Self::Management => "management",
            Self::Analytical => "analytical",
            Self::Productivity => "productivity",
            Self::Operations => "operations",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Interpersonal => "Interpersonal Skills",
            Self::Management => "Management & Leadership",
            Self::Analytical => "Analytical Skills",
            Self::Productivity => "Productivity & Organization",
            Self::Operations => "Operations & Logistics",
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            Self::Interpersonal => "Interpersonal",
            Self::Management => "Management",
            Self::Analytical => "Analytical",
            Self::Productivity => "Productivity",
            Self::Operations => "Operations",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Interpersonal => "🤝",
            Self::Management => "👥",
            Self::Analytical => "🧠",
            Self::Productivity => "⚡",
            Self::Operations => "⚙️",
        }
    }

    /// Tailwind color family for pills, dots and borders.
    pub fn color(self) -> &'static str {
        match self {
            Self::Interpersonal => "green",
            Self::Management => "blue",
            Self::Analytical => "purple",
            Self::Productivity => "orange",
            Self::Operations => "teal",
        }
    }
}

/// Heading, icon and color for a raw category tag. Unknown tags keep
/// their own bucket but borrow the default category's colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub title: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

impl CategoryStyle {
    pub fn for_tag(tag: &str) -> Self {
        match SkillCategory::from_tag(tag) {
            Some(c) => Self {
                title: c.display_name(),
                icon: c.icon(),
                color: c.color(),
            },
            None => Self {
                title: "Other Skills",
                icon: "🎯",
                color: SkillCategory::DEFAULT.color(),
            },
        }
    }
}

/// Skills sharing one category tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGroup<'a> {
    pub tag: &'a str,
    pub skills: Vec<&'a Skill>,
}

/// Buckets skills by tag, in the order each tag first appears.
pub fn group_by_category(skills: &[Skill]) -> Vec<SkillGroup<'_>> {
    let mut groups: Vec<SkillGroup<'_>> = Vec::new();
    for skill in skills {
        match groups.iter_mut().find(|g| g.tag == skill.category) {
            Some(group) => group.skills.push(skill),
            None => groups.push(SkillGroup {
                tag: &skill.category,
                skills: vec![skill],
            }),
        }
    }
    groups
}

/// `"Customer Service"` -> `"customer-service"`.
pub fn skill_id(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

// External document shape. Every field is optional so a sparse document
// still renders; unknown sections (certifications, education, ...) are
// accepted and ignored.
#[derive(Deserialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
struct ResumeDocument {
    #[serde(deserialize_with = "null_as_default")]
    name: String,
    #[serde(deserialize_with = "null_as_default")]
    title: String,
    #[serde(deserialize_with = "null_as_default")]
    location: String,
    #[serde(deserialize_with = "null_as_default")]
    email: String,
    #[serde(deserialize_with = "null_as_default")]
    phone: String,
    #[serde(deserialize_with = "null_as_default")]
    summary: String,
    #[serde(deserialize_with = "null_as_default")]
    experience: Vec<DocumentJob>,
    #[serde(deserialize_with = "null_as_default")]
    skills: Vec<DocumentSkill>,
    #[serde(deserialize_with = "null_as_default")]
    cloud_roadmap: Vec<DocumentStep>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct DocumentJob {
    #[serde(deserialize_with = "null_as_default")]
    id: String,
    #[serde(deserialize_with = "null_as_default")]
    title: String,
    #[serde(deserialize_with = "null_as_default")]
    company: String,
    location: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    duration: String,
    #[serde(deserialize_with = "null_as_default")]
    description: Vec<String>,
    summary: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    skills: Vec<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct DocumentSkill {
    #[serde(deserialize_with = "null_as_default")]
    name: String,
    #[serde(deserialize_with = "null_as_default")]
    category: String,
    level: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct DocumentStep {
    #[serde(deserialize_with = "null_as_default")]
    id: String,
    #[serde(deserialize_with = "null_as_default")]
    title: String,
    #[serde(deserialize_with = "null_as_default")]
    description: String,
    #[serde(deserialize_with = "null_as_default")]
    skills: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    completed: bool,
    progress: Option<f64>,
}

// `null` reads like a missing field rather than rejecting the document.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<ResumeDocument> for ResumeData {
    fn from(doc: ResumeDocument) -> Self {
        ResumeData {
            contact: ContactInfo {
                email: doc.email,
                phone: doc.phone,
                location: doc.location.clone(),
            },
            name: doc.name,
            title: doc.title,
            location: doc.location,
            summary: doc.summary,
            experience: doc
                .experience
                .into_iter()
                .map(|j| JobExperience {
                    id: j.id,
                    title: j.title,
                    company: j.company,
                    duration: j.duration,
                    description: j.description,
                    skills: j.skills,
                    location: j.location,
                    summary: j.summary,
                })
                .collect(),
            skills: doc
                .skills
                .into_iter()
                .map(|s| Skill {
                    id: skill_id(&s.name),
                    name: s.name,
                    category: s.category,
                    level: s.level,
                })
                .collect(),
            cloud_roadmap: doc
                .cloud_roadmap
                .into_iter()
                .map(|s| CloudSecurityStep {
                    id: s.id,
                    title: s.title,
                    description: s.description,
                    skills: s.skills,
                    completed: s.completed,
                    progress: s.progress.map(|p| p.clamp(0.0, 100.0).round() as u8),
                })
                .collect(),
        }
    }
}

pub fn from_json(content: &str) -> Result<ResumeData, ResumeError> {
    let doc: ResumeDocument = serde_json::from_str(content)?;
    Ok(doc.into())
}

pub fn from_embedded(name: &'static str) -> Result<ResumeData, ResumeError> {
    let file = DataAssets::get(name).ok_or(ResumeError::NotFound(name))?;
    let content = String::from_utf8(file.data.into_owned())?;
    from_json(&content)
}

/// The embedded document when it parses, the inline literal otherwise.
pub fn load() -> ResumeData {
    match from_embedded(RESUME_DOCUMENT) {
        Ok(data) => data,
        Err(ResumeError::NotFound(_)) => inline_resume(),
        Err(e) => {
            log::warn!("{e}; falling back to built-in resume");
            inline_resume()
        }
    }
}

/// Process-wide resume, loaded on first access.
pub fn resume() -> &'static ResumeData {
    &RESUME
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_id() {
        assert_eq!(skill_id("Customer Service"), "customer-service");
        assert_eq!(skill_id("CI/CD  Security"), "ci/cd-security");
        assert_eq!(skill_id("IAM"), "iam");
    }

    #[test]
    fn test_grouping_ten_skills_five_categories() {
        let data = inline_resume();
        assert_eq!(data.skills.len(), 10);
        let groups = group_by_category(&data.skills);
        assert_eq!(groups.len(), 5);
        for g in &groups {
            assert!(g.skills.iter().all(|s| s.category == g.tag));
        }
        assert_eq!(groups.iter().map(|g| g.skills.len()).sum::<usize>(), 10);
        // first-seen order
        let tags = groups.iter().map(|g| g.tag).collect::<Vec<_>>();
        assert_eq!(
            tags,
            vec![
                "interpersonal",
                "operations",
                "management",
                "productivity",
                "analytical"
            ]
        );
    }

    #[test]
    fn test_grouping_keeps_unknown_tags() {
        let skills = vec![
            Skill {
                id: "a".into(),
                name: "A".into(),
                category: "wizardry".into(),
                level: None,
            },
            Skill {
                id: "b".into(),
                name: "B".into(),
                category: "analytical".into(),
                level: None,
            },
            Skill {
                id: "c".into(),
                name: "C".into(),
                category: "wizardry".into(),
                level: None,
            },
        ];
        let groups = group_by_category(&skills);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].tag, "wizardry");
        assert_eq!(groups[0].skills.len(), 2);
        assert_eq!(skills[0].category(), None);
        let style = CategoryStyle::for_tag("wizardry");
        assert_eq!(style.color, SkillCategory::DEFAULT.color());
        assert_eq!(style.title, "Other Skills");
        assert_eq!(
            CategoryStyle::for_tag("analytical").title,
            "Analytical Skills"
        );
        assert!(group_by_category(&[]).is_empty());
    }

    #[test]
    fn test_category_tags_round_trip() {
        for c in SkillCategory::ALL {
            assert_eq!(SkillCategory::from_tag(c.tag()), Some(c));
        }
        assert_eq!(SkillCategory::from_tag("Management"), None);
    }

    #[test]
    fn test_from_json_maps_fields() {
        let json = r#"{
            "name": "Jane Doe",
            "title": "Engineer",
            "location": "Detroit, MI",
            "email": "jane@example.com",
            "phone": "+1 555 0100",
            "summary": "Hi",
            "experience": [{
                "id": "job-1",
                "title": "Lead",
                "company": "Acme",
                "location": "Remote",
                "duration": "2020 – Present",
                "description": ["did things"],
                "summary": "short",
                "skills": ["Leading"]
            }],
            "skills": [{ "name": "Time Management", "category": "productivity", "level": "Expert" }],
            "cloudRoadmap": [{
                "id": "aws-fundamentals",
                "title": "AWS",
                "description": "basics",
                "skills": ["EC2"],
                "completed": true,
                "progress": 140
            }],
            "certifications": [{ "name": "Cert" }],
            "languages": [{ "name": "English", "level": "Native" }],
            "interests": ["Hiking"]
        }"#;
        let data = from_json(json).expect("document should parse");
        assert_eq!(data.name, "Jane Doe");
        assert_eq!(
            data.contact,
            ContactInfo {
                email: "jane@example.com".into(),
                phone: "+1 555 0100".into(),
                location: "Detroit, MI".into(),
            }
        );
        let job = find_job(&data.experience, "job-1").expect("job should exist");
        assert_eq!(job.location.as_deref(), Some("Remote"));
        assert_eq!(job.summary.as_deref(), Some("short"));
        assert_eq!(data.skills[0].id, "time-management");
        assert_eq!(data.skills[0].level.as_deref(), Some("Expert"));
        assert_eq!(
            data.skills[0].category(),
            Some(SkillCategory::Productivity)
        );
        assert!(data.cloud_roadmap[0].completed);
        assert_eq!(data.cloud_roadmap[0].progress, Some(100));
    }

    #[test]
    fn test_from_json_is_lenient_about_missing_fields() {
        let data = from_json(r#"{ "name": "Only Name", "skills": [{ "name": "Solo" }] }"#)
            .expect("sparse document should parse");
        assert_eq!(data.name, "Only Name");
        assert_eq!(data.title, "");
        assert!(data.experience.is_empty());
        assert!(data.cloud_roadmap.is_empty());
        assert_eq!(data.skills[0].category, "");
        assert_eq!(data.skills[0].id, "solo");
    }

    #[test]
    fn test_from_json_treats_null_as_missing() {
        let data = from_json(
            r#"{
                "name": "Jane",
                "title": null,
                "skills": null,
                "experience": [{ "id": "job-1", "title": "Lead", "description": null, "location": null }],
                "cloudRoadmap": [{ "id": "x", "completed": null, "skills": null, "progress": null }]
            }"#,
        )
        .expect("nulls should not reject the document");
        assert_eq!(data.name, "Jane");
        assert_eq!(data.title, "");
        assert!(data.skills.is_empty());
        let job = find_job(&data.experience, "job-1").expect("job should exist");
        assert_eq!(job.title, "Lead");
        assert!(job.description.is_empty());
        assert_eq!(job.location, None);
        assert!(find_job(&data.experience, "job-2").is_none());
        let step = &data.cloud_roadmap[0];
        assert_eq!(step.id, "x");
        assert!(!step.completed);
        assert!(step.skills.is_empty());
        assert_eq!(step.progress, None);
    }

    #[test]
    fn test_from_json_rejects_invalid_json() {
        assert!(matches!(
            from_json("{ not json"),
            Err(ResumeError::Parse(_))
        ));
        assert!(matches!(
            from_embedded("missing.json"),
            Err(ResumeError::NotFound("missing.json"))
        ));
    }

    #[test]
    fn test_embedded_document_loads() {
        let data = from_embedded(RESUME_DOCUMENT).expect("embedded resume should parse");
        assert_eq!(data.name, inline_resume().name);
        assert_eq!(data.experience.len(), 4);
        assert_eq!(data.cloud_roadmap.len(), 4);
        assert_eq!(group_by_category(&data.skills).len(), 5);
        assert_eq!(resume(), &data);
    }
}
