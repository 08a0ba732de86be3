//! Skill relevance checks against a professional title.
//!
//! Personal-interest entries are flagged with professional alternatives;
//! catalog skills are scored 5..=10 depending on how well they fit the field.

use serde::Serialize;

use crate::skills::catalog::{category_by_key, SkillCategory, CATALOG};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfessionalField {
    Technology,
    Business,
    Design,
    Marketing,
    Finance,
}

struct FieldProfile {
    field: ProfessionalField,
    titles: &'static [&'static str],
    relevant_categories: &'static [&'static str],
    required_skill_types: &'static [&'static str],
}

/// Tested in order; the first profile whose title keyword appears wins.
const FIELD_PROFILES: &[FieldProfile] = &[
    FieldProfile {
        field: ProfessionalField::Technology,
        titles: &[
            "software engineer", "developer", "programmer", "web developer", "full stack",
            "frontend", "backend", "devops", "data scientist", "ml engineer",
            "systems engineer", "technical lead", "architect", "qa engineer",
            "mobile developer", "game developer", "ui/ux designer", "product manager",
        ],
        relevant_categories: &[
            "frontendFrameworks", "backendLanguages", "databases", "cloudPlatforms",
            "devopsTools", "testing", "aiMl", "mobileDevelopment",
        ],
        required_skill_types: &["technical", "programming", "tools", "frameworks"],
    },
    FieldProfile {
        field: ProfessionalField::Business,
        titles: &[
            "business analyst", "project manager", "product manager", "consultant",
            "account manager", "sales", "marketing", "operations", "strategy",
            "business development", "analyst", "coordinator", "administrator",
        ],
        relevant_categories: &["softSkills", "projectManagement", "designTools"],
        required_skill_types: &["management", "communication", "analysis", "leadership"],
    },
    FieldProfile {
        field: ProfessionalField::Design,
        titles: &[
            "designer", "graphic designer", "ui designer", "ux designer", "creative",
            "art director", "brand designer", "web designer", "product designer",
            "visual designer", "interaction designer",
        ],
        relevant_categories: &["designTools", "frontendFrameworks", "softSkills"],
        required_skill_types: &["design", "creative", "visual", "user experience"],
    },
    FieldProfile {
        field: ProfessionalField::Marketing,
        titles: &[
            "marketing", "digital marketing", "content", "social media", "seo", "sem",
            "brand", "communications", "pr", "copywriter", "content creator",
        ],
        relevant_categories: &["softSkills", "designTools", "projectManagement"],
        required_skill_types: &["marketing", "communication", "analytics", "creative"],
    },
    FieldProfile {
        field: ProfessionalField::Finance,
        titles: &[
            "financial analyst", "accountant", "finance", "investment", "banking",
            "controller", "cfo", "treasurer", "risk analyst", "auditor",
        ],
        relevant_categories: &["softSkills", "projectManagement"],
        required_skill_types: &["analytical", "financial", "compliance", "reporting"],
    },
];

const PERSONAL_INTERESTS: &[&str] = &[
    // sports and recreation
    "racing", "racing cars", "car racing", "auto racing", "formula 1", "f1", "horsing",
    "horse racing", "horseback riding", "equestrian", "football", "soccer", "basketball",
    "tennis", "golf", "swimming", "running", "jogging", "hiking", "camping", "fishing",
    "hunting",
    // personal activities
    "hosting", "party hosting", "event hosting", "dinner hosting", "gaming", "video gaming",
    "gaming tournaments", "esports gaming", "singing", "dancing", "music", "guitar", "piano",
    "drums", "cooking", "baking", "recipe creation", "food blogging", "traveling", "tourism",
    "sightseeing", "vacation planning", "reading novels", "fiction reading", "romance novels",
    "watching movies", "tv shows", "netflix", "entertainment",
    // personal social media
    "social media scrolling", "instagram", "tiktok", "facebook personal", "snapchat",
    "personal blogging", "vlogging personal",
    // daily activities
    "sleeping", "napping", "resting", "lounging", "shopping", "retail therapy", "mall visits",
    "online shopping personal", "eating", "drinking", "partying", "clubbing",
    // hobbies
    "collecting", "stamp collecting", "coin collecting", "gardening", "flower arranging",
    "lawn care", "crafting", "knitting", "sewing", "scrapbooking", "board games",
    "card games", "puzzles", "anime", "manga", "comics", "cartoons",
    // personal care
    "beauty", "makeup", "skincare", "fashion", "styling personal", "hair styling",
    "nail art", "personal grooming",
];

const PROFESSIONAL_ALTERNATIVES: &[(&str, &[&str])] = &[
    ("racing", &["Performance Optimization", "High-Performance Computing", "Speed Testing", "Load Testing"]),
    ("horsing", &["Leadership", "Team Management", "Strategic Planning", "Risk Management"]),
    ("hosting", &["Web Hosting", "Cloud Hosting", "Server Administration", "Event Management"]),
    ("gaming", &["Game Development", "Unity", "Unreal Engine", "Interactive Media", "User Experience Design"]),
    ("music", &["Audio Processing", "Sound Design", "Digital Audio Workstations", "Multimedia Development"]),
    ("cooking", &["Process Optimization", "Resource Management", "Quality Control", "Team Coordination"]),
    ("traveling", &["Cross-cultural Communication", "Remote Work", "Global Project Management", "Cultural Awareness"]),
    ("reading", &["Research Skills", "Documentation", "Technical Writing", "Knowledge Management"]),
    ("movies", &["Video Production", "Multimedia Content Creation", "Storytelling", "Visual Design"]),
    ("social media", &["Digital Marketing", "Content Strategy", "Social Media Marketing", "Community Management"]),
    ("shopping", &["Vendor Management", "Procurement", "Cost Analysis", "Supply Chain Management"]),
    ("sports", &["Team Leadership", "Goal Setting", "Performance Analytics", "Competitive Analysis"]),
    ("gardening", &["Project Planning", "Resource Allocation", "Growth Strategy", "Sustainable Practices"]),
    ("crafting", &["Creative Problem Solving", "Attention to Detail", "Manual Dexterity", "Quality Assurance"]),
    ("beauty", &["Brand Management", "Customer Service", "Visual Merchandising", "Color Theory"]),
];

const MAX_ALTERNATIVES: usize = 4;
const FIELD_ALTERNATIVES_PER_CATEGORY: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillValidation {
    pub is_relevant: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<String>,
    pub category: String,
    pub relevance_score: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<ProfessionalField>,
}

pub fn detect_professional_field(title: &str) -> Option<ProfessionalField> {
    field_profile(title).map(|p| p.field)
}

fn field_profile(title: &str) -> Option<&'static FieldProfile> {
    let lower = title.to_lowercase();
    FIELD_PROFILES
        .iter()
        .find(|p| p.titles.iter().any(|keyword| lower.contains(keyword)))
}

/// True when every word of `needle` appears as a consecutive run of words in `haystack`.
fn contains_words(haystack: &str, needle: &str) -> bool {
    let hay: Vec<&str> = haystack.split_whitespace().collect();
    let needle: Vec<&str> = needle.split_whitespace().collect();
    !needle.is_empty() && hay.windows(needle.len()).any(|w| w == needle.as_slice())
}

fn is_known_professional_skill(lower: &str) -> bool {
    CATALOG
        .iter()
        .flat_map(|c| c.skills.iter())
        .chain(PROFESSIONAL_ALTERNATIVES.iter().flat_map(|(_, alts)| alts.iter()))
        .any(|s| s.to_lowercase() == lower)
}

fn is_personal_interest(lower: &str) -> bool {
    if is_known_professional_skill(lower) {
        return false;
    }
    PERSONAL_INTERESTS
        .iter()
        .any(|interest| contains_words(lower, interest) || contains_words(interest, lower))
}

/// First catalog category holding the skill: exact name first, then word containment.
fn matching_category(lower: &str) -> Option<&'static SkillCategory> {
    let exact = CATALOG
        .iter()
        .find(|c| c.skills.iter().any(|s| s.to_lowercase() == lower));
    exact.or_else(|| {
        CATALOG.iter().find(|c| {
            c.skills.iter().any(|s| {
                let s = s.to_lowercase();
                contains_words(&s, lower) || contains_words(lower, &s)
            })
        })
    })
}

pub fn validate_skill(skill: &str, professional_title: Option<&str>) -> SkillValidation {
    let lower = skill.trim().to_lowercase();
    let title = professional_title.map(str::trim).filter(|t| !t.is_empty());
    let profile = title.and_then(field_profile);
    let field = title.and_then(detect_professional_field);

    if is_personal_interest(&lower) {
        let mut alternatives: Vec<String> = PROFESSIONAL_ALTERNATIVES
            .iter()
            .find(|(key, _)| lower.contains(key) || key.contains(lower.as_str()))
            .map(|(_, alts)| alts.iter().map(|s| s.to_string()).collect())
            .unwrap_or_default();

        if let Some(profile) = profile {
            let field_skills = profile
                .relevant_categories
                .iter()
                .filter_map(|key| category_by_key(key))
                .flat_map(|c| c.skills.iter().take(FIELD_ALTERNATIVES_PER_CATEGORY))
                .map(|s| s.to_string());
            alternatives.extend(field_skills);
            alternatives.truncate(MAX_ALTERNATIVES);
        }

        let reason = match title {
            Some(t) => format!("\"{skill}\" appears to be a personal interest, not relevant for {t} role"),
            None => format!("\"{skill}\" appears to be a personal interest rather than a professional skill"),
        };
        let suggestion = match (title, profile) {
            (Some(t), Some(p)) => format!(
                "For {t}, focus on {} skills",
                p.required_skill_types.join(", ")
            ),
            _ => "Consider replacing with professional skills that demonstrate your technical abilities or work-related competencies".to_string(),
        };

        return SkillValidation {
            is_relevant: false,
            suggestion: Some(suggestion),
            reason: Some(reason),
            alternatives,
            category: "Personal Interest (Not Professional)".to_string(),
            relevance_score: 0,
            field,
        };
    }

    if let Some(category) = matching_category(&lower) {
        let relevance_score = match profile {
            None => 5,
            Some(p) if p.relevant_categories.contains(&category.key) => 10,
            Some(_) if category.category.to_lowercase().contains("soft skills") => 8,
            Some(_) => 6,
        };
        let suggestion = if relevance_score >= 9 {
            format!(
                "Excellent choice! \"{skill}\" is highly relevant for {}",
                title.unwrap_or("your field")
            )
        } else if relevance_score >= 7 {
            format!(
                "Good choice! \"{skill}\" is a valuable {} skill",
                category.category
            )
        } else {
            format!("\"{skill}\" is a professional skill, but consider prioritizing more field-specific skills")
        };

        return SkillValidation {
            is_relevant: true,
            suggestion: Some(suggestion),
            reason: None,
            alternatives: Vec::new(),
            category: category.category.to_string(),
            relevance_score,
            field,
        };
    }

    let context_hint = match (title, profile) {
        (Some(t), Some(_)) => format!("Ensure it's relevant for {t} roles"),
        _ => "Consider providing more context if it's a specialized skill".to_string(),
    };
    SkillValidation {
        is_relevant: true,
        suggestion: Some(format!("\"{skill}\" has been added. {context_hint}")),
        reason: None,
        alternatives: Vec::new(),
        category: "Other Professional Skill".to_string(),
        relevance_score: 5,
        field,
    }
}
