//! Curated skills catalog: search, per-category suggestions and the trending list.

use serde::Serialize;

use crate::analysis::models::Priority;

pub const DEFAULT_SEARCH_LIMIT: usize = 20;
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

#[derive(Debug, Clone, Serialize)]
pub struct SkillCategory {
    #[serde(skip)]
    pub key: &'static str,
    pub category: &'static str,
    pub skills: &'static [&'static str],
    pub description: &'static str,
    pub priority: Priority,
}

pub static CATALOG: &[SkillCategory] = &[
    SkillCategory {
        key: "frontendFrameworks",
        category: "Frontend Frameworks",
        skills: &[
            "React", "Vue.js", "Angular", "Svelte", "Next.js", "Nuxt.js", "Astro", "Solid.js",
            "Qwik", "Remix",
        ],
        description: "Modern frontend frameworks and libraries",
        priority: Priority::High,
    },
    SkillCategory {
        key: "frontendTools",
        category: "Frontend Tools & Build Systems",
        skills: &[
            "Vite", "Webpack", "Rollup", "Parcel", "ESBuild", "Turborepo", "Nx", "Lerna",
            "PostCSS", "Sass", "Styled Components", "Emotion",
        ],
        description: "Build tools and styling solutions",
        priority: Priority::High,
    },
    SkillCategory {
        key: "backendLanguages",
        category: "Backend Languages",
        skills: &[
            "Node.js", "Python", "Go", "Rust", "Java", "C#", "PHP", "Ruby", "Kotlin", "Scala",
            "Elixir", "Deno", "Bun",
        ],
        description: "Server-side programming languages",
        priority: Priority::High,
    },
    SkillCategory {
        key: "backendFrameworks",
        category: "Backend Frameworks",
        skills: &[
            "Express.js", "Fastify", "Koa", "NestJS", "Django", "Flask", "FastAPI",
            "Spring Boot", "ASP.NET Core", "Laravel", "Rails", "Phoenix", "Fiber", "Actix",
            "Axum",
        ],
        description: "Backend frameworks and web servers",
        priority: Priority::High,
    },
    SkillCategory {
        key: "databases",
        category: "Databases",
        skills: &[
            "PostgreSQL", "MongoDB", "Redis", "MySQL", "SQLite", "MariaDB", "CouchDB",
            "Cassandra", "DynamoDB", "Supabase", "PlanetScale", "Prisma", "Drizzle", "TypeORM",
            "Sequelize", "Mongoose",
        ],
        description: "Database systems and ORMs",
        priority: Priority::High,
    },
    SkillCategory {
        key: "cloudPlatforms",
        category: "Cloud Platforms",
        skills: &[
            "AWS", "Google Cloud", "Azure", "Vercel", "Netlify", "Railway", "Render",
            "DigitalOcean", "Heroku", "Cloudflare", "Supabase", "Firebase", "Appwrite",
            "PlanetScale",
        ],
        description: "Cloud hosting and backend services",
        priority: Priority::High,
    },
    SkillCategory {
        key: "devopsTools",
        category: "DevOps & Infrastructure",
        skills: &[
            "Docker", "Kubernetes", "Terraform", "Ansible", "Jenkins", "GitHub Actions",
            "GitLab CI", "CircleCI", "Pulumi", "Helm", "Istio", "Prometheus", "Grafana",
            "ELK Stack",
        ],
        description: "Infrastructure and deployment tools",
        priority: Priority::Medium,
    },
    SkillCategory {
        key: "mobileDevelopment",
        category: "Mobile Development",
        skills: &[
            "React Native", "Flutter", "Swift", "Kotlin", "Expo", "Ionic", "Capacitor",
            "Xamarin", "NativeScript", "Tauri",
        ],
        description: "Mobile app development frameworks",
        priority: Priority::Medium,
    },
    SkillCategory {
        key: "aiMl",
        category: "AI & Machine Learning",
        skills: &[
            "TensorFlow", "PyTorch", "Scikit-learn", "OpenAI API", "Hugging Face", "LangChain",
            "Vector Databases", "Pinecone", "Weaviate", "Pandas", "NumPy", "Jupyter",
            "Google Gemini", "Anthropic Claude", "Stable Diffusion",
        ],
        description: "AI, ML, and data science tools",
        priority: Priority::High,
    },
    SkillCategory {
        key: "testing",
        category: "Testing & Quality Assurance",
        skills: &[
            "Jest", "Vitest", "Cypress", "Playwright", "Testing Library", "Storybook",
            "Chromatic", "Selenium", "Puppeteer", "Postman", "Insomnia", "Artillery", "K6",
        ],
        description: "Testing frameworks and tools",
        priority: Priority::Medium,
    },
    SkillCategory {
        key: "designTools",
        category: "Design & UI/UX",
        skills: &[
            "Figma", "Adobe XD", "Sketch", "Framer", "Principle", "InVision", "Zeplin",
            "Abstract", "Miro", "FigJam", "Tailwind CSS", "Chakra UI", "Material-UI",
            "Ant Design",
        ],
        description: "Design tools and UI libraries",
        priority: Priority::Medium,
    },
    SkillCategory {
        key: "softSkills",
        category: "Soft Skills",
        skills: &[
            "Leadership", "Communication", "Problem Solving", "Critical Thinking",
            "Team Collaboration", "Project Management", "Agile Methodology", "Scrum",
            "Mentoring", "Public Speaking", "Time Management", "Adaptability", "Creativity",
            "Analytical Thinking",
        ],
        description: "Interpersonal and management skills",
        priority: Priority::High,
    },
    SkillCategory {
        key: "projectManagement",
        category: "Project Management",
        skills: &[
            "Jira", "Asana", "Trello", "Monday.com", "Notion", "Linear", "ClickUp", "Basecamp",
            "Slack", "Discord", "Microsoft Teams", "Zoom", "Confluence", "GitHub Projects",
        ],
        description: "Project management and collaboration tools",
        priority: Priority::Medium,
    },
    SkillCategory {
        key: "versionControl",
        category: "Version Control",
        skills: &[
            "Git", "GitHub", "GitLab", "Bitbucket", "Subversion", "Mercurial", "Git Flow",
            "GitHub Flow", "Conventional Commits",
        ],
        description: "Version control systems and workflows",
        priority: Priority::High,
    },
];

const TRENDING_SKILLS: &[&str] = &[
    "Next.js 14",
    "Astro",
    "Solid.js",
    "Qwik",
    "Bun",
    "Tauri",
    "OpenAI API",
    "LangChain",
    "Vector Databases",
    "Google Gemini",
    "Anthropic Claude",
    "Deno",
    "Drizzle ORM",
    "tRPC",
    "Prisma",
    "Supabase",
    "Docker Compose",
    "Kubernetes",
    "Terraform",
    "GitHub Actions",
    "Vercel",
    "PlanetScale",
    "Turso",
    "Neon",
    "Xata",
    "Edge Runtime",
    "Expo Router",
    "React Native 0.73",
    "Flutter 3.16",
    "Capacitor",
];

pub fn category_by_key(key: &str) -> Option<&'static SkillCategory> {
    CATALOG.iter().find(|c| c.key == key)
}

/// Every catalog skill once, in catalog order.
fn all_skills() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for skill in CATALOG.iter().flat_map(|c| c.skills.iter().copied()) {
        if !seen.contains(&skill) {
            seen.push(skill);
        }
    }
    seen
}

/// Word-prefix hits rank ahead of plain substring hits.
pub fn search_skills(query: &str, limit: usize) -> Vec<String> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let (prefix_hits, substring_hits): (Vec<_>, Vec<_>) = all_skills()
        .into_iter()
        .filter(|skill| skill.to_lowercase().contains(&query))
        .partition(|skill| {
            skill
                .to_lowercase()
                .split_whitespace()
                .any(|word| word.starts_with(&query))
        });

    prefix_hits
        .into_iter()
        .chain(substring_hits)
        .take(limit)
        .map(String::from)
        .collect()
}

/// A named category's skills, or high-priority skills when no category is given.
pub fn skill_suggestions(category: Option<&str>, limit: usize) -> Vec<String> {
    match category.map(str::trim).filter(|c| !c.is_empty()) {
        Some(name) => CATALOG
            .iter()
            .find(|c| c.category.eq_ignore_ascii_case(name))
            .map(|c| c.skills.iter().take(limit).map(|s| s.to_string()).collect())
            .unwrap_or_default(),
        None => CATALOG
            .iter()
            .filter(|c| c.priority == Priority::High)
            .flat_map(|c| c.skills.iter())
            .take(limit)
            .map(|s| s.to_string())
            .collect(),
    }
}

pub fn trending_skills() -> Vec<String> {
    TRENDING_SKILLS.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_keys_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            assert!(CATALOG[i + 1..].iter().all(|b| b.key != a.key));
        }
    }

    #[test]
    fn test_search_ranks_word_prefix_first() {
        let hits = search_skills("script", 20);
        assert_eq!(hits, vec!["NativeScript"]);

        let hits = search_skills("git", 20);
        assert_eq!(hits[0], "GitHub Actions");
        assert!(hits.contains(&"Git".to_string()));
        assert_eq!(hits.last().map(String::as_str), Some("DigitalOcean"));
    }

    #[test]
    fn test_search_deduplicates_and_limits() {
        let hits = search_skills("supa", 20);
        assert_eq!(hits, vec!["Supabase"]);
        assert_eq!(search_skills("a", 3).len(), 3);
        assert!(search_skills("   ", 5).is_empty());
    }

    #[test]
    fn test_search_substring_keeps_catalog_order() {
        let hits = search_skills("ql", 20);
        assert_eq!(hits, vec!["PostgreSQL", "MySQL", "SQLite"]);
    }

    #[test]
    fn test_suggestions_by_category_name() {
        let skills = skill_suggestions(Some("databases"), 3);
        assert_eq!(skills, vec!["PostgreSQL", "MongoDB", "Redis"]);
        assert!(skill_suggestions(Some("Basket Weaving"), 5).is_empty());
    }

    #[test]
    fn test_suggestions_default_to_high_priority() {
        let skills = skill_suggestions(None, 12);
        assert_eq!(skills.len(), 12);
        assert_eq!(skills[0], "React");
        assert_eq!(skills[10], "Vite");
        assert!(!skills.contains(&"Docker".to_string()));
    }

    #[test]
    fn test_trending_has_no_duplicates() {
        let trending = trending_skills();
        for (i, a) in trending.iter().enumerate() {
            assert!(!trending[i + 1..].contains(a));
        }
    }
}
