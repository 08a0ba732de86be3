//! Field extraction: pattern rules that turn tagged lines into an `ExtractedRecord`.
//!
//! Every routine mutates the accumulator in place and never fails: a line that
//! matches no rule for its section is simply dropped.
//!
//! Contact fields are pulled from the whole raw text first (first match wins);
//! the per-line pass afterwards only fills fields that are still empty.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::models::{
    AwardEntry, EducationEntry, ExperienceEntry, ExtractedRecord, PersonalInfo, SectionTag,
};
use crate::analysis::segment::TaggedLine;

/// Lines at the top of a CV always go through personal-info extraction,
/// whatever section they were tagged with.
pub const EARLY_LINE_WINDOW: usize = 10;

const MIN_PHONE_DIGITS: usize = 7;
const MAX_PHONE_DIGITS: usize = 15;
const MAX_SKILL_CHARS: usize = 50;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}").unwrap());

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\+?[\d\s\-().]{7,}").unwrap());

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z\s\-.']+$").unwrap());

static NAME_SKIP_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)^(?:resume|curriculum|cv|contact|phone|email|address|summary|objective|experience|education|skills|languages|awards|references)",
        r"@",
        r"^\+?\d",
        r"^https?",
        r"(?i)linkedin|github|portfolio",
        r"^\d+\s+",
    ]
    .into_iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static LOCATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z\s]+,\s*[A-Za-z\s]+|[A-Za-z\s]+\s+\d{5}").unwrap());

/// `A | B | C`, shared by experience, education and awards.
static TRIPLE_PIPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)\s*\|\s*(.+?)\s*\|\s*(.+)$").unwrap());

/// Experience templates, tried in order: `|`, `at (...)`, dash separated.
static EXPERIENCE_TEMPLATES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        TRIPLE_PIPE_RE.clone(),
        Regex::new(r"(?i)^(.+?)\s+at\s+(.+?)\s*\((.+?)\)$").unwrap(),
        Regex::new(r"^(.+?)\s*[-–]\s*(.+?)\s*[-–]\s*(.+)$").unwrap(),
    ]
});

static BULLET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:[•\-*]|\d+\.)").unwrap());
static BULLET_STRIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[•\-*]\s*|\d+\.\s*)").unwrap());
static SKILL_MARKER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[•\-*]\s*").unwrap());
static ALL_CAPS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z\s]+$").unwrap());

static SKILLS_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:skills|technical skills|technologies|competencies|expertise|proficiencies|tools|software)[:.]?\s*").unwrap()
});
static LANGUAGES_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^languages?[:.]?\s*").unwrap());

const TITLE_KEYWORDS: &[&str] = &[
    "developer",
    "engineer",
    "designer",
    "manager",
    "analyst",
    "specialist",
    "director",
    "coordinator",
    "consultant",
    "architect",
    "administrator",
    "technician",
    "assistant",
    "executive",
    "officer",
    "lead",
    "senior",
    "junior",
    "principal",
    "associate",
    "intern",
];

/// Narrower list used for position-only experience lines.
const JOB_TITLE_KEYWORDS: &[&str] = &[
    "developer",
    "engineer",
    "manager",
    "analyst",
    "specialist",
    "director",
    "coordinator",
    "consultant",
];

const SUMMARY_KEYWORDS: &[&str] = &["summary", "objective", "profile", "about"];

const SKILL_STOP_WORDS: &[&str] = &[
    "and",
    "or",
    "the",
    "with",
    "using",
    "including",
    "such",
    "as",
    "etc",
];

/// Gate for splitting an undelimited skills line on whitespace. A line that
/// mentions none of these stays a single token.
const KNOWN_TECHNOLOGIES: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "Python",
    "Java",
    "C++",
    "C#",
    "PHP",
    "Ruby",
    "Go",
    "Swift",
    "Kotlin",
    "React",
    "Angular",
    "Vue",
    "Node.js",
    "Express",
    "Django",
    "Flask",
    "Spring",
    "Laravel",
    "HTML",
    "CSS",
    "SASS",
    "SCSS",
    "Bootstrap",
    "Tailwind",
    "MySQL",
    "PostgreSQL",
    "MongoDB",
    "Redis",
    "SQLite",
    "AWS",
    "Azure",
    "Google Cloud",
    "Docker",
    "Kubernetes",
    "Git",
    "GitHub",
    "GitLab",
    "Bitbucket",
    "Adobe Photoshop",
    "Adobe Illustrator",
    "Figma",
    "Sketch",
    "Microsoft Office",
    "Excel",
    "PowerPoint",
    "Word",
    "Project Management",
    "Agile",
    "Scrum",
    "Kanban",
];

// ────────────────────────────────────────────────────────────────────────────
// Record assembly
// ────────────────────────────────────────────────────────────────────────────

/// Builds the record from the raw text and its segmented lines.
pub fn extract_record(raw: &str, lines: &[TaggedLine<'_>]) -> ExtractedRecord {
    let mut record = ExtractedRecord::default();
    extract_contact(raw, &mut record.personal_info);

    for line in lines {
        let personal_section = matches!(line.section, SectionTag::Personal | SectionTag::Summary);
        if line.index < EARLY_LINE_WINDOW || personal_section {
            parse_personal_line(line.text, &mut record.personal_info);
            if line.section == SectionTag::Summary {
                parse_summary_line(line.text, &mut record.personal_info);
            }
        }

        match line.section {
            SectionTag::Experience => parse_experience_line(line.text, &mut record.experience),
            SectionTag::Education => parse_education_line(line.text, &mut record.education),
            SectionTag::Skills => parse_skills_line(line.text, &mut record.skills),
            SectionTag::Languages => parse_languages_line(line.text, &mut record.languages),
            SectionTag::Awards => parse_awards_line(line.text, &mut record.awards),
            SectionTag::Personal | SectionTag::Summary => {}
        }
    }

    record
}

// ────────────────────────────────────────────────────────────────────────────
// Personal information
// ────────────────────────────────────────────────────────────────────────────

/// Whole-document scan for email and phone.
pub fn extract_contact(raw: &str, info: &mut PersonalInfo) {
    if let Some(m) = EMAIL_RE.find(raw) {
        info.email = Some(m.as_str().to_string());
    }
    if let Some(phone) = find_phone(raw) {
        info.phone = Some(phone);
    }
}

fn find_phone(text: &str) -> Option<String> {
    PHONE_RE
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .find(|candidate| {
            let digits = candidate.chars().filter(char::is_ascii_digit).count();
            (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits)
        })
        .map(String::from)
}

/// Opportunistic per-line pass. Never overwrites a field that is already set.
pub fn parse_personal_line(line: &str, info: &mut PersonalInfo) {
    if info.email.is_none() {
        info.email = EMAIL_RE.find(line).map(|m| m.as_str().to_string());
    }
    if info.phone.is_none() {
        info.phone = find_phone(line);
    }
    if info.name.is_none() && looks_like_name(line) {
        info.name = Some(line.trim().to_string());
    }
    if info.title.is_none() && looks_like_title(line, info.name.as_deref()) {
        info.title = Some(line.trim().to_string());
    }
    if info.location.is_none() && line.chars().count() < 50 && LOCATION_RE.is_match(line) {
        info.location = Some(line.trim().to_string());
    }
}

fn looks_like_name(line: &str) -> bool {
    let len = line.chars().count();
    if len <= 2 || len >= 80 {
        return false;
    }
    if NAME_SKIP_PATTERNS.iter().any(|re| re.is_match(line)) {
        return false;
    }
    let words = line.split_whitespace().count();
    NAME_RE.is_match(line) && (2..=4).contains(&words)
}

fn looks_like_title(line: &str, name: Option<&str>) -> bool {
    let lower = line.to_lowercase();
    TITLE_KEYWORDS.iter().any(|k| lower.contains(k))
        && line.chars().count() < 100
        && !line.contains('@')
        && !name.is_some_and(|n| n.contains(line))
}

/// First Summary-section line over 20 characters that is not itself a heading.
pub fn parse_summary_line(line: &str, info: &mut PersonalInfo) {
    let len = line.chars().count();
    if info.summary.is_some() || len <= 20 {
        return;
    }
    let lower = line.to_lowercase();
    let header_like = len < 50 && SUMMARY_KEYWORDS.iter().any(|k| lower.contains(k));
    if !header_like {
        info.summary = Some(line.to_string());
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

pub fn parse_experience_line(line: &str, entries: &mut Vec<ExperienceEntry>) {
    if let Some(caps) = EXPERIENCE_TEMPLATES.iter().find_map(|re| re.captures(line)) {
        entries.push(ExperienceEntry::new(&caps[1], &caps[2], &caps[3]));
        return;
    }

    if let Some(last) = entries.last_mut() {
        if BULLET_RE.is_match(line) {
            let cleaned = BULLET_STRIP_RE.replace(line, "");
            let cleaned = cleaned.trim();
            if !cleaned.is_empty() {
                if !last.description.is_empty() {
                    last.description.push('\n');
                }
                last.description.push_str(cleaned);
            }
            return;
        }

        // Plain continuation only extends a description that already exists.
        if !ALL_CAPS_RE.is_match(line) && line.chars().count() > 10 {
            if !last.description.is_empty() {
                last.description.push(' ');
                last.description.push_str(line.trim());
            }
            return;
        }
    }

    let len = line.chars().count();
    if len > 5 && len < 80 && !line.contains('|') {
        let lower = line.to_lowercase();
        if JOB_TITLE_KEYWORDS.iter().any(|k| lower.contains(k)) {
            entries.push(ExperienceEntry::new(line, "", ""));
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Education and awards: single template, everything else dropped
// ────────────────────────────────────────────────────────────────────────────

pub fn parse_education_line(line: &str, entries: &mut Vec<EducationEntry>) {
    if let Some(caps) = TRIPLE_PIPE_RE.captures(line) {
        entries.push(EducationEntry {
            degree: caps[1].trim().to_string(),
            institution: caps[2].trim().to_string(),
            duration: caps[3].trim().to_string(),
            gpa: None,
        });
    }
}

pub fn parse_awards_line(line: &str, entries: &mut Vec<AwardEntry>) {
    if let Some(caps) = TRIPLE_PIPE_RE.captures(line) {
        entries.push(AwardEntry {
            title: caps[1].trim().to_string(),
            issuer: caps[2].trim().to_string(),
            date: caps[3].trim().to_string(),
            description: None,
        });
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Skills / languages
// ────────────────────────────────────────────────────────────────────────────

pub fn parse_skills_line(line: &str, skills: &mut Vec<String>) {
    let stripped = SKILLS_PREFIX_RE.replace(line, "");
    let text = stripped.trim();
    if text.is_empty() {
        return;
    }

    let tokens: Vec<&str> = if text.contains([',', ';', '|']) {
        text.split([',', ';', '|']).collect()
    } else if text.contains(['•', '-']) {
        text.split(['•', '-']).collect()
    } else if mentions_known_technology(text) {
        text.split_whitespace()
            .filter(|word| word.chars().count() > 1)
            .collect()
    } else {
        vec![text]
    };

    for token in tokens {
        let token = token.trim();
        let token = SKILL_MARKER_RE.replace(token, "");
        let token = token.trim();
        if is_skill_token(token) {
            push_unique_skill(skills, token);
        }
    }
}

fn mentions_known_technology(text: &str) -> bool {
    let lower = text.to_lowercase();
    KNOWN_TECHNOLOGIES
        .iter()
        .any(|tech| lower.contains(&tech.to_lowercase()))
}

fn is_skill_token(token: &str) -> bool {
    let len = token.chars().count();
    if len == 0 || len > MAX_SKILL_CHARS {
        return false;
    }
    let lower = token.to_lowercase();
    !SKILL_STOP_WORDS.contains(&lower.as_str())
}

/// Appends unless an entry equal under case-insensitive comparison exists.
pub fn push_unique_skill(skills: &mut Vec<String>, skill: &str) {
    let lower = skill.to_lowercase();
    if !skills.iter().any(|existing| existing.to_lowercase() == lower) {
        skills.push(skill.to_string());
    }
}

pub fn parse_languages_line(line: &str, languages: &mut Vec<String>) {
    let stripped = LANGUAGES_PREFIX_RE.replace(line, "");
    languages.extend(
        stripped
            .split([',', ';'])
            .map(str::trim)
            .filter(|lang| !lang.is_empty())
            .map(String::from),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::normalize::split_lines;
    use crate::analysis::segment::segment;

    fn record_for(text: &str) -> ExtractedRecord {
        let normalized = split_lines(text);
        extract_record(text, &segment(&normalized))
    }

    // ── contact ───────────────────────────────────────────────────────────

    #[test]
    fn test_first_email_in_document_wins() {
        let mut info = PersonalInfo::default();
        extract_contact("a@one.com\nsecond b@two.org", &mut info);
        assert_eq!(info.email.as_deref(), Some("a@one.com"));
    }

    #[test]
    fn test_phone_digit_bounds() {
        assert_eq!(find_phone("call 123-45"), None);
        assert_eq!(find_phone("+44 20 7946 0958").as_deref(), Some("+44 20 7946 0958"));
        // 16 digits is too long, the next candidate is taken.
        assert_eq!(
            find_phone("1234 5678 9012 3456 x (555) 123-4567").as_deref(),
            Some("(555) 123-4567")
        );
    }

    #[test]
    fn test_per_line_pass_does_not_overwrite() {
        let mut info = PersonalInfo {
            email: Some("first@example.com".into()),
            phone: Some("555 111 2222".into()),
            ..Default::default()
        };
        parse_personal_line("other@example.com", &mut info);
        parse_personal_line("+1 999 888 7777", &mut info);
        assert_eq!(info.email.as_deref(), Some("first@example.com"));
        assert_eq!(info.phone.as_deref(), Some("555 111 2222"));
    }

    // ── name / title / location / summary ─────────────────────────────────

    #[test]
    fn test_name_requires_two_to_four_words() {
        assert!(looks_like_name("Jane Doe"));
        assert!(looks_like_name("Mary-Jane O'Neil Smith"));
        assert!(!looks_like_name("Cher"));
        assert!(!looks_like_name("One Two Three Four Five"));
    }

    #[test]
    fn test_name_skip_patterns() {
        assert!(!looks_like_name("Curriculum Vitae"));
        assert!(!looks_like_name("Contact Details"));
        assert!(!looks_like_name("linkedin com in jane"));
        assert!(!looks_like_name("https example"));
        assert!(!looks_like_name("Jane Doe 2"));
    }

    #[test]
    fn test_name_is_never_overwritten() {
        let mut info = PersonalInfo::default();
        parse_personal_line("Jane Doe", &mut info);
        parse_personal_line("John Smith", &mut info);
        assert_eq!(info.name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_title_keyword_match() {
        let mut info = PersonalInfo {
            name: Some("Jane Doe".into()),
            ..Default::default()
        };
        parse_personal_line("Lead Data Analyst", &mut info);
        assert_eq!(info.title.as_deref(), Some("Lead Data Analyst"));
    }

    #[test]
    fn test_title_rejects_email_and_name_lines() {
        assert!(!looks_like_title("engineer@example.com", None));
        assert!(!looks_like_title("Senior Dev", Some("Senior Dev")));
        assert!(!looks_like_title(&format!("Engineer {}", "x".repeat(100)), None));
    }

    #[test]
    fn test_location_detection() {
        let mut info = PersonalInfo::default();
        parse_personal_line("Berlin, Germany", &mut info);
        assert_eq!(info.location.as_deref(), Some("Berlin, Germany"));

        let mut info = PersonalInfo::default();
        parse_personal_line("Springfield 62704", &mut info);
        assert_eq!(info.location.as_deref(), Some("Springfield 62704"));
    }

    #[test]
    fn test_summary_takes_first_long_line() {
        let mut info = PersonalInfo::default();
        parse_summary_line("Short line", &mut info);
        assert!(info.summary.is_none());
        parse_summary_line("My profile in brief here", &mut info);
        assert!(info.summary.is_none(), "header-like line must be skipped");
        parse_summary_line("Backend engineer focused on reliable data systems", &mut info);
        parse_summary_line("Second paragraph that should not replace the first", &mut info);
        assert_eq!(
            info.summary.as_deref(),
            Some("Backend engineer focused on reliable data systems")
        );
    }

    // ── experience ────────────────────────────────────────────────────────

    #[test]
    fn test_experience_pipe_template() {
        let mut entries = Vec::new();
        parse_experience_line("Senior Developer | Acme Corp | 2019-2023", &mut entries);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].position, "Senior Developer");
        assert_eq!(entries[0].company, "Acme Corp");
        assert_eq!(entries[0].duration, "2019-2023");
        assert!(entries[0].description.is_empty());
    }

    #[test]
    fn test_experience_at_template() {
        let mut entries = Vec::new();
        parse_experience_line("Data Analyst at Globex (Jan 2018 - Mar 2020)", &mut entries);
        assert_eq!(entries[0].position, "Data Analyst");
        assert_eq!(entries[0].company, "Globex");
        assert_eq!(entries[0].duration, "Jan 2018 - Mar 2020");
    }

    #[test]
    fn test_experience_dash_template() {
        let mut entries = Vec::new();
        parse_experience_line("Designer – Initech – 2015", &mut entries);
        assert_eq!(entries[0].position, "Designer");
        assert_eq!(entries[0].company, "Initech");
        assert_eq!(entries[0].duration, "2015");
    }

    #[test]
    fn test_bullets_join_with_newline() {
        let mut entries = Vec::new();
        parse_experience_line("Dev | Acme | 2020", &mut entries);
        parse_experience_line("• Shipped the billing service", &mut entries);
        parse_experience_line("* Cut p99 latency by 30%", &mut entries);
        parse_experience_line("3. Mentored interns", &mut entries);
        assert_eq!(
            entries[0].description,
            "Shipped the billing service\nCut p99 latency by 30%\nMentored interns"
        );
    }

    #[test]
    fn test_bullet_goes_to_most_recent_entry() {
        let mut entries = Vec::new();
        parse_experience_line("Dev | Acme | 2020", &mut entries);
        parse_experience_line("Lead | Globex | 2022", &mut entries);
        parse_experience_line("- Ran the platform team", &mut entries);
        assert!(entries[0].description.is_empty());
        assert_eq!(entries[1].description, "Ran the platform team");
    }

    #[test]
    fn test_continuation_appends_with_space() {
        let mut entries = Vec::new();
        parse_experience_line("Dev | Acme | 2020", &mut entries);
        parse_experience_line("• Built the ingestion pipeline", &mut entries);
        parse_experience_line("processing events from twelve sources", &mut entries);
        assert_eq!(
            entries[0].description,
            "Built the ingestion pipeline processing events from twelve sources"
        );
    }

    #[test]
    fn test_continuation_ignored_without_description() {
        let mut entries = Vec::new();
        parse_experience_line("Dev | Acme | 2020", &mut entries);
        parse_experience_line("responsible for many different things", &mut entries);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].description.is_empty());
    }

    #[test]
    fn test_standalone_job_title_creates_position_only_entry() {
        let mut entries = Vec::new();
        parse_experience_line("Backend Engineer", &mut entries);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].position, "Backend Engineer");
        assert!(entries[0].company.is_empty());
        assert!(entries[0].duration.is_empty());
    }

    #[test]
    fn test_unmatched_experience_line_dropped() {
        let mut entries = Vec::new();
        parse_experience_line("Hobbies include chess", &mut entries);
        parse_experience_line("• orphan bullet", &mut entries);
        assert!(entries.is_empty());
    }

    // ── education / awards ────────────────────────────────────────────────

    #[test]
    fn test_education_template_and_drop() {
        let mut entries = Vec::new();
        parse_education_line("BSc Computer Science | State University | 2014-2018", &mut entries);
        parse_education_line("• Dean's list", &mut entries);
        parse_education_line("Graduated with honours and a thesis", &mut entries);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].degree, "BSc Computer Science");
        assert_eq!(entries[0].institution, "State University");
        assert_eq!(entries[0].duration, "2014-2018");
        assert!(entries[0].gpa.is_none());
    }

    #[test]
    fn test_awards_template() {
        let mut entries = Vec::new();
        parse_awards_line("Employee of the Year | Acme | 2021", &mut entries);
        parse_awards_line("Best hackathon project", &mut entries);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Employee of the Year");
        assert_eq!(entries[0].issuer, "Acme");
        assert_eq!(entries[0].date, "2021");
    }

    // ── skills / languages ────────────────────────────────────────────────

    #[test]
    fn test_skills_prefix_and_case_insensitive_dedup() {
        let mut skills = Vec::new();
        parse_skills_line("Skills: Python, python, SQL", &mut skills);
        assert_eq!(skills, vec!["Python", "SQL"]);
    }

    #[test]
    fn test_skills_dedup_across_lines() {
        let mut skills = vec!["Rust".to_string()];
        parse_skills_line("RUST; Go | Kafka", &mut skills);
        assert_eq!(skills, vec!["Rust", "Go", "Kafka"]);
    }

    #[test]
    fn test_skills_bullet_split() {
        let mut skills = Vec::new();
        parse_skills_line("Leadership • Mentoring • Hiring", &mut skills);
        assert_eq!(skills, vec!["Leadership", "Mentoring", "Hiring"]);
    }

    #[test]
    fn test_skills_known_technology_gate() {
        let mut skills = Vec::new();
        parse_skills_line("Python Docker Kubernetes", &mut skills);
        assert_eq!(skills, vec!["Python", "Docker", "Kubernetes"]);

        let mut skills = Vec::new();
        parse_skills_line("Strong written communication", &mut skills);
        assert_eq!(skills, vec!["Strong written communication"]);
    }

    #[test]
    fn test_skills_filters_stop_words_and_long_tokens() {
        let mut skills = Vec::new();
        let long = "x".repeat(51);
        parse_skills_line(&format!("Rust, and, etc, {long}, "), &mut skills);
        assert_eq!(skills, vec!["Rust"]);
    }

    #[test]
    fn test_skills_header_only_line_ignored() {
        let mut skills = Vec::new();
        parse_skills_line("Technologies:", &mut skills);
        assert!(skills.is_empty());
    }

    #[test]
    fn test_languages_split() {
        let mut languages = Vec::new();
        parse_languages_line("Languages: English (native); German, ", &mut languages);
        assert_eq!(languages, vec!["English (native)", "German"]);
    }

    // ── whole record ──────────────────────────────────────────────────────

    #[test]
    fn test_early_lines_offered_to_personal_extraction() {
        let text = "Experience\nJane Doe\nDev | Acme | 2020";
        let record = record_for(text);
        assert_eq!(record.personal_info.name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_late_content_lines_not_personal() {
        let mut text = String::from("Experience\n");
        for i in 0..12 {
            text.push_str(&format!("Dev{i} | Acme | 2020\n"));
        }
        text.push_str("Late Name\n");
        let record = record_for(&text);
        assert!(record.personal_info.name.is_none());
        assert_eq!(record.experience.len(), 12);
    }

    #[test]
    fn test_summary_section_fills_summary() {
        let text = "Jane Doe\nSummary\nPragmatic engineer who likes boring technology";
        let record = record_for(text);
        assert_eq!(
            record.personal_info.summary.as_deref(),
            Some("Pragmatic engineer who likes boring technology")
        );
    }

    #[test]
    fn test_late_summary_section_feeds_personal_extraction() {
        let mut text = String::from("Jane Doe\nExperience\n");
        for i in 0..12 {
            text.push_str(&format!("Dev{i} | Acme | 2020\n"));
        }
        text.push_str(
            "Summary\nPlatform Engineer\nLisbon, Portugal\n\
             Pragmatic engineer who likes boring technology\n",
        );
        let record = record_for(&text);
        let info = &record.personal_info;
        assert_eq!(info.name.as_deref(), Some("Jane Doe"));
        assert_eq!(info.title.as_deref(), Some("Platform Engineer"));
        assert_eq!(info.location.as_deref(), Some("Lisbon, Portugal"));
        assert_eq!(
            info.summary.as_deref(),
            Some("Pragmatic engineer who likes boring technology")
        );
        assert_eq!(record.experience.len(), 12);
    }

    #[test]
    fn test_sections_route_to_their_parsers() {
        let text = "Jane Doe\n\
                    Languages\nEnglish, French\n\
                    Awards\nTop Performer | Acme | 2022\n\
                    Education\nMSc | ETH | 2012\n\
                    Skills\nRust, Go";
        let record = record_for(text);
        assert_eq!(record.languages, vec!["English", "French"]);
        assert_eq!(record.awards.len(), 1);
        assert_eq!(record.education.len(), 1);
        assert_eq!(record.skills, vec!["Rust", "Go"]);
    }
}
