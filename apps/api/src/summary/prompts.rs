// Prompt text for professional-summary generation.

/// Summary prompt template.
/// Replace: {context}, {requirements}
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"Create a polished, professional summary for a CV based on this information:

{context}

REQUIREMENTS:
{requirements}

WRITING GUIDELINES:
- Write in third person (e.g., "Results-driven professional" not "I am a results-driven professional")
- Start with a strong professional title/descriptor
- Include specific years of experience when mentioned
- Use precise language and proper grammar
- Highlight quantifiable achievements and key skills
- Show progression and expertise level
- End with value proposition for employers
- Use dynamic action words (e.g., "specializing", "demonstrated", "proven")
- Avoid redundant phrases and ensure smooth flow
- Make every word count, concise yet comprehensive

EXAMPLE STRUCTURE:
"[Professional Title] with [X years] of experience in [field/industry]. Demonstrated expertise in [key skills/areas] with a proven track record of [specific achievements]. Known for [distinctive qualities] and [impact/results]. Seeking to leverage [expertise] to drive [value proposition] in [target role/industry]."

Generate ONLY the professional summary text. No quotes, bullets, or additional formatting. Make it recruitment-ready and compelling."#;

/// Word-count guidance per requested length.
pub const LENGTH_GUIDE: &str = "short=50-80 words, medium=80-120 words, long=120-150 words";

/// Skill-focused summary prompt.
/// Replace: {skills}, {target}
pub const SKILL_SUMMARY_PROMPT_TEMPLATE: &str = r#"Create a polished professional summary emphasizing these technical skills: {skills}.{target}

REQUIREMENTS:
- Write in third person (e.g., "Skilled professional with expertise in...")
- 80-100 words maximum
- Professional tone with proper grammar
- Highlight technical proficiency and practical application
- Include value proposition for employers
- Use action-oriented language
- Make it recruitment-ready

Generate only the summary text without quotes or additional formatting."#;

/// Career-history summary prompt.
/// Replace: {experience}, {years}
pub const EXPERIENCE_SUMMARY_PROMPT_TEMPLATE: &str = r#"Create a professional summary based on this career experience: {experience}

REQUIREMENTS:
- Write in third person (e.g., "Experienced professional with...")
{years}- 100-120 words maximum
- Professional tone with perfect grammar
- Highlight career progression and key achievements
- Emphasize leadership, impact, and quantifiable results
- Show value proposition for future employers
- Use dynamic action words
- Make it compelling and recruitment-ready

Generate only the polished summary text without quotes or formatting."#;
