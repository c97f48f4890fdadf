//! Plain-text resume rendering from a student profile.
//!
//! Sections with no content are omitted. Education is listed newest
//! first (B.Tech, Intermediate, SSC).

use std::fmt::Write;

use crate::profile::{
    Certification, Education, Internship, Project, SocialLinks, TechnicalSkill,
};

/// Everything the resume needs, borrowed from the account and profile rows.
#[derive(Debug, Clone, Copy)]
pub struct ResumeSource<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub branch: &'a str,
    pub phone: Option<&'a str>,
    pub address: Option<&'a str>,
    pub social_links: &'a SocialLinks,
    pub education: &'a Education,
    pub technical_skills: &'a [TechnicalSkill],
    pub internships: &'a [Internship],
    pub projects: &'a [Project],
    pub certifications: &'a [Certification],
    pub achievements: &'a [String],
}

/// Format an education score.
///
/// Values up to 10 are read as a CGPA, anything larger as a percentage.
/// Returns `None` for blank or non-numeric input.
pub fn format_score(score: &str) -> Option<String> {
    let trimmed = score.trim();
    let value: f64 = trimmed.parse().ok()?;
    if value <= 10.0 {
        Some(format!("CGPA: {trimmed}/10"))
    } else {
        Some(format!("Percentage: {trimmed}%"))
    }
}

/// Render the resume as plain text.
pub fn render_resume(src: &ResumeSource<'_>) -> String {
    let mut out = String::new();

    // `write!` into a String cannot fail.
    let _ = writeln!(out, "{}", src.name.to_uppercase());

    let links: Vec<String> = [
        ("GitHub", &src.social_links.github),
        ("LinkedIn", &src.social_links.linkedin),
        ("LeetCode", &src.social_links.leetcode),
    ]
    .into_iter()
    .filter_map(|(label, link)| present(link.as_deref()).map(|l| format!("{label}: {l}")))
    .chain(std::iter::once(format!("Email: {}", src.email)))
    .collect();
    let _ = writeln!(out, "{}", links.join(" | "));

    let contact: Vec<String> = [("Location", src.address), ("Phone", src.phone)]
        .into_iter()
        .filter_map(|(label, v)| present(v).map(|v| format!("{label}: {v}")))
        .collect();
    if !contact.is_empty() {
        let _ = writeln!(out, "{}", contact.join(" | "));
    }

    write_education(&mut out, src);

    if !src.technical_skills.is_empty() {
        section(&mut out, "Technical Skills");
        for skill in src.technical_skills {
            let _ = writeln!(out, "{}: {}", skill.category, skill.items);
        }
    }

    if !src.internships.is_empty() {
        section(&mut out, "Internships");
        for item in src.internships {
            let _ = writeln!(
                out,
                "{}{}",
                item.company,
                suffix(" | ", item.duration.as_deref())
            );
            if let Some(role) = present(item.role.as_deref()) {
                let _ = writeln!(out, "{role}");
            }
            write_bullets(&mut out, &item.description);
        }
    }

    if !src.projects.is_empty() {
        section(&mut out, "Projects");
        for project in src.projects {
            let _ = writeln!(
                out,
                "{}{}",
                project.title,
                suffix(" | ", project.tech_stack.as_deref())
            );
            write_bullets(&mut out, &project.description);
        }
    }

    if !src.certifications.is_empty() || !src.achievements.is_empty() {
        section(&mut out, "Achievements & Certifications");
        for cert in src.certifications {
            let _ = writeln!(out, "- {}{}", cert.name, suffix(" - ", cert.issuer.as_deref()));
        }
        for achievement in src.achievements {
            let _ = writeln!(out, "- {achievement}");
        }
    }

    out
}

fn write_education(out: &mut String, src: &ResumeSource<'_>) {
    let edu = src.education;
    let degree = format!("Bachelor of Technology in {}", src.branch);
    let rows = [
        (
            edu.btech.college.as_deref(),
            edu.btech.year.as_deref(),
            degree.as_str(),
            edu.btech.current_cgpa.as_deref(),
        ),
        (
            edu.intermediate.college.as_deref(),
            edu.intermediate.year.as_deref(),
            "Intermediate (MPC)",
            edu.intermediate.percentage.as_deref(),
        ),
        (
            edu.ssc.school.as_deref(),
            edu.ssc.year.as_deref(),
            "Secondary School Certificate",
            edu.ssc.percentage.as_deref(),
        ),
    ];

    let mut wrote_header = false;
    for (institution, year, qualification, score) in rows {
        let Some(institution) = present(institution) else {
            continue;
        };
        if !wrote_header {
            section(out, "Education");
            wrote_header = true;
        }
        let _ = writeln!(out, "{institution}{}", suffix(" | ", year));
        let score = score.and_then(format_score);
        let _ = writeln!(out, "{qualification}{}", suffix(" | ", score.as_deref()));
    }
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{}", title.to_uppercase());
    let _ = writeln!(out, "{}", "-".repeat(title.len()));
}

fn write_bullets(out: &mut String, description: &str) {
    for line in description.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let _ = writeln!(out, "  * {line}");
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn suffix(sep: &str, value: Option<&str>) -> String {
    present(value).map(|v| format!("{sep}{v}")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{DegreeRecord, SchoolRecord};

    fn empty_source<'a>(links: &'a SocialLinks, edu: &'a Education) -> ResumeSource<'a> {
        ResumeSource {
            name: "Asha Rao",
            email: "asha@college.edu",
            branch: "CSE",
            phone: None,
            address: None,
            social_links: links,
            education: edu,
            technical_skills: &[],
            internships: &[],
            projects: &[],
            certifications: &[],
            achievements: &[],
        }
    }

    #[test]
    fn score_formatting_switches_at_ten() {
        assert_eq!(format_score("8.9").as_deref(), Some("CGPA: 8.9/10"));
        assert_eq!(format_score("10").as_deref(), Some("CGPA: 10/10"));
        assert_eq!(format_score("92.5").as_deref(), Some("Percentage: 92.5%"));
        assert_eq!(format_score(""), None);
        assert_eq!(format_score("n/a"), None);
    }

    #[test]
    fn minimal_profile_renders_header_only() {
        let links = SocialLinks::default();
        let edu = Education::default();
        let text = render_resume(&empty_source(&links, &edu));

        assert_eq!(text, "ASHA RAO\nEmail: asha@college.edu\n");
    }

    #[test]
    fn education_is_newest_first_and_skips_missing_rows() {
        let links = SocialLinks {
            github: Some("https://github.com/asha".into()),
            ..Default::default()
        };
        let edu = Education {
            ssc: SchoolRecord {
                school: Some("City High".into()),
                year: Some("2018".into()),
                percentage: Some("95".into()),
            },
            btech: DegreeRecord {
                college: Some("JNTU".into()),
                year: Some("2025".into()),
                current_cgpa: Some("8.7".into()),
            },
            ..Default::default()
        };
        let text = render_resume(&empty_source(&links, &edu));

        assert!(text.contains("GitHub: https://github.com/asha | Email: asha@college.edu"));
        let btech = text.find("JNTU | 2025").unwrap();
        let ssc = text.find("City High | 2018").unwrap();
        assert!(btech < ssc);
        assert!(text.contains("Bachelor of Technology in CSE | CGPA: 8.7/10"));
        assert!(text.contains("Secondary School Certificate | Percentage: 95%"));
        assert!(!text.contains("Intermediate"));
    }

    #[test]
    fn descriptions_become_bullets() {
        let links = SocialLinks::default();
        let edu = Education::default();
        let projects = vec![Project {
            title: "Tracker".into(),
            description: "Built API\n\n  Wrote tests  ".into(),
            tech_stack: Some("Rust".into()),
            link: None,
        }];
        let achievements = vec!["Hackathon winner".to_string()];
        let mut src = empty_source(&links, &edu);
        src.projects = &projects;
        src.achievements = &achievements;

        let text = render_resume(&src);
        assert!(text.contains("PROJECTS\n--------\nTracker | Rust\n  * Built API\n  * Wrote tests\n"));
        assert!(text.contains("- Hackathon winner"));
    }
}
