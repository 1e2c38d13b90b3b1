//! Pattern-based extraction of scalar fields and section line lists

use regex::Regex;

/// Fixed UK university list, checked in order; first containment match wins.
const UK_UNIVERSITIES: &[&str] = &[
    "University of Cambridge",
    "University of Oxford",
    "Imperial College London",
    "University College London",
    "University of Edinburgh",
    "University of Manchester",
    "University of Warwick",
    "King's College London",
    "University of Bristol",
    "University of Glasgow",
    "University of Birmingham",
    "University of Leeds",
    "University of Sheffield",
    "University of Nottingham",
    "University of Southampton",
];

/// Scalar and list extractors with precompiled patterns. Every extractor
/// degrades to an empty value instead of failing; partial results always
/// beat a failed parse.
pub struct FieldExtractor {
    email_regex: Regex,
    phone_regex: Regex,
    degree_regex: Regex,
    year_regex: Regex,
    university_regex: Regex,
    name_token_regex: Regex,
}

impl FieldExtractor {
    pub fn new() -> Self {
        Self {
            email_regex: Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
                .expect("invalid email regex"),
            phone_regex: Regex::new(r"(\+44\s?7\d{9}|\+44\s?\d{10}|07\d{9}|\d{11})")
                .expect("invalid phone regex"),
            degree_regex: Regex::new(r"(BSc|MSc|PhD|BA|MA|MEng|BEng)\s+[A-Za-z\s]+")
                .expect("invalid degree regex"),
            year_regex: Regex::new(r"\b(19|20)\d{2}\b").expect("invalid year regex"),
            university_regex: Regex::new(r"University of \w+|[A-Z][a-z]+ University|[A-Z][a-z]+ College")
                .expect("invalid university regex"),
            name_token_regex: Regex::new(r"^[A-Z][a-z]+$").expect("invalid name token regex"),
        }
    }

    /// First line of 2-4 capitalized words that is not an email or phone
    /// line.
    pub fn extract_name(&self, text: &str) -> String {
        for line in text.lines().map(|l| l.trim()) {
            if line.is_empty()
                || line.contains('@')
                || line.contains('+')
                || line.to_lowercase().contains("email")
            {
                continue;
            }
            let words: Vec<&str> = line.split_whitespace().collect();
            if (2..=4).contains(&words.len())
                && words.iter().all(|w| self.name_token_regex.is_match(w))
            {
                return line.to_string();
            }
        }
        String::new()
    }

    pub fn extract_email(&self, text: &str) -> String {
        self.email_regex
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    pub fn extract_phone(&self, text: &str) -> String {
        self.phone_regex
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    /// Known UK universities first, generic university pattern as fallback.
    pub fn extract_university(&self, text: &str) -> String {
        for university in UK_UNIVERSITIES {
            if text.contains(university) {
                return university.to_string();
            }
        }
        self.university_regex
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    pub fn extract_degree(&self, text: &str) -> String {
        self.degree_regex
            .find(text)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default()
    }

    /// Most recent 4-digit year in [2000, 2025], empty if none.
    pub fn extract_graduation_year(&self, text: &str) -> String {
        self.year_regex
            .find_iter(text)
            .filter_map(|m| m.as_str().parse::<u32>().ok())
            .filter(|year| (2000..=2025).contains(year))
            .max()
            .map(|year| year.to_string())
            .unwrap_or_default()
    }

    pub fn extract_education_lines(&self, lines: &[&str], cap: usize) -> Vec<String> {
        collect_section_lines(
            lines,
            &["education", "qualifications"],
            &["experience", "skills", "projects"],
            cap,
        )
    }

    pub fn extract_experience_lines(&self, lines: &[&str], cap: usize) -> Vec<String> {
        collect_section_lines(
            lines,
            &["experience", "employment", "work history"],
            &["education", "skills", "projects"],
            cap,
        )
    }

    pub fn extract_project_lines(&self, lines: &[&str], cap: usize) -> Vec<String> {
        collect_section_lines(
            lines,
            &["projects", "portfolio"],
            &["education", "skills", "experience"],
            cap,
        )
    }
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Stateful line scan: a line mentioning an `enter` keyword opens the
/// section, one mentioning an `exit` keyword closes it; sufficiently long
/// lines in between are collected, up to `cap`.
fn collect_section_lines(lines: &[&str], enter: &[&str], exit: &[&str], cap: usize) -> Vec<String> {
    let mut collected = Vec::new();
    let mut inside = false;

    for line in lines {
        let lower = line.to_lowercase();

        if enter.iter().any(|kw| lower.contains(kw)) {
            inside = true;
            continue;
        }
        if exit.iter().any(|kw| lower.contains(kw)) {
            inside = false;
        }

        if inside && line.len() > 10 {
            collected.push(line.to_string());
            if collected.len() == cap {
                break;
            }
        }
    }

    collected
}
