//! Section segmentation by header-pattern matching

use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionType {
    Skills,
    Experience,
    Projects,
    Education,
    Certifications,
    Other,
}

impl std::fmt::Display for SectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionType::Skills => write!(f, "skills"),
            SectionType::Experience => write!(f, "experience"),
            SectionType::Projects => write!(f, "projects"),
            SectionType::Education => write!(f, "education"),
            SectionType::Certifications => write!(f, "certifications"),
            SectionType::Other => write!(f, "other"),
        }
    }
}

/// Line range owned by one section. `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionRange {
    pub section: SectionType,
    pub start: usize,
    pub end: usize,
}

/// Per-document section ranges, computed fresh for each parse and discarded
/// after use.
#[derive(Debug, Clone, Default)]
pub struct SectionMap {
    ranges: Vec<SectionRange>,
}

impl SectionMap {
    /// Section owning a line. Lines outside every range are `Other`.
    pub fn section_for_line(&self, line_index: usize) -> SectionType {
        for range in &self.ranges {
            if line_index >= range.start && line_index < range.end {
                return range.section;
            }
        }
        SectionType::Other
    }

    pub fn range_for(&self, section: SectionType) -> Option<&SectionRange> {
        self.ranges.iter().find(|r| r.section == section)
    }

    pub fn ranges(&self) -> &[SectionRange] {
        &self.ranges
    }
}

/// Scans lines for section headers. Header regexes are tested per line in a
/// fixed priority order; the first match wins the line.
pub struct SectionSegmenter {
    headers: Vec<(SectionType, Regex)>,
}

impl SectionSegmenter {
    pub fn new() -> Self {
        let headers = vec![
            (
                SectionType::Skills,
                Regex::new(r"(?i)^(technical\s+skills|skills|technologies|competencies|expertise)")
                    .expect("invalid skills header regex"),
            ),
            (
                SectionType::Experience,
                Regex::new(r"(?i)^(experience|work\s+experience|professional\s+experience|employment)")
                    .expect("invalid experience header regex"),
            ),
            (
                SectionType::Projects,
                Regex::new(r"(?i)^(projects|portfolio|selected\s+projects)")
                    .expect("invalid projects header regex"),
            ),
            (
                SectionType::Education,
                Regex::new(r"(?i)^(education|qualifications|academic\s+background)")
                    .expect("invalid education header regex"),
            ),
            (
                SectionType::Certifications,
                Regex::new(r"(?i)^(certifications|certificates|credentials)")
                    .expect("invalid certifications header regex"),
            ),
        ];
        Self { headers }
    }

    /// Scan top to bottom. A matched header closes the currently open range
    /// at the header's line and opens a new range to end-of-document; a later
    /// header for the same section replaces the earlier range.
    pub fn segment(&self, lines: &[&str]) -> SectionMap {
        let mut map = SectionMap::default();
        let mut open: Option<usize> = None; // index into map.ranges

        for (line_index, line) in lines.iter().enumerate() {
            let trimmed = line.trim();
            let matched = self
                .headers
                .iter()
                .find(|(_, regex)| regex.is_match(trimmed))
                .map(|(section, _)| *section);

            if let Some(section) = matched {
                if let Some(open_idx) = open {
                    map.ranges[open_idx].end = line_index;
                }
                let range = SectionRange {
                    section,
                    start: line_index,
                    end: lines.len(),
                };
                if let Some(existing) = map.ranges.iter().position(|r| r.section == section) {
                    map.ranges[existing] = range;
                    open = Some(existing);
                } else {
                    map.ranges.push(range);
                    open = Some(map.ranges.len() - 1);
                }
            }
        }

        map
    }
}

impl Default for SectionSegmenter {
    fn default() -> Self {
        Self::new()
    }
}
