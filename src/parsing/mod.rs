//! Resume text parsing: section segmentation, skill matching, and field
//! extraction.

pub mod fields;
pub mod matcher;
pub mod resume;
pub mod sections;

pub use fields::FieldExtractor;
pub use matcher::{SkillMatch, SkillMatcher};
pub use resume::{ParsedResume, ResumeParser};
pub use sections::{SectionMap, SectionSegmenter, SectionType};
