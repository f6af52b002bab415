/// Product type definitions
///
/// Every link the client resolves is tagged with exactly one of these types.
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// The kind of content a link points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductType {
    /// Link could not be classified
    Unknown,

    LessonPlan,

    /// Aggregation page listing every product for one work
    Lens,

    StudyGuide,

    /// Encyclopedia / reference articles
    Encyclopedia,

    Ebook,

    Biography,

    Essay,
}

impl ProductType {
    /// Returns true if links of this type resolve to a standalone product
    ///
    /// Lesson plans and lenses are reached through a study plan instead.
    pub fn is_generic_product(&self) -> bool {
        !matches!(self, Self::Unknown | Self::LessonPlan | Self::Lens)
    }

    /// Returns true if a study plan can be reached from links of this type
    pub fn is_study_plan_source(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Returns the kebab-case name used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::LessonPlan => "lesson-plan",
            Self::Lens => "lens",
            Self::StudyGuide => "study-guide",
            Self::Encyclopedia => "encyclopedia",
            Self::Ebook => "ebook",
            Self::Biography => "biography",
            Self::Essay => "essay",
        }
    }

    /// Returns all product types
    pub fn all() -> [Self; 8] {
        [
            Self::Unknown,
            Self::LessonPlan,
            Self::Lens,
            Self::StudyGuide,
            Self::Encyclopedia,
            Self::Ebook,
            Self::Biography,
            Self::Essay,
        ]
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown product type '{}'", s))
    }
}
