/// Comment-delimited blocks on a lens page
///
/// Each category of cross-reference on a lens page sits between a pair of
/// HTML comments. The ebook block is closed by `<!-- #topicEBooksBlock -->`
/// rather than a matching END comment.
use crate::product::ProductType;

/// A named region of a lens page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Block {
    StudyGuide,
    Encyclopedia,
    Ebooks,
    Biography,
    Essays,
    LessonPlan,
}

impl Block {
    /// Comment that opens the block
    pub fn begin_marker(&self) -> &'static str {
        match self {
            Self::StudyGuide => "<!-- BEGIN STUDY GUIDE BLOCK -->",
            Self::Encyclopedia => "<!-- BEGIN ENCYCLOPEDIA BLOCK -->",
            Self::Ebooks => "<!-- BEGIN EBOOKS BLOCK -->",
            Self::Biography => "<!-- BEGIN BIOGRAPHY BLOCK -->",
            Self::Essays => "<!-- BEGIN ESSAYS BLOCK -->",
            Self::LessonPlan => "<!-- BEGIN LESSON PLAN CONTENTS BLOCK -->",
        }
    }

    /// Comment that closes the block
    pub fn end_marker(&self) -> &'static str {
        match self {
            Self::StudyGuide => "<!-- END STUDY GUIDE BLOCK -->",
            Self::Encyclopedia => "<!-- END ENCYCLOPEDIA BLOCK -->",
            Self::Ebooks => "<!-- #topicEBooksBlock -->",
            Self::Biography => "<!-- END BIOGRAPHY BLOCK -->",
            Self::Essays => "<!-- END ESSAYS BLOCK -->",
            Self::LessonPlan => "<!-- END LESSON PLAN CONTENTS BLOCK -->",
        }
    }

    /// Type given to every product found in the block
    pub fn product_type(&self) -> ProductType {
        match self {
            Self::StudyGuide => ProductType::StudyGuide,
            Self::Encyclopedia => ProductType::Encyclopedia,
            Self::Ebooks => ProductType::Ebook,
            Self::Biography => ProductType::Biography,
            Self::Essays => ProductType::Essay,
            Self::LessonPlan => ProductType::LessonPlan,
        }
    }

    /// Returns true if only the first link in the block is kept
    ///
    /// A lens covers a single work, so it has one study guide and one lesson
    /// plan even when the block repeats or lists more links.
    pub fn first_only(&self) -> bool {
        matches!(self, Self::StudyGuide | Self::LessonPlan)
    }

    /// Returns all blocks
    pub fn all() -> [Self; 6] {
        [
            Self::StudyGuide,
            Self::Encyclopedia,
            Self::Ebooks,
            Self::Biography,
            Self::Essays,
            Self::LessonPlan,
        ]
    }

    /// Blocks that make up a study pack, in pack order
    pub fn study_pack() -> [Self; 5] {
        [
            Self::StudyGuide,
            Self::Encyclopedia,
            Self::Ebooks,
            Self::Biography,
            Self::Essays,
        ]
    }
}
