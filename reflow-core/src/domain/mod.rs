//! Line-level components of the reconstruction pipeline
//!
//! Leaves first: the classifier and the uppercase-run stripper are pure;
//! the dehyphenator and the paragraph assembler each own a single-slot
//! buffer that is never shared.

pub mod assembler;
pub mod classifier;
pub mod dehyphenator;
pub mod terminator;
pub mod uppercase;

pub use assembler::{AssemblerInput, Paragraph, ParagraphAssembler};
pub use classifier::{is_mostly_upper, uppercase_ratio, DiscardReason, LineClassifier, Verdict};
pub use dehyphenator::Dehyphenator;
pub use terminator::SentenceTerminals;
pub use uppercase::UppercaseRunStripper;
