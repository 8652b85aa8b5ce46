//! Mail content rendering

mod content;
mod html;

pub use content::{
    ANSWER_SUBJECT_SUFFIX, DEFAULT_SUBJECT_PREFIX, DEFAULT_TEST_PREFIX, EmailContent,
    SubjectSettings,
};
pub use html::convert_slashes_to_html_fractions;
