pub mod source;
pub mod wc;

pub use source::TextSource;
