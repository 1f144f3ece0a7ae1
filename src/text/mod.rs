// Text normalization: lowercasing, symbol stripping, stopword removal.

pub mod normalize;
pub mod stopwords;
