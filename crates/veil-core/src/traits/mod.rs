mod operator;
mod recognizer;
mod sanitizer;

pub use operator::IOperator;
pub use recognizer::IRecognizer;
pub use sanitizer::ISanitizer;
