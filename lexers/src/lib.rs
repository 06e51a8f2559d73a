mod scanner;
mod char_scanner;
mod math_tokenizer;

pub use scanner::Scanner;
pub use math_tokenizer::{MathTokenizer, MathToken};
pub use math_tokenizer::{tokenize, is_number, parse_number};
