pub mod generate;
pub mod openai;
