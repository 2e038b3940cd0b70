use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionBlock {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    pub questions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingOption {
    pub value: u8,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryOption {
    pub code: String,
    pub flag: String,
    pub name: String,
    pub placeholder: String,
}

/// Validated content for one session. Built through `content::load_content`
/// or `content::builtin`, both of which guarantee at least one block, no
/// empty block and a non-empty rating scale.
#[derive(Debug, Clone)]
pub struct EvaluationContent {
    pub blocks: Vec<QuestionBlock>,
    pub scale: Vec<RatingOption>,
    pub countries: Vec<CountryOption>,
}

impl EvaluationContent {
    pub fn total_questions(&self) -> usize {
        self.blocks.iter().map(|b| b.questions.len()).sum()
    }

    pub fn questions_in_block(&self, block: usize) -> usize {
        self.blocks.get(block).map_or(0, |b| b.questions.len())
    }

    /// Zero-based position of `(block, question)` counting across all blocks.
    pub fn global_index(&self, block: usize, question: usize) -> usize {
        self.blocks
            .iter()
            .take(block)
            .map(|b| b.questions.len())
            .sum::<usize>()
            + question
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInfo {
    pub name: String,
    pub country: CountryOption,
    pub phone_digits: String,
}

impl ContactInfo {
    pub fn full_number(&self) -> String {
        format!("{}{}", self.country.code, self.phone_digits)
    }
}
