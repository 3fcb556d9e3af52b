use serde::Deserialize;
use std::io;

/// One alphabet card: the letter plus its example word and picture.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LetterExample {
    pub letter: String,
    pub word: String,
    pub emoji: String,
}

/// One image-recognition question. `answer` is the text of the correct
/// option, matching the bank format rather than an index.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ImageQuestion {
    pub question: String,
    pub image: String,
    pub options: Vec<String>,
    pub answer: String,
}

/// One sentence-formation level. The words are stored in the correct
/// order; the target sentence is their join.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SentenceLevel {
    pub words: Vec<String>,
}

impl SentenceLevel {
    pub fn correct_sentence(&self) -> String {
        self.words.join(" ")
    }
}

const ALPHABET_JSON: &str = include_str!("../assets/alphabet.json");
const IMAGE_QUIZ_JSON: &str = include_str!("../assets/image_quiz.json");
const SENTENCES_JSON: &str = include_str!("../assets/sentences.json");

fn parse<T: for<'de> Deserialize<'de>>(raw: &str, what: &str) -> io::Result<T> {
    serde_json::from_str(raw)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("{}: {}", what, e)))
}

pub fn letter_examples() -> io::Result<Vec<LetterExample>> {
    parse(ALPHABET_JSON, "alphabet bank")
}

pub fn image_questions() -> io::Result<Vec<ImageQuestion>> {
    parse(IMAGE_QUIZ_JSON, "image quiz bank")
}

pub fn sentence_levels() -> io::Result<Vec<SentenceLevel>> {
    parse(SENTENCES_JSON, "sentence bank")
}

/// Everything the module screens need, loaded once at startup.
#[derive(Debug, Clone)]
pub struct ContentBank {
    pub letters: Vec<LetterExample>,
    pub image_questions: Vec<ImageQuestion>,
    pub sentence_levels: Vec<SentenceLevel>,
}

impl ContentBank {
    pub fn load() -> io::Result<Self> {
        Ok(Self {
            letters: letter_examples()?,
            image_questions: image_questions()?,
            sentence_levels: sentence_levels()?,
        })
    }
}
