use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// 最初の設問番号
pub const FIRST_QUESTION: u16 = 1;
/// 最後の設問番号
pub const LAST_QUESTION: u16 = 200;
/// 全設問数
pub const TOTAL_QUESTIONS: u16 = LAST_QUESTION - FIRST_QUESTION + 1;

/// TOEIC の7パート
///
/// 設問番号の範囲は固定で、1〜200を隙間なく分割する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Part {
    /// Part 1 写真描写問題
    Photographs = 1,
    /// Part 2 応答問題
    QuestionResponse = 2,
    /// Part 3 会話問題
    Conversations = 3,
    /// Part 4 説明文問題
    ShortTalks = 4,
    /// Part 5 短文穴埋め問題
    IncompleteSentences = 5,
    /// Part 6 長文穴埋め問題
    TextCompletion = 6,
    /// Part 7 読解問題
    ReadingComprehension = 7,
}

impl Part {
    pub const ALL: [Part; 7] = [
        Part::Photographs,
        Part::QuestionResponse,
        Part::Conversations,
        Part::ShortTalks,
        Part::IncompleteSentences,
        Part::TextCompletion,
        Part::ReadingComprehension,
    ];

    /// 設問番号からパートを求める
    pub fn for_question(question_no: u32) -> Result<Part> {
        match question_no {
            ref no if (1..=6).contains(no) => Ok(Part::Photographs),
            ref no if (7..=31).contains(no) => Ok(Part::QuestionResponse),
            ref no if (32..=70).contains(no) => Ok(Part::Conversations),
            ref no if (71..=100).contains(no) => Ok(Part::ShortTalks),
            ref no if (101..=130).contains(no) => Ok(Part::IncompleteSentences),
            ref no if (131..=146).contains(no) => Ok(Part::TextCompletion),
            ref no if (147..=200).contains(no) => Ok(Part::ReadingComprehension),
            _ => Err(Error::OutOfRange(question_no)),
        }
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    /// パート先頭の設問番号
    pub fn start(self) -> u16 {
        *self.range().start()
    }

    /// パート末尾の設問番号
    pub fn end(self) -> u16 {
        *self.range().end()
    }

    pub fn range(self) -> RangeInclusive<u16> {
        match self {
            Part::Photographs => 1..=6,
            Part::QuestionResponse => 7..=31,
            Part::Conversations => 32..=70,
            Part::ShortTalks => 71..=100,
            Part::IncompleteSentences => 101..=130,
            Part::TextCompletion => 131..=146,
            Part::ReadingComprehension => 147..=200,
        }
    }

    /// 範囲上の設問数
    pub fn question_count(self) -> u16 {
        self.end() - self.start() + 1
    }

    /// 1つの音声・問題文にぶら下がる設問数
    ///
    /// Part 6/7 は問題文ごとに設問数が変わるため `None`。
    pub fn group_size(self) -> Option<u16> {
        match self {
            Part::Photographs | Part::QuestionResponse | Part::IncompleteSentences => Some(1),
            Part::Conversations | Part::ShortTalks => Some(3),
            Part::TextCompletion | Part::ReadingComprehension => None,
        }
    }

    pub fn next(self) -> Option<Part> {
        Part::try_from(self.number() + 1).ok()
    }

    pub fn previous(self) -> Option<Part> {
        Part::try_from(self.number() - 1).ok()
    }

    pub fn title(self) -> &'static str {
        match self {
            Part::Photographs => "Photographs",
            Part::QuestionResponse => "Question-Response",
            Part::Conversations => "Conversations",
            Part::ShortTalks => "Short Talks",
            Part::IncompleteSentences => "Incomplete Sentences",
            Part::TextCompletion => "Text Completion",
            Part::ReadingComprehension => "Reading Comprehension",
        }
    }
}

impl TryFrom<u8> for Part {
    type Error = Error;

    fn try_from(number: u8) -> Result<Self> {
        Part::ALL
            .get(usize::from(number).wrapping_sub(1))
            .copied()
            .ok_or(Error::OutOfRange(number.into()))
    }
}

impl From<Part> for u8 {
    fn from(part: Part) -> Self {
        part.number()
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Part {}", self.number())
    }
}
