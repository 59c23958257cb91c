use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::group_sizes::GroupSizes;
use crate::location::Location;
use crate::part::Part;

/// 問題文にぶら下がる1設問
#[derive(Debug, Clone, Deserialize)]
pub struct SubQuestion {
    pub content: String,
    #[serde(default)]
    pub choices: Vec<String>,
    /// 正解の選択肢（A〜D）
    pub answer: Option<char>,
    pub explanation: Option<String>,
}

/// Part 6/7 の問題文
#[derive(Debug, Clone, Deserialize)]
pub struct Passage {
    pub id: String,
    pub part: Part,
    pub title: Option<String>,
    pub questions: Vec<SubQuestion>,
}

/// レッスン教材サービスから取得した問題文一覧
///
/// ファイル内の並び順がそのまま表示順になる。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PassageCatalog {
    pub passages: Vec<Passage>,
}

impl PassageCatalog {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let catalog: PassageCatalog = serde_json::from_reader(reader)?;
        debug!(passages = catalog.passages.len(), "問題文を読み込みました");
        Ok(catalog)
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Self::from_reader(reader)
    }

    /// パートの問題文を表示順に取得する
    pub fn passages_in(&self, part: Part) -> impl Iterator<Item = &Passage> + '_ {
        self.passages
            .iter()
            .filter(move |passage| passage.part == part)
    }

    /// Part 6/7 のグループサイズを組み立てる
    ///
    /// 問題文1つが1グループ、設問数がそのグループサイズになる。
    /// 設問数が `u16` に収まらない問題文があれば `InvalidGroupSizes`。
    pub fn group_sizes(&self) -> Result<GroupSizes> {
        let mut sizes = GroupSizes::new();
        for passage in &self.passages {
            if passage.part.group_size().is_some() {
                warn!(id = %passage.id, part = %passage.part, "固定長パートの問題文は無視します");
            }
        }
        for part in [Part::TextCompletion, Part::ReadingComprehension] {
            let part_sizes = self
                .passages_in(part)
                .map(|passage| {
                    let len = passage.questions.len();
                    u16::try_from(len).map_err(|_| Error::InvalidGroupSizes {
                        part,
                        reason: format!("問題文 {} の設問数 {} が多すぎます", passage.id, len),
                    })
                })
                .collect::<Result<Vec<u16>>>()?;
            if !part_sizes.is_empty() {
                sizes.insert(part, part_sizes);
            }
        }
        Ok(sizes)
    }

    /// 位置に対応する問題文
    pub fn passage(&self, location: &Location) -> Option<&Passage> {
        if location.part.group_size().is_some() {
            return None;
        }
        self.passages_in(location.part).nth(location.group_index)
    }

    /// 位置に対応する設問
    pub fn sub_question(&self, location: &Location) -> Option<&SubQuestion> {
        self.passage(location)?
            .questions
            .get(location.offset_in_group)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::locator::QuestionLocator;

    const CATALOG: &str = r#"{
        "passages": [
            {
                "id": "tc-1",
                "part": 6,
                "title": "Memo",
                "questions": [
                    { "content": "(131)", "choices": ["A", "B", "C", "D"], "answer": "A" },
                    { "content": "(132)" },
                    { "content": "(133)" }
                ]
            },
            {
                "id": "tc-2",
                "part": 6,
                "questions": [
                    { "content": "(134)" },
                    { "content": "(135)" },
                    { "content": "(136)" },
                    { "content": "(137)", "explanation": "past tense" },
                    { "content": "(138)" }
                ]
            },
            {
                "id": "rc-1",
                "part": 7,
                "questions": [
                    { "content": "(147)" },
                    { "content": "(148)" }
                ]
            },
            {
                "id": "photo-1",
                "part": 1,
                "questions": [
                    { "content": "(1)" }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_from_reader() {
        let catalog = PassageCatalog::from_reader(CATALOG.as_bytes()).unwrap();
        assert_eq!(catalog.passages.len(), 4);
        assert_eq!(catalog.passages[0].part, Part::TextCompletion);
        assert_eq!(catalog.passages[0].questions[0].choices.len(), 4);
        assert_eq!(catalog.passages[0].questions[0].answer, Some('A'));
        assert!(catalog.passages[1].questions[0].choices.is_empty());
    }

    #[test]
    fn test_from_reader_rejects_unknown_part() {
        let json = r#"{ "passages": [ { "id": "x", "part": 8, "questions": [] } ] }"#;
        assert!(PassageCatalog::from_reader(json.as_bytes()).is_err());
    }

    #[test]
    fn test_group_sizes() {
        let catalog = PassageCatalog::from_reader(CATALOG.as_bytes()).unwrap();
        let sizes = catalog.group_sizes().unwrap();
        assert_eq!(sizes.get(Part::TextCompletion), Some(&[3, 5][..]));
        assert_eq!(sizes.get(Part::ReadingComprehension), Some(&[2][..]));
        assert_eq!(sizes.get(Part::Photographs), None);
    }

    #[test]
    fn test_group_sizes_rejects_oversized_passage() {
        let question = SubQuestion {
            content: String::new(),
            choices: Vec::new(),
            answer: None,
            explanation: None,
        };
        let catalog = PassageCatalog {
            passages: vec![Passage {
                id: "tc-huge".to_string(),
                part: Part::TextCompletion,
                title: None,
                questions: vec![question; usize::from(u16::MAX) + 2],
            }],
        };
        assert!(matches!(
            catalog.group_sizes(),
            Err(Error::InvalidGroupSizes {
                part: Part::TextCompletion,
                ..
            })
        ));
    }

    #[test]
    fn test_sub_question() {
        let catalog = PassageCatalog::from_reader(CATALOG.as_bytes()).unwrap();
        let sizes = catalog.group_sizes().unwrap();
        let locator = QuestionLocator::new(&sizes);

        let location = locator.locate(137).unwrap();
        assert_eq!(location, Location::new(Part::TextCompletion, 1, 3));
        assert_eq!(catalog.passage(&location).map(|p| p.id.as_str()), Some("tc-2"));
        let question = catalog.sub_question(&location).unwrap();
        assert_eq!(question.content, "(137)");
        assert_eq!(question.explanation.as_deref(), Some("past tense"));

        let location = locator.locate(148).unwrap();
        assert_eq!(catalog.sub_question(&location).unwrap().content, "(148)");

        assert!(catalog
            .sub_question(&Location::new(Part::Photographs, 0, 0))
            .is_none());
        assert!(catalog
            .sub_question(&Location::new(Part::TextCompletion, 2, 0))
            .is_none());
    }
}
