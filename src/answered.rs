use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::location::Location;
use crate::locator::QuestionLocator;
use crate::part::{Part, FIRST_QUESTION, LAST_QUESTION, TOTAL_QUESTIONS};

/// 回答済みの設問番号の集合
///
/// 外部の回答記録から組み立てる派生データ。進捗表示と
/// 設問一覧の強調表示にだけ使う。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnsweredSet {
    answered: BTreeSet<u16>,
}

impl AnsweredSet {
    /// 回答記録から集合を組み立てる
    /// 重複は1つにまとめ、1〜200以外の番号は無視する。
    pub fn build<I>(facts: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        let mut set = Self::default();
        for question_no in facts {
            set.insert(question_no);
        }
        set
    }

    /// 回答を記録する。範囲外の番号なら `false`。
    pub fn insert(&mut self, question_no: u32) -> bool {
        match u16::try_from(question_no) {
            Ok(no) if (FIRST_QUESTION..=LAST_QUESTION).contains(&no) => {
                self.answered.insert(no);
                true
            }
            _ => false,
        }
    }

    pub fn contains(&self, question_no: u16) -> bool {
        self.answered.contains(&question_no)
    }

    pub fn len(&self) -> usize {
        self.answered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answered.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.answered.iter().copied()
    }

    /// 進捗率（0〜100、四捨五入）
    pub fn completion_percentage(&self, total: u32) -> Result<u8> {
        if total == 0 {
            return Err(Error::InvalidTotal);
        }
        let percentage = (100.0 * self.len() as f64 / f64::from(total)).round();
        Ok(percentage.min(100.0) as u8)
    }

    /// 全200問に対する進捗率
    pub fn exam_completion(&self) -> u8 {
        self.completion_percentage(TOTAL_QUESTIONS.into())
            .unwrap_or_default()
    }

    pub fn answered_in_part(&self, part: Part) -> usize {
        self.answered.range(part.range()).count()
    }

    /// 未回答の最初の設問番号。全問回答済みなら `None`。
    pub fn first_unanswered(&self) -> Option<u16> {
        (FIRST_QUESTION..=LAST_QUESTION).find(|no| !self.answered.contains(no))
    }

    /// 途中再開する位置
    ///
    /// 未回答の設問が問題文データの範囲外にしか無い場合も、
    /// 再開できる設問が無いので `None`。
    pub fn resume_location(&self, locator: &QuestionLocator<'_>) -> Result<Option<Location>> {
        let Some(no) = self.first_unanswered() else {
            return Ok(None);
        };
        match locator.locate(no.into()) {
            Ok(location) => Ok(Some(location)),
            Err(Error::UncoveredQuestion { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl FromIterator<u32> for AnsweredSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self::build(iter)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::group_sizes::GroupSizes;

    #[test]
    fn test_build_dedupes() {
        let set = AnsweredSet::build([1, 1, 2, 3]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_build_ignores_out_of_range() {
        let set: AnsweredSet = [0, 5, 200, 201, 70_000].into_iter().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![5, 200]);
    }

    #[test]
    fn test_completion_percentage() {
        let set = AnsweredSet::build([1, 1, 2, 3]);
        assert_eq!(set.completion_percentage(200).unwrap(), 2);
        assert_eq!(set.exam_completion(), 2);
        assert_eq!(set.completion_percentage(3).unwrap(), 100);
        assert_eq!(set.completion_percentage(2).unwrap(), 100);
        assert_eq!(set.completion_percentage(8).unwrap(), 38);
        assert_eq!(AnsweredSet::default().completion_percentage(200).unwrap(), 0);
        assert!(matches!(
            set.completion_percentage(0),
            Err(Error::InvalidTotal)
        ));
    }

    #[test]
    fn test_answered_in_part() {
        let set = AnsweredSet::build([1, 6, 7, 32, 33, 34, 200]);
        assert_eq!(set.answered_in_part(Part::Photographs), 2);
        assert_eq!(set.answered_in_part(Part::QuestionResponse), 1);
        assert_eq!(set.answered_in_part(Part::Conversations), 3);
        assert_eq!(set.answered_in_part(Part::TextCompletion), 0);
        assert_eq!(set.answered_in_part(Part::ReadingComprehension), 1);
    }

    #[test]
    fn test_resume_location() {
        let locator = QuestionLocator::standard();
        let set = AnsweredSet::build(1..=33);
        assert_eq!(set.first_unanswered(), Some(34));
        assert_eq!(
            set.resume_location(&locator).unwrap(),
            Some(Location::new(Part::Conversations, 0, 2))
        );

        assert!(set.contains(33));
        assert!(!set.contains(34));

        let finished = AnsweredSet::build(1..=200);
        assert_eq!(finished.first_unanswered(), None);
        assert_eq!(finished.resume_location(&locator).unwrap(), None);
        assert_eq!(finished.exam_completion(), 100);
    }

    #[test]
    fn test_resume_location_beyond_supplied_sizes() {
        let sizes = GroupSizes::new()
            .with_part(Part::TextCompletion, vec![4, 4, 4, 4])
            .with_part(Part::ReadingComprehension, vec![2, 3]);
        let locator = QuestionLocator::new(&sizes);
        let set = AnsweredSet::build(1..=151);
        assert_eq!(set.first_unanswered(), Some(152));
        assert_eq!(set.resume_location(&locator).unwrap(), None);

        let set = AnsweredSet::build(1..=149);
        assert_eq!(
            set.resume_location(&locator).unwrap(),
            Some(Location::new(Part::ReadingComprehension, 1, 1))
        );
    }
}
