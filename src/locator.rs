use crate::error::{Error, Result};
use crate::group_sizes::GroupSizes;
use crate::location::{Direction, Location, Step};
use crate::part::Part;

/// 設問番号と位置の相互変換、および前後移動
///
/// 状態を持たない。Part 6/7 のグループサイズは呼び出し側が
/// 問題文データから組み立てて渡す。
#[derive(Debug, Clone, Copy)]
pub struct QuestionLocator<'a> {
    sizes: &'a GroupSizes,
}

impl QuestionLocator<'static> {
    /// 標準構成のグループサイズを使う
    pub fn standard() -> Self {
        Self::new(GroupSizes::standard())
    }
}

impl<'a> QuestionLocator<'a> {
    pub fn new(sizes: &'a GroupSizes) -> Self {
        Self { sizes }
    }

    pub fn part_for_question(&self, question_no: u32) -> Result<Part> {
        Part::for_question(question_no)
    }

    pub fn start_of(&self, part: Part) -> u16 {
        part.start()
    }

    /// 設問番号から位置を求める
    pub fn locate(&self, question_no: u32) -> Result<Location> {
        let part = Part::for_question(question_no)?;
        // for_question が 1〜200 を保証している
        let question_no = question_no as u16;
        let groups = self.sizes.groups(part)?;
        let (group_index, offset_in_group) =
            groups
                .split(question_no - part.start())
                .ok_or(Error::UncoveredQuestion {
                    question: question_no,
                    part,
                })?;
        Ok(Location::new(part, group_index, offset_in_group))
    }

    /// 位置から設問番号を求める。`locate` の逆変換。
    pub fn question_number(&self, location: &Location) -> Result<u16> {
        let groups = self.sizes.groups(location.part)?;
        let size = groups
            .size_of(location.group_index)
            .ok_or(Error::InvalidLocation(*location))?;
        if location.offset_in_group >= usize::from(size) {
            return Err(Error::InvalidLocation(*location));
        }
        let before = groups
            .questions_before(location.group_index)
            .ok_or(Error::InvalidLocation(*location))?;
        Ok(location.part.start() + before + location.offset_in_group as u16)
    }

    pub fn total_questions(&self, part: Part) -> Result<u16> {
        Ok(self.sizes.groups(part)?.total())
    }

    /// 1問進む、または戻る
    ///
    /// グループ内、次のグループ、次のパートの順に移動先を探す。
    /// 1問目より前、200問目より後は `Step::AtBoundary`。
    pub fn advance(&self, location: &Location, direction: Direction) -> Result<Step> {
        // 存在しない位置からは移動しない
        self.question_number(location)?;
        let groups = self.sizes.groups(location.part)?;
        let size = usize::from(groups.size_of(location.group_index).unwrap_or_default());

        match direction {
            Direction::Forward => {
                if location.offset_in_group + 1 < size {
                    return Ok(Step::Moved(Location::new(
                        location.part,
                        location.group_index,
                        location.offset_in_group + 1,
                    )));
                }
                if location.group_index + 1 < groups.count() {
                    return Ok(Step::Moved(Location::new(
                        location.part,
                        location.group_index + 1,
                        0,
                    )));
                }
                match location.part.next() {
                    Some(next) => {
                        self.sizes.groups(next)?;
                        Ok(Step::Moved(Location::first_of(next)))
                    }
                    None => Ok(Step::AtBoundary),
                }
            }
            Direction::Backward => {
                if location.offset_in_group > 0 {
                    return Ok(Step::Moved(Location::new(
                        location.part,
                        location.group_index,
                        location.offset_in_group - 1,
                    )));
                }
                if location.group_index > 0 {
                    let group_index = location.group_index - 1;
                    let size = groups.size_of(group_index).unwrap_or_default();
                    return Ok(Step::Moved(Location::new(
                        location.part,
                        group_index,
                        usize::from(size) - 1,
                    )));
                }
                match location.part.previous() {
                    Some(previous) => Ok(Step::Moved(self.last_of(previous)?)),
                    None => Ok(Step::AtBoundary),
                }
            }
        }
    }

    /// パートの最後の位置
    pub fn last_of(&self, part: Part) -> Result<Location> {
        let groups = self.sizes.groups(part)?;
        let group_index = groups.count() - 1;
        let size = groups.size_of(group_index).unwrap_or_default();
        Ok(Location::new(part, group_index, usize::from(size) - 1))
    }
}
