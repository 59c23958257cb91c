use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::error::{Error, Result};
use crate::part::Part;

/// 公式問題集と同じ標準的な問題文構成
///
/// Part 6 は4問ずつの4文書、Part 7 はシングルパッセージ29問、
/// ダブルパッセージ5問×3、トリプルパッセージ5問×2。
pub static STANDARD_GROUP_SIZES: Lazy<GroupSizes> = Lazy::new(|| {
    GroupSizes::new()
        .with_part(Part::TextCompletion, vec![4, 4, 4, 4])
        .with_part(
            Part::ReadingComprehension,
            vec![2, 2, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 5],
        )
});

/// パートごとのグループ（音声・問題文）の設問数の並び
///
/// Part 6/7 の値だけが参照される。Part 1〜5 は固定長なので、
/// 値を入れても無視される。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupSizes {
    sizes: BTreeMap<Part, Vec<u16>>,
}

impl GroupSizes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn standard() -> &'static GroupSizes {
        &STANDARD_GROUP_SIZES
    }

    pub fn with_part(mut self, part: Part, sizes: impl Into<Vec<u16>>) -> Self {
        self.insert(part, sizes);
        self
    }

    /// 表示順のグループサイズを設定する。既存の値は置き換える。
    pub fn insert(&mut self, part: Part, sizes: impl Into<Vec<u16>>) {
        self.sizes.insert(part, sizes.into());
    }

    pub fn get(&self, part: Part) -> Option<&[u16]> {
        self.sizes.get(&part).map(Vec::as_slice)
    }

    /// パートのグループ構成を取得する
    ///
    /// Part 6/7 は値が無いか空なら `MissingGroupSizes`、
    /// 0問のグループがあるか合計がパートの範囲を超えれば `InvalidGroupSizes`。
    pub fn groups(&self, part: Part) -> Result<PartGroups<'_>> {
        if let Some(size) = part.group_size() {
            return Ok(PartGroups::Fixed {
                size,
                count: usize::from(part.question_count() / size),
            });
        }

        let sizes = self
            .get(part)
            .filter(|sizes| !sizes.is_empty())
            .ok_or(Error::MissingGroupSizes(part))?;
        if let Some(index) = sizes.iter().position(|&size| size == 0) {
            return Err(Error::InvalidGroupSizes {
                part,
                reason: format!("グループ#{} の設問数が0です", index),
            });
        }
        let total: u32 = sizes.iter().map(|&size| u32::from(size)).sum();
        if total > u32::from(part.question_count()) {
            return Err(Error::InvalidGroupSizes {
                part,
                reason: format!(
                    "設問数の合計 {} が {} 問を超えています",
                    total,
                    part.question_count()
                ),
            });
        }
        Ok(PartGroups::Variable(sizes))
    }
}

/// 1パート分のグループ構成
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartGroups<'a> {
    Fixed { size: u16, count: usize },
    Variable(&'a [u16]),
}

impl PartGroups<'_> {
    pub fn count(&self) -> usize {
        match self {
            PartGroups::Fixed { count, .. } => *count,
            PartGroups::Variable(sizes) => sizes.len(),
        }
    }

    pub fn size_of(&self, group_index: usize) -> Option<u16> {
        match self {
            PartGroups::Fixed { size, count } => (group_index < *count).then_some(*size),
            PartGroups::Variable(sizes) => sizes.get(group_index).copied(),
        }
    }

    pub fn total(&self) -> u16 {
        match self {
            PartGroups::Fixed { size, count } => *size * *count as u16,
            PartGroups::Variable(sizes) => sizes.iter().sum(),
        }
    }

    /// 指定グループより前にある設問数
    pub fn questions_before(&self, group_index: usize) -> Option<u16> {
        if group_index >= self.count() {
            return None;
        }
        match self {
            PartGroups::Fixed { size, .. } => Some(*size * group_index as u16),
            PartGroups::Variable(sizes) => Some(sizes.iter().take(group_index).sum()),
        }
    }

    /// パート先頭からの相対位置を (グループ, グループ内位置) に変換する
    ///
    /// 可変長の場合は累計がオフセットを超えるまでグループを辿る。
    pub fn split(&self, offset: u16) -> Option<(usize, usize)> {
        match self {
            PartGroups::Fixed { size, count } => {
                let group_index = usize::from(offset / size);
                (group_index < *count).then_some((group_index, usize::from(offset % size)))
            }
            PartGroups::Variable(sizes) => {
                let mut seen = 0u16;
                for (group_index, &size) in sizes.iter().enumerate() {
                    if seen + size > offset {
                        return Some((group_index, usize::from(offset - seen)));
                    }
                    seen += size;
                }
                None
            }
        }
    }
}
