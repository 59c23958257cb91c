use std::fmt;

use serde::{Deserialize, Serialize};

use crate::part::Part;

/// 設問の構造上の位置
///
/// `group_index` はパート内の音声・問題文の0始まりの番号、
/// `offset_in_group` はその中の設問の0始まりの番号。
/// 表示（`Display`）は1始まり。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    pub part: Part,
    pub group_index: usize,
    pub offset_in_group: usize,
}

impl Location {
    pub fn new(part: Part, group_index: usize, offset_in_group: usize) -> Self {
        Self {
            part,
            group_index,
            offset_in_group,
        }
    }

    /// パートの先頭位置
    pub fn first_of(part: Part) -> Self {
        Self::new(part, 0, 0)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} group#{} offset#{}",
            self.part,
            self.group_index + 1,
            self.offset_in_group + 1
        )
    }
}

/// 移動方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// `advance` の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved(Location),
    /// 試験の先頭または末尾に到達した
    AtBoundary,
}
