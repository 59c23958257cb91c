//! TOEIC 200問の設問番号と構造上の位置（パート・グループ・グループ内位置）の
//! 相互変換、前後移動、回答進捗の集計。

pub mod answered;
pub mod bulk;
pub mod catalog;
pub mod error;
pub mod group_sizes;
pub mod location;
pub mod locator;
pub mod logging;
pub mod part;

pub use answered::AnsweredSet;
pub use bulk::{read_bulk, report_line, AnswerRecord};
pub use catalog::{Passage, PassageCatalog, SubQuestion};
pub use error::{Error, Result};
pub use group_sizes::{GroupSizes, PartGroups, STANDARD_GROUP_SIZES};
pub use location::{Direction, Location, Step};
pub use locator::QuestionLocator;
pub use part::{Part, FIRST_QUESTION, LAST_QUESTION, TOTAL_QUESTIONS};
