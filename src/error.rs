use thiserror::Error;

use crate::location::Location;
use crate::part::Part;

#[derive(Debug, Error)]
pub enum Error {
    /// 1〜200の範囲外の設問番号
    #[error("設問番号 {0} は 1〜200 の範囲外です")]
    OutOfRange(u32),
    /// Part 6/7 のグループサイズが未取得
    #[error("{0} のグループサイズが指定されていません")]
    MissingGroupSizes(Part),
    /// グループサイズの内容が不正
    #[error("{part} のグループサイズが不正です: {reason}")]
    InvalidGroupSizes { part: Part, reason: String },
    /// グループサイズの合計が設問番号に届かない
    #[error("設問番号 {question} は {part} のグループサイズの範囲外です")]
    UncoveredQuestion { question: u16, part: Part },
    /// 存在しない位置
    #[error("位置 {0} は存在しません")]
    InvalidLocation(Location),
    /// 進捗率の分母が0
    #[error("設問総数は1以上である必要があります")]
    InvalidTotal,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
