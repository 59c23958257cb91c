use std::collections::HashMap;
use std::io::Read;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::answered::AnsweredSet;
use crate::error::Result;
use crate::locator::QuestionLocator;

/// 回答記録CSVの1行
#[derive(Debug, Deserialize)]
pub struct AnswerRecord {
    pub submission_id: String,
    pub question_number: u32,
}

/// 回答記録CSVを受験ごとの回答済み集合にまとめる
///
/// ヘッダは `submission_id,question_number`。受験は最初に現れた順に返す。
pub fn read_bulk<R: Read>(reader: R) -> Result<Vec<(String, AnsweredSet)>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut submissions: Vec<(String, AnsweredSet)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in reader.deserialize() {
        let record: AnswerRecord = row?;
        let position = *index
            .entry(record.submission_id.clone())
            .or_insert_with(|| {
                submissions.push((record.submission_id.clone(), AnsweredSet::default()));
                submissions.len() - 1
            });
        if !submissions[position].1.insert(record.question_number) {
            warn!(
                submission = %record.submission_id,
                question = record.question_number,
                "範囲外の設問番号を無視します"
            );
        }
    }
    debug!(submissions = submissions.len(), "回答記録を読み込みました");
    Ok(submissions)
}

/// 受験1件分の進捗行
///
/// 再開位置が求められない場合もエラーを再開位置の欄に書いて行を出す。
pub fn report_line(
    id: &str,
    answered: &AnsweredSet,
    locator: &QuestionLocator<'_>,
    total: u32,
) -> Result<String> {
    let completion = answered.completion_percentage(total)?;
    let resume = match answered.resume_location(locator) {
        Ok(Some(location)) => format!("resume = {}", location),
        Ok(None) => "finished".to_string(),
        Err(e) => {
            warn!(submission = %id, error = %e, "再開位置を求められません");
            format!("resume = ({})", e)
        }
    };
    Ok(format!(
        "id = {}, answered = {}, completion = {}%, {}",
        id,
        answered.len(),
        completion,
        resume
    ))
}
