use quiz_core::model::{Question, QuestionRecord};

use super::prompt::QUESTION_COUNT;
use crate::error::MalformedResponse;

/// Decode and validate the generator's text output.
///
/// The payload must be a JSON array of exactly [`QUESTION_COUNT`] question
/// objects. A surrounding Markdown code fence is tolerated.
///
/// # Errors
///
/// Returns `MalformedResponse` when the JSON does not match the declared shape,
/// the count is wrong, or any entry breaks a `Question` invariant. Nothing is
/// returned for partially valid payloads.
pub fn decode_questions(text: &str) -> Result<Vec<Question>, MalformedResponse> {
    let records: Vec<QuestionRecord> =
        serde_json::from_str(strip_code_fence(text)).map_err(|err| MalformedResponse::Json {
            detail: err.to_string(),
        })?;

    if records.len() != QUESTION_COUNT {
        return Err(MalformedResponse::WrongCount {
            expected: QUESTION_COUNT,
            found: records.len(),
        });
    }

    records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| {
            Question::try_from(record).map_err(|source| MalformedResponse::InvalidQuestion {
                position: idx + 1,
                source,
            })
        })
        .collect()
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop an optional language tag on the opening fence line.
    let body = rest.split_once('\n').map_or(rest, |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}
