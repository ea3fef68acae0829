/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    /// 1-based position of the cursor.
    pub number: usize,
    pub total: usize,
    pub answered: usize,
    /// Cursor position as a share of the total, 0 to 100.
    pub percent: u8,
}

impl QuizProgress {
    pub(crate) fn new(current_index: usize, total: usize, answered: usize) -> Self {
        let number = if total == 0 { 0 } else { current_index + 1 };
        let percent = if total == 0 {
            0
        } else {
            u8::try_from(number.saturating_mul(100) / total).unwrap_or(100)
        };
        Self {
            number,
            total,
            answered,
            percent,
        }
    }
}
