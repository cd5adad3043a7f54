//! HUD text for the JavaScript host

/// Score line, e.g. "Score: 12"
pub fn score_text(points: u32) -> String {
    format!("Score: {points}")
}

/// Timer line showing whole seconds remaining, e.g. "Time: 59"
pub fn timer_text(remaining_ms: u32) -> String {
    let seconds = (remaining_ms as f32 / 1000.0).round() as u32;
    format!("Time: {seconds}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_text() {
        assert_eq!(score_text(0), "Score: 0");
        assert_eq!(score_text(12), "Score: 12");
    }

    #[test]
    fn test_timer_text_rounds_to_whole_seconds() {
        assert_eq!(timer_text(60_000), "Time: 60");
        assert_eq!(timer_text(59_400), "Time: 59");
        assert_eq!(timer_text(59_600), "Time: 60");
        assert_eq!(timer_text(0), "Time: 0");
    }
}
