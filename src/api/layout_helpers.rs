/// Deterministic, backend-independent estimate of rendered label width.
pub(super) fn estimate_label_text_width_px(text: &str, font_size_px: f64) -> f64 {
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' | '%' => 0.42,
            '(' | ')' => 0.38,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    units * font_size_px
}

#[cfg(test)]
mod tests {
    use super::estimate_label_text_width_px;

    #[test]
    fn width_scales_with_font_size_and_length() {
        let small = estimate_label_text_width_px("Savings", 12.0);
        let large = estimate_label_text_width_px("Savings", 24.0);
        assert!((large - 2.0 * small).abs() <= 1e-9);
        assert!(estimate_label_text_width_px("Compound", 12.0) > small);
        assert_eq!(estimate_label_text_width_px("", 12.0), 0.0);
    }
}
