//! Text shown next to results, badges and thumbnails.

pub fn percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}%", value as i64)
    } else {
        let rounded = (value * 10.0).round() / 10.0;
        format!("{}%", rounded)
    }
}

/// Inline style for a confidence bar filled to `value` percent.
pub fn bar_width(value: f64) -> String {
    let clamped = if value.is_nan() { 0.0 } else { value.clamp(0.0, 100.0) };
    format!("width: {}", percent(clamped))
}

pub fn badge_class(result: &str) -> String {
    result.to_lowercase()
}

pub fn thumbnail_src(image_data: &str) -> String {
    format!("data:image/jpeg;base64,{}", image_data)
}

pub fn welcome(username: &str) -> String {
    format!("Welcome, {}", username)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent() {
        assert_eq!(percent(87.0), "87%");
        assert_eq!(percent(87.5), "87.5%");
        assert_eq!(percent(66.666), "66.7%");
        assert_eq!(percent(0.0), "0%");
    }

    #[test]
    fn test_bar_width_clamps() {
        assert_eq!(bar_width(42.0), "width: 42%");
        assert_eq!(bar_width(140.0), "width: 100%");
        assert_eq!(bar_width(-3.0), "width: 0%");
        assert_eq!(bar_width(f64::NAN), "width: 0%");
    }

    #[test]
    fn test_badge_and_thumbnail() {
        assert_eq!(badge_class("FAKE"), "fake");
        assert_eq!(thumbnail_src("abc="), "data:image/jpeg;base64,abc=");
        assert_eq!(welcome("asha"), "Welcome, asha");
    }
}
