use serde::{Deserialize, Serialize};

/// Position sliders report hundredths of a unit
pub const POSITION_SCALE: f64 = 100.0;

/// Raw PWM counts per unit on the calibration panel
pub const PWM_SCALE: f64 = 6666.66;

/// Fixed scaling applied to a slider value before it is displayed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "divisor", rename_all = "snake_case")]
pub enum LabelTransform {
    /// Show the slider text as-is
    Identity,
    /// Parse the slider text and divide it by the given amount
    Divide(f64),
}

impl LabelTransform {
    /// Render a raw slider value for display
    pub fn apply(&self, raw: &str) -> String {
        match *self {
            Self::Identity => raw.to_string(),
            Self::Divide(divisor) => format_number(parse_number(raw) / divisor),
        }
    }
}

/// Build the text of a label: `"{name}: {value}"`
pub fn label_text(name: &str, transform: LabelTransform, raw: &str) -> String {
    format!("{name}: {}", transform.apply(raw))
}

/// Parse slider text the way a range input reports it.
/// Blank text counts as zero, anything else that is not a finite number is NaN.
fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => f64::NAN,
    }
}

/// Shortest decimal that round-trips, without a trailing `.0` on integers
#[allow(clippy::float_cmp)]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // Negative zero prints as plain zero
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_keeps_text() {
        assert_eq!(LabelTransform::Identity.apply("3333"), "3333");
        assert_eq!(LabelTransform::Identity.apply(""), "");
    }

    #[test]
    fn position_scale_renders_short_decimals() {
        let t = LabelTransform::Divide(POSITION_SCALE);
        assert_eq!(t.apply("80"), "0.8");
        assert_eq!(t.apply("50"), "0.5");
        assert_eq!(t.apply("250"), "2.5");
        assert_eq!(t.apply("100"), "1");
        assert_eq!(t.apply("-0"), "0");
    }

    #[test]
    fn pwm_scale_divides() {
        let t = LabelTransform::Divide(PWM_SCALE);
        assert_eq!(t.apply("6666.66"), "1");
        assert_eq!(t.apply("0"), "0");
        assert_eq!(t.apply("3333"), format!("{}", 3333.0 / PWM_SCALE));
    }

    #[test]
    fn unparseable_text_is_nan() {
        let t = LabelTransform::Divide(POSITION_SCALE);
        assert_eq!(t.apply("abc"), "NaN");
        assert_eq!(t.apply("inf"), "NaN");
        assert_eq!(t.apply("  "), "0");
    }

    #[test]
    fn label_text_prefixes_name() {
        assert_eq!(label_text("PWM", LabelTransform::Identity, "3333"), "PWM: 3333");
        assert_eq!(
            label_text("Y", LabelTransform::Divide(POSITION_SCALE), "80"),
            "Y: 0.8"
        );
    }

    #[test]
    fn transform_serializes_tagged() {
        let json = serde_json::to_string(&LabelTransform::Divide(100.0)).unwrap();
        assert_eq!(json, r#"{"kind":"divide","divisor":100.0}"#);
        let json = serde_json::to_string(&LabelTransform::Identity).unwrap();
        assert_eq!(json, r#"{"kind":"identity"}"#);
    }
}
