//! Panel presets
//!
//! A panel is one control group: a set of sliders, each bound to a label,
//! a transform for the labels, and the shape of the request path built
//! from the slider values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::path::{channel_index, ControlPath, ServoJoint};
use crate::transform::{label_text, LabelTransform, POSITION_SCALE, PWM_SCALE};

/// Names accepted by [`ControlGroup::preset`]
pub const PRESETS: [&str; 5] = ["pwm", "servo", "position_2d", "calibrate", "position_3d"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    #[error("unknown panel `{0}`")]
    UnknownPreset(String),

    #[error("panel `{panel}` has {got} slider value(s), expected {expected}")]
    ValueCount {
        panel: String,
        expected: usize,
        got: usize,
    },

    #[error("panel `{panel}` has {got} axes, positions take 2 or 3")]
    AxisCount { panel: String, got: usize },

    #[error("panel `{0}` needs a leg and motor selection")]
    MissingSelection(String),

    #[error("slider {0} is not part of this panel")]
    UnknownSlider(usize),
}

/// One slider and the label that displays it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderBinding {
    pub slider_id: String,
    pub label_id: String,
    /// Prefix shown in the label
    pub name: String,
}

impl SliderBinding {
    /// Bind `slider_id` to the label `{slider_id}_label`
    pub fn new(slider_id: &str, name: &str) -> Self {
        Self {
            slider_id: slider_id.to_string(),
            label_id: format!("{slider_id}_label"),
            name: name.to_string(),
        }
    }
}

/// Leg and motor picked on the calibration panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelSelection {
    pub leg: u32,
    pub motor: u32,
}

impl ChannelSelection {
    pub const fn index(self) -> u32 {
        channel_index(self.leg, self.motor)
    }
}

/// How the request path is built from the slider values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PathShape {
    /// `/pwm/{v}`
    Pwm,
    /// `/pwm/{leg*3+motor}/{v}`, leg and motor read from radio groups
    PwmChannel { leg_group: String, motor_group: String },
    /// Each slider drives its own servo; only the moved one is sent
    Servos { joints: Vec<ServoJoint> },
    /// `/pos/{x}/{y}` or `/pos/{x}/{y}/{z}`; every axis is sent on any change
    Position,
}

/// Configuration of one panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlGroup {
    pub name: String,
    pub sliders: Vec<SliderBinding>,
    pub transform: LabelTransform,
    pub path: PathShape,
}

impl ControlGroup {
    /// Single PWM slider, raw value shown
    pub fn pwm() -> Self {
        Self {
            name: "pwm".into(),
            sliders: vec![SliderBinding::new("pwm", "PWM")],
            transform: LabelTransform::Identity,
            path: PathShape::Pwm,
        }
    }

    /// Upper and lower servo, each sent on its own path
    pub fn servo() -> Self {
        Self {
            name: "servo".into(),
            sliders: vec![
                SliderBinding::new("upper_servo", "Upper servo"),
                SliderBinding::new("lower_servo", "Lower servo"),
            ],
            transform: LabelTransform::Identity,
            path: PathShape::Servos {
                joints: vec![ServoJoint::Upper, ServoJoint::Lower],
            },
        }
    }

    /// X/Y position, raw values shown
    pub fn position_2d() -> Self {
        Self {
            name: "position_2d".into(),
            sliders: vec![SliderBinding::new("x", "X"), SliderBinding::new("y", "Y")],
            transform: LabelTransform::Identity,
            path: PathShape::Position,
        }
    }

    /// PWM calibration of one channel picked by leg and motor
    pub fn calibrate() -> Self {
        Self {
            name: "calibrate".into(),
            sliders: vec![SliderBinding::new("pwm", "PWM")],
            transform: LabelTransform::Divide(PWM_SCALE),
            path: PathShape::PwmChannel {
                leg_group: "leg".into(),
                motor_group: "motor".into(),
            },
        }
    }

    /// X/Y/Z position in hundredths
    pub fn position_3d() -> Self {
        Self {
            name: "position_3d".into(),
            sliders: vec![
                SliderBinding::new("x", "X"),
                SliderBinding::new("y", "Y"),
                SliderBinding::new("z", "Z"),
            ],
            transform: LabelTransform::Divide(POSITION_SCALE),
            path: PathShape::Position,
        }
    }

    /// Look up a preset by name (see [`PRESETS`])
    pub fn preset(name: &str) -> Result<Self, PanelError> {
        match name {
            "pwm" => Ok(Self::pwm()),
            "servo" => Ok(Self::servo()),
            "position_2d" => Ok(Self::position_2d()),
            "calibrate" => Ok(Self::calibrate()),
            "position_3d" => Ok(Self::position_3d()),
            other => Err(PanelError::UnknownPreset(other.to_string())),
        }
    }

    /// Every preset, in [`PRESETS`] order
    pub fn presets() -> Vec<Self> {
        vec![
            Self::pwm(),
            Self::servo(),
            Self::position_2d(),
            Self::calibrate(),
            Self::position_3d(),
        ]
    }

    /// Radio groups that must be present on the page
    pub fn selector_groups(&self) -> Vec<&str> {
        match &self.path {
            PathShape::PwmChannel {
                leg_group,
                motor_group,
            } => vec![leg_group.as_str(), motor_group.as_str()],
            _ => Vec::new(),
        }
    }

    /// Label text for slider `index` showing `raw`
    pub fn label_for(&self, index: usize, raw: &str) -> Result<String, PanelError> {
        let binding = self
            .sliders
            .get(index)
            .ok_or(PanelError::UnknownSlider(index))?;
        Ok(label_text(&binding.name, self.transform, raw))
    }

    /// Build the request path after slider `moved` changed.
    ///
    /// `values` holds the current text of every slider, in binding order.
    pub fn build_path(
        &self,
        moved: usize,
        values: &[String],
        selection: Option<ChannelSelection>,
    ) -> Result<ControlPath, PanelError> {
        if values.len() != self.sliders.len() {
            return Err(PanelError::ValueCount {
                panel: self.name.clone(),
                expected: self.sliders.len(),
                got: values.len(),
            });
        }
        let moved_value = values.get(moved).ok_or(PanelError::UnknownSlider(moved))?;

        match &self.path {
            PathShape::Pwm => Ok(ControlPath::Pwm {
                value: moved_value.clone(),
            }),
            PathShape::PwmChannel { .. } => {
                let selection =
                    selection.ok_or_else(|| PanelError::MissingSelection(self.name.clone()))?;
                Ok(ControlPath::PwmChannel {
                    index: selection.index(),
                    value: moved_value.clone(),
                })
            }
            PathShape::Servos { joints } => {
                let joint = *joints.get(moved).ok_or(PanelError::UnknownSlider(moved))?;
                Ok(ControlPath::Servo {
                    joint,
                    value: moved_value.clone(),
                })
            }
            PathShape::Position => match values {
                [x, y] => Ok(ControlPath::Position2 {
                    x: x.clone(),
                    y: y.clone(),
                }),
                [x, y, z] => Ok(ControlPath::Position3 {
                    x: x.clone(),
                    y: y.clone(),
                    z: z.clone(),
                }),
                _ => Err(PanelError::AxisCount {
                    panel: self.name.clone(),
                    got: values.len(),
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(v: &[&str]) -> Vec<String> {
        v.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn presets_resolve_by_name() {
        for name in PRESETS {
            assert_eq!(ControlGroup::preset(name).unwrap().name, name);
        }
        assert_eq!(
            ControlGroup::preset("turbo"),
            Err(PanelError::UnknownPreset("turbo".into()))
        );
    }

    #[test]
    fn labels_follow_slider_ids() {
        let group = ControlGroup::servo();
        assert_eq!(group.sliders[0].label_id, "upper_servo_label");
        assert_eq!(group.sliders[1].label_id, "lower_servo_label");
    }

    #[test]
    fn simple_pwm_sends_raw_value() {
        let group = ControlGroup::pwm();
        let path = group.build_path(0, &values(&["3333"]), None).unwrap();
        assert_eq!(path.to_string(), "/pwm/3333");
        assert_eq!(group.label_for(0, "3333").unwrap(), "PWM: 3333");
    }

    #[test]
    fn servos_are_sent_independently() {
        let group = ControlGroup::servo();
        let v = values(&["10", "170"]);
        assert_eq!(group.build_path(0, &v, None).unwrap().to_string(), "/upper_servo/10");
        assert_eq!(group.build_path(1, &v, None).unwrap().to_string(), "/lower_servo/170");
    }

    #[test]
    fn position_sends_every_axis() {
        let group = ControlGroup::position_3d();
        let v = values(&["50", "80", "10"]);
        for moved in 0..3 {
            assert_eq!(
                group.build_path(moved, &v, None).unwrap().to_string(),
                "/pos/50/80/10"
            );
        }
        assert_eq!(group.label_for(1, "80").unwrap(), "Y: 0.8");

        let flat = ControlGroup::position_2d();
        assert_eq!(
            flat.build_path(1, &values(&["3", "4"]), None).unwrap().to_string(),
            "/pos/3/4"
        );
        assert_eq!(flat.label_for(0, "3").unwrap(), "X: 3");
    }

    #[test]
    fn calibration_needs_selection() {
        let group = ControlGroup::calibrate();
        assert_eq!(group.selector_groups(), vec!["leg", "motor"]);
        assert_eq!(
            group.build_path(0, &values(&["5000"]), None),
            Err(PanelError::MissingSelection("calibrate".into()))
        );
        let path = group
            .build_path(0, &values(&["5000"]), Some(ChannelSelection { leg: 2, motor: 1 }))
            .unwrap();
        assert_eq!(path.to_string(), "/pwm/7/5000");
    }

    #[test]
    fn value_count_must_match() {
        let group = ControlGroup::position_3d();
        assert!(matches!(
            group.build_path(0, &values(&["1", "2"]), None),
            Err(PanelError::ValueCount { expected: 3, got: 2, .. })
        ));
        assert!(matches!(
            ControlGroup::position_2d().build_path(0, &values(&["1", "2", "3"]), None),
            Err(PanelError::ValueCount { expected: 2, got: 3, .. })
        ));

        let mut four_axes = ControlGroup::position_3d();
        four_axes.sliders.push(SliderBinding::new("w", "W"));
        assert!(matches!(
            four_axes.build_path(0, &values(&["1", "2", "3", "4"]), None),
            Err(PanelError::AxisCount { got: 4, .. })
        ));
        assert_eq!(
            ControlGroup::pwm().label_for(3, "1"),
            Err(PanelError::UnknownSlider(3))
        );
    }
}
