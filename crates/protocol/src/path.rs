//! Control paths understood by the device server
//!
//! Every request a panel issues is a bare `GET` whose path carries the
//! slider values:
//!
//! - `/pwm/{pwm}`
//! - `/pwm/{index}/{pwm}`
//! - `/upper_servo/{v}`, `/lower_servo/{v}`
//! - `/pos/{x}/{y}`
//! - `/pos/{x}/{y}/{z}`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Motors wired to each leg; channel indices are laid out leg by leg
pub const MOTORS_PER_LEG: u32 = 3;

/// PWM channel selected by a leg and a motor on that leg
pub const fn channel_index(leg: u32, motor: u32) -> u32 {
    leg * MOTORS_PER_LEG + motor
}

/// The two servos of the arm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServoJoint {
    Upper,
    Lower,
}

impl ServoJoint {
    /// First path segment addressing this servo
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Upper => "upper_servo",
            Self::Lower => "lower_servo",
        }
    }
}

/// A request path, with values kept as the text the slider reported
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ControlPath {
    Pwm { value: String },
    PwmChannel { index: u32, value: String },
    Servo { joint: ServoJoint, value: String },
    Position2 { x: String, y: String },
    Position3 { x: String, y: String, z: String },
}

impl fmt::Display for ControlPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pwm { value } => write!(f, "/pwm/{value}"),
            Self::PwmChannel { index, value } => write!(f, "/pwm/{index}/{value}"),
            Self::Servo { joint, value } => write!(f, "/{}/{value}", joint.segment()),
            Self::Position2 { x, y } => write!(f, "/pos/{x}/{y}"),
            Self::Position3 { x, y, z } => write!(f, "/pos/{x}/{y}/{z}"),
        }
    }
}

/// Why a path could not be read as a control request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("empty control path")]
    Empty,

    #[error("unknown control `{0}`")]
    UnknownControl(String),

    #[error("`{control}` takes {expected} value(s), got {got}")]
    Arity {
        control: &'static str,
        expected: &'static str,
        got: usize,
    },

    #[error("`{0}` is not a number")]
    InvalidValue(String),

    #[error("`{0}` is not a channel index")]
    InvalidIndex(String),
}

fn value(segment: &str) -> Result<String, PathError> {
    match segment.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(segment.to_string()),
        _ => Err(PathError::InvalidValue(segment.to_string())),
    }
}

impl FromStr for ControlPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim_start_matches('/');
        if trimmed.is_empty() {
            return Err(PathError::Empty);
        }

        let mut segments = trimmed.split('/');
        let control = segments.next().unwrap_or_default();
        let args: Vec<&str> = segments.collect();

        match (control, args.as_slice()) {
            ("pwm", [v]) => Ok(Self::Pwm { value: value(v)? }),
            ("pwm", [index, v]) => {
                let index = index
                    .parse()
                    .map_err(|_| PathError::InvalidIndex((*index).to_string()))?;
                Ok(Self::PwmChannel {
                    index,
                    value: value(v)?,
                })
            }
            ("pwm", _) => Err(PathError::Arity {
                control: "pwm",
                expected: "1 or 2",
                got: args.len(),
            }),
            ("upper_servo" | "lower_servo", [v]) => {
                let joint = if control == "upper_servo" {
                    ServoJoint::Upper
                } else {
                    ServoJoint::Lower
                };
                Ok(Self::Servo {
                    joint,
                    value: value(v)?,
                })
            }
            ("upper_servo", _) => Err(PathError::Arity {
                control: "upper_servo",
                expected: "1",
                got: args.len(),
            }),
            ("lower_servo", _) => Err(PathError::Arity {
                control: "lower_servo",
                expected: "1",
                got: args.len(),
            }),
            ("pos", [x, y]) => Ok(Self::Position2 {
                x: value(x)?,
                y: value(y)?,
            }),
            ("pos", [x, y, z]) => Ok(Self::Position3 {
                x: value(x)?,
                y: value(y)?,
                z: value(z)?,
            }),
            ("pos", _) => Err(PathError::Arity {
                control: "pos",
                expected: "2 or 3",
                got: args.len(),
            }),
            (other, _) => Err(PathError::UnknownControl(other.to_string())),
        }
    }
}
