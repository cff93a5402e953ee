//! Slider-to-endpoint binder
//!
//! Owns the slider, label and selector handles of one panel. On attach every
//! label is rendered from its slider; on each input event the moved slider's
//! label is re-rendered and exactly one request is handed to the dispatcher.
//! The binder never waits on a request.

use servo_web_protocol::{ChannelSelection, ControlGroup, ControlPath, PanelError, PathShape};
use thiserror::Error;

/// Range input exposing its current value as text
pub trait SliderHandle {
    fn value(&self) -> String;
}

/// Text display bound to a slider
pub trait LabelHandle {
    fn set_text(&self, text: &str);
}

/// Radio group; yields the value of the checked button, if any
pub trait SelectorHandle {
    fn checked(&self) -> Option<String>;
}

/// Where the binder finds its elements
pub trait ControlSurface {
    type Slider: SliderHandle;
    type Label: LabelHandle;
    type Selector: SelectorHandle;

    fn slider(&self, id: &str) -> Option<Self::Slider>;
    fn label(&self, id: &str) -> Option<Self::Label>;
    fn selector(&self, group: &str) -> Option<Self::Selector>;
}

/// Fire-and-forget request sink
pub trait Dispatch {
    /// Start a request for `path`; must not block on its outcome
    fn dispatch(&self, path: &ControlPath);
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("element `{0}` not found")]
    MissingElement(String),

    #[error("radio group `{0}` not found")]
    MissingSelector(String),

    #[error("no option checked in `{0}`")]
    NothingChecked(String),

    #[error("`{value}` in `{group}` is not a number")]
    InvalidSelection { group: String, value: String },

    #[error(transparent)]
    Panel(#[from] PanelError),
}

struct BoundControl<S, L> {
    slider: S,
    label: L,
}

struct ChannelSelectors<R> {
    leg: (String, R),
    motor: (String, R),
}

pub struct Binder<S: ControlSurface, D: Dispatch> {
    group: ControlGroup,
    controls: Vec<BoundControl<S::Slider, S::Label>>,
    channel: Option<ChannelSelectors<S::Selector>>,
    dispatcher: D,
}

impl<S: ControlSurface, D: Dispatch> Binder<S, D> {
    /// Resolve every element of `group` on `surface` and render the labels.
    ///
    /// Fails if any slider, label or radio group is absent.
    pub fn attach(surface: &S, group: ControlGroup, dispatcher: D) -> Result<Self, BindError> {
        let mut controls = Vec::with_capacity(group.sliders.len());
        for binding in &group.sliders {
            let slider = surface
                .slider(&binding.slider_id)
                .ok_or_else(|| BindError::MissingElement(binding.slider_id.clone()))?;
            let label = surface
                .label(&binding.label_id)
                .ok_or_else(|| BindError::MissingElement(binding.label_id.clone()))?;
            controls.push(BoundControl { slider, label });
        }

        let channel = match &group.path {
            PathShape::PwmChannel {
                leg_group,
                motor_group,
            } => {
                let resolve = |name: &String| {
                    surface
                        .selector(name)
                        .map(|handle| (name.clone(), handle))
                        .ok_or_else(|| BindError::MissingSelector(name.clone()))
                };
                Some(ChannelSelectors {
                    leg: resolve(leg_group)?,
                    motor: resolve(motor_group)?,
                })
            }
            _ => None,
        };

        let binder = Self {
            group,
            controls,
            channel,
            dispatcher,
        };
        binder.render_all()?;
        Ok(binder)
    }

    /// Number of bound sliders
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Handle of slider `index`, for wiring its input listener
    pub fn slider(&self, index: usize) -> Option<&S::Slider> {
        self.controls.get(index).map(|c| &c.slider)
    }

    fn render_all(&self) -> Result<(), BindError> {
        for (index, control) in self.controls.iter().enumerate() {
            let text = self.group.label_for(index, &control.slider.value())?;
            control.label.set_text(&text);
        }
        Ok(())
    }

    /// Slider `index` fired an input event.
    ///
    /// Re-renders only that slider's label and dispatches one request built
    /// from the current value of every slider. Returns the dispatched path.
    pub fn on_input(&self, index: usize) -> Result<ControlPath, BindError> {
        let control = self
            .controls
            .get(index)
            .ok_or(PanelError::UnknownSlider(index))?;

        let value = control.slider.value();
        control.label.set_text(&self.group.label_for(index, &value)?);

        // An unusable selection still leaves the label current; only the request is skipped
        let selection = self.read_selection()?;

        let values: Vec<String> = self.controls.iter().map(|c| c.slider.value()).collect();
        let path = self.group.build_path(index, &values, selection)?;
        self.dispatcher.dispatch(&path);
        Ok(path)
    }

    fn read_selection(&self) -> Result<Option<ChannelSelection>, BindError> {
        let Some(channel) = &self.channel else {
            return Ok(None);
        };
        Ok(Some(ChannelSelection {
            leg: read_choice(&channel.leg)?,
            motor: read_choice(&channel.motor)?,
        }))
    }
}

fn read_choice<R: SelectorHandle>((group, handle): &(String, R)) -> Result<u32, BindError> {
    let value = handle
        .checked()
        .ok_or_else(|| BindError::NothingChecked(group.clone()))?;
    let parsed = value.trim().parse::<u32>();
    parsed.map_err(|_| BindError::InvalidSelection {
        group: group.clone(),
        value,
    })
}
