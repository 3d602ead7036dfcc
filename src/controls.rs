use crate::errors::DashboardError;
use serde::Serialize;

/// A button that can sit in a [`ControlGroup`].
pub trait Control: Copy + Eq {
    /// Stable identifier written to the button's data attribute.
    fn key(&self) -> &'static str;
    /// Text shown on the button.
    fn label(&self) -> &'static str;
}

/// A set of buttons where at most one carries the active marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlGroup<C> {
    controls: Vec<C>,
    active: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlView {
    pub key: &'static str,
    pub label: &'static str,
    pub is_active: bool,
}

impl<C: Control> ControlGroup<C> {
    pub fn new(controls: Vec<C>) -> Self {
        Self {
            controls,
            active: None,
        }
    }

    pub fn with_active(controls: Vec<C>, initial: C) -> Result<Self, DashboardError> {
        let mut group = Self::new(controls);
        group.activate(initial)?;
        Ok(group)
    }

    /// Marks `control` active and clears every sibling.
    pub fn activate(&mut self, control: C) -> Result<(), DashboardError> {
        let index = self
            .controls
            .iter()
            .position(|candidate| *candidate == control)
            .ok_or_else(|| DashboardError::NotInGroup(control.key().to_string()))?;
        self.active = Some(index);
        Ok(())
    }

    pub fn active(&self) -> Option<C> {
        self.active.map(|index| self.controls[index])
    }

    pub fn is_active(&self, control: C) -> bool {
        self.active() == Some(control)
    }

    pub fn contains(&self, control: C) -> bool {
        self.controls.contains(&control)
    }

    pub fn views(&self) -> Vec<ControlView> {
        self.controls
            .iter()
            .enumerate()
            .map(|(index, control)| ControlView {
                key: control.key(),
                label: control.label(),
                is_active: self.active == Some(index),
            })
            .collect()
    }
}
