use aqua_lakes::lake::LakeId;
use serde::{Deserialize, Serialize};

/// Which lake is selected (detail panel open) and which one the pointer is over.
///
/// Lakes are referenced by id only; the registry owns the records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    selected: Option<LakeId>,
    hovered: Option<LakeId>,
}

impl Selection {
    pub fn selected(&self) -> Option<&LakeId> {
        self.selected.as_ref()
    }

    pub fn hovered(&self) -> Option<&LakeId> {
        self.hovered.as_ref()
    }

    /// Idle when no lake is selected.
    pub fn is_idle(&self) -> bool {
        self.selected.is_none()
    }

    /// Hovered or selected; drawn emphasized on the map.
    pub fn is_highlighted(&self, id: &LakeId) -> bool {
        self.selected.as_ref() == Some(id) || self.hovered.as_ref() == Some(id)
    }

    pub fn select(&mut self, id: LakeId) {
        self.selected = Some(id);
    }

    pub fn dismiss(&mut self) {
        self.selected = None;
    }

    pub fn hover(&mut self, id: LakeId) {
        self.hovered = Some(id);
    }

    /// Pointer left `id`. A late exit for a lake that is no longer hovered
    /// leaves the current hover alone.
    pub fn unhover(&mut self, id: &LakeId) {
        if self.hovered.as_ref() == Some(id) {
            self.hovered = None;
        }
    }
}
