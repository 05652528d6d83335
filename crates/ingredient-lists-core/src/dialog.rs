//! Dialog State Machine
//!
//! At most one dialog is open at a time. Opening one from another (the
//! voice button inside the create-list dialog, per-field dictation inside
//! the sub-ingredient form) is an explicit transition.

use crate::model::{IngredientId, ListId};

/// Sub-ingredient form field filled by dictation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceField {
    Name,
    Quantity,
}

/// What a voice capture will create or fill
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceTarget {
    NewList,
    Category { list_id: ListId },
    SubIngredient { list_id: ListId, parent_id: IngredientId },
    SubIngredientField { list_id: ListId, parent_id: IngredientId, field: VoiceField },
}

/// What a confirmation dialog will delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    List(ListId),
    AllLists,
    /// All lists plus every stored key
    ResetApp,
    Ingredient { list_id: ListId, ingredient_id: IngredientId },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Dialog {
    #[default]
    Idle,
    CreatingList,
    CreatingCategory { list_id: ListId },
    AddingSubIngredient { list_id: ListId, parent_id: IngredientId },
    VoiceCapturing(VoiceTarget),
    Editing { list_id: ListId, ingredient_id: IngredientId },
    ConfirmingDelete(DeleteTarget),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogEvent {
    OpenCreateList,
    OpenCreateCategory { list_id: ListId },
    OpenAddSubIngredient { list_id: ListId, parent_id: IngredientId },
    StartVoice(VoiceTarget),
    OpenEdit { list_id: ListId, ingredient_id: IngredientId },
    RequestDelete(DeleteTarget),
    Cancel,
    Complete,
}

impl Dialog {
    pub fn is_idle(&self) -> bool {
        matches!(self, Dialog::Idle)
    }

    /// Resulting state, or None if `event` is not allowed here
    pub fn apply(&self, event: DialogEvent) -> Option<Dialog> {
        use DialogEvent as E;

        match (self, event) {
            // Closing a field dictation returns to the form it came from
            (
                Dialog::VoiceCapturing(VoiceTarget::SubIngredientField { list_id, parent_id, .. }),
                E::Cancel | E::Complete,
            ) => Some(Dialog::AddingSubIngredient {
                list_id: list_id.clone(),
                parent_id: parent_id.clone(),
            }),
            (_, E::Cancel | E::Complete) => Some(Dialog::Idle),

            (Dialog::Idle, E::OpenCreateList) => Some(Dialog::CreatingList),
            (Dialog::Idle, E::OpenCreateCategory { list_id }) => {
                Some(Dialog::CreatingCategory { list_id })
            }
            (Dialog::Idle, E::OpenAddSubIngredient { list_id, parent_id }) => {
                Some(Dialog::AddingSubIngredient { list_id, parent_id })
            }
            (Dialog::Idle, E::OpenEdit { list_id, ingredient_id }) => {
                Some(Dialog::Editing { list_id, ingredient_id })
            }
            (Dialog::Idle, E::RequestDelete(target)) => Some(Dialog::ConfirmingDelete(target)),
            (Dialog::Idle, E::StartVoice(target)) => match target {
                VoiceTarget::SubIngredientField { .. } => None,
                target => Some(Dialog::VoiceCapturing(target)),
            },

            (Dialog::CreatingList, E::StartVoice(VoiceTarget::NewList)) => {
                Some(Dialog::VoiceCapturing(VoiceTarget::NewList))
            }
            (
                Dialog::CreatingCategory { list_id },
                E::StartVoice(VoiceTarget::Category { list_id: target }),
            ) if *list_id == target => {
                Some(Dialog::VoiceCapturing(VoiceTarget::Category { list_id: target }))
            }
            (
                Dialog::AddingSubIngredient { list_id, parent_id },
                E::StartVoice(target @ VoiceTarget::SubIngredientField { .. }),
            ) => match &target {
                VoiceTarget::SubIngredientField { list_id: l, parent_id: p, .. }
                    if l == list_id && p == parent_id =>
                {
                    Some(Dialog::VoiceCapturing(target))
                }
                _ => None,
            },

            _ => None,
        }
    }

    /// Apply `event`, keeping the current state if it is not allowed
    pub fn next(self, event: DialogEvent) -> Dialog {
        match self.apply(event.clone()) {
            Some(next) => next,
            None => {
                log::debug!("[DIALOG] Ignoring {:?} while {:?}", event, self);
                self
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list() -> ListId {
        ListId::from("l1")
    }

    fn parent() -> IngredientId {
        IngredientId::from("c1")
    }

    fn field(field: VoiceField) -> VoiceTarget {
        VoiceTarget::SubIngredientField { list_id: list(), parent_id: parent(), field }
    }

    #[test]
    fn test_open_from_idle() {
        let idle = Dialog::Idle;
        assert_eq!(idle.apply(DialogEvent::OpenCreateList), Some(Dialog::CreatingList));
        assert_eq!(
            idle.apply(DialogEvent::RequestDelete(DeleteTarget::AllLists)),
            Some(Dialog::ConfirmingDelete(DeleteTarget::AllLists))
        );
        assert_eq!(
            idle.apply(DialogEvent::StartVoice(VoiceTarget::Category { list_id: list() })),
            Some(Dialog::VoiceCapturing(VoiceTarget::Category { list_id: list() }))
        );
    }

    #[test]
    fn test_field_dictation_requires_open_form() {
        assert_eq!(
            Dialog::Idle.apply(DialogEvent::StartVoice(field(VoiceField::Name))),
            None
        );
        let form = Dialog::AddingSubIngredient { list_id: list(), parent_id: parent() };
        let capturing = form.clone().next(DialogEvent::StartVoice(field(VoiceField::Quantity)));
        assert_eq!(capturing, Dialog::VoiceCapturing(field(VoiceField::Quantity)));
        assert_eq!(capturing.clone().next(DialogEvent::Complete), form);
        assert_eq!(capturing.next(DialogEvent::Cancel), form);
    }

    #[test]
    fn test_field_dictation_for_other_category_is_rejected() {
        let form = Dialog::AddingSubIngredient { list_id: list(), parent_id: "other".into() };
        assert_eq!(form.apply(DialogEvent::StartVoice(field(VoiceField::Name))), None);
    }

    #[test]
    fn test_create_list_hands_over_to_voice() {
        let next = Dialog::CreatingList.next(DialogEvent::StartVoice(VoiceTarget::NewList));
        assert_eq!(next, Dialog::VoiceCapturing(VoiceTarget::NewList));
        assert_eq!(next.next(DialogEvent::Complete), Dialog::Idle);
    }

    #[test]
    fn test_one_dialog_at_a_time() {
        let editing = Dialog::Editing { list_id: list(), ingredient_id: "s1".into() };
        assert_eq!(editing.apply(DialogEvent::OpenCreateList), None);
        assert_eq!(editing.clone().next(DialogEvent::OpenCreateList), editing);
        assert_eq!(
            Dialog::CreatingList.apply(DialogEvent::StartVoice(VoiceTarget::Category {
                list_id: list()
            })),
            None
        );
    }

    #[test]
    fn test_cancel_always_closes() {
        let states = [
            Dialog::Idle,
            Dialog::CreatingList,
            Dialog::CreatingCategory { list_id: list() },
            Dialog::VoiceCapturing(VoiceTarget::NewList),
            Dialog::ConfirmingDelete(DeleteTarget::ResetApp),
        ];
        for state in states {
            assert!(state.next(DialogEvent::Cancel).is_idle());
        }
    }
}
