//! Pure state transitions for the registration flow
//!
//! `transition` is the whole router: every (state, event) pair maps to the
//! next state plus the effects the engine has to execute. No I/O happens here.

use super::effect::{Effect, PhotoSave, Reply};
use super::event::{best_variant, Event};
use super::normalize::normalize_name;
use super::state::DialogueState;

/// Result of applying one event to one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: DialogueState,
    /// Photo to store before `next` is committed
    pub save: Option<PhotoSave>,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn to(next: DialogueState, effects: Vec<Effect>) -> Self {
        Self {
            next,
            save: None,
            effects,
        }
    }

    fn stay(state: &DialogueState, reply: Reply) -> Self {
        Self::to(state.clone(), vec![Effect::Reply(reply)])
    }
}

pub fn transition(state: &DialogueState, event: Event) -> Transition {
    match (state, event) {
        (_, Event::Start) => Transition::to(
            DialogueState::AwaitingName,
            vec![Effect::GreetingSticker, Effect::Reply(Reply::Greeting)],
        ),

        (DialogueState::Idle, Event::Cancel) => Transition::stay(state, Reply::NothingToCancel),
        (_, Event::Cancel) => Transition::to(DialogueState::Idle, vec![Effect::Reply(Reply::Cancelled)]),

        (DialogueState::AwaitingName, Event::Text(text)) => match normalize_name(&text) {
            Some(name) => Transition::to(
                DialogueState::AwaitingPhoto { name },
                vec![Effect::Reply(Reply::NameSaved)],
            ),
            None => Transition::stay(state, Reply::AskNameAsText),
        },
        (DialogueState::AwaitingName, _) => Transition::stay(state, Reply::AskNameAsText),

        (DialogueState::AwaitingPhoto { name }, Event::Photo(variants)) => match best_variant(&variants) {
            Some(variant) => Transition {
                next: DialogueState::Idle,
                save: Some(PhotoSave {
                    variant: variant.clone(),
                    name: name.clone(),
                }),
                effects: vec![Effect::Reply(Reply::PhotoSaved)],
            },
            None => Transition::stay(state, Reply::AskPhotoNotFile),
        },
        (DialogueState::AwaitingPhoto { .. }, _) => Transition::stay(state, Reply::AskPhotoNotFile),

        (DialogueState::Idle, _) => Transition::stay(state, Reply::Intro),
    }
}
