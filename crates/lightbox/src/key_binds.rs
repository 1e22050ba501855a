use crate::message::{Message, NavMessage};
use cosmic::{
    iced::keyboard::{Key, Modifiers, key::Named},
    widget::menu::key_bind::{KeyBind, Modifier},
};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Next,
    Prev,
    First,
    Last,
    ToggleAutoplay,
    Close,
}

impl KeyAction {
    pub fn message(self) -> Message {
        match self {
            KeyAction::Next => Message::Nav(NavMessage::NextCurrent),
            KeyAction::Prev => Message::Nav(NavMessage::PreviousCurrent),
            KeyAction::First => Message::Nav(NavMessage::First),
            KeyAction::Last => Message::Nav(NavMessage::Last),
            KeyAction::ToggleAutoplay => Message::ToggleAutoplay,
            KeyAction::Close => Message::Close,
        }
    }
}

pub fn init_key_binds() -> HashMap<KeyBind, KeyAction> {
    let mut binds = HashMap::new();

    let mut bind = |modifiers: Vec<Modifier>, key: Key, action: KeyAction| {
        binds.insert(KeyBind { modifiers, key }, action);
    };

    bind(vec![], Key::Named(Named::ArrowRight), KeyAction::Next);
    bind(vec![], Key::Named(Named::ArrowLeft), KeyAction::Prev);
    bind(vec![], Key::Named(Named::Home), KeyAction::First);
    bind(vec![], Key::Named(Named::End), KeyAction::Last);
    bind(vec![], Key::Named(Named::Space), KeyAction::ToggleAutoplay);
    bind(vec![], Key::Named(Named::Escape), KeyAction::Close);
    bind(vec![Modifier::Ctrl], Key::Character("q".into()), KeyAction::Close);

    binds
}

pub fn key_press_handler(key: Key, modifiers: Modifiers) -> Option<Message> {
    let mut mods = Vec::new();

    if modifiers.control() {
        mods.push(Modifier::Ctrl);
    }

    if modifiers.shift() {
        mods.push(Modifier::Shift);
    }

    if modifiers.alt() {
        mods.push(Modifier::Alt);
    }

    if modifiers.logo() {
        mods.push(Modifier::Super);
    }

    let key_bind = KeyBind {
        modifiers: mods,
        key,
    };

    init_key_binds()
        .get(&key_bind)
        .map(|action| Message::KeyBind(*action))
}
