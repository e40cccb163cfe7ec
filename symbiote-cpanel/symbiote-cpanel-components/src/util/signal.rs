use leptos::prelude::*;
use crate::ButtonState;

pub trait ButtonStateSignalProvider {
    fn derive_loading(self) -> Signal<ButtonState>;
}

impl ButtonStateSignalProvider for Signal<bool> {
    fn derive_loading(self) -> Signal<ButtonState> {
        Signal::derive(move || {
            if self.get() {
                ButtonState::Loading
            }
            else {
                ButtonState::Enabled
            }
        })
    }
}
