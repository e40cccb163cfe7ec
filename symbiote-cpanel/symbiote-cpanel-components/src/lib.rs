//! Component library of the control panel.
//!
//! Widgets which do not know about resource kinds, requests
//! or the synchronizer live here, so they can be reused by
//! every view of the panel.

pub use buttons::button::SimpleButton;
pub use buttons::icon_button::IconButton;
pub use collapsible::{CollapsiblePanel, Collapse};
pub use inputs::checkbox_input::CheckboxInput;
pub use inputs::file_input::FileInput;
pub use inputs::select_input::{SelectInput, SelectOption};
pub use inputs::text_input::TextInput;
pub use loading_spinner::LoadingSpinner;
pub use modal::Modal;
pub use notification::{Notification, NotificationLevel};
pub use page::BasePageContainer;
pub use progress::UploadProgress;
pub use util::signal::ButtonStateSignalProvider;

mod buttons;
mod collapsible;
mod inputs;
mod loading_spinner;
mod modal;
mod notification;
mod page;
mod progress;
mod util;

pub const NON_BREAKING_SPACE: &str = "\u{a0}";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FontAwesomeIcon {
    Check,
    CircleNotch,
    Download,
    Minus,
    Plus,
    Save,
    TrashCan,
}

impl FontAwesomeIcon {

    pub fn as_class(&self) -> &'static str {
        match self {
            FontAwesomeIcon::Check => "fa-solid fa-check",
            FontAwesomeIcon::CircleNotch => "fa-solid fa-circle-notch",
            FontAwesomeIcon::Download => "fa-solid fa-download",
            FontAwesomeIcon::Minus => "fa-solid fa-minus",
            FontAwesomeIcon::Plus => "fa-solid fa-plus",
            FontAwesomeIcon::Save => "fa-solid fa-save",
            FontAwesomeIcon::TrashCan => "fa-solid fa-trash-can",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum ButtonState {
    #[default]
    Enabled,
    Loading,
    Disabled,
    Hidden,
}

impl ButtonState {

    /// A loading button cannot be clicked either.
    pub fn is_disabled(&self) -> bool {
        matches!(self, ButtonState::Disabled | ButtonState::Loading)
    }
}

#[derive(Clone, Copy, Debug)]
pub enum ButtonColor {
    Danger,
    Info,
    Light,
    Primary,
    TextDanger,
}

impl ButtonColor {

    pub fn as_class(&self) -> &'static str {
        match self {
            ButtonColor::Danger => "is-danger",
            ButtonColor::Info => "is-info",
            ButtonColor::Light => "is-light",
            ButtonColor::Primary => "is-primary",
            ButtonColor::TextDanger => "is-white has-text-danger",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum ButtonSize {
    Small,
}

impl ButtonSize {

    pub fn as_class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "is-small",
        }
    }
}
