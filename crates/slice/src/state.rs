use color_eyre::eyre::Result;

#[derive(Default)]
pub struct State {
    pub input_mode: InputMode,
}

/// Insert is active while a text field is being edited; global keys stay
/// inert until the edit ends.
#[derive(Default, PartialEq)]
pub enum InputMode {
    #[default]
    Normal,
    Insert,
}

impl State {
    pub fn new() -> Result<Self> {
        Ok(Self {
            input_mode: InputMode::Normal,
        })
    }
}
