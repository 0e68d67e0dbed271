use crate::udp::enums::action::Action;

impl Action {
    pub fn from_i32(value: i32) -> Option<Action> {
        match value {
            0 => Some(Action::Connect),
            1 => Some(Action::Announce),
            2 => Some(Action::Scrape),
            3 => Some(Action::Error),
            _ => None,
        }
    }

    pub fn to_i32(self) -> i32 {
        self as i32
    }
}
