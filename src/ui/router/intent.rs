use super::state::View;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy)]
pub enum RouterIntent {
    Navigate(View),
}

impl Intent for RouterIntent {}
