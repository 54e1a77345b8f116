pub(crate) use super::*;
pub(crate) use crate::tui::test_utils::{make_app, render_app_to_buffer};
