use crate::controller::Model;
use crate::event::Effect;

/// Flips the reward panel open or closed. Pure UI, no side effects.
pub fn handle_panel_toggled(model: &mut Model) -> Vec<Effect> {
    model.flags.show_reward_panel = !model.flags.show_reward_panel;
    Vec::new()
}
