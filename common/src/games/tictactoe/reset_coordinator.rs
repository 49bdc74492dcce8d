use super::game_controller::GameController;
use super::messages::StatusMessages;
use super::view::GameView;

/// Drives the "play again" flow. Logical state is only ever cleared through
/// `GameController::reset`; this type handles the visual side.
pub struct ResetCoordinator {
    messages: StatusMessages,
}

impl ResetCoordinator {
    pub fn new(messages: StatusMessages) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &StatusMessages {
        &self.messages
    }

    /// Reveals the play-again control once the game has reached a terminal status.
    pub fn on_move_applied<V: GameView + ?Sized>(&self, controller: &GameController, view: &mut V) {
        if controller.is_finished() {
            view.set_play_again_visible(true);
        }
    }

    pub fn perform_reset<V: GameView + ?Sized>(&self, controller: &mut GameController, view: &mut V) {
        view.clear_cells();
        controller.reset();
        view.set_play_again_visible(false);
        view.set_status_text(&controller.status_message(&self.messages));
    }
}
