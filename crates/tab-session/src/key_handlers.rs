use tracing::{debug, debug_span};

use tab_core::shortcuts::position_for_digit;

use super::response::build_render_response;
use super::types::{KeyEvent, KeyResponse};
use super::QuerySession;

impl QuerySession {
    /// Process a key event. Returns a KeyResponse describing what the caller should do.
    pub fn handle_key(&mut self, event: KeyEvent) -> KeyResponse {
        let _span = debug_span!("handle_key", ?event, state = ?self.state).entered();

        if self.is_closed() {
            return KeyResponse::not_consumed();
        }

        match event {
            KeyEvent::Char(c) => {
                self.buffer.push(c);
                self.refresh();
                build_render_response(self)
            }

            KeyEvent::Backspace => self.handle_backspace(),

            KeyEvent::SelectDigit(digit) => match position_for_digit(digit) {
                Some(position) => self.select_position(position),
                None => KeyResponse::consumed(),
            },

            KeyEvent::Enter => self.select_position(0),

            // Swallowed so host shortcuts don't fire while the switcher is open.
            KeyEvent::Other(_) => KeyResponse::consumed(),
        }
    }

    /// Activate the result at `position` and close the session.
    /// No-op (but consumed) when nothing is shown there.
    pub fn select_position(&mut self, position: usize) -> KeyResponse {
        if self.is_closed() {
            return KeyResponse::not_consumed();
        }
        let Some(id) = self.result_at(position).map(|c| c.id) else {
            return KeyResponse::consumed();
        };

        debug!(position, %id, "activate");
        self.close();
        KeyResponse::activate(id)
    }

    fn handle_backspace(&mut self) -> KeyResponse {
        if self.buffer.pop().is_none() {
            return KeyResponse::consumed();
        }
        self.refresh();
        build_render_response(self)
    }
}
