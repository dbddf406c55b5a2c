use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::preferences::communication::CommunicationIntent;
use crate::preferences::payment_form::PaymentFormIntent;
use crate::preferences::saved_cards::SavedCardsIntent;
use crate::ui::app::App;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.payment_form().is_visible() {
        handle_payment_form_key(app, key);
        return;
    }

    if app.communication().is_visible() {
        handle_communication_key(app, key);
        return;
    }

    if app.saved_cards().is_visible() {
        handle_saved_cards_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_previous(),
        KeyCode::Right => app.advance_focused(),
        KeyCode::Left => app.retreat_focused(),
        KeyCode::Char(ch @ '1'..='9') => {
            let index = ch as usize - '1' as usize;
            app.jump_focused(index);
        }
        KeyCode::Enter => app.activate(),
        KeyCode::Char('m') => app.load_more(),
        KeyCode::Char('p') => app.open_payment_form(),
        KeyCode::Char('c') => app.open_communication(),
        KeyCode::Char('s') => app.open_saved_cards(),
        KeyCode::F(5) => app.reload_config(),
        _ => {}
    }
}

fn handle_payment_form_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'r') {
        app.retry_payment();
        return;
    }
    let intent = match key.code {
        KeyCode::Esc => PaymentFormIntent::Close,
        KeyCode::Enter => {
            app.submit_payment();
            return;
        }
        KeyCode::Tab | KeyCode::Down => PaymentFormIntent::FocusNext,
        KeyCode::BackTab | KeyCode::Up => PaymentFormIntent::FocusPrevious,
        KeyCode::Right => PaymentFormIntent::Cycle { forward: true },
        KeyCode::Left => PaymentFormIntent::Cycle { forward: false },
        KeyCode::Backspace => PaymentFormIntent::Backspace,
        KeyCode::Char(ch) => PaymentFormIntent::Type(ch),
        _ => return,
    };
    app.dispatch_payment_form(intent);
}

fn handle_communication_key(app: &mut App, key: KeyEvent) {
    let intent = match key.code {
        KeyCode::Esc => CommunicationIntent::RequestClose,
        KeyCode::Up => CommunicationIntent::MoveUp,
        KeyCode::Down => CommunicationIntent::MoveDown,
        KeyCode::Char(' ') => CommunicationIntent::Toggle,
        KeyCode::Enter => {
            app.save_communication();
            return;
        }
        _ => return,
    };
    app.dispatch_communication(intent);
}

fn handle_saved_cards_key(app: &mut App, key: KeyEvent) {
    let intent = match key.code {
        KeyCode::Esc => SavedCardsIntent::Close,
        KeyCode::Up => SavedCardsIntent::MoveUp,
        KeyCode::Down => SavedCardsIntent::MoveDown,
        KeyCode::Char('e') | KeyCode::Enter => {
            app.edit_selected_card();
            return;
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            app.remove_selected_card();
            return;
        }
        _ => return,
    };
    app.dispatch_saved_cards(intent);
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
