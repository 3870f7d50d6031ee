use crate::state::{Action, FiscalYearField, Focus, SortKey, State};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{
    sync::mpsc,
    thread,
    time::{Duration, Instant},
};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// What a key press means in the current state.
///
#[derive(Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Quit,
    Dispatch(Action),
    Ignore,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) => {
                            if tx_clone.send(Event::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => (),
                        Err(err) => {
                            error!("Failed to read terminal event: {}", err);
                            break;
                        }
                    },
                    Ok(false) => (),
                    Err(err) => {
                        error!("Failed to poll terminal events: {}", err);
                        break;
                    }
                }
                if tx_clone.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(event) => match map_key(state, event) {
                KeyOutcome::Quit => {
                    debug!("Processing exit terminal event '{:?}'...", event);
                    return Ok(false);
                }
                KeyOutcome::Dispatch(action) => {
                    state.dispatch(action);
                }
                KeyOutcome::Ignore => (),
            },
            Event::Tick => {
                state.dispatch(Action::Tick(Instant::now()));
            }
        }
        Ok(true)
    }
}

/// Translates a key press into an outcome. Open dialogs take the keyboard
/// before the focused pane does.
///
pub fn map_key(state: &State, key: KeyEvent) -> KeyOutcome {
    if key.kind != KeyEventKind::Press {
        return KeyOutcome::Ignore;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => KeyOutcome::Quit,
            KeyCode::Char('l') => KeyOutcome::Dispatch(Action::ToggleLog),
            _ => KeyOutcome::Ignore,
        };
    }
    let action = if state.confirmation().is_some() {
        confirmation_action(key)
    } else if let Some(form) = state.fiscal_year_form() {
        modal_action(key, form.focused)
    } else {
        match state.current_focus() {
            Focus::Companies => return companies_outcome(key),
            Focus::CompanyForm => company_form_action(key),
            Focus::FiscalYears => return fiscal_years_outcome(key),
        }
    };
    action.map_or(KeyOutcome::Ignore, KeyOutcome::Dispatch)
}

fn confirmation_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('y') => Some(Action::Confirm),
        KeyCode::Esc | KeyCode::Char('n') => Some(Action::Cancel),
        _ => None,
    }
}

fn modal_action(key: KeyEvent, focused: FiscalYearField) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::CloseModal),
        KeyCode::Enter => Some(Action::SaveFiscalYear),
        KeyCode::Tab | KeyCode::Down => Some(Action::ModalNextField),
        KeyCode::BackTab | KeyCode::Up => Some(Action::ModalPreviousField),
        KeyCode::Backspace => Some(Action::ModalBackspace),
        KeyCode::Char(' ') if focused == FiscalYearField::IsMain => Some(Action::ToggleMain),
        KeyCode::Char(c) => Some(Action::ModalInput(c)),
        _ => None,
    }
}

fn companies_outcome(key: KeyEvent) -> KeyOutcome {
    let action = match key.code {
        KeyCode::Char('q') => return KeyOutcome::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::NextCompany,
        KeyCode::Char('k') | KeyCode::Up => Action::PreviousCompany,
        KeyCode::Char('n') => Action::NewCompany,
        KeyCode::Char('d') => Action::RequestDeleteCompany,
        KeyCode::Enter | KeyCode::Char('e') => Action::FocusPane(Focus::CompanyForm),
        KeyCode::Tab => Action::NextFocus,
        KeyCode::BackTab => Action::PreviousFocus,
        _ => return KeyOutcome::Ignore,
    };
    KeyOutcome::Dispatch(action)
}

fn company_form_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::FocusPane(Focus::Companies)),
        KeyCode::Enter => Some(Action::SaveCompany),
        KeyCode::Up | KeyCode::Down => Some(Action::CompanyNextField),
        KeyCode::Tab => Some(Action::NextFocus),
        KeyCode::BackTab => Some(Action::PreviousFocus),
        KeyCode::Backspace => Some(Action::CompanyBackspace),
        KeyCode::Char(c) => Some(Action::CompanyInput(c)),
        _ => None,
    }
}

fn fiscal_years_outcome(key: KeyEvent) -> KeyOutcome {
    let action = match key.code {
        KeyCode::Char('q') => return KeyOutcome::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::NextRow,
        KeyCode::Char('k') | KeyCode::Up => Action::PreviousRow,
        KeyCode::Char('l') | KeyCode::Right => Action::NextPage,
        KeyCode::Char('h') | KeyCode::Left => Action::PreviousPage,
        KeyCode::Char('a') => Action::OpenAddFiscalYear,
        KeyCode::Char('e') | KeyCode::Enter => Action::OpenEditFiscalYear,
        KeyCode::Char('d') => Action::RequestDeleteFiscalYear,
        KeyCode::Char('1') => Action::Sort(SortKey::Year),
        KeyCode::Char('2') => Action::Sort(SortKey::StartDate),
        KeyCode::Char('3') => Action::Sort(SortKey::EndDate),
        KeyCode::Tab => Action::NextFocus,
        KeyCode::BackTab => Action::PreviousFocus,
        KeyCode::Esc => Action::FocusPane(Focus::Companies),
        _ => return KeyOutcome::Ignore,
    };
    KeyOutcome::Dispatch(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::LogBuffer;
    use crate::model::{DatasetLoader, MockDataset};
    use crate::store::Registry;
    use crate::ui::Theme;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mock_state() -> State {
        State::new(
            Registry::new(MockDataset.load().unwrap()),
            Theme::default(),
            5,
            Duration::from_secs(3),
            LogBuffer::default(),
        )
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        let mut state = mock_state();
        state.dispatch(Action::OpenAddFiscalYear);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(&state, ctrl_c), KeyOutcome::Quit);
    }

    #[test]
    fn q_quits_from_lists_but_types_in_forms() {
        let mut state = mock_state();
        assert_eq!(map_key(&state, key(KeyCode::Char('q'))), KeyOutcome::Quit);
        state.dispatch(Action::FocusPane(Focus::CompanyForm));
        assert_eq!(
            map_key(&state, key(KeyCode::Char('q'))),
            KeyOutcome::Dispatch(Action::CompanyInput('q'))
        );
    }

    #[test]
    fn confirmation_takes_keyboard() {
        let mut state = mock_state();
        state.dispatch(Action::RequestDeleteCompany);
        assert_eq!(
            map_key(&state, key(KeyCode::Char('y'))),
            KeyOutcome::Dispatch(Action::Confirm)
        );
        assert_eq!(
            map_key(&state, key(KeyCode::Esc)),
            KeyOutcome::Dispatch(Action::Cancel)
        );
        assert_eq!(map_key(&state, key(KeyCode::Char('j'))), KeyOutcome::Ignore);
    }

    #[test]
    fn modal_space_toggles_only_on_checkbox() {
        let mut state = mock_state();
        state.dispatch(Action::OpenAddFiscalYear);
        assert_eq!(
            map_key(&state, key(KeyCode::Char(' '))),
            KeyOutcome::Dispatch(Action::ModalInput(' '))
        );
        state.dispatch(Action::ModalPreviousField);
        assert_eq!(
            map_key(&state, key(KeyCode::Char(' '))),
            KeyOutcome::Dispatch(Action::ToggleMain)
        );
    }

    #[test]
    fn fiscal_year_sort_keys() {
        let mut state = mock_state();
        state.dispatch(Action::FocusPane(Focus::FiscalYears));
        assert_eq!(
            map_key(&state, key(KeyCode::Char('2'))),
            KeyOutcome::Dispatch(Action::Sort(SortKey::StartDate))
        );
        assert_eq!(
            map_key(&state, key(KeyCode::Char('a'))),
            KeyOutcome::Dispatch(Action::OpenAddFiscalYear)
        );
    }

    #[test]
    fn release_events_are_ignored() {
        let state = mock_state();
        let mut release = key(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;
        assert_eq!(map_key(&state, release), KeyOutcome::Ignore);
    }
}
