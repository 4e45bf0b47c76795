//! Application state and core logic

use crate::config::RelayConfig;
use crate::content::{CONTACT_EMAIL, SERVICES};
use crate::relay::{MailRelay, RelayError};
use crate::state::{AppState, Form, SubmitStep, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

/// A relay call running on its own task
struct PendingSubmission {
    /// Contact page instance that started the call
    page_id: u64,
    outcome: oneshot::Receiver<Result<(), RelayError>>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Mail relay used by the contact form
    relay: Arc<dyn MailRelay>,
    /// Relay settings, read-only after startup
    relay_config: RelayConfig,
    /// Relay calls that have not reported back yet
    pending: Vec<PendingSubmission>,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(relay: Arc<dyn MailRelay>, relay_config: RelayConfig) -> Self {
        Self {
            state: AppState::default(),
            relay,
            relay_config,
            pending: Vec::new(),
            quit: false,
            copy_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Whether the open contact page is waiting on the relay
    pub fn is_submitting(&self) -> bool {
        self.state
            .contact
            .as_ref()
            .is_some_and(|page| page.controller.is_submitting())
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // The review dialog is modal as well
        if self.state.is_review_open() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.close_review();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.copy_message = None;

        if !self.state.current_view.is_form_view() && self.handle_global_key(key) {
            return Ok(());
        }

        match self.state.current_view {
            View::Home => self.handle_home_key(key),
            View::Services => self.handle_services_key(key),
            View::Bio => {}
            View::Contact => self.handle_contact_key(key),
        }

        Ok(())
    }

    /// Keys shared by the informational pages. Returns true when consumed.
    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Esc => self.state.go_back(),
            KeyCode::Char('y') => self.copy_contact_email(),
            KeyCode::Char(c) => match View::from_shortcut(c) {
                Some(view) => self.state.navigate(view),
                None => return false,
            },
            _ => return false,
        }
        true
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') => self.state.navigate(View::Contact),
            KeyCode::Right | KeyCode::Char('l') => self.state.select_next_testimonial(),
            KeyCode::Left | KeyCode::Char('h') => self.state.select_prev_testimonial(),
            KeyCode::Enter => self.state.open_review(),
            _ => {}
        }
    }

    fn handle_services_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.state.move_selection_down(SERVICES.len()),
            KeyCode::Up | KeyCode::Char('k') => self.state.move_selection_up(),
            KeyCode::Enter | KeyCode::Char(' ') => self.state.toggle_service_details(),
            _ => {}
        }
    }

    /// Handle keys in the Contact view
    fn handle_contact_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_contact();
                return;
            }
            KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_contact_email();
                return;
            }
            KeyCode::Esc => {
                self.state.go_back();
                return;
            }
            _ => {}
        }

        let on_send_button = self
            .state
            .contact
            .as_ref()
            .is_some_and(|page| page.form.is_send_button_active());
        if on_send_button && key.code == KeyCode::Enter {
            self.submit_contact();
            return;
        }

        let Some(page) = self.state.contact.as_mut() else {
            return;
        };
        let form = &mut page.form;

        match key.code {
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Enter => match form.active_field_name() {
                Some(field) if field.is_multiline() => form.push_char('\n'),
                _ => form.next_field(),
            },
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.push_char(c)
            }
            KeyCode::Backspace => form.pop_char(),
            _ => {}
        }
    }

    /// Run a submission attempt for the open contact page.
    ///
    /// Validation and configuration failures resolve immediately. A valid
    /// attempt spawns the relay call; its outcome is picked up by
    /// [`poll_submissions`](Self::poll_submissions).
    pub fn submit_contact(&mut self) {
        let Some(page) = self.state.contact.as_mut() else {
            return;
        };

        let dispatch = match page.controller.begin(&mut page.form, &self.relay_config) {
            SubmitStep::Dispatch(dispatch) => dispatch,
            SubmitStep::Busy | SubmitStep::Invalid | SubmitStep::Misconfigured(_) => return,
        };

        let (tx, rx) = oneshot::channel();
        let relay = Arc::clone(&self.relay);
        tokio::spawn(async move {
            let outcome = relay.send(&dispatch.credentials, &dispatch.payload).await;
            // Receiver is gone only when the app is shutting down
            let _ = tx.send(outcome);
        });

        tracing::info!("Contact message dispatched from page {}", page.id);
        self.pending.push(PendingSubmission {
            page_id: page.id,
            outcome: rx,
        });
    }

    /// Deliver finished relay calls to their contact page. Never blocks.
    pub fn poll_submissions(&mut self) {
        let mut still_pending = Vec::with_capacity(self.pending.len());

        for mut pending in std::mem::take(&mut self.pending) {
            let outcome = match pending.outcome.try_recv() {
                Ok(outcome) => outcome,
                Err(TryRecvError::Empty) => {
                    still_pending.push(pending);
                    continue;
                }
                Err(TryRecvError::Closed) => Err(RelayError::Interrupted),
            };

            match self.state.contact.as_mut() {
                Some(page) if page.id == pending.page_id => {
                    page.controller.finish(&mut page.form, outcome);
                }
                _ => tracing::info!(
                    "Dropping relay outcome for closed contact page {}: ok={}",
                    pending.page_id,
                    outcome.is_ok()
                ),
            }
        }

        self.pending = still_pending;
    }

    fn copy_contact_email(&mut self) {
        match self.copy_to_clipboard(CONTACT_EMAIL) {
            Ok(()) => self.copy_message = Some(format!("Copied {CONTACT_EMAIL}")),
            Err(err) => {
                tracing::warn!("Clipboard unavailable: {err}");
                self.push_error(format!("Could not copy to clipboard: {err}"));
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::MockMailRelay;
    use crate::state::{FieldName, FieldSet, SubmissionStatus, SENT_MESSAGE};

    fn configured() -> RelayConfig {
        RelayConfig {
            service_id: Some("service_x".to_string()),
            template_id: Some("template_y".to_string()),
            public_key: Some("pk_z".to_string()),
            ..Default::default()
        }
    }

    fn app_with(relay: MockMailRelay, config: RelayConfig) -> App {
        App::new(Arc::new(relay), config)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    /// Open Contact and fill every field through the keyboard
    fn fill_contact(app: &mut App) {
        app.handle_key(key(KeyCode::Char('4'))).unwrap();
        type_text(app, "Jane");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_text(app, "jane@example.com");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_text(app, "Dinner");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_text(app, "Party of 8");
    }

    async fn settle(app: &mut App) {
        for _ in 0..100 {
            app.poll_submissions();
            if app.pending.is_empty() {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("relay call never finished");
    }

    fn contact_fields(app: &App) -> FieldSet {
        app.state.contact.as_ref().unwrap().form.fields().clone()
    }

    fn contact_status(app: &App) -> SubmissionStatus {
        app.state
            .contact
            .as_ref()
            .unwrap()
            .controller
            .status()
            .clone()
    }

    mod navigation_keys {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_number_keys_switch_views() {
            let mut app = app_with(MockMailRelay::new(), configured());
            app.handle_key(key(KeyCode::Char('2'))).unwrap();
            assert_eq!(app.state.current_view, View::Services);
            app.handle_key(key(KeyCode::Char('3'))).unwrap();
            assert_eq!(app.state.current_view, View::Bio);
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert_eq!(app.state.current_view, View::Services);
        }

        #[test]
        fn test_q_quits_outside_form() {
            let mut app = app_with(MockMailRelay::new(), configured());
            assert!(!app.should_quit());
            app.handle_key(key(KeyCode::Char('q'))).unwrap();
            assert!(app.should_quit());
        }

        #[test]
        fn test_contact_captures_digits_and_q() {
            let mut app = app_with(MockMailRelay::new(), configured());
            app.handle_key(key(KeyCode::Char('c'))).unwrap();
            assert_eq!(app.state.current_view, View::Contact);
            type_text(&mut app, "q1");
            assert!(!app.should_quit());
            assert_eq!(app.state.current_view, View::Contact);
            assert_eq!(contact_fields(&app).name, "q1");
        }

        #[test]
        fn test_services_enter_toggles_details() {
            let mut app = app_with(MockMailRelay::new(), configured());
            app.handle_key(key(KeyCode::Char('2'))).unwrap();
            app.handle_key(key(KeyCode::Char('j'))).unwrap();
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.state.expanded_service, Some(1));
        }

        #[test]
        fn test_error_dialog_is_modal() {
            let mut app = app_with(MockMailRelay::new(), configured());
            app.push_error("Clipboard broke");
            app.handle_key(key(KeyCode::Char('2'))).unwrap();
            assert_eq!(app.state.current_view, View::Home);
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert!(!app.state.has_errors());
        }

        #[test]
        fn test_review_dialog_swallows_keys_until_closed() {
            let mut app = app_with(MockMailRelay::new(), configured());
            app.handle_key(key(KeyCode::Char('l'))).unwrap();
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(
                app.state.open_testimonial().map(|t| t.name),
                Some(crate::content::TESTIMONIALS[1].name)
            );

            app.handle_key(key(KeyCode::Char('q'))).unwrap();
            app.handle_key(key(KeyCode::Char('4'))).unwrap();
            assert!(!app.should_quit());
            assert_eq!(app.state.current_view, View::Home);

            // Esc closes the dialog without leaving Home
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert!(!app.state.is_review_open());
            assert_eq!(app.state.current_view, View::Home);
        }
    }

    mod contact_editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_enter_in_message_adds_newline() {
            let mut app = app_with(MockMailRelay::new(), configured());
            fill_contact(&mut app);
            app.handle_key(key(KeyCode::Enter)).unwrap();
            type_text(&mut app, "Thanks");
            assert_eq!(contact_fields(&app).message, "Party of 8\nThanks");
        }

        #[test]
        fn test_enter_in_single_line_field_advances() {
            let mut app = app_with(MockMailRelay::new(), configured());
            app.handle_key(key(KeyCode::Char('4'))).unwrap();
            app.handle_key(key(KeyCode::Enter)).unwrap();
            let page = app.state.contact.as_ref().unwrap();
            assert_eq!(page.form.active_field_name(), Some(FieldName::Email));
            assert!(page.form.touched().is_touched(FieldName::Name));
        }

        #[test]
        fn test_backspace_removes_last_char() {
            let mut app = app_with(MockMailRelay::new(), configured());
            app.handle_key(key(KeyCode::Char('4'))).unwrap();
            type_text(&mut app, "Janex");
            app.handle_key(key(KeyCode::Backspace)).unwrap();
            assert_eq!(contact_fields(&app).name, "Jane");
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_invalid_form_never_dispatches() {
            let mut relay = MockMailRelay::new();
            relay.expect_send().times(0);
            let mut app = app_with(relay, configured());

            app.handle_key(key(KeyCode::Char('4'))).unwrap();
            app.handle_key(ctrl('s')).unwrap();

            assert!(app.pending.is_empty());
            assert!(!app.is_submitting());
            assert_eq!(
                contact_status(&app),
                SubmissionStatus::Failure("Please fix the highlighted fields.".to_string())
            );
        }

        #[tokio::test]
        async fn test_valid_form_sends_once_and_clears() {
            let mut relay = MockMailRelay::new();
            relay
                .expect_send()
                .withf(|_, payload| payload.name == "Jane" && payload.message == "Party of 8")
                .times(1)
                .returning(|_, _| Ok(()));
            let mut app = app_with(relay, configured());

            fill_contact(&mut app);
            app.handle_key(ctrl('s')).unwrap();
            assert!(app.is_submitting());

            // Second trigger while in flight is ignored
            app.handle_key(ctrl('s')).unwrap();
            assert_eq!(app.pending.len(), 1);

            settle(&mut app).await;
            assert!(!app.is_submitting());
            assert_eq!(
                contact_status(&app),
                SubmissionStatus::Success(SENT_MESSAGE.to_string())
            );
            assert_eq!(contact_fields(&app), FieldSet::default());
        }

        #[tokio::test]
        async fn test_enter_on_send_button_submits() {
            let mut relay = MockMailRelay::new();
            relay.expect_send().times(1).returning(|_, _| Ok(()));
            let mut app = app_with(relay, configured());

            fill_contact(&mut app);
            app.handle_key(key(KeyCode::Tab)).unwrap();
            app.handle_key(key(KeyCode::Enter)).unwrap();
            settle(&mut app).await;
            assert!(contact_status(&app).is_success());
        }

        #[tokio::test]
        async fn test_relay_failure_keeps_fields() {
            let mut relay = MockMailRelay::new();
            relay
                .expect_send()
                .times(1)
                .returning(|_, _| Err(RelayError::Interrupted));
            let mut app = app_with(relay, configured());

            fill_contact(&mut app);
            let typed = contact_fields(&app);
            app.handle_key(ctrl('s')).unwrap();
            settle(&mut app).await;

            assert_eq!(contact_fields(&app), typed);
            assert!(!contact_status(&app).is_success());
            assert!(!app.is_submitting());
        }

        #[tokio::test]
        async fn test_missing_config_never_dispatches() {
            let mut relay = MockMailRelay::new();
            relay.expect_send().times(0);
            let config = RelayConfig {
                template_id: None,
                ..configured()
            };
            let mut app = app_with(relay, config);

            fill_contact(&mut app);
            app.handle_key(ctrl('s')).unwrap();

            assert!(app.pending.is_empty());
            assert!(!app.is_submitting());
            assert!(matches!(contact_status(&app), SubmissionStatus::Failure(_)));
        }

        #[test]
        fn test_dead_relay_task_clears_flag() {
            let mut app = app_with(MockMailRelay::new(), configured());
            fill_contact(&mut app);

            // Stand in for a relay task that died before reporting back
            let page = app.state.contact.as_mut().unwrap();
            let step = page.controller.begin(&mut page.form, &configured());
            assert!(matches!(step, SubmitStep::Dispatch(_)));
            let page_id = page.id;
            let (tx, rx) = oneshot::channel();
            app.pending.push(PendingSubmission {
                page_id,
                outcome: rx,
            });
            drop(tx);

            app.poll_submissions();
            assert!(app.pending.is_empty());
            assert!(!app.is_submitting());
            assert!(matches!(contact_status(&app), SubmissionStatus::Failure(_)));
        }

        #[tokio::test]
        async fn test_outcome_for_closed_page_is_dropped() {
            let mut relay = MockMailRelay::new();
            relay.expect_send().times(1).returning(|_, _| Ok(()));
            let mut app = app_with(relay, configured());

            fill_contact(&mut app);
            app.handle_key(ctrl('s')).unwrap();
            app.handle_key(key(KeyCode::Esc)).unwrap();
            app.handle_key(key(KeyCode::Char('4'))).unwrap();
            type_text(&mut app, "Sam");

            settle(&mut app).await;
            assert_eq!(contact_status(&app), SubmissionStatus::None);
            assert_eq!(contact_fields(&app).name, "Sam");
        }
    }
}
