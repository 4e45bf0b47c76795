//! Application state definitions

use super::forms::ContactForm;
use super::submission::SubmissionController;
use crate::content::{Testimonial, SERVICES, TESTIMONIALS};
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Services,
    Bio,
    Contact,
}

impl View {
    /// Views in navigation order
    pub const ALL: [View; 4] = [View::Home, View::Services, View::Bio, View::Contact];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Services => "Services",
            Self::Bio => "Bio",
            Self::Contact => "Contact",
        }
    }

    /// Number key that jumps to this view
    pub fn shortcut(&self) -> char {
        match self {
            Self::Home => '1',
            Self::Services => '2',
            Self::Bio => '3',
            Self::Contact => '4',
        }
    }

    pub fn from_shortcut(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.shortcut() == c)
    }

    /// Views that capture typed characters
    pub fn is_form_view(&self) -> bool {
        matches!(self, Self::Contact)
    }
}

/// One mounted instance of the contact page.
///
/// Created when the Contact view opens and dropped when it closes, so typed
/// content and status never outlive the visit.
#[derive(Debug, Default)]
pub struct ContactPage {
    /// Distinguishes this instance from earlier visits
    pub id: u64,
    pub form: ContactForm,
    pub controller: SubmissionController,
}

impl ContactPage {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            form: ContactForm::new(),
            controller: SubmissionController::new(),
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    // Home page feedback cards
    pub selected_testimonial: usize,
    /// Testimonial shown in the review dialog, if open
    reviewing: Option<usize>,

    // Services page
    pub selected_index: usize,
    pub expanded_service: Option<usize>,

    // Contact page
    pub contact: Option<ContactPage>,
    next_contact_id: u64,

    // Errors waiting to be shown in the error dialog
    errors: VecDeque<String>,
}

impl AppState {
    /// Switch views, recording the current one in history
    pub fn navigate(&mut self, view: View) {
        if view == self.current_view {
            return;
        }
        self.view_history.push(self.current_view);
        self.enter(view);
    }

    /// Go back to the previous view
    pub fn go_back(&mut self) {
        if let Some(view) = self.view_history.pop() {
            self.enter(view);
        }
    }

    fn enter(&mut self, view: View) {
        if view != View::Home {
            self.reviewing = None;
        }
        if self.current_view == View::Contact && view != View::Contact {
            self.contact = None;
        }
        if view == View::Contact && self.contact.is_none() {
            self.next_contact_id += 1;
            self.contact = Some(ContactPage::new(self.next_contact_id));
        }
        if view == View::Services {
            self.selected_index = 0;
            self.expanded_service = None;
        }
        self.current_view = view;
    }

    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Expand the selected service, or collapse it if it is already open
    pub fn toggle_service_details(&mut self) {
        if self.selected_index >= SERVICES.len() {
            return;
        }
        self.expanded_service = if self.expanded_service == Some(self.selected_index) {
            None
        } else {
            Some(self.selected_index)
        };
    }

    pub fn select_next_testimonial(&mut self) {
        if self.selected_testimonial + 1 < TESTIMONIALS.len() {
            self.selected_testimonial += 1;
        }
    }

    pub fn select_prev_testimonial(&mut self) {
        self.selected_testimonial = self.selected_testimonial.saturating_sub(1);
    }

    /// Open the full review for the selected card
    pub fn open_review(&mut self) {
        if self.selected_testimonial < TESTIMONIALS.len() {
            self.reviewing = Some(self.selected_testimonial);
        }
    }

    pub fn close_review(&mut self) {
        self.reviewing = None;
    }

    pub fn is_review_open(&self) -> bool {
        self.reviewing.is_some()
    }

    pub fn open_testimonial(&self) -> Option<&'static Testimonial> {
        self.reviewing.and_then(|idx| TESTIMONIALS.get(idx))
    }

    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    /// Errors waiting behind the one on screen
    pub fn queued_error_count(&self) -> usize {
        self.errors.len().saturating_sub(1)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}
