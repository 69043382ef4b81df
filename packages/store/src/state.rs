//! # Page state
//!
//! [`PageState`] is the single source of truth owned by the landing page root.
//! Children receive plain values from it plus callbacks that end up in one of
//! the mutators below.
//!
//! | Mutator | Effect |
//! |---------|--------|
//! | [`toggle_dark_mode`](PageState::toggle_dark_mode) | Flips the theme flag. Touches nothing else. |
//! | [`sign_in`](PageState::sign_in) | Replaces the session record; dropdown starts closed. |
//! | [`sign_out`](PageState::sign_out) | Clears the session record and closes the dropdown. |
//! | [`toggle_user_menu`](PageState::toggle_user_menu) | Flips the dropdown while signed in. |
//! | [`close_user_menu`](PageState::close_user_menu) | Closes the dropdown (outside click). |
//!
//! The dropdown flag is stored next to the user so the sign-out mutator can
//! reset it; a flag that outlives its session would reopen on the next sign-in.

use crate::models::UserRecord;
use crate::theme::Theme;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    pub dark_mode: bool,
    pub user: Option<UserRecord>,
    user_menu_open: bool,
}

/// What the navbar's session section renders.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionView<'a> {
    SignedOut,
    SignedIn {
        user: &'a UserRecord,
        menu_open: bool,
    },
}

impl<'a> SessionView<'a> {
    /// The dropdown flag is ignored while `user` is absent.
    pub fn new(user: Option<&'a UserRecord>, menu_open: bool) -> Self {
        match user {
            Some(user) => SessionView::SignedIn { user, menu_open },
            None => SessionView::SignedOut,
        }
    }
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.dark_mode)
    }

    /// Always `false` while signed out.
    pub fn user_menu_open(&self) -> bool {
        self.user.is_some() && self.user_menu_open
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn sign_in(&mut self, user: UserRecord) {
        self.user = Some(user);
        self.user_menu_open = false;
    }

    pub fn sign_out(&mut self) {
        self.user = None;
        self.user_menu_open = false;
    }

    /// No-op while signed out.
    pub fn toggle_user_menu(&mut self) {
        if self.user.is_some() {
            self.user_menu_open = !self.user_menu_open;
        }
    }

    pub fn close_user_menu(&mut self) {
        self.user_menu_open = false;
    }

    pub fn session_view(&self) -> SessionView<'_> {
        SessionView::new(self.user.as_ref(), self.user_menu_open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> UserRecord {
        UserRecord::new("1", "John Doe", "john@example.com")
    }

    #[test]
    fn test_initial_state() {
        let state = PageState::new();
        assert!(!state.dark_mode);
        assert!(state.user.is_none());
        assert!(!state.user_menu_open());
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn test_toggle_dark_mode_twice_restores() {
        let mut state = PageState::new();
        for initial in [false, true] {
            state.dark_mode = initial;
            state.toggle_dark_mode();
            assert_eq!(state.dark_mode, !initial);
            state.toggle_dark_mode();
            assert_eq!(state.dark_mode, initial);
        }
    }

    #[test]
    fn test_sign_in_then_sign_out() {
        let mut state = PageState::new();
        state.sign_in(john());
        assert!(state.user.is_some());

        state.sign_out();
        assert!(state.user.is_none());
        assert_eq!(state.session_view(), SessionView::SignedOut);
    }

    #[test]
    fn test_signed_out_never_exposes_menu() {
        let mut state = PageState::new();
        state.toggle_user_menu();
        assert_eq!(state.session_view(), SessionView::SignedOut);
        assert!(!state.user_menu_open());

        state.toggle_dark_mode();
        state.toggle_user_menu();
        assert_eq!(state.session_view(), SessionView::SignedOut);
    }

    #[test]
    fn test_sign_out_closes_open_menu() {
        let mut state = PageState::new();
        state.sign_in(john());
        state.toggle_user_menu();
        assert!(state.user_menu_open());

        state.sign_out();
        assert!(!state.user_menu_open());

        // Signing back in must not resurrect the old dropdown.
        state.sign_in(john());
        assert_eq!(
            state.session_view(),
            SessionView::SignedIn {
                user: &john(),
                menu_open: false,
            }
        );
    }

    #[test]
    fn test_toggle_theme_keeps_session_state() {
        let mut state = PageState::new();
        state.sign_in(john());
        state.toggle_user_menu();

        state.toggle_dark_mode();
        assert_eq!(state.user, Some(john()));
        assert!(state.user_menu_open());

        state.toggle_dark_mode();
        assert_eq!(state.user, Some(john()));
        assert!(state.user_menu_open());
    }

    #[test]
    fn test_session_view_ignores_flag_without_user() {
        assert_eq!(SessionView::new(None, true), SessionView::SignedOut);
        let user = john();
        assert_eq!(
            SessionView::new(Some(&user), true),
            SessionView::SignedIn {
                user: &user,
                menu_open: true,
            }
        );
    }

    #[test]
    fn test_toggle_and_close_user_menu() {
        let mut state = PageState::new();
        state.sign_in(john());

        state.toggle_user_menu();
        assert!(state.user_menu_open());
        state.toggle_user_menu();
        assert!(!state.user_menu_open());

        state.toggle_user_menu();
        state.close_user_menu();
        assert!(!state.user_menu_open());
    }
}
