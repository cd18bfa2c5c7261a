//! Pure description of what the main content region shows.
//!
//! [`render_view`] turns the current [`Route`] and [`Records`] into a [`View`] without
//! touching the DOM. [`crate::views::MainContent`] renders the result, and the tests
//! below check the page logic against a [`store::MemoryStore`].

use store::{FeedbackEntry, Records, UserRecord};

use crate::route::Route;

#[derive(Clone, Debug, PartialEq)]
pub enum View {
    Home,
    Feedback(FeedbackListing),
    About,
    Auth(AuthSurface),
}

/// Feedback list contents, newest first.
#[derive(Clone, Debug, PartialEq)]
pub enum FeedbackListing {
    Empty,
    Entries(Vec<FeedbackEntry>),
}

/// The two states of the login page.
#[derive(Clone, Debug, PartialEq)]
pub enum AuthSurface {
    Anonymous,
    Authenticated(UserRecord),
}

impl FeedbackListing {
    pub fn from_records(records: &Records) -> Self {
        let entries = records.feedback_newest_first();
        if entries.is_empty() {
            FeedbackListing::Empty
        } else {
            FeedbackListing::Entries(entries)
        }
    }
}

impl AuthSurface {
    pub fn from_session(session: Option<UserRecord>) -> Self {
        match session {
            Some(user) => AuthSurface::Authenticated(user),
            None => AuthSurface::Anonymous,
        }
    }
}

pub fn render_view(route: Route, records: &Records) -> View {
    match route {
        Route::Home => View::Home,
        Route::Feedback => View::Feedback(FeedbackListing::from_records(records)),
        Route::About => View::About,
        Route::Auth => View::Auth(AuthSurface::from_session(records.session())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{Credentials, FeedbackForm, MemoryStore, Registration};

    fn records() -> Records {
        Records::new(MemoryStore::new())
    }

    #[test]
    fn test_static_routes() {
        let records = records();
        assert_eq!(render_view(Route::Home, &records), View::Home);
        assert_eq!(render_view(Route::About, &records), View::About);
        assert_eq!(
            render_view(Route::from_fragment("#unknown"), &records),
            View::Home
        );
    }

    #[test]
    fn test_feedback_view_lists_newest_first() {
        let records = records();
        assert_eq!(
            render_view(Route::Feedback, &records),
            View::Feedback(FeedbackListing::Empty)
        );

        for message in ["A", "B", "C"] {
            let form = FeedbackForm {
                name: "Sam".to_string(),
                email: "sam@example.com".to_string(),
                message: message.to_string(),
            };
            records.submit_feedback(&form, "now".to_string()).unwrap();
        }

        let View::Feedback(FeedbackListing::Entries(entries)) =
            render_view(Route::Feedback, &records)
        else {
            panic!("expected feedback entries");
        };
        let order: Vec<&str> = entries.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(order, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_auth_view_follows_session() {
        let records = records();
        assert_eq!(
            render_view(Route::Auth, &records),
            View::Auth(AuthSurface::Anonymous)
        );

        let user = records
            .register(&Registration {
                name: "Kim".to_string(),
                email: "kim@example.com".to_string(),
                mobile: "07700 900123".to_string(),
            })
            .unwrap();
        assert_eq!(
            render_view(Route::Auth, &records),
            View::Auth(AuthSurface::Authenticated(user.clone()))
        );

        records.logout();
        assert_eq!(
            render_view(Route::Auth, &records),
            View::Auth(AuthSurface::Anonymous)
        );

        // Email alone is not enough to get back in
        assert!(records
            .login(&Credentials {
                email: "kim@example.com".to_string(),
                mobile: "000".to_string(),
            })
            .is_err());
        assert_eq!(
            render_view(Route::Auth, &records),
            View::Auth(AuthSurface::Anonymous)
        );
    }
}
