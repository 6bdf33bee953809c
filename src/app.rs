// src/app.rs

//! Framework-agnostic request handlers.
//!
//! Each handler is a function of (application state, request data) and
//! returns a typed view model or a redirect-with-flash outcome. A web
//! framework adapter owns routing, cookies, and templating; nothing
//! here renders HTML or touches a socket except through the services.

use std::collections::HashMap;

use crate::error::{AppError, Result};
use crate::models::{Config, Page, QuizResult};
use crate::services::quiz::{self, Question};
use crate::services::resources::{self, SubjectResources};
use crate::services::{CatalogClient, ServiceDirectory, importer, paginator};
use crate::store::{SessionStore, UserStore};
use crate::utils::slugify;

/// Flash message severities, mirroring the usual framework levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Info,
    Error,
}

/// A one-shot user-visible message attached to a redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }
}

/// Routes the adapter can redirect to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    FrontPage,
    Dashboard,
    Quiz,
    QuizResult,
    StudyHome,
}

/// Handler outcome: render a view or redirect with an optional flash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response<V> {
    View(V),
    Redirect { to: Route, flash: Option<Flash> },
}

impl<V> Response<V> {
    fn redirect(to: Route) -> Self {
        Self::Redirect { to, flash: None }
    }

    fn redirect_with(to: Route, flash: Flash) -> Self {
        Self::Redirect {
            to,
            flash: Some(flash),
        }
    }
}

/// Dashboard view model.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub username: String,
    pub full_name: String,
    pub subjects: Vec<String>,
    pub quiz: Option<QuizResult>,
}

/// Quiz result view model.
#[derive(Debug, Clone)]
pub struct QuizResultView {
    pub result: QuizResult,
    pub tips: &'static [&'static str],
}

/// Study home view model: subjects with their routing slugs.
#[derive(Debug, Clone)]
pub struct StudyHomeView {
    pub subjects: Vec<SubjectLink>,
}

#[derive(Debug, Clone)]
pub struct SubjectLink {
    pub display: String,
    pub slug: String,
}

/// Single-subject view model.
#[derive(Debug, Clone)]
pub struct SubjectView {
    pub subject: String,
    pub resources: SubjectResources,
}

/// Fields of a `POST /study/add` form.
#[derive(Debug, Clone, Default)]
pub struct StudyAddForm {
    /// LMS access token; non-empty triggers a catalog import
    pub token: String,

    /// Manually entered subject name
    pub manual_subject: String,
}

/// Application state shared across requests.
pub struct App {
    pub users: UserStore,
    pub sessions: SessionStore,
    pub directory: ServiceDirectory,
    pub catalog: CatalogClient,
}

impl App {
    /// Build the application from configuration.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            users: UserStore::new(),
            sessions: SessionStore::new(config.session.ttl_secs),
            directory: ServiceDirectory::new(config.scraper)?,
            catalog: CatalogClient::new(config.catalog)?,
        })
    }

    /// Resolve a session token to a username, or redirect to the front page.
    fn require_user<V>(&self, session: Option<&str>) -> std::result::Result<String, Response<V>> {
        session
            .and_then(|token| self.sessions.resolve(token))
            .ok_or_else(|| Response::redirect(Route::FrontPage))
    }

    /// `GET /`: landing page, or straight to the dashboard when logged in.
    pub fn front_page(&self, session: Option<&str>) -> Response<()> {
        match self.require_user::<()>(session) {
            Ok(_) => Response::redirect(Route::Dashboard),
            Err(_) => Response::View(()),
        }
    }

    /// `POST /signup`: create an account, redirect with a flash either way.
    pub fn signup(&self, username: &str, password: &str, full_name: &str) -> Response<()> {
        let flash = match self.users.signup(username, password, full_name) {
            Ok(()) => Flash::success("Signup successful! Please log in."),
            Err(e) => Flash::error(user_message(&e)),
        };
        Response::redirect_with(Route::FrontPage, flash)
    }

    /// `POST /login`: authenticate and mint a session token.
    ///
    /// `Ok(token)` means the adapter should set the session cookie and
    /// redirect to the dashboard; `Err` carries the flash for the front
    /// page redirect.
    pub fn login(&self, username: &str, password: &str) -> std::result::Result<String, Flash> {
        match self.users.authenticate(username, password) {
            Ok(username) => Ok(self.sessions.create(&username)),
            Err(e) => Err(Flash::error(user_message(&e))),
        }
    }

    /// `POST /logout`: clear the session.
    pub fn logout(&self, session: Option<&str>) -> Response<()> {
        if let Some(token) = session {
            self.sessions.revoke(token);
        }
        Response::redirect_with(Route::FrontPage, Flash::success("You have been logged out."))
    }

    /// `GET /dashboard`.
    pub fn dashboard(&self, session: Option<&str>) -> Response<DashboardView> {
        let username = match self.require_user(session) {
            Ok(u) => u,
            Err(r) => return r,
        };
        let state = self.users.state(&username);
        Response::View(DashboardView {
            full_name: self.users.full_name(&username),
            username,
            subjects: state.subjects,
            quiz: state.quiz,
        })
    }

    /// `GET /quiz`: the fixed question set.
    pub fn quiz_questions(&self, session: Option<&str>) -> Response<&'static [Question]> {
        match self.require_user(session) {
            Ok(_) => Response::View(quiz::QUIZ_QUESTIONS),
            Err(r) => r,
        }
    }

    /// `POST /quiz`: score, store, redirect to the result view.
    pub fn submit_quiz(
        &self,
        session: Option<&str>,
        answers: &HashMap<String, String>,
    ) -> Response<()> {
        let username = match self.require_user(session) {
            Ok(u) => u,
            Err(r) => return r,
        };
        let result = quiz::score_answers(answers);
        log::info!(
            "Quiz submitted by {username}: score {} ({})",
            result.score,
            result.level.label()
        );
        self.users.set_quiz_result(&username, result);
        Response::redirect(Route::QuizResult)
    }

    /// `GET /quiz/result`: last result + tips, or back to the quiz.
    pub fn quiz_result(&self, session: Option<&str>) -> Response<QuizResultView> {
        let username = match self.require_user(session) {
            Ok(u) => u,
            Err(r) => return r,
        };
        match self.users.state(&username).quiz {
            Some(result) => Response::View(QuizResultView {
                tips: quiz::tips_for(result.level),
                result,
            }),
            None => Response::redirect(Route::Quiz),
        }
    }

    /// `GET /study`.
    pub fn study_home(&self, session: Option<&str>) -> Response<StudyHomeView> {
        let username = match self.require_user(session) {
            Ok(u) => u,
            Err(r) => return r,
        };
        let subjects = self
            .users
            .state(&username)
            .subjects
            .into_iter()
            .map(|display| SubjectLink {
                slug: slugify(&display),
                display,
            })
            .collect();
        Response::View(StudyHomeView { subjects })
    }

    /// `POST /study/add`: catalog import (token) or manual add.
    pub async fn study_add(&self, session: Option<&str>, form: StudyAddForm) -> Response<()> {
        let username = match self.require_user(session) {
            Ok(u) => u,
            Err(r) => return r,
        };

        let token = form.token.trim();
        if !token.is_empty() {
            let flash = match self.catalog.fetch_courses(token).await {
                Ok(courses) => {
                    let subjects = importer::extract_subject_names(&courses);
                    if subjects.is_empty() {
                        Flash::info("No courses found on the LMS for this account.")
                    } else if self.users.import_subjects(&username, &subjects) {
                        Flash::success("Subjects imported from the LMS.")
                    } else {
                        Flash::info("All LMS subjects were already in your list.")
                    }
                }
                Err(e) => Flash::error(user_message(&e)),
            };
            return Response::redirect_with(Route::StudyHome, flash);
        }

        let manual = form.manual_subject.trim();
        if !manual.is_empty() {
            self.users.add_subject(&username, manual);
            return Response::redirect_with(
                Route::StudyHome,
                Flash::success(format!("Added subject: {manual}")),
            );
        }

        Response::redirect_with(
            Route::StudyHome,
            Flash::error("Enter a token to import or a subject name to add."),
        )
    }

    /// `GET /study/{slug}`: resolve a slug back to a subject in the
    /// user's list.
    pub fn study_subject(&self, session: Option<&str>, slug: &str) -> Response<SubjectView> {
        let username = match self.require_user(session) {
            Ok(u) => u,
            Err(r) => return r,
        };
        let display = self
            .users
            .state(&username)
            .subjects
            .into_iter()
            .find(|s| slugify(s) == slug);

        match display {
            Some(subject) => Response::View(SubjectView {
                resources: resources::resources_for(&subject),
                subject,
            }),
            None => Response::redirect_with(Route::StudyHome, Flash::error("Subject not found.")),
        }
    }

    /// `GET /programs?page=&page_size=`: paginated services catalog.
    ///
    /// Parameter parsing falls back silently (page 1, size 20); a fetch
    /// failure on a cold cache propagates to the caller.
    pub async fn programs(&self, page: Option<&str>, page_size: Option<&str>) -> Result<Page> {
        let page = paginator::parse_page_number(page.unwrap_or("1"));
        let page_size = paginator::parse_page_size(page_size.unwrap_or("20"));
        let items = self.directory.get_all_services().await?;
        Ok(paginator::paginate(&items, page, page_size))
    }
}

/// Message shown to the user for a handler-level error.
fn user_message(error: &AppError) -> String {
    match error {
        AppError::Validation(message) => message.clone(),
        AppError::Auth | AppError::Permission | AppError::Status(_) => {
            let status = error
                .status()
                .map(|code| code.to_string())
                .unwrap_or_else(|| "unknown".to_string());
            format!("Catalog API error ({status}): {error}")
        }
        AppError::Shape(message) => format!("Unexpected catalog response: {message}"),
        AppError::Http(e) => format!("Network error calling the course catalog: {e}"),
        other => other.to_string(),
    }
}
