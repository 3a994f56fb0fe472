use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum_extra::extract::CookieJar;

use crate::error::AppError;
use crate::form::{ComplaintType, FormSession, Phase};
use crate::i18n::UiStrings;
use crate::state::SharedState;

struct ComplaintOption {
    value: &'static str,
    label: &'static str,
    selected: bool,
}

#[derive(Template)]
#[template(path = "form.html")]
pub struct FormPageTemplate {
    t: &'static UiStrings,
    lang: &'static str,
    dir: &'static str,
    success: bool,
    submitting: bool,
    error: Option<&'static str>,
    customer_name: String,
    notes: String,
    no_type_selected: bool,
    options: Vec<ComplaintOption>,
}

impl FormPageTemplate {
    pub fn from_session(session: &FormSession) -> Self {
        let language = session.language();
        let t = language.strings();
        let fields = session.fields();

        let options = ComplaintType::ALL
            .into_iter()
            .map(|kind| ComplaintOption {
                value: kind.value(),
                label: t.complaint_label(kind),
                selected: fields.complaint_type == Some(kind),
            })
            .collect();

        FormPageTemplate {
            t,
            lang: language.code(),
            dir: language.direction().as_str(),
            success: session.phase() == Phase::Success,
            submitting: session.phase() == Phase::Submitting,
            error: session.notice().map(|notice| notice.message(t)),
            customer_name: fields.customer_name.clone(),
            notes: fields.notes.clone(),
            no_type_selected: fields.complaint_type.is_none(),
            options,
        }
    }
}

pub async fn page(
    State(state): State<SharedState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let (jar, id) = state.sessions.resolve_jar(jar, state.config.secure_cookie);
    let session = state
        .sessions
        .get(id)
        .ok_or_else(|| AppError::Internal("Session vanished during request".to_string()))?;

    let html = FormPageTemplate::from_session(&session).render()?;
    Ok((jar, Html(html)))
}
