//! Exam Center: list, create, start, sit, and submit exams.
//!
//! Teachers schedule exams with their questions and move them to LIVE;
//! students open a live exam and hand in per-question answers. All
//! failures surface as toasts, no retries.

use std::collections::HashMap;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loading_skeleton::{LoadingSkeleton, SkeletonKind};
use crate::components::toast_host::show_toast;
use crate::net::api;
use crate::net::types::{
    CreateExamRequest, CreateQuestionRequest, Exam, ExamAnswer, ExamDetail, ExamState,
    SubmitExamRequest,
};
use crate::state::session::SessionState;
use crate::state::toast::{ToastKind, ToastState};

fn state_label(state: ExamState) -> &'static str {
    match state {
        ExamState::Scheduled => "Scheduled",
        ExamState::Live => "Live",
        ExamState::Completed => "Completed",
    }
}

/// Exam Center page.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn ExamsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    // Redirect to login if not authenticated.
    Effect::new(move || {
        let state = session.get();
        if !state.is_loading() && !state.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    // Exam list resource; fetches on mount, refetched after mutations.
    let exams = LocalResource::new(|| api::fetch_exams());

    // The exam currently opened for sitting.
    let selected = RwSignal::new(None::<ExamDetail>);
    let answers = RwSignal::new(HashMap::<String, String>::new());

    let is_teacher = move || session.get().is_teacher();

    let on_open = move |exam_id: String| {
        leptos::task::spawn_local(async move {
            match api::fetch_exam_detail(&exam_id).await {
                Ok(detail) => {
                    answers.set(HashMap::new());
                    selected.set(Some(detail));
                }
                Err(err) => show_toast(toasts, err.message(), ToastKind::Error),
            }
        });
    };

    let on_start = move |exam_id: String| {
        leptos::task::spawn_local(async move {
            match api::start_exam(&exam_id).await {
                Ok(exam) => {
                    show_toast(
                        toasts,
                        format!("\"{}\" is now live", exam.title),
                        ToastKind::Success,
                    );
                    exams.refetch();
                }
                Err(err) => show_toast(toasts, err.message(), ToastKind::Error),
            }
        });
    };

    view! {
        <div class="exams-page">
            <header class="exams-page__header">
                <h1>"Exam Center"</h1>
            </header>

            <Show when=is_teacher>
                <CreateExamForm exams=exams/>
            </Show>

            <section class="card">
                <h2 class="card__title">"Exams"</h2>
                <Suspense fallback=|| view! { <LoadingSkeleton kind=SkeletonKind::Row count=3/> }>
                    {move || {
                        exams
                            .get()
                            .map(|result| match result {
                                Ok(list) => {
                                    if list.is_empty() {
                                        view! {
                                            <p class="exams-page__empty">"No exams scheduled yet."</p>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <div class="exams-page__list">
                                                {list
                                                    .into_iter()
                                                    .map(|exam| {
                                                        view! {
                                                            <ExamRow
                                                                exam=exam
                                                                teacher=is_teacher()
                                                                on_open=on_open
                                                                on_start=on_start
                                                            />
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                        }
                                            .into_any()
                                    }
                                }
                                Err(err) => {
                                    view! {
                                        <p class="exams-page__error">{err.message()}</p>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>

            <Show when=move || selected.get().is_some()>
                <ExamSheet selected=selected answers=answers/>
            </Show>
        </div>
    }
}

/// One row in the exam list with role-appropriate actions.
#[component]
fn ExamRow(
    exam: Exam,
    teacher: bool,
    on_open: impl Fn(String) + Copy + Send + Sync + 'static,
    on_start: impl Fn(String) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let state_class = match exam.state {
        ExamState::Scheduled => "exam-row__state--scheduled",
        ExamState::Live => "exam-row__state--live",
        ExamState::Completed => "exam-row__state--completed",
    };
    let can_start = teacher && exam.state == ExamState::Scheduled;
    let can_open = exam.state == ExamState::Live;
    let start_id = exam.id.clone();
    let open_id = exam.id.clone();

    view! {
        <div class="exam-row">
            <div class="exam-row__info">
                <span class="exam-row__title">{exam.title}</span>
                {exam
                    .description
                    .map(|d| view! { <span class="exam-row__description">{d}</span> })}
            </div>
            <span class=format!("exam-row__state {state_class}")>{state_label(exam.state)}</span>
            <div class="exam-row__actions">
                <Show when=move || can_start>
                    <button
                        class="btn btn--secondary"
                        on:click={
                            let start_id = start_id.clone();
                            move |_| on_start(start_id.clone())
                        }
                    >
                        "Start"
                    </button>
                </Show>
                <Show when=move || can_open>
                    <button class="btn btn--primary" on:click={
                        let open_id = open_id.clone();
                        move |_| on_open(open_id.clone())
                    }>
                        "Open"
                    </button>
                </Show>
            </div>
        </div>
    }
}

/// Teacher-only form: title, description, and an incrementally built
/// question list.
#[component]
fn CreateExamForm(
    exams: LocalResource<Result<Vec<Exam>, crate::net::http::ApiError>>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let question_text = RwSignal::new(String::new());
    let questions = RwSignal::new(Vec::<String>::new());
    let pending = RwSignal::new(false);

    let on_add_question = move |_| {
        let text = question_text.get();
        if text.trim().is_empty() {
            return;
        }
        questions.update(|q| q.push(text.trim().to_owned()));
        question_text.set(String::new());
    };

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        if title.get().trim().is_empty() {
            show_toast(toasts, "Give the exam a title first.", ToastKind::Warning);
            return;
        }
        if questions.get().is_empty() {
            show_toast(toasts, "Add at least one question.", ToastKind::Warning);
            return;
        }
        pending.set(true);

        let request = CreateExamRequest {
            title: title.get().trim().to_owned(),
            description: description.get().trim().to_owned(),
            start_time: None,
            questions: questions
                .get()
                .into_iter()
                .map(|text| CreateQuestionRequest { text })
                .collect(),
        };

        leptos::task::spawn_local(async move {
            match api::create_exam(&request).await {
                Ok(exam) => {
                    show_toast(
                        toasts,
                        format!("\"{}\" scheduled", exam.title),
                        ToastKind::Success,
                    );
                    title.set(String::new());
                    description.set(String::new());
                    questions.set(Vec::new());
                    exams.refetch();
                }
                Err(err) => show_toast(toasts, err.message(), ToastKind::Error),
            }
            pending.set(false);
        });
    };

    view! {
        <section class="card">
            <h2 class="card__title">"Schedule an exam"</h2>
            <form class="exam-form" on:submit=on_create>
                <label class="form-field">
                    <span class="form-field__label">"Title"</span>
                    <input
                        class="form-field__input"
                        prop:value=title
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span class="form-field__label">"Description"</span>
                    <input
                        class="form-field__input"
                        prop:value=description
                        on:input=move |ev| description.set(event_target_value(&ev))
                    />
                </label>

                <div class="exam-form__questions">
                    {move || {
                        questions
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, text)| {
                                view! {
                                    <div class="exam-form__question">
                                        <span>{format!("{}. {text}", index + 1)}</span>
                                        <button
                                            type="button"
                                            class="exam-form__remove"
                                            on:click=move |_| {
                                                questions.update(|q| {
                                                    q.remove(index);
                                                });
                                            }
                                        >
                                            "Remove"
                                        </button>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <div class="exam-form__add">
                    <input
                        class="form-field__input"
                        placeholder="Question text..."
                        prop:value=question_text
                        on:input=move |ev| question_text.set(event_target_value(&ev))
                    />
                    <button type="button" class="btn btn--secondary" on:click=on_add_question>
                        "Add question"
                    </button>
                </div>

                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Scheduling\u{2026}" } else { "Create exam" }}
                </button>
            </form>
        </section>
    }
}

/// The opened exam: ordered questions with answer fields and submission.
#[component]
fn ExamSheet(
    selected: RwSignal<Option<ExamDetail>>,
    answers: RwSignal<HashMap<String, String>>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let Some(detail) = selected.get() else {
            return;
        };
        submitting.set(true);

        let filled = answers.get();
        let request = SubmitExamRequest {
            answers: detail
                .questions
                .iter()
                .map(|q| ExamAnswer {
                    question_id: q.id.clone(),
                    response_text: filled.get(&q.id).cloned().unwrap_or_default(),
                })
                .collect(),
        };
        let exam_id = detail.id.clone();

        leptos::task::spawn_local(async move {
            match api::submit_exam(&exam_id, &request).await {
                Ok(()) => {
                    show_toast(toasts, "Answers submitted. Good luck!", ToastKind::Success);
                    selected.set(None);
                }
                Err(err) => show_toast(toasts, err.message(), ToastKind::Error),
            }
            submitting.set(false);
        });
    };

    view! {
        <section class="card exam-sheet">
            <header class="exam-sheet__header">
                <h2 class="card__title">
                    {move || selected.get().map(|d| d.title).unwrap_or_default()}
                </h2>
                <button class="btn btn--ghost" on:click=move |_| selected.set(None)>
                    "Close"
                </button>
            </header>

            <form class="exam-sheet__form" on:submit=on_submit>
                {move || {
                    let mut questions = selected.get().map(|d| d.questions).unwrap_or_default();
                    questions.sort_by_key(|q| q.sort_order);
                    questions
                        .into_iter()
                        .map(|question| {
                            let id = question.id.clone();
                            view! {
                                <label class="form-field">
                                    <span class="form-field__label">
                                        {format!("{}. {}", question.sort_order, question.text)}
                                    </span>
                                    <textarea
                                        class="form-field__input exam-sheet__answer"
                                        prop:value=move || {
                                            answers.get().get(&question.id).cloned().unwrap_or_default()
                                        }
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            answers.update(|map| {
                                                map.insert(id.clone(), value);
                                            });
                                        }
                                    ></textarea>
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()
                }}

                <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Submitting\u{2026}" } else { "Submit answers" }}
                </button>
            </form>
        </section>
    }
}
