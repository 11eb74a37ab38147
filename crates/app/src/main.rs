mod args;

use std::error::Error;
use std::fmt;

use chrono::NaiveDateTime;
use services::{AppServices, Clock, ProgressSnapshot, TopicDetail};
use track_api::ApiConfig;
use track_core::filter::QuestionFilter;
use track_core::model::{QuestionDraft, TopicDraft, TopicId};
use ui::ViewState;
use ui::views::{
    render_dashboard, render_progress, render_question, render_reminders, render_topic_detail,
    render_topics,
};
use ui::vm::{
    QuestionRowVm, map_dashboard, map_progress, map_question_rows, map_reminder_cards,
    map_topic_cards, question_row,
};

use crate::args::{Args, Command, Invocation, print_usage};

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<(), Box<dyn Error>> {
    let parsed = Invocation::parse(std::env::args().skip(1)).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let Args { api, now, command } = match parsed {
        Invocation::Help => {
            print_usage();
            return Ok(());
        }
        Invocation::Run(args) => args,
    };

    let mut config = ApiConfig::from_env();
    if let Some(origin) = api {
        config = config.with_origin(origin);
    }
    let clock = now.map_or_else(Clock::default_clock, |at| Clock::fixed(at.value()));
    tracing::debug!(origin = config.origin(), base_path = config.base_path(), "using backend");

    let services = AppServices::http(config, clock);
    execute(&services, command).await
}

/// Views render their fallback on failure and still report it; mutations fail outright.
async fn execute(services: &AppServices, command: Command) -> Result<(), Box<dyn Error>> {
    let now = services.clock().now();
    match command {
        Command::Dashboard { show_all } => {
            let result = services.dashboard().load().await;
            let state = ViewState::from_result("dashboard", result, Default::default);
            print!(
                "{}",
                render_dashboard(&state.map(|snap| map_dashboard(snap, show_all, now)))
            );
            fail_if(&state)
        }
        Command::Topics => {
            let result = services.topics().list_topics().await;
            let state = ViewState::from_result("topics", result, Vec::new);
            print!("{}", render_topics(&state.map(|topics| map_topic_cards(topics))));
            fail_if(&state)
        }
        Command::Topic { id, filter } => {
            let state = topic_state(services, id, &filter, now).await;
            print!("{}", render_topic_detail(&state));
            fail_if(&state)
        }
        Command::Reminders { mode } => {
            let result = services.reminders().load_board().await;
            let state = ViewState::from_result("reminders", result, Default::default);
            let cards = state.map(|board| map_reminder_cards(&board.select(mode, now), now));
            print!("{}", render_reminders(mode, &cards));
            fail_if(&state)
        }
        Command::Progress => {
            let progress = services.progress();
            let today = progress.today();
            let result = progress.load().await;
            let state =
                ViewState::from_result("progress", result, || ProgressSnapshot::empty(today));
            print!("{}", render_progress(&state.map(map_progress)));
            fail_if(&state)
        }
        Command::AddTopic { name, notes } => {
            let topic = services
                .topics()
                .create_topic(&TopicDraft { name, notes })
                .await?;
            println!("Created topic {} ({})", topic.id, topic.name);
            Ok(())
        }
        Command::Notes { id, text } => {
            let topic = services.topics().update_notes(id, &text).await?;
            println!("Saved notes for {}", topic.name);
            Ok(())
        }
        Command::DeleteTopic { id, confirmed } => {
            services.topics().delete_topic(id, confirmed).await?;
            println!("Deleted topic {id}");
            Ok(())
        }
        Command::AddQuestion(flags) => {
            let mut draft = QuestionDraft::default();
            flags.apply(&mut draft);
            let question = services.questions().create(&draft).await?;
            println!("Created {}", render_question(&question_row(&question, now)));
            Ok(())
        }
        Command::EditQuestion { id, flags } => {
            let questions = services.questions();
            let mut draft = questions.edit_draft(id).await?;
            flags.apply(&mut draft);
            let question = questions.update(id, &draft).await?;
            println!("Updated {}", render_question(&question_row(&question, now)));
            Ok(())
        }
        Command::SetStatus { id, status } => {
            let question = services.questions().set_status(id, status).await?;
            println!("{}", render_question(&question_row(&question, now)));
            Ok(())
        }
        Command::ToggleImportant { id } => {
            let question = services.questions().toggle_important(id).await?;
            println!("{}", render_question(&question_row(&question, now)));
            Ok(())
        }
        Command::DeleteQuestion { id, confirmed } => {
            services.questions().delete(id, confirmed).await?;
            println!("Deleted question {id}");
            Ok(())
        }
    }
}

async fn topic_state(
    services: &AppServices,
    id: TopicId,
    filter: &QuestionFilter,
    now: NaiveDateTime,
) -> ViewState<(TopicDetail, Vec<QuestionRowVm>)> {
    let result = services.topics().load_detail(id).await;
    let state = ViewState::from_result("topic", result, || TopicDetail::empty(id));
    state.map(|detail| {
        let rows = map_question_rows(&detail.filtered(filter), now);
        (detail.clone(), rows)
    })
}

/// The view already showed the failure; only the exit code is left to set.
#[derive(Debug)]
struct AlreadyReported;

impl fmt::Display for AlreadyReported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("view load failed")
    }
}

impl Error for AlreadyReported {}

fn fail_if<T>(state: &ViewState<T>) -> Result<(), Box<dyn Error>> {
    match state.error() {
        Some(_) => Err(Box::new(AlreadyReported)),
        None => Ok(()),
    }
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        if !err.is::<AlreadyReported>() {
            eprintln!("{err}");
        }
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use track_api::{ApiError, Backend, InMemoryBackend, endpoint};
    use track_core::time::{fixed_clock, fixed_now};

    use super::*;

    fn services_over(backend: &InMemoryBackend) -> AppServices {
        AppServices::new(&Backend::from_shared(Arc::new(backend.clone())), fixed_clock())
    }

    #[tokio::test]
    async fn failed_topic_load_renders_empty_detail() {
        let backend = InMemoryBackend::new(fixed_clock());
        let topic = backend.insert_topic("Arrays", "");
        backend.fail(endpoint::topic(topic.id), ApiError::transport("offline"));
        let services = services_over(&backend);

        let filter = QuestionFilter::default();
        let state = topic_state(&services, topic.id, &filter, fixed_now()).await;
        let text = render_topic_detail(&state);
        assert!(text.starts_with("== Topic =="));
        assert!(text.contains("! request failed: offline"));
        assert!(text.contains("Showing 0 of 0 questions"));

        let err = fail_if(&state).unwrap_err();
        assert!(err.is::<AlreadyReported>());
    }

    #[tokio::test]
    async fn loaded_topic_has_no_failure() {
        let backend = InMemoryBackend::new(fixed_clock());
        let topic = backend.insert_topic("Heaps", "use a heap");
        let services = services_over(&backend);

        let filter = QuestionFilter::default();
        let state = topic_state(&services, topic.id, &filter, fixed_now()).await;
        assert!(render_topic_detail(&state).contains("Heaps (#"));
        assert!(fail_if(&state).is_ok());
    }
}
