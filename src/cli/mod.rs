//! Command-line front end.
//!
//! Each command drives the [`App`] through the same gestures a user would
//! make on the page and prints the resulting markup.
//!
//! ```ignore
//! use shelf::cli::{run_command, CliArgs};
//!
//! let args = CliArgs::parse();
//! let ok = run_command(&mut app, args.command, &mut std::io::stdout()).await?;
//! ```

pub mod args;

pub use args::{CliArgs, CliCommand, FieldArgs};

use std::io::Write;

use color_eyre::Result;

use crate::app::{ActionOutcome, App};
use crate::traits::{HttpClient, UserPrompt};
use crate::view_state::ListView;

/// Run one command against `app`, writing markup to `out`.
///
/// Returns `Ok(false)` when the command ran but the server side failed
/// (the user has already been told why).
pub async fn run_command<C, P, W>(
    app: &mut App<C, P>,
    command: CliCommand,
    out: &mut W,
) -> Result<bool>
where
    C: HttpClient,
    P: UserPrompt,
    W: Write,
{
    match command {
        CliCommand::List { status, query } => {
            if status.is_none() && query.is_none() {
                app.start().await;
            } else {
                if let Some(query) = query {
                    app.set_search_text(query);
                }
                match status {
                    Some(status) => app.select_status(&status).await,
                    None => app.search().await,
                }
            }
            writeln!(out, "{}", app.render_list())?;
            Ok(list_loaded(app))
        }
        CliCommand::Page => {
            app.start().await;
            writeln!(out, "{}", app.render_page())?;
            Ok(list_loaded(app))
        }
        CliCommand::Add { fields } => {
            app.open_create();
            apply_fields(app, &fields);
            let outcome = app.submit().await;
            finish_mutation(app, outcome, out)
        }
        CliCommand::Edit { id, fields } => {
            app.start().await;
            if !app.open_edit_by_id(&id) {
                if list_loaded(app) {
                    app.prompt_mut().alert(&format!("No book with id {}", id));
                } else {
                    writeln!(out, "{}", app.render_list())?;
                }
                return Ok(false);
            }
            apply_fields(app, &fields);
            let outcome = app.submit().await;
            finish_mutation(app, outcome, out)
        }
        CliCommand::Delete { id, .. } => {
            let outcome = app.delete(&id).await;
            if outcome == ActionOutcome::Declined {
                return Ok(true);
            }
            finish_mutation(app, outcome, out)
        }
        CliCommand::Export { print } => {
            let url = app.export_url();
            if print {
                writeln!(out, "{}", url)?;
            } else if let Err(e) = webbrowser::open(&url) {
                tracing::warn!("Failed to open browser: {}", e);
                writeln!(out, "{}", url)?;
            }
            Ok(true)
        }
    }
}

fn apply_fields<C: HttpClient, P: UserPrompt>(app: &mut App<C, P>, fields: &FieldArgs) {
    for (field, value) in fields.values() {
        app.set_field(field, value);
    }
}

fn finish_mutation<C, P, W>(app: &App<C, P>, outcome: ActionOutcome, out: &mut W) -> Result<bool>
where
    C: HttpClient,
    P: UserPrompt,
    W: Write,
{
    if outcome != ActionOutcome::Completed {
        return Ok(false);
    }
    writeln!(out, "{}", app.render_list())?;
    Ok(list_loaded(app))
}

fn list_loaded<C: HttpClient, P: UserPrompt>(app: &App<C, P>) -> bool {
    matches!(app.state().list, ListView::Loaded(_))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse, ScriptedPrompt};
    use crate::config::ShelfConfig;
    use crate::traits::Response;

    const BOOKS: &str = "http://shelf.test/api/books";

    fn app(prompt: ScriptedPrompt) -> (App<MockHttpClient, ScriptedPrompt>, MockHttpClient) {
        let client = MockHttpClient::new();
        let config = ShelfConfig::new().with_api_url("http://shelf.test/api");
        (App::new(client.clone(), prompt, config), client)
    }

    fn books(client: &MockHttpClient) {
        client.set_response(
            "GET",
            BOOKS,
            MockResponse::Success(Response::json_body(
                200,
                &serde_json::json!([{"id": 5, "title": "Emma", "author": "Jane Austen", "status": "reading"}]),
            )),
        );
    }

    async fn run(app: &mut App<MockHttpClient, ScriptedPrompt>, command: CliCommand) -> (bool, String) {
        let mut out = Vec::new();
        let ok = run_command(app, command, &mut out).await.unwrap();
        (ok, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_list_prints_cards() {
        let (mut app, client) = app(ScriptedPrompt::new());
        books(&client);

        let (ok, out) = run(&mut app, CliCommand::List { status: None, query: None }).await;
        assert!(ok);
        assert!(out.contains("Emma"));
        assert_eq!(client.get_requests()[0].url, BOOKS);
    }

    #[tokio::test]
    async fn test_list_with_status_and_query() {
        let (mut app, client) = app(ScriptedPrompt::new());
        books(&client);

        run(
            &mut app,
            CliCommand::List {
                status: Some("reading".to_string()),
                query: Some("emma".to_string()),
            },
        )
        .await;
        assert_eq!(
            client.get_requests()[0].url,
            "http://shelf.test/api/books?status=reading&query=emma"
        );
    }

    #[tokio::test]
    async fn test_list_failure_returns_false() {
        let (mut app, client) = app(ScriptedPrompt::new());
        client.set_response("GET", BOOKS, MockResponse::Success(Response::new(503, "")));

        let (ok, out) = run(&mut app, CliCommand::List { status: None, query: None }).await;
        assert!(!ok);
        assert!(out.contains("Failed to load books."));
    }

    #[tokio::test]
    async fn test_edit_unknown_id_alerts() {
        let (mut app, client) = app(ScriptedPrompt::new());
        books(&client);

        let (ok, _) = run(
            &mut app,
            CliCommand::Edit {
                id: "99".to_string(),
                fields: FieldArgs::default(),
            },
        )
        .await;
        assert!(!ok);
        assert_eq!(app.prompt().last_alert(), Some("No book with id 99"));
        assert!(client.requests_with_method("PUT").is_empty());
    }

    #[tokio::test]
    async fn test_edit_sends_seeded_form_with_overrides() {
        let (mut app, client) = app(ScriptedPrompt::new());
        books(&client);
        client.set_response(
            "PUT",
            "http://shelf.test/api/books/5",
            MockResponse::Success(Response::new(200, "{}")),
        );

        let (ok, _) = run(
            &mut app,
            CliCommand::Edit {
                id: "5".to_string(),
                fields: FieldArgs {
                    status: Some("finished".to_string()),
                    ..FieldArgs::default()
                },
            },
        )
        .await;
        assert!(ok);

        let puts = client.requests_with_method("PUT");
        assert_eq!(puts.len(), 1);
        let body = puts[0].json_body().unwrap();
        assert_eq!(body["title"], "Emma");
        assert_eq!(body["status"], "finished");
    }

    #[tokio::test]
    async fn test_declined_delete_is_not_a_failure() {
        let (mut app, client) = app(ScriptedPrompt::new());

        let (ok, out) = run(
            &mut app,
            CliCommand::Delete {
                id: "5".to_string(),
                yes: false,
            },
        )
        .await;
        assert!(ok);
        assert!(out.is_empty());
        assert!(client.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_export_print() {
        let (mut app, _) = app(ScriptedPrompt::new());
        let (ok, out) = run(&mut app, CliCommand::Export { print: true }).await;
        assert!(ok);
        assert_eq!(out.trim(), "http://shelf.test/api/export");
    }
}
