//! HTML pages rendered with maud. All interpolated values are escaped.

use crate::db::Snippet;
use crate::server::routes::snippets::form::{CreateSnippetForm, EXPIRY_CHOICES, FieldErrors};
use chrono::{DateTime, Utc};
use maud::{DOCTYPE, Markup, html};

/// Formats a timestamp like `02 Jan 2026 at 15:04` (UTC).
pub fn human_date(t: DateTime<Utc>) -> String {
    t.format("%d %b %Y at %H:%M").to_string()
}

fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) " - Snippetbox" }
                link rel="stylesheet" href="/static/css/main.css";
            }
            body {
                header {
                    h1 { a href="/" { "Snippetbox" } }
                }
                nav {
                    a href="/" { "Home" }
                    a href="/snippet/create" { "Create snippet" }
                }
                main { (content) }
                footer { "Powered by Rust" }
            }
        }
    }
}

pub fn home(snippets: &[Snippet]) -> Markup {
    layout(
        "Home",
        html! {
            h2 { "Latest Snippets" }
            @if snippets.is_empty() {
                p { "There's nothing to see here... yet!" }
            } @else {
                table {
                    tr {
                        th { "Title" }
                        th { "Created" }
                        th { "ID" }
                    }
                    @for snippet in snippets {
                        tr {
                            td {
                                a href={ "/snippet/view?id=" (snippet.id) } { (snippet.title) }
                            }
                            td { (human_date(snippet.created)) }
                            td { "#" (snippet.id) }
                        }
                    }
                }
            }
        },
    )
}

pub fn view(snippet: &Snippet) -> Markup {
    layout(
        &format!("Snippet #{}", snippet.id),
        html! {
            div.snippet {
                div.metadata {
                    strong { (snippet.title) }
                    span { "#" (snippet.id) }
                }
                pre { code { (snippet.content) } }
                div.metadata {
                    time { "Created: " (human_date(snippet.created)) }
                    time { "Expires: " (human_date(snippet.expires)) }
                }
            }
        },
    )
}

pub fn create(form: &CreateSnippetForm, errors: &FieldErrors) -> Markup {
    layout(
        "Create a New Snippet",
        html! {
            form action="/snippet/create" method="POST" {
                div {
                    label for="title" { "Title:" }
                    @if let Some(message) = errors.get("title") {
                        label.error { (message) }
                    }
                    input id="title" type="text" name="title" value=(form.title);
                }
                div {
                    label for="content" { "Content:" }
                    @if let Some(message) = errors.get("content") {
                        label.error { (message) }
                    }
                    textarea id="content" name="content" { (form.content) }
                }
                div {
                    label { "Delete in:" }
                    @if let Some(message) = errors.get("expires") {
                        label.error { (message) }
                    }
                    @for (days, choice) in EXPIRY_CHOICES {
                        input type="radio" name="expires" value=(days)
                            checked[form.expires.trim() == days.to_string()];
                        " " (choice) " "
                    }
                }
                div {
                    input type="submit" value="Publish snippet";
                }
            }
        },
    )
}
