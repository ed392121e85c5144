use std::fmt::Write;

use crate::game::screen::{RoundView, Screen, WordView};
use crate::round::{WordStatus, TARGET_LETTER};

const STYLE: &str = "\
body { font-family: sans-serif; display: flex; justify-content: center; padding: 2rem; }
form { display: inline; margin: 0; }
.start, .game { display: flex; flex-direction: column; align-items: center; gap: 1.5rem; }
.words { display: flex; flex-wrap: wrap; justify-content: center; gap: 0.5rem; max-width: 40rem; }
.word { font-size: 1.5rem; padding: 0.5rem 1rem; border: 2px solid #888; border-radius: 0.5rem; background: #fff; cursor: pointer; }
.word.selected { background: #cde; border-color: #36c; }
.word.correct { background: #cfc; border-color: #393; }
.word.incorrect { background: #fcc; border-color: #c33; }
.big { font-size: 2rem; padding: 1rem 2rem; }
.result { font-size: 1.5rem; }";

/// The whole page for one screen. Every control is a form posting back to the game.
pub fn render(game_id: &str, screen: &Screen) -> String {
    let body = match screen {
        Screen::Start => render_start(game_id),
        Screen::Game(round) => render_round(game_id, round),
    };
    format!(
        "<!DOCTYPE html>\n<html lang=\"fi\">\n<head>\n<meta charset=\"utf-8\">\n<title>R</title>\n<style>\n{STYLE}\n</style>\n</head>\n<body>\n{body}</body>\n</html>\n"
    )
}

fn render_start(game_id: &str) -> String {
    format!(
        "<div class=\"start\">\n{}</div>\n",
        button(game_id, "begin", "big", "Aloita", false)
    )
}

fn render_round(game_id: &str, round: &RoundView) -> String {
    let mut html = String::from("<div class=\"game\">\n");
    let _ = writeln!(html, "<div>Valitse sanat joissa on {TARGET_LETTER}</div>");

    html.push_str("<div class=\"words\">\n");
    for word in &round.words {
        html.push_str(&render_word(game_id, word, round.is_done()));
    }
    html.push_str("</div>\n");

    html.push_str("<div class=\"actions\">\n");
    match round.score {
        None => html.push_str(&button(game_id, "finish", "big", "Valmis", !round.can_finish)),
        Some(score) => {
            let _ = writeln!(
                html,
                "<div class=\"result\">Löysit {} / {}</div>",
                score.correct, score.total
            );
            html.push_str(&button(game_id, "restart", "big", "Uudestaan", false));
        }
    }
    html.push_str("</div>\n</div>\n");
    html
}

fn render_word(game_id: &str, word: &WordView, done: bool) -> String {
    let word_text = escape(&word.word);
    format!(
        "<form method=\"post\" action=\"/game/{game_id}/toggle\"><button class=\"word {}\" name=\"word\" value=\"{word_text}\"{}>{word_text}</button></form>\n",
        status_class(word.status),
        if done { " disabled" } else { "" }
    )
}

fn button(game_id: &str, action: &str, class: &str, label: &str, disabled: bool) -> String {
    format!(
        "<form method=\"post\" action=\"/game/{game_id}/{action}\"><button class=\"{class}\"{}>{label}</button></form>\n",
        if disabled { " disabled" } else { "" }
    )
}

fn status_class(status: WordStatus) -> &'static str {
    match status {
        WordStatus::Unselected => "unselected",
        WordStatus::Selected => "selected",
        WordStatus::Correct => "correct",
        WordStatus::Incorrect => "incorrect",
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for char in text.chars() {
        match char {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
