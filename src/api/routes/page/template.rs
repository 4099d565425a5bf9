//! Chat page template using Handlebars. Handlebars escapes
//! interpolated values by default which is what we want here: turn
//! content is stored verbatim and only escaped at render time.

use std::fmt;

use handlebars::Handlebars;

#[derive(Debug)]
pub enum Template {
    ChatPage,
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

const CHAT_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Your Study Buddy</title>
<style>
body {
    background-color: #f9fafb;
    font-family: sans-serif;
    max-width: 720px;
    margin: 0 auto;
    padding: 16px;
}
.chat-message {
    border-radius: 12px;
    padding: 12px;
    margin-bottom: 8px;
    max-width: 85%;
}
.user-message {
    background-color: #DCF8C6;
    text-align: right;
    margin-left: auto;
}
.assistant-message {
    background-color: #FFFFFF;
    text-align: left;
    margin-right: auto;
    border: 1px solid #ddd;
}
.timestamp {
    font-size: 0.75rem;
    color: #888;
}
.error-banner {
    background-color: #FDE8E8;
    border: 1px solid #F8B4B4;
    border-radius: 12px;
    padding: 12px;
    margin-bottom: 8px;
}
.chat-input {
    display: flex;
    gap: 8px;
    margin-top: 16px;
}
.chat-input input {
    flex: 1;
    padding: 8px;
}
</style>
</head>
<body>
<h1>🎓 Your Study Buddy</h1>
<p>Ask me any question let's prepare for your certification or university exams together!</p>
{{#if error}}
<div class="error-banner">{{error}}</div>
{{/if}}
{{#each turns}}
<div class="chat-message {{css_class}}">{{content}}</div>
<div class="timestamp">{{time}}</div>
{{/each}}
<form class="chat-input" method="post" action="/chat">
  <input type="text" name="message" placeholder="Type your question or exam..." autocomplete="off" autofocus>
  <button type="submit">Send</button>
</form>
</body>
</html>
"#;

pub fn templates<'a>() -> Handlebars<'a> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry
        .register_template_string(&Template::ChatPage.to_string(), CHAT_PAGE)
        .expect("Failed to register template");
    registry
}
