use anyhow::Result;
use chrono::Local;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::chat::Session;
use crate::core::AppConfig;
use crate::openai::completion;

pub async fn run() -> Result<()> {
    let mut rl = DefaultEditor::new().expect("Editor failed");

    let config = AppConfig::default();
    let mut session = Session::new();

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                let message = line.trim();
                if message.is_empty() {
                    continue;
                }

                session.transcript.append_user(message, Local::now());
                let prompt_messages = session
                    .transcript
                    .to_prompt_messages(&config.system_message);

                match completion(
                    &prompt_messages,
                    config.temperature,
                    config.max_tokens,
                    &config.azure_api_endpoint,
                    &config.azure_api_key,
                    &config.azure_deployment,
                )
                .await
                {
                    Ok(reply) => {
                        session.transcript.append_assistant(&reply, Local::now());
                        println!("{}", reply);
                    }
                    Err(err) => {
                        // The user's turn stays in the transcript and
                        // gets replayed on the next attempt
                        eprintln!("Error connecting to Azure OpenAI: {}", err);
                    }
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
