//! Client session loop.

use futures_util::{SinkExt, StreamExt};
use geo_relay_server::infrastructure::dto::websocket::{
    SendLocationMessage, ServerMessage, decode_server_message,
};
use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message};

use crate::{
    config::ClientConfig,
    display::render,
    error::ClientError,
    input::{Command, parse_line},
};

/// Read prompt lines on a dedicated thread until EOF / Ctrl-C
///
/// The thread is detached: it may still be blocked in `readline` when the
/// session ends, and must not keep the runtime from shutting down.
fn spawn_prompt() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();

    std::thread::spawn(move || {
        let mut editor = match DefaultEditor::new() {
            Ok(editor) => editor,
            Err(e) => {
                tracing::error!("Cannot open prompt: {}", e);
                return;
            }
        };

        loop {
            match editor.readline("> ") {
                Ok(line) => {
                    let _ = editor.add_history_entry(line.as_str());
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(ReadlineError::Eof | ReadlineError::Interrupted) => break,
                Err(e) => {
                    tracing::error!("Prompt error: {}", e);
                    break;
                }
            }
        }
    });

    rx
}

/// Connect to the relay and run until the user quits or the server goes away
pub async fn run_client(config: ClientConfig) -> Result<(), ClientError> {
    let (ws, _) = connect_async(config.url.as_str()).await?;
    tracing::info!("Connected to {}", config.url);
    println!("Type `<latitude> <longitude>` to report a location, `/quit` to leave.");

    let (mut sender, mut receiver) = ws.split();
    let mut lines = spawn_prompt();
    let mut self_id: Option<String> = None;

    loop {
        tokio::select! {
            frame = receiver.next() => {
                let frame = match frame {
                    Some(frame) => frame?,
                    None => {
                        println!("Server closed the connection");
                        break;
                    }
                };
                match frame {
                    Message::Text(text) => match decode_server_message(text.as_str()) {
                        Ok(msg) => {
                            if let ServerMessage::SessionAssigned(m) = &msg {
                                self_id = Some(m.id.clone());
                            }
                            println!("{}", render(&msg, self_id.as_deref()));
                        }
                        Err(e) => tracing::warn!("Ignoring frame: {}", e),
                    },
                    Message::Close(_) => {
                        println!("Server closed the connection");
                        break;
                    }
                    _ => {}
                }
            }
            line = lines.recv() => {
                let Some(line) = line else { break };
                match parse_line(&line) {
                    Ok(Command::Send(coordinates)) => {
                        let frame = serde_json::to_string(&SendLocationMessage::new(coordinates))?;
                        sender.send(Message::Text(frame.into())).await?;
                    }
                    Ok(Command::Quit) => break,
                    Ok(Command::Empty) => {}
                    Err(e) => println!("{e}"),
                }
            }
        }
    }

    // best effort: the server treats a dropped socket the same way
    let _ = sender.send(Message::Close(None)).await;
    tracing::info!("Disconnected");
    Ok(())
}
