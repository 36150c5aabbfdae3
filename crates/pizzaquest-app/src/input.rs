//! Input collaborator: turns lines typed on stdin into player commands.
//!
//! Each whitespace-separated token is one command, so `d d f` walks right
//! twice and picks up whatever is in front.

use std::io::BufRead;
use std::sync::mpsc;

use pizzaquest_core::commands::InputCommand;

use crate::state::GameLoopCommand;

/// Map one token to a command. Accepts the WASD keys, arrow-key names,
/// and a few action keys.
pub fn parse_command(token: &str) -> Option<InputCommand> {
    let command = match token {
        "a" | "Left" | "left" => InputCommand::MoveLeft,
        "d" | "Right" | "right" => InputCommand::MoveRight,
        "w" | "Up" | "up" => InputCommand::MoveUp,
        "s" | "Down" | "down" => InputCommand::MoveDown,
        "f" | "take" => InputCommand::Take,
        "e" | "talk" | "use" => InputCommand::Interact,
        "space" | "shoot" | "x" => InputCommand::Shoot,
        "q" | "quit" => InputCommand::Quit,
        _ => return None,
    };
    Some(command)
}

/// Read commands from `reader` until it ends, forwarding them to the
/// game loop. End of input counts as quitting.
pub fn pump_input(reader: impl BufRead, tx: &mpsc::Sender<GameLoopCommand>) {
    for line in reader.lines() {
        let Ok(line) = line else {
            break;
        };
        for token in line.split_whitespace() {
            match parse_command(token) {
                Some(command) => {
                    if tx.send(GameLoopCommand::Input(command)).is_err() {
                        return;
                    }
                }
                None => log::warn!("unknown key {token:?}"),
            }
        }
    }
    let _ = tx.send(GameLoopCommand::Input(InputCommand::Quit));
}

/// Spawn a thread pumping stdin into the game loop.
pub fn spawn_stdin_reader(tx: mpsc::Sender<GameLoopCommand>) {
    std::thread::Builder::new()
        .name("pizzaquest-input".into())
        .spawn(move || pump_input(std::io::stdin().lock(), &tx))
        .expect("Failed to spawn input thread");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(parse_command("w"), Some(InputCommand::MoveUp));
        assert_eq!(parse_command("Left"), Some(InputCommand::MoveLeft));
        assert_eq!(parse_command("space"), Some(InputCommand::Shoot));
        assert_eq!(parse_command("e"), Some(InputCommand::Interact));
        assert_eq!(parse_command("z"), None);
    }

    #[test]
    fn test_pump_forwards_tokens_then_quits() {
        let (tx, rx) = mpsc::channel();
        pump_input("d d\nf bogus\n".as_bytes(), &tx);

        let received: Vec<InputCommand> = rx
            .try_iter()
            .filter_map(|cmd| match cmd {
                GameLoopCommand::Input(c) => Some(c),
                GameLoopCommand::Shutdown => None,
            })
            .collect();
        assert_eq!(
            received,
            vec![
                InputCommand::MoveRight,
                InputCommand::MoveRight,
                InputCommand::Take,
                InputCommand::Quit,
            ]
        );
    }
}
