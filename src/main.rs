// src/main.rs
// Line-oriented interaction loop: owns the session, translates typed
// commands into selection-engine calls, and relays everything else to
// the advisory backend.

use std::io::{self, Write};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use poker_advisor::api::api_base_url;
use poker_advisor::cards::Card;
use poker_advisor::format::format_game_state;
use poker_advisor::session::{Session, Stage, POSITIONS};

const HELP: &str = "\
commands:
  /position <BTN|SB|BB|UTG|MP|CO>   set your seat
  /stage <preflop|flop|turn|river>  set the betting round
  /stack <10-200>                   set your stack in big blinds
  /hand <cards>                     toggle hole cards, e.g. /hand As Kh
  /board <cards>                    toggle community cards, e.g. /board Qd Jc 10s
  /slot <1|2>                       target a hand slot for direct assignment
  /rank <A-2|10|ten>                choose a rank for the targeted slot
  /suit <s|h|d|c>                   commit rank+suit into the targeted slot
  /upload <path>                    send a table screenshot to the recognizer
  /model <id>                       pick an advisor model
  /temperature <0-1>                adjust sampling temperature
  /state                            print the current summary line
  /quit                             leave
anything else is sent to the advisor as a question.";

fn expand_suit(input: &str) -> String {
    match input.to_lowercase().as_str() {
        "s" => "spades".to_string(),
        "h" => "hearts".to_string(),
        "d" => "diamonds".to_string(),
        "c" => "clubs".to_string(),
        _ => input.to_string(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let base_url = api_base_url();
    tracing::info!(%base_url, "starting advisory session");
    let mut session = Session::new(base_url);

    println!("Poker Hand Analyzer - /help for commands, anything else to chat.");
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        match input.strip_prefix('/') {
            Some(command) => {
                if !run_command(&mut session, command).await? {
                    break;
                }
            }
            None => {
                println!("...");
                let reply = session.send_message(input).await;
                println!("{}", reply.text);
            }
        }
    }
    Ok(())
}

async fn run_command(session: &mut Session, command: &str) -> anyhow::Result<bool> {
    let (name, rest) = match command.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (command, ""),
    };
    match name {
        "help" => println!("{}", HELP),
        "quit" | "exit" => return Ok(false),
        "state" => {
            println!("{}", format_game_state(&session.state));
            if let Some(slot) = session.picker.active_slot() {
                println!("targeting slot {}", slot + 1);
            }
        }
        "position" => {
            session.set_position(rest);
            if !POSITIONS.contains(&session.state.position.as_str()) {
                println!("note: {} is not a listed position", session.state.position);
            }
        }
        "stage" => match rest.parse::<Stage>() {
            Ok(stage) => session.set_stage(stage),
            Err(e) => println!("{}", e),
        },
        "stack" => match rest.parse::<u32>() {
            Ok(bb) => session.set_stack_size(bb),
            Err(_) => println!("stack wants a number of big blinds"),
        },
        "hand" | "board" => {
            for token in rest.split_whitespace() {
                match Card::parse_shorthand(token) {
                    Some(card) if name == "hand" => session.select_hand_card(card),
                    Some(card) => session.toggle_board_card(card),
                    None => println!("could not read card: {}", token),
                }
            }
            println!("{}", format_game_state(&session.state));
        }
        "slot" => match rest.parse::<usize>() {
            Ok(n @ 1..=2) => session.click_slot(n - 1),
            _ => println!("slot wants 1 or 2"),
        },
        "rank" => session.click_rank(rest),
        "suit" => {
            session.click_suit(&expand_suit(rest));
            println!("{}", format_game_state(&session.state));
        }
        "upload" => {
            let image = std::fs::read(rest).with_context(|| format!("reading {}", rest))?;
            match session.upload_screenshot(image, rest).await {
                Ok(()) => println!("{}", format_game_state(&session.state)),
                Err(e) => println!("{}", e),
            }
        }
        "model" => {
            session.model_params.model_id = rest.to_string();
            session.model_params = session.model_params.clone().clamped();
        }
        "temperature" => match rest.parse::<f64>() {
            Ok(t) => {
                session.model_params.temperature = t;
                session.model_params = session.model_params.clone().clamped();
            }
            Err(_) => println!("temperature wants a number between 0 and 1"),
        },
        other => println!("unknown command: /{} (try /help)", other),
    }
    Ok(true)
}
