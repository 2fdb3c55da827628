use basic_strategy::{
    strategy::DEALER_LABELS, strategy_chart, PracticeMode, Session, SessionState, StreakStore,
};
use rand::Rng;
use std::io::{self, BufRead, Write};

const HELP: &str = "Commands: [n]ew hand, [h]it, [s]tand, [d]ouble, s[p]lit, \
[m]ode <all|hard|soft|pairs>, [c]hart, [q]uit";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Command {
    Deal,
    Hit,
    Stand,
    Double,
    Split,
    Mode(PracticeMode),
    Chart,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let command = match words.next() {
        Some(word) => word.to_lowercase(),
        None => return Err(String::from("Empty command")),
    };
    match command.as_str() {
        "n" | "new" | "deal" => Ok(Command::Deal),
        "h" | "hit" => Ok(Command::Hit),
        "s" | "stand" => Ok(Command::Stand),
        "d" | "double" => Ok(Command::Double),
        "p" | "split" => Ok(Command::Split),
        "c" | "chart" => Ok(Command::Chart),
        "?" | "help" => Ok(Command::Help),
        "q" | "quit" => Ok(Command::Quit),
        "m" | "mode" => {
            let name = words.next().ok_or("Missing practice mode")?;
            parse_practice_mode(name).map(Command::Mode)
        }
        other => Err(format!("Unknown command {}", other)),
    }
}

fn parse_practice_mode(name: &str) -> Result<PracticeMode, String> {
    match name.to_lowercase().as_str() {
        "all" => Ok(PracticeMode::All),
        "hard" => Ok(PracticeMode::HardTotalsOnly),
        "soft" => Ok(PracticeMode::SoftTotalsOnly),
        "pairs" => Ok(PracticeMode::PairsOnly),
        _ => name
            .parse()
            .map_err(|_| format!("Unknown practice mode {}", name)),
    }
}

/// Renders what the player sees between commands.
fn render<R: Rng, S: StreakStore>(session: &Session<R, S>) -> String {
    let stats = session.stats();
    let mut screen = format!(
        "[{}] Correct Plays: {:.1}% ({}/{})  Current Streak: {}  Best: {}\n",
        session.practice_mode().description(),
        stats.decision_accuracy(),
        stats.get_correct_decisions(),
        stats.get_total_decisions(),
        stats.get_current_streak(),
        stats.get_longest_streak(),
    );

    if let Some(up_card) = session.dealer_up_card() {
        screen.push_str(&format!("Dealer: {}\n", up_card));
        let cards: Vec<String> = session
            .player_hand()
            .iter()
            .map(|card| card.to_string())
            .collect();
        screen.push_str(&format!(
            "Your Hand: {} ({})\n",
            cards.join(" "),
            session.player_score()
        ));
    }
    if let Some(feedback) = session.feedback() {
        screen.push_str(feedback);
        screen.push('\n');
    }

    match session.state() {
        SessionState::Waiting => screen.push_str("[n] Deal New Hand"),
        SessionState::Playing => {
            screen.push_str("[h] Hit  [s] Stand");
            if session.can_double_down() {
                screen.push_str("  [d] Double");
            }
            if session.can_split() {
                screen.push_str("  [p] Split");
            }
        }
        SessionState::Finished => screen.push_str("[n] Next Hand"),
    }
    screen
}

pub fn print_chart(output: &mut impl Write) -> io::Result<()> {
    for section in strategy_chart() {
        writeln!(output, "{}", section.title)?;
        write!(output, "{:>6}", "Dealer")?;
        for label in DEALER_LABELS {
            write!(output, "{:>4}", label)?;
        }
        writeln!(output)?;
        for row in &section.rows {
            write!(output, "{:>6}", row.hand)?;
            for action in row.actions {
                write!(output, "{:>4}", action.code())?;
            }
            writeln!(output)?;
        }
        writeln!(output)?;
    }
    Ok(())
}

/// Reads commands line by line until `quit` or end of input.
pub fn run<R: Rng, S: StreakStore>(
    session: &mut Session<R, S>,
    input: impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    writeln!(output, "{}", HELP)?;
    writeln!(output, "{}", render(session))?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(msg) => {
                writeln!(output, "{}", msg)?;
                continue;
            }
        };

        match command {
            Command::Deal => session.start_new_hand(),
            Command::Hit => _ = session.hit(),
            Command::Stand => _ = session.stand(),
            Command::Double => _ = session.double_down(),
            Command::Split => _ = session.split(),
            Command::Mode(mode) => session.set_practice_mode(mode),
            Command::Chart => {
                print_chart(&mut *output)?;
                continue;
            }
            Command::Help => {
                writeln!(output, "{}", HELP)?;
                continue;
            }
            Command::Quit => break,
        }
        writeln!(output, "{}", render(session))?;
    }
    Ok(())
}
