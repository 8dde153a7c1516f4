/// The interactive decision loop: present a pair, read one keypress line,
/// feed the session. Stops on completion, selector exhaustion, the
/// comparison cap, or quit.
use encore_core::RankingSession;
use std::io::{self, BufRead, Write};

/// Decision entered at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    First,
    Second,
    Skip,
    Quit,
}

/// Parse one prompt line. `None` means unrecognized input; the caller
/// re-prompts.
pub fn parse_decision(line: &str) -> Option<Decision> {
    match line.trim().to_ascii_lowercase().as_str() {
        "1" => Some(Decision::First),
        "2" => Some(Decision::Second),
        "s" | "skip" => Some(Decision::Skip),
        "q" | "quit" => Some(Decision::Quit),
        _ => None,
    }
}

/// Why the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The completion oracle reports the pool as ranked.
    Complete,
    /// The selector found nothing left worth asking.
    Exhausted,
    /// The `--max-comparisons` cap was reached.
    CapReached,
    /// The user quit (or stdin closed).
    Quit,
}

pub struct SessionStats {
    pub decided: usize,
    pub skipped: usize,
    pub stop_reason: StopReason,
}

/// Drive the session against a human at the terminal. `names[id]` is the
/// display name for item `id` (IDs are the 0..n line indices).
pub fn run_session(
    session: &mut RankingSession,
    names: &[String],
    max_comparisons: Option<usize>,
    verbose: bool,
) -> SessionStats {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut decided = 0usize;
    let mut skipped = 0usize;

    let stop_reason = loop {
        if session.is_complete() {
            break StopReason::Complete;
        }
        if max_comparisons.is_some_and(|cap| decided + skipped >= cap) {
            break StopReason::CapReached;
        }

        let Some((a, b)) = session.next_pair() else {
            break StopReason::Exhausted;
        };

        println!();
        println!("Which was better?");
        println!("  1) {}", names[a as usize]);
        println!("  2) {}", names[b as usize]);

        let decision = loop {
            print!("[1/2/s=skip/q=quit] ");
            let _ = io::stdout().flush();
            let Some(Ok(line)) = lines.next() else {
                // stdin closed — treat as quit.
                break Decision::Quit;
            };
            match parse_decision(&line) {
                Some(d) => break d,
                None => println!("Unrecognized input \"{}\".", line.trim()),
            }
        };

        match decision {
            Decision::First => {
                session.record_outcome(a, b, a);
                decided += 1;
            }
            Decision::Second => {
                session.record_outcome(a, b, b);
                decided += 1;
            }
            Decision::Skip => {
                session.record_skip(a, b);
                skipped += 1;
            }
            Decision::Quit => break StopReason::Quit,
        }

        if verbose {
            let report = session.completion();
            eprintln!(
                "  {} of {} comparisons, mean games {:.1}",
                report.total_comparisons, report.required_comparisons, report.mean_games,
            );
        }
    };

    SessionStats {
        decided,
        skipped,
        stop_reason,
    }
}
