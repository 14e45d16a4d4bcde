use rusty_tour::args::{self, OutputFormat};
use rusty_tour::controller::round::{load_scorecard, score_round};
use rusty_tour::view::round::render_round;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = args::args_checks();

    let card = match load_scorecard(&args.input) {
        Ok(card) => card,
        Err(e) => {
            log::error!("could not load {}: {e}", args.input.display());
            std::process::exit(1);
        }
    };
    let round = score_round(&card)?;
    log::info!(
        "scored {} players and {} matches on {}",
        round.players.len(),
        round.matches.len(),
        round.course_name
    );

    match args.output {
        OutputFormat::Text => print!("{}", render_round(&round, args.players_only)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&round)?),
    }
    Ok(())
}
