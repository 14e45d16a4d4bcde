use crate::model::{MatchState, PlayerResult, ScoredRound, Side};
use crate::score::TeamTotals;

#[must_use]
pub fn short_player_name(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();

    let first_initial = parts.first().and_then(|s| s.chars().next());
    if let (Some(first_initial), true) = (first_initial, parts.len() > 1) {
        let last_name = parts.last().unwrap_or(&"");
        format!("{first_initial}. {last_name}")
    } else {
        name.to_string()
    }
}

fn format_to_par(to_par: i32) -> String {
    match to_par {
        0 => "E".to_string(),
        n if n > 0 => format!("+{n}"),
        n => n.to_string(),
    }
}

fn render_players(out: &mut String, players: &[PlayerResult]) {
    out.push_str(&format!(
        "{:>3}  {:<20} {:>5} {:>5} {:>5} {:>5} {:>5}\n",
        "POS", "PLAYER", "HCP", "THRU", "GROSS", "TOPAR", "PTS"
    ));
    for p in players {
        let s = &p.summary;
        out.push_str(&format!(
            "{:>3}  {:<20} {:>5.1} {:>5} {:>5} {:>5} {:>5}\n",
            p.position,
            short_player_name(&p.name),
            s.handicap,
            s.holes_played,
            s.gross,
            format_to_par(s.to_par),
            s.stableford
        ));
    }
}

fn describe_leader(leader: Option<Side>, side_a: &[String], side_b: &[String]) -> String {
    match leader {
        Some(Side::A) => side_a.join(" & "),
        Some(Side::B) => side_b.join(" & "),
        None => String::new(),
    }
}

fn render_team(out: &mut String, team: &TeamTotals) {
    for session in &team.sessions {
        out.push_str(&format!(
            "{:<20} {:>4.1} - {:<4.1} ({} finished, {} live)\n",
            session.session,
            session.points.side_a,
            session.points.side_b,
            session.matches_finished,
            session.matches_live
        ));
    }
    out.push_str(&format!(
        "{:<20} {:>4.1} - {:<4.1}\n",
        "TOTAL", team.overall.side_a, team.overall.side_b
    ));
}

/// Plain-text rendering of a scored round for the terminal.
#[must_use]
pub fn render_round(round: &ScoredRound, players_only: bool) -> String {
    let mut out = round.course_name.clone();
    if let Some(date) = round.played_on {
        out.push_str(&format!(" ({})", date.format("%Y-%m-%d")));
    }
    out.push_str("\n\n");
    render_players(&mut out, &round.players);

    if players_only || round.matches.is_empty() {
        return out;
    }

    out.push('\n');
    for m in &round.matches {
        let leader = describe_leader(m.outcome.leader, &m.side_a, &m.side_b);
        let status = match m.outcome.state {
            MatchState::Decided => format!("{leader} won {}", m.outcome.notation),
            MatchState::AllSquareFinal => "halved".to_string(),
            MatchState::InProgress if m.outcome.leader.is_some() => {
                let dormie = if m.outcome.dormie { ", dormie" } else { "" };
                let thru = round.holes.saturating_sub(m.outcome.holes_remaining);
                format!("{leader} {} UP thru {thru}{dormie}", m.outcome.difference)
            }
            MatchState::InProgress => "AS".to_string(),
        };
        out.push_str(&format!(
            "[{}] {:<10} {} v {}: {status}\n",
            m.session,
            m.format,
            m.side_a.join(" & "),
            m.side_b.join(" & ")
        ));
    }

    out.push('\n');
    render_team(&mut out, &round.team);
    out
}
