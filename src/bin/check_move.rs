use piece_moves::chess::board::BoardState;
use piece_moves::chess::moves::{Piece, PieceState};
use piece_moves::chess::piece::{PieceKind, Team};
use piece_moves::core::position::Position;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: check_move <piece> <from> <to> [<piece>@<square> ...]\n\
    pieces: P N B R Q K (white), p n b r q k (black); M/m is a pawn that has already moved";

fn main() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 3 {
        eprintln!("{USAGE}");
        std::process::exit(2);
    }

    let (team, state) = parse_piece(&args[0]).unwrap_or_else(|| usage_error(&args[0]));
    let from = parse_square(&args[1]);
    let to = parse_square(&args[2]);
    let mover = Piece::new(state, team, from);

    let mut others = Vec::new();
    for placement in &args[3..] {
        let Some((letter, square)) = placement.split_once('@') else {
            usage_error(placement);
        };
        let (team, state) = parse_piece(letter).unwrap_or_else(|| usage_error(placement));
        others.push(Piece::new(state, team, parse_square(square)));
    }
    others.push(mover);
    let board = BoardState::from_pieces(&others);

    match mover.move_to(to, &board) {
        Ok(next) => {
            println!("legal: {mover} -> {next} ({:?})", next.state());
        }
        Err(e) => {
            println!("illegal: {e}");
            std::process::exit(1);
        }
    }
}

fn parse_piece(s: &str) -> Option<(Team, PieceState)> {
    let mut chars = s.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return None;
    };
    match c {
        'M' => PieceKind::from_char('P').map(|(team, _)| (team, PieceState::MovedPawn)),
        'm' => PieceKind::from_char('p').map(|(team, _)| (team, PieceState::MovedPawn)),
        _ => PieceKind::from_char(c).map(|(team, kind)| (team, PieceState::unmoved(kind))),
    }
}

fn parse_square(s: &str) -> Position {
    match s.parse::<Position>() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    }
}

fn usage_error(arg: &str) -> ! {
    eprintln!("invalid argument {arg:?}\n{USAGE}");
    std::process::exit(2);
}
