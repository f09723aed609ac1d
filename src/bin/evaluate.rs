use queen_pawns::notation::{parse_pawns, parse_position, verdict_grid};
use queen_pawns::{Engine, Side};

fn usage() -> ! {
    eprintln!("Usage: evaluate <white|black> <squares...>   e.g. evaluate black Qd1 d6 e6");
    eprintln!("       evaluate --grid <pawn squares...>     e.g. evaluate --grid d6 e6");
    std::process::exit(2);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((mode, rest)) = args.split_first() else {
        usage();
    };

    let mut engine = Engine::new();

    if mode == "--grid" {
        let grid =
            parse_pawns(&rest.join(" ")).and_then(|pawns| verdict_grid(&mut engine, &pawns));
        match grid {
            Ok(g) => print!("{g}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(2);
            }
        }
        return;
    }

    let side = match mode.as_str() {
        "white" => Side::White,
        "black" => Side::Black,
        _ => usage(),
    };

    let pos = match parse_position(&rest.join(" "), side, engine.board()) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    if !pos.is_valid() {
        eprintln!("not a legal position with {side:?} to move: {pos}");
        std::process::exit(2);
    }

    let status = engine.evaluate(&pos);
    let counts = engine.counts();
    log::info!(
        "{} positions solved, {} store hits",
        counts.solved,
        counts.hits
    );
    println!("{pos}: {status:?} for {side:?}");
}
