use queen_pawns::search::draws::draw_layers;
use queen_pawns::Engine;

const DEFAULT_MAX_LAYERS: usize = 6;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let max_layers = match args.get(1).map(|s| s.parse::<usize>()) {
        None => DEFAULT_MAX_LAYERS,
        Some(Ok(n)) if args.len() == 2 => n,
        _ => {
            eprintln!("Usage: draw_layers [max_layers]");
            std::process::exit(2);
        }
    };

    let mut engine = Engine::new();
    let layers = draw_layers(&mut engine, max_layers);

    for (depth, layer) in layers.iter().enumerate() {
        println!("draw in {depth}: {} positions", layer.len());
        for pos in layer {
            println!("  {:?} to move: {pos}", pos.side());
        }
    }
}
