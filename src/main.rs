#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battlegrid::{cli, init_logging, GameSession, PlacementLimits, ShipPlacer, TextRenderer};
#[cfg(feature = "std")]
use battlegrid::{BoardEvent, BoardRenderer, Boards, Side};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Place both fleets and play interactively on stdin.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Draw the opponent's ships instead of hiding them")]
        reveal_opponent: bool,
        #[arg(long, help = "Restart the fleet after this many rejected draws for one ship")]
        restart_after: Option<u32>,
    },
    /// Place a single fleet and print the board.
    Deal {
        #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (boards will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            reveal_opponent,
            restart_after,
        } => {
            let rng = make_rng(seed);
            let limits = restart_after
                .map(PlacementLimits::restart_after)
                .unwrap_or_default();
            let renderer = TextRenderer::new(std::io::stdout(), reveal_opponent);
            let mut session = GameSession::with_limits(rng, renderer, limits)?;
            let stdin = std::io::stdin();
            cli::run(&mut session, stdin.lock(), std::io::stdout())?;
        }
        Commands::Deal { seed } => {
            let mut rng = make_rng(seed);
            let mut boards = Boards::new();
            let report = ShipPlacer::new().place_fleet(boards.get_mut(Side::Player), &mut rng)?;
            for placement in &report.ships {
                println!("{:?}", placement);
            }
            let mut renderer = TextRenderer::new(std::io::stdout(), true);
            renderer.render(&BoardEvent::Rerolled { side: Side::Player }, &boards);
        }
    }
    Ok(())
}
