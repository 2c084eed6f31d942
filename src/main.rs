use std::process::ExitCode;

use rand::Rng;

use weavemaze::{Direction, Grid, VertexKey, build_graph, generate, shortest_path};

struct Args {
    width: u16,
    height: u16,
    seed: Option<String>,
    density: u8,
    add_loop: bool,
    start: Option<(u16, u16)>,
    verbose: bool,
}

const USAGE: &str = "usage: weavemaze WIDTHxHEIGHT [--seed STRING] [--density 0-100] \
[--loop] [--start X,Y] [--verbose]";

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        width: 0,
        height: 0,
        seed: None,
        density: 50,
        add_loop: false,
        start: None,
        verbose: false,
    };
    let mut dimensions_seen = false;
    let mut words = std::env::args().skip(1);
    while let Some(word) = words.next() {
        match word.as_str() {
            "--seed" => {
                args.seed = Some(words.next().ok_or("--seed needs a value")?);
            }
            "--density" => {
                let value = words.next().ok_or("--density needs a value")?;
                args.density = value
                    .parse()
                    .map_err(|_| format!("invalid density {value:?}"))?;
            }
            "--loop" => args.add_loop = true,
            "--start" => {
                let value = words.next().ok_or("--start needs a value")?;
                args.start = Some(parse_pair(&value, ',')?);
            }
            "--verbose" => args.verbose = true,
            "--help" | "-h" => return Err(USAGE.to_string()),
            other if !dimensions_seen => {
                let (width, height) = parse_pair(other, 'x')?;
                args.width = width;
                args.height = height;
                dimensions_seen = true;
            }
            other => return Err(format!("unexpected argument {other:?}")),
        }
    }
    if !dimensions_seen {
        return Err(USAGE.to_string());
    }
    Ok(args)
}

fn parse_pair(value: &str, separator: char) -> Result<(u16, u16), String> {
    let Some((first, second)) = value.split_once(separator) else {
        return Err(format!("expected A{separator}B, got {value:?}"));
    };
    let first = first
        .parse()
        .map_err(|_| format!("invalid number {first:?}"))?;
    let second = second
        .parse()
        .map_err(|_| format!("invalid number {second:?}"))?;
    Ok((first, second))
}

/// Textual dump of the grid. A wall is open when either side opens toward
/// the other, which covers the one-sided bits around weave crossings; the
/// crossing body shows its over corridor's axis.
fn print_grid(grid: &Grid) {
    for y in 0..grid.height() {
        let mut top = String::new();
        let mut mid = String::new();
        for x in 0..grid.width() {
            let mask = grid[(x, y)];
            let open_north = mask.contains(Direction::North)
                || (y > 0 && grid[(x, y - 1)].contains(Direction::South));
            top.push('+');
            top.push_str(if open_north { "  " } else { "--" });

            let open_west = mask.contains(Direction::West)
                || (x > 0 && grid[(x - 1, y)].contains(Direction::East));
            mid.push(if open_west { ' ' } else { '|' });
            mid.push_str(if mask.is_weave() {
                if mask.contains(Direction::East) { "==" } else { "||" }
            } else {
                "  "
            });
        }
        top.push('+');
        mid.push('|');
        println!("{top}");
        println!("{mid}");
    }
    let mut bottom = String::new();
    for _ in 0..grid.width() {
        bottom.push_str("+--");
    }
    bottom.push('+');
    println!("{bottom}");
}

fn run(args: &Args, seed: &str) -> weavemaze::Result<()> {
    let grid = generate(
        seed,
        args.width,
        args.height,
        args.density,
        args.add_loop,
        args.start,
    )?;
    print_grid(&grid);

    let start = args.start.unwrap_or((args.width / 2, args.height / 2));
    let graph = build_graph(&grid, start)?;
    let path = shortest_path(
        &graph,
        VertexKey::over(0, 0),
        VertexKey::over(args.width - 1, args.height - 1),
    )?;
    println!("shortest corner-to-corner path: {path}");
    Ok(())
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    let seed = args
        .seed
        .clone()
        .unwrap_or_else(|| format!("{:08x}", rand::rng().random::<u32>()));
    println!("seed: {seed}");

    match run(&args, &seed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
