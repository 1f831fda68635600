use clap::Parser;
use flexure::{Direction, FlexureError, TreeDocument, UNDEFINED};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Lay out a JSON tree document and print the resulting boxes")]
struct Args {
    /// Path to the tree document
    document: PathBuf,

    /// Available width; the root sizes itself to its content when omitted
    #[arg(long)]
    width: Option<f32>,

    /// Available height; the root sizes itself to its content when omitted
    #[arg(long)]
    height: Option<f32>,

    /// Lay the tree out right-to-left
    #[arg(long)]
    rtl: bool,

    /// Print cache and callback statistics of the pass to stderr
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<(), FlexureError> {
    env_logger::init();
    let args = Args::parse();

    log::info!("Loading tree document from {}", args.document.display());
    let source = fs::read_to_string(&args.document)?;
    let document = TreeDocument::from_json(&source)?;

    let (mut tree, root) = document.build()?;
    let direction = if args.rtl {
        Direction::Rtl
    } else {
        Direction::Ltr
    };
    tree.compute_layout(
        root,
        args.width.unwrap_or(UNDEFINED),
        args.height.unwrap_or(UNDEFINED),
        direction,
    )?;

    let laid_out = document.collect(&tree, root)?;
    println!("{}", serde_json::to_string_pretty(&laid_out)?);

    if args.stats {
        let stats = tree.stats();
        eprintln!(
            "{} nodes, {} visits ({} layout, {} measure), {} cache hits ({:.1}%), {} measure calls, {} baseline calls",
            tree.node_count(),
            stats.node_visits,
            stats.layout_passes,
            stats.measure_passes,
            stats.cache_hits,
            stats.hit_rate() * 100.0,
            stats.measure_calls,
            stats.baseline_calls
        );
    }
    Ok(())
}
