//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatlens::ChatlensError;
use chatlens::analytics::analyze;
use chatlens::cli::Args;
use chatlens::core::apply_filters;
use chatlens::format::write_to_format;
use chatlens::parser::ChatLogParser;
use chatlens::report::ConsoleReport;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise warnings only, or debug with `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "chatlens=debug" } else { "chatlens=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<(), ChatlensError> {
    let total_start = Instant::now();
    let config = args.analysis_config()?;
    let filter_config = args.filter_config()?;

    let parser = ChatLogParser::new(&config)?;

    // Print header
    println!("🔎 chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:    {}", args.input.display());
    println!("🌐 System:   {} / {}", config.system_language, config.operating_system);
    println!("🧾 Format:   {}", parser.spec());
    println!("💬 Language: {}", config.chat_language);
    if let Some(date) = filter_config.after {
        println!("📅 After:    {}", date);
    }
    if let Some(date) = filter_config.before {
        println!("📅 Before:   {}", date);
    }
    if let Some(ref author) = filter_config.author {
        println!("👤 From:     {}", author);
    }
    println!();

    // Step 1: Parse
    println!("⏳ Parsing export...");
    let parse_start = Instant::now();
    let outcome = parser.parse(&args.input)?;
    let stats = outcome.stats;
    println!(
        "   Found {} messages in {} lines ({:.2}s)",
        stats.records,
        stats.total_lines,
        parse_start.elapsed().as_secs_f64()
    );
    if stats.dropped() > 0 {
        println!(
            "   Dropped {} system, {} unmatched, {} malformed",
            stats.system, stats.unmatched, stats.malformed
        );
    }

    // Step 2: Filter
    let corpus = if filter_config.is_active() {
        println!("🔍 Filtering messages...");
        let filtered = apply_filters(&outcome.corpus, &filter_config);
        println!("   {} messages after filtering", filtered.len());
        filtered
    } else {
        outcome.corpus
    };

    // Step 3: Analyze
    println!("📈 Analyzing...");
    let analyze_start = Instant::now();
    let report = analyze(&corpus, &config);
    println!("   Done ({:.2}s)", analyze_start.elapsed().as_secs_f64());
    println!();

    // Step 4: Report
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    print!("{}", ConsoleReport::new(&report));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!();

    // Step 5: Charts
    let mut charts = 0;
    if args.no_charts {
        println!("⏭️  Skipping charts (--no-charts)");
    } else {
        charts = render_charts(&report, &config.output_dir)?;
    }

    // Step 6: Export
    if let Some(ref path) = args.export {
        let format = args.export_format()?;
        println!("💾 Writing {}...", format);
        write_to_format(corpus.records(), path, format, &args.output_config())?;
        println!("   Saved to {}", path.display());
    }

    println!();
    println!("✅ Done!");

    // Summary
    println!();
    println!("📊 Summary:");
    println!("   Lines:     {}", stats.total_lines);
    println!("   Parsed:    {} messages ({:.1}%)", stats.records, stats.match_ratio());
    if filter_config.is_active() {
        println!("   Filtered:  {} messages", corpus.len());
    }
    println!("   Authors:   {}", report.authors.len());
    if let Some((first, last)) = corpus.date_range() {
        println!("   Period:    {} to {}", first, last);
    }
    if charts > 0 {
        println!("   Charts:    {} in {}", charts, config.output_dir.display());
    }

    println!();
    println!("⚡ Performance:");
    println!("   Total time:  {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}

#[cfg(feature = "charts")]
fn render_charts(
    report: &chatlens::analytics::AnalysisReport,
    output_dir: &std::path::Path,
) -> Result<usize, ChatlensError> {
    println!("🎨 Rendering charts...");
    let written = chatlens::charts::render_all(report, output_dir)?;
    if written.is_empty() {
        println!("   No data to plot");
    }
    for path in &written {
        println!("   {}", path.display());
    }
    Ok(written.len())
}

#[cfg(not(feature = "charts"))]
fn render_charts(
    _report: &chatlens::analytics::AnalysisReport,
    _output_dir: &std::path::Path,
) -> Result<usize, ChatlensError> {
    println!("⏭️  Charts unavailable (built without the 'charts' feature)");
    Ok(0)
}
