use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use folio::render::ERROR_MESSAGE;
use folio::{build_index, highlight, load_corpus_file, SearchBox, SearchView, SiteConfig};

mod cli;
use cli::display::{self, BOLD, DIM, RESET};
use cli::{Cli, Commands, LogFormat};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli) {
        eprintln!("warning: {:#}", e);
    }

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins over the verbosity flags.
fn init_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else if cli.quiet {
        LevelFilter::ERROR
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    match cli.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    }
    .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {}", e))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Search {
            corpus,
            query,
            limit,
            html,
            config,
        } => run_search(&corpus, &query, limit, html, config.as_deref()),
        Commands::Inspect { corpus, top } => run_inspect(&corpus, top),
        Commands::Highlight { text, query } => {
            println!("{}", highlight(&text, &query));
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            SiteConfig::from_json(&json)
                .with_context(|| format!("invalid config {}", path.display()))
        }
        None => Ok(SiteConfig::default()),
    }
}

fn run_search(
    corpus: &Path,
    query: &str,
    limit: Option<usize>,
    html: bool,
    config: Option<&Path>,
) -> Result<()> {
    let mut search_config = load_config(config)?.search;
    if let Some(limit) = limit {
        search_config.result_limit = limit;
    }
    let min_len = search_config.min_query_len;

    let docs = load_corpus_file(corpus)
        .with_context(|| format!("failed to load corpus {}", corpus.display()))?;

    let mut search_box = SearchBox::new(search_config);
    search_box.finish_loading(Ok(docs));
    let view = search_box.input(query);

    if html {
        println!("{}", view.to_html());
        return match view {
            SearchView::Error => bail!(ERROR_MESSAGE),
            _ => Ok(()),
        };
    }

    match view {
        SearchView::Cleared => {
            println!("Query too short: searches need at least {} characters.", min_len);
        }
        SearchView::NoResults { query } => {
            println!("No results found for \"{}\"", query);
        }
        SearchView::Results(page) => {
            display::section_top(&format!("{} result(s) found", page.total));
            for (rank, hit) in page.hits.iter().enumerate() {
                display::row(&format!(
                    " {}  {}  {}",
                    display::pad_left(&(rank + 1).to_string(), 2),
                    display::score_value(hit.score),
                    display::pad_right(&display::kind_label(hit.kind), 8),
                ));
                display::row(&format!("     {}", display::terminal_highlight(&hit.title_html)));
                let meta = format!("{}  {}", hit.url, hit.date);
                if display::use_colors() {
                    display::row(&format!("     {}{}{}", DIM, meta, RESET));
                } else {
                    display::row(&format!("     {}", meta));
                }
            }
            if page.total > page.hits.len() {
                display::row(&format!(
                    " {} more not shown",
                    page.total - page.hits.len()
                ));
            }
            display::section_bot();
        }
        SearchView::Loading | SearchView::Unavailable => {
            bail!("search index is not available")
        }
        SearchView::Error => bail!(ERROR_MESSAGE),
    }
    Ok(())
}

fn run_inspect(corpus: &Path, top: usize) -> Result<()> {
    let docs = load_corpus_file(corpus)
        .with_context(|| format!("failed to load corpus {}", corpus.display()))?;
    let index = build_index(docs, SiteConfig::default().search.weights);

    let mut terms: Vec<(&str, usize)> = index
        .vocabulary()
        .iter()
        .enumerate()
        .map(|(idx, term)| (term.as_str(), index.postings_at(idx as u32).doc_freq))
        .collect();
    terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    display::section_top("CORPUS");
    display::row(&format!(" file        {}", corpus.display()));
    display::row(&format!(" documents   {}", index.len()));
    display::row(&format!(" terms       {}", index.vocabulary().len()));
    display::row(&format!(" postings    {}", index.posting_count()));
    display::section_bot();

    if !terms.is_empty() && top > 0 {
        display::section_top("TOP TERMS");
        for (term, doc_freq) in terms.into_iter().take(top) {
            let name = if display::use_colors() {
                format!("{}{}{}", BOLD, term, RESET)
            } else {
                term.to_string()
            };
            display::row(&format!(" {}  {} docs", display::pad_right(&name, 24), doc_freq));
        }
        display::section_bot();
    }
    Ok(())
}
