// tiny-front: scanner and syntax-tree front end for TINY

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use tiny_front::analyze::{analyze, analyze_code, open_source, TokenCollector};
use tiny_front::errors::FrontendError;
use tiny_front::listing::{Listing, TraceFlags};
use tiny_front::tree::SyntaxTree;
use tiny_front::ui::App;

/// Scan a TINY source file and write its listing.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TINY source file
    source: PathBuf,

    /// Listing destination; standard output when omitted
    listing: Option<PathBuf>,

    /// Echo each source line to the listing as it is read
    #[arg(long)]
    echo_source: bool,

    /// Report every token to the listing
    #[arg(long)]
    trace_scan: bool,

    /// Do not dump the syntax tree. The bundled front end only scans, so its
    /// tree is always empty; this matters once a grammar is plugged in
    #[arg(long)]
    no_trace_parse: bool,

    /// Browse the source, tokens and tree in a terminal UI
    #[arg(long)]
    view: bool,
}

impl Cli {
    fn flags(&self) -> TraceFlags {
        TraceFlags {
            echo_source: self.echo_source,
            trace_scan: self.trace_scan,
            trace_parse: !self.no_trace_parse,
        }
    }

    fn analyze(&self, collector: &mut TokenCollector) -> Result<SyntaxTree, FrontendError> {
        match &self.listing {
            Some(path) => analyze_code(&self.source, path, self.flags(), collector),
            None => {
                let source = open_source(&self.source)?;
                // The viewer owns the terminal, so an unnamed listing is dropped.
                let listing = if self.view {
                    Listing::new(io::sink(), self.flags())
                } else {
                    Listing::new(io::stdout(), self.flags())
                };
                analyze(source, listing, collector)
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut collector = TokenCollector::new();

    let tree = match cli.analyze(&mut collector) {
        Ok(tree) => tree,
        Err(e @ FrontendError::SourceNotFound { .. }) => {
            eprintln!("{}", e);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if !cli.view {
        return Ok(());
    }

    let source = String::from_utf8_lossy(&fs::read(&cli.source)?).into_owned();

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(source, collector.into_tokens(), &tree);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_trace_parse_help_mentions_scan_only() {
        let command = Cli::command();
        let arg = command
            .get_arguments()
            .find(|a| a.get_id() == "no_trace_parse")
            .unwrap();
        let help = arg.get_help().unwrap().to_string();
        assert!(help.contains("only scans"));
    }

    #[test]
    fn test_flags_from_command_line() {
        let cli = Cli::try_parse_from(["tiny-front", "prog.tny", "--trace-scan", "--no-trace-parse"]).unwrap();
        assert_eq!(
            cli.flags(),
            TraceFlags {
                echo_source: false,
                trace_scan: true,
                trace_parse: false,
            }
        );
        assert!(cli.listing.is_none());
    }
}
