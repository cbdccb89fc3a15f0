use anyhow::{anyhow, Result};
use clap::{crate_description, crate_name, crate_version, App as Cli, Arg, ArgMatches};
use etl_docs_tui::content::Locale;
use etl_docs_tui::pages::RenderContext;
use etl_docs_tui::router::Router;
use etl_docs_tui::state::{NavigationState, Page};
use etl_docs_tui::tables::Tables;
use etl_docs_tui::ui::{self, PageStyle, Theme};
use etl_docs_tui::{App, Config};
use std::io::{self, Write};
use std::path::PathBuf;

fn cli() -> Cli<'static, 'static> {
    Cli::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Sets a custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("tables")
                .long("tables")
                .value_name("DIR")
                .help("Reads the result tables from this directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("images")
                .long("images")
                .value_name("DIR")
                .help("Looks up page images in this directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("locale")
                .long("locale")
                .value_name("LOCALE")
                .possible_values(&["en", "pt"])
                .help("Overrides the page language")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("print")
                .long("print")
                .value_name("PAGE")
                .help("Prints one page as plain text and exits")
                .takes_value(true),
        )
}

/// Apply command line overrides on top of the loaded configuration.
///
fn apply_overrides(config: &mut Config, matches: &ArgMatches) -> Result<()> {
    if let Some(dir) = matches.value_of("tables") {
        config.tables_dir = PathBuf::from(dir);
    }
    if let Some(dir) = matches.value_of("images") {
        config.images_dir = PathBuf::from(dir);
    }
    if let Some(locale) = matches.value_of("locale") {
        config.locale = locale.parse::<Locale>().map_err(|e| anyhow!(e))?;
    }
    Ok(())
}

/// Render a single page as plain text without touching the terminal mode.
/// Write failures, such as a closed pipe, are returned to the caller.
///
fn print_page(config: &Config, page: &str, out: &mut impl Write) -> Result<()> {
    let tables = Tables::load(&config.tables_dir)?;
    let mut nav = NavigationState::default();
    nav.set(page).map_err(|e| {
        let keys: Vec<&str> = Page::ALL.iter().map(|page| page.key()).collect();
        anyhow!("{} (expected one of: {})", e, keys.join(", "))
    })?;
    let strings = config.locale.strings();
    let document = Router::default().render(
        &nav,
        &RenderContext {
            strings,
            tables: &tables,
        },
    )?;
    let theme = Theme::from_name(&config.theme_name).unwrap_or_default();
    let text = ui::plain_text(
        &document,
        &tables,
        &PageStyle {
            theme: &theme,
            strings,
            images_dir: &config.images_dir,
            button_focused: false,
        },
    );
    writeln!(out, "{}", text)?;
    out.flush()?;
    Ok(())
}

fn run() -> Result<()> {
    let matches = cli().get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    apply_overrides(&mut config, &matches)?;

    match matches.value_of("print") {
        Some(page) => print_page(&config, page, &mut io::stdout().lock()),
        None => App::start(config),
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", crate_name!(), e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn config() -> Config {
        let mut config = Config::default();
        config.tables_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tables");
        config
    }

    #[test]
    fn print_writes_the_page() {
        let mut out = Vec::new();
        print_page(&config(), "cloud", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Go to Local Environment"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn closed_output_is_an_error() {
        let error = print_page(&config(), "cloud", &mut ClosedPipe).unwrap_err();
        let io_error = error.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_error.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn unknown_page_lists_the_keys() {
        let error = print_page(&config(), "nowhere", &mut Vec::new()).unwrap_err();
        assert!(error.to_string().contains("expected one of"));
    }
}
