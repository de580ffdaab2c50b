mod config;
mod handlers;

use crate::error::{ComposerError, Result};
use crate::layout::{Align, Direction, Insets, LayoutOptions, Padding};
use crate::ComposerOptions;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueEnum};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Style {
    Flat,
    Wireframe,
    Material,
    Ios,
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Flat => "flat",
            Style::Wireframe => "wireframe",
            Style::Material => "material",
            Style::Ios => "ios",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutDirection {
    Vertical,
    Horizontal,
    Grid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Alignment {
    Start,
    Center,
    Stretch,
}

pub struct ComposerCli {
    config: config::ConfigFile,
    start_time: Instant,
}

impl Default for ComposerCli {
    fn default() -> Self {
        Self::new()
    }
}

impl ComposerCli {
    pub fn new() -> Self {
        Self {
            config: config::ConfigFile::default(),
            start_time: Instant::now(),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        self.start_time = Instant::now();
        let matches = self.build_cli().get_matches();

        self.setup_logging(matches.get_count("verbose"))?;

        if let Some(config_path) = matches.get_one::<String>("config") {
            self.config = config::load(config_path)?;
        }

        let result = match matches.subcommand() {
            Some(("generate", sub_matches)) => handlers::handle_generate_command(self, sub_matches),
            Some(("parse", sub_matches)) => handlers::handle_parse_command(sub_matches),
            Some(("templates", sub_matches)) => handlers::handle_templates_command(sub_matches),
            Some(("layout", sub_matches)) => handlers::handle_layout_command(self, sub_matches),
            Some(("resolve", sub_matches)) => handlers::handle_resolve_command(sub_matches),
            Some(("sections", sub_matches)) => handlers::handle_sections_command(sub_matches),
            _ => {
                println!("No subcommand specified. Use --help for usage information.");
                Ok(())
            }
        };

        log::info!("Finished in {}ms", self.start_time.elapsed().as_millis());
        result
    }

    fn build_cli(&self) -> Command {
        Command::new(crate::NAME)
            .version(crate::VERSION)
            .about(crate::DESCRIPTION)
            .author("Mockc Development Team")
            .arg(
                Arg::new("config")
                    .short('c')
                    .long("config")
                    .value_name("FILE")
                    .help("Configuration file path (.json or .toml)")
                    .action(ArgAction::Set),
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .help("Increase verbosity (can be used multiple times)")
                    .action(ArgAction::Count),
            )
            .subcommand(
                Command::new("generate")
                    .about("Generate a screen from a short description")
                    .arg(
                        Arg::new("description")
                            .help("Screen description, e.g. \"login screen with email\"")
                            .required(true)
                            .index(1),
                    )
                    .arg(
                        Arg::new("width")
                            .short('W')
                            .long("width")
                            .value_name("PX")
                            .value_parser(clap::value_parser!(f64))
                            .help("Screen width (default 393)"),
                    )
                    .arg(
                        Arg::new("height")
                            .short('H')
                            .long("height")
                            .value_name("PX")
                            .value_parser(clap::value_parser!(f64))
                            .help("Screen height (default 852)"),
                    )
                    .arg(
                        Arg::new("style")
                            .short('s')
                            .long("style")
                            .value_parser(clap::value_parser!(Style))
                            .help("Visual style"),
                    )
                    .arg(
                        Arg::new("output")
                            .short('o')
                            .long("output")
                            .value_name("FILE")
                            .help("Write JSON to a file instead of stdout"),
                    )
                    .arg(
                        Arg::new("resolve-overlaps")
                            .long("resolve-overlaps")
                            .help("Push partially overlapping elements apart")
                            .action(ArgAction::SetTrue),
                    )
                    .arg(
                        Arg::new("debug")
                            .short('d')
                            .long("debug")
                            .help("Log every pipeline phase")
                            .action(ArgAction::SetTrue),
                    ),
            )
            .subcommand(
                Command::new("parse")
                    .about("Show how a description is parsed and matched")
                    .arg(
                        Arg::new("description")
                            .help("Screen description")
                            .required(true)
                            .index(1),
                    ),
            )
            .subcommand(
                Command::new("templates")
                    .about("List the built-in templates and sections")
                    .arg(
                        Arg::new("json")
                            .long("json")
                            .help("Print as JSON")
                            .action(ArgAction::SetTrue),
                    ),
            )
            .subcommand(
                Command::new("layout")
                    .about("Arrange the elements of a screen file")
                    .arg(
                        Arg::new("input")
                            .help("Screen JSON file ({width, height, elements})")
                            .required(true)
                            .index(1),
                    )
                    .arg(
                        Arg::new("output")
                            .short('o')
                            .long("output")
                            .value_name("FILE")
                            .help("Write JSON to a file instead of stdout"),
                    )
                    .arg(
                        Arg::new("direction")
                            .long("direction")
                            .value_parser(clap::value_parser!(LayoutDirection))
                            .help("Layout direction"),
                    )
                    .arg(
                        Arg::new("spacing")
                            .long("spacing")
                            .value_name("PX")
                            .value_parser(clap::value_parser!(f64))
                            .help("Gap between elements"),
                    )
                    .arg(
                        Arg::new("padding")
                            .long("padding")
                            .value_name("PX|T,R,B,L")
                            .help("Padding: one value or four comma-separated sides"),
                    )
                    .arg(
                        Arg::new("align")
                            .long("align")
                            .value_parser(clap::value_parser!(Alignment))
                            .help("Cross-axis alignment"),
                    )
                    .arg(
                        Arg::new("columns")
                            .long("columns")
                            .value_name("N")
                            .value_parser(clap::value_parser!(usize))
                            .help("Grid columns"),
                    )
                    .arg(
                        Arg::new("start-y")
                            .long("start-y")
                            .value_name("PX")
                            .value_parser(clap::value_parser!(f64))
                            .help("Extra top offset"),
                    )
                    .arg(
                        Arg::new("ids")
                            .long("ids")
                            .value_name("ID,...")
                            .value_delimiter(',')
                            .action(ArgAction::Append)
                            .help("Only arrange elements with these ids"),
                    ),
            )
            .subcommand(
                Command::new("resolve")
                    .about("Resolve partial overlaps in a screen file")
                    .arg(Arg::new("input").help("Screen JSON file").required(true).index(1))
                    .arg(
                        Arg::new("output")
                            .short('o')
                            .long("output")
                            .value_name("FILE")
                            .help("Write JSON to a file instead of stdout"),
                    ),
            )
            .subcommand(
                Command::new("sections")
                    .about("Compose a page from named sections")
                    .arg(
                        Arg::new("input")
                            .help("Sections JSON file ({width, sections: [{name, props}]})")
                            .required(true)
                            .index(1),
                    )
                    .arg(
                        Arg::new("output")
                            .short('o')
                            .long("output")
                            .value_name("FILE")
                            .help("Write JSON to a file instead of stdout"),
                    ),
            )
    }

    fn setup_logging(&self, verbose_count: u8) -> Result<()> {
        let log_level = match verbose_count {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };
        env_logger::Builder::from_default_env()
            .filter_level(log_level)
            .format_timestamp_secs()
            .try_init()
            .map_err(|e| {
                ComposerError::option("verbose", format!("logger already initialized: {}", e))
            })
    }

    /// Defaults, then the config file, then command-line flags
    pub fn build_composer_options(&self, matches: &ArgMatches) -> Result<ComposerOptions> {
        let mut options = ComposerOptions {
            layout: self.build_layout_options(matches)?,
            ..ComposerOptions::default()
        };

        if let Some(width) = self.config.width {
            options.width = width;
        }
        if let Some(height) = self.config.height {
            options.height = height;
        }
        if let Some(style) = &self.config.style {
            options.style = style.clone();
        }
        options.resolve_overlaps = self.config.resolve_overlaps.unwrap_or(false);

        if let Some(width) = flag::<f64>(matches, "width") {
            options.width = width;
        }
        if let Some(height) = flag::<f64>(matches, "height") {
            options.height = height;
        }
        if let Some(style) = flag::<Style>(matches, "style") {
            options.style = style.as_str().to_string();
        }
        options.resolve_overlaps |= flag_set(matches, "resolve-overlaps");
        options.debug_mode = flag_set(matches, "debug");

        Ok(options)
    }

    pub fn build_layout_options(&self, matches: &ArgMatches) -> Result<LayoutOptions> {
        let mut options = LayoutOptions::default();

        if let Some(direction) = self.config.direction {
            options.direction = direction;
        }
        if let Some(spacing) = self.config.spacing {
            options.spacing = spacing;
        }
        if let Some(padding) = self.config.padding {
            options.padding = padding;
        }
        if let Some(align) = self.config.align {
            options.align = align;
        }
        if let Some(columns) = self.config.columns {
            options.columns = columns;
        }

        if let Some(direction) = flag::<LayoutDirection>(matches, "direction") {
            options.direction = match direction {
                LayoutDirection::Vertical => Direction::Vertical,
                LayoutDirection::Horizontal => Direction::Horizontal,
                LayoutDirection::Grid => Direction::Grid,
            };
        }
        if let Some(spacing) = flag::<f64>(matches, "spacing") {
            options.spacing = spacing;
        }
        if let Some(padding) = flag::<String>(matches, "padding") {
            options.padding = parse_padding(&padding)?;
        }
        if let Some(align) = flag::<Alignment>(matches, "align") {
            options.align = match align {
                Alignment::Start => Align::Start,
                Alignment::Center => Align::Center,
                Alignment::Stretch => Align::Stretch,
            };
        }
        if let Some(columns) = flag::<usize>(matches, "columns") {
            options.columns = columns;
        }
        if let Some(start_y) = flag::<f64>(matches, "start-y") {
            options.start_y = Some(start_y);
        }
        if let Ok(Some(ids)) = matches.try_get_many::<String>("ids") {
            options.element_ids = Some(ids.cloned().collect());
        }

        options.validate()?;
        Ok(options)
    }
}

/// Value of an optional argument; arguments a subcommand does not define read as absent
fn flag<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, id: &str) -> Option<T> {
    matches.try_get_one::<T>(id).ok().flatten().cloned()
}

fn flag_set(matches: &ArgMatches, id: &str) -> bool {
    matches.try_get_one::<bool>(id).ok().flatten().copied().unwrap_or(false)
}

/// "16" or "8,16,8,16" (top, right, bottom, left)
pub fn parse_padding(value: &str) -> Result<Padding> {
    let parts: Vec<f64> = value
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|_| {
                    ComposerError::option("padding", format!("'{}' is not a number", part.trim()))
                })
        })
        .collect::<Result<_>>()?;

    match parts.as_slice() {
        [all] => Ok(Padding::Uniform(*all)),
        [top, right, bottom, left] => Ok(Padding::Sides(Insets {
            top: *top,
            right: *right,
            bottom: *bottom,
            left: *left,
        })),
        _ => Err(ComposerError::option(
            "padding",
            format!("expected 1 or 4 values, got {}", parts.len()),
        )),
    }
}
