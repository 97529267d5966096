use crate::application::{CalendarComponent, Config, LOG_ENV, ReportingMode};
use crate::domain::{CalendarProps, Theme};
use anyhow::Context;
use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Parser)]
#[command(name = "calview")]
#[command(about = "Resolve themed calendar widget configurations")]
#[command(version)]
pub struct Cli {
    /// Calendar props file (JSON). Defaults to $CALVIEW_CONFIG, then the user config dir
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the resolved widget options as JSON
    Show {
        /// Override the starting theme (light or dark)
        #[arg(short, long)]
        theme: Option<String>,
        /// Toggle the theme this many times before resolving
        #[arg(long, default_value_t = 0)]
        toggle: u32,
    },
    /// Click a date on the resolved view and show how it was reported
    Click {
        /// Date to click (YYYY-MM-DD format)
        date: String,
        /// Override the starting theme (light or dark)
        #[arg(short, long)]
        theme: Option<String>,
        /// Report the click through a callback instead of component state
        #[arg(long)]
        callback: bool,
    },
    /// List the built-in theme styles
    Themes,
}

impl Cli {
    pub fn run() -> anyhow::Result<()> {
        let cli = Self::parse();
        let mut config = Config::from_env();
        if let Some(path) = cli.config {
            config.props_path = path;
        }

        init_logging(cli.verbose)?;

        match cli.command {
            Some(Commands::Show { theme, toggle }) => {
                let props = with_theme(config.load_props()?, theme);
                print_json(&show_output(props, toggle)?)?;
            }
            Some(Commands::Click {
                date,
                theme,
                callback,
            }) => {
                let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                    .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", date))?;
                let props = with_theme(config.load_props()?, theme);
                println!("{}", click_report(props, date, callback)?);
            }
            Some(Commands::Themes) => {
                for line in theme_lines(&config.load_props()?) {
                    println!("{}", line);
                }
            }
            None => {
                // Default: show the view as configured
                print_json(&show_output(config.load_props()?, 0)?)?;
            }
        }

        Ok(())
    }
}

/// `-v` flags override the `CALVIEW_LOG` filter
fn verbosity_filter(verbose: u8) -> Option<LevelFilter> {
    match verbose {
        0 => None,
        1 => Some(LevelFilter::Info),
        2 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    }
}

fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn).parse_env(LOG_ENV);
    if let Some(level) = verbosity_filter(verbose) {
        builder.filter_level(level);
    }
    builder.try_init().context("Failed to install logger")
}

fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn with_theme(props: CalendarProps, theme: Option<String>) -> CalendarProps {
    match theme {
        Some(theme) => props.theme(theme),
        None => props,
    }
}

fn show_output(props: CalendarProps, toggle: u32) -> anyhow::Result<serde_json::Value> {
    let calendar = CalendarComponent::new(props);
    for _ in 0..toggle {
        calendar.toggle_theme();
    }

    let view = calendar.view()?;
    Ok(serde_json::json!({
        "theme": calendar.current_theme().to_string(),
        "customTheme": calendar.uses_custom_theme(),
        "options": view.options(),
    }))
}

/// Clicks `date` on the resolved view and describes where the click landed
fn click_report(props: CalendarProps, date: NaiveDate, callback: bool) -> anyhow::Result<String> {
    let received = Rc::new(Cell::new(None));
    let props = if callback {
        let sink = Rc::clone(&received);
        props.on_date_click(move |date| sink.set(Some(date)))
    } else {
        props
    };

    let calendar = CalendarComponent::new(props);
    calendar.view()?.click_date(date);

    let report = match calendar.reporting_mode() {
        ReportingMode::Callback => match received.get() {
            Some(date) => format!("callback received {}", date.format("%Y-%m-%d")),
            None => "callback not called".to_string(),
        },
        ReportingMode::SelectedDate => match calendar.selected_date_str() {
            Some(selected) => format!("selected date: {}", selected),
            None => "no date selected".to_string(),
        },
    };
    Ok(report)
}

fn theme_lines(props: &CalendarProps) -> Vec<String> {
    let mut lines: Vec<String> = Theme::available_themes()
        .into_iter()
        .map(|theme| {
            let styling = theme.default_styling();
            format!("{:<6} {} {}", theme, styling.background, styling.text)
        })
        .collect();

    if let Some(config) = &props.theme_config {
        lines.push(String::new());
        lines.push("custom (from props):".to_string());
        for theme in Theme::available_themes() {
            let styling = config.styling(theme);
            lines.push(format!("{:<6} {} {}", theme, styling.background, styling.text));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ThemeConfig, ThemeVariant};
    use clap::CommandFactory;
    use serde_json::json;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show_with_toggle() {
        let cli = Cli::try_parse_from(["calview", "show", "--theme", "dark", "--toggle", "3"]).unwrap();
        match cli.command {
            Some(Commands::Show { theme, toggle }) => {
                assert_eq!(theme.as_deref(), Some("dark"));
                assert_eq!(toggle, 3);
            }
            _ => panic!("expected show command"),
        }
    }

    #[test]
    fn test_parse_click_with_global_flags() {
        let cli = Cli::try_parse_from([
            "calview",
            "click",
            "2024-03-15",
            "--callback",
            "-vv",
            "--config",
            "props.json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("props.json")));
        assert!(matches!(
            cli.command,
            Some(Commands::Click { callback: true, .. })
        ));
    }

    #[test]
    fn test_with_theme_overrides_props() {
        let props = with_theme(CalendarProps::new().theme("light"), Some("dark".to_string()));
        assert_eq!(props.theme.as_deref(), Some("dark"));

        let props = with_theme(CalendarProps::new().theme("light"), None);
        assert_eq!(props.theme.as_deref(), Some("light"));
    }

    fn march_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn custom_config() -> ThemeConfig {
        ThemeConfig::new(
            ThemeVariant::new("custom-bg", "custom-text"),
            ThemeVariant::new("night-bg", "night-text"),
        )
    }

    #[test]
    fn test_verbosity_filter() {
        assert_eq!(verbosity_filter(0), None);
        assert_eq!(verbosity_filter(1), Some(LevelFilter::Info));
        assert_eq!(verbosity_filter(2), Some(LevelFilter::Debug));
        assert_eq!(verbosity_filter(5), Some(LevelFilter::Trace));
    }

    #[test]
    fn test_show_output_defaults() {
        let output = show_output(CalendarProps::new(), 0).unwrap();
        assert_eq!(output["theme"], json!("light"));
        assert_eq!(output["customTheme"], json!(false));
        assert_eq!(
            output["options"]["viewClassNames"],
            json!(["bg-white", "text-black"])
        );
        assert_eq!(output["options"]["plugins"], json!(["dayGrid", "interaction"]));
    }

    #[test]
    fn test_show_output_applies_toggles() {
        let output = show_output(CalendarProps::new(), 3).unwrap();
        assert_eq!(output["theme"], json!("dark"));
        assert_eq!(
            output["options"]["viewClassNames"],
            json!(["bg-slate-800", "text-white"])
        );

        let output = show_output(CalendarProps::new().theme("dark"), 2).unwrap();
        assert_eq!(output["theme"], json!("dark"));
    }

    #[test]
    fn test_show_output_custom_theme() {
        let props = CalendarProps::new()
            .theme("dark")
            .theme_config(custom_config());
        let output = show_output(props, 0).unwrap();
        assert_eq!(output["customTheme"], json!(true));
        assert_eq!(
            output["options"]["viewClassNames"],
            json!(["night-bg", "night-text"])
        );
        assert_eq!(output["options"]["plugins"], json!(["dayGrid"]));
    }

    #[test]
    fn test_show_output_rejects_unknown_theme() {
        let err = show_output(CalendarProps::new().theme("sepia"), 0).unwrap_err();
        assert!(err.to_string().contains("sepia"));
    }

    #[test]
    fn test_click_report_selected_date() {
        let report = click_report(CalendarProps::new(), march_15(), false).unwrap();
        assert_eq!(report, "selected date: 2024-03-15");
    }

    #[test]
    fn test_click_report_callback_with_custom_theme() {
        let props = CalendarProps::new().theme_config(custom_config());
        let report = click_report(props, march_15(), true).unwrap();
        assert_eq!(report, "callback received 2024-03-15");
    }

    #[test]
    fn test_theme_lines_lists_custom_styles() {
        let lines = theme_lines(&CalendarProps::new());
        assert_eq!(lines, vec!["light  bg-white text-black", "dark   bg-slate-800 text-white"]);

        let lines = theme_lines(&CalendarProps::new().theme_config(custom_config()));
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[3], "light  custom-bg custom-text");
        assert_eq!(lines[4], "dark   night-bg night-text");
    }
}
