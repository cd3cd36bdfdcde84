use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
};
use swimplan_config::{Config, ParserConfig};
use swimplan_engine::{ParseOptions, PlanFile, SwimBlock, SwimExercise, SwimParser, io};

struct App {
    plans_path: PathBuf,
    parser: SwimParser,
    plan_files: Vec<PlanFile>,
    file_list_state: ListState,
    current_content: Vec<Line<'static>>,
}

impl App {
    fn new(plans_path: PathBuf, parser: SwimParser) -> Result<Self> {
        let plan_files = io::scan_plan_files(&plans_path)?;

        let mut app = Self {
            plans_path,
            parser,
            plan_files,
            file_list_state: ListState::default(),
            current_content: Vec::new(),
        };

        // Select first plan if available
        if !app.plan_files.is_empty() {
            app.file_list_state.select(Some(0));
            app.update_content_for_selection();
        }

        Ok(app)
    }

    fn next_file(&mut self) {
        if self.plan_files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.plan_files.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_file(&mut self) {
        if self.plan_files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(0) | None => self.plan_files.len() - 1,
            Some(i) => i - 1,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn update_content_for_selection(&mut self) {
        let Some(file) = self
            .file_list_state
            .selected()
            .and_then(|index| self.plan_files.get(index))
        else {
            return;
        };

        self.current_content = match io::read_plan(file.relative_path(), &self.plans_path) {
            Ok(content) => render_blocks(&self.parser.parse(&content)),
            Err(e) => vec![Line::from(format!("Error reading file: {e}"))],
        };
    }
}

fn render_blocks(blocks: &[SwimBlock]) -> Vec<Line<'static>> {
    if blocks.is_empty() {
        return vec![Line::from("No blocks found in this plan")];
    }

    let mut lines = Vec::new();
    for block in blocks {
        let mut heading = vec![Span::styled(
            block.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if let Some(repetitions) = block.repetitions {
            heading.push(Span::styled(
                format!("  x{repetitions}"),
                Style::default().fg(Color::Cyan),
            ));
        }
        heading.push(Span::raw(format!("  ({}m)", block.total_distance())));
        lines.push(Line::from(heading));

        if !block.modalities.is_empty() {
            lines.push(Line::from(format!("  {}", block.modalities)));
        }
        for exercise in &block.exercises {
            lines.push(Line::from(format!("  • {}", describe_exercise(exercise))));
            for modality in exercise.modalities.lines() {
                lines.push(Line::from(Span::styled(
                    format!("      {modality}"),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
        for note in block.description.lines() {
            lines.push(Line::from(Span::styled(
                format!("  {note}"),
                Style::default().add_modifier(Modifier::ITALIC),
            )));
        }
        if !block.equipment.is_empty() {
            let equipment: Vec<&str> = block.equipment.iter().map(|e| e.as_str()).collect();
            lines.push(Line::from(format!("  Matériel: {}", equipment.join(", "))));
        }
        lines.push(Line::default());
    }

    lines
}

fn describe_exercise(exercise: &SwimExercise) -> String {
    let distance = exercise
        .distance
        .map_or_else(|| "?".to_string(), |d| d.to_string());
    let mut text = format!(
        "{}x{distance} {} {} {}",
        exercise.repetitions, exercise.stroke, exercise.stroke_type, exercise.intensity
    );
    if let Some(rest) = exercise.rest {
        text.push_str(&format!(" {} {}", exercise.rest_type, format_seconds(rest)));
    }
    if !exercise.equipment.is_empty() {
        let equipment: Vec<&str> = exercise.equipment.iter().map(|e| e.as_str()).collect();
        text.push_str(&format!(" [{}]", equipment.join(", ")));
    }
    text
}

fn format_seconds(seconds: u32) -> String {
    match (seconds / 60, seconds % 60) {
        (0, s) => format!("{s}''"),
        (m, 0) => format!("{m}'"),
        (m, s) => format!("{m}'{s:02}"),
    }
}

fn parse_options(parser: ParserConfig) -> ParseOptions {
    ParseOptions {
        block_title_prefix: parser.block_title_prefix,
        extra_modality_tokens: parser.extra_modality_tokens,
    }
}

/// Parser options from the config file; a missing or broken file falls back to defaults.
fn parser_from_config() -> SwimParser {
    match Config::load() {
        Ok(Some(config)) => SwimParser::new(parse_options(config.parser)),
        Ok(None) => SwimParser::default(),
        Err(e) => {
            log::warn!("Ignoring config file: {e}");
            SwimParser::default()
        }
    }
}

fn print_json(plan_path: &str) -> Result<()> {
    let content = std::fs::read_to_string(plan_path)
        .with_context(|| format!("Failed to read plan file '{plan_path}'"))?;
    let blocks = parser_from_config().parse(&content);
    println!("{}", serde_json::to_string_pretty(&blocks)?);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    if args.len() == 3 && args[1] == "--json" {
        return print_json(&args[2]);
    }

    let plans_path;
    let parser;
    let from_config;

    if args.len() == 2 && !args[1].starts_with("--") {
        // CLI argument provided - use it
        plans_path = PathBuf::from(&args[1]);
        parser = parser_from_config();
        from_config = false;
    } else if args.len() == 1 {
        // No CLI argument - try config file
        match Config::load() {
            Ok(Some(config)) => {
                plans_path = config.plans_path;
                parser = SwimParser::new(parse_options(config.parser));
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No plans path provided and no config file found");
                eprintln!("Usage: {} <plans-folder-path>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <plans-folder-path>", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [plans-folder-path]", args[0]);
        eprintln!("       {} --json <plan-file>", args[0]);
        process::exit(1);
    };

    if let Err(e) = io::validate_plans_dir(&plans_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Plans path '{}'{} is invalid: {e}",
            plans_path.display(),
            source
        );
        process::exit(1);
    }

    // Create app
    let mut app = App::new(plans_path, parser)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_file(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_file(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(f.area());

    // Plan list panel
    let file_items: Vec<ListItem> = app
        .plan_files
        .iter()
        .map(|file| {
            let depth = file.relative_path().components().count().saturating_sub(1);
            let display_text = format!("{}{}", "  ".repeat(depth), file.display_path());
            ListItem::new(vec![Line::from(vec![Span::raw(display_text)])])
        })
        .collect();

    let files_list = List::new(file_items)
        .block(Block::default().borders(Borders::ALL).title("Plans"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(files_list, chunks[0], &mut app.file_list_state);

    // Parsed plan panel
    let title = app
        .file_list_state
        .selected()
        .and_then(|index| app.plan_files.get(index))
        .map_or("Plan", |file| file.display_name());
    let content_text = if app.current_content.is_empty() {
        vec![Line::from("Select a plan to view its blocks")]
    } else {
        app.current_content.clone()
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .wrap(ratatui::widgets::Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    // Instructions
    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next"),
    ]);

    let help = Paragraph::new(vec![help_text]).block(Block::default());

    // Place help at bottom
    let bottom_chunk = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    f.render_widget(help, bottom_chunk[1]);
}
