use anyhow::Result;
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
use spec_example_config::Config;
use spec_example_engine::{
    SpecExampleBlock, SpecExampleOptions, SpecFile, io, parsing::snapshot::render_spec_example,
};
use std::{env, io::stdout, path::PathBuf, process};

/// Position of one example: file index, then example index within that file.
type ExampleRef = (usize, usize);

struct App {
    files: Vec<SpecFile>,
    examples: Vec<ExampleRef>,
    list_state: ListState,
    show_ast: bool,
    current_content: Vec<String>,
}

impl App {
    fn new(files: Vec<SpecFile>) -> Self {
        let examples = files
            .iter()
            .enumerate()
            .flat_map(|(f, file)| (0..file.doc.examples().count()).map(move |e| (f, e)))
            .collect();

        let mut app = Self {
            files,
            examples,
            list_state: ListState::default(),
            show_ast: false,
            current_content: Vec::new(),
        };

        // Select first example if available
        if !app.examples.is_empty() {
            app.list_state.select(Some(0));
            app.update_content_for_selection();
        }

        app
    }

    fn example(&self, (f, e): ExampleRef) -> Option<(&SpecFile, &SpecExampleBlock)> {
        let file = self.files.get(f)?;
        let block = file.doc.examples().nth(e)?;
        Some((file, block))
    }

    fn next_example(&mut self) {
        if self.examples.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.examples.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_example(&mut self) {
        if self.examples.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.examples.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn toggle_ast(&mut self) {
        self.show_ast = !self.show_ast;
        self.update_content_for_selection();
    }

    fn label(&self, at: ExampleRef) -> String {
        let Some((file, block)) = self.example(at) else {
            return String::new();
        };
        let name = file
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match block.coordinate(&file.rope) {
            Some(coord) => format!(
                "{name} {}:{}",
                coord.section.unwrap_or_default(),
                coord.number.unwrap_or_default()
            ),
            None => format!("{name} #{}", at.1 + 1),
        }
    }

    fn update_content_for_selection(&mut self) {
        let selected = self
            .list_state
            .selected()
            .and_then(|i| self.examples.get(i).copied())
            .and_then(|at| self.example(at));

        self.current_content = match selected {
            Some((file, block)) if self.show_ast => {
                let mut out = String::new();
                render_spec_example(&mut out, &file.rope, block);
                out.lines().map(str::to_string).collect()
            }
            Some((file, block)) => render_sections(file, block),
            None => Vec::new(),
        };
    }
}

fn render_sections(file: &SpecFile, block: &SpecExampleBlock) -> Vec<String> {
    let rope = &file.rope;
    let mut lines = vec![format!("{} @ {:?}", file.path.display(), block.span)];

    let options = block.option_list(rope);
    if !options.is_empty() {
        lines.push(format!("options: {}", options.join(", ")));
    }
    if !block.is_closed_by_delimiter() {
        lines.push("(not closed before end of file)".to_string());
    }

    let sections = [
        ("source", block.source_text(rope)),
        ("rendered", block.rendered_text(rope)),
        ("dump", block.dump_text(rope)),
    ];
    for (title, text) in sections {
        lines.push(String::new());
        lines.push(format!("── {title} ──"));
        match text {
            Some(text) => lines.extend(text.lines().map(str::to_string)),
            None => lines.push("(none)".to_string()),
        }
    }

    lines
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Determine corpus path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };
    let from_config = args.len() == 1;

    let corpus_path = match (args.len(), &config) {
        (2, _) => PathBuf::from(&args[1]),
        (1, Some(Config {
            corpus_path: Some(path),
            ..
        })) => path.clone(),
        (1, _) => {
            eprintln!("Error: No spec file provided and no corpus_path in config");
            eprintln!("Usage: {} <spec-file-or-folder>", args[0]);
            eprintln!("Or set corpus_path in {}", config_path.display());
            process::exit(1);
        }
        _ => {
            eprintln!("Usage: {} [spec-file-or-folder]", args[0]);
            process::exit(1);
        }
    };
    let options = config.map(|c| c.spec_example).unwrap_or_default();

    let files = match load(&corpus_path, &options) {
        Ok(files) => files,
        Err(e) => {
            let source = if from_config {
                format!(" from config file '{}'", config_path.display())
            } else {
                String::new()
            };
            eprintln!(
                "Error: Corpus path '{}'{} is invalid: {e}",
                corpus_path.display(),
                source
            );
            process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(files);

    // Main loop
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

fn load(corpus_path: &std::path::Path, options: &SpecExampleOptions) -> Result<Vec<SpecFile>> {
    let files = io::load_corpus(corpus_path, options)?;
    let total: usize = files.iter().map(|f| f.doc.examples().count()).sum();
    log::info!("loaded {total} spec examples from {} files", files.len());
    Ok(files)
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_example(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_example(),
                KeyCode::Char('a') => app.toggle_ast(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(rows[0]);

    // Example list panel
    let items: Vec<ListItem> = app
        .examples
        .iter()
        .map(|&at| ListItem::new(Line::from(vec![Span::raw(app.label(at))])))
        .collect();

    let title = format!("Examples ({})", app.examples.len());
    let examples_list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(examples_list, chunks[0], &mut app.list_state);

    // Content panel
    let content_text: Vec<Line> = if app.current_content.is_empty() {
        vec![Line::from("No spec examples found")]
    } else {
        app.current_content
            .iter()
            .map(|line| {
                if line.starts_with("── ") {
                    Line::styled(line.clone(), Style::default().add_modifier(Modifier::BOLD))
                } else {
                    Line::from(line.clone())
                }
            })
            .collect()
    };

    let title = if app.show_ast { "AST" } else { "Sections" };
    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(ratatui::widgets::Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("a: Toggle AST"),
    ]);
    f.render_widget(Paragraph::new(help), rows[1]);
}
