use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::io;
use std::path::{Path, PathBuf};

use crate::constants::PhysicalConstants;
use crate::metrics::export_csv;
use crate::report::dual;
use crate::scenario::{OrbitAssumption, OrbitalSystem, Scenario, earth_sun_factor, infer};

/// Each Left/Right press scales the selected ratio by this much.
const RATIO_STEP: f64 = 1.1;

struct App {
    scenarios: Vec<Scenario>,
    consts: PhysicalConstants,
    orbit: OrbitAssumption,
    reference_factor: f64,
    selected: ListState,
    status: String,
}

impl App {
    fn current(&self) -> Option<&Scenario> {
        self.selected.selected().and_then(|i| self.scenarios.get(i))
    }

    fn details(&self) -> Vec<String> {
        let Some(scenario) = self.current() else {
            return vec!["No scenarios".to_string()];
        };
        match infer(scenario, &self.consts, self.reference_factor, self.orbit) {
            Ok(sys) => vec![
                format!("Time ratio: 1 s on {} = {} s on Earth", sys.name, dual(sys.reference_time_ratio, 1)),
                format!("Mass / radius: {} kg/m", dual(sys.mass_per_radius, 6)),
                format!("Orbital radius: {} m", dual(sys.orbital_radius, 6)),
                format!(
                    "Central mass: {:.3e} kg ({:.3e} M_sun)",
                    sys.inferred_mass,
                    sys.solar_masses(&self.consts)
                ),
                format!("Schwarzschild radius: {} m | {}", dual(sys.schwarzschild_radius, 3), sys.category),
            ],
            Err(e) => vec![format!("{}: {e}", scenario.name)],
        }
    }

    fn scale_selected(&mut self, factor: f64) {
        if let Some(i) = self.selected.selected() {
            if let Some(s) = self.scenarios.get_mut(i) {
                s.reference_time_ratio *= factor;
            }
        }
    }

    fn systems(&self) -> Vec<OrbitalSystem> {
        self.scenarios
            .iter()
            .filter_map(|s| infer(s, &self.consts, self.reference_factor, self.orbit).ok())
            .collect()
    }
}

pub fn start(
    scenarios: Vec<Scenario>,
    consts: PhysicalConstants,
    orbit: OrbitAssumption,
    export_path: PathBuf,
) -> anyhow::Result<()> {
    let reference_factor = earth_sun_factor(&consts)?;
    let mut selected = ListState::default();
    if !scenarios.is_empty() {
        selected.select(Some(0));
    }
    let mut app = App {
        scenarios,
        consts,
        orbit,
        reference_factor,
        selected,
        status: "↑/↓ select  ←/→ scale ratio  e export  q quit".to_string(),
    };

    // Setup terminal
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    crossterm::terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, &export_path);

    crossterm::terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, export_path: &Path) -> anyhow::Result<()> {
    loop {
        let details = app.details();
        let status = app.status.clone();
        let items: Vec<ListItem> = app.scenarios.iter().map(|s| ListItem::new(s.name.clone())).collect();

        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints([
                    Constraint::Min(4),
                    Constraint::Length(details.len() as u16 + 2),
                    Constraint::Length(3),
                ])
                .split(f.area());

            let list = List::new(items)
                .block(Block::default().title("Lokas").borders(Borders::ALL))
                .highlight_style(Style::default().add_modifier(Modifier::BOLD))
                .highlight_symbol("> ");
            f.render_stateful_widget(list, chunks[0], &mut app.selected);

            let body = Paragraph::new(details.join("\n"))
                .block(Block::default().title("Central body").borders(Borders::ALL));
            f.render_widget(body, chunks[1]);

            f.render_widget(Paragraph::new(status).block(Block::default().borders(Borders::ALL)), chunks[2]);
        })?;

        // Input handling
        if event::poll(std::time::Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Down => app.selected.select_next(),
                    KeyCode::Up => app.selected.select_previous(),
                    KeyCode::Right => app.scale_selected(RATIO_STEP),
                    KeyCode::Left => app.scale_selected(1.0 / RATIO_STEP),
                    KeyCode::Char('e') => {
                        let systems = app.systems();
                        app.status = match export_csv(export_path, &systems, &app.consts) {
                            Ok(()) => format!("Exported to {}", export_path.display()),
                            Err(e) => format!("Export failed: {e:#}"),
                        };
                    }
                    KeyCode::Char('q') => break,
                    _ => {}
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::default_lokas;

    fn app() -> App {
        let consts = PhysicalConstants::default();
        let mut selected = ListState::default();
        selected.select(Some(2));
        App {
            scenarios: default_lokas(),
            consts,
            orbit: OrbitAssumption::Kepler,
            reference_factor: earth_sun_factor(&consts).unwrap(),
            selected,
            status: String::new(),
        }
    }

    #[test]
    fn details_describe_selected_scenario() {
        let details = app().details();
        assert_eq!(details.len(), 5);
        assert!(details[0].starts_with("Time ratio: 1 s on Deva-loka"));
        assert!(details[4].ends_with("Micro black hole"));
    }

    #[test]
    fn scaling_changes_only_the_selection() {
        let mut app = app();
        app.scale_selected(RATIO_STEP);
        assert!((app.scenarios[2].reference_time_ratio - 396.0).abs() < 1e-9);
        assert_eq!(app.scenarios[3].reference_time_ratio, 30.0);
    }

    #[test]
    fn ratio_below_unity_shows_error() {
        let mut app = app();
        app.scenarios[2].reference_time_ratio = 0.5;
        assert!(app.details()[0].contains("mass per radius must be non-negative"));
        assert_eq!(app.systems().len(), 3);
    }
}
