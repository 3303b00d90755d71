//! Terminal event loop wiring the sensor, engine, and renderer together
//! (impure shell).
//!
//! The loop is strictly event driven: read a key, map it through
//! [`KeyBindings`], feed the resulting sensor event to the engine, refresh
//! the sensor's candidate list from the new state, redraw. All reordering
//! semantics live in the pure core; this module only moves data between the
//! terminal and the engine.

use crate::config::KeyBindings;
use crate::engine::{Engine, EngineHooks};
use crate::model::{AppError, DropPreview, KeyAction, NodeId, Tree};
use crate::sensor::KeyboardSensor;
use crate::state::{CountingGroups, SensorEvent};
use crate::store;
use crate::view::{drop_targets, pickup_targets, render_editor, EditorStyles, SortableLayout};
use crossterm::{
    event::{self, Event, KeyEvent},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Groups created when a column is dropped on a gap get this id prefix.
/// Disjoint from the sample tree's `group-*` ids.
const SPLIT_GROUP_PREFIX: &str = "split";

/// Records which pieces of engine state changed during one event.
#[derive(Debug, Default)]
struct ChangeTracker {
    tree_changed: bool,
}

impl EngineHooks for ChangeTracker {
    fn tree_replaced(&mut self, tree: &Tree) {
        debug!(groups = tree.len(), "tree replaced");
        self.tree_changed = true;
    }

    fn active_changed(&mut self, active: Option<&NodeId>) {
        debug!(active = ?active.map(NodeId::as_str), "active changed");
    }

    fn preview_changed(&mut self, preview: Option<&DropPreview>) {
        debug!(?preview, "preview changed");
    }
}

/// Main editor application.
///
/// Generic over backend to support testing with TestBackend.
pub struct EditorApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    engine: Engine<CountingGroups>,
    sensor: KeyboardSensor,
    key_bindings: KeyBindings,
    styles: EditorStyles,
    /// File the tree was loaded from; `None` for the builtin sample.
    tree_path: Option<PathBuf>,
    autosave: bool,
    read_only: bool,
    help_visible: bool,
    /// Unsaved committed changes exist.
    dirty: bool,
    status: String,
}

impl EditorApp<CrosstermBackend<Stdout>> {
    /// Create and initialize the editor.
    ///
    /// Sets up the terminal in raw mode with alternate screen.
    pub fn new(
        tree: Tree,
        tree_path: Option<PathBuf>,
        key_bindings: KeyBindings,
        styles: EditorStyles,
        options: EditorOptions,
    ) -> Result<Self, AppError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::assemble(
            terminal,
            tree,
            tree_path,
            key_bindings,
            styles,
            options,
        ))
    }

    /// Run the main event loop. Returns when the user quits.
    pub fn run(&mut self) -> Result<(), AppError> {
        self.draw()?;
        loop {
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(_, _) => {
                    self.draw()?;
                }
                _ => {}
            }
        }
    }
}

impl<B> EditorApp<B>
where
    B: ratatui::backend::Backend,
{
    fn assemble(
        terminal: Terminal<B>,
        tree: Tree,
        tree_path: Option<PathBuf>,
        key_bindings: KeyBindings,
        styles: EditorStyles,
        options: EditorOptions,
    ) -> Self {
        let engine = Engine::new(tree, CountingGroups::new(SPLIT_GROUP_PREFIX));
        let mut sensor = KeyboardSensor::new();
        sensor.refresh(pickup_targets(&engine.state().tree));

        Self {
            terminal,
            engine,
            sensor,
            key_bindings,
            styles,
            tree_path,
            autosave: options.autosave,
            read_only: options.read_only,
            help_visible: false,
            dirty: false,
            status: String::new(),
        }
    }

    /// Handle a single keyboard event. Returns true if the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let action = match self.key_bindings.get(key) {
            Some(action) => action,
            None => return false,
        };

        // The help overlay captures everything except closing it or quitting.
        if self.help_visible {
            match action {
                KeyAction::Quit => return true,
                KeyAction::Help | KeyAction::CancelDrag => self.help_visible = false,
                _ => {}
            }
            return false;
        }

        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.help_visible = true,
            KeyAction::Save => self.save(),
            KeyAction::NextTarget => {
                let event = self.sensor.next();
                self.apply_optional(event);
            }
            KeyAction::PrevTarget => {
                let event = self.sensor.prev();
                self.apply_optional(event);
            }
            KeyAction::Activate => {
                let event = self.sensor.activate();
                self.apply_optional(event);
            }
            KeyAction::CancelDrag => {
                let event = self.sensor.cancel();
                self.apply_optional(event);
            }
        }
        false
    }

    fn apply_optional(&mut self, event: Option<SensorEvent>) {
        if let Some(event) = event {
            self.apply(event);
        }
    }

    /// Feed one sensor event through the engine and resync the sensor's
    /// candidates with the resulting state.
    fn apply(&mut self, event: SensorEvent) {
        let mut tracker = ChangeTracker::default();
        self.engine.apply(event, &mut tracker);

        if tracker.tree_changed {
            self.dirty = true;
            if self.autosave {
                self.save();
            }
        }

        let state = self.engine.state();
        let candidates = match &state.active_id {
            Some(active) => drop_targets(&state.tree, active),
            None => pickup_targets(&state.tree),
        };
        self.sensor.refresh(candidates);
    }

    fn save(&mut self) {
        if self.read_only {
            self.status = "read-only mode, not saving".to_string();
            return;
        }
        let Some(path) = self.tree_path.clone() else {
            self.status = "no tree file (started from sample)".to_string();
            return;
        };
        match store::save_tree(&path, &self.engine.state().tree) {
            Ok(()) => {
                self.dirty = false;
                self.status = format!("saved {}", path.display());
            }
            Err(err) => {
                warn!(%err, "save failed");
                self.status = format!("save failed: {err}");
            }
        }
    }

    /// Render the current frame.
    fn draw(&mut self) -> Result<(), AppError> {
        let layout = SortableLayout::compute(self.engine.state(), self.sensor.current());
        let status = if self.dirty {
            format!("{} [unsaved]", self.status)
        } else {
            self.status.clone()
        };
        let styles = self.styles;
        let help_visible = self.help_visible;
        self.terminal.draw(|frame| {
            render_editor(frame, &layout, &styles, &status, help_visible);
        })?;
        Ok(())
    }
}

/// Behavioral switches for the editor shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditorOptions {
    /// Save the tree after every committed drag.
    pub autosave: bool,
    /// Never write the tree back to disk.
    pub read_only: bool,
}

/// Initialize and run the editor, restoring the terminal even on error.
///
/// Logging must be initialized by the caller.
pub fn run_editor(
    tree: Tree,
    tree_path: Option<PathBuf>,
    key_bindings: KeyBindings,
    styles: EditorStyles,
    options: EditorOptions,
) -> Result<(), AppError> {
    info!(
        groups = tree.len(),
        columns = tree.column_count(),
        ?options,
        "starting editor"
    );
    let mut app = EditorApp::new(tree, tree_path, key_bindings, styles, options)?;
    let result = app.run();
    restore_terminal()?;
    result
}

/// Disable raw mode and leave the alternate screen.
fn restore_terminal() -> Result<(), AppError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
