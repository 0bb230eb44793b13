//! Application loop: owns the game state, feeds inputs to the engine, and
//! redraws after every transition.

use std::path::PathBuf;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::DefaultTerminal;
use tilevale_core::{
    Action, ActionResult, AdvanceAction, CloseAction, GameEngine, GameState, GiveItemAction,
    ItemId, MoveAction, TakeItemAction,
};

use crate::config::CliConfig;
use crate::input::{self, DialogueInput, ExplorationInput};
use crate::presentation::ui;

/// Which inventory the dialogue cursor is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    Player,
    Npc,
}

/// Item cursor for the dialogue modal. Host-side UI state only; the engine
/// never sees it.
#[derive(Clone, Copy, Debug)]
pub struct Selection {
    pub column: Column,
    pub index: usize,
}

impl Selection {
    fn reset() -> Self {
        Self {
            column: Column::Player,
            index: 0,
        }
    }
}

pub struct App {
    state: GameState,
    config: CliConfig,
    selection: Selection,
    status: Option<String>,
}

impl App {
    pub fn new(state: GameState, config: CliConfig) -> Self {
        Self {
            state,
            config,
            selection: Selection::reset(),
            status: None,
        }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        loop {
            terminal.draw(|frame| {
                ui::render(
                    frame,
                    &self.state,
                    &self.selection,
                    self.config.scale,
                    self.status.as_deref(),
                )
            })?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if self.handle_key(key)? {
                return Ok(());
            }
        }
    }

    /// Handles one key press; returns true when the app should exit.
    fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        if self.state.active_dialogue.is_some() {
            match input::dialogue_input(key) {
                Some(DialogueInput::NextLine) => self.execute(AdvanceAction.into())?,
                Some(DialogueInput::CloseDialogue) => self.execute(CloseAction.into())?,
                Some(DialogueInput::SelectPrevious) => self.move_cursor(-1),
                Some(DialogueInput::SelectNext) => self.move_cursor(1),
                Some(DialogueInput::SwitchColumn) => self.switch_column(),
                Some(DialogueInput::Transfer) => self.transfer_selected()?,
                Some(DialogueInput::DumpState) => self.dump_state(),
                Some(DialogueInput::Quit) => return Ok(true),
                None => {}
            }
        } else {
            match input::exploration_input(key) {
                Some(ExplorationInput::Move(direction)) => {
                    self.execute(MoveAction::new(direction).into())?
                }
                Some(ExplorationInput::DumpState) => self.dump_state(),
                Some(ExplorationInput::Quit) => return Ok(true),
                None => {}
            }
        }
        Ok(false)
    }

    /// Feeds one action to the engine and records the outcome for the footer.
    fn execute(&mut self, action: Action) -> Result<()> {
        let mut engine = GameEngine::new(&mut self.state);
        let result = engine
            .execute(&action)
            .with_context(|| format!("engine failed on {}", action.as_snake_case()))?;
        tracing::debug!(action = action.as_snake_case(), ?result, "executed action");

        if matches!(result, ActionResult::DialogueOpened { .. }) {
            self.selection = Selection::reset();
        }
        self.status = status_line(&result);
        self.clamp_selection();
        Ok(())
    }

    fn transfer_selected(&mut self) -> Result<()> {
        let Some(item) = self.selected_item() else {
            return Ok(());
        };
        let action = match self.selection.column {
            Column::Player => Action::Give(GiveItemAction { item }),
            Column::Npc => Action::Take(TakeItemAction { item }),
        };
        self.execute(action)
    }

    /// The item id under the cursor, if the selected inventory has one.
    fn selected_item(&self) -> Option<ItemId> {
        let items = self.column_items(self.selection.column)?;
        items
            .get(self.selection.index)
            .map(|item| item.id.clone())
    }

    fn column_items(&self, column: Column) -> Option<&[tilevale_core::Item]> {
        match column {
            Column::Player => Some(self.state.player.inventory.items()),
            Column::Npc => {
                let dialogue = self.state.active_dialogue.as_ref()?;
                Some(self.state.npc(&dialogue.npc)?.inventory.items())
            }
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self
            .column_items(self.selection.column)
            .map(<[_]>::len)
            .unwrap_or(0);
        if len == 0 {
            self.selection.index = 0;
            return;
        }
        let index = self.selection.index as isize + delta;
        self.selection.index = index.clamp(0, len as isize - 1) as usize;
    }

    fn switch_column(&mut self) {
        self.selection.column = match self.selection.column {
            Column::Player => Column::Npc,
            Column::Npc => Column::Player,
        };
        self.clamp_selection();
    }

    /// Keeps the cursor inside the (possibly shrunk) selected inventory.
    fn clamp_selection(&mut self) {
        let len = self
            .column_items(self.selection.column)
            .map(<[_]>::len)
            .unwrap_or(0);
        self.selection.index = self.selection.index.min(len.saturating_sub(1));
    }

    /// Writes the current state as JSON next to the logs (debugging aid; the
    /// engine defines no canonical encoding and never reads this back).
    fn dump_state(&mut self) {
        match self.try_dump_state() {
            Ok(path) => {
                tracing::info!(path = %path.display(), "state dumped");
                self.status = Some(format!("State dumped to {}", path.display()));
            }
            Err(error) => {
                tracing::warn!(%error, "state dump failed");
                self.status = Some(format!("State dump failed: {error}"));
            }
        }
    }

    fn try_dump_state(&self) -> Result<PathBuf> {
        let path = self.config.log_dir.join("state-dump.json");
        let json = serde_json::to_string_pretty(&self.state)?;
        std::fs::write(&path, json)?;
        Ok(path)
    }
}

fn status_line(result: &ActionResult) -> Option<String> {
    match result {
        ActionResult::Moved { .. }
        | ActionResult::DialogueAdvanced { .. }
        | ActionResult::DialogueClosed => None,
        ActionResult::DialogueOpened { npc } => Some(format!("Talking to {npc}")),
        ActionResult::ItemGiven { item } => Some(format!("Gave {item} away")),
        ActionResult::ItemTaken { item } => Some(format!("Took {item}")),
        ActionResult::Ignored(reason) => Some(reason.as_str().to_string()),
    }
}
