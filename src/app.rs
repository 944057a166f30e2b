//! Application state and core logic

use crate::config::DashConfig;
use crate::menu::{
    ActionContext, ActionError, ActionId, ActionOutcome, ActionRegistry, Activation, Direction,
    NavigationController, OutputSink, MenuTree, Transition,
};
use crate::project;
use crate::prompt::{prompt_channel, PromptModal, PromptReceiver, Prompter};
use crate::state::{ActivePrompt, AppState, FocusChange, FocusManager, FocusRegion, UiArea};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// An action running on its own task
struct PendingAction {
    activation: Activation,
    action: ActionId,
    handle: JoinHandle<Result<ActionOutcome>>,
}

/// Main application struct
pub struct App {
    /// Display, input and modal state
    pub state: AppState,
    /// Header text
    pub title: String,
    /// Terminal size for hit-testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
    nav: NavigationController,
    focus: FocusManager,
    menu_enabled: bool,
    workdir: PathBuf,
    registry: Arc<ActionRegistry>,
    prompter: Prompter,
    prompts: PromptReceiver,
    output: OutputSink,
    output_rx: mpsc::UnboundedReceiver<String>,
    pending: Option<PendingAction>,
    /// First menu item on screen
    menu_offset: usize,
    quit: bool,
}

impl App {
    /// Create the dashboard for `workdir`, mounting the menu its contents call for
    pub fn new(config: &DashConfig, workdir: PathBuf) -> Result<Self> {
        let tree = project::menus::menu_for(&project::inspect(&workdir)?);
        let mut app = Self::with_menu(
            config.title(),
            workdir,
            Some(tree),
            project::actions::registry(),
        );
        app.nav.set_remember_selection(config.remember_selection());
        if let Some(path) = config.start_menu() {
            if !app.nav.jump_to(path) {
                tracing::warn!(path, "start menu not found, staying at the top level");
            }
        }
        Ok(app)
    }

    /// Create the dashboard with an explicit menu (or none) and action table
    pub fn with_menu(
        title: &str,
        workdir: PathBuf,
        tree: Option<MenuTree>,
        registry: ActionRegistry,
    ) -> Self {
        let menu_enabled = tree.is_some();
        let tree = tree.unwrap_or_else(|| MenuTree::new(title, Vec::new()));
        if let Err(err) = tree.validate() {
            tracing::warn!("menu `{}` is ambiguous: {err}", tree.title);
        }
        let (prompter, prompts) = prompt_channel();
        let (output, output_rx) = OutputSink::channel();
        Self {
            state: AppState::default(),
            title: title.to_string(),
            terminal_size: None,
            nav: NavigationController::new(tree),
            focus: FocusManager::new(menu_enabled),
            menu_enabled,
            workdir,
            registry: Arc::new(registry),
            prompter,
            prompts,
            output,
            output_rx,
            pending: None,
            menu_offset: 0,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether an action is still running
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn menu_enabled(&self) -> bool {
        self.menu_enabled
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.nav
    }

    pub fn menu_offset(&self) -> usize {
        self.menu_offset
    }

    pub fn focus(&self) -> &FocusManager {
        &self.focus
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        // An open dialog owns every other key
        if let Some(prompt) = self.state.prompt.as_mut() {
            if let Some(response) = prompt.modal.handle_key(key) {
                if let Some(prompt) = self.state.prompt.take() {
                    tracing::debug!(?response, "prompt resolved");
                    prompt.resolve(response);
                }
            }
            return;
        }

        if self.is_busy() {
            return;
        }

        if key.code == KeyCode::Tab {
            let change = self.focus.tab_next();
            self.apply_focus_change(change);
            return;
        }

        match self.focus.focused() {
            FocusRegion::Navigation => self.handle_navigation_key(key),
            FocusRegion::Input => self.handle_input_key(key),
        }
    }

    fn handle_navigation_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.quit = true,
            KeyCode::Up => {
                self.nav.move_selection(Direction::Up);
            }
            KeyCode::Down => {
                self.nav.move_selection(Direction::Down);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_selected(),
            KeyCode::Backspace => {
                self.nav.back();
            }
            _ => {}
        }
        self.follow_selection();
    }

    /// Keep the selected menu row inside the visible part of the list
    fn follow_selection(&mut self) {
        let Some((height, _)) = self.terminal_size else {
            return;
        };
        self.menu_offset = UiArea::menu_scroll_offset(
            self.menu_offset,
            self.nav.selected_index(),
            UiArea::menu_visible_rows(height),
        );
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.state.commit_input(),
            KeyCode::Backspace => {
                self.state.input.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.input.push(c);
            }
            _ => {}
        }
    }

    /// Handle a mouse event: left clicks focus a pane and pick menu rows
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }
        if self.state.has_prompt() || self.is_busy() {
            return;
        }
        let Some((height, width)) = self.terminal_size else {
            return;
        };
        // the last frame may have been drawn at a different size
        self.follow_selection();
        match UiArea::at(mouse.column, mouse.row, width, height, self.menu_enabled) {
            Some(UiArea::Navigation) => {
                if let Some(change) = self.focus.focus(FocusRegion::Navigation) {
                    self.apply_focus_change(change);
                }
                if let Some(index) = UiArea::menu_item_at(mouse.row, height, self.menu_offset) {
                    self.nav.select(index);
                }
            }
            Some(UiArea::Input) => {
                if let Some(change) = self.focus.focus(FocusRegion::Input) {
                    self.apply_focus_change(change);
                }
            }
            _ => {}
        }
    }

    fn apply_focus_change(&mut self, change: FocusChange) {
        tracing::debug!(from = ?change.from, to = ?change.to, "focus changed");
        if change.discard_input {
            self.state.clear_input();
        }
    }

    /// Activate the selected item: descend right away, or run its action first
    fn activate_selected(&mut self) {
        let Some(activation) = self.nav.begin_activation() else {
            return;
        };
        let position = self.nav.selected_index() + 1;
        let count = self.nav.sibling_count();
        tracing::debug!(
            item = %activation.item_id,
            "Menu Item: {position}/{count}, {}",
            activation.label
        );
        match activation.action.clone() {
            None => {
                let transition = self.nav.finish_activation(activation, ActionOutcome::Stay);
                self.after_transition(transition);
            }
            Some(action) => self.spawn_action(activation, action),
        }
    }

    fn spawn_action(&mut self, activation: Activation, action: ActionId) {
        if !self.registry.contains(&action) {
            let err = ActionError::Unknown(action);
            tracing::error!(item = %activation.item_id, "{err}");
            self.state.push_line(format!("Action failed: {err}"));
            return;
        }
        let ctx = ActionContext {
            item_id: activation.item_id.clone(),
            label: activation.label.clone(),
            workdir: self.workdir.clone(),
            prompter: self.prompter.clone(),
            output: self.output.clone(),
        };
        let registry = Arc::clone(&self.registry);
        let id = action.clone();
        let handle = tokio::spawn(async move { registry.dispatch(&id, ctx).await });
        self.state.status_message = Some(format!("Running {}", activation.label));
        self.pending = Some(PendingAction {
            activation,
            action,
            handle,
        });
    }

    /// Per-loop housekeeping: collect output, open waiting prompts and apply
    /// the outcome of a finished action
    pub async fn tick(&mut self) {
        self.drain_output();

        if !self.state.has_prompt() {
            if let Some(exchange) = self.prompts.try_next() {
                let modal = PromptModal::open(exchange.request);
                self.state.prompt = Some(ActivePrompt::new(modal, exchange.reply));
            }
        }

        let finished = self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.handle.is_finished());
        if !finished {
            return;
        }
        let Some(pending) = self.pending.take() else {
            return;
        };
        let result = pending.handle.await;
        self.drain_output();
        self.state.status_message = None;
        match result {
            Ok(Ok(outcome)) => self.apply_outcome(pending.activation, outcome),
            Ok(Err(err)) => {
                tracing::error!(action = %pending.action, "action failed: {err:#}");
                self.state.push_line(format!("Action failed: {err}"));
            }
            Err(err) => {
                tracing::error!(action = %pending.action, "action task died: {err}");
                self.state
                    .push_line(format!("Action {} stopped unexpectedly", pending.action));
            }
        }
    }

    fn drain_output(&mut self) {
        while let Ok(line) = self.output_rx.try_recv() {
            self.state.push_line(line);
        }
    }

    fn apply_outcome(&mut self, activation: Activation, outcome: ActionOutcome) {
        let (workdir, outcome) = outcome.into_parts();
        if let Some(workdir) = workdir {
            tracing::info!(workdir = %workdir.display(), "changed working directory");
            self.workdir = workdir;
        }
        let transition = self.nav.finish_activation(activation, outcome);
        self.after_transition(transition);
    }

    fn after_transition(&mut self, transition: Transition) {
        if transition == Transition::Mounted {
            if let Err(err) = self.nav.tree().validate() {
                tracing::warn!("menu `{}` is ambiguous: {err}", self.nav.tree().title);
            }
            self.menu_enabled = true;
            self.focus.set_menu_enabled(true);
            self.state.clear_input();
        }
        self.follow_selection();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{MenuItem, MockActionHandler};
    use crate::prompt::PromptResponse;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn click(app: &mut App, column: u16, row: u16) {
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    fn tree() -> MenuTree {
        MenuTree::new(
            "Main",
            vec![
                MenuItem::submenu(
                    "settings",
                    "Settings",
                    vec![
                        MenuItem::leaf("theme", "Theme", "settings.theme"),
                        MenuItem::leaf("keys", "Keys", "settings.keys"),
                    ],
                )
                .with_title("All settings"),
                MenuItem::leaf("greet", "Greet", "greet"),
                MenuItem::leaf("swap", "Swap", "swap"),
                MenuItem::leaf("broken", "Broken", "broken"),
            ],
        )
    }

    /// Asks for a name and prints a greeting
    struct Greet;

    #[async_trait]
    impl crate::menu::ActionHandler for Greet {
        async fn run(&self, ctx: ActionContext) -> Result<ActionOutcome> {
            match ctx.prompter.text("Your name?", Some("A")).await? {
                Some(name) => ctx.output.line(format!("Hello, {name}")),
                None => ctx.output.line("No greeting"),
            }
            Ok(ActionOutcome::Stay)
        }
    }

    fn registry() -> ActionRegistry {
        let mut registry = ActionRegistry::new();
        registry.register("greet", Greet);

        let mut swap = MockActionHandler::new();
        swap.expect_run().returning(|_| {
            Ok(ActionOutcome::Mount(MenuTree::new(
                "Other",
                vec![MenuItem::leaf("x", "X", "x")],
            )))
        });
        registry.register("swap", swap);

        let mut broken = MockActionHandler::new();
        broken
            .expect_run()
            .returning(|_| Err(anyhow::anyhow!("disk on fire")));
        registry.register("broken", broken);
        registry
    }

    fn app() -> App {
        let mut app = App::with_menu("Dash", PathBuf::from("/tmp"), Some(tree()), registry());
        app.terminal_size = Some((24, 80));
        app
    }

    /// Tick until `done` holds, letting spawned actions make progress
    async fn settle(app: &mut App, done: impl Fn(&App) -> bool) {
        for _ in 0..1000 {
            app.tick().await;
            if done(app) {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("app never settled");
    }

    #[tokio::test]
    async fn test_enter_descends_and_backspace_returns() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        assert!(!app.is_busy());
        assert_eq!(app.navigation().path(), &["settings".to_string()]);
        assert_eq!(app.navigation().current_title(), "All settings");

        app.handle_key(key(KeyCode::Backspace));
        assert!(app.navigation().path().is_empty());
        assert_eq!(app.navigation().current_title(), "Main");
    }

    #[tokio::test]
    async fn test_arrow_keys_wrap() {
        let mut app = app();
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.navigation().selected_index(), 3);
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.navigation().selected_index(), 0);
    }

    #[test]
    fn test_quit_keys_in_navigation() {
        for code in [KeyCode::Esc, KeyCode::Char('q')] {
            let mut app = app();
            app.handle_key(key(code));
            assert!(app.should_quit());
        }
    }

    #[test]
    fn test_q_types_in_input_pane() {
        let mut app = app();
        app.handle_key(key(KeyCode::Tab));
        assert!(app.focus().is_focused(FocusRegion::Input));
        type_text(&mut app, "quit");
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.should_quit());
        assert_eq!(app.state.input, "quit");

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state.display, vec!["quit".to_string()]);
        assert!(app.state.input.is_empty());
    }

    #[test]
    fn test_tab_discards_pending_input() {
        let mut app = app();
        app.handle_key(key(KeyCode::Tab));
        type_text(&mut app, "draft");
        app.handle_key(key(KeyCode::Tab));
        assert!(app.focus().is_focused(FocusRegion::Navigation));
        assert!(app.state.input.is_empty());
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut app = app();
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_prompt_suspends_action_until_answered() {
        let mut app = app();
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert!(app.is_busy());

        settle(&mut app, |app| app.state.has_prompt()).await;
        assert_eq!(
            app.state.prompt.as_ref().and_then(|p| p.modal.text_value()),
            Some("A")
        );

        // navigation keys go to the dialog while it is open
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.navigation().selected_index(), 1);
        type_text(&mut app, "da");
        app.handle_key(key(KeyCode::Enter));
        assert!(!app.state.has_prompt());

        settle(&mut app, |app| !app.is_busy()).await;
        assert_eq!(app.state.display, vec!["Hello, Ada".to_string()]);
        assert_eq!(app.navigation().path(), &[] as &[String]);
    }

    #[tokio::test]
    async fn test_escape_cancels_prompt_without_quitting() {
        let mut app = app();
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        settle(&mut app, |app| app.state.has_prompt()).await;

        app.handle_key(key(KeyCode::Esc));
        assert!(!app.should_quit());
        settle(&mut app, |app| !app.is_busy()).await;
        assert_eq!(app.state.display, vec!["No greeting".to_string()]);
    }

    #[tokio::test]
    async fn test_keys_ignored_while_action_runs() {
        let mut app = app();
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('q')));
        app.handle_key(key(KeyCode::Down));
        assert!(!app.should_quit());
        assert_eq!(app.navigation().selected_index(), 1);
    }

    #[tokio::test]
    async fn test_leaf_action_runs_once_and_keeps_position() {
        let mut greet = MockActionHandler::new();
        greet
            .expect_run()
            .withf(|ctx| ctx.item_id == "greet" && ctx.label == "Greet")
            .times(1)
            .returning(|_| Ok(ActionOutcome::Stay));
        let mut registry = ActionRegistry::new();
        registry.register("greet", greet);
        let mut app = App::with_menu("Dash", PathBuf::from("/tmp"), Some(tree()), registry);

        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert!(app.is_busy());
        settle(&mut app, |app| !app.is_busy()).await;

        assert!(app.navigation().path().is_empty());
        assert_eq!(app.navigation().selected_index(), 1);
        assert_eq!(app.navigation().current_title(), "Main");
        assert!(app.state.display.is_empty());
    }

    #[tokio::test]
    async fn test_mount_outcome_resets_navigation_and_focus() {
        let mut app = app();
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        settle(&mut app, |app| !app.is_busy()).await;

        assert_eq!(app.navigation().tree().title, "Other");
        assert_eq!(app.navigation().selected_index(), 0);
        assert!(app.focus().is_focused(FocusRegion::Navigation));
    }

    #[tokio::test]
    async fn test_failed_action_is_reported() {
        let mut app = app();
        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Enter));
        settle(&mut app, |app| !app.is_busy()).await;
        assert_eq!(app.state.display, vec!["Action failed: disk on fire".to_string()]);
        assert_eq!(app.navigation().tree().title, "Main");
    }

    #[tokio::test]
    async fn test_unregistered_action_is_reported() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Enter));
        settle(&mut app, |app| !app.is_busy()).await;
        assert!(!app.is_busy());
        assert_eq!(
            app.state.display,
            vec!["Action failed: no handler registered for action `settings.theme`".to_string()]
        );
    }

    /// Log sink shared with a test subscriber
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_activation_traces_position_and_label() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let mut app = app();
        tracing::subscriber::with_default(subscriber, || {
            app.handle_key(key(KeyCode::Enter));
            app.handle_key(key(KeyCode::Down));
            app.handle_key(key(KeyCode::Enter));
        });

        let text = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(text.contains("Menu Item: 1/4, Settings"), "{text}");
        assert!(text.contains("Menu Item: 2/2, Keys"), "{text}");
    }

    #[test]
    fn test_click_focuses_panes_and_selects_rows() {
        let mut app = app();
        click(&mut app, 30, 21);
        assert!(app.focus().is_focused(FocusRegion::Input));
        type_text(&mut app, "abc");

        // first menu row sits below the header, border, title and spacer
        click(&mut app, 2, 6);
        assert!(app.focus().is_focused(FocusRegion::Navigation));
        assert_eq!(app.navigation().selected_index(), 2);
        assert!(app.state.input.is_empty());

        click(&mut app, 2, 15);
        assert_eq!(app.navigation().selected_index(), 2);
    }

    fn long_menu() -> MenuTree {
        MenuTree::new(
            "Long",
            (0..30)
                .map(|i| MenuItem::leaf(&format!("item{i:02}"), &format!("Item{i:02}"), "noop"))
                .collect(),
        )
    }

    #[test]
    fn test_click_on_scrolled_menu_picks_visible_item() {
        let mut app = App::with_menu("Dash", PathBuf::from("/tmp"), Some(long_menu()), registry());
        app.terminal_size = Some((24, 80));
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.navigation().selected_index(), 29);

        // the list shows Item15..Item29, so the top row is Item15
        click(&mut app, 2, 4);
        assert_eq!(app.navigation().selected_index(), 15);

        assert_eq!(app.menu_offset(), 15);

        // bottom border of the pane selects nothing
        click(&mut app, 2, 19);
        assert_eq!(app.navigation().selected_index(), 15);
        click(&mut app, 2, 18);
        assert_eq!(app.navigation().selected_index(), 29);
        click(&mut app, 2, 17);
        assert_eq!(app.navigation().selected_index(), 28);

        // wrapping to the top scrolls back
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.navigation().selected_index(), 0);
        assert_eq!(app.menu_offset(), 0);
        click(&mut app, 2, 4);
        assert_eq!(app.navigation().selected_index(), 0);
    }

    #[test]
    fn test_without_menu_input_is_the_only_member() {
        let mut app = App::with_menu("Dash", PathBuf::from("/tmp"), None, ActionRegistry::new());
        assert!(!app.menu_enabled());
        assert!(app.focus().is_focused(FocusRegion::Input));
        app.handle_key(key(KeyCode::Tab));
        assert!(app.focus().is_focused(FocusRegion::Input));
        type_text(&mut app, "q");
        assert!(!app.should_quit());
    }

    #[tokio::test]
    async fn test_new_mounts_menu_for_workdir() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(&DashConfig::default(), dir.path().to_path_buf()).unwrap();
        assert_eq!(app.navigation().tree().title, project::menus::READY_MENU);
        assert_eq!(app.title, "Project dashboard");
        assert_eq!(app.workdir(), dir.path());
    }

    #[tokio::test]
    async fn test_new_opens_configured_start_menu() {
        let dir = tempfile::tempdir().unwrap();
        let meta = project::ProjectMeta {
            name: "acme".to_string(),
            description: "Widgets".to_string(),
            version: "1.0.0".to_string(),
            features: vec!["login".to_string()],
            tests: project::TestsLayout::RootDir,
        };
        project::write_meta(dir.path(), &meta).unwrap();

        let config = DashConfig {
            start_menu: Some("features".to_string()),
            ..Default::default()
        };
        let app = App::new(&config, dir.path().to_path_buf()).unwrap();
        assert_eq!(app.navigation().path(), &["features".to_string()]);
        assert_eq!(app.navigation().current_title(), "acme features");

        // an unknown path leaves the top level mounted
        let config = DashConfig {
            start_menu: Some("features.login".to_string()),
            ..Default::default()
        };
        let app = App::new(&config, dir.path().to_path_buf()).unwrap();
        assert!(app.navigation().path().is_empty());
        assert_eq!(app.navigation().tree().title, project::menus::PROJECT_MENU);
    }

    #[tokio::test]
    async fn test_create_project_through_the_dashboard() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(&DashConfig::default(), dir.path().to_path_buf()).unwrap();
        app.handle_key(key(KeyCode::Enter));

        let answers = ["acme", "Widgets", "1.0.0", "login"];
        for answer in answers {
            settle(&mut app, |app| app.state.has_prompt()).await;
            // clear the suggested value before typing
            for _ in 0..64 {
                app.handle_key(key(KeyCode::Backspace));
            }
            type_text(&mut app, answer);
            app.handle_key(key(KeyCode::Enter));
        }
        settle(&mut app, |app| app.state.has_prompt()).await;
        app.handle_key(key(KeyCode::Char('3')));

        settle(&mut app, |app| !app.is_busy()).await;
        assert_eq!(app.navigation().tree().title, project::menus::PROJECT_MENU);
        assert_eq!(app.state.display, vec!["Created project acme".to_string()]);
        let meta = project::load_meta(dir.path()).unwrap();
        assert_eq!(meta.tests, project::TestsLayout::RootDir);
        assert_eq!(meta.features, vec!["login".to_string()]);
    }

    #[test]
    fn test_prompt_response_reaches_reply_channel() {
        let (tx, mut rx) = tokio::sync::oneshot::channel();
        let mut app = app();
        app.state.prompt = Some(ActivePrompt::new(
            PromptModal::open(crate::prompt::PromptRequest::Text {
                prompt: "?".to_string(),
                initial_value: None,
            }),
            tx,
        ));
        type_text(&mut app, "ok");
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(rx.try_recv().unwrap(), PromptResponse::Text("ok".to_string()));
    }
}
