//! Board state and command dispatch.
//!
//! The board owns the working set (the last fetched roster), the view mode,
//! and the status line. Every control on the surface resolves to a
//! [`Command`], and [`App::dispatch`] is the single consumer: network calls,
//! mode transitions, and the mutation → full-refresh invariant all live in
//! one match.

use crossterm::event::KeyCode;

use pawdeck_client::{Roster, RosterBackend};
use pawdeck_types::{Player, PlayerDraft, PlayerId};

/// Display mode of the board surface.
pub enum Mode {
    /// All cards visible.
    Listing,
    /// Cards hidden (not discarded); one detail panel shown.
    Detail(Player),
    /// Entry form open. Cards stay visible behind the popup.
    Form(PlayerForm),
}

/// Typed commands emitted by the board's controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Refresh,
    SelectNext,
    SelectPrevious,
    ViewDetails(PlayerId),
    CloseDetails,
    Remove(PlayerId),
    OpenForm,
    Submit,
    Cancel,
    Quit,
}

/// State of the entry form. One instance exists at most; the submit guard
/// arms on first real submission and holds for the instance's lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerForm {
    pub name: String,
    pub breed: String,
    pub status: String,
    pub image_url: String,
    pub field_index: usize,
    pub submitted: bool,
    pub error: Option<String>,
}

impl PlayerForm {
    pub const FIELD_COUNT: usize = 4;

    pub fn labels() -> [&'static str; Self::FIELD_COUNT] {
        ["Name", "Breed", "Status", "Photo URL"]
    }

    pub fn field(&self, index: usize) -> &str {
        match index {
            0 => &self.name,
            1 => &self.breed,
            2 => &self.status,
            _ => &self.image_url,
        }
    }

    fn active_value_mut(&mut self) -> &mut String {
        match self.field_index {
            0 => &mut self.name,
            1 => &mut self.breed,
            2 => &mut self.status,
            _ => &mut self.image_url,
        }
    }

    pub fn next_field(&mut self) {
        self.field_index = (self.field_index + 1) % Self::FIELD_COUNT;
    }

    pub fn previous_field(&mut self) {
        self.field_index = self
            .field_index
            .checked_sub(1)
            .unwrap_or(Self::FIELD_COUNT - 1);
    }

    pub fn insert_char(&mut self, c: char) {
        self.active_value_mut().push(c);
        self.error = None;
    }

    pub fn backspace(&mut self) {
        self.active_value_mut().pop();
    }

    pub fn draft(&self) -> PlayerDraft {
        PlayerDraft {
            name: self.name.trim().to_string(),
            breed: self.breed.trim().to_string(),
            status: self.status.trim().to_string(),
            image_url: self.image_url.trim().to_string(),
        }
    }
}

pub struct App<B: RosterBackend> {
    roster: Roster<B>,
    /// Working set from the freshest successful list fetch.
    pub players: Vec<Player>,
    pub selected: usize,
    pub mode: Mode,
    pub status: String,
    pub should_quit: bool,
}

impl<B: RosterBackend> App<B> {
    pub fn new(roster: Roster<B>) -> Self {
        let mut app = Self {
            roster,
            players: Vec::new(),
            selected: 0,
            mode: Mode::Listing,
            status: String::new(),
            should_quit: false,
        };
        app.refresh();
        app
    }

    /// Discard the working set and re-fetch in full. On failure the current
    /// view is kept and only the status line changes.
    fn refresh(&mut self) {
        match self.roster.list_all() {
            Some(players) => {
                self.status = format!("{} player(s) on the roster", players.len());
                self.players = players;
                if self.selected >= self.players.len() {
                    self.selected = self.players.len().saturating_sub(1);
                }
            }
            None => {
                self.status = "Roster unavailable; showing the last loaded view".to_string();
            }
        }
    }

    pub fn selected_id(&self) -> Option<PlayerId> {
        self.players.get(self.selected).map(|p| p.id)
    }

    /// Map a key press to a control command for the current mode. Form text
    /// editing is not a command; see [`App::handle_form_edit`].
    pub fn command_for_key(&self, code: KeyCode) -> Option<Command> {
        match &self.mode {
            Mode::Listing => match code {
                KeyCode::Char('q') => Some(Command::Quit),
                KeyCode::Char('r') => Some(Command::Refresh),
                KeyCode::Char('a') => Some(Command::OpenForm),
                KeyCode::Enter | KeyCode::Char('d') => self.selected_id().map(Command::ViewDetails),
                KeyCode::Char('x') | KeyCode::Delete => self.selected_id().map(Command::Remove),
                KeyCode::Down | KeyCode::Char('j') => Some(Command::SelectNext),
                KeyCode::Up | KeyCode::Char('k') => Some(Command::SelectPrevious),
                _ => None,
            },
            Mode::Detail(_) => match code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('c') => Some(Command::CloseDetails),
                KeyCode::Char('q') => Some(Command::Quit),
                _ => None,
            },
            Mode::Form(_) => match code {
                KeyCode::Enter => Some(Command::Submit),
                KeyCode::Esc => Some(Command::Cancel),
                _ => None,
            },
        }
    }

    /// Text editing inside the form; printable keys must insert, never
    /// trigger board commands.
    pub fn handle_form_edit(&mut self, code: KeyCode) {
        let form = match &mut self.mode {
            Mode::Form(form) => form,
            _ => return,
        };

        match code {
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.previous_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) => form.insert_char(c),
            _ => {}
        }
    }

    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::Quit => self.should_quit = true,

            Command::Refresh => self.refresh(),

            Command::SelectNext => {
                if !self.players.is_empty() {
                    self.selected = (self.selected + 1).min(self.players.len() - 1);
                }
            }

            Command::SelectPrevious => {
                self.selected = self.selected.saturating_sub(1);
            }

            Command::ViewDetails(id) => {
                if !matches!(self.mode, Mode::Listing) {
                    return;
                }
                match self.roster.fetch_one(id) {
                    Some(player) => {
                        self.status = format!("Viewing {}", player.name);
                        self.mode = Mode::Detail(player);
                    }
                    None => {
                        self.status = format!("Could not load player #{}", id);
                    }
                }
            }

            Command::CloseDetails => {
                if matches!(self.mode, Mode::Detail(_)) {
                    self.mode = Mode::Listing;
                    // Closing re-fetches so the restored cards reflect any
                    // mutation that happened while the panel was open.
                    self.refresh();
                }
            }

            Command::Remove(id) => {
                if self.roster.remove(id) {
                    self.mode = Mode::Listing;
                    self.refresh();
                    self.status = format!("Removed player #{}", id);
                } else {
                    self.status = format!("Could not remove player #{}", id);
                }
            }

            Command::OpenForm => {
                // Single-instance: a no-op while a form is already open.
                if matches!(self.mode, Mode::Listing) {
                    self.mode = Mode::Form(PlayerForm::default());
                }
            }

            Command::Submit => {
                let form = match &mut self.mode {
                    Mode::Form(form) => form,
                    _ => return,
                };
                if form.submitted {
                    return;
                }

                let draft = form.draft();
                if !draft.is_complete() {
                    form.error = Some("All four fields are required".to_string());
                    return;
                }
                form.submitted = true;

                let created = self.roster.create(&draft);
                self.mode = Mode::Listing;
                if created {
                    self.refresh();
                    self.status = format!("Added {} to the roster", draft.name);
                } else {
                    self.status = format!("Could not add {}", draft.name);
                }
            }

            Command::Cancel => {
                if matches!(self.mode, Mode::Form(_)) {
                    self.mode = Mode::Listing;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawdeck_client::{Error, FetchOutcome, MemoryRoster};
    use std::cell::Cell;
    use std::rc::Rc;

    fn player(id: u64, name: &str) -> Player {
        Player {
            id: PlayerId::new(id),
            name: name.to_string(),
            breed: "Corgi".to_string(),
            status: "field".to_string(),
            image_url: format!("http://img/{}.png", name),
        }
    }

    fn app_with(players: Vec<Player>) -> App<MemoryRoster> {
        App::new(Roster::new(MemoryRoster::with_players(players)))
    }

    fn fill_form(app: &mut App<MemoryRoster>) {
        if let Mode::Form(form) = &mut app.mode {
            form.name = "Rex".to_string();
            form.breed = "Lab".to_string();
            form.status = "Available".to_string();
            form.image_url = "http://x/y.png".to_string();
        } else {
            panic!("no form open");
        }
    }

    /// Backend that can fail on demand and counts create calls through a
    /// handle the test keeps.
    struct FlakyRoster {
        players: Vec<Player>,
        fail_listing: bool,
        create_calls: Rc<Cell<usize>>,
    }

    impl FlakyRoster {
        fn new(players: Vec<Player>) -> (Self, Rc<Cell<usize>>) {
            let create_calls = Rc::new(Cell::new(0));
            (
                Self {
                    players,
                    fail_listing: false,
                    create_calls: create_calls.clone(),
                },
                create_calls,
            )
        }
    }

    impl RosterBackend for FlakyRoster {
        fn list_all(&mut self) -> pawdeck_client::Result<Vec<Player>> {
            if self.fail_listing {
                return Err(Error::Status {
                    op: "list",
                    status: 500,
                });
            }
            Ok(self.players.clone())
        }

        fn fetch_one(&mut self, id: PlayerId) -> pawdeck_client::Result<FetchOutcome> {
            Ok(match self.players.iter().find(|p| p.id == id) {
                Some(p) => FetchOutcome::Found(p.clone()),
                None => FetchOutcome::NotFound,
            })
        }

        fn create(&mut self, draft: &PlayerDraft) -> pawdeck_client::Result<()> {
            self.create_calls.set(self.create_calls.get() + 1);
            self.players.push(Player {
                id: PlayerId::new(100 + self.players.len() as u64),
                name: draft.name.clone(),
                breed: draft.breed.clone(),
                status: draft.status.clone(),
                image_url: draft.image_url.clone(),
            });
            Ok(())
        }

        fn remove(&mut self, id: PlayerId) -> pawdeck_client::Result<()> {
            self.players.retain(|p| p.id != id);
            Ok(())
        }
    }

    #[test]
    fn startup_loads_the_working_set() {
        let app = app_with(vec![player(1, "Maple"), player(2, "Ziggy")]);
        assert_eq!(app.players.len(), 2);
        assert!(matches!(app.mode, Mode::Listing));
    }

    #[test]
    fn remove_then_refresh_drops_the_card() {
        let mut app = app_with(vec![player(1, "Maple"), player(2, "Ziggy")]);

        app.dispatch(Command::Remove(PlayerId::new(1)));

        assert_eq!(app.players.len(), 1);
        assert!(app.players.iter().all(|p| p.id != PlayerId::new(1)));
    }

    #[test]
    fn submit_then_refresh_adds_exactly_one_card() {
        let mut app = app_with(vec![player(1, "Maple")]);

        app.dispatch(Command::OpenForm);
        fill_form(&mut app);
        app.dispatch(Command::Submit);

        assert!(matches!(app.mode, Mode::Listing));
        assert_eq!(app.players.len(), 2);
        let rex = app.players.iter().find(|p| p.name == "Rex").unwrap();
        assert_eq!(rex.breed, "Lab");
        assert_eq!(rex.status, "Available");
        assert_eq!(rex.image_url, "http://x/y.png");
    }

    #[test]
    fn blank_field_blocks_submit_without_gateway_calls() {
        let (backend, create_calls) = FlakyRoster::new(vec![player(1, "Maple")]);
        let mut app = App::new(Roster::new(backend));

        app.dispatch(Command::OpenForm);
        if let Mode::Form(form) = &mut app.mode {
            form.name = "Rex".to_string();
            // breed left empty
            form.status = "Available".to_string();
            form.image_url = "http://x/y.png".to_string();
        }
        app.dispatch(Command::Submit);

        assert_eq!(create_calls.get(), 0, "no gateway call on validation failure");
        match &app.mode {
            Mode::Form(form) => {
                assert!(form.error.is_some(), "validation message expected");
                assert!(!form.submitted, "a rejected submit must stay submittable");
            }
            _ => panic!("form must stay open on validation failure"),
        }
    }

    #[test]
    fn armed_submit_guard_swallows_duplicate_activation() {
        let (backend, create_calls) = FlakyRoster::new(Vec::new());
        let mut app = App::new(Roster::new(backend));

        app.dispatch(Command::OpenForm);
        if let Mode::Form(form) = &mut app.mode {
            form.name = "Rex".to_string();
            form.breed = "Lab".to_string();
            form.status = "Available".to_string();
            form.image_url = "http://x/y.png".to_string();
            form.submitted = true;
        }
        app.dispatch(Command::Submit);

        assert_eq!(create_calls.get(), 0, "guarded submit must not reach the gateway");
        assert!(
            matches!(&app.mode, Mode::Form(_)),
            "guarded submit must be a no-op"
        );
        assert_eq!(app.players.len(), 0);
    }

    #[test]
    fn detail_open_then_close_restores_all_cards() {
        let mut app = app_with(vec![player(1, "Maple"), player(2, "Ziggy")]);

        app.dispatch(Command::ViewDetails(PlayerId::new(2)));
        match &app.mode {
            Mode::Detail(p) => assert_eq!(p.name, "Ziggy"),
            _ => panic!("detail panel expected"),
        }

        app.dispatch(Command::CloseDetails);
        assert!(matches!(app.mode, Mode::Listing));
        assert_eq!(app.players.len(), 2);
    }

    #[test]
    fn detail_fetch_failure_stays_in_listing() {
        let mut app = app_with(vec![player(1, "Maple")]);

        app.dispatch(Command::ViewDetails(PlayerId::new(99)));

        assert!(matches!(app.mode, Mode::Listing));
        assert!(app.status.contains("99"));
    }

    #[test]
    fn second_open_form_keeps_the_first_instance() {
        let mut app = app_with(vec![player(1, "Maple")]);

        app.dispatch(Command::OpenForm);
        app.handle_form_edit(KeyCode::Char('R'));
        app.dispatch(Command::OpenForm);

        match &app.mode {
            Mode::Form(form) => assert_eq!(form.name, "R"),
            _ => panic!("form expected"),
        }
    }

    #[test]
    fn failed_listing_keeps_previous_working_set() {
        let (mut failing, _create_calls) = FlakyRoster::new(Vec::new());
        failing.fail_listing = true;
        let mut app = App::new(Roster::new(failing));
        app.players = vec![player(1, "Maple")];

        app.dispatch(Command::Refresh);

        assert_eq!(app.players.len(), 1, "failed fetch must not clear the view");
        assert!(app.status.contains("unavailable"));
    }

    #[test]
    fn form_mode_types_command_keys_instead_of_running_them() {
        let mut app = app_with(vec![player(1, "Maple")]);
        app.dispatch(Command::OpenForm);

        assert_eq!(app.command_for_key(KeyCode::Char('q')), None);
        app.handle_form_edit(KeyCode::Char('q'));

        assert!(!app.should_quit, "q must not quit while typing");
        match &app.mode {
            Mode::Form(form) => assert_eq!(form.name, "q"),
            _ => panic!("form expected"),
        }
    }

    #[test]
    fn selection_clamps_to_working_set() {
        let mut app = app_with(vec![player(1, "Maple"), player(2, "Ziggy")]);

        app.dispatch(Command::SelectNext);
        app.dispatch(Command::SelectNext);
        app.dispatch(Command::SelectNext);
        assert_eq!(app.selected, 1);

        app.dispatch(Command::Remove(PlayerId::new(2)));
        assert_eq!(app.selected, 0, "selection follows the shrunken roster");
    }
}
