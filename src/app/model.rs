//! Application model: `App` and the user-facing `Action`s.
//!
//! Core operations return `Result`s; this is the layer that decides how a
//! failure is shown (a queued [`Notice`]).

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::audio::{Engine, PlaybackError};
use crate::config::{ConfigStore, Configuration};
use crate::library::{self, Catalog, CatalogError, Track};
use crate::playback::{Controller, PlaybackEvent};

use super::chooser::Chooser;
use super::notice::Notice;
use super::visualizer::Visualizer;

/// Something the user asked for from the main screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Play,
    Stop,
    Rewind,
    Next,
    /// Open the "Choose a Jam!" list.
    Choose,
    /// Open the media-folder prompt.
    ChangeFolder,
    Quit,
}

/// The main application model.
pub struct App<E: Engine> {
    pub config: Configuration,
    pub store: ConfigStore,
    pub catalog: Catalog,
    pub player: Controller<E>,
    /// Cover image for the current track, if any.
    pub cover: Option<PathBuf>,
    pub chooser: Option<Chooser>,
    /// Text being edited in the media-folder prompt.
    pub folder_prompt: Option<String>,
    pub visualizer: Visualizer,
    notices: VecDeque<Notice>,
}

impl<E: Engine> App<E> {
    pub fn new(
        config: Configuration,
        store: ConfigStore,
        catalog: Catalog,
        player: Controller<E>,
    ) -> Self {
        let mut app = Self {
            config,
            store,
            catalog,
            player,
            cover: None,
            chooser: None,
            folder_prompt: None,
            visualizer: Visualizer::default(),
            notices: VecDeque::new(),
        };
        app.refresh_cover();
        app
    }

    /// Run `action`. Returns `false` once the user asked to quit.
    pub fn perform(&mut self, action: Action) -> bool {
        debug!(?action, "action");
        match action {
            Action::Play => {
                let result = self.player.play(&self.catalog);
                self.report_playback(result);
            }
            Action::Stop => self.player.stop(),
            Action::Rewind => {
                let result = self.player.rewind(&self.catalog);
                self.report_playback(result);
            }
            Action::Next => {
                let result = self.player.next(&self.catalog);
                self.report_playback(result);
                self.refresh_cover();
            }
            Action::Choose => self.open_chooser(),
            Action::ChangeFolder => self.open_folder_prompt(),
            Action::Quit => return false,
        }
        true
    }

    /// Track currently selected in the controller.
    pub fn current_track(&self) -> Option<&Track> {
        self.player.current().and_then(|i| self.catalog.track(i))
    }

    /// Deliver engine events and advance the visualizer.
    pub fn tick<R: Rng>(&mut self, now: Instant, rng: &mut R) {
        if let Some(PlaybackEvent::Finished { index }) = self.player.poll() {
            debug!(index, "end of stream");
        }
        if self.player.timer_mut().fire(now) {
            self.visualizer.reshuffle(rng);
        }
    }

    pub fn refresh_cover(&mut self) {
        self.cover = library::resolve(
            self.player.current(),
            &self.catalog.covers,
            Path::new(self.config.media_folder()),
        );
    }

    // Chooser

    pub fn open_chooser(&mut self) {
        self.chooser = Some(Chooser::new(self.catalog.display_names()));
    }

    pub fn cancel_chooser(&mut self) {
        self.chooser = None;
    }

    /// Play the name under the chooser cursor and close the chooser.
    pub fn choose_selected(&mut self) {
        let Some(chooser) = self.chooser.take() else {
            return;
        };
        let Some(name) = chooser.selected_name() else {
            return;
        };
        let result = self.player.select(&self.catalog, name).map(|_| ());
        self.report_playback(result);
        self.refresh_cover();
    }

    // Media-folder prompt

    pub fn open_folder_prompt(&mut self) {
        self.folder_prompt = Some(self.config.media_folder().to_string());
    }

    pub fn cancel_folder_prompt(&mut self) {
        self.folder_prompt = None;
    }

    pub fn push_prompt_char(&mut self, c: char) {
        if let Some(input) = self.folder_prompt.as_mut() {
            input.push(c);
        }
    }

    pub fn pop_prompt_char(&mut self) {
        if let Some(input) = self.folder_prompt.as_mut() {
            input.pop();
        }
    }

    /// Switch to the folder typed into the prompt; failures become notices.
    pub fn submit_folder_prompt(&mut self) {
        let Some(input) = self.folder_prompt.take() else {
            return;
        };
        let folder = input.trim();
        if folder.is_empty() {
            return;
        }
        if let Err(e) = self.change_folder(folder) {
            warn!("media folder change rejected: {e}");
            self.notify(Notice::error("Media folder", e.to_string()));
        }
    }

    /// Scan `folder` and, if it holds tracks, make it the media folder.
    ///
    /// On success playback is released, the configuration is saved and the
    /// cover refreshed. On failure nothing changes.
    pub fn change_folder(&mut self, folder: &str) -> Result<(), CatalogError> {
        let catalog = library::scan(Path::new(folder))?;

        self.player.release();
        self.catalog = catalog;
        self.config.set_media_folder(folder);
        info!(folder, tracks = self.catalog.len(), "media folder changed");

        if let Err(e) = self.store.save(&self.config) {
            warn!("failed to save configuration: {e}");
            self.notify(Notice::error(
                "Configuration",
                format!("Error saving config: {e}"),
            ));
        }
        self.refresh_cover();
        Ok(())
    }

    // Notices

    pub fn notify(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }

    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
    }

    fn report_playback(&mut self, result: Result<(), PlaybackError>) {
        let Err(e) = result else {
            return;
        };
        warn!("playback failed: {e}");
        let message = if e.is_no_selection() {
            "No track selected yet. Press [n] for the next track or [c] to choose a jam."
                .to_string()
        } else {
            format!("Error playing audio: {e}")
        };
        self.notify(Notice::error("Playback", message));
    }
}
