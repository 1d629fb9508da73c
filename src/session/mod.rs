//! Edit session: the single owner of an animation while it is edited.
//!
//! Input handlers call into [`EditSession`]; every mutation is reflected on
//! the session's [`Surface`] right away (one cell for a paint, the whole grid
//! plus the frame counter for navigation).

mod input;
mod render;

pub use input::*;
pub use render::*;

use log::{debug, info, warn};

use crate::animation::{
    AnimationSource, PlaybackScheduler, PlaybackTicket, TickHandle, TickOutcome, format,
};
use crate::error::EditorError;
use crate::model::{Color, Coord, Frame, FrameStore, to_coord};
use crate::schema::{AnimationRecord, EditorConfig, PlaybackConfig, PlaybackSettings};

/// Result of dispatching a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Done,
    /// Playback started; the driver should schedule the first tick.
    Playing(PlaybackTicket),
    Stopped,
    /// Record ready to hand to a persistence collaborator.
    Saved(AnimationRecord),
}

/// Frames, cursor, paint color and copy buffer of one editing session.
pub struct EditSession<S: Surface> {
    title: String,
    store: FrameStore,
    color: Color,
    copy_buffer: Frame,
    renderer: Renderer,
    surface: S,
    pointer: PointerTracker,
    scheduler: PlaybackScheduler,
    playback: PlaybackConfig,
}

/// Decode wire data into a non-empty frame store.
fn decode_store(data: &str) -> Result<FrameStore, EditorError> {
    if let Some(anomaly) = format::inspect(data) {
        warn!("wire data is not a whole number of frames: {anomaly}");
    }
    FrameStore::new(format::decode(data))
}

impl<S: Surface> EditSession<S> {
    /// Start a session on a decoded record. Empty data is rejected before
    /// anything is drawn.
    pub fn new(
        record: &AnimationRecord,
        config: &EditorConfig,
        surface: S,
    ) -> Result<Self, EditorError> {
        config.validate()?;
        let store = decode_store(&record.data)?;
        Ok(Self::start(record.title.clone(), store, config, surface))
    }

    /// Start a session on a single background frame.
    pub fn blank(
        title: impl Into<String>,
        config: &EditorConfig,
        surface: S,
    ) -> Result<Self, EditorError> {
        config.validate()?;
        Ok(Self::start(title.into(), FrameStore::blank(), config, surface))
    }

    /// Fetch a record from `source`, then start a session on it.
    pub fn open<A: AnimationSource + ?Sized>(
        source: &A,
        id: &str,
        config: &EditorConfig,
        surface: S,
    ) -> Result<Self, EditorError> {
        let record = source.fetch(id).inspect_err(|e| warn!("load of {id} failed: {e}"))?;
        Self::new(&record, config, surface)
    }

    fn start(title: String, store: FrameStore, config: &EditorConfig, surface: S) -> Self {
        info!(
            "session started on {:?} with {} frames",
            title,
            store.frame_count()
        );
        let mut session = Self {
            title,
            store,
            color: config.initial_color,
            copy_buffer: Frame::blank(),
            renderer: Renderer::new(config),
            surface,
            pointer: PointerTracker::default(),
            scheduler: PlaybackScheduler::new(),
            playback: config.playback,
        };
        session.refresh();
        session
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn store(&self) -> &FrameStore {
        &self.store
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn selected_color(&self) -> Color {
        self.color
    }

    pub fn select_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Contents of the copy buffer.
    pub fn copy_buffer(&self) -> &Frame {
        &self.copy_buffer
    }

    /// Redraw the current frame and the frame counter.
    pub fn refresh(&mut self) {
        self.draw_current();
        self.surface.frame_label(&frame_label(
            self.store.cursor(),
            self.store.frame_count(),
        ));
    }

    fn draw_current(&mut self) {
        self.renderer
            .draw_frame(&mut self.surface, self.store.current_frame());
    }

    // ---------------------------------------------------------------------
    // Painting
    // ---------------------------------------------------------------------

    /// Paint one cell of the current frame with the selected color.
    pub fn paint_cell(&mut self, row: usize, col: usize) -> Result<(), EditorError> {
        let index = self.store.set_cell(row, col, self.color)?;
        self.renderer
            .draw_cell(&mut self.surface, to_coord(index), self.color);
        Ok(())
    }

    /// Begin a stroke and paint under the pointer.
    pub fn pointer_down(&mut self, pointer: PointerInput) -> Option<Coord> {
        self.pointer.press();
        self.pointer_move(pointer)
    }

    /// Paint under the pointer while a stroke is active. Returns the cell
    /// painted, if any.
    pub fn pointer_move(&mut self, pointer: PointerInput) -> Option<Coord> {
        if !self.pointer.is_pressed() {
            return None;
        }
        let coord = pointer.cell(self.renderer.cell_size())?;
        self.paint_cell(coord.row, coord.col).ok().map(|_| coord)
    }

    pub fn pointer_up(&mut self) {
        self.pointer.release();
    }

    pub fn is_stroke_active(&self) -> bool {
        self.pointer.is_pressed()
    }

    // ---------------------------------------------------------------------
    // Frame editing
    // ---------------------------------------------------------------------

    pub fn copy_current_frame(&mut self) {
        self.copy_buffer = self.store.current_frame().clone();
    }

    pub fn paste_into_current_frame(&mut self) {
        self.store.replace_current(self.copy_buffer.clone());
        self.draw_current();
    }

    pub fn clear_current_frame(&mut self) {
        self.store.clear_current();
        self.draw_current();
    }

    /// Remove the current frame. The only frame cannot be removed.
    pub fn delete_current_frame(&mut self) -> Result<(), EditorError> {
        self.store
            .delete_current()
            .inspect_err(|e| warn!("delete rejected: {e}"))?;
        self.refresh();
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Navigation
    // ---------------------------------------------------------------------

    pub fn first_frame(&mut self) {
        self.store.first_frame();
        self.after_navigation();
    }

    pub fn prev_frame(&mut self) {
        self.store.prev_frame();
        self.after_navigation();
    }

    /// Advance, growing the animation when past the last frame.
    pub fn next_frame(&mut self) {
        self.store.next_frame();
        self.after_navigation();
    }

    pub fn last_frame(&mut self) {
        self.store.last_frame();
        self.after_navigation();
    }

    fn after_navigation(&mut self) {
        debug!(
            "cursor at {} of {}",
            self.store.cursor(),
            self.store.frame_count()
        );
        self.refresh();
    }

    // ---------------------------------------------------------------------
    // Load / save
    // ---------------------------------------------------------------------

    /// Replace the whole animation from wire data. On failure the current
    /// animation is left untouched.
    pub fn load_animation(
        &mut self,
        title: impl Into<String>,
        data: &str,
    ) -> Result<(), EditorError> {
        let store = decode_store(data)?;
        self.scheduler.stop();
        self.store = store;
        self.title = title.into();
        info!(
            "loaded {:?} with {} frames",
            self.title,
            self.store.frame_count()
        );
        self.refresh();
        Ok(())
    }

    pub fn export_wire_string(&self) -> String {
        format::encode(self.store.frames())
    }

    pub fn to_record(&self) -> AnimationRecord {
        AnimationRecord::new(self.title.clone(), self.export_wire_string())
    }

    /// Store the animation as a new record in `source`.
    pub fn save_to<A: AnimationSource + ?Sized>(
        &self,
        source: &mut A,
    ) -> Result<String, EditorError> {
        Ok(source.create(&self.to_record())?)
    }

    // ---------------------------------------------------------------------
    // Playback
    // ---------------------------------------------------------------------

    /// Playback settings from the configuration.
    pub fn playback_config(&self) -> PlaybackConfig {
        self.playback
    }

    pub fn set_playback_config(&mut self, playback: PlaybackConfig) {
        self.playback = playback;
    }

    /// Stop any running playback and start from the first frame.
    pub fn play<P: PlaybackSettings + ?Sized>(&mut self, settings: &P) -> PlaybackTicket {
        self.scheduler.play(&mut self.store, settings)
    }

    /// Show the frame at the cursor and advance. Stale handles do nothing.
    pub fn tick<P: PlaybackSettings + ?Sized>(
        &mut self,
        handle: TickHandle,
        settings: &P,
    ) -> TickOutcome {
        let Self {
            scheduler,
            store,
            renderer,
            surface,
            ..
        } = self;
        scheduler.tick(handle, store, settings, |store| {
            renderer.draw_frame(&mut *surface, store.current_frame());
            surface.frame_label(&frame_label(store.cursor(), store.frame_count()));
        })
    }

    pub fn stop(&mut self) -> bool {
        self.scheduler.stop()
    }

    pub fn is_playing(&self) -> bool {
        self.scheduler.is_playing()
    }

    /// Play to the end on the calling thread, sleeping between ticks and
    /// handing the surface to `on_frame` after each one.
    ///
    /// With looping on, stops after `max_ticks` ticks (never, if `None`).
    /// Returns the number of frames shown.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn run_blocking<P, F>(
        &mut self,
        settings: &P,
        max_ticks: Option<usize>,
        mut on_frame: F,
    ) -> usize
    where
        P: PlaybackSettings + ?Sized,
        F: FnMut(&S),
    {
        let ticket = self.play(settings);
        let mut delay = ticket.delay;
        let mut shown = 0;
        loop {
            std::thread::sleep(delay);
            match self.tick(ticket.handle, settings) {
                TickOutcome::Continue(next) => {
                    shown += 1;
                    on_frame(&self.surface);
                    if max_ticks.is_some_and(|max| shown >= max) {
                        self.stop();
                        break;
                    }
                    delay = next;
                }
                TickOutcome::Finished => {
                    shown += 1;
                    on_frame(&self.surface);
                    break;
                }
                TickOutcome::Cancelled => break,
            }
        }
        shown
    }

    // ---------------------------------------------------------------------
    // Commands
    // ---------------------------------------------------------------------

    /// Dispatch a keyboard command. Play uses the configured settings.
    pub fn apply(&mut self, command: Command) -> Result<CommandOutcome, EditorError> {
        match command {
            Command::FirstFrame => self.first_frame(),
            Command::PreviousFrame => self.prev_frame(),
            Command::NextFrame => self.next_frame(),
            Command::LastFrame => self.last_frame(),
            Command::Clear => self.clear_current_frame(),
            Command::Copy => self.copy_current_frame(),
            Command::Paste => self.paste_into_current_frame(),
            Command::DeleteFrame => self.delete_current_frame()?,
            Command::Play => {
                let settings = self.playback;
                return Ok(CommandOutcome::Playing(self.play(&settings)));
            }
            Command::Stop => {
                self.stop();
                return Ok(CommandOutcome::Stopped);
            }
            Command::Save => return Ok(CommandOutcome::Saved(self.to_record())),
        }
        Ok(CommandOutcome::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::AnimationLibrary;
    use crate::error::FetchError;
    use crate::model::{CELL_COUNT, GRID_SIDE, to_index};
    use proptest::prelude::*;
    use std::time::Duration;
    use tempfile::tempdir;

    fn config() -> EditorConfig {
        EditorConfig::default()
    }

    fn two_frame_data() -> String {
        "0".repeat(CELL_COUNT) + &"1".repeat(CELL_COUNT)
    }

    fn session_with(data: &str) -> EditSession<TextSurface> {
        let record = AnimationRecord::new("Test", data);
        EditSession::new(&record, &config(), TextSurface::new(&config())).unwrap()
    }

    #[test]
    fn test_start_renders_first_frame() {
        let session = session_with(&two_frame_data());
        assert_eq!(session.title(), "Test");
        assert_eq!(session.surface().draw_calls(), CELL_COUNT);
        assert_eq!(session.surface().label(), "Frame 1 of 2");
        assert_eq!(session.selected_color(), Color::Medium);
        assert_eq!(session.copy_buffer(), &Frame::blank());
    }

    #[test]
    fn test_empty_data_rejected() {
        let record = AnimationRecord::new("Nothing", "");
        let result = EditSession::new(&record, &config(), TextSurface::new(&config()));
        assert!(matches!(result, Err(EditorError::EmptyAnimation)));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let bad = EditorConfig {
            cell_size: 0,
            ..config()
        };
        let result = EditSession::blank("x", &bad, TextSurface::new(&config()));
        assert!(matches!(result, Err(EditorError::Config(_))));
    }

    #[test]
    fn test_navigation_scenario() {
        let mut session = session_with(&two_frame_data());
        assert_eq!(session.store().frame(1), Some(&Frame::filled(Color::Light)));

        session.next_frame();
        assert_eq!(session.store().cursor(), 1);
        assert_eq!(session.store().frame_count(), 2);
        assert_eq!(session.surface().cell(Coord::new(7, 7)), Color::Light);

        session.next_frame();
        assert_eq!(session.store().cursor(), 2);
        assert_eq!(session.store().frame_count(), 3);
        assert_eq!(session.store().current_frame(), &Frame::blank());
        assert_eq!(session.surface().label(), "Frame 3 of 3");

        session.first_frame();
        session.prev_frame();
        assert_eq!(session.store().cursor(), 0);
        assert_eq!(session.surface().label(), "Frame 1 of 3");

        session.last_frame();
        assert_eq!(session.store().cursor(), 2);
    }

    #[test]
    fn test_paint_cell_draws_once() {
        let mut session = EditSession::blank("p", &config(), TextSurface::new(&config())).unwrap();
        session.surface_mut().reset_draw_calls();
        session.select_color(Color::Dark);
        session.paint_cell(4, 9).unwrap();

        assert_eq!(session.surface().draw_calls(), 1);
        assert_eq!(session.surface().cell(Coord::new(4, 9)), Color::Dark);

        let frame = session.store().current_frame();
        let painted = to_index(4, 9);
        for i in 0..CELL_COUNT {
            let expected = if i == painted { Color::Dark } else { Color::Background };
            assert_eq!(frame.get(i), expected);
        }
        assert_eq!(session.export_wire_string().chars().nth(painted), Some('3'));
    }

    #[test]
    fn test_paint_out_of_range() {
        let mut session = EditSession::blank("p", &config(), TextSurface::new(&config())).unwrap();
        assert!(matches!(
            session.paint_cell(16, 0),
            Err(EditorError::CellOutOfRange { .. })
        ));
    }

    #[test]
    fn test_pointer_stroke() {
        let mut session = EditSession::blank("p", &config(), TextSurface::new(&config())).unwrap();
        session.select_color(Color::Light);

        assert_eq!(session.pointer_move(PointerInput::new(5.0, 5.0)), None);
        assert_eq!(
            session.pointer_down(PointerInput::new(40.0, 20.0)),
            Some(Coord::new(1, 2))
        );
        assert!(session.is_stroke_active());
        assert_eq!(
            session.pointer_move(PointerInput::new(56.0, 20.0)),
            Some(Coord::new(1, 3))
        );
        assert_eq!(session.pointer_move(PointerInput::new(900.0, 20.0)), None);
        session.pointer_up();
        assert_eq!(session.pointer_move(PointerInput::new(72.0, 20.0)), None);

        let frame = session.store().current_frame();
        assert_eq!(frame.get(to_index(1, 2)), Color::Light);
        assert_eq!(frame.get(to_index(1, 3)), Color::Light);
        assert_eq!(frame.get(to_index(1, 4)), Color::Background);
    }

    #[test]
    fn test_copy_paste_survives_other_edits() {
        let mut session = EditSession::blank("c", &config(), TextSurface::new(&config())).unwrap();
        session.select_color(Color::Dark);
        session.paint_cell(0, 0).unwrap();
        session.paint_cell(15, 15).unwrap();
        let copied = session.store().current_frame().clone();
        session.copy_current_frame();

        // Edit the source frame after copying; the buffer is a value copy.
        session.paint_cell(8, 8).unwrap();

        session.next_frame();
        session.paint_cell(3, 3).unwrap();
        session.paste_into_current_frame();

        assert_eq!(session.store().current_frame(), &copied);
        assert_eq!(session.surface().cell(Coord::new(15, 15)), Color::Dark);
        assert_eq!(session.surface().cell(Coord::new(3, 3)), Color::Background);
        assert_eq!(session.store().frame(0).unwrap().get(to_index(8, 8)), Color::Dark);
    }

    #[test]
    fn test_clear_current_frame() {
        let mut session = session_with(&two_frame_data());
        session.next_frame();
        session.clear_current_frame();
        assert_eq!(session.store().current_frame(), &Frame::blank());
        assert_eq!(session.surface().cell(Coord::new(0, 0)), Color::Background);
        assert_eq!(session.export_wire_string(), "0".repeat(2 * CELL_COUNT));
    }

    #[test]
    fn test_delete_frames() {
        let mut session = session_with(&two_frame_data());
        session.delete_current_frame().unwrap();
        assert_eq!(session.store().frame_count(), 1);
        assert_eq!(session.surface().label(), "Frame 1 of 1");
        assert_eq!(session.surface().cell(Coord::new(0, 0)), Color::Light);

        assert!(matches!(
            session.delete_current_frame(),
            Err(EditorError::EmptyAnimation)
        ));
        assert_eq!(session.store().frame_count(), 1);
    }

    #[test]
    fn test_load_animation() {
        let mut session =
            EditSession::blank("old", &config(), TextSurface::new(&config())).unwrap();
        session.next_frame();
        session.load_animation("new", &"2".repeat(CELL_COUNT * 3)).unwrap();

        assert_eq!(session.title(), "new");
        assert_eq!(session.store().cursor(), 0);
        assert_eq!(session.store().frame_count(), 3);
        assert_eq!(session.surface().cell(Coord::new(9, 9)), Color::Medium);

        assert!(matches!(
            session.load_animation("empty", ""),
            Err(EditorError::EmptyAnimation)
        ));
        assert_eq!(session.title(), "new");
        assert_eq!(session.store().frame_count(), 3);
    }

    #[test]
    fn test_short_tail_padded_on_render() {
        let data = "1".repeat(CELL_COUNT) + "33";
        let mut session = session_with(&data);
        session.last_frame();
        assert_eq!(session.surface().cell(Coord::new(0, 1)), Color::Dark);
        assert_eq!(session.surface().cell(Coord::new(0, 2)), Color::Background);
        assert_eq!(session.export_wire_string(), data);
    }

    #[test]
    fn test_append_after_short_tail_keeps_frames_aligned() {
        let data = "1".repeat(CELL_COUNT) + "33";
        let mut session = session_with(&data);
        session.last_frame();
        session.next_frame();
        session.select_color(Color::Dark);
        session.paint_cell(0, 0).unwrap();

        let exported = session.export_wire_string();
        assert_eq!(exported.len(), 3 * CELL_COUNT);

        let frames = format::decode(&exported);
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[1].get(1), Color::Dark);
        assert_eq!(frames[1].get(2), Color::Background);
        assert_eq!(frames[2].get(0), Color::Dark);
    }

    #[test]
    fn test_paste_short_frame_into_earlier_slot() {
        let data = "2".repeat(CELL_COUNT) + &"1".repeat(CELL_COUNT) + "3";
        let mut session = session_with(&data);
        session.last_frame();
        session.copy_current_frame();
        session.first_frame();
        session.paste_into_current_frame();

        let exported = session.export_wire_string();
        assert_eq!(exported.len(), 2 * CELL_COUNT + 1);

        let frames = format::decode(&exported);
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].get(0), Color::Dark);
        assert_eq!(frames[0].get(1), Color::Background);
        assert_eq!(frames[1], Frame::filled(Color::Light));
        assert_eq!(frames[2].len(), 1);
    }

    #[derive(Debug, Clone)]
    enum Edit {
        First,
        Prev,
        Next,
        Last,
        Paint(usize, usize, u8),
        Copy,
        Paste,
        Clear,
        Delete,
    }

    fn edit_strategy() -> impl Strategy<Value = Edit> {
        prop_oneof![
            Just(Edit::First),
            Just(Edit::Prev),
            Just(Edit::Next),
            Just(Edit::Last),
            (0..GRID_SIDE, 0..GRID_SIDE, 0u8..4).prop_map(|(r, c, k)| Edit::Paint(r, c, k)),
            Just(Edit::Copy),
            Just(Edit::Paste),
            Just(Edit::Clear),
            Just(Edit::Delete),
        ]
    }

    fn perform(session: &mut EditSession<TextSurface>, edit: Edit) {
        match edit {
            Edit::First => session.first_frame(),
            Edit::Prev => session.prev_frame(),
            Edit::Next => session.next_frame(),
            Edit::Last => session.last_frame(),
            Edit::Paint(row, col, color) => {
                session.select_color(Color::from_index(color));
                session.paint_cell(row, col).unwrap();
            }
            Edit::Copy => session.copy_current_frame(),
            Edit::Paste => session.paste_into_current_frame(),
            Edit::Clear => session.clear_current_frame(),
            // Deleting the only frame is rejected and leaves the store as is.
            Edit::Delete => {
                let _ = session.delete_current_frame();
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_export_reloads_same_cells(
            data in "[0-3]{1,700}",
            edits in proptest::collection::vec(edit_strategy(), 0..32),
        ) {
            let mut session = session_with(&data);
            for edit in edits {
                perform(&mut session, edit);
            }

            let reloaded = format::decode(&session.export_wire_string());
            let frames = session.store().frames();
            prop_assert_eq!(reloaded.len(), frames.len());
            for (i, (got, want)) in reloaded.iter().zip(frames).enumerate() {
                for cell in 0..CELL_COUNT {
                    prop_assert_eq!(got.get(cell), want.get(cell), "frame {} cell {}", i, cell);
                }
            }
        }
    }

    #[test]
    fn test_playback_scenario() {
        let data = "1".repeat(CELL_COUNT) + &"2".repeat(CELL_COUNT) + &"3".repeat(CELL_COUNT);
        let mut session = session_with(&data);
        session.last_frame();
        let settings = PlaybackConfig {
            delay_ms: 0,
            looping: false,
        };

        let ticket = session.play(&settings);
        assert_eq!(ticket.delay, Duration::ZERO);
        assert_eq!(session.store().cursor(), 0);

        let mut labels = Vec::new();
        loop {
            let outcome = session.tick(ticket.handle, &settings);
            labels.push(session.surface().label().to_string());
            if outcome != TickOutcome::Continue(Duration::ZERO) {
                assert_eq!(outcome, TickOutcome::Finished);
                break;
            }
        }
        assert_eq!(labels, vec!["Frame 1 of 3", "Frame 2 of 3", "Frame 3 of 3"]);
        assert!(!session.is_playing());
        assert_eq!(session.surface().cell(Coord::new(0, 0)), Color::Dark);
    }

    #[test]
    fn test_run_blocking_once_and_looping() {
        let data = "1".repeat(CELL_COUNT) + &"2".repeat(CELL_COUNT);
        let mut session = session_with(&data);
        let once = PlaybackConfig {
            delay_ms: 0,
            looping: false,
        };
        let mut labels = Vec::new();
        let shown = session.run_blocking(&once, None, |s| labels.push(s.label().to_string()));
        assert_eq!(shown, 2);
        assert_eq!(labels, vec!["Frame 1 of 2", "Frame 2 of 2"]);

        let looping = PlaybackConfig {
            delay_ms: 0,
            looping: true,
        };
        assert_eq!(session.run_blocking(&looping, Some(5), |_| {}), 5);
        assert!(!session.is_playing());
    }

    #[test]
    fn test_apply_commands() {
        let mut session = session_with(&two_frame_data());
        assert_eq!(
            session.apply(Command::NextFrame).unwrap(),
            CommandOutcome::Done
        );
        assert_eq!(session.store().cursor(), 1);

        match session.apply(Command::Play).unwrap() {
            CommandOutcome::Playing(ticket) => {
                assert_eq!(ticket.delay, Duration::from_millis(325));
            }
            other => panic!("expected playback, got {other:?}"),
        }
        assert!(session.is_playing());
        assert_eq!(session.apply(Command::Stop).unwrap(), CommandOutcome::Stopped);
        assert!(!session.is_playing());

        match session.apply(Command::Save).unwrap() {
            CommandOutcome::Saved(record) => assert_eq!(record.data, two_frame_data()),
            other => panic!("expected record, got {other:?}"),
        }

        session.apply(Command::DeleteFrame).unwrap();
        assert!(session.apply(Command::DeleteFrame).is_err());
    }

    #[test]
    fn test_open_and_save_through_library() {
        let dir = tempdir().unwrap();
        let mut library = AnimationLibrary::open(dir.path()).unwrap();
        let id = library
            .create(&AnimationRecord::new("Stored", two_frame_data()))
            .unwrap();

        let mut session =
            EditSession::open(&library, &id, &config(), TextSurface::new(&config())).unwrap();
        assert_eq!(session.title(), "Stored");
        assert_eq!(session.store().frame_count(), 2);

        session.next_frame();
        session.next_frame();
        let new_id = session.save_to(&mut library).unwrap();
        assert_ne!(new_id, id);
        assert_eq!(
            library.fetch(&new_id).unwrap().data.len(),
            3 * CELL_COUNT
        );
    }

    #[test]
    fn test_open_missing_fails() {
        let dir = tempdir().unwrap();
        let library = AnimationLibrary::open(dir.path()).unwrap();
        let result = EditSession::open(&library, "missing", &config(), TextSurface::new(&config()));
        assert!(matches!(
            result,
            Err(EditorError::Fetch(FetchError::NotFound(_)))
        ));
    }
}
